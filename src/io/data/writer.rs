use std::io::Write;

use crate::io::error::Error;
use crate::io::util::fmt_param;
use crate::model::records::DataFragment;

/// Writes the instantiated data-file sections: `Masses`, then `Atoms`.
///
/// Field order in the `Atoms` section is fixed by the consuming engine:
/// atom-id, molecule-id, type, charge, x, y, z.
pub fn write<W: Write>(mut writer: W, fragment: &DataFragment) -> Result<(), Error> {
    check_type_ids(fragment)?;

    writeln!(writer, "Masses")?;
    writeln!(writer)?;
    for mass in &fragment.masses {
        writeln!(writer, "{} {}", mass.type_id, fmt_param(mass.mass))?;
    }

    writeln!(writer)?;
    writeln!(writer, "Atoms")?;
    writeln!(writer)?;
    for atom in &fragment.atoms {
        writeln!(
            writer,
            "{} {} {} {} {} {} {}",
            atom.atom_id,
            atom.molecule_id,
            atom.type_id,
            fmt_param(atom.charge),
            fmt_param(atom.position[0]),
            fmt_param(atom.position[1]),
            fmt_param(atom.position[2]),
        )?;
    }

    Ok(())
}

/// Writes the instantiated settings lines: `pair_coeff` entries followed by
/// `group` directives, with numeric type ids in place of tags.
pub fn write_settings<W: Write>(mut writer: W, fragment: &DataFragment) -> Result<(), Error> {
    check_type_ids(fragment)?;

    for coeff in &fragment.pair_coeffs {
        let mut line = format!("pair_coeff {} {}", coeff.type_i, coeff.type_j);
        if let Some(style) = &coeff.style {
            line.push(' ');
            line.push_str(style);
        }
        line.push(' ');
        line.push_str(&fmt_param(coeff.params.epsilon));
        line.push(' ');
        line.push_str(&fmt_param(coeff.params.sigma));
        if let Some(cutoff) = coeff.params.cutoff {
            line.push(' ');
            line.push_str(&fmt_param(cutoff));
        }
        writeln!(writer, "{}", line)?;
    }

    for group in &fragment.groups {
        let ids = group
            .type_ids
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "group {} type {}", group.name, ids)?;
    }

    Ok(())
}

fn check_type_ids(fragment: &DataFragment) -> Result<(), Error> {
    let max = fragment.type_count();
    let in_range = |id: usize| id >= 1 && id <= max;

    if let Some(atom) = fragment.atoms.iter().find(|a| !in_range(a.type_id)) {
        return Err(Error::Inconsistent(format!(
            "atom {} references type id {} beyond the {} declared types",
            atom.atom_id, atom.type_id, max
        )));
    }
    if fragment.masses.iter().any(|m| !in_range(m.type_id)) {
        return Err(Error::Inconsistent("mass record type id out of range".into()));
    }
    let coeff_ids_ok = fragment
        .pair_coeffs
        .iter()
        .all(|c| in_range(c.type_i) && in_range(c.type_j));
    if !coeff_ids_ok {
        return Err(Error::Inconsistent("pair_coeff type id out of range".into()));
    }
    let group_ids_ok = fragment
        .groups
        .iter()
        .all(|g| g.type_ids.iter().all(|&id| in_range(id)));
    if !group_ids_ok {
        return Err(Error::Inconsistent("group type id out of range".into()));
    }

    Ok(())
}
