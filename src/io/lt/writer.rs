use std::io::Write;

use crate::io::error::Error;
use crate::io::util::fmt_param;
use crate::model::template::MoleculeTemplate;

/// Writes a molecule template as a moltemplate block.
///
/// Placeholder ids stay templated: `$atom:<id>` and `$mol:.` are resolved
/// later by the external template-expansion tool. Per-type declarations go
/// into `write_once` blocks so repeated instantiation emits them once.
pub fn write<W: Write>(mut writer: W, template: &MoleculeTemplate) -> Result<(), Error> {
    crate::template::validate(template)?;

    writeln!(writer, "{} {{", template.name)?;

    writeln!(writer, "  write(\"Data Atoms\") {{")?;
    for site in &template.sites {
        writeln!(
            writer,
            "    $atom:{} $mol:. @atom:{} {} {} {} {}",
            site.id,
            site.type_tag,
            fmt_param(site.charge),
            fmt_param(site.position[0]),
            fmt_param(site.position[1]),
            fmt_param(site.position[2]),
        )?;
    }
    writeln!(writer, "  }}")?;

    writeln!(writer)?;
    writeln!(writer, "  write_once(\"Data Masses\") {{")?;
    for tag in mass_order(template) {
        writeln!(writer, "    @atom:{} {}", tag, fmt_param(template.masses[tag]))?;
    }
    writeln!(writer, "  }}")?;

    if !template.pair_coeffs.is_empty() || !template.groups.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "  write_once(\"In Settings\") {{")?;
        for coeff in &template.pair_coeffs {
            let mut line = format!("    pair_coeff @atom:{} @atom:{}", coeff.type_i, coeff.type_j);
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
        for group in &template.groups {
            let types = group
                .types
                .iter()
                .map(|tag| format!("@atom:{tag}"))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(writer, "    group {} type {}", group.name, types)?;
        }
        writeln!(writer, "  }}")?;
    }

    writeln!(writer, "}}")?;
    Ok(())
}

/// Site-order types first, then mass entries for types no site uses.
fn mass_order(template: &MoleculeTemplate) -> Vec<&str> {
    let mut order = template.type_tags();
    for tag in template.masses.keys() {
        if !order.contains(&tag.as_str()) {
            order.push(tag);
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::default_library;

    fn render(template: &MoleculeTemplate) -> String {
        let mut buf = Vec::new();
        write(&mut buf, template).expect("write lt");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn solvent_block_matches_the_source_fragment() {
        let solvent = default_library().get("Solvent").unwrap();
        let out = render(solvent);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Solvent {");
        assert_eq!(lines[1], "  write(\"Data Atoms\") {");
        assert_eq!(lines[2], "    $atom:a $mol:. @atom:S 0.0 0.0 0.0 0.0");
        assert_eq!(lines[3], "  }");
        assert!(lines.contains(&"  write_once(\"Data Masses\") {"));
        assert!(lines.contains(&"    @atom:S 10.0"));
        assert!(lines.contains(&"  write_once(\"In Settings\") {"));
        assert!(lines.contains(&"    pair_coeff @atom:S @atom:S 0.6 3.0 7.5"));
        assert!(lines.contains(&"    group groupS type @atom:S"));
        assert_eq!(*lines.last().unwrap(), "}");
    }

    #[test]
    fn settings_block_is_skipped_when_empty() {
        use crate::model::site::Site;

        let mut template = MoleculeTemplate::new("Bead");
        template
            .sites
            .push(Site::new("b", "B", 0.0, [0.0, 0.0, 0.0]));
        template.masses.insert("B".into(), 1.0);

        let out = render(&template);
        assert!(!out.contains("In Settings"));
        assert!(out.contains("Data Masses"));
    }

    #[test]
    fn pair_style_name_precedes_the_parameters() {
        use crate::model::coeffs::{LjParams, PairCoeff};
        use crate::model::site::Site;

        let mut template = MoleculeTemplate::new("Bead");
        template
            .sites
            .push(Site::new("b", "B", 0.0, [0.0, 0.0, 0.0]));
        template.masses.insert("B".into(), 1.0);
        let mut coeff = PairCoeff::new("B", "B", LjParams::new(0.25, 2.0));
        coeff.style = Some("lj/cut/long".into());
        template.pair_coeffs.push(coeff);

        let out = render(&template);
        assert!(out.contains("pair_coeff @atom:B @atom:B lj/cut/long 0.25 2.0"));
    }

    #[test]
    fn refuses_non_finite_mass_for_unused_type() {
        use crate::model::site::Site;

        let mut template = MoleculeTemplate::new("Bead");
        template
            .sites
            .push(Site::new("b", "B", 0.0, [0.0, 0.0, 0.0]));
        template.masses.insert("B".into(), 1.0);
        template.masses.insert("X".into(), f64::NAN);

        let err = write(Vec::new(), &template).unwrap_err();
        assert!(matches!(err, Error::Inconsistent(_)));
    }

    #[test]
    fn refuses_group_without_types() {
        use crate::model::site::Site;
        use crate::model::template::GroupAssignment;

        let mut template = MoleculeTemplate::new("Bead");
        template
            .sites
            .push(Site::new("b", "B", 0.0, [0.0, 0.0, 0.0]));
        template.masses.insert("B".into(), 1.0);
        template.groups.push(GroupAssignment::new("g", Vec::new()));

        let err = write(Vec::new(), &template).unwrap_err();
        assert!(matches!(err, Error::Inconsistent(_)));
    }

    #[test]
    fn invalid_template_is_rejected_before_writing() {
        let template = MoleculeTemplate::new("Empty");
        let err = write(Vec::new(), &template).unwrap_err();
        assert!(matches!(err, Error::Inconsistent(_)));
    }
}
