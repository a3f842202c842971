use super::error::Error;
use crate::model::records::{
    AtomRecord, DataFragment, GroupRecord, MassRecord, PairCoeffRecord,
};
use crate::model::template::MoleculeTemplate;

/// Controls how placeholder ids are resolved to concrete ones.
#[derive(Debug, Clone)]
pub struct InstantiateConfig {
    /// Number of molecules to stamp out.
    pub copies: usize,
    /// Atom id assigned to the first emitted atom (ids are sequential).
    pub start_atom_id: usize,
    /// Molecule id assigned to the first copy (one id per copy).
    pub start_molecule_id: usize,
}

impl Default for InstantiateConfig {
    fn default() -> Self {
        Self {
            copies: 1,
            start_atom_id: 1,
            start_molecule_id: 1,
        }
    }
}

/// Resolves a template into concrete data-file records.
///
/// Atom rows are repeated per copy with fresh atom and molecule ids.
/// Masses, pair coefficients, and group directives are per atom type and
/// appear exactly once no matter how many copies are requested.
pub fn instantiate(
    template: &MoleculeTemplate,
    config: &InstantiateConfig,
) -> Result<DataFragment, Error> {
    super::validate(template)?;

    if config.copies == 0 {
        return Err(Error::ZeroCopies);
    }

    let type_labels: Vec<String> = template
        .type_tags()
        .into_iter()
        .map(str::to_string)
        .collect();

    // 1-based, in first-appearance order over the sites.
    let type_id = |tag: &str| -> usize {
        type_labels
            .iter()
            .position(|label| label == tag)
            .map(|idx| idx + 1)
            .expect("validated type tag must be present")
    };

    let masses = type_labels
        .iter()
        .map(|label| MassRecord {
            type_id: type_id(label),
            mass: template.masses[label],
        })
        .collect();

    let pair_coeffs = template
        .pair_coeffs
        .iter()
        .map(|coeff| PairCoeffRecord {
            type_i: type_id(&coeff.type_i),
            type_j: type_id(&coeff.type_j),
            style: coeff.style.clone(),
            params: coeff.params.clone(),
        })
        .collect();

    let groups = template
        .groups
        .iter()
        .map(|group| GroupRecord {
            name: group.name.clone(),
            type_ids: group.types.iter().map(|tag| type_id(tag)).collect(),
        })
        .collect();

    let mut atoms = Vec::with_capacity(config.copies * template.site_count());
    let mut next_atom_id = config.start_atom_id;
    for copy in 0..config.copies {
        let molecule_id = config.start_molecule_id + copy;
        for site in &template.sites {
            atoms.push(AtomRecord {
                atom_id: next_atom_id,
                molecule_id,
                type_id: type_id(&site.type_tag),
                charge: site.charge,
                position: site.position,
            });
            next_atom_id += 1;
        }
    }

    Ok(DataFragment {
        type_labels,
        atoms,
        masses,
        pair_coeffs,
        groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::default_library;

    fn solvent() -> MoleculeTemplate {
        default_library().get("Solvent").unwrap().clone()
    }

    #[test]
    fn single_copy_resolves_placeholders() {
        let fragment = instantiate(&solvent(), &InstantiateConfig::default()).unwrap();

        assert_eq!(fragment.type_labels, vec!["S".to_string()]);
        assert_eq!(fragment.atom_count(), 1);

        let atom = &fragment.atoms[0];
        assert_eq!(atom.atom_id, 1);
        assert_eq!(atom.molecule_id, 1);
        assert_eq!(atom.type_id, 1);
        assert_eq!(atom.charge, 0.0);
        assert_eq!(atom.position, [0.0, 0.0, 0.0]);

        assert_eq!(fragment.masses.len(), 1);
        assert_eq!(fragment.masses[0].type_id, 1);
        assert_eq!(fragment.masses[0].mass, 10.0);

        assert_eq!(fragment.pair_coeffs.len(), 1);
        let coeff = &fragment.pair_coeffs[0];
        assert_eq!((coeff.type_i, coeff.type_j), (1, 1));
        assert_eq!(coeff.params.epsilon, 0.60);
        assert_eq!(coeff.params.sigma, 3.0);
        assert_eq!(coeff.params.cutoff, Some(7.5));

        assert_eq!(fragment.groups.len(), 1);
        assert_eq!(fragment.groups[0].name, "groupS");
        assert_eq!(fragment.groups[0].type_ids, vec![1]);
    }

    #[test]
    fn copies_repeat_atoms_but_not_type_records() {
        let config = InstantiateConfig {
            copies: 3,
            ..InstantiateConfig::default()
        };
        let fragment = instantiate(&solvent(), &config).unwrap();

        assert_eq!(fragment.atom_count(), 3);
        assert_eq!(fragment.molecule_count(), 3);
        let atom_ids: Vec<usize> = fragment.atoms.iter().map(|a| a.atom_id).collect();
        assert_eq!(atom_ids, vec![1, 2, 3]);
        let mol_ids: Vec<usize> = fragment.atoms.iter().map(|a| a.molecule_id).collect();
        assert_eq!(mol_ids, vec![1, 2, 3]);

        // write_once semantics
        assert_eq!(fragment.masses.len(), 1);
        assert_eq!(fragment.pair_coeffs.len(), 1);
        assert_eq!(fragment.groups.len(), 1);
    }

    #[test]
    fn honors_starting_ids() {
        let config = InstantiateConfig {
            copies: 2,
            start_atom_id: 100,
            start_molecule_id: 7,
        };
        let fragment = instantiate(&solvent(), &config).unwrap();
        assert_eq!(fragment.atoms[0].atom_id, 100);
        assert_eq!(fragment.atoms[1].atom_id, 101);
        assert_eq!(fragment.atoms[0].molecule_id, 7);
        assert_eq!(fragment.atoms[1].molecule_id, 8);
    }

    #[test]
    fn zero_copies_is_an_error() {
        let config = InstantiateConfig {
            copies: 0,
            ..InstantiateConfig::default()
        };
        let err = instantiate(&solvent(), &config).unwrap_err();
        assert!(matches!(err, Error::ZeroCopies));
    }

    #[test]
    fn empty_template_is_rejected() {
        let template = MoleculeTemplate::new("Empty");
        let err = instantiate(&template, &InstantiateConfig::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyTemplate { .. }));
    }

    #[test]
    fn type_ids_follow_site_order_not_alphabetical() {
        use crate::model::site::Site;

        let mut template = MoleculeTemplate::new("Pair");
        template
            .sites
            .push(Site::new("a", "Z", 0.0, [0.0, 0.0, 0.0]));
        template
            .sites
            .push(Site::new("b", "A", 0.0, [1.0, 0.0, 0.0]));
        template.masses.insert("Z".into(), 2.0);
        template.masses.insert("A".into(), 1.0);

        let fragment = instantiate(&template, &InstantiateConfig::default()).unwrap();
        assert_eq!(fragment.type_labels, vec!["Z".to_string(), "A".to_string()]);
        assert_eq!(fragment.atoms[0].type_id, 1);
        assert_eq!(fragment.atoms[1].type_id, 2);
        assert_eq!(fragment.masses[0].mass, 2.0);
        assert_eq!(fragment.masses[1].mass, 1.0);
    }
}
