mod error;
mod instantiate;
mod library;

pub use error::Error;
pub use instantiate::{InstantiateConfig, instantiate};
pub use library::{TemplateLibrary, default_library, load_library};

use std::collections::HashSet;

use crate::model::template::MoleculeTemplate;

/// Checks the structural invariants every template must satisfy before it
/// can be written out or instantiated.
pub fn validate(template: &MoleculeTemplate) -> Result<(), Error> {
    if template.sites.is_empty() {
        return Err(Error::EmptyTemplate {
            template: template.name.clone(),
        });
    }

    let mut seen_ids = HashSet::new();
    for site in &template.sites {
        if !seen_ids.insert(site.id.as_str()) {
            return Err(Error::DuplicateSiteId {
                template: template.name.clone(),
                id: site.id.clone(),
            });
        }
        if !site.charge.is_finite() {
            return Err(Error::non_finite(
                &template.name,
                format!("charge of site '{}'", site.id),
            ));
        }
        if site.position.iter().any(|c| !c.is_finite()) {
            return Err(Error::non_finite(
                &template.name,
                format!("position of site '{}'", site.id),
            ));
        }
    }

    let known_types: HashSet<&str> = template.type_tags().into_iter().collect();

    // Every mass entry is emitted, including ones for types no site uses.
    for (tag, mass) in &template.masses {
        if !mass.is_finite() {
            return Err(Error::non_finite(
                &template.name,
                format!("mass of type '{tag}'"),
            ));
        }
    }

    for tag in &known_types {
        if !template.masses.contains_key(*tag) {
            return Err(Error::MissingMass {
                template: template.name.clone(),
                type_tag: tag.to_string(),
            });
        }
    }

    for coeff in &template.pair_coeffs {
        for tag in [&coeff.type_i, &coeff.type_j] {
            if !known_types.contains(tag.as_str()) {
                return Err(Error::unknown_type(&template.name, tag, "pair_coeff"));
            }
        }
        let finite = coeff.params.epsilon.is_finite()
            && coeff.params.sigma.is_finite()
            && coeff.params.cutoff.map_or(true, f64::is_finite);
        if !finite {
            return Err(Error::non_finite(
                &template.name,
                format!("pair_coeff {} {}", coeff.type_i, coeff.type_j),
            ));
        }
    }

    for group in &template.groups {
        if group.types.is_empty() {
            return Err(Error::EmptyGroup {
                template: template.name.clone(),
                name: group.name.clone(),
            });
        }
        for tag in &group.types {
            if !known_types.contains(tag.as_str()) {
                return Err(Error::unknown_type(&template.name, tag, "group"));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::coeffs::{LjParams, PairCoeff};
    use crate::model::site::Site;
    use crate::model::template::GroupAssignment;

    fn bead() -> MoleculeTemplate {
        let mut template = MoleculeTemplate::new("Bead");
        template
            .sites
            .push(Site::new("a", "B", 0.0, [0.0, 0.0, 0.0]));
        template.masses.insert("B".into(), 1.0);
        template
    }

    #[test]
    fn accepts_a_minimal_template() {
        assert!(validate(&bead()).is_ok());
    }

    #[test]
    fn rejects_duplicate_site_ids() {
        let mut template = bead();
        template
            .sites
            .push(Site::new("a", "B", 0.0, [1.0, 0.0, 0.0]));
        let err = validate(&template).unwrap_err();
        assert!(matches!(err, Error::DuplicateSiteId { .. }));
    }

    #[test]
    fn rejects_pair_coeff_with_unknown_type() {
        let mut template = bead();
        template
            .pair_coeffs
            .push(PairCoeff::new("B", "X", LjParams::new(1.0, 1.0)));
        let err = validate(&template).unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownType {
                context: "pair_coeff",
                ..
            }
        ));
    }

    #[test]
    fn rejects_group_with_no_types() {
        let mut template = bead();
        template.groups.push(GroupAssignment::new("g", Vec::new()));
        let err = validate(&template).unwrap_err();
        assert!(matches!(err, Error::EmptyGroup { .. }));
    }

    #[test]
    fn rejects_non_finite_mass_for_unused_type() {
        let mut template = bead();
        template.masses.insert("X".into(), f64::NAN);
        let err = validate(&template).unwrap_err();
        assert!(matches!(err, Error::NonFinite { .. }));
    }

    #[test]
    fn rejects_group_with_unknown_type() {
        let mut template = bead();
        template
            .groups
            .push(GroupAssignment::new("g", vec!["X".into()]));
        let err = validate(&template).unwrap_err();
        assert!(matches!(err, Error::UnknownType { context: "group", .. }));
    }

    #[test]
    fn rejects_non_finite_charge() {
        let mut template = bead();
        template.sites[0].charge = f64::NAN;
        let err = validate(&template).unwrap_err();
        assert!(matches!(err, Error::NonFinite { .. }));
    }

    #[test]
    fn rejects_non_finite_cutoff() {
        let mut template = bead();
        template.pair_coeffs.push(PairCoeff::new(
            "B",
            "B",
            LjParams::with_cutoff(1.0, 1.0, f64::INFINITY),
        ));
        let err = validate(&template).unwrap_err();
        assert!(matches!(err, Error::NonFinite { .. }));
    }
}
