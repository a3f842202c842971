use std::collections::BTreeMap;

use super::coeffs::PairCoeff;
use super::site::Site;

/// Named group directive selecting every atom of the listed types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupAssignment {
    pub name: String,
    pub types: Vec<String>,
}

impl GroupAssignment {
    pub fn new(name: impl Into<String>, types: Vec<String>) -> Self {
        Self {
            name: name.into(),
            types,
        }
    }
}

/// A molecule template: the declarative description of one molecule kind.
///
/// Sites carry placeholder ids; masses, pair coefficients, and group
/// directives are per atom *type* and are emitted once no matter how many
/// copies of the template are instantiated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoleculeTemplate {
    pub name: String,
    pub sites: Vec<Site>,
    pub masses: BTreeMap<String, f64>,
    pub pair_coeffs: Vec<PairCoeff>,
    pub groups: Vec<GroupAssignment>,
}

impl MoleculeTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Atom type tags in first-appearance order over the sites.
    ///
    /// This order defines the numeric type ids assigned at instantiation.
    pub fn type_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for site in &self.sites {
            if !tags.contains(&site.type_tag.as_str()) {
                tags.push(&site.type_tag);
            }
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::coeffs::LjParams;

    #[test]
    fn type_tags_preserve_first_appearance_order() {
        let mut template = MoleculeTemplate::new("Pair");
        template
            .sites
            .push(Site::new("a", "B", 0.0, [0.0, 0.0, 0.0]));
        template
            .sites
            .push(Site::new("b", "A", 0.0, [1.0, 0.0, 0.0]));
        template
            .sites
            .push(Site::new("c", "B", 0.0, [2.0, 0.0, 0.0]));
        assert_eq!(template.type_tags(), vec!["B", "A"]);
    }

    #[test]
    fn default_template_is_empty() {
        let template = MoleculeTemplate::new("Empty");
        assert_eq!(template.site_count(), 0);
        assert!(template.type_tags().is_empty());
        assert!(template.pair_coeffs.is_empty());
    }

    #[test]
    fn pair_coeff_roundtrips_through_template() {
        let mut template = MoleculeTemplate::new("Solvent");
        template
            .pair_coeffs
            .push(PairCoeff::new("S", "S", LjParams::with_cutoff(0.6, 3.0, 7.5)));
        assert_eq!(template.pair_coeffs[0].type_i, "S");
        assert_eq!(template.pair_coeffs[0].params.cutoff, Some(7.5));
    }
}
