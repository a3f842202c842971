use super::coeffs::LjParams;

/// One row of the "Atoms" section: atom-id, molecule-id, type, charge, x, y, z.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    pub atom_id: usize,
    pub molecule_id: usize,
    pub type_id: usize,
    pub charge: f64,
    pub position: [f64; 3],
}

/// One row of the "Masses" section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassRecord {
    pub type_id: usize,
    pub mass: f64,
}

/// One `pair_coeff` settings line with resolved numeric type ids.
#[derive(Debug, Clone, PartialEq)]
pub struct PairCoeffRecord {
    pub type_i: usize,
    pub type_j: usize,
    pub style: Option<String>,
    pub params: LjParams,
}

/// One `group ... type ...` settings line with resolved numeric type ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRecord {
    pub name: String,
    pub type_ids: Vec<usize>,
}

/// The instantiated output of a template: everything the downstream data
/// file and settings file need, with placeholders fully resolved.
///
/// Type ids are 1-based; `type_labels[id - 1]` recovers the original tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFragment {
    pub type_labels: Vec<String>,
    pub atoms: Vec<AtomRecord>,
    pub masses: Vec<MassRecord>,
    pub pair_coeffs: Vec<PairCoeffRecord>,
    pub groups: Vec<GroupRecord>,
}

impl DataFragment {
    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn type_count(&self) -> usize {
        self.type_labels.len()
    }

    pub fn molecule_count(&self) -> usize {
        let mut ids: Vec<usize> = self.atoms.iter().map(|a| a.molecule_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }
}
