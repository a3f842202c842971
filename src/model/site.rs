#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    /// Placeholder id, resolved to a concrete atom id at instantiation time.
    pub id: String,
    pub type_tag: String,
    pub charge: f64,
    pub position: [f64; 3],
}

impl Site {
    pub fn new(
        id: impl Into<String>,
        type_tag: impl Into<String>,
        charge: f64,
        position: [f64; 3],
    ) -> Self {
        Self {
            id: id.into(),
            type_tag: type_tag.into(),
            charge,
            position,
        }
    }
}
