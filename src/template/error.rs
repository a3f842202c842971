//! Error types for template loading and instantiation.
//!
//! Errors are categorized by source: library parsing, template validation,
//! and instantiation configuration.

use thiserror::Error;

/// Errors that can occur while loading a template library or instantiating
/// a [`MoleculeTemplate`](crate::MoleculeTemplate).
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to parse the template library TOML.
    #[error("failed to parse template library: {0}")]
    LibraryParse(#[from] toml::de::Error),

    /// The requested template does not exist in the library.
    #[error("no template named '{name}' in the library (available: {available})")]
    UnknownTemplate {
        /// Name that was looked up.
        name: String,
        /// Comma-separated list of template names the library does hold.
        available: String,
    },

    /// The template declares no sites.
    #[error("template '{template}' has no sites: at least one atom is required")]
    EmptyTemplate {
        /// Offending template name.
        template: String,
    },

    /// Two sites share the same placeholder id.
    #[error("duplicate site id '{id}' in template '{template}'")]
    DuplicateSiteId {
        /// Offending template name.
        template: String,
        /// The repeated placeholder id.
        id: String,
    },

    /// A site's atom type has no mass entry.
    #[error("no mass defined for atom type '{type_tag}' in template '{template}'")]
    MissingMass {
        /// Offending template name.
        template: String,
        /// Atom type tag without a mass.
        type_tag: String,
    },

    /// A group directive selects no types at all.
    #[error("group '{name}' in template '{template}' selects no atom types")]
    EmptyGroup {
        /// Offending template name.
        template: String,
        /// The group with an empty type list.
        name: String,
    },

    /// A pair coefficient or group references a type no site uses.
    #[error("unknown atom type '{type_tag}' referenced by {context} in template '{template}'")]
    UnknownType {
        /// Offending template name.
        template: String,
        /// The unreferenced type tag.
        type_tag: String,
        /// Which declaration referenced it ("pair_coeff" or "group").
        context: &'static str,
    },

    /// A charge, position, mass, or coefficient is NaN or infinite.
    #[error("non-finite value for {field} in template '{template}'")]
    NonFinite {
        /// Offending template name.
        template: String,
        /// Description of the offending field.
        field: String,
    },

    /// Instantiation was requested with zero copies.
    #[error("instantiation requires at least one copy")]
    ZeroCopies,
}

impl Error {
    /// Creates an [`UnknownTemplate`](Error::UnknownTemplate) error listing
    /// the names the library does contain.
    pub fn unknown_template<'a>(
        name: &str,
        available: impl Iterator<Item = &'a str>,
    ) -> Self {
        let mut names: Vec<&str> = available.collect();
        names.sort_unstable();
        let available = if names.is_empty() {
            "none".to_string()
        } else {
            names.join(", ")
        };
        Self::UnknownTemplate {
            name: name.to_string(),
            available,
        }
    }

    /// Creates an [`UnknownType`](Error::UnknownType) error.
    pub fn unknown_type(template: &str, type_tag: &str, context: &'static str) -> Self {
        Self::UnknownType {
            template: template.to_string(),
            type_tag: type_tag.to_string(),
            context,
        }
    }

    /// Creates a [`NonFinite`](Error::NonFinite) error.
    pub fn non_finite(template: &str, field: impl Into<String>) -> Self {
        Self::NonFinite {
            template: template.to_string(),
            field: field.into(),
        }
    }
}
