//! A pure Rust library for generating molecule templates and the LAMMPS input
//! fragments they instantiate into. It models the declarative parameter tables
//! a molecular dynamics preprocessor consumes — atoms, masses, pair interaction
//! coefficients, group directives — and writes them either as a moltemplate
//! block (placeholders intact) or as resolved data-file sections.
//!
//! # Features
//!
//! - **Template library** — Named molecule templates loaded from TOML, with a
//!   built-in single-bead solvent particle
//! - **Instantiation** — Placeholder atom/molecule ids resolved to sequential
//!   numeric ids; per-type declarations emitted once per run
//! - **Writers** — moltemplate `.lt` blocks and LAMMPS data/settings sections
//!   with the exact field order the downstream engine expects
//!
//! # Quick Start
//!
//! The built-in library carries the solvent particle; [`instantiate`] resolves
//! it into concrete records:
//!
//! ```
//! use lt_forge::{InstantiateConfig, default_library, instantiate};
//!
//! let solvent = default_library().get("Solvent")?;
//!
//! // One atom of type "S", zero charge, at the origin
//! assert_eq!(solvent.site_count(), 1);
//! assert_eq!(solvent.masses.get("S"), Some(&10.0));
//!
//! // Stamp out three copies
//! let config = InstantiateConfig { copies: 3, ..Default::default() };
//! let fragment = instantiate(solvent, &config)?;
//!
//! assert_eq!(fragment.atom_count(), 3);
//! assert_eq!(fragment.molecule_count(), 3);
//! // Masses and pair coefficients are per type, not per copy
//! assert_eq!(fragment.masses.len(), 1);
//! assert_eq!(fragment.pair_coeffs.len(), 1);
//! # Ok::<(), lt_forge::TemplateError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — Writers for moltemplate blocks and LAMMPS data/settings output
//! - [`instantiate`] — Placeholder resolution into [`DataFragment`] records
//! - [`TemplateLibrary`] — TOML-backed collection of named templates
//!
//! # Data Types
//!
//! - [`MoleculeTemplate`] — Declarative template: sites, masses, coefficients, groups
//! - [`Site`] — One templated atom with placeholder id, type tag, charge, position
//! - [`LjParams`] / [`PairCoeff`] — Lennard-Jones pair interaction parameters
//! - [`GroupAssignment`] — Named group selecting atom types
//! - [`DataFragment`] — Instantiated records with numeric ids

mod model;
mod template;

pub mod io;

pub use model::coeffs::{LjParams, PairCoeff};
pub use model::records::{AtomRecord, DataFragment, GroupRecord, MassRecord, PairCoeffRecord};
pub use model::site::Site;
pub use model::template::{GroupAssignment, MoleculeTemplate};

pub use template::{
    InstantiateConfig, TemplateLibrary, default_library, instantiate, load_library, validate,
};

pub use template::Error as TemplateError;
