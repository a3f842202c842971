use std::fmt;

pub mod error;
pub mod util;

pub mod data;
pub mod lt;

pub use error::Error;

/// Output surfaces the crate can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// A moltemplate molecule block (placeholder ids intact).
    Lt,
    /// Instantiated LAMMPS data-file sections (Masses, Atoms).
    LammpsData,
    /// Instantiated LAMMPS settings lines (pair_coeff, group).
    LammpsSettings,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Lt => write!(f, "LT"),
            Format::LammpsData => write!(f, "LAMMPS data"),
            Format::LammpsSettings => write!(f, "LAMMPS settings"),
        }
    }
}
