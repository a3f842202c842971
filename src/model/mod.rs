//! Core data structures for molecule templates and their instantiated records.
//!
//! - [`site`] – One templated atom: placeholder id, type tag, charge, position.
//! - [`coeffs`] – Lennard-Jones pair interaction parameters.
//! - [`template`] – The declarative [`MoleculeTemplate`] with masses, pair
//!   coefficients, and group directives.
//! - [`records`] – Fully resolved output rows ([`DataFragment`]) produced by
//!   instantiation.
//!
//! The model deliberately separates the declarative template (placeholder ids,
//! type tags) from the instantiated records (sequential numeric ids), so the
//! [`crate::template`] pipeline can transform one into the other.
//!
//! [`MoleculeTemplate`]: template::MoleculeTemplate
//! [`DataFragment`]: records::DataFragment

pub mod coeffs;
pub mod records;
pub mod site;
pub mod template;
