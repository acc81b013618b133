//! Feature slices for the Domainlens UI.
pub mod settings;
