//! Core, DOM-free primitives for the Domainlens UI.
pub mod store;
pub mod theme;
