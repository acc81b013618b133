//! DOM components for the Domainlens shell and forms.
pub(crate) mod controls;
pub(crate) mod shell;
