//! Settings feature slice.
//!
//! # Design
//! - Keep provider and concurrency rules in the DOM-free state module.
//! - Keep rendering and store dispatch wiring in the view module.

pub mod state;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
