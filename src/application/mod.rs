//! # Application Layer
//!
//! The inference client, the per-question use case and the transport port
//! they depend on.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
