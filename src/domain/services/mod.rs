//! Pure domain services.

mod normalizer;

pub use normalizer::*;
