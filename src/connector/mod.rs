//! # Connector Layer
//!
//! Implementations of the application's transport port:
//! - HTTP transport to the chat-completion endpoint (`reqwest`)
//! - Recording in-memory transport for tests and offline runs

pub mod adapter;

pub use adapter::*;
