//! # Domain Layer
//!
//! Questions, normalized forms, chat request/response types and the
//! credential model. Nothing here touches the network or the terminal.

mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
