mod chat;
mod client_config;
mod credential;
mod normalized_form;

pub use chat::*;
pub use client_config::*;
pub use credential::*;
pub use normalized_form::*;
