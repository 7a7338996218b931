//! Domain-based type organization
//!
//! - connection: form data and the submission state machine
//! - classify: wire format of the classification service

pub mod classify;
pub mod connection;

pub use classify::*;
pub use connection::*;
