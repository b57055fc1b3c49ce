//! Common type definitions shared with the transport layer.

pub mod response;

pub use response::{ErrorResponse, MessageResponse};
