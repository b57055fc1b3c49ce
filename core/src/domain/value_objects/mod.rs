//! Value objects returned by the lifecycle engine.

pub mod auth_response;

pub use auth_response::{AuthResponse, CodeDelivery, ResetTokenGrant, UserProfile};
