//! Secret hasher wrapping the slow, salted hashing primitive.

mod service;

pub use service::SecretHasher;
