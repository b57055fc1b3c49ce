//! Bearer-token session guard for resolving the calling user.

mod guard;

pub use guard::SessionGuard;
