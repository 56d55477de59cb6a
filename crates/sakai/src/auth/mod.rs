//! Authentication primitives.
//!
//! Logging in exchanges [`Credentials`] for a [`SessionCookie`], which the
//! client then attaches to every request.

mod cookie;
mod credentials;

pub use cookie::SessionCookie;
pub use credentials::Credentials;
