//! Tenant credentials, redacted secrets, and validated application names.

pub mod credentials;
pub mod name;
pub mod secret;

pub use credentials::*;
pub use name::*;
pub use secret::*;
