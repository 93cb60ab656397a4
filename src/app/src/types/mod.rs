//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - auth: Authentication service requests and failures
//! - form: Change-password form state and messages
//! - strength: Password strength meter
//! - view: View model handed to the shell

pub mod auth;
pub mod form;
pub mod strength;
pub mod view;

pub use auth::*;
pub use form::*;
pub use strength::*;
pub use view::*;
