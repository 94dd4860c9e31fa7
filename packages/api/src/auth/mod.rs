//! Session handling for the credentials login.

#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use session::{require_admin, session_user, SESSION_USER_KEY};
