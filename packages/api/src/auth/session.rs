//! Session data access.

use dioxus::prelude::ServerFnError;
use tower_sessions::Session;

use crate::models::SessionUser;

/// Key for storing the logged-in user in the session.
pub const SESSION_USER_KEY: &str = "storefront.user";

/// The user stored in `session`, if any.
pub async fn session_user(
    session: &Session,
) -> Result<Option<SessionUser>, tower_sessions::session::Error> {
    session.get::<SessionUser>(SESSION_USER_KEY).await
}

/// The session user, provided they hold the admin role.
pub async fn require_admin(session: &Session) -> Result<SessionUser, ServerFnError> {
    let user = session_user(session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    if !user.user.is_admin() {
        tracing::warn!(email = %user.user.email, "admin call refused");
        return Err(ServerFnError::new("Admin access required"));
    }

    Ok(user)
}
