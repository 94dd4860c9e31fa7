//! Authentication context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    /// True until the first session lookup has answered.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(UserInfo::is_admin)
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that loads the session user once and shares it.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    let _ = use_resource(move || async move {
        let user = match api::get_current_user().await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("session lookup failed: {e}");
                None
            }
        };
        auth_state.set(AuthState {
            user,
            loading: false,
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button that clears the session and returns to the home page.
#[component]
pub fn LogoutButton(#[props(default = "nav-link".to_string())] class: String) -> Element {
    let mut auth = use_auth();
    let mut pending = use_signal(|| false);

    let onclick = move |_| {
        spawn(async move {
            pending.set(true);
            if let Err(e) = api::logout().await {
                tracing::error!("logout failed: {e}");
            }
            auth.set(AuthState {
                user: None,
                loading: false,
            });
            pending.set(false);
            crate::navigation::hard_navigate("/");
        });
    };

    rsx! {
        button {
            class: "{class}",
            disabled: pending(),
            onclick: onclick,
            "Déconnexion"
        }
    }
}
