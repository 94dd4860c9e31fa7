//! Server launch: configuration, logging, the session layer and the route
//! gate in front of the Dioxus application.

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use dioxus::server::{DioxusRouterExt, ServeConfig};
use sha2::{Digest, Sha512};
use thiserror::Error;
use tower::ServiceBuilder;
use tower_sessions::cookie::time::Duration;
use tower_sessions::cookie::{Key, SameSite};
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};
use tracing_subscriber::EnvFilter;

use api::config::{ConfigError, StorefrontConfig};
use api::GateDecision;

use crate::App;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // dx may already have installed a subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Cookie signing key derived from `AUTH_SECRET`.
fn signing_key(secret: &str) -> Key {
    Key::from(Sha512::digest(secret.as_bytes()).as_slice())
}

pub async fn launch_server() -> Result<(), LaunchError> {
    init_tracing();

    let config = StorefrontConfig::from_env().inspect_err(|e| {
        tracing::error!("refusing to start: {e}");
    })?;
    if !api::config::install(config.clone()) {
        tracing::warn!("configuration was already installed, keeping the first one");
    }
    if config.backend_url.is_none() {
        tracing::warn!(
            "BACKEND_URL not set: login is disabled, catalog calls go to {}",
            config.catalog_url()
        );
    }

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.secure_cookie)
        .with_same_site(SameSite::Lax)
        .with_signed(signing_key(&config.auth_secret))
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(
            ServiceBuilder::new()
                .layer(session_layer)
                .layer(middleware::from_fn(route_gate)),
        );

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

/// Apply [`api::gate::evaluate`] to every page request.
async fn route_gate(session: Session, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    if !api::gate::is_protected(&path) {
        return next.run(request).await;
    }

    let user = match api::auth::session_user(&session).await {
        Ok(user) => user.map(|u| u.user),
        Err(e) => {
            tracing::error!(%path, "session lookup failed: {}", e);
            None
        }
    };

    match api::gate::evaluate(&path, user.as_ref()) {
        GateDecision::Allow => next.run(request).await,
        GateDecision::Redirect(to) => {
            tracing::warn!(%path, to, signed_in = user.is_some(), "request redirected");
            Redirect::to(to).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signing_key_is_stable_per_secret() {
        let a = signing_key("0123456789abcdef0123456789abcdef");
        let b = signing_key("0123456789abcdef0123456789abcdef");
        let c = signing_key("fedcba9876543210fedcba9876543210");
        assert_eq!(a.master(), b.master());
        assert_ne!(a.master(), c.master());
    }
}
