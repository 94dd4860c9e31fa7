//! Storefront configuration from environment variables.
//!
//! | variable | required | purpose |
//! |----------|----------|---------|
//! | `AUTH_SECRET` | yes | signs the session cookie, at least [`MIN_SECRET_LEN`] bytes |
//! | `BACKEND_URL` | for login | base URL of the product/auth API |
//! | `SESSION_SECURE` | no | `true` marks the session cookie `Secure` |

use thiserror::Error;

/// Catalog calls go here when `BACKEND_URL` is not set.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

pub const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("AUTH_SECRET not set")]
    MissingSecret,
    #[error("AUTH_SECRET must be at least {MIN_SECRET_LEN} bytes, got {0}")]
    ShortSecret(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    pub auth_secret: String,
    pub backend_url: Option<String>,
    pub secure_cookie: bool,
}

impl StorefrontConfig {
    /// Load from the process environment (and `.env`, if present).
    #[cfg(feature = "server")]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let auth_secret = lookup("AUTH_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingSecret)?;
        if auth_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::ShortSecret(auth_secret.len()));
        }

        let backend_url = lookup("BACKEND_URL").and_then(|url| clean_url(&url));
        let secure_cookie = lookup("SESSION_SECURE")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            auth_secret,
            backend_url,
            secure_cookie,
        })
    }

    /// Base URL for catalog calls.
    pub fn catalog_url(&self) -> &str {
        self.backend_url.as_deref().unwrap_or(DEFAULT_BACKEND_URL)
    }
}

#[cfg(feature = "server")]
static CONFIG: tokio::sync::OnceCell<StorefrontConfig> = tokio::sync::OnceCell::const_new();

/// Make `config` the process-wide configuration. Called once at launch; a
/// second call keeps the first value and returns `false`.
#[cfg(feature = "server")]
pub fn install(config: StorefrontConfig) -> bool {
    CONFIG.set(config).is_ok()
}

/// The configuration installed at launch, if any.
#[cfg(feature = "server")]
pub fn current() -> Option<&'static StorefrontConfig> {
    CONFIG.get()
}

fn clean_url(url: &str) -> Option<String> {
    let url = url.trim().trim_end_matches('/');
    (!url.is_empty()).then(|| url.to_string())
}
