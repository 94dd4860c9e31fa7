//! # Route gate
//!
//! One predicate decides whether a page request may proceed. The `web` crate
//! evaluates it twice: in an axum middleware for every server-rendered page,
//! and in the router layout so client-side navigation follows the same rule.
//!
//! Only the catalog and admin trees are protected:
//!
//! | path | no session | session, not admin | admin |
//! |------|-----------|--------------------|-------|
//! | `/admin` | login | `/products` | allow |
//! | `/admin/**` | login | `/admin` | allow |
//! | `/products`, `/products/**` | login | allow | allow |
//! | anything else | allow | allow | allow |

use crate::models::UserInfo;

pub const LOGIN_PATH: &str = "/auth/login";
pub const ADMIN_HOME: &str = "/admin";
pub const PRODUCTS_PATH: &str = "/products";

/// Outcome of [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Redirect(&'static str),
}

/// Whether `path` falls under `prefix` on a segment boundary.
fn under(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

pub fn is_admin_path(path: &str) -> bool {
    under(normalize(path), ADMIN_HOME)
}

/// Paths the gate applies to.
pub fn is_protected(path: &str) -> bool {
    let path = normalize(path);
    under(path, ADMIN_HOME) || under(path, PRODUCTS_PATH)
}

/// Decide what to do with a request for `path` made by `user`.
pub fn evaluate(path: &str, user: Option<&UserInfo>) -> GateDecision {
    let path = normalize(path);
    if !is_protected(path) {
        return GateDecision::Allow;
    }

    let Some(user) = user else {
        return GateDecision::Redirect(LOGIN_PATH);
    };

    if is_admin_path(path) && !user.is_admin() {
        // `/admin` is itself the admin landing page: send non-admins to the
        // catalog instead of bouncing them back onto it.
        return if path == ADMIN_HOME {
            GateDecision::Redirect(PRODUCTS_PATH)
        } else {
            GateDecision::Redirect(ADMIN_HOME)
        };
    }

    GateDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> UserInfo {
        UserInfo {
            id: "u1".into(),
            name: Some("Test".into()),
            email: "test@mail.com".into(),
            role: role.into(),
        }
    }

    #[test]
    fn test_anonymous_redirected_to_login_on_protected_paths() {
        for path in [
            "/admin",
            "/admin/ajoutProduit",
            "/products",
            "/products/",
            "/products/detailProducts?id=3",
        ] {
            assert_eq!(evaluate(path, None), GateDecision::Redirect(LOGIN_PATH), "{path}");
        }
    }

    #[test]
    fn test_public_paths_are_allowed() {
        for path in ["/", "/auth/login", "/productsale", "/administration", "/api/session"] {
            assert_eq!(evaluate(path, None), GateDecision::Allow, "{path}");
        }
    }

    #[test]
    fn test_non_admin_sent_to_admin_home_from_admin_subpaths() {
        let customer = user("user");
        assert_eq!(
            evaluate("/admin/ajoutProduit", Some(&customer)),
            GateDecision::Redirect(ADMIN_HOME)
        );
        assert_eq!(
            evaluate("/admin", Some(&customer)),
            GateDecision::Redirect(PRODUCTS_PATH)
        );
    }

    #[test]
    fn test_logged_in_users_reach_products() {
        assert_eq!(evaluate("/products", Some(&user("user"))), GateDecision::Allow);
        assert_eq!(evaluate("/products/42", Some(&user("admin"))), GateDecision::Allow);
    }

    #[test]
    fn test_admin_reaches_admin_tree() {
        let admin = user("admin");
        assert_eq!(evaluate("/admin", Some(&admin)), GateDecision::Allow);
        assert_eq!(evaluate("/admin/ajoutProduit/", Some(&admin)), GateDecision::Allow);
    }
}
