//! # API crate: shared fullstack server functions for the storefront
//!
//! This crate is the seam between the storefront UI and the external
//! product/auth REST API. It defines every Dioxus server function that the web
//! frontend calls, the models that cross the server/client boundary, and the
//! route gate both sides apply to page navigation.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Session keys and the admin check used by server functions |
//! | [`backend`] | partly `server` | `reqwest` client for the external API, response helpers |
//! | [`config`] | none | `AUTH_SECRET` / `BACKEND_URL` / `SESSION_SECURE` from the environment |
//! | [`gate`] | none | The page access predicate (login redirect, admin gate) |
//! | [`models`] | none | `Product`, `Price`, `ProductForm`, `UserInfo`, `SessionUser` |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, compiled
//! twice: once with the server logic (behind `#[cfg(feature = "server")]`) and
//! once as a thin client stub that forwards the call over HTTP.
//!
//! - **Session**: `get_current_user`, `login`, `logout`
//! - **Catalog**: `list_products`, `get_product`
//! - **Admin**: `upload_product_image`, `create_product`

use dioxus::fullstack::FileStream;
use dioxus::prelude::*;

pub mod auth;
pub mod backend;
pub mod config;
pub mod gate;
pub mod models;

pub use gate::GateDecision;
pub use models::{is_image_type, NewProduct, Price, Product, ProductForm, UserInfo};

/// Get the user of the current session.
#[cfg(feature = "server")]
#[get("/api/session", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    let user = auth::session_user(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.user))
}

#[cfg(not(feature = "server"))]
#[get("/api/session")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Log in with email and password against the backend.
#[cfg(feature = "server")]
#[post("/api/session/login", session: tower_sessions::Session)]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    let email = email.trim().to_string();

    let client = backend::BackendClient::auth().await.map_err(|e| {
        tracing::error!("login unavailable: {}", e);
        ServerFnError::new(e.to_string())
    })?;

    let session_user = client.login(&email, &password).await.map_err(|e| {
        tracing::warn!(%email, "login failed: {}", e);
        ServerFnError::new(e.to_string())
    })?;

    session
        .cycle_id()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    session
        .insert(auth::SESSION_USER_KEY, &session_user)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(email = %session_user.user.email, role = %session_user.user.role, "logged in");
    Ok(session_user.user)
}

#[cfg(not(feature = "server"))]
#[post("/api/session/login")]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/session/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/session/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Fetch the product collection.
#[cfg(feature = "server")]
#[get("/api/catalog/products", session: tower_sessions::Session)]
pub async fn list_products() -> Result<Vec<Product>, ServerFnError> {
    let mut client = backend::BackendClient::catalog().await;
    if let Ok(Some(user)) = auth::session_user(&session).await {
        client = client.with_token(user.token);
    }

    client.list_products().await.map_err(|e| {
        tracing::error!("product listing failed: {}", e);
        ServerFnError::new(e.to_string())
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/catalog/products")]
pub async fn list_products() -> Result<Vec<Product>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch one product by id.
///
/// The backend only lists the whole collection, so the product is picked out
/// of it.
#[cfg(feature = "server")]
#[get("/api/catalog/products/:id", session: tower_sessions::Session)]
pub async fn get_product(id: String) -> Result<Option<Product>, ServerFnError> {
    let mut client = backend::BackendClient::catalog().await;
    if let Ok(Some(user)) = auth::session_user(&session).await {
        client = client.with_token(user.token);
    }

    let products = client
        .list_products()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(products.into_iter().find(|p| p.id == id))
}

#[cfg(not(feature = "server"))]
#[get("/api/catalog/products/:id")]
pub async fn get_product(id: String) -> Result<Option<Product>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Upload a product image and return its URL. Admin only.
///
/// The file arrives as a stream and is relayed to the backend chunk by chunk,
/// so its size is not bounded by the request body limit.
#[cfg(feature = "server")]
#[post("/api/catalog/upload", session: tower_sessions::Session)]
pub async fn upload_product_image(upload: FileStream) -> Result<String, ServerFnError> {
    let admin = auth::require_admin(&session).await?;

    if !is_image_type(upload.content_type().unwrap_or_default()) {
        return Err(ServerFnError::new("Le fichier doit être une image."));
    }

    let file_name = upload.file_name().to_string();
    let size = upload.size();
    let client = backend::BackendClient::catalog().await.with_token(admin.token);
    let url = client.upload_image(upload).await.map_err(|e| {
        tracing::error!(%file_name, "image upload failed: {}", e);
        ServerFnError::new(e.to_string())
    })?;

    tracing::info!(%file_name, ?size, %url, "image uploaded");
    Ok(url)
}

#[cfg(not(feature = "server"))]
#[post("/api/catalog/upload")]
pub async fn upload_product_image(upload: FileStream) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a product from a validated form payload. Admin only.
#[cfg(feature = "server")]
#[post("/api/catalog/products", session: tower_sessions::Session)]
pub async fn create_product(product: NewProduct) -> Result<Product, ServerFnError> {
    let admin = auth::require_admin(&session).await?;

    let client = backend::BackendClient::catalog().await.with_token(admin.token);
    let created = client.create_product(&product).await.map_err(|e| {
        // The image uploaded just before is left behind on the backend.
        tracing::warn!(image = %product.image, "product creation failed, image orphaned: {}", e);
        ServerFnError::new(e.to_string())
    })?;

    tracing::info!(id = %created.id, name = %created.name, "product created");
    Ok(created)
}

#[cfg(not(feature = "server"))]
#[post("/api/catalog/products")]
pub async fn create_product(product: NewProduct) -> Result<Product, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
