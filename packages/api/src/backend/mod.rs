//! # Backend module: the external product/auth REST API
//!
//! Every server function in this crate ends up here. [`BackendClient`] wraps a
//! process-wide `reqwest::Client` and knows the four endpoints the storefront
//! uses:
//!
//! | call | endpoint |
//! |------|----------|
//! | [`login`](BackendClient::login) | `POST /api/auth/login` |
//! | [`list_products`](BackendClient::list_products) | `GET /api/products` |
//! | [`create_product`](BackendClient::create_product) | `POST /api/products` |
//! | [`upload_image`](BackendClient::upload_image) | `POST /api/upload` (multipart) |
//!
//! Failures collapse into [`BackendError`], whose `Display` is the string the
//! UI shows. When the backend answers with an error body, its `message` field
//! is passed through verbatim.
//!
//! The [`wire`] helpers are plain functions over response bodies and are
//! available on every target.

#[cfg(feature = "server")]
mod client;
pub mod wire;

#[cfg(feature = "server")]
pub use client::{BackendClient, BackendError};
