//! HTTP client for the external product/auth API.

use dioxus::fullstack::FileStream;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, RequestBuilder, Response};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::OnceCell;

use super::wire::{self, LoginResponse};
use crate::config::{self, StorefrontConfig, DEFAULT_BACKEND_URL};
use crate::models::{NewProduct, Product, SessionUser};

static HTTP: OnceCell<Client> = OnceCell::const_new();

/// Shared reqwest client, built on first use.
async fn http() -> &'static Client {
    HTTP.get_or_init(|| async { Client::new() }).await
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("BACKEND_URL est manquant")]
    MissingConfig,
    /// The backend could not be reached or the body could not be read.
    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Réponse inattendue du serveur: {0}")]
    Decode(String),
    #[error("Authentification échouée : utilisateur non trouvé")]
    MissingUser,
}

/// Text shown when a call fails and the backend gave no message of its own.
#[derive(Debug, Clone, Copy)]
enum Fallback {
    /// One text for every failure.
    Text(&'static str),
    /// `Erreur {status}` for an error status, the text when unreachable.
    Status(&'static str),
}

impl Fallback {
    fn for_status(self, status: u16) -> String {
        match self {
            Fallback::Text(text) => text.to_string(),
            Fallback::Status(_) => format!("Erreur {status}"),
        }
    }

    fn for_transport(self, source: reqwest::Error) -> BackendError {
        let message = match self {
            Fallback::Text(text) | Fallback::Status(text) => text.to_string(),
        };
        tracing::error!(error = %source, "backend unreachable");
        BackendError::Transport { message, source }
    }
}

const LOGIN: Fallback = Fallback::Text("Échec de l'authentification");
const LIST: Fallback = Fallback::Status("Une erreur est survenue lors du chargement des produits");
const CREATE: Fallback = Fallback::Text("Erreur lors de l'ajout du produit.");
const UPLOAD: Fallback = Fallback::Text("Impossible d'uploader l'image.");

/// Client bound to one backend base URL and, optionally, a session token.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl BackendClient {
    /// Client for catalog calls, from the configuration installed at launch.
    pub async fn catalog() -> Self {
        Self::catalog_for(config::current()).await
    }

    /// Client for the auth flow, from the configuration installed at launch.
    pub async fn auth() -> Result<Self, BackendError> {
        Self::auth_for(config::current()).await
    }

    /// Catalog calls fall back to the local default backend.
    pub async fn catalog_for(config: Option<&StorefrontConfig>) -> Self {
        let base_url = config.map_or(DEFAULT_BACKEND_URL, StorefrontConfig::catalog_url);
        Self::new(base_url).await
    }

    /// The auth flow refuses to run without `BACKEND_URL`.
    pub async fn auth_for(config: Option<&StorefrontConfig>) -> Result<Self, BackendError> {
        let base_url = config
            .and_then(|c| c.backend_url.as_deref())
            .ok_or(BackendError::MissingConfig)?;
        Ok(Self::new(base_url).await)
    }

    pub async fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: http().await.clone(),
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Attach the backend token of a logged-in session to every call.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = (!token.is_empty()).then_some(token);
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Exchange credentials for a user and token.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser, BackendError> {
        #[derive(Serialize)]
        struct Credentials<'a> {
            email: &'a str,
            password: &'a str,
        }

        let request = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&Credentials { email, password });
        let body: LoginResponse = decode(send(request, LOGIN).await?, LOGIN).await?;

        let user = body.user.ok_or(BackendError::MissingUser)?;
        Ok(SessionUser {
            user,
            token: body.token.unwrap_or_default(),
        })
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, BackendError> {
        let request = self.authorized(self.http.get(self.url("/api/products")));
        decode(send(request, LIST).await?, LIST).await
    }

    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, BackendError> {
        let request = self
            .authorized(self.http.post(self.url("/api/products")))
            .json(product);
        decode(send(request, CREATE).await?, CREATE).await
    }

    /// Stream an uploaded file to the backend as the multipart field `image`,
    /// returning its URL. The file is never buffered whole.
    pub async fn upload_image(&self, upload: FileStream) -> Result<String, BackendError> {
        let file_name = upload.file_name().to_string();
        let content_type = upload
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let size = upload.size();

        let body = Body::wrap_stream(upload);
        let part = match size {
            Some(length) => Part::stream_with_length(body, length),
            None => Part::stream(body),
        };
        let part = part
            .file_name(file_name)
            .mime_str(&content_type)
            .map_err(|e| UPLOAD.for_transport(e))?;
        let form = Form::new().part("image", part);

        let request = self
            .authorized(self.http.post(self.url("/api/upload")))
            .multipart(form);
        let body = checked(send(request, UPLOAD).await?, UPLOAD).await?;

        wire::upload_url(&body).ok_or_else(|| BackendError::Decode(body))
    }
}

async fn send(request: RequestBuilder, fallback: Fallback) -> Result<Response, BackendError> {
    request.send().await.map_err(|e| fallback.for_transport(e))
}

/// Read the body of a successful response, or turn a failed one into
/// [`BackendError::Status`] carrying the backend's own message.
async fn checked(response: Response, fallback: Fallback) -> Result<String, BackendError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| fallback.for_transport(e))?;
    if status.is_success() {
        return Ok(body);
    }

    let message =
        wire::error_message(&body).unwrap_or_else(|| fallback.for_status(status.as_u16()));
    tracing::error!(status = status.as_u16(), %message, "backend call failed");
    Err(BackendError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T>(response: Response, fallback: Fallback) -> Result<T, BackendError>
where
    T: serde::de::DeserializeOwned,
{
    let body = checked(response, fallback).await?;
    serde_json::from_str(&body).map_err(|e| BackendError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::{to_bytes, Body as AxumBody};
    use axum::extract::{FromRequest, Request, State};
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn stub_login(Json(body): Json<Value>) -> axum::response::Response {
        match body["email"].as_str() {
            Some("bad@mail.com") => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Email ou mot de passe incorrect" })),
            )
                .into_response(),
            Some("down@mail.com") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            Some("nouser@mail.com") => Json(json!({ "token": "t" })).into_response(),
            _ => Json(json!({
                "user": { "_id": "u1", "email": "ana@mail.com", "role": "admin" },
                "token": "tok-1"
            }))
            .into_response(),
        }
    }

    async fn stub_products(headers: HeaderMap) -> axum::response::Response {
        if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some("Bearer tok-1") {
            return StatusCode::FORBIDDEN.into_response();
        }
        Json(json!([
            { "_id": "1", "name": "Basic Slim Fit T-Shirt", "price": 99 },
            { "_id": "2", "name": "Full Sleeve Zipper", "description": null }
        ]))
        .into_response()
    }

    /// Accepts a multipart upload of any size and reports how much arrived.
    async fn stub_upload(body: AxumBody) -> axum::response::Response {
        let bytes = to_bytes(body, usize::MAX).await.unwrap();
        let text = String::from_utf8_lossy(&bytes);
        if !text.contains("name=\"image\"") || !text.contains("filename=\"big.png\"") {
            return (StatusCode::BAD_REQUEST, Json(json!({ "message": "bad form" })))
                .into_response();
        }
        Json(json!({ "url": format!("http://cdn/{}", bytes.len()) })).into_response()
    }

    async fn backend() -> String {
        serve(
            Router::new()
                .route("/api/auth/login", post(stub_login))
                .route("/api/products", get(stub_products))
                .route("/api/upload", post(stub_upload)),
        )
        .await
    }

    async fn client() -> BackendClient {
        BackendClient::new(backend().await).await
    }

    #[tokio::test]
    async fn test_clients_share_one_http_pool() {
        let first = http().await as *const Client;
        let second = http().await as *const Client;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_empty_token_is_not_attached() {
        let client = BackendClient::new("http://api").await.with_token("");
        assert_eq!(client.token, None);

        let client = client.with_token("abc");
        assert_eq!(client.token.as_deref(), Some("abc"));
        assert_eq!(client.url("/api/products"), "http://api/api/products");
    }

    #[tokio::test]
    async fn test_login_returns_user_and_token() {
        let session = client().await.login("ana@mail.com", "pw").await.unwrap();
        assert_eq!(session.user.id, "u1");
        assert!(session.user.is_admin());
        assert_eq!(session.token, "tok-1");
    }

    #[tokio::test]
    async fn test_login_shows_backend_message() {
        let err = client().await.login("bad@mail.com", "pw").await.unwrap_err();
        assert_eq!(err.to_string(), "Email ou mot de passe incorrect");
    }

    #[tokio::test]
    async fn test_login_without_message_uses_fallback() {
        let err = client().await.login("down@mail.com", "pw").await.unwrap_err();
        assert_eq!(err.to_string(), "Échec de l'authentification");
    }

    #[tokio::test]
    async fn test_login_without_user() {
        let err = client().await.login("nouser@mail.com", "pw").await.unwrap_err();
        assert!(matches!(err, BackendError::MissingUser));
    }

    #[tokio::test]
    async fn test_unreachable_backend_hides_url() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = BackendClient::new(format!("http://{addr}")).await;
        let err = client.login("ana@mail.com", "pw").await.unwrap_err();
        assert!(matches!(err, BackendError::Transport { .. }));
        assert_eq!(err.to_string(), "Échec de l'authentification");

        let err = client.list_products().await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Une erreur est survenue lors du chargement des produits"
        );
    }

    #[tokio::test]
    async fn test_list_products_with_and_without_token() {
        let base = backend().await;

        let products = BackendClient::new(base.clone())
            .await
            .with_token("tok-1")
            .list_products()
            .await
            .unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].description, "");

        let err = BackendClient::new(base).await.list_products().await.unwrap_err();
        assert_eq!(err.to_string(), "Erreur 403");
    }

    #[tokio::test]
    async fn test_missing_backend_url_blocks_auth_only() {
        assert!(matches!(
            BackendClient::auth_for(None).await,
            Err(BackendError::MissingConfig)
        ));

        let config = StorefrontConfig {
            auth_secret: "0123456789abcdef0123456789abcdef".into(),
            backend_url: None,
            secure_cookie: false,
        };
        assert!(matches!(
            BackendClient::auth_for(Some(&config)).await,
            Err(BackendError::MissingConfig)
        ));
        assert_eq!(
            BackendClient::catalog_for(Some(&config)).await.base_url,
            DEFAULT_BACKEND_URL
        );

        let config = StorefrontConfig {
            backend_url: Some("http://api".into()),
            ..config
        };
        assert_eq!(
            BackendClient::auth_for(Some(&config)).await.unwrap().base_url,
            "http://api"
        );
    }

    /// Plays the storefront server: extracts the streamed file the way the
    /// upload server function does, then forwards it to the backend.
    async fn relay(State(base): State<String>, request: Request) -> axum::response::Response {
        let upload = match FileStream::from_request(request, &()).await {
            Ok(upload) => upload,
            Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
        };
        match BackendClient::new(base).await.upload_image(upload).await {
            Ok(url) => url.into_response(),
            Err(e) => (StatusCode::BAD_GATEWAY, e.to_string()).into_response(),
        }
    }

    #[tokio::test]
    async fn test_upload_streams_images_past_the_default_body_limit() {
        let base = backend().await;
        let storefront = serve(
            Router::new()
                .route("/upload", post(relay))
                .with_state(base),
        )
        .await;

        let image = vec![0x89u8; 3 * 1024 * 1024];
        let response = reqwest::Client::new()
            .post(format!("{storefront}/upload"))
            .header("Content-Type", "image/png")
            .header("Content-Disposition", "attachment; filename=\"big.png\"")
            .header("X-Content-Size", image.len().to_string())
            .body(image.clone())
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let url = response.text().await.unwrap();
        let received: usize = url.rsplit('/').next().unwrap().parse().unwrap();
        assert!(received > image.len(), "{url}");
    }
}
