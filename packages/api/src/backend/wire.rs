//! Shapes of the backend's responses that need more than a plain `serde` derive.

use serde::Deserialize;

use crate::models::UserInfo;

/// Body of `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// The human-readable message of an error response, if it carries one.
pub fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UploadBody {
    Url(String),
    Object {
        #[serde(alias = "imageUrl", alias = "path")]
        url: String,
    },
}

/// The image URL returned by `POST /api/upload`.
///
/// The upload endpoint answers with a bare string, a JSON string, or an object
/// holding the URL.
pub fn upload_url(body: &str) -> Option<String> {
    let url = match serde_json::from_str::<UploadBody>(body) {
        Ok(UploadBody::Url(url)) | Ok(UploadBody::Object { url }) => url,
        Err(_) => body.to_string(),
    };
    let url = url.trim();
    (!url.is_empty() && !url.starts_with('{')).then(|| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_message_field() {
        assert_eq!(
            error_message(r#"{"message": "Email ou mot de passe incorrect"}"#).as_deref(),
            Some("Email ou mot de passe incorrect")
        );
        assert_eq!(
            error_message(r#"{"error": "Unauthorized"}"#).as_deref(),
            Some("Unauthorized")
        );
    }

    #[test]
    fn test_error_message_absent() {
        assert_eq!(error_message("<html>502</html>"), None);
        assert_eq!(error_message(r#"{"message": "  "}"#), None);
        assert_eq!(error_message(r#"{"status": 500}"#), None);
    }

    #[test]
    fn test_upload_url_shapes() {
        assert_eq!(
            upload_url("/uploads/image-1712.jpg").as_deref(),
            Some("/uploads/image-1712.jpg")
        );
        assert_eq!(
            upload_url(r#""/uploads/image-1712.jpg""#).as_deref(),
            Some("/uploads/image-1712.jpg")
        );
        assert_eq!(
            upload_url(r#"{"imageUrl": "http://cdn/x.png"}"#).as_deref(),
            Some("http://cdn/x.png")
        );
        assert_eq!(upload_url(r#"{"ok": true}"#), None);
        assert_eq!(upload_url(""), None);
    }

    #[test]
    fn test_login_response_without_user() {
        let body: LoginResponse = serde_json::from_str(r#"{"token": "abc"}"#).unwrap();
        assert!(body.user.is_none());
    }
}
