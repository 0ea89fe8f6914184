//! Account registration payloads

use reqwest::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ApiError;

/// Body of `POST /userRegister`.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// A successful registration answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterResponse {
    /// HTTP status, always `200`.
    pub status: u16,
    /// Optional `message` from the response body.
    pub message: Option<String>,
}

/// Shape of both success and error bodies. Every field is optional and
/// unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: Option<String>,
}

impl MessageBody {
    fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

/// Maps a raw status and body to the registration outcome.
fn interpret(status: u16, body: &str) -> Result<RegisterResponse, ApiError> {
    let parsed = MessageBody::parse(body);
    if status == StatusCode::OK.as_u16() {
        Ok(RegisterResponse {
            status,
            message: parsed.message,
        })
    } else {
        Err(ApiError::http(status, parsed.message.unwrap_or_default()))
    }
}

pub(crate) async fn handle_register_response(
    response: reqwest::Response,
) -> Result<RegisterResponse, ApiError> {
    let status = response.status().as_u16();
    let body = response.text().await?;
    log::debug!("Register answered HTTP {} ({} bytes)", status, body.len());
    interpret(status, &body)
}
