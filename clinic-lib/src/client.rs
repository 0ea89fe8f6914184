//! HTTP client for the authentication API

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::auth::handle_register_response;
use crate::auth::AuthApi;
use crate::auth::RegisterRequest;
use crate::auth::RegisterResponse;
use crate::error::ApiError;

/// Base URL of the authentication API on a local development server.
pub const DEFAULT_AUTH_URL: &str = "http://localhost:8080/apiPetNova/auth";

/// Client for the authentication API.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across threads safely.
///
/// # Example
///
/// ```ignore
/// use clinic_lib::AuthClient;
/// use clinic_lib::auth::AuthApi;
/// use clinic_lib::auth::RegisterRequest;
///
/// let client = AuthClient::builder()
///     .base_url("http://localhost:8080/apiPetNova/auth")
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// client.register(&RegisterRequest::new("nurse", "nurse@clinic.org", "secret1")).await?;
/// ```
#[derive(Clone)]
pub struct AuthClient {
    inner: Arc<AuthClientInner>,
}

struct AuthClientInner {
    base_url: Url,
    http_client: Client,
    timeout: Option<Duration>,
}

impl AuthClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> AuthClientBuilder<Missing> {
        AuthClientBuilder::new()
    }

    /// Returns the base URL of the authentication API.
    pub fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.inner.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let url = self.endpoint("userRegister");
        log::info!("Registering user {:?} at {}", request.username, url);

        let mut http_request = self.inner.http_client.post(&url).json(request);

        if let Some(timeout) = self.inner.timeout {
            http_request = http_request.timeout(timeout);
        }

        let response = http_request.send().await?;
        handle_register_response(response).await
    }
}

impl std::fmt::Debug for AuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("timeout", &self.inner.timeout)
            .finish()
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing an [`AuthClient`].
///
/// Uses the typestate pattern so `build` only exists once `base_url` is set.
pub struct AuthClientBuilder<BaseUrl> {
    base_url: BaseUrl,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl AuthClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the base URL of the authentication API, e.g. [`DEFAULT_AUTH_URL`].
    pub fn base_url(self, url: impl Into<String>) -> AuthClientBuilder<Set<String>> {
        AuthClientBuilder {
            base_url: Set(url.into()),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for AuthClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> AuthClientBuilder<U> {
    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// Ignored when a custom HTTP client is supplied.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl AuthClientBuilder<Set<String>> {
    /// Builds the [`AuthClient`].
    ///
    /// Fails with [`ApiError::InvalidUrl`] if the base URL is not an absolute
    /// `http`/`https` URL.
    pub fn build(self) -> Result<AuthClient, ApiError> {
        let raw = self.base_url.0;
        let base_url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(format!(
                "{}: unsupported scheme {}",
                raw,
                base_url.scheme()
            )));
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(AuthClient {
            inner: Arc::new(AuthClientInner {
                base_url,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}
