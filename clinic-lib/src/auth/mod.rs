//! Authentication API contract

mod register;

pub use register::RegisterRequest;
pub use register::RegisterResponse;

pub(crate) use register::handle_register_response;

use async_trait::async_trait;

use crate::error::ApiError;

/// The remote side of the authentication endpoints.
///
/// [`AuthClient`](crate::AuthClient) implements this over HTTP. Forms depend
/// on the trait so they can be driven without a server.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Creates a new account.
    ///
    /// Resolves to `Ok` only for a `200 OK` answer; every other status is an
    /// [`ApiError::Http`] carrying the server's `message`, if it sent one.
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError>;
}
