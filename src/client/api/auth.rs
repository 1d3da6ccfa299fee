//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{
    ForgotPasswordRequest, LoginRequest, LoginResponse, RegisterRequest, ResetPasswordRequest,
};
use crate::error::Result;

/// Account operations against `/api/auth/*`.
///
/// Every non-2xx response becomes `ApiError::Backend` carrying the backend's
/// `message` verbatim. Nothing here is retried.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange a credential for a session token
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse>;

    /// Create an account; returns the backend's confirmation message if any
    async fn register(&self, request: &RegisterRequest) -> Result<Option<String>>;

    /// Ask for a password reset link
    async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<Option<String>>;

    /// Set a new password using a reset token
    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<Option<String>>;
}
