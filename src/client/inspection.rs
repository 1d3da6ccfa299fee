//! Inspection backend HTTP client

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use super::api::{AuthApi, ResourceApi};
use super::models::{
    Establishment, ForgotPasswordRequest, LoginRequest, LoginResponse, MessageBody,
    RegisterRequest, Report, ResetPasswordRequest, Teacher,
};
use crate::error::{ApiError, Result, UNKNOWN_ERROR_MESSAGE};

/// Client-side request ceiling
const RATE_LIMIT_PER_SECOND: NonZeroU32 = NonZeroU32::new(6).unwrap();

/// HTTP timeout for every request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Turn a non-2xx body into the surfaced error text
fn backend_message(body: &str) -> String {
    serde_json::from_str::<MessageBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string())
}

/// Inspection backend API client
pub struct InspectionClient {
    http: HttpClient,
    base_url: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    bearer: Arc<RwLock<Option<String>>>,
}

impl InspectionClient {
    /// Create a client for `api_host` (scheme + host, e.g. `http://localhost:8080`)
    pub fn with_host(api_host: &str) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota = Quota::per_second(RATE_LIMIT_PER_SECOND);

        Ok(Self {
            http,
            base_url: format!("{}/api", api_host.trim_end_matches('/')),
            rate_limiter: Arc::new(RateLimiter::direct(quota)),
            bearer: Arc::new(RwLock::new(None)),
        })
    }

    /// Set or clear the bearer token used for resource requests
    pub async fn set_token(&self, token: Option<String>) {
        *self.bearer.write().await = token;
    }

    /// POST to an auth endpoint, mapping any non-2xx to `ApiError::Backend`
    async fn post_auth<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<String> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            debug!("{} returned {}", path, status);
            return Err(ApiError::Backend {
                message: backend_message(&text),
            }
            .into());
        }

        Ok(text)
    }

    /// POST where the success body is at most a `{ message }` confirmation
    async fn post_confirmation<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<String>> {
        let text = self.post_auth(path, body).await?;
        Ok(serde_json::from_str::<MessageBody>(&text)
            .ok()
            .and_then(|b| b.message))
    }

    /// Authenticated GET with status mapping
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.rate_limiter.until_ready().await;

        let token = self
            .bearer
            .read()
            .await
            .clone()
            .ok_or(ApiError::Unauthorized)?;

        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        match status {
            s if s.is_success() => {
                let data = response.json::<T>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                Ok(data)
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(path.to_string()).into()),
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimit(Duration::from_secs(retry_after)).into())
            }
            s if s.is_server_error() => {
                let text = response.text().await.unwrap_or_default();
                Err(ApiError::ServerError(backend_message(&text)).into())
            }
            s => {
                debug!("{} returned {}", path, s);
                let text = response.text().await.unwrap_or_default();
                Err(ApiError::Backend {
                    message: backend_message(&text),
                }
                .into())
            }
        }
    }
}

#[async_trait]
impl AuthApi for InspectionClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        let text = self.post_auth("/auth/login", request).await?;
        let response: LoginResponse = serde_json::from_str(&text).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse login response: {}", e))
        })?;
        Ok(response)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Option<String>> {
        self.post_confirmation("/auth/register", request).await
    }

    async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<Option<String>> {
        self.post_confirmation("/auth/forgot-password", request)
            .await
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<Option<String>> {
        self.post_confirmation("/auth/reset-password", request)
            .await
    }
}

#[async_trait]
impl ResourceApi for InspectionClient {
    async fn list_establishments(&self) -> Result<Vec<Establishment>> {
        self.get("/establishments").await
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        self.get("/teachers").await
    }

    async fn list_reports(&self) -> Result<Vec<Report>> {
        self.get("/reports").await
    }
}
