//! Mock inspection API client for testing
//!
//! Implements the API traits in memory so the session manager and command
//! helpers can be exercised without a backend.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{AuthApi, ResourceApi};
use super::models::{
    Establishment, ForgotPasswordRequest, LoginRequest, LoginResponse, RegisterRequest, Report,
    ResetPasswordRequest, Teacher,
};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockInspectionClient::new()
///     .with_login(LoginResponse { token: "T".into(), refresh_token: None, roles: vec![] })
///     .await;
/// ```
#[derive(Default)]
pub struct MockInspectionClient {
    /// Response returned from login
    login: Arc<Mutex<Option<LoginResponse>>>,
    /// Artificial latency before login answers
    login_delay: Arc<Mutex<Option<Duration>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    establishments: Arc<Mutex<Vec<Establishment>>>,
    teachers: Arc<Mutex<Vec<Teacher>>>,
    reports: Arc<Mutex<Vec<Report>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Emails seen by login, in call order
    login_emails: Arc<Mutex<Vec<String>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub register: usize,
    pub forgot_password: usize,
    pub reset_password: usize,
    pub list_establishments: usize,
    pub list_teachers: usize,
    pub list_reports: usize,
}

impl MockInspectionClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the login response.
    pub async fn with_login(self, response: LoginResponse) -> Self {
        *self.login.lock().await = Some(response);
        self
    }

    /// Delay login by `delay` before answering.
    pub async fn with_login_delay(self, delay: Duration) -> Self {
        *self.login_delay.lock().await = Some(delay);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    pub async fn with_establishments(self, items: Vec<Establishment>) -> Self {
        *self.establishments.lock().await = items;
        self
    }

    pub async fn with_teachers(self, items: Vec<Teacher>) -> Self {
        *self.teachers.lock().await = items;
        self
    }

    pub async fn with_reports(self, items: Vec<Report>) -> Self {
        *self.reports.lock().await = items;
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    pub async fn login_emails(&self) -> Vec<String> {
        self.login_emails.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

// ============================================================================
// AuthApi Implementation
// ============================================================================

#[async_trait]
impl AuthApi for MockInspectionClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        self.call_count.lock().await.login += 1;
        self.login_emails.lock().await.push(request.email.clone());

        let delay = *self.login_delay.lock().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.check_error().await?;

        let login = self.login.lock().await;
        Ok(login.clone().unwrap_or_else(|| LoginResponse {
            token: "mock-session-token".to_string(),
            refresh_token: None,
            roles: Vec::new(),
        }))
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<Option<String>> {
        self.call_count.lock().await.register += 1;
        self.check_error().await?;
        Ok(Some("Account created".to_string()))
    }

    async fn forgot_password(&self, _request: &ForgotPasswordRequest) -> Result<Option<String>> {
        self.call_count.lock().await.forgot_password += 1;
        self.check_error().await?;
        Ok(None)
    }

    async fn reset_password(&self, _request: &ResetPasswordRequest) -> Result<Option<String>> {
        self.call_count.lock().await.reset_password += 1;
        self.check_error().await?;
        Ok(None)
    }
}

// ============================================================================
// ResourceApi Implementation
// ============================================================================

#[async_trait]
impl ResourceApi for MockInspectionClient {
    async fn list_establishments(&self) -> Result<Vec<Establishment>> {
        self.call_count.lock().await.list_establishments += 1;
        self.check_error().await?;
        Ok(self.establishments.lock().await.clone())
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        self.call_count.lock().await.list_teachers += 1;
        self.check_error().await?;
        Ok(self.teachers.lock().await.clone())
    }

    async fn list_reports(&self) -> Result<Vec<Report>> {
        self.call_count.lock().await.list_reports += 1;
        self.check_error().await?;
        Ok(self.reports.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockInspectionClient::new();
        assert!(mock.list_reports().await.unwrap().is_empty());
        assert!(mock.list_teachers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockInspectionClient::new()
            .with_error(ApiError::Forbidden)
            .await;

        assert!(mock.list_establishments().await.is_err());
        assert!(mock.list_establishments().await.is_ok());
        assert_eq!(mock.call_counts().await.list_establishments, 2);
    }

    #[tokio::test]
    async fn test_mock_serves_configured_collections() {
        use crate::client::{ReportQuery, search};

        let mock = MockInspectionClient::new()
            .with_establishments(vec![Establishment {
                id: 3,
                name: "Lycee Nord".to_string(),
                code: None,
                city: Some("Lille".to_string()),
                kind: None,
                director_name: None,
            }])
            .await
            .with_teachers(vec![Teacher {
                id: 9,
                first_name: "Awa".to_string(),
                last_name: "Ndiaye".to_string(),
                email: None,
                subject: None,
                establishment_name: Some("Lycee Nord".to_string()),
            }])
            .await
            .with_reports(vec![Report {
                id: 1,
                title: "Visit".to_string(),
                status: "DRAFT".to_string(),
                visit_date: None,
                establishment_name: Some("Lycee Nord".to_string()),
                inspector_name: None,
                teacher_name: Some("Awa Ndiaye".to_string()),
            }])
            .await;

        let establishments = mock.list_establishments().await.unwrap();
        assert_eq!(search(establishments, Some("lille")).len(), 1);
        assert_eq!(mock.list_teachers().await.unwrap()[0].full_name(), "Awa Ndiaye");

        let page = ReportQuery::new()
            .status("draft")
            .apply(mock.list_reports().await.unwrap());
        assert_eq!(page.total, 1);

        let counts = mock.call_counts().await;
        assert_eq!(counts.list_establishments, 1);
        assert_eq!(counts.list_teachers, 1);
        assert_eq!(counts.list_reports, 1);
    }

    #[tokio::test]
    async fn test_mock_login_records_email() {
        let mock = MockInspectionClient::new();
        let response = mock
            .login(&LoginRequest {
                email: "a@b.com".to_string(),
                password: "pw".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.token, "mock-session-token");
        assert_eq!(mock.login_emails().await, vec!["a@b.com"]);
    }
}
