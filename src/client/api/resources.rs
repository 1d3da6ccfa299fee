//! Resource listing API trait

use async_trait::async_trait;

use crate::client::models::{Establishment, Report, Teacher};
use crate::error::Result;

/// Bearer-authenticated collection reads.
///
/// The bearer token is whatever the client was last given via `set_token`.
#[async_trait]
pub trait ResourceApi: Send + Sync {
    async fn list_establishments(&self) -> Result<Vec<Establishment>>;

    async fn list_teachers(&self) -> Result<Vec<Teacher>>;

    async fn list_reports(&self) -> Result<Vec<Report>>;
}
