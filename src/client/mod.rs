//! Inspection backend API client

pub mod api;
pub mod inspection;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod query;

pub use api::{AuthApi, ResourceApi};
pub use inspection::InspectionClient;
#[cfg(test)]
pub use mock::MockInspectionClient;
pub use query::{Page, ReportQuery, ReportSortField, SortOrder, paginate, search, sort_teachers};
