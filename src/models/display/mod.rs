//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod establishment;
mod report;
mod session;
mod teacher;

pub use establishment::EstablishmentDisplay;
pub use report::ReportDisplay;
pub use session::SessionDisplay;
pub use teacher::TeacherDisplay;

/// Placeholder for absent optional fields in tables
pub(crate) fn or_dash(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "--".to_string())
}
