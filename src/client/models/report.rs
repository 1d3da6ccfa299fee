//! Inspection report models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inspection report as listed by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: i64,

    #[serde(default)]
    pub title: String,

    /// Workflow status (DRAFT, SUBMITTED, VALIDATED, ...)
    #[serde(default)]
    pub status: String,

    /// Date of the inspection visit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub establishment_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspector_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
}
