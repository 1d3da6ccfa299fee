//! Report display model

use serde::Serialize;
use tabled::Tabled;

use super::or_dash;
use crate::client::models::Report;

/// Report display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ReportDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "DATE")]
    pub date: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "ESTABLISHMENT")]
    pub establishment: String,

    #[tabled(rename = "INSPECTOR")]
    pub inspector: String,
}

impl From<Report> for ReportDisplay {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            date: or_dash(r.visit_date.map(|d| d.format("%Y-%m-%d").to_string())),
            title: r.title,
            status: or_dash(Some(r.status)),
            establishment: or_dash(r.establishment_name),
            inspector: or_dash(r.inspector_name),
        }
    }
}
