//! Filter argument types for CLI commands

use clap::Args;

use super::SortDir;
use crate::client::{ReportQuery, ReportSortField};

/// Report field to sort by
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportSortArg {
    Date,
    Title,
    Status,
    Establishment,
    Inspector,
}

impl From<ReportSortArg> for ReportSortField {
    fn from(arg: ReportSortArg) -> Self {
        match arg {
            ReportSortArg::Date => ReportSortField::Date,
            ReportSortArg::Title => ReportSortField::Title,
            ReportSortArg::Status => ReportSortField::Status,
            ReportSortArg::Establishment => ReportSortField::Establishment,
            ReportSortArg::Inspector => ReportSortField::Inspector,
        }
    }
}

/// Filter arguments for the report list command.
#[derive(Args, Debug, Clone)]
pub struct ReportFilterArgs {
    /// Search title, establishment and inspector (case-insensitive)
    #[arg(long, short = 'q')]
    pub search: Option<String>,

    /// Filter by status (e.g. DRAFT, SUBMITTED, VALIDATED)
    #[arg(long, short = 's')]
    pub status: Option<String>,

    /// Filter by establishment name (substring)
    #[arg(long, short = 'e')]
    pub establishment: Option<String>,

    /// Filter by inspector name (substring)
    #[arg(long, short = 'i')]
    pub inspector: Option<String>,

    /// Field to sort by
    #[arg(long, value_enum, default_value = "date")]
    pub sort_by: ReportSortArg,

    /// Sort direction (asc, desc)
    #[arg(long, value_enum, default_value = "desc", hide_possible_values = true)]
    pub sort_dir: SortDir,
}

impl ReportFilterArgs {
    /// Build the client-side query, without paging
    pub fn to_query(&self) -> ReportQuery {
        let mut query = ReportQuery::new().sort(self.sort_by.into(), self.sort_dir.into());

        if let Some(ref term) = self.search {
            query = query.search(term);
        }
        if let Some(ref status) = self.status {
            query = query.status(status);
        }
        if let Some(ref name) = self.establishment {
            query = query.establishment(name);
        }
        if let Some(ref name) = self.inspector {
            query = query.inspector(name);
        }

        query
    }
}
