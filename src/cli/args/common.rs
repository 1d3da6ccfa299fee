//! Common CLI types shared across commands

/// Sort direction for list commands
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SortDir {
    /// Ascending order
    Asc,
    /// Descending order
    Desc,
}

impl From<SortDir> for crate::client::SortOrder {
    fn from(dir: SortDir) -> Self {
        match dir {
            SortDir::Asc => crate::client::SortOrder::Asc,
            SortDir::Desc => crate::client::SortOrder::Desc,
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - human-readable, one row per entry
    #[default]
    Table,
    /// JSON format - structured for scripts
    Json,
}
