//! Pagination argument types for CLI commands

use clap::Args;

/// Shared pagination arguments for list commands.
///
/// Pages are cut client side after filtering and sorting.
#[derive(Args, Debug, Default, Clone)]
pub struct PaginationArgs {
    /// Results per page (defaults to the configured page size)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Page number (1-indexed)
    #[arg(long, short = 'p', default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub page: u64,
}

impl PaginationArgs {
    /// 0-indexed page for `paginate`
    pub fn page_index(&self) -> usize {
        usize::try_from(self.page.saturating_sub(1)).unwrap_or(usize::MAX)
    }

    /// Page size, falling back to the configured default
    pub fn page_size(&self, default: usize) -> usize {
        self.limit.filter(|n| *n > 0).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_index_is_zero_based() {
        let args = PaginationArgs {
            limit: None,
            page: 3,
        };
        assert_eq!(args.page_index(), 2);
    }

    #[test]
    fn test_page_size_falls_back() {
        let args = PaginationArgs {
            limit: Some(0),
            page: 1,
        };
        assert_eq!(args.page_size(10), 10);

        let args = PaginationArgs {
            limit: Some(25),
            page: 1,
        };
        assert_eq!(args.page_size(10), 25);
    }
}
