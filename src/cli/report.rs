//! Report command implementations

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::{PaginationArgs, ReportFilterArgs};
use crate::client::ResourceApi;
use crate::client::models::Report;
use crate::error::Result;
use crate::models::ReportDisplay;
use crate::session::Role;

/// Roles allowed to browse reports
pub const LIST_ROLES: [Role; 3] = [Role::Admin, Role::Director, Role::Inspector];

/// Run the report list command
pub async fn list(
    opts: &GlobalOptions,
    filters: &ReportFilterArgs,
    pagination: &PaginationArgs,
) -> Result<()> {
    run_list_command::<Report, ReportDisplay, _, _, _>(
        opts,
        "reports",
        &LIST_ROLES,
        |client| async move { client.list_reports().await },
        |items, page_size| {
            filters
                .to_query()
                .page(pagination.page_index())
                .page_size(pagination.page_size(page_size))
                .apply(items)
        },
    )
    .await
}
