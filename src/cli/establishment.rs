//! Establishment command implementations

use crate::cli::PaginationArgs;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::client::models::Establishment;
use crate::client::{ResourceApi, paginate, search};
use crate::error::Result;
use crate::models::EstablishmentDisplay;
use crate::session::Role;

/// Roles allowed to browse establishments
pub const LIST_ROLES: [Role; 3] = [Role::Admin, Role::Director, Role::Inspector];

/// Run the establishment list command
pub async fn list(
    opts: &GlobalOptions,
    term: Option<&str>,
    pagination: &PaginationArgs,
) -> Result<()> {
    run_list_command::<Establishment, EstablishmentDisplay, _, _, _>(
        opts,
        "establishments",
        &LIST_ROLES,
        |client| async move { client.list_establishments().await },
        |items, page_size| {
            paginate(
                search(items, term),
                pagination.page_index(),
                pagination.page_size(page_size),
            )
        },
    )
    .await
}
