//! Teacher command implementations

use crate::cli::PaginationArgs;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::client::models::Teacher;
use crate::client::{ResourceApi, paginate, search, sort_teachers};
use crate::error::Result;
use crate::models::TeacherDisplay;
use crate::session::Role;

/// Teacher records are restricted to administrators and directors
pub const LIST_ROLES: [Role; 2] = [Role::Admin, Role::Director];

/// Run the teacher list command
pub async fn list(
    opts: &GlobalOptions,
    term: Option<&str>,
    pagination: &PaginationArgs,
) -> Result<()> {
    run_list_command::<Teacher, TeacherDisplay, _, _, _>(
        opts,
        "teachers",
        &LIST_ROLES,
        |client| async move { client.list_teachers().await },
        |mut items, page_size| {
            sort_teachers(&mut items);
            paginate(
                search(items, term),
                pagination.page_index(),
                pagination.page_size(page_size),
            )
        },
    )
    .await
}
