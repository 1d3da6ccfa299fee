//! Generic list command handler
//!
//! Every list command follows the same flow:
//! 1. Create command context (restores the session)
//! 2. Check the caller holds one of the allowed roles
//! 3. Fetch the full collection
//! 4. Narrow it to one page (filter, sort, paginate)
//! 5. Convert to display type and print

use std::future::Future;
use std::sync::Arc;

use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::{InspectionClient, Page};
use crate::error::Result;
use crate::output::{Formattable, progress};
use crate::session::Role;

/// Run a standard list command.
///
/// # Type Parameters
///
/// * `T` - The API model type returned by the fetcher (e.g., `Report`)
/// * `D` - The display type that implements `From<T>`, `Tabled`, and `Serialize`
///
/// # Arguments
///
/// * `opts` - Global CLI options (format, config path, API host)
/// * `resource_name` - Name for logging and the spinner (e.g., "reports")
/// * `roles` - Roles allowed to list this resource
/// * `fetcher` - Async function that fetches the collection
/// * `select` - Cuts the collection down to one page, given the configured page size
///
/// # Example
///
/// ```ignore
/// run_list_command::<Teacher, TeacherDisplay, _, _, _>(
///     opts,
///     "teachers",
///     &[Role::Admin, Role::Director],
///     |client| async move { client.list_teachers().await },
///     |items, page_size| paginate(items, 0, page_size),
/// ).await
/// ```
pub async fn run_list_command<T, D, Fut, F, S>(
    opts: &GlobalOptions,
    resource_name: &str,
    roles: &[Role],
    fetcher: F,
    select: S,
) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
    Fut: Future<Output = Result<Vec<T>>>,
    F: FnOnce(Arc<InspectionClient>) -> Fut,
    S: FnOnce(Vec<T>, usize) -> Page<T>,
{
    let ctx = CommandContext::new(opts).await?;
    let identity = ctx.authorize(roles).await?;

    debug!("Fetching {} as {}", resource_name, identity.email);

    let spinner = progress::spinner(&format!("Fetching {}...", resource_name));
    let fetched = fetcher(ctx.client.clone()).await;
    spinner.finish_and_clear();
    let items = ctx.guard(fetched).await?;

    debug!("Fetched {} {}", items.len(), resource_name);

    let page = select(items, ctx.page_size()).map(D::from);
    page.print(ctx.format)?;

    Ok(())
}
