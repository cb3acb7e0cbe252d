//! Network-driven record browser operations.
//!
//! Each workflow reads what it needs from the state, awaits the record
//! service, then applies the answer in one synchronous update. No borrow of
//! the state is held across an await, so the user can keep typing and
//! toggling while a request is outstanding.

use std::cell::RefCell;

use tracing::{debug, info, warn};

use super::browser::{FetchTicket, RecordBrowser};
use super::error::{BrowserError, DeleteFailure};
use super::service::RecordService;
use crate::models::{Notice, RecordId};

/// Owner of the [`RecordBrowser`] state a workflow operates on.
pub trait BrowserStore {
    /// Run `f` against the state. `None` once the owner has been disposed.
    fn update_browser<R>(&self, f: impl FnOnce(&mut RecordBrowser) -> R) -> Option<R>;
}

impl BrowserStore for RefCell<RecordBrowser> {
    fn update_browser<R>(&self, f: impl FnOnce(&mut RecordBrowser) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

fn update<St, R>(store: &St, f: impl FnOnce(&mut RecordBrowser) -> R) -> Result<R, BrowserError>
where
    St: BrowserStore,
{
    store.update_browser(f).ok_or(BrowserError::Detached)
}

// =============================================================================
// Fetch
// =============================================================================

/// Load the records of the current zone, then its type list.
///
/// Returns the number of records loaded. On failure the previous list and
/// selection stay in place. An empty zone clears the list without a request.
pub async fn fetch_records<St, S>(store: &St, service: &S) -> Result<usize, BrowserError>
where
    St: BrowserStore,
    S: RecordService,
{
    let ticket = update(store, RecordBrowser::begin_fetch)??;
    run_fetch(store, service, ticket).await
}

/// Load the records and type list of `zone`, whatever the zone input holds.
pub async fn fetch_zone<St, S>(store: &St, service: &S, zone: &str) -> Result<usize, BrowserError>
where
    St: BrowserStore,
    S: RecordService,
{
    let ticket = update(store, |b| b.begin_fetch_for(zone))??;
    run_fetch(store, service, ticket).await
}

async fn run_fetch<St, S>(store: &St, service: &S, ticket: FetchTicket) -> Result<usize, BrowserError>
where
    St: BrowserStore,
    S: RecordService,
{
    if ticket.zone().is_empty() {
        debug!(generation = ticket.generation(), "no zone set, clearing records");
        update(store, |b| {
            b.apply_records(&ticket, Vec::new())?;
            b.finish_fetch(&ticket);
            Ok::<_, BrowserError>(())
        })??;
        return Ok(0);
    }

    info!(zone = ticket.zone(), generation = ticket.generation(), "fetching records");
    let records = match service.list_records(ticket.zone()).await {
        Ok(records) => records,
        Err(err) => {
            warn!(zone = ticket.zone(), error = %err, "record fetch failed");
            update(store, |b| b.fail_fetch(&ticket, &err))??;
            return Err(err.into());
        }
    };

    let count = records.len();
    update(store, |b| b.apply_records(&ticket, records))??;
    info!(zone = ticket.zone(), count, "records loaded");

    fetch_types(store, service, &ticket).await?;
    Ok(count)
}

/// Load the type list for the zone of a fetch whose records were applied.
async fn fetch_types<St, S>(store: &St, service: &S, ticket: &FetchTicket) -> Result<(), BrowserError>
where
    St: BrowserStore,
    S: RecordService,
{
    match service.list_types(ticket.zone()).await {
        Ok(types) => {
            debug!(zone = ticket.zone(), count = types.len(), "types loaded");
            update(store, |b| b.apply_types(ticket, types))?
        }
        Err(err) => {
            warn!(zone = ticket.zone(), error = %err, "type fetch failed");
            update(store, |b| b.fail_types(ticket, &err))??;
            Err(err.into())
        }
    }
}

// =============================================================================
// Delete
// =============================================================================

/// What to do after a delete fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Attempt every selected record and report all failures.
    #[default]
    BestEffort,
    /// Stop at the first failure; the rest are reported as skipped.
    FailFast,
}

/// Outcome of [`delete_selected`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteReport {
    pub zone: String,
    pub deleted: Vec<RecordId>,
    pub failed: Vec<DeleteFailure>,
    /// Not attempted because an earlier delete failed under `FailFast`.
    pub skipped: Vec<RecordId>,
    /// Set when the re-fetch after deleting did not succeed.
    pub refresh_error: Option<BrowserError>,
}

impl DeleteReport {
    pub fn attempted(&self) -> usize {
        self.deleted.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && self.skipped.is_empty() && self.refresh_error.is_none()
    }

    pub fn notice(&self) -> Notice {
        let requested = self.attempted() + self.skipped.len();
        let mut text = format!("Deleted {} of {} records", self.deleted.len(), requested);

        if !self.failed.is_empty() {
            let ids: Vec<String> = self
                .failed
                .iter()
                .map(|f| format!("{} ({})", f.id, f.error))
                .collect();
            text.push_str(&format!("; failed: {}", ids.join(", ")));
        }
        if !self.skipped.is_empty() {
            text.push_str(&format!("; skipped {}", self.skipped.len()));
        }
        if let Some(err) = &self.refresh_error {
            text.push_str(&format!("; refresh failed: {}", err));
        }

        if self.is_success() {
            Notice::success(text)
        } else {
            Notice::error(text)
        }
    }
}

/// Delete every selected record, then re-fetch the zone they came from.
///
/// Deletes run one at a time in ascending id order. A `NotFound` answer
/// counts as deleted. Whatever happens, the deleted-from zone is re-fetched
/// exactly once after the last attempt, even if the zone input changed.
pub async fn delete_selected<St, S>(
    store: &St,
    service: &S,
    policy: DeletePolicy,
) -> Result<DeleteReport, BrowserError>
where
    St: BrowserStore,
    S: RecordService,
{
    let plan = update(store, RecordBrowser::begin_delete)?;
    info!(zone = %plan.zone, count = plan.ids.len(), ?policy, "deleting selected records");

    let mut report = DeleteReport {
        zone: plan.zone.clone(),
        ..DeleteReport::default()
    };

    for (idx, id) in plan.ids.iter().enumerate() {
        match service.delete_record(&plan.zone, id).await {
            Ok(()) => report.deleted.push(id.clone()),
            Err(err) if err.is_not_found() => {
                debug!(%id, "record already absent");
                report.deleted.push(id.clone());
            }
            Err(err) => {
                warn!(%id, error = %err, "delete failed");
                report.failed.push(DeleteFailure {
                    id: id.clone(),
                    error: err,
                });
                if policy == DeletePolicy::FailFast {
                    report.skipped = plan.ids[idx + 1..].to_vec();
                    break;
                }
            }
        }
    }

    match fetch_zone(store, service, &plan.zone).await {
        Ok(_) | Err(BrowserError::Superseded) => {}
        Err(BrowserError::Detached) => return Err(BrowserError::Detached),
        Err(err) => report.refresh_error = Some(err),
    }

    update(store, |b| b.finish_delete(&report))?;
    Ok(report)
}
