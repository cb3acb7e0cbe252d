//! Record browser state.
//!
//! [`RecordBrowser`] owns the zone input, the fetched record and type lists,
//! the selection set and the type filter. Every transition is a synchronous
//! method; network work lives in [`super::workflow`], which hands results
//! back through the `begin_*`/`apply_*`/`fail_*` methods.
//!
//! The select-all flag is never stored. It is derived from the record list
//! and the selection on every read, see [`all_selected`].

use std::collections::BTreeSet;

use tracing::{debug, warn};

use super::error::{BrowserError, ServiceError, ZoneError};
use super::workflow::DeleteReport;
use super::zone::normalize_zone;
use crate::models::{Notice, Record, RecordId, TypeFilter};

/// `true` iff `records` is non-empty and every record id is in `selection`.
pub fn all_selected(records: &[Record], selection: &BTreeSet<RecordId>) -> bool {
    !records.is_empty() && records.iter().all(|r| selection.contains(&r.id))
}

/// Handle for one fetch cycle.
///
/// Only the ticket of the most recent [`RecordBrowser::begin_fetch`] may
/// apply results; older tickets are superseded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    zone: String,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Normalized zone this fetch was started for.
    pub fn zone(&self) -> &str {
        &self.zone
    }
}

/// Deletes to issue, captured when a bulk delete starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeletePlan {
    pub zone: String,
    pub ids: Vec<RecordId>,
}

/// Counts shown in the status bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub visible: usize,
    pub selected: usize,
    /// Selected records the current filter hides.
    pub hidden_selected: usize,
}

#[derive(Clone, Debug, Default)]
pub struct RecordBrowser {
    zone: String,
    /// Zone the current record list was fetched from.
    loaded_zone: String,
    records: Vec<Record>,
    types: Vec<String>,
    selection: BTreeSet<RecordId>,
    filter: TypeFilter,
    generation: u64,
    pending_fetch: Option<u64>,
    deleting: bool,
    notice: Option<Notice>,
}

impl RecordBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn zone(&self) -> &str {
        &self.zone
    }

    pub fn loaded_zone(&self) -> &str {
        &self.loaded_zone
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn selection(&self) -> &BTreeSet<RecordId> {
        &self.selection
    }

    pub fn filter(&self) -> &TypeFilter {
        &self.filter
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selection.contains(id)
    }

    /// Whether a fetch or bulk delete is in flight.
    pub fn is_busy(&self) -> bool {
        self.pending_fetch.is_some() || self.deleting
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn select_all_flag(&self) -> bool {
        all_selected(&self.records, &self.selection)
    }

    /// Records passing the type filter, in list order.
    pub fn visible_records(&self) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| self.filter.matches(&r.record_type))
            .collect()
    }

    pub fn summary(&self) -> Summary {
        let visible = self.visible_records();
        let visible_selected = visible
            .iter()
            .filter(|r| self.selection.contains(&r.id))
            .count();
        Summary {
            total: self.records.len(),
            visible: visible.len(),
            selected: self.selection.len(),
            hidden_selected: self.selection.len().saturating_sub(visible_selected),
        }
    }

    // =========================================================================
    // User input
    // =========================================================================

    /// Store the zone input. No request is made.
    pub fn set_zone(&mut self, name: impl Into<String>) {
        self.zone = name.into();
    }

    /// Narrow the visible records to `filter`. Selection is untouched.
    pub fn set_filter(&mut self, filter: TypeFilter) {
        self.filter = filter;
    }

    /// Flip membership of `id`. Returns `false` for ids not in the list.
    pub fn toggle_selection(&mut self, id: &RecordId) -> bool {
        if !self.records.iter().any(|r| &r.id == id) {
            warn!(%id, "ignoring toggle for record not in list");
            return false;
        }
        if !self.selection.remove(id) {
            self.selection.insert(id.clone());
        }
        true
    }

    /// Clear the selection if everything is selected, otherwise select all.
    pub fn toggle_select_all(&mut self) {
        if self.select_all_flag() {
            self.selection.clear();
        } else {
            self.selection = self.records.iter().map(|r| r.id.clone()).collect();
        }
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    // =========================================================================
    // Fetch cycle
    // =========================================================================

    /// Start a fetch for the current zone input.
    pub fn begin_fetch(&mut self) -> Result<FetchTicket, ZoneError> {
        let zone = self.zone.clone();
        self.begin_fetch_for(&zone)
    }

    /// Start a fetch for `zone`, leaving the zone input as typed.
    ///
    /// Any fetch still in flight is superseded. A malformed zone leaves all
    /// state as it was and reports the error as a notice.
    pub fn begin_fetch_for(&mut self, zone: &str) -> Result<FetchTicket, ZoneError> {
        let zone = match normalize_zone(zone) {
            Ok(zone) => zone,
            Err(err) => {
                self.notice = Some(Notice::error(err.to_string()));
                return Err(err);
            }
        };

        self.generation += 1;
        if let Some(previous) = self.pending_fetch.replace(self.generation) {
            debug!(previous, current = self.generation, "superseding in-flight fetch");
        }

        Ok(FetchTicket {
            generation: self.generation,
            zone,
        })
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.pending_fetch == Some(ticket.generation)
    }

    fn check_current(&self, ticket: &FetchTicket) -> Result<(), BrowserError> {
        if self.is_current(ticket) {
            Ok(())
        } else {
            debug!(generation = ticket.generation, "dropping stale fetch result");
            Err(BrowserError::Superseded)
        }
    }

    /// Replace the record list and clear the selection.
    ///
    /// The fetch stays pending until the type list arrives or
    /// [`finish_fetch`](Self::finish_fetch) is called.
    pub fn apply_records(
        &mut self,
        ticket: &FetchTicket,
        records: Vec<Record>,
    ) -> Result<(), BrowserError> {
        self.check_current(ticket)?;

        self.records = records;
        self.loaded_zone = ticket.zone.clone();
        self.selection.clear();
        self.notice = if ticket.zone.is_empty() {
            None
        } else {
            Some(Notice::info(format!(
                "{} records in {}",
                self.records.len(),
                ticket.zone
            )))
        };
        Ok(())
    }

    /// Replace the type list and end the fetch.
    ///
    /// Types are kept sorted and distinct. A filter naming a type the zone
    /// no longer has falls back to `All`.
    pub fn apply_types(
        &mut self,
        ticket: &FetchTicket,
        mut types: Vec<String>,
    ) -> Result<(), BrowserError> {
        self.check_current(ticket)?;

        types.sort();
        types.dedup();
        if let TypeFilter::Type(active) = &self.filter
            && !types.contains(active)
        {
            debug!(filter = %active, "filter not in new type list, resetting");
            self.filter = TypeFilter::All;
        }
        self.types = types;
        self.pending_fetch = None;
        Ok(())
    }

    /// Record a failed records request. The current list is kept.
    pub fn fail_fetch(
        &mut self,
        ticket: &FetchTicket,
        err: &ServiceError,
    ) -> Result<(), BrowserError> {
        self.check_current(ticket)?;
        self.notice = Some(Notice::error(format!(
            "Failed to load records for {}: {}",
            ticket.zone, err
        )));
        self.pending_fetch = None;
        Ok(())
    }

    /// Record a failed types request. Records already applied stay.
    pub fn fail_types(
        &mut self,
        ticket: &FetchTicket,
        err: &ServiceError,
    ) -> Result<(), BrowserError> {
        self.check_current(ticket)?;
        self.notice = Some(Notice::error(format!(
            "Failed to load record types for {}: {}",
            ticket.zone, err
        )));
        self.pending_fetch = None;
        Ok(())
    }

    /// End a fetch that has no type request to wait for.
    pub fn finish_fetch(&mut self, ticket: &FetchTicket) {
        if self.is_current(ticket) {
            self.pending_fetch = None;
        }
    }

    // =========================================================================
    // Bulk delete
    // =========================================================================

    /// Capture the selection for deletion, in ascending id order.
    ///
    /// Deletes target the zone the list was loaded from, not whatever the
    /// zone input holds now.
    pub fn begin_delete(&mut self) -> DeletePlan {
        self.deleting = true;
        DeletePlan {
            zone: self.loaded_zone.clone(),
            ids: self.selection.iter().cloned().collect(),
        }
    }

    /// End a bulk delete and report its outcome. The selection is cleared
    /// even when the re-fetch failed.
    pub fn finish_delete(&mut self, report: &DeleteReport) {
        self.deleting = false;
        self.selection.clear();
        self.notice = Some(report.notice());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoticeLevel;

    fn rec(id: u64, record_type: &str) -> Record {
        Record::new(id, format!("r{id}.example.com"), record_type, "198.51.100.1")
    }

    fn id(n: u64) -> RecordId {
        RecordId::from(n)
    }

    fn ids(ns: &[u64]) -> BTreeSet<RecordId> {
        ns.iter().copied().map(id).collect()
    }

    fn loaded(records: Vec<Record>) -> RecordBrowser {
        let mut browser = RecordBrowser::new();
        browser.set_zone("example.com");
        let ticket = browser.begin_fetch().unwrap();
        browser.apply_records(&ticket, records).unwrap();
        browser.apply_types(&ticket, Vec::new()).unwrap();
        browser
    }

    // =========================================================================
    // Select-all derivation
    // =========================================================================

    #[test]
    fn test_all_selected_requires_non_empty_list() {
        assert!(!all_selected(&[], &ids(&[1])));
        assert!(!all_selected(&[], &BTreeSet::new()));
    }

    #[test]
    fn test_all_selected_is_superset_check() {
        let records = vec![rec(1, "A"), rec(2, "CNAME")];
        assert!(!all_selected(&records, &BTreeSet::new()));
        assert!(!all_selected(&records, &ids(&[1])));
        assert!(all_selected(&records, &ids(&[1, 2])));
        assert!(all_selected(&records, &ids(&[1, 2, 9])));
    }

    #[test]
    fn test_select_individually_then_deselect_one() {
        let mut browser = loaded(vec![rec(1, "A"), rec(2, "CNAME")]);

        assert!(browser.toggle_selection(&id(1)));
        assert_eq!(browser.selection(), &ids(&[1]));
        assert!(!browser.select_all_flag());

        assert!(browser.toggle_selection(&id(2)));
        assert_eq!(browser.selection(), &ids(&[1, 2]));
        assert!(browser.select_all_flag());

        browser.toggle_selection(&id(1));
        assert!(!browser.select_all_flag());
    }

    // =========================================================================
    // Selection
    // =========================================================================

    #[test]
    fn test_toggle_selection_is_own_inverse() {
        let mut browser = loaded(vec![rec(1, "A"), rec(2, "A"), rec(3, "MX")]);
        browser.toggle_selection(&id(3));
        let before = browser.selection().clone();

        browser.toggle_selection(&id(2));
        browser.toggle_selection(&id(2));
        assert_eq!(browser.selection(), &before);

        browser.toggle_selection(&id(3));
        browser.toggle_selection(&id(3));
        assert_eq!(browser.selection(), &before);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut browser = loaded(vec![rec(1, "A")]);
        assert!(!browser.toggle_selection(&id(99)));
        assert!(browser.selection().is_empty());
    }

    #[test]
    fn test_toggle_select_all() {
        let mut browser = loaded(vec![rec(1, "A"), rec(2, "A"), rec(3, "TXT")]);

        browser.toggle_select_all();
        assert_eq!(browser.selection(), &ids(&[1, 2, 3]));
        assert!(browser.select_all_flag());

        browser.toggle_select_all();
        assert!(browser.selection().is_empty());
        assert!(!browser.select_all_flag());
    }

    #[test]
    fn test_toggle_select_all_from_partial_selects_everything() {
        let mut browser = loaded(vec![rec(1, "A"), rec(2, "A")]);
        browser.toggle_selection(&id(2));
        browser.toggle_select_all();
        assert!(browser.select_all_flag());
    }

    #[test]
    fn test_toggle_select_all_on_empty_list() {
        let mut browser = loaded(Vec::new());
        browser.toggle_select_all();
        assert!(browser.selection().is_empty());
        assert!(!browser.select_all_flag());
    }

    // =========================================================================
    // Fetch cycle
    // =========================================================================

    #[test]
    fn test_fetch_clears_selection() {
        let mut browser = loaded(vec![rec(1, "A"), rec(2, "CNAME")]);
        browser.toggle_select_all();
        assert!(browser.select_all_flag());

        let ticket = browser.begin_fetch().unwrap();
        browser.apply_records(&ticket, vec![rec(3, "A")]).unwrap();

        assert!(browser.selection().is_empty());
        assert!(!browser.select_all_flag());
        assert_eq!(browser.records(), &[rec(3, "A")]);
    }

    #[test]
    fn test_failed_fetch_keeps_records_and_selection() {
        let mut browser = loaded(vec![rec(1, "A"), rec(2, "A")]);
        browser.toggle_selection(&id(1));

        let ticket = browser.begin_fetch().unwrap();
        assert!(browser.is_busy());
        browser
            .fail_fetch(&ticket, &ServiceError::Transport("down".to_string()))
            .unwrap();

        assert!(!browser.is_busy());
        assert_eq!(browser.records().len(), 2);
        assert!(browser.is_selected(&id(1)));
        assert_eq!(browser.notice().map(|n| n.level), Some(NoticeLevel::Error));
    }

    #[test]
    fn test_malformed_zone_is_rejected_without_state_change() {
        let mut browser = loaded(vec![rec(1, "A")]);
        browser.toggle_selection(&id(1));
        browser.set_zone("not a zone");

        assert!(matches!(browser.begin_fetch(), Err(ZoneError::Malformed(_))));
        assert!(!browser.is_busy());
        assert_eq!(browser.records().len(), 1);
        assert!(browser.is_selected(&id(1)));
        assert!(browser.notice().is_some_and(|n| n.is_error()));
    }

    #[test]
    fn test_newer_fetch_supersedes_older() {
        let mut browser = RecordBrowser::new();
        browser.set_zone("old.example");
        let old = browser.begin_fetch().unwrap();
        browser.set_zone("new.example");
        let new = browser.begin_fetch().unwrap();

        browser.apply_records(&new, vec![rec(2, "A")]).unwrap();
        browser.apply_types(&new, vec!["A".to_string()]).unwrap();

        assert_eq!(
            browser.apply_records(&old, vec![rec(1, "MX")]),
            Err(BrowserError::Superseded)
        );
        assert_eq!(
            browser.apply_types(&old, vec!["MX".to_string()]),
            Err(BrowserError::Superseded)
        );
        assert_eq!(browser.records(), &[rec(2, "A")]);
        assert_eq!(browser.types(), &["A".to_string()]);
        assert_eq!(browser.loaded_zone(), "new.example");
        assert!(!browser.is_busy());
    }

    #[test]
    fn test_stale_failure_does_not_clear_pending_fetch() {
        let mut browser = RecordBrowser::new();
        browser.set_zone("example.com");
        let old = browser.begin_fetch().unwrap();
        let _new = browser.begin_fetch().unwrap();

        let err = ServiceError::Transport("late".to_string());
        assert_eq!(browser.fail_fetch(&old, &err), Err(BrowserError::Superseded));
        assert!(browser.is_busy());
        assert!(browser.notice().is_none());
    }

    #[test]
    fn test_types_are_sorted_and_distinct() {
        let mut browser = RecordBrowser::new();
        browser.set_zone("example.com");
        let ticket = browser.begin_fetch().unwrap();
        browser.apply_records(&ticket, Vec::new()).unwrap();
        browser
            .apply_types(
                &ticket,
                vec!["TXT".to_string(), "A".to_string(), "TXT".to_string()],
            )
            .unwrap();
        assert_eq!(browser.types(), &["A".to_string(), "TXT".to_string()]);
    }

    #[test]
    fn test_dangling_filter_resets_when_types_arrive() {
        let mut browser = loaded(vec![rec(1, "MX")]);
        browser.set_filter(TypeFilter::from_value("MX"));

        browser.set_zone("other.example");
        assert_eq!(browser.filter(), &TypeFilter::from_value("MX"));

        let ticket = browser.begin_fetch().unwrap();
        browser.apply_records(&ticket, vec![rec(5, "A")]).unwrap();
        browser.apply_types(&ticket, vec!["A".to_string()]).unwrap();
        assert_eq!(browser.filter(), &TypeFilter::All);
    }

    #[test]
    fn test_filter_kept_when_type_still_present() {
        let mut browser = loaded(vec![rec(1, "MX")]);
        browser.set_filter(TypeFilter::from_value("MX"));

        let ticket = browser.begin_fetch().unwrap();
        browser.apply_records(&ticket, vec![rec(1, "MX")]).unwrap();
        browser
            .apply_types(&ticket, vec!["A".to_string(), "MX".to_string()])
            .unwrap();
        assert_eq!(browser.filter(), &TypeFilter::from_value("MX"));
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    #[test]
    fn test_visible_records_under_all_is_identity() {
        let records = vec![rec(3, "A"), rec(1, "CNAME"), rec(2, "A")];
        let browser = loaded(records.clone());
        let visible: Vec<Record> = browser.visible_records().into_iter().cloned().collect();
        assert_eq!(visible, records);
    }

    #[test]
    fn test_visible_records_under_type_filter() {
        let mut browser = RecordBrowser::new();
        browser.set_zone("example.com");
        let ticket = browser.begin_fetch().unwrap();
        browser
            .apply_records(&ticket, vec![rec(1, "A"), rec(2, "CNAME"), rec(3, "A")])
            .unwrap();
        browser
            .apply_types(&ticket, vec!["A".to_string(), "CNAME".to_string()])
            .unwrap();

        browser.set_filter(TypeFilter::from_value("CNAME"));
        let visible: Vec<&RecordId> = browser.visible_records().iter().map(|r| &r.id).collect();
        assert_eq!(visible, vec![&id(2)]);

        browser.set_filter(TypeFilter::from_value("A"));
        let visible: Vec<&RecordId> = browser.visible_records().iter().map(|r| &r.id).collect();
        assert_eq!(visible, vec![&id(1), &id(3)]);
    }

    #[test]
    fn test_filter_does_not_touch_selection() {
        let mut browser = loaded(vec![rec(1, "A"), rec(2, "CNAME")]);
        browser.toggle_selection(&id(1));
        browser.toggle_selection(&id(2));

        browser.set_filter(TypeFilter::from_value("CNAME"));
        assert_eq!(browser.selection().len(), 2);
        assert!(browser.select_all_flag());
        assert_eq!(browser.records().len(), 2);

        let summary = browser.summary();
        assert_eq!(summary.visible, 1);
        assert_eq!(summary.selected, 2);
        assert_eq!(summary.hidden_selected, 1);

        assert_eq!(browser.begin_delete().ids, vec![id(1), id(2)]);
    }

    // =========================================================================
    // Delete plan
    // =========================================================================

    #[test]
    fn test_delete_plan_targets_loaded_zone() {
        let mut browser = loaded(vec![rec(2, "A"), rec(1, "A")]);
        browser.toggle_select_all();
        browser.set_zone("typed-but-not-fetched.example");

        let plan = browser.begin_delete();
        assert_eq!(plan.zone, "example.com");
        assert_eq!(plan.ids, vec![id(1), id(2)]);
        assert!(browser.is_deleting());
        assert!(browser.is_busy());
    }

    #[test]
    fn test_fetch_for_explicit_zone_keeps_input() {
        let mut browser = loaded(vec![rec(1, "A")]);
        browser.set_zone("");

        let ticket = browser.begin_fetch_for("example.com.").unwrap();
        assert_eq!(ticket.zone(), "example.com");
        assert_eq!(browser.zone(), "");
        assert!(browser.is_busy());
    }
}
