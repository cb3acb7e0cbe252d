//! In-memory record service.
//!
//! Used by tests, and by the `mock` feature to run the UI without a backend.
//! Failures can be injected per operation and every call is logged so tests
//! can assert on request order.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use super::error::ServiceError;
use super::service::RecordService;
use crate::models::{Record, RecordId};

/// A call received by [`MemoryRecordService`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    ListRecords(String),
    ListTypes(String),
    Delete(String, RecordId),
}

#[derive(Debug, Default)]
pub struct MemoryRecordService {
    zones: RefCell<BTreeMap<String, Vec<Record>>>,
    types_override: RefCell<BTreeMap<String, Vec<String>>>,
    list_failure: RefCell<Option<ServiceError>>,
    types_failure: RefCell<Option<ServiceError>>,
    delete_failures: RefCell<BTreeMap<RecordId, ServiceError>>,
    /// Number of scheduler yields before answering, per zone.
    latency: RefCell<BTreeMap<String, usize>>,
    calls: RefCell<Vec<Call>>,
}

impl MemoryRecordService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zone(self, zone: &str, records: Vec<Record>) -> Self {
        self.zones.borrow_mut().insert(zone.to_string(), records);
        self
    }

    /// Report `types` for `zone` instead of deriving them from its records.
    pub fn with_types(self, zone: &str, types: Vec<String>) -> Self {
        self.types_override
            .borrow_mut()
            .insert(zone.to_string(), types);
        self
    }

    pub fn fail_list(&self, err: ServiceError) {
        *self.list_failure.borrow_mut() = Some(err);
    }

    pub fn fail_types(&self, err: ServiceError) {
        *self.types_failure.borrow_mut() = Some(err);
    }

    pub fn fail_delete(&self, id: impl Into<RecordId>, err: ServiceError) {
        self.delete_failures.borrow_mut().insert(id.into(), err);
    }

    pub fn set_latency(&self, zone: &str, yields: usize) {
        self.latency.borrow_mut().insert(zone.to_string(), yields);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn records(&self, zone: &str) -> Vec<Record> {
        self.zones.borrow().get(zone).cloned().unwrap_or_default()
    }

    async fn respond(&self, zone: &str, call: Call) {
        self.calls.borrow_mut().push(call);
        let yields = self.latency.borrow().get(zone).copied().unwrap_or(0);
        for _ in 0..yields {
            yield_now().await;
        }
    }
}

impl RecordService for MemoryRecordService {
    async fn list_records(&self, zone: &str) -> Result<Vec<Record>, ServiceError> {
        self.respond(zone, Call::ListRecords(zone.to_string())).await;
        if let Some(err) = self.list_failure.borrow().clone() {
            return Err(err);
        }
        self.zones
            .borrow()
            .get(zone)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("zone {zone}")))
    }

    async fn list_types(&self, zone: &str) -> Result<Vec<String>, ServiceError> {
        self.respond(zone, Call::ListTypes(zone.to_string())).await;
        if let Some(err) = self.types_failure.borrow().clone() {
            return Err(err);
        }
        if let Some(types) = self.types_override.borrow().get(zone) {
            return Ok(types.clone());
        }
        let zones = self.zones.borrow();
        let records = zones
            .get(zone)
            .ok_or_else(|| ServiceError::NotFound(format!("zone {zone}")))?;
        let distinct: BTreeSet<&str> = records.iter().map(|r| r.record_type.as_str()).collect();
        Ok(distinct.into_iter().map(String::from).collect())
    }

    async fn delete_record(&self, zone: &str, id: &RecordId) -> Result<(), ServiceError> {
        self.respond(zone, Call::Delete(zone.to_string(), id.clone()))
            .await;
        if let Some(err) = self.delete_failures.borrow().get(id).cloned() {
            return Err(err);
        }
        let mut zones = self.zones.borrow_mut();
        let records = zones
            .get_mut(zone)
            .ok_or_else(|| ServiceError::NotFound(format!("zone {zone}")))?;
        let before = records.len();
        records.retain(|r| &r.id != id);
        if records.len() == before {
            Err(ServiceError::NotFound(format!("record {id}")))
        } else {
            Ok(())
        }
    }
}

/// Yield once to the executor.
async fn yield_now() {
    let mut yielded = false;
    std::future::poll_fn(|cx| {
        if yielded {
            std::task::Poll::Ready(())
        } else {
            yielded = true;
            cx.waker().wake_by_ref();
            std::task::Poll::Pending
        }
    })
    .await
}
