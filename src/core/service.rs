//! Record service interface and its HTTP client.
//!
//! [`RecordService`] is the only way the record browser reaches the outside
//! world. [`HttpRecordService`] speaks to the record-management API:
//!
//! | Operation       | Request                           |
//! |-----------------|-----------------------------------|
//! | `list_records`  | `GET {base}/records/{zone}`       |
//! | `list_types`    | `GET {base}/types/{zone}`         |
//! | `delete_record` | `DELETE {base}/record/{zone}/{id}` |

use tracing::debug;

use super::error::ServiceError;
use crate::models::{Record, RecordId};
use crate::utils::fetch::{self, Method};

/// Remote store of records, grouped by zone.
///
/// Futures are not required to be `Send`; everything runs on the browser's
/// single-threaded executor.
#[allow(async_fn_in_trait)]
pub trait RecordService {
    /// All records of `zone`, in service order.
    async fn list_records(&self, zone: &str) -> Result<Vec<Record>, ServiceError>;

    /// Distinct record types known for `zone`.
    async fn list_types(&self, zone: &str) -> Result<Vec<String>, ServiceError>;

    /// Remove one record. Deleting an absent record may report `NotFound`.
    async fn delete_record(&self, zone: &str, id: &RecordId) -> Result<(), ServiceError>;
}

/// [`RecordService`] backed by the record-management HTTP API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRecordService {
    base_url: String,
}

impl HttpRecordService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, segments: &[&str]) -> String {
        join_url(&self.base_url, segments, |seg| {
            String::from(js_sys::encode_uri_component(seg))
        })
    }
}

/// Append each segment to `base`, encoded with `encode`, one `/` apart.
fn join_url(base: &str, segments: &[&str], encode: impl Fn(&str) -> String) -> String {
    segments
        .iter()
        .fold(base.trim_end_matches('/').to_string(), |mut url, seg| {
            url.push('/');
            url.push_str(&encode(seg));
            url
        })
}

impl RecordService for HttpRecordService {
    async fn list_records(&self, zone: &str) -> Result<Vec<Record>, ServiceError> {
        let url = self.url(&["records", zone]);
        debug!(%url, "listing records");
        Ok(fetch::fetch_json(&url).await?)
    }

    async fn list_types(&self, zone: &str) -> Result<Vec<String>, ServiceError> {
        let url = self.url(&["types", zone]);
        debug!(%url, "listing record types");
        Ok(fetch::fetch_json(&url).await?)
    }

    async fn delete_record(&self, zone: &str, id: &RecordId) -> Result<(), ServiceError> {
        let url = self.url(&["record", zone, id.as_str()]);
        debug!(%url, "deleting record");
        fetch::send(Method::Delete, &url).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Escapes the characters the record API cares about, like
    /// `encodeURIComponent` does.
    fn encode(seg: &str) -> String {
        seg.chars()
            .map(|c| match c {
                '/' => "%2F".to_string(),
                ' ' => "%20".to_string(),
                '?' => "%3F".to_string(),
                '#' => "%23".to_string(),
                c => c.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_new_trims_trailing_slashes() {
        let service = HttpRecordService::new("http://localhost:8080/api//");
        assert_eq!(service.base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn test_join_url_paths() {
        let base = "http://localhost:8080/api";
        assert_eq!(
            join_url(base, &["records", "example.com"], encode),
            "http://localhost:8080/api/records/example.com"
        );
        assert_eq!(
            join_url(base, &["record", "example.com", "42"], encode),
            "http://localhost:8080/api/record/example.com/42"
        );
    }

    #[test]
    fn test_join_url_encodes_each_segment() {
        assert_eq!(
            join_url("http://h/api/", &["record", "example.com", "a/b?c#d"], encode),
            "http://h/api/record/example.com/a%2Fb%3Fc%23d"
        );
    }

    #[test]
    fn test_join_url_without_segments_is_base() {
        assert_eq!(join_url("http://h/api/", &[], encode), "http://h/api");
    }
}
