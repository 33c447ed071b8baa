//! cPanel JSON API v2 response shapes.
//!
//! Every v2 response is wrapped in a `cpanelresult` object. `fetchzone` lists records under
//! `data[].record[]`. Every call reports success in `event.result`, and the mutating
//! `ZoneEdit` calls also in `data[0].result.status`.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct Envelope<T> {
    pub cpanelresult: T,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub(crate) struct FetchZoneResult {
    #[serde(default)]
    pub event: Option<CallEvent>,
    #[serde(default)]
    pub data: Vec<FetchZoneData>,
    #[serde(default)]
    pub error: Option<String>,
}

impl FetchZoneResult {
    /// Why cPanel refused to return the zone, or `None` when the records can be trusted.
    ///
    /// An absent `event` is tolerated, but an `event.result` other than 1 or a non-empty
    /// `error` is a failure even though the HTTP status was 200.
    pub fn rejection(&self) -> Option<String> {
        let error = self.error.clone().filter(|e| !e.is_empty());
        match self.event.as_ref().map(|e| e.result) {
            Some(result) if result != 1 => {
                Some(error.unwrap_or_else(|| format!("event result was {result}")))
            }
            _ => error,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub(crate) struct FetchZoneData {
    #[serde(default)]
    pub record: Vec<ZoneRecord>,
}

/// A single record from a fetched zone. Only valid within the fetch that produced it: the line
/// number shifts whenever the zone is edited.
#[serde_as]
#[derive(Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct ZoneRecord {
    #[serde(rename = "Line")]
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub line: u32,
    /// Fully qualified, with the trailing dot cPanel appends.
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub record_type: String,
    #[serde(rename = "txtdata", default)]
    pub data: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub(crate) struct MutationResult {
    #[serde(default)]
    pub event: Option<CallEvent>,
    #[serde(default)]
    pub data: Vec<MutationData>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub(crate) struct CallEvent {
    #[serde(default)]
    pub result: i64,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub(crate) struct MutationData {
    #[serde(default)]
    pub result: Option<MutationStatus>,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone, Default)]
pub(crate) struct MutationStatus {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub statusmsg: Option<String>,
    #[serde(default)]
    pub newserial: Option<serde_json::Value>,
}

impl MutationResult {
    /// The rejection message when cPanel reports a failure, or `None` on success.
    ///
    /// `event.result` must be 1, and when a per-record result is present its `status` must be 1
    /// as well.
    pub fn rejection(&self) -> Option<String> {
        let event_result = self.event.as_ref().map_or(0, |e| e.result);
        if event_result != 1 {
            return Some(self.error.clone().unwrap_or_else(|| {
                format!("event result was {event_result}")
            }));
        }
        match self.data.first().and_then(|d| d.result.as_ref()) {
            Some(status) if status.status != 1 => Some(
                status
                    .statusmsg
                    .clone()
                    .unwrap_or_else(|| format!("status was {}", status.status)),
            ),
            _ => None,
        }
    }

    pub fn new_serial(&self) -> Option<&serde_json::Value> {
        self.data
            .first()
            .and_then(|d| d.result.as_ref())
            .and_then(|r| r.newserial.as_ref())
    }
}

/// A TXT record as reported to callers listing a zone.
#[derive(Serialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct TxtRecordSummary {
    pub line: u32,
    pub key: String,
    pub value: String,
    pub full_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fetch(value: serde_json::Value) -> FetchZoneResult {
        serde_json::from_value::<Envelope<FetchZoneResult>>(value)
            .unwrap()
            .cpanelresult
    }

    fn mutation(value: serde_json::Value) -> MutationResult {
        serde_json::from_value::<Envelope<MutationResult>>(value)
            .unwrap()
            .cpanelresult
    }

    #[test]
    fn zone_records_tolerate_missing_fields() {
        let body = json!({
            "cpanelresult": {
                "data": [{
                    "record": [
                        {"Line": 1, "type": ":RAW", "raw": "; cPanel first:..."},
                        {"Line": "4", "name": "key.example.com.", "type": "TXT", "txtdata": "v1"}
                    ]
                }],
                "event": {"result": 1}
            }
        });
        let parsed: Envelope<FetchZoneResult> = serde_json::from_value(body).unwrap();
        let records = &parsed.cpanelresult.data[0].record;
        assert_eq!(records[0].line, 1);
        assert_eq!(records[0].name, "");
        assert_eq!(
            records[1],
            ZoneRecord {
                line: 4,
                name: "key.example.com.".into(),
                record_type: "TXT".into(),
                data: "v1".into(),
            }
        );
    }

    #[test]
    fn fetch_failures_reported_inside_200() {
        let res = fetch(json!({"cpanelresult": {
            "event": {"result": 0},
            "error": "Access denied to zone",
            "data": []
        }}));
        assert_eq!(res.rejection().as_deref(), Some("Access denied to zone"));

        let res = fetch(json!({"cpanelresult": {"event": {"result": 0}}}));
        assert_eq!(res.rejection().as_deref(), Some("event result was 0"));

        let res = fetch(json!({"cpanelresult": {"error": "zone is locked", "data": []}}));
        assert_eq!(res.rejection().as_deref(), Some("zone is locked"));
    }

    #[test]
    fn fetch_without_event_or_error_is_accepted() {
        assert_eq!(fetch(json!({"cpanelresult": {"data": []}})).rejection(), None);
        let res = fetch(json!({"cpanelresult": {"event": {"result": 1}, "error": ""}}));
        assert_eq!(res.rejection(), None);
    }

    #[test]
    fn successful_mutation_has_no_rejection() {
        let res = mutation(json!({"cpanelresult": {
            "event": {"result": 1},
            "data": [{"result": {"status": 1, "statusmsg": "", "newserial": "2024010102"}}]
        }}));
        assert_eq!(res.rejection(), None);
        assert_eq!(res.new_serial(), Some(&json!("2024010102")));
    }

    #[test]
    fn failed_event_is_rejected() {
        let res = mutation(json!({"cpanelresult": {
            "event": {"result": 0},
            "error": "Access denied",
            "data": []
        }}));
        assert_eq!(res.rejection().as_deref(), Some("Access denied"));

        let res = mutation(json!({"cpanelresult": {"data": []}}));
        assert_eq!(res.rejection().as_deref(), Some("event result was 0"));
    }

    #[test]
    fn failed_status_is_rejected() {
        let res = mutation(json!({"cpanelresult": {
            "event": {"result": 1},
            "data": [{"result": {"status": 0, "statusmsg": "Line 12 does not exist"}}]
        }}));
        assert_eq!(res.rejection().as_deref(), Some("Line 12 does not exist"));
    }
}
