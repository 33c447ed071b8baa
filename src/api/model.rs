use crate::cpanel::TxtRecordSummary;
use serde::{Deserialize, Serialize};

/// Body of `/set_txt` and `/delete_txt`. Missing fields deserialize as empty and are rejected
/// by the store's validation.
#[derive(Deserialize, Serialize, Debug, Clone, Default, Eq, PartialEq)]
pub(super) struct TxtRecordRequest {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, Eq, PartialEq)]
pub(super) struct EditRecordRequest {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub old_value: String,
    #[serde(default)]
    pub new_value: String,
}

#[derive(Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub(super) struct ListRecordsQuery {
    #[serde(default)]
    pub domain: String,
    pub key: Option<String>,
}

#[derive(Serialize, Debug, Clone, Default, Eq, PartialEq)]
pub(super) struct ListRecordsResult {
    pub records: Vec<TxtRecordSummary>,
}
