//! TXT record operations on cPanel-hosted zones.
//!
//! [`TxtStore`] is the whole surface the CLI and the [HTTP API][crate::api] front ends
//! use. [`cpanel::CPanelTxtStore`] implements it on top of cPanel's `ZoneEdit` module.
//!
//! A record is addressed by the `domain` it is attached to and a caller-chosen `key` label:
//! with `domain = sub.example.com` and `key = _acme-challenge`, the record lives in zone
//! `example.com` as `_acme-challenge.sub`.

use crate::cpanel::TxtRecordSummary;
use crate::error::Error;
use std::sync::Arc;

pub mod cpanel;

#[allow(clippy::module_name_repetitions)]
pub use cpanel::CPanelTxtStore;

/// `DynTxtStore` is a type alias for a [`TxtStore`] shared between request handlers through an
/// [`Arc`]. Implementations hold no mutable state, so no lock is needed.
#[allow(clippy::module_name_repetitions)]
pub type DynTxtStore = Arc<dyn TxtStore + Send + Sync>;

/// Create, delete, edit and list TXT records.
///
/// Every operation rejects empty required fields with [`Error::Validation`] before touching
/// the network. Failures are returned as-is; nothing is retried.
#[async_trait::async_trait]
pub trait TxtStore {
    /// Add a TXT record `key` under `domain` holding `value`.
    async fn create_txt(&self, domain: &str, key: &str, value: &str) -> Result<(), Error>;

    /// Remove the first TXT record `key` under `domain` holding exactly `value`.
    ///
    /// Returns [`Error::NotFound`] when no such record exists.
    async fn delete_txt(&self, domain: &str, key: &str, value: &str) -> Result<(), Error>;

    /// Replace the value of the first TXT record `key` under `domain` holding `old_value`.
    ///
    /// Returns [`Error::NotFound`] when no such record exists.
    async fn edit_txt(
        &self,
        domain: &str,
        key: &str,
        old_value: &str,
        new_value: &str,
    ) -> Result<(), Error>;

    /// Every TXT record in the zone `domain` resolves to, optionally only those whose key
    /// equals `key_filter`. An empty filter is no filter.
    async fn list_txt(
        &self,
        domain: &str,
        key_filter: Option<&str>,
    ) -> Result<Vec<TxtRecordSummary>, Error>;
}

pub(crate) fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str, Error> {
    if value.trim().is_empty() {
        return Err(Error::Validation { field });
    }
    Ok(value)
}
