//! The cPanel-backed implementation of the [`TxtStore`][super::TxtStore] trait.
//!
//! Nothing is cached: every operation resolves the zone, and delete/edit/list fetch it fresh
//! before acting. Calls are strictly sequential; a mutation is only issued once the fetch it
//! depends on has completed and matched.
use crate::config::Config;
use crate::cpanel::matcher::TXT;
use crate::cpanel::{find_line, Transport, TxtRecordSummary, ZoneEditClient, ZoneKey};
use crate::error::Error;
use crate::txt_store::{require, TxtStore};

#[derive(Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct CPanelTxtStore {
    client: ZoneEditClient,
}

impl CPanelTxtStore {
    pub fn new(client: ZoneEditClient) -> Self {
        CPanelTxtStore { client }
    }

    /// Build a store talking to the cPanel account in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpClient`] if the HTTP client can't be built.
    pub fn try_from_config(config: &Config) -> Result<Self, Error> {
        let transport = Transport::new(config.credentials.clone(), config.cpanel_timeout)?;
        Ok(Self::new(ZoneEditClient::new(transport)))
    }

    async fn line_of(&self, zone_key: &ZoneKey, key: &str, value: &str) -> Result<u32, Error> {
        let records = self.client.fetch_zone(&zone_key.zone).await?;
        let full_name = zone_key.fqdn(key);
        tracing::debug!(zone = %zone_key.zone, %full_name, "looking for TXT record");
        find_line(&records, TXT, &full_name, value).ok_or_else(|| Error::NotFound {
            zone: zone_key.zone.clone(),
            name: full_name,
            value: value.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl TxtStore for CPanelTxtStore {
    async fn create_txt(&self, domain: &str, key: &str, value: &str) -> Result<(), Error> {
        let zone_key = ZoneKey::resolve(require("domain", domain)?)?;
        let name = zone_key.effective_name(require("key", key)?);
        require("value", value)?;

        tracing::info!(zone = %zone_key.zone, %name, "creating TXT record");
        self.client.add_txt(&zone_key.zone, &name, value).await
    }

    async fn delete_txt(&self, domain: &str, key: &str, value: &str) -> Result<(), Error> {
        let zone_key = ZoneKey::resolve(require("domain", domain)?)?;
        let key = require("key", key)?;
        require("value", value)?;

        let line = self.line_of(&zone_key, key, value).await?;
        tracing::info!(zone = %zone_key.zone, line, "deleting TXT record");
        self.client.remove_line(&zone_key.zone, line).await
    }

    async fn edit_txt(
        &self,
        domain: &str,
        key: &str,
        old_value: &str,
        new_value: &str,
    ) -> Result<(), Error> {
        let zone_key = ZoneKey::resolve(require("domain", domain)?)?;
        let key = require("key", key)?;
        require("old_value", old_value)?;
        require("new_value", new_value)?;

        let line = self.line_of(&zone_key, key, old_value).await?;
        let name = zone_key.effective_name(key);
        tracing::info!(zone = %zone_key.zone, line, %name, "editing TXT record");
        self.client
            .edit_txt(&zone_key.zone, line, &name, new_value)
            .await
    }

    async fn list_txt(
        &self,
        domain: &str,
        key_filter: Option<&str>,
    ) -> Result<Vec<TxtRecordSummary>, Error> {
        let zone_key = ZoneKey::resolve(require("domain", domain)?)?;
        let key_filter = key_filter.filter(|k| !k.is_empty());

        let records = self.client.fetch_zone(&zone_key.zone).await?;
        let summaries: Vec<TxtRecordSummary> = records
            .into_iter()
            .filter(|rec| rec.record_type == TXT)
            .filter_map(|rec| {
                let key = zone_key.record_key(&rec.name)?.to_string();
                Some(TxtRecordSummary {
                    line: rec.line,
                    key,
                    value: rec.data,
                    full_name: rec.name,
                })
            })
            .filter(|summary| key_filter.map_or(true, |k| summary.key == k))
            .collect();
        tracing::debug!(zone = %zone_key.zone, count = summaries.len(), "listed TXT records");
        Ok(summaries)
    }
}
