//! `ZoneEdit` calls: fetching a zone and adding, removing or editing a single record.

use crate::cpanel::matcher::TXT;
use crate::cpanel::model::{Envelope, FetchZoneResult, MutationResult, ZoneRecord};
use crate::cpanel::transport::{Call, Transport};
use crate::error::Error;
use serde::de::DeserializeOwned;

const MODULE: &str = "ZoneEdit";
const TTL: &str = "300";

#[derive(Clone)]
pub struct ZoneEditClient {
    transport: Transport,
}

impl ZoneEditClient {
    pub fn new(transport: Transport) -> Self {
        ZoneEditClient { transport }
    }

    /// Every record of `zone`, system records included, in cPanel's order.
    ///
    /// # Errors
    ///
    /// Transport errors propagate; a body without a `cpanelresult` object is [`Error::Parse`]
    /// and a failure reported inside it is [`Error::FetchRejected`].
    pub async fn fetch_zone(&self, zone: &str) -> Result<Vec<ZoneRecord>, Error> {
        let call = Self::call("fetchzone", zone);
        let body = self
            .transport
            .call(call, &[("domain", zone), ("customonly", "0")])
            .await?;
        let result: FetchZoneResult = parse(call, &body)?;
        if let Some(statusmsg) = result.rejection() {
            tracing::warn!(zone, "cPanel refused to fetch zone: {statusmsg}");
            return Err(Error::FetchRejected {
                zone: zone.to_string(),
                statusmsg,
            });
        }
        let records: Vec<ZoneRecord> = result
            .data
            .into_iter()
            .flat_map(|data| data.record)
            .collect();
        tracing::debug!(zone, count = records.len(), "fetched zone");
        Ok(records)
    }

    /// Add a TXT record `name` (relative to `zone`) holding `value`.
    pub async fn add_txt(&self, zone: &str, name: &str, value: &str) -> Result<(), Error> {
        let call = Self::call("add_zone_record", zone);
        let body = self
            .transport
            .call(
                call,
                &[
                    ("domain", zone),
                    ("name", name),
                    ("type", TXT),
                    ("txtdata", value),
                    ("ttl", TTL),
                ],
            )
            .await?;
        check_mutation(call, &body)
    }

    /// Remove the record at `line` of `zone`.
    pub async fn remove_line(&self, zone: &str, line: u32) -> Result<(), Error> {
        let call = Self::call("remove_zone_record", zone);
        let line = line.to_string();
        let body = self
            .transport
            .call(call, &[("domain", zone), ("line", line.as_str())])
            .await?;
        check_mutation(call, &body)
    }

    /// Replace the record at `line` of `zone` with a TXT record `name` holding `value`.
    pub async fn edit_txt(&self, zone: &str, line: u32, name: &str, value: &str) -> Result<(), Error> {
        let call = Self::call("edit_zone_record", zone);
        let line = line.to_string();
        let body = self
            .transport
            .call(
                call,
                &[
                    ("Line", line.as_str()),
                    ("domain", zone),
                    ("name", name),
                    ("type", TXT),
                    ("txtdata", value),
                    ("ttl", TTL),
                    ("class", "IN"),
                ],
            )
            .await?;
        check_mutation(call, &body)
    }

    fn call<'a>(func: &'static str, zone: &'a str) -> Call<'a> {
        Call {
            module: MODULE,
            func,
            zone,
        }
    }
}

fn parse<T: DeserializeOwned>(call: Call<'_>, body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice::<Envelope<T>>(body)
        .map(|envelope| envelope.cpanelresult)
        .map_err(|source| Error::Parse {
            func: call.func,
            zone: call.zone.to_string(),
            source,
        })
}

fn check_mutation(call: Call<'_>, body: &[u8]) -> Result<(), Error> {
    let result: MutationResult = parse(call, body)?;
    if let Some(statusmsg) = result.rejection() {
        tracing::warn!(func = call.func, zone = call.zone, "cPanel rejected call: {statusmsg}");
        return Err(Error::MutationRejected {
            func: call.func,
            zone: call.zone.to_string(),
            statusmsg,
        });
    }
    tracing::debug!(
        func = call.func,
        zone = call.zone,
        new_serial = ?result.new_serial(),
        "cPanel accepted call"
    );
    Ok(())
}
