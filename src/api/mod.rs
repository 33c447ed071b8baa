//! HTTP API for managing TXT records, e.g. from an ACME client's DNS-01 hook.
//!
//! Every endpoint except `/healthcheck` requires an `Authorization: Bearer <API_KEY>` header
//! matching the configured `API_KEY`, and returns HTTP 401 (Unauthorized) otherwise. Errors are
//! returned as a JSON body of the form `{"error": "..."}`.
//!
//! # API Endpoints
//!
//! ## `/healthcheck` (GET)
//!
//!   Returns HTTP 200 (OK) and the JSON body `{"ok":"healthy"}` when the service is operational.
//!
//! ## `/set_txt` (POST)
//!
//!   Expects a JSON request body of the form:
//!
//!   ```json
//!   { "domain": "sub.example.com", "key": "_acme-challenge", "value": "XXXXXXXXXXXX" }
//!   ```
//!
//!   Creates the TXT record `_acme-challenge.sub` in the `example.com` zone and echoes the
//!   request body back with HTTP 200 (OK).
//!
//! ## `/delete_txt` (POST)
//!
//!   Same body as `/set_txt`. Removes the TXT record with exactly that name and value, or
//!   returns HTTP 404 (Not Found) when the zone holds no such record.
//!
//! ## `/edit_txt` (POST)
//!
//!   Expects a JSON request body of the form:
//!
//!   ```json
//!   { "domain": "sub.example.com", "key": "_acme-challenge", "old_value": "X", "new_value": "Y" }
//!   ```
//!
//!   Replaces the value of the matching record. HTTP 404 (Not Found) as for `/delete_txt`.
//!
//! ## `/list_txt?domain=<domain>[&key=<key>]` (GET)
//!
//!   Returns every TXT record in the zone of `domain`, only those with key `key` when given:
//!
//!   ```json
//!   { "records": [ { "line": 4, "key": "_acme-challenge", "value": "X",
//!                    "full_name": "_acme-challenge.sub.example.com." } ] }
//!   ```
//!
//! # Status codes
//!
//! Missing or malformed fields give HTTP 400 (Bad Request). Failures talking to cPanel, including
//! cPanel refusing a change, give HTTP 502 (Bad Gateway).

mod api_error;
mod auth;
mod model;
mod routes;
pub mod server;

pub use server::new;
