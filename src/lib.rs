//! DNS Proxy
//!
//! Create, delete, edit and list TXT records on domains hosted by a cPanel server, e.g. to
//! answer [RFC-8555][RFC-8555] [DNS-01] challenges from an ACME client.
//!
//! Record operations are translated into cPanel's JSON API v2 `ZoneEdit` calls. They are
//! exposed through the `dns-proxy-cli` command line tool and the authenticated
//! [HTTP API][crate::api] served by `dns-proxy`.
//!
//! [RFC-8555]: https://www.rfc-editor.org/rfc/rfc8555
//! [DNS-01]: https://www.rfc-editor.org/rfc/rfc8555#section-8.4
//!
#![warn(clippy::pedantic)]

pub mod api;
pub mod config;
pub mod cpanel;
pub mod error;
pub mod log_sanitizer;
pub mod txt_store;

pub use config::{Config, Credentials, SharedConfig};
pub use cpanel::{TxtRecordSummary, ZoneKey};
pub use txt_store::{CPanelTxtStore, DynTxtStore, TxtStore};
