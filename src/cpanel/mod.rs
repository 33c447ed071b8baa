//! cPanel JSON API v2 `ZoneEdit` plumbing.
//!
//! cPanel's v2 API has no "find record by value" call. Removing or editing a TXT record means
//! fetching the whole zone with `fetchzone`, locating the record by exact type, name and value,
//! then addressing it by its 1-based line number:
//!
//! ```text
//! resolve name -> fetchzone -> find_line -> remove_zone_record / edit_zone_record
//! ```
//!
//! Line numbers are never reused across fetches. Another client editing the zone between the
//! fetch and the mutation can shift them; nothing here coordinates concurrent callers.

pub mod client;
pub mod matcher;
pub mod model;
pub mod transport;
pub mod zone;

pub use client::ZoneEditClient;
pub use matcher::find_line;
pub use model::{TxtRecordSummary, ZoneRecord};
pub use transport::Transport;
pub use zone::ZoneKey;
