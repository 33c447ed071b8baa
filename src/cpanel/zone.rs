//! Zone and record name resolution.
//!
//! cPanel's `ZoneEdit` calls want the zone a record lives in and the record name relative to
//! that zone. The zone is assumed to be the last two labels of the name, so names under
//! multi-label public suffixes (e.g. `example.co.uk`) resolve to the suffix itself.

use crate::error::Error;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// A name split into the cPanel-managed zone and the part preceding it.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ZoneKey {
    pub zone: String,
    /// Empty when the name is the zone apex.
    pub relative_name: String,
}

impl ZoneKey {
    /// Split `fqdn` into its zone and relative name.
    ///
    /// One trailing `.` is accepted and dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDomain`] for names that aren't a sequence of non-empty ASCII
    /// labels.
    pub fn resolve(fqdn: &str) -> Result<Self, Error> {
        let name = fqdn.strip_suffix('.').unwrap_or(fqdn);
        validate(fqdn, name)?;

        let labels: Vec<&str> = name.split('.').collect();
        if labels.len() < 3 {
            return Ok(ZoneKey {
                zone: name.to_string(),
                relative_name: String::new(),
            });
        }

        let split = labels.len() - 2;
        Ok(ZoneKey {
            zone: labels[split..].join("."),
            relative_name: labels[..split].join("."),
        })
    }

    /// The record name written to cPanel for `record_key`.
    pub fn effective_name(&self, record_key: &str) -> String {
        if self.relative_name.is_empty() {
            record_key.to_string()
        } else {
            format!("{record_key}.{}", self.relative_name)
        }
    }

    /// The fully-qualified name cPanel echoes back in `fetchzone`, trailing dot included.
    pub fn fqdn(&self, record_key: &str) -> String {
        format!("{}.{}.", self.effective_name(record_key), self.zone)
    }

    /// The key component of a fetched record name, or `None` if the name is outside the zone.
    ///
    /// The zone apex is reported as `@`.
    pub fn record_key<'a>(&self, record_name: &'a str) -> Option<&'a str> {
        let name = record_name.strip_suffix('.').unwrap_or(record_name);
        if name == self.zone {
            return Some("@");
        }
        let in_zone = name.strip_suffix(self.zone.as_str())?.strip_suffix('.')?;
        if self.relative_name.is_empty() {
            return Some(in_zone);
        }
        Some(
            in_zone
                .strip_suffix(self.relative_name.as_str())
                .and_then(|key| key.strip_suffix('.'))
                .filter(|key| !key.is_empty())
                .unwrap_or(in_zone),
        )
    }
}

fn validate(original: &str, name: &str) -> Result<(), Error> {
    let invalid = |reason| Error::InvalidDomain {
        domain: original.to_string(),
        reason,
    };
    if name.is_empty() {
        return Err(invalid("empty name"));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(invalid("name longer than 253 bytes"));
    }
    if !name.is_ascii() || name.chars().any(|c| c.is_ascii_whitespace() || c.is_ascii_control()) {
        return Err(invalid("name must be printable ASCII without whitespace"));
    }
    for label in name.split('.') {
        if label.is_empty() {
            return Err(invalid("empty label"));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(invalid("label longer than 63 bytes"));
        }
    }
    Ok(())
}
