//! Locating a record in a fetched zone.

use crate::cpanel::model::ZoneRecord;

pub const TXT: &str = "TXT";

/// Line number of the first record whose type, fully-qualified name and value all equal the
/// wanted ones, in the order cPanel returned them.
///
/// Comparison is exact: no case folding or whitespace trimming. Duplicate records resolve to
/// the first.
pub fn find_line(
    records: &[ZoneRecord],
    want_type: &str,
    want_full_name: &str,
    want_value: &str,
) -> Option<u32> {
    records
        .iter()
        .inspect(|rec| {
            tracing::trace!(
                line = rec.line,
                name = %rec.name,
                record_type = %rec.record_type,
                "considering record"
            );
        })
        .find(|rec| {
            rec.record_type == want_type && rec.name == want_full_name && rec.data == want_value
        })
        .map(|rec| rec.line)
}
