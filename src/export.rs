//! Plain-text export of house records.
//!
//! The format is a copy/paste contract: line order is fixed and sentinel
//! values are printed verbatim.

use crate::models::Record;

/// Prefix of each meaning bullet.
pub const BULLET: &str = "• ";

/// Formats one record for the clipboard.
///
/// ```text
/// {house}. {sign_en} – {sign_sa}
/// Ruler: …
/// Karakas: …
/// MKS: …
/// Digbala: …
/// Aditya: …
///
/// • {meaning}
/// ```
#[must_use]
pub fn format_record(record: &Record) -> String {
    let mut lines = vec![
        format!("{}. {} – {}", record.house, record.sign_en, record.sign_sa),
        format!("Ruler: {}", record.ruler),
        format!("Karakas: {}", record.karakas),
        format!("MKS: {}", record.mks),
        format!("Digbala: {}", record.digbala),
        format!("Aditya: {}", record.aditya),
        String::new(),
    ];
    lines.extend(record.meaning_segments().map(|m| format!("{BULLET}{m}")));
    lines.join("\n")
}

/// Formats several records, separated by a blank line.
#[must_use]
pub fn format_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    records
        .into_iter()
        .map(format_record)
        .collect::<Vec<_>>()
        .join("\n\n")
}
