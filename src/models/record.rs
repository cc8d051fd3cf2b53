//! House records and the per-category packs that hold them.

use serde::{Deserialize, Serialize};

use crate::constants::{ABSENT_SENTINEL, MEANING_DELIMITER};

/// One house entry of an ascendant table.
///
/// Field names follow the source document exactly. Every field except
/// `house` is an opaque display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// House number (display ordinal, 1-based in practice)
    pub house: i64,
    /// English sign name (e.g., "Aries")
    pub sign_en: String,
    /// Localized sign name (e.g., "Meṣa")
    pub sign_sa: String,
    /// Ruling planet
    pub ruler: String,
    /// Karaka list, already joined by the source
    pub karakas: String,
    /// MKS indicator, or "—" when absent
    pub mks: String,
    /// Digbala indicator, or "—" when absent
    pub digbala: String,
    /// Aditya attribute
    pub aditya: String,
    /// Meanings joined by " / "
    pub meanings: String,
}

impl Record {
    /// Splits `meanings` into its display segments.
    ///
    /// An empty string still yields a single (empty) segment, matching how
    /// the segments are counted for clipboard export.
    pub fn meaning_segments(&self) -> impl Iterator<Item = &str> {
        self.meanings.split(MEANING_DELIMITER)
    }

    /// Returns the MKS value unless it is the absent sentinel.
    #[must_use]
    pub fn mks_value(&self) -> Option<&str> {
        present(&self.mks)
    }

    /// Returns the Digbala value unless it is the absent sentinel.
    #[must_use]
    pub fn digbala_value(&self) -> Option<&str> {
        present(&self.digbala)
    }

    /// Lowercased text searched by the filter: meanings, karakas and aditya.
    #[must_use]
    pub fn searchable_text(&self) -> String {
        format!("{} {} {}", self.meanings, self.karakas, self.aditya).to_lowercase()
    }
}

fn present(value: &str) -> Option<&str> {
    if value == ABSENT_SENTINEL {
        None
    } else {
        Some(value)
    }
}

/// Ordered house records for a single ascendant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPack {
    /// Records in display and navigation order
    pub houses: Vec<Record>,
}

impl CategoryPack {
    /// Number of records in this pack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.houses.len()
    }

    /// Whether this pack has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.houses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(mks: &str, digbala: &str, meanings: &str) -> Record {
        Record {
            house: 1,
            sign_en: "Aries".to_string(),
            sign_sa: "Meṣa".to_string(),
            ruler: "Mars".to_string(),
            karakas: "Sun; Self".to_string(),
            mks: mks.to_string(),
            digbala: digbala.to_string(),
            aditya: "Dhātā".to_string(),
            meanings: meanings.to_string(),
        }
    }

    #[test]
    fn test_sentinel_values_are_absent() {
        let rec = record("—", "—", "Body");
        assert_eq!(rec.mks_value(), None);
        assert_eq!(rec.digbala_value(), None);
    }

    #[test]
    fn test_present_values_pass_through() {
        let rec = record("Moon", "Sun", "Body");
        assert_eq!(rec.mks_value(), Some("Moon"));
        assert_eq!(rec.digbala_value(), Some("Sun"));
    }

    #[test]
    fn test_meaning_segments_split_on_delimiter() {
        let rec = record("—", "—", "Body / Vitality / Head");
        let segments: Vec<_> = rec.meaning_segments().collect();
        assert_eq!(segments, vec!["Body", "Vitality", "Head"]);
    }

    #[test]
    fn test_meaning_segments_keep_plain_slashes() {
        // Only " / " with surrounding spaces separates segments
        let rec = record("—", "—", "Either/or / Second");
        let segments: Vec<_> = rec.meaning_segments().collect();
        assert_eq!(segments, vec!["Either/or", "Second"]);
    }

    #[test]
    fn test_searchable_text_is_lowercased_concatenation() {
        let rec = record("—", "—", "Body / Head");
        assert_eq!(rec.searchable_text(), "body / head sun; self dhātā");
    }
}
