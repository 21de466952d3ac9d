//! Inner join of the two per-code tables.

use std::collections::{BTreeMap, HashMap};

use crate::entry::{JaRecord, PostalEntry, RomeRecord};

/// Counters from one merge pass. `invalid` carries the postal codes of
/// candidates that failed shape validation so the caller can warn about
/// each one; the drop is non-fatal.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeStats {
    /// Codes present in both sources with a valid merged entry.
    pub joined: usize,
    /// Codes present only in the Japanese table (dropped).
    pub only_ja: usize,
    /// Codes present only in the romanized table (dropped).
    pub only_rome: usize,
    /// Codes whose merged candidate failed validation (dropped).
    pub invalid: Vec<String>,
}

/// Inner-join the two tables on postal code.
///
/// A code must be present on both sides to survive; one-sided codes are
/// dropped. Each surviving candidate is validated (all six fields
/// non-empty) and dropped into `stats.invalid` on failure. The result is
/// a BTreeMap so downstream partitioning and serialization are
/// deterministic across runs.
pub fn merge_tables(
    ja: &HashMap<String, JaRecord>,
    rome: &HashMap<String, RomeRecord>,
) -> (BTreeMap<String, PostalEntry>, MergeStats) {
    let mut merged = BTreeMap::new();
    let mut stats = MergeStats::default();

    for (zip, ja_record) in ja {
        let Some(rome_record) = rome.get(zip) else {
            stats.only_ja += 1;
            continue;
        };
        let candidate = PostalEntry::from_parts(ja_record, rome_record);
        if candidate.validate().is_err() {
            stats.invalid.push(zip.clone());
            continue;
        }
        merged.insert(zip.clone(), candidate);
        stats.joined += 1;
    }
    stats.only_rome = rome.keys().filter(|zip| !ja.contains_key(*zip)).count();
    stats.invalid.sort();

    (merged, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ja(pref: &str, city: &str, town: &str) -> JaRecord {
        JaRecord {
            prefecture_ja: pref.into(),
            city_ja: city.into(),
            town_ja: town.into(),
        }
    }

    fn rome(pref: &str, city: &str, town: &str) -> RomeRecord {
        RomeRecord {
            prefecture_en: pref.into(),
            city_en: city.into(),
            town_en: town.into(),
        }
    }

    #[test]
    fn test_inner_join_keeps_shared_codes() {
        let mut ja_map = HashMap::new();
        ja_map.insert("1000001".to_string(), ja("東京都", "千代田区", "千代田"));
        let mut rome_map = HashMap::new();
        rome_map.insert("1000001".to_string(), rome("TOKYO", "CHIYODA-KU", "CHIYODA"));

        let (merged, stats) = merge_tables(&ja_map, &rome_map);

        assert_eq!(merged.len(), 1);
        let entry = &merged["1000001"];
        assert_eq!(entry.prefecture_ja, "東京都");
        assert_eq!(entry.town_en, "CHIYODA");
        assert!(entry.validate().is_ok());
        assert_eq!(stats.joined, 1);
        assert_eq!(stats.only_ja, 0);
        assert_eq!(stats.only_rome, 0);
    }

    /// A code present in only one source table must not appear in the
    /// merged output.
    #[test]
    fn test_one_sided_codes_dropped() {
        let mut ja_map = HashMap::new();
        ja_map.insert("1000001".to_string(), ja("東京都", "千代田区", "千代田"));
        ja_map.insert("1000002".to_string(), ja("東京都", "千代田区", "皇居外苑"));
        let mut rome_map = HashMap::new();
        rome_map.insert("1000001".to_string(), rome("TOKYO", "CHIYODA-KU", "CHIYODA"));
        rome_map.insert("9999999".to_string(), rome("NOWHERE", "NO-KU", "NO"));

        let (merged, stats) = merge_tables(&ja_map, &rome_map);

        assert_eq!(merged.len(), 1);
        assert!(merged.contains_key("1000001"));
        assert!(!merged.contains_key("1000002"));
        assert!(!merged.contains_key("9999999"));
        assert_eq!(stats.only_ja, 1);
        assert_eq!(stats.only_rome, 1);
    }

    #[test]
    fn test_invalid_candidate_dropped_not_fatal() {
        let mut ja_map = HashMap::new();
        ja_map.insert("1000001".to_string(), ja("東京都", "千代田区", "千代田"));
        // Empty romanized town fails the non-empty invariant after merge.
        let mut rome_map = HashMap::new();
        rome_map.insert("1000001".to_string(), rome("TOKYO", "CHIYODA-KU", ""));

        let (merged, stats) = merge_tables(&ja_map, &rome_map);

        assert!(merged.is_empty());
        assert_eq!(stats.invalid, vec!["1000001".to_string()]);
        assert_eq!(stats.joined, 0);
    }

    #[test]
    fn test_all_fields_non_empty_in_output() {
        let mut ja_map = HashMap::new();
        let mut rome_map = HashMap::new();
        for i in 0..20 {
            let zip = format!("10000{:02}", i);
            ja_map.insert(zip.clone(), ja("東京都", "千代田区", "千代田"));
            rome_map.insert(zip, rome("TOKYO", "CHIYODA-KU", "CHIYODA"));
        }

        let (merged, stats) = merge_tables(&ja_map, &rome_map);

        assert_eq!(merged.len(), 20);
        assert_eq!(stats.joined, 20);
        for entry in merged.values() {
            assert!(entry.validate().is_ok());
        }
    }
}
