//! Fixed-column CSV table loaders for the two source datasets.
//!
//! Both loaders are deliberately lenient: a row that is too short, or
//! whose required fields are empty after trimming, is skipped rather
//! than reported — the published datasets contain such rows and the
//! original pipeline ignored them. The skip counts are surfaced through
//! [`LoadStats`] so the operator can see how much was dropped.
//!
//! The two duplicate-key policies differ on purpose and must stay
//! separate: the Japanese table keeps the FIRST occurrence of a code,
//! the romanized table keeps the LAST. Collapsing them into one
//! parameterized helper risks silently unifying them and breaking
//! output parity with the published dataset.

use std::collections::HashMap;

use yubin_core::{normalize_romaji, JaRecord, RomeRecord};

/// Minimum column count for a usable ken_all row.
const JA_MIN_COLS: usize = 9;
/// Minimum column count for a usable roman row.
const ROME_MIN_COLS: usize = 7;

/// Counters from one table load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Total CSV records read.
    pub rows: usize,
    /// Records below the minimum column count.
    pub skipped_short: usize,
    /// Records with an empty required field after trimming.
    pub skipped_empty: usize,
}

fn reader(csv_text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(csv_text.as_bytes())
}

/// Load the Japanese-script table (ken_all layout).
///
/// Columns: postal code at index 2, prefecture/city/town at 6/7/8.
/// Duplicate codes keep the first occurrence.
pub fn load_ja_table(csv_text: &str) -> Result<(HashMap<String, JaRecord>, LoadStats), String> {
    let mut map = HashMap::new();
    let mut stats = LoadStats::default();

    for result in reader(csv_text).records() {
        let record = result.map_err(|e| format!("csv parse error: {}", e))?;
        stats.rows += 1;
        if record.len() < JA_MIN_COLS {
            stats.skipped_short += 1;
            continue;
        }
        let zip = record[2].trim();
        let prefecture_ja = record[6].trim();
        let city_ja = record[7].trim();
        let town_ja = record[8].trim();
        if zip.is_empty() || prefecture_ja.is_empty() || city_ja.is_empty() || town_ja.is_empty() {
            stats.skipped_empty += 1;
            continue;
        }
        // First occurrence wins.
        if !map.contains_key(zip) {
            map.insert(
                zip.to_string(),
                JaRecord {
                    prefecture_ja: prefecture_ja.to_string(),
                    city_ja: city_ja.to_string(),
                    town_ja: town_ja.to_string(),
                },
            );
        }
    }

    Ok((map, stats))
}

/// Load the romanization table (roman layout).
///
/// Columns: postal code at index 0, prefecture/city/town at 4/5/6, each
/// normalized (trimmed, single-spaced, uppercased). Duplicate codes keep
/// the last occurrence.
pub fn load_rome_table(csv_text: &str) -> Result<(HashMap<String, RomeRecord>, LoadStats), String> {
    let mut map = HashMap::new();
    let mut stats = LoadStats::default();

    for result in reader(csv_text).records() {
        let record = result.map_err(|e| format!("csv parse error: {}", e))?;
        stats.rows += 1;
        if record.len() < ROME_MIN_COLS {
            stats.skipped_short += 1;
            continue;
        }
        let zip = record[0].trim();
        let prefecture_en = normalize_romaji(&record[4]);
        let city_en = normalize_romaji(&record[5]);
        let town_en = normalize_romaji(&record[6]);
        if zip.is_empty() || prefecture_en.is_empty() || city_en.is_empty() || town_en.is_empty() {
            stats.skipped_empty += 1;
            continue;
        }
        // Last occurrence wins.
        map.insert(
            zip.to_string(),
            RomeRecord {
                prefecture_en,
                city_en,
                town_en,
            },
        );
    }

    Ok((map, stats))
}
