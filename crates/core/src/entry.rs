//! Postal record types.
//!
//! `JaRecord` and `RomeRecord` are the per-source halves of an entry;
//! `PostalEntry` is the merged unit of output. Field names are camelCase
//! on the wire — the published partition files are a public contract and
//! the browser client reads these exact keys.

use serde::{Deserialize, Serialize};

/// Japanese-script names for one postal code (from the ken_all dataset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JaRecord {
    pub prefecture_ja: String,
    pub city_ja: String,
    pub town_ja: String,
}

/// Romanized names for one postal code (from the roman dataset).
/// Fields are already normalized: trimmed, single-spaced, uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomeRecord {
    pub prefecture_en: String,
    pub city_en: String,
    pub town_en: String,
}

/// The merged six-field record published per postal code.
///
/// Invariant: every field is a non-empty string. Constructed only by a
/// successful merge of a `JaRecord` and `RomeRecord` for the same code;
/// [`PostalEntry::validate`] enforces the invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalEntry {
    pub prefecture_ja: String,
    pub city_ja: String,
    pub town_ja: String,
    pub prefecture_en: String,
    pub city_en: String,
    pub town_en: String,
}

impl PostalEntry {
    /// Shallow-merge the two source halves into a candidate entry.
    pub fn from_parts(ja: &JaRecord, rome: &RomeRecord) -> Self {
        Self {
            prefecture_ja: ja.prefecture_ja.clone(),
            city_ja: ja.city_ja.clone(),
            town_ja: ja.town_ja.clone(),
            prefecture_en: rome.prefecture_en.clone(),
            city_en: rome.city_en.clone(),
            town_en: rome.town_en.clone(),
        }
    }

    /// Check the non-empty invariant, naming the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("prefectureJa", &self.prefecture_ja),
            ("cityJa", &self.city_ja),
            ("townJa", &self.town_ja),
            ("prefectureEn", &self.prefecture_en),
            ("cityEn", &self.city_en),
            ("townEn", &self.town_en),
        ];
        for (name, value) in fields {
            if value.is_empty() {
                return Err(format!("{} is empty", name));
            }
        }
        Ok(())
    }
}
