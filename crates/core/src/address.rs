//! US-style address composition from a postal entry plus user input.

use serde::Serialize;

use crate::entry::PostalEntry;

/// A composed address, both as individual lines and as one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedAddress {
    pub single_line: String,
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_intl: Option<String>,
}

/// Format a 7-digit code as `NNN-NNNN`; anything else passes through,
/// including non-ASCII input whose third byte is not a char boundary.
pub fn format_zip(zip: &str) -> String {
    if zip.len() == 7 && zip.is_char_boundary(3) {
        format!("{}-{}", &zip[..3], &zip[3..])
    } else {
        zip.to_string()
    }
}

/// Convert a domestic phone number to international form: keep digits
/// only, drop one leading `0`, prefix `+81-`. Empty input yields None.
pub fn format_phone_intl(phone: &str) -> Option<String> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let rest = digits.strip_prefix('0').unwrap_or(&digits);
    Some(format!("+81-{}", rest))
}

fn clean(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn hyphenate(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join("-")
}

fn join_non_empty(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(sep)
}

/// Compose a US-style address from the romanized entry fields and the
/// user-entered street/building/phone.
///
/// line1 = hyphenated street + townEn + building, line2 = "cityEn,
/// prefectureEn", the single line appends the formatted zip and the
/// fixed country.
pub fn compose_address(
    zip: &str,
    entry: &PostalEntry,
    street: &str,
    building: &str,
    phone: &str,
) -> ComposedAddress {
    let town = clean(&entry.town_en);
    let city = clean(&entry.city_en);
    let state = clean(&entry.prefecture_en);
    let street_normalized = hyphenate(street);
    let line1_base = join_non_empty(&[&street_normalized, &town], " ");
    let line1 = join_non_empty(&[&line1_base, building], " ");
    let line2 = format!("{}, {}", city, state);
    let zip_formatted = format_zip(zip);
    let single_line = join_non_empty(&[&line1, &line2, &zip_formatted, "JAPAN"], ", ");

    ComposedAddress {
        single_line,
        line1,
        line2,
        city,
        state,
        zip: zip_formatted,
        country: "JAPAN".to_string(),
        phone_intl: format_phone_intl(phone),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chiyoda() -> PostalEntry {
        PostalEntry {
            prefecture_ja: "東京都".into(),
            city_ja: "千代田区".into(),
            town_ja: "千代田".into(),
            prefecture_en: "TOKYO".into(),
            city_en: "CHIYODA-KU".into(),
            town_en: "CHIYODA".into(),
        }
    }

    /// Golden composition for the canonical Chiyoda example.
    #[test]
    fn test_compose_golden() {
        let addr = compose_address("1000001", &chiyoda(), "1-1", "IMPERIAL PALACE", "");
        assert_eq!(
            addr.single_line,
            "1-1 CHIYODA IMPERIAL PALACE, CHIYODA-KU, TOKYO, 100-0001, JAPAN"
        );
        assert_eq!(addr.line1, "1-1 CHIYODA IMPERIAL PALACE");
        assert_eq!(addr.line2, "CHIYODA-KU, TOKYO");
        assert_eq!(addr.zip, "100-0001");
        assert_eq!(addr.country, "JAPAN");
        assert!(addr.phone_intl.is_none());
    }

    #[test]
    fn test_compose_without_street_or_building() {
        let addr = compose_address("1000001", &chiyoda(), "", "", "");
        assert_eq!(addr.line1, "CHIYODA");
        assert_eq!(
            addr.single_line,
            "CHIYODA, CHIYODA-KU, TOKYO, 100-0001, JAPAN"
        );
    }

    #[test]
    fn test_street_whitespace_hyphenated() {
        let addr = compose_address("1000001", &chiyoda(), "2 3 5", "", "");
        assert_eq!(addr.line1, "2-3-5 CHIYODA");
    }

    #[test]
    fn test_format_zip() {
        assert_eq!(format_zip("1000001"), "100-0001");
        assert_eq!(format_zip("100"), "100");
        assert_eq!(format_zip(""), "");
        // 7 bytes, but byte 3 is inside the multi-byte character.
        assert_eq!(format_zip("1あ123"), "1あ123");
    }

    #[test]
    fn test_format_phone_intl() {
        assert_eq!(format_phone_intl("0312345678").as_deref(), Some("+81-312345678"));
        assert_eq!(format_phone_intl("03-1234-5678").as_deref(), Some("+81-312345678"));
        // Already missing the leading zero: nothing to strip.
        assert_eq!(format_phone_intl("312345678").as_deref(), Some("+81-312345678"));
        assert_eq!(format_phone_intl(""), None);
        assert_eq!(format_phone_intl("--"), None);
    }

    #[test]
    fn test_phone_carried_into_address() {
        let addr = compose_address("1000001", &chiyoda(), "1-1", "", "09011112222");
        assert_eq!(addr.phone_intl.as_deref(), Some("+81-9011112222"));
    }

    #[test]
    fn test_json_omits_absent_phone() {
        let addr = compose_address("1000001", &chiyoda(), "1-1", "", "");
        let json = serde_json::to_value(&addr).unwrap();
        assert!(json.get("phoneIntl").is_none());
        assert_eq!(json["singleLine"], "1-1 CHIYODA, CHIYODA-KU, TOKYO, 100-0001, JAPAN");
    }
}
