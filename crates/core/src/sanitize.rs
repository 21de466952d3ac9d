//! Input sanitizers for user-entered address form fields.
//!
//! These mirror what the consuming form applies before lookup and
//! composition: digits-only zip/phone, length-capped street/building.

/// Keep ASCII digits only, capped at 7 characters.
pub fn sanitize_zip(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(7)
        .collect()
}

/// Trim, cap at 100 characters, uppercase.
pub fn sanitize_street(value: &str) -> String {
    value.trim().chars().take(100).collect::<String>().to_uppercase()
}

/// Trim and cap at 100 characters.
pub fn sanitize_building(value: &str) -> String {
    value.trim().chars().take(100).collect()
}

/// Keep ASCII digits only, capped at 11 characters.
pub fn sanitize_phone(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(11)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_zip() {
        assert_eq!(sanitize_zip("100-0001"), "1000001");
        assert_eq!(sanitize_zip("  1000001999 "), "1000001");
        assert_eq!(sanitize_zip("abc"), "");
    }

    #[test]
    fn test_sanitize_street() {
        assert_eq!(sanitize_street("  1-1 chiyoda "), "1-1 CHIYODA");
        let long = "a".repeat(200);
        assert_eq!(sanitize_street(&long).len(), 100);
    }

    #[test]
    fn test_sanitize_building() {
        assert_eq!(sanitize_building("  Imperial Palace "), "Imperial Palace");
    }

    #[test]
    fn test_sanitize_phone() {
        assert_eq!(sanitize_phone("03-1234-5678"), "0312345678");
        assert_eq!(sanitize_phone("090 1111 2222 3333"), "09011112222");
    }
}
