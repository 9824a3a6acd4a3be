//! Route paths and the redirect targets built from them.

pub const IDENTIFY: &str = "/";
pub const BOOKING: &str = "/booking";
pub const BOOK: &str = "/book";
pub const HEALTH: &str = "/health";

/// `/booking` for a citizen, optionally with a doctor preselected.
#[must_use]
pub fn booking_url(national_id: &str, doctor_id: Option<&str>) -> String {
    let mut url = format!("{BOOKING}?national_id={}", urlencoding::encode(national_id));
    if let Some(doctor_id) = doctor_id {
        url.push_str("&doctor_id=");
        url.push_str(&urlencoding::encode(doctor_id));
    }
    url
}

/// Trimmed value of a submitted field, or `None` when it is absent or blank.
#[must_use]
pub fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// National ID from either `national_id` or the legacy `iin` field.
///
/// The first non-blank one wins, so a request carrying both is still served.
#[must_use]
pub fn national_id<'a>(national_id: Option<&'a str>, iin: Option<&'a str>) -> Option<&'a str> {
    present(national_id).or_else(|| present(iin))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_url_with_and_without_doctor() {
        assert_eq!(
            booking_url("010101300000", None),
            "/booking?national_id=010101300000"
        );
        assert_eq!(
            booking_url("010101300000", Some("2")),
            "/booking?national_id=010101300000&doctor_id=2"
        );
    }

    #[test]
    fn booking_url_encodes_values() {
        assert_eq!(
            booking_url("a b&c", Some("1&x=2")),
            "/booking?national_id=a%20b%26c&doctor_id=1%26x%3D2"
        );
    }

    #[test]
    fn present_rejects_blank_values() {
        assert_eq!(present(None), None);
        assert_eq!(present(Some("")), None);
        assert_eq!(present(Some("   ")), None);
        assert_eq!(present(Some(" 5 ")), Some("5"));
    }

    #[test]
    fn national_id_accepts_either_field() {
        assert_eq!(national_id(Some("1"), None), Some("1"));
        assert_eq!(national_id(None, Some("2")), Some("2"));
        assert_eq!(national_id(Some("1"), Some("2")), Some("1"));
        assert_eq!(national_id(Some(" "), Some("2")), Some("2"));
        assert_eq!(national_id(None, None), None);
    }
}
