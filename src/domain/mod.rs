//! Domain primitives for the booking flows.
//!
//! Identifiers arrive as raw strings from query parameters and form fields.
//! The newtypes here are the only way those strings enter the service layer,
//! so a blank national ID or a non-numeric doctor id never reaches a query.

use serde::{Serialize, Serializer};
use std::fmt;

/// A citizen's national identification number (IIN), trimmed and non-empty.
///
/// # Examples
///
/// ```rust
/// use clinic::domain::NationalId;
///
/// let id = NationalId::parse("  010101300000 ").unwrap();
/// assert_eq!(id.as_str(), "010101300000");
/// assert!(NationalId::parse("   ").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NationalId(String);

impl NationalId {
    /// Returns `None` when the input is empty or whitespace only.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for NationalId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// Identifier of a row in the `doctors` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DoctorId(i32);

impl DoctorId {
    /// Parses a query/form value. Blank or non-numeric input yields `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse().ok().map(Self)
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a row in the `time_slots` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId(i32);

impl SlotId {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse().ok().map(Self)
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn national_id_is_trimmed() {
        let id = NationalId::parse("\t020202400000\n").unwrap();
        assert_eq!(id.as_str(), "020202400000");
        assert_eq!(id.to_string(), "020202400000");
    }

    #[test]
    fn blank_national_id_is_rejected() {
        assert!(NationalId::parse("").is_none());
        assert!(NationalId::parse("    ").is_none());
    }

    #[test]
    fn doctor_id_parsing() {
        assert_eq!(DoctorId::parse("7").map(|d| d.value()), Some(7));
        assert_eq!(DoctorId::parse(" 12 ").map(|d| d.value()), Some(12));
        assert_eq!(DoctorId::parse(""), None);
        assert_eq!(DoctorId::parse("abc"), None);
    }

    #[test]
    fn slot_id_parsing() {
        assert_eq!(SlotId::parse("3").map(|s| s.value()), Some(3));
        assert_eq!(SlotId::parse("3; DROP TABLE"), None);
    }

    #[test]
    fn national_id_serializes_as_plain_string() {
        let id = NationalId::parse("010101300000").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"010101300000\"");
    }
}
