//! Extractable identity-document fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A field the extraction engine knows how to find.
///
/// The serialized name is the key used in filled forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Holder's full name.
    FullName,
    /// Date of birth, as printed on the document.
    Dob,
    /// Postal address.
    Address,
    /// 12-digit Aadhaar enrolment number, possibly masked.
    Aadhaar,
    /// 10-character PAN code.
    Pan,
    /// 10-digit mobile number.
    Phone,
    /// 6-digit postal index number.
    Pincode,
}

impl Field {
    /// Every field, in extraction order.
    pub const ALL: [Field; 7] = [
        Field::FullName,
        Field::Dob,
        Field::Address,
        Field::Aadhaar,
        Field::Pan,
        Field::Phone,
        Field::Pincode,
    ];

    /// Key used in serialized forms.
    pub fn key(&self) -> &'static str {
        match self {
            Field::FullName => "full_name",
            Field::Dob => "dob",
            Field::Address => "address",
            Field::Aadhaar => "aadhaar",
            Field::Pan => "pan",
            Field::Phone => "phone",
            Field::Pincode => "pincode",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Dob => "Date of Birth",
            Field::Address => "Address",
            Field::Aadhaar => "Aadhaar Number",
            Field::Pan => "PAN Number",
            Field::Phone => "Phone Number",
            Field::Pincode => "Pincode",
        }
    }

    /// Look a field up by its serialized key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_matches_serde_name() {
        for field in Field::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.key()));
        }
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Field::from_key("dob"), Some(Field::Dob));
        assert_eq!(Field::from_key("voter_id"), None);
    }
}
