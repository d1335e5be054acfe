//! Rule-based field extractors for identity documents.

pub mod aadhaar;
pub mod address;
pub mod dates;
pub mod name;
pub mod pan;
pub mod patterns;
pub mod phone;
pub mod pincode;

pub use aadhaar::{extract_aadhaar, score_candidate, AadhaarExtractor, Candidate};
pub use address::{extract_address, AddressExtractor};
pub use dates::{extract_dob, DateExtractor};
pub use name::{extract_name, NameExtractor};
pub use pan::{extract_pan, is_valid_pan, PanExtractor};
pub use phone::{extract_phone, PhoneExtractor};
pub use pincode::{extract_pincode, PincodeExtractor};

use crate::extract::text::NormalizedText;
use crate::models::field::Field;

/// Trait for field extractors.
///
/// A miss is `None`, never an error.
pub trait FieldExtractor: Send + Sync {
    /// The field this extractor fills.
    fn field(&self) -> Field;

    /// Extract the field's best value from a document.
    fn extract(&self, doc: &NormalizedText<'_>) -> Option<String>;
}
