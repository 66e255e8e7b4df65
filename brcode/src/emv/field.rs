//! The TLV field — the atom of the BR Code format.
//!
//! A field is `tag ++ length ++ value` where the tag is two ASCII digits
//! and the length is the value's byte count as a zero-padded two-digit
//! decimal. That prefix tops out at 99, which is the real reason every
//! input to this crate has a byte cap.
//!
//! Building fields as a value type instead of splicing strings means the
//! invariants (two-digit tag, representable length, nested length equals
//! the sum of rendered children) live in exactly one place and are
//! enforced at construction, not discovered at the bank.

use std::fmt;

use thiserror::Error;

use crate::config::MAX_FIELD_LEN;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while constructing a TLV field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    /// The tag is not exactly two ASCII digits.
    #[error("invalid tag {tag:?}: must be exactly two ASCII digits")]
    InvalidTag {
        /// The offending tag.
        tag: String,
    },

    /// The value cannot be described by a two-digit length prefix.
    #[error("value for tag {tag} is {len} bytes, max is {MAX_FIELD_LEN}")]
    ValueTooLong {
        /// Tag whose value overflowed.
        tag: String,
        /// Actual byte length of the value.
        len: usize,
    },
}

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// One tag-length-value unit of an EMV payload.
///
/// The value is stored as passed in; the length prefix is derived at render
/// time from the value's byte length, so the two can never disagree.
///
/// # Examples
///
/// ```
/// use pix_brcode::emv::Field;
///
/// let f = Field::new("00", "01").unwrap();
/// assert_eq!(f.render(), "000201");
///
/// let nested = Field::nested("62", &[Field::new("05", "abc123de").unwrap()]).unwrap();
/// assert_eq!(nested.render(), "62120508abc123de");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    tag: String,
    value: String,
}

impl Field {
    /// Creates a field from a tag and a value.
    ///
    /// Fails if the tag is not two ASCII digits or the value is longer
    /// than 99 bytes. Values are measured in bytes, not characters —
    /// sanitization to ASCII must happen before a value reaches here.
    pub fn new(tag: &str, value: impl Into<String>) -> Result<Self, FieldError> {
        if tag.len() != 2 || !tag.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FieldError::InvalidTag {
                tag: tag.to_string(),
            });
        }
        let value = value.into();
        if value.len() > MAX_FIELD_LEN {
            return Err(FieldError::ValueTooLong {
                tag: tag.to_string(),
                len: value.len(),
            });
        }
        Ok(Self {
            tag: tag.to_string(),
            value,
        })
    }

    /// Creates a field whose value is the concatenation of rendered
    /// children.
    ///
    /// This is how fields 26 (merchant account information) and 62
    /// (additional data) are built. The outer length prefix is derived
    /// from the concatenation, so it is equal to the total rendered byte
    /// length of the children by construction.
    pub fn nested(tag: &str, children: &[Field]) -> Result<Self, FieldError> {
        let value: String = children.iter().map(Field::render).collect();
        Self::new(tag, value)
    }

    /// Renders the field as `tag ++ 2-digit length ++ value`.
    pub fn render(&self) -> String {
        format!("{}{:02}{}", self.tag, self.value.len(), self.value)
    }

    /// The field's tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The field's raw value (without tag or length prefix).
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
