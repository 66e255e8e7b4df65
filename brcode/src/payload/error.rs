//! Error types for BR Code encoding.
//!
//! Every encode that cannot produce a bank-acceptable payload returns an
//! [`EncodeError`]. There is deliberately no retry story: the operation is
//! deterministic, so retrying reproduces the same failure. Callers surface
//! a user-facing message ("payment key not configured") and move on.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::emv::FieldError;

/// Errors that can occur while encoding a BR Code payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// A required input is empty after trimming/sanitization. A payload
    /// missing its merchant account field scans and then bounces, which is
    /// strictly worse than no payload.
    #[error("missing required field: {field}")]
    MissingRequiredField {
        /// Human name of the missing input.
        field: &'static str,
    },

    /// A field's value cannot be represented by its two-digit length
    /// prefix (or exceeds its standard-mandated cap). Display text is
    /// truncated before it can reach this error; identifiers are not.
    #[error("value for tag {tag} is {len} bytes, cap is {max}")]
    FieldTooLong {
        /// EMV tag whose value overflowed.
        tag: String,
        /// Actual byte length of the value.
        len: usize,
        /// Maximum representable/permitted length.
        max: usize,
    },

    /// The amount is negative. Zero and absent amounts are fine (the
    /// field is simply omitted); negative ones are nonsense.
    #[error("invalid amount {amount}: must not be negative")]
    InvalidAmount {
        /// The rejected amount.
        amount: Decimal,
    },
}

impl From<FieldError> for EncodeError {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::ValueTooLong { tag, len } => EncodeError::FieldTooLong {
                tag,
                len,
                max: crate::config::MAX_FIELD_LEN,
            },
            // Tags are compile-time constants in this crate; a bad one is a
            // programming error, but we still map it to something sensible
            // rather than panic in a library.
            FieldError::InvalidTag { tag } => EncodeError::FieldTooLong {
                tag,
                len: 0,
                max: crate::config::MAX_FIELD_LEN,
            },
        }
    }
}
