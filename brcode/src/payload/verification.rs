//! BR Code decoding: structural checks and checksum validation.
//!
//! The inverse walk of [`super::builder`]: take a finished payload, split
//! it back into TLV fields (recursively for the nested 26 and 62), verify
//! every length prefix against the bytes that actually follow it, and
//! recompute the trailing CRC. The checks are ordered from cheapest to
//! most expensive so malformed input fails fast.
//!
//! This exists for two callers: the test suite, which uses it to prove
//! the encoder's output is self-consistent, and the CLI `check` command,
//! which points it at whatever a human pasted in.

use serde::Serialize;
use thiserror::Error;

use crate::config::{TAG_ADDITIONAL_DATA, TAG_CRC, TAG_MERCHANT_ACCOUNT};
use crate::emv::crc;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur while decoding a BR Code payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The input is too short to contain even the CRC field.
    #[error("payload is {len} chars, too short for a BR Code")]
    TooShort {
        /// Input length in bytes.
        len: usize,
    },

    /// The payload contains a byte outside the ASCII range. Length
    /// prefixes count bytes, so multi-byte characters desynchronize the
    /// parse — and the standard forbids them anyway.
    #[error("non-ASCII byte at offset {offset}")]
    NonAscii {
        /// Byte offset of the first offending byte.
        offset: usize,
    },

    /// A tag or length prefix is not two ASCII digits.
    #[error("malformed tag or length prefix at offset {offset}")]
    Malformed {
        /// Byte offset where parsing stopped.
        offset: usize,
    },

    /// A length prefix declares more bytes than remain in the input.
    #[error("field {tag} declares {declared} bytes but only {available} remain")]
    Truncated {
        /// Tag of the truncated field.
        tag: String,
        /// Bytes the length prefix promised.
        declared: usize,
        /// Bytes actually available.
        available: usize,
    },

    /// The final field is not a well-formed CRC field (tag 63, length 04).
    #[error("payload does not end with a CRC field (tag 63, length 04)")]
    MissingCrcField,

    /// The declared checksum does not match the recomputed one.
    #[error("checksum mismatch: payload declares {declared}, computed {computed}")]
    ChecksumMismatch {
        /// The four hex digits at the end of the payload.
        declared: String,
        /// What CRC-16/CCITT-FALSE actually produces for the body.
        computed: String,
    },
}

// ---------------------------------------------------------------------------
// DecodedField
// ---------------------------------------------------------------------------

/// One decoded TLV field.
///
/// For the nested templates (26 and 62) `children` holds the decoded
/// sub-fields and `value` still holds the raw concatenation, so callers
/// can look at whichever representation suits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedField {
    /// Two-digit tag.
    pub tag: String,
    /// Raw value (without tag or length prefix).
    pub value: String,
    /// Decoded sub-fields for nested templates; empty otherwise.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DecodedField>,
}

/// Splits a TLV stream into `(tag, value)` pairs.
///
/// `base` is the offset of `input` within the full payload, used only to
/// report absolute positions in errors.
fn parse_tlv(input: &str, base: usize) -> Result<Vec<(String, String)>, DecodeError> {
    let mut fields = Vec::new();
    let bytes = input.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        if pos + 4 > bytes.len() || !bytes[pos..pos + 4].iter().all(u8::is_ascii_digit) {
            return Err(DecodeError::Malformed { offset: base + pos });
        }
        let tag = &input[pos..pos + 2];
        // Two ASCII digits, checked above; max value 99.
        let declared = (bytes[pos + 2] - b'0') as usize * 10 + (bytes[pos + 3] - b'0') as usize;
        let start = pos + 4;

        if start + declared > bytes.len() {
            return Err(DecodeError::Truncated {
                tag: tag.to_string(),
                declared,
                available: bytes.len() - start,
            });
        }

        fields.push((tag.to_string(), input[start..start + declared].to_string()));
        pos = start + declared;
    }

    Ok(fields)
}

/// Decodes a complete BR Code into its fields, verifying structure and
/// checksum along the way.
///
/// Checks, in order: minimum length, ASCII-only, every length prefix
/// (top-level and inside the nested 26/62 templates), the presence of a
/// trailing CRC field, and finally the checksum itself (case-insensitive
/// comparison, since emission is uppercase but parsing is tolerant).
///
/// # Example
///
/// ```
/// use pix_brcode::payload::{decode, BrCodeBuilder};
///
/// let code = BrCodeBuilder::new("05535232955", "Lana Pet Care", "Florianopolis")
///     .build()
///     .unwrap();
///
/// let fields = decode(&code).unwrap();
/// assert_eq!(fields[0].tag, "00");
/// assert_eq!(fields[0].value, "01");
/// ```
pub fn decode(payload: &str) -> Result<Vec<DecodedField>, DecodeError> {
    // Smallest conceivable payload: one empty field plus the CRC field.
    if payload.len() < 8 {
        return Err(DecodeError::TooShort {
            len: payload.len(),
        });
    }

    if let Some(offset) = payload.bytes().position(|b| !b.is_ascii()) {
        return Err(DecodeError::NonAscii { offset });
    }

    let flat = parse_tlv(payload, 0)?;

    // The CRC field must close the payload: tag 63, exactly 4 hex chars.
    let crc_value = match flat.last() {
        Some((tag, value))
            if tag == TAG_CRC
                && value.len() == 4
                && value.bytes().all(|b| b.is_ascii_hexdigit()) =>
        {
            value.clone()
        }
        _ => return Err(DecodeError::MissingCrcField),
    };

    let body = &payload[..payload.len() - 4];
    let computed = crc::checksum(body);
    if !computed.eq_ignore_ascii_case(&crc_value) {
        return Err(DecodeError::ChecksumMismatch {
            declared: crc_value,
            computed,
        });
    }

    // Re-walk to attach absolute offsets for nested parsing errors.
    let mut decoded = Vec::with_capacity(flat.len());
    let mut offset = 0;
    for (tag, value) in flat {
        let children = if tag == TAG_MERCHANT_ACCOUNT || tag == TAG_ADDITIONAL_DATA {
            parse_tlv(&value, offset + 4)?
                .into_iter()
                .map(|(tag, value)| DecodedField {
                    tag,
                    value,
                    children: Vec::new(),
                })
                .collect()
        } else {
            Vec::new()
        };
        offset += 4 + value.len();
        decoded.push(DecodedField {
            tag,
            value,
            children,
        });
    }

    Ok(decoded)
}

/// Verifies a BR Code without caring about its contents.
///
/// Convenience wrapper over [`decode`] for callers that only want a
/// yes/no (plus the reason for "no").
pub fn verify_payload(payload: &str) -> Result<(), DecodeError> {
    decode(payload).map(|_| ())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
