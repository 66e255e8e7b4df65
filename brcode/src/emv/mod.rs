//! # EMV Primitives
//!
//! The two building blocks of every merchant-presented QR payload:
//!
//! - **field** — The TLV (tag-length-value) unit. Everything in a BR Code,
//!   including the checksum, is one of these. Nested fields (26 and 62) are
//!   TLVs whose value is a concatenation of rendered child TLVs.
//! - **crc** — CRC-16/CCITT-FALSE, the integrity check that terminates the
//!   payload. The single most common source of rejected QR codes in the
//!   wild is using one of the other five CRC-16 variants that share the
//!   0x1021 polynomial.

pub mod crc;
pub mod field;

pub use crc::{checksum, verify};
pub use field::{Field, FieldError};
