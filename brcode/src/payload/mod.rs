//! # Payload Module
//!
//! Everything between raw caller input and a finished BR Code string.
//!
//! ## Architecture
//!
//! ```text
//! sanitize.rs     — Diacritic folding, byte caps, txid character filtering
//! builder.rs      — BrCodeBuilder: canonical field order, CRC termination
//! error.rs        — EncodeError: the three ways an encode can fail
//! verification.rs — TLV decoder + integrity checks for finished payloads
//! ```
//!
//! ## Payload Lifecycle
//!
//! 1. **Sanitize** — Fold merchant name/city to printable ASCII, strip the
//!    reference down to `[A-Za-z0-9]`, cap everything at its byte limit.
//! 2. **Build** — Emit fields 00, 26, 52, 53, 54, 58, 59, 60, 62 in that
//!    order, no separators, then the literal `6304`.
//! 3. **Checksum** — CRC-16/CCITT-FALSE over everything emitted so far,
//!    appended as four uppercase hex digits.
//! 4. **Verify** — [`verification::decode`] walks the result back, checking
//!    every length prefix and the trailing CRC.
//!
//! ## Design Decisions
//!
//! - Field 54 is omitted for absent *and* zero amounts: an open-amount code
//!   is valid and the payer's app prompts for the value. A `54040.00` field
//!   is how you get support tickets.
//! - Display text is truncated deterministically at its cap; the payment
//!   key is never truncated — a shortened key routes money to nobody, so an
//!   over-long key fails the encode instead.
//! - No partial output. Every error path returns before a single field is
//!   handed to the caller.

pub mod builder;
pub mod error;
pub mod sanitize;
pub mod verification;

pub use builder::{encode_pix_payload, BrCodeBuilder};
pub use error::EncodeError;
pub use verification::{decode, verify_payload, DecodeError, DecodedField};
