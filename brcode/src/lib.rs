// Copyright (c) 2026 Lana Pet Care. MIT License.
// See LICENSE for details.

//! # pix-brcode — PIX BR Code Payload Encoder
//!
//! Builds the "PIX Copia e Cola" string: the EMV merchant-presented QR
//! payload that Brazilian banking apps scan (or accept pasted) to make an
//! instant payment. The format looks deceptively simple — tag, two-digit
//! length, value, repeat — and that is exactly why so many implementations
//! get it subtly wrong. A single off-by-one in a length prefix, or the
//! wrong CRC-16 variant at the end, produces a QR code that renders
//! beautifully and is rejected by every bank.
//!
//! ## Architecture
//!
//! - **config** — Every EMV tag, field cap, and scheme constant. One place.
//! - **emv** — The TLV field primitive and the CRC-16/CCITT-FALSE checksum.
//! - **payload** — Input sanitization, the builder that assembles the final
//!   string, and a decoder that verifies finished payloads.
//!
//! ## Design Philosophy
//!
//! 1. The encoder is a pure function. Same inputs, same bytes, every time.
//! 2. No partial payloads. A BR Code missing its merchant account field is
//!    worse than no BR Code — it scans and then fails at the bank.
//! 3. Amounts are decimals, never floats. `0.1 + 0.2` has no business here.
//! 4. Everything with a length prefix has a test that walks it.
//!
//! ## Quick start
//!
//! ```
//! use pix_brcode::payload::BrCodeBuilder;
//! use rust_decimal::Decimal;
//!
//! let code = BrCodeBuilder::new("05535232955", "Lana Pet Care", "Florianopolis")
//!     .amount(Decimal::new(5500, 2))
//!     .reference("abc123de")
//!     .build()
//!     .unwrap();
//!
//! assert!(code.starts_with("000201"));
//! assert!(pix_brcode::emv::crc::verify(&code));
//! ```

pub mod config;
pub mod emv;
pub mod payload;

pub use payload::builder::{encode_pix_payload, BrCodeBuilder};
pub use payload::error::EncodeError;
