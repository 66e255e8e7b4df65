//! # CRC-16/CCITT-FALSE
//!
//! The checksum that terminates every BR Code. The parameters are:
//! polynomial 0x1021, initial register 0xFFFF, no input reflection, no
//! output reflection, no final XOR. In the CRC catalogue this algorithm is
//! registered as **CRC-16/IBM-3740**; "CCITT-FALSE" is the older nickname
//! that stuck because half the internet shipped a *different* 0x1021
//! variant under the name "CCITT" first.
//!
//! ## On picking the wrong variant
//!
//! XMODEM (init 0x0000), KERMIT (reflected), MCRF4XX, GENIBUS — all share
//! the 0x1021 polynomial and all produce 4 hex digits. A payload checksummed
//! with any of them renders a perfectly scannable QR code that every bank
//! rejects. The tests below pin the variant with the classic `"123456789"`
//! check value (`29B1`) and cross-check the table-driven implementation
//! against a bit-by-bit reference, so a dependency bump can never silently
//! change the algorithm.
//!
//! The checksum covers the entire payload up to and including the literal
//! `6304` that announces the CRC field — its own tag and length, but not
//! its value. See [`crate::payload::builder`] for the assembly order.

use crc::{Crc, CRC_16_IBM_3740};

/// The checksum engine. `CRC_16_IBM_3740` is the catalogue name for
/// CRC-16/CCITT-FALSE; the parameters are checked in the tests below.
const CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_3740);

/// Computes the CRC-16/CCITT-FALSE of `data`, formatted as four uppercase
/// hex digits, zero-padded on the left.
///
/// # Example
///
/// ```
/// use pix_brcode::emv::crc::checksum;
///
/// // The check value every CRC catalogue lists for this variant.
/// assert_eq!(checksum("123456789"), "29B1");
/// ```
pub fn checksum(data: &str) -> String {
    format!("{:04X}", CRC16.checksum(data.as_bytes()))
}

/// Verifies the trailing checksum of a complete BR Code.
///
/// Recomputes the CRC over everything except the last four characters and
/// compares against those four, case-insensitively — the standard mandates
/// uppercase on emission but tolerant parsing costs nothing.
///
/// Returns `false` for anything shorter than five characters: there is no
/// payload-and-checksum split to check.
pub fn verify(payload: &str) -> bool {
    if payload.len() < 5 || !payload.is_char_boundary(payload.len() - 4) {
        return false;
    }
    let (body, declared) = payload.split_at(payload.len() - 4);
    checksum(body).eq_ignore_ascii_case(declared)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Bit-by-bit reference implementation, straight from the definition:
    /// XOR the byte into the top of the register, then eight shift-or-xor
    /// steps. Exists solely to pin the `crc` crate constant to the
    /// algorithm we mean.
    fn reference_crc16(data: &str) -> u16 {
        let mut reg: u16 = 0xFFFF;
        for byte in data.bytes() {
            reg ^= (byte as u16) << 8;
            for _ in 0..8 {
                if reg & 0x8000 != 0 {
                    reg = (reg << 1) ^ 0x1021;
                } else {
                    reg <<= 1;
                }
            }
        }
        reg
    }

    #[test]
    fn test_check_value_is_29b1() {
        // "123456789" -> 0x29B1 identifies CCITT-FALSE uniquely among the
        // 0x1021 family.
        assert_eq!(checksum("123456789"), "29B1");
    }

    #[test]
    fn test_not_the_xmodem_variant() {
        // XMODEM (init 0x0000) gives 0x31C3 for the same input. If this
        // test ever fails, the dependency changed algorithms under us.
        assert_ne!(checksum("123456789"), "31C3");
    }

    #[test]
    fn test_empty_input_is_initial_register() {
        // No input bytes, no shifts: the output is the initial 0xFFFF.
        assert_eq!(checksum(""), "FFFF");
    }

    #[test]
    fn test_matches_bit_by_bit_reference() {
        let samples = [
            "",
            "a",
            "123456789",
            "6304",
            "00020126330014BR.GOV.BCB.PIX011105535232955",
            "the quick brown fox jumps over the lazy dog",
        ];
        for s in samples {
            assert_eq!(
                checksum(s),
                format!("{:04X}", reference_crc16(s)),
                "mismatch for {s:?}"
            );
        }
    }

    #[test]
    fn test_output_is_four_uppercase_hex_digits() {
        for s in ["", "x", "some payload", "0", "\u{0}"] {
            let c = checksum(s);
            assert_eq!(c.len(), 4);
            assert!(c.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_verify_roundtrip() {
        let body = "000201...6304";
        let full = format!("{body}{}", checksum(body));
        assert!(verify(&full));
    }

    #[test]
    fn test_verify_is_case_insensitive() {
        let body = "000201...6304";
        let full = format!("{body}{}", checksum(body).to_lowercase());
        assert!(verify(&full));
    }

    #[test]
    fn test_verify_rejects_corruption() {
        let body = "000201...6304";
        let mut full = format!("{body}{}", checksum(body));
        full.replace_range(0..1, "9");
        assert!(!verify(&full));
    }

    #[test]
    fn test_verify_rejects_short_input() {
        assert!(!verify(""));
        assert!(!verify("29B1"));
    }
}
