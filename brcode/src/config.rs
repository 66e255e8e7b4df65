//! # EMV Tags, Caps & Scheme Constants
//!
//! Every magic number in the BR Code format lives here. If you're hardcoding
//! a tag somewhere else, you're doing it wrong and you owe the team coffee.
//!
//! The values come from two documents: the EMVCo merchant-presented QR
//! specification (the TLV layout and tag numbers) and the Banco Central do
//! Brasil PIX manual (the `BR.GOV.BCB.PIX` arrangement and the field caps).
//! None of them are negotiable — a payload that strays from these constants
//! scans fine and then bounces at the bank.

// ---------------------------------------------------------------------------
// Top-level EMV tags (canonical emission order)
// ---------------------------------------------------------------------------

/// Payload format indicator. Always the first field, always `"01"`.
pub const TAG_PAYLOAD_FORMAT: &str = "00";

/// Merchant account information for the PIX arrangement. Nested TLV.
pub const TAG_MERCHANT_ACCOUNT: &str = "26";

/// Merchant category code. We emit `"0000"` (unclassified) — a dog groomer
/// does not need an ISO 18245 code to get paid.
pub const TAG_MERCHANT_CATEGORY: &str = "52";

/// Transaction currency, ISO 4217 numeric.
pub const TAG_CURRENCY: &str = "53";

/// Transaction amount. Omitted entirely for open-amount codes.
pub const TAG_AMOUNT: &str = "54";

/// Country code, ISO 3166-1 alpha-2.
pub const TAG_COUNTRY: &str = "58";

/// Merchant display name.
pub const TAG_MERCHANT_NAME: &str = "59";

/// Merchant city.
pub const TAG_MERCHANT_CITY: &str = "60";

/// Additional data field template. Nested TLV carrying the transaction
/// reference (txid).
pub const TAG_ADDITIONAL_DATA: &str = "62";

/// CRC-16 checksum. Always the last field, value always 4 hex digits.
pub const TAG_CRC: &str = "63";

// ---------------------------------------------------------------------------
// Sub-tags
// ---------------------------------------------------------------------------

/// Inside tag 26: the globally unique identifier of the arrangement.
pub const SUBTAG_GUI: &str = "00";

/// Inside tag 26: the PIX key (CPF, CNPJ, phone, e-mail, or random key).
pub const SUBTAG_PIX_KEY: &str = "01";

/// Inside tag 26: optional free-text description shown to the payer.
pub const SUBTAG_DESCRIPTION: &str = "02";

/// Inside tag 62: the transaction reference (txid).
pub const SUBTAG_TXID: &str = "05";

// ---------------------------------------------------------------------------
// Scheme constants
// ---------------------------------------------------------------------------

/// Value of field 00. Format version of the EMV QR specification.
pub const PAYLOAD_FORMAT_INDICATOR: &str = "01";

/// The PIX arrangement's globally unique identifier. Case matters to some
/// bank parsers even though the standard says it shouldn't.
pub const PIX_GUI: &str = "BR.GOV.BCB.PIX";

/// Merchant category code for "unclassified".
pub const MERCHANT_CATEGORY_UNCLASSIFIED: &str = "0000";

/// ISO 4217 numeric code for the Brazilian Real.
pub const CURRENCY_BRL: &str = "986";

/// ISO 3166-1 alpha-2 country code.
pub const COUNTRY_BR: &str = "BR";

/// Placeholder txid when the caller supplies no reference. The PIX manual
/// blesses the literal `***` for "no reference".
pub const TXID_NONE: &str = "***";

/// The fixed prefix that announces the CRC field: tag 63, length 04. It is
/// appended *before* the checksum is computed, because the checksum covers
/// its own tag and length (but not its value).
pub const CRC_FIELD_PREFIX: &str = "6304";

// ---------------------------------------------------------------------------
// Field caps (bytes, measured after sanitization)
// ---------------------------------------------------------------------------

/// Generic TLV value cap. A two-digit decimal length prefix cannot
/// describe anything longer.
pub const MAX_FIELD_LEN: usize = 99;

/// Merchant name cap per the PIX manual.
pub const MAX_MERCHANT_NAME_LEN: usize = 25;

/// Merchant city cap per the PIX manual.
pub const MAX_MERCHANT_CITY_LEN: usize = 15;

/// Transaction reference (txid) cap.
pub const MAX_REFERENCE_LEN: usize = 25;

/// Rendered amount cap (field 54), e.g. `"1234567890.12"` is 13 chars.
pub const MAX_AMOUNT_LEN: usize = 13;

/// Cap we impose on the optional description so the composed merchant
/// account field stays comfortably under [`MAX_FIELD_LEN`] even alongside
/// a long e-mail key.
pub const MAX_DESCRIPTION_LEN: usize = 40;

// ---------------------------------------------------------------------------
// Utility
// ---------------------------------------------------------------------------

/// Returns a human-readable name for a top-level tag, mainly for logging
/// and the CLI `check` output. Unknown tags get echoed back because the
/// standard reserves plenty of numbers we don't emit but may encounter.
pub fn tag_name(tag: &str) -> &'static str {
    match tag {
        TAG_PAYLOAD_FORMAT => "payload format indicator",
        TAG_MERCHANT_ACCOUNT => "merchant account information",
        TAG_MERCHANT_CATEGORY => "merchant category code",
        TAG_CURRENCY => "transaction currency",
        TAG_AMOUNT => "transaction amount",
        TAG_COUNTRY => "country code",
        TAG_MERCHANT_NAME => "merchant name",
        TAG_MERCHANT_CITY => "merchant city",
        TAG_ADDITIONAL_DATA => "additional data field template",
        TAG_CRC => "CRC",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_two_ascii_digits() {
        // A one-digit tag would silently shift every byte after it.
        for tag in [
            TAG_PAYLOAD_FORMAT,
            TAG_MERCHANT_ACCOUNT,
            TAG_MERCHANT_CATEGORY,
            TAG_CURRENCY,
            TAG_AMOUNT,
            TAG_COUNTRY,
            TAG_MERCHANT_NAME,
            TAG_MERCHANT_CITY,
            TAG_ADDITIONAL_DATA,
            TAG_CRC,
            SUBTAG_GUI,
            SUBTAG_PIX_KEY,
            SUBTAG_DESCRIPTION,
            SUBTAG_TXID,
        ] {
            assert_eq!(tag.len(), 2, "tag {tag:?} is not two chars");
            assert!(tag.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn test_crc_prefix_matches_tag() {
        assert_eq!(CRC_FIELD_PREFIX, format!("{TAG_CRC}04"));
    }

    #[test]
    fn test_gui_is_ascii_uppercase_scheme() {
        assert!(PIX_GUI.is_ascii());
        assert_eq!(PIX_GUI.len(), 14);
    }

    #[test]
    fn test_caps_fit_the_length_prefix() {
        // Every per-field cap must be representable by the two-digit prefix.
        for cap in [
            MAX_MERCHANT_NAME_LEN,
            MAX_MERCHANT_CITY_LEN,
            MAX_REFERENCE_LEN,
            MAX_AMOUNT_LEN,
            MAX_DESCRIPTION_LEN,
        ] {
            assert!(cap <= MAX_FIELD_LEN);
        }
    }

    #[test]
    fn test_tag_name_known_and_unknown() {
        assert_eq!(tag_name(TAG_AMOUNT), "transaction amount");
        assert_eq!(tag_name("81"), "unknown");
    }
}
