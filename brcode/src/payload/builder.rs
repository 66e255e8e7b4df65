//! BR Code construction via the builder pattern.
//!
//! The [`BrCodeBuilder`] enforces a disciplined construction flow: set the
//! required merchant inputs, optionally an amount, reference and
//! description, call `.build()`, and get back the complete checksummed
//! payload string — or an error, never a partial payload.
//!
//! Field order is fixed by the standard: 00, 26, 52, 53, 54 (when present),
//! 58, 59, 60, 62, then 63 (the CRC). A reordered payload may still scan,
//! but interoperability is exactly the business of not finding out.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::{
    COUNTRY_BR, CRC_FIELD_PREFIX, CURRENCY_BRL, MAX_AMOUNT_LEN, MAX_DESCRIPTION_LEN,
    MAX_MERCHANT_CITY_LEN, MAX_MERCHANT_NAME_LEN, MERCHANT_CATEGORY_UNCLASSIFIED,
    PAYLOAD_FORMAT_INDICATOR, PIX_GUI, SUBTAG_DESCRIPTION, SUBTAG_GUI, SUBTAG_PIX_KEY,
    SUBTAG_TXID, TAG_ADDITIONAL_DATA, TAG_AMOUNT, TAG_COUNTRY, TAG_CURRENCY,
    TAG_MERCHANT_ACCOUNT, TAG_MERCHANT_CATEGORY, TAG_MERCHANT_CITY, TAG_MERCHANT_NAME,
    TAG_PAYLOAD_FORMAT, TXID_NONE,
};
use crate::emv::{crc, Field};

use super::error::EncodeError;
use super::sanitize::{sanitize_reference, sanitize_text};

// ---------------------------------------------------------------------------
// BrCodeBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for BR Code payloads.
///
/// # Usage
///
/// ```
/// use pix_brcode::payload::BrCodeBuilder;
/// use rust_decimal::Decimal;
///
/// let code = BrCodeBuilder::new("05535232955", "Lana Pet Care", "Florianópolis")
///     .amount(Decimal::new(5500, 2))
///     .reference("abc-123-de") // sanitized to "abc123de"
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     code,
///     "00020126330014BR.GOV.BCB.PIX011105535232955520400005303986\
///      540555.005802BR5913Lana Pet Care6013Florianopolis\
///      62120508abc123de6304D483",
/// );
/// ```
///
/// The builder owns its inputs and is consumed by [`build`](Self::build).
/// Sanitization (diacritic folding, caps, txid filtering) happens inside
/// `build`, so callers hand over display text as-is.
#[derive(Debug, Clone)]
pub struct BrCodeBuilder {
    key: String,
    merchant_name: String,
    merchant_city: String,
    amount: Option<Decimal>,
    reference: Option<String>,
    description: Option<String>,
}

impl BrCodeBuilder {
    /// Creates a builder with the three required inputs.
    ///
    /// The key is the merchant's PIX key — CPF, CNPJ, phone in `+55...`
    /// form, e-mail, or a random (EVP) key. Its format is the bank's
    /// problem; this crate passes it through untouched apart from
    /// trimming surrounding whitespace.
    pub fn new(
        key: impl Into<String>,
        merchant_name: impl Into<String>,
        merchant_city: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            merchant_name: merchant_name.into(),
            merchant_city: merchant_city.into(),
            amount: None,
            reference: None,
            description: None,
        }
    }

    /// Sets the transaction amount.
    ///
    /// Rounded half-away-from-zero to two decimal places and rendered with
    /// exactly two fraction digits (`55` becomes `55.00`). A zero amount
    /// is treated the same as no amount: field 54 is omitted and the
    /// payer's app prompts for the value.
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Sets the transaction reference (txid), e.g. a booking identifier.
    ///
    /// Sanitized to `[A-Za-z0-9]` and truncated to 25 characters. When the
    /// sanitized result is empty (or no reference is set), the payload
    /// carries the conventional `***` placeholder.
    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Sets an optional free-text description shown to the payer,
    /// e.g. `"Pedido abc123de"`.
    ///
    /// Folded to ASCII and capped at 40 bytes so the composed merchant
    /// account field stays within its 99-byte budget.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Consumes the builder and produces the complete payload string.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::MissingRequiredField`] if the key, merchant name,
    ///   or merchant city is empty after sanitization.
    /// - [`EncodeError::InvalidAmount`] for negative amounts.
    /// - [`EncodeError::FieldTooLong`] if the key (plus description)
    ///   overflows field 26's 99-byte value, or the rendered amount
    ///   exceeds 13 characters.
    pub fn build(self) -> Result<String, EncodeError> {
        let key = self.key.trim();
        if key.is_empty() {
            return Err(EncodeError::MissingRequiredField {
                field: "payment key",
            });
        }

        let name = sanitize_text(&self.merchant_name, MAX_MERCHANT_NAME_LEN);
        if name.is_empty() {
            return Err(EncodeError::MissingRequiredField {
                field: "merchant name",
            });
        }

        let city = sanitize_text(&self.merchant_city, MAX_MERCHANT_CITY_LEN);
        if city.is_empty() {
            return Err(EncodeError::MissingRequiredField {
                field: "merchant city",
            });
        }

        let amount = match self.amount {
            Some(a) => render_amount(a)?,
            None => None,
        };

        let reference = self
            .reference
            .as_deref()
            .map(sanitize_reference)
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| TXID_NONE.to_string());

        let description = self
            .description
            .as_deref()
            .map(|d| sanitize_text(d, MAX_DESCRIPTION_LEN))
            .filter(|d| !d.is_empty());

        // Merchant account information (26): the arrangement GUI, the key,
        // and optionally the description. The key is the one input that can
        // push the nested value past 99 bytes, so this is a real error
        // path, not an expect.
        let mut account_fields = vec![
            static_field(SUBTAG_GUI, PIX_GUI),
            Field::new(SUBTAG_PIX_KEY, key)?,
        ];
        if let Some(d) = &description {
            account_fields.push(Field::new(SUBTAG_DESCRIPTION, d.clone())?);
        }
        let merchant_account = Field::nested(TAG_MERCHANT_ACCOUNT, &account_fields)?;

        // Additional data (62): the txid, capped at 25 well under the
        // nesting budget.
        let additional_data = Field::nested(
            TAG_ADDITIONAL_DATA,
            &[Field::new(SUBTAG_TXID, reference)?],
        )?;

        let mut payload = String::with_capacity(192);
        payload.push_str(&static_field(TAG_PAYLOAD_FORMAT, PAYLOAD_FORMAT_INDICATOR).render());
        payload.push_str(&merchant_account.render());
        payload.push_str(&static_field(TAG_MERCHANT_CATEGORY, MERCHANT_CATEGORY_UNCLASSIFIED).render());
        payload.push_str(&static_field(TAG_CURRENCY, CURRENCY_BRL).render());
        if let Some(a) = &amount {
            payload.push_str(&Field::new(TAG_AMOUNT, a.clone())?.render());
        }
        payload.push_str(&static_field(TAG_COUNTRY, COUNTRY_BR).render());
        payload.push_str(&Field::new(TAG_MERCHANT_NAME, name)?.render());
        payload.push_str(&Field::new(TAG_MERCHANT_CITY, city)?.render());
        payload.push_str(&additional_data.render());

        // The CRC field announces itself before its value exists: tag 63,
        // length 04 are part of the checksummed bytes.
        payload.push_str(CRC_FIELD_PREFIX);
        let checksum = crc::checksum(&payload);
        payload.push_str(&checksum);

        tracing::debug!(len = payload.len(), crc = %checksum, "BR Code assembled");
        Ok(payload)
    }
}

/// Builds a field from compile-time constants. Both the tag and the value
/// are `const`s validated by the config tests, so failure here is a
/// programming error, not an input error.
fn static_field(tag: &str, value: &str) -> Field {
    Field::new(tag, value).expect("static tag/value pair is valid")
}

/// Renders the amount for field 54, or `None` when the field is omitted.
fn render_amount(amount: Decimal) -> Result<Option<String>, EncodeError> {
    if amount.is_sign_negative() {
        return Err(EncodeError::InvalidAmount { amount });
    }

    // Half-away-from-zero matches what `toFixed(2)` does everywhere the
    // merchant previously saw these numbers.
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return Ok(None);
    }

    // Force exactly two fraction digits: "55" -> "55.00", "0.5" -> "0.50".
    rounded.rescale(2);
    let rendered = rounded.to_string();
    if rendered.len() > MAX_AMOUNT_LEN {
        return Err(EncodeError::FieldTooLong {
            tag: TAG_AMOUNT.to_string(),
            len: rendered.len(),
            max: MAX_AMOUNT_LEN,
        });
    }
    Ok(Some(rendered))
}

// ---------------------------------------------------------------------------
// Convenience function
// ---------------------------------------------------------------------------

/// Encodes a complete PIX BR Code in one call.
///
/// Thin wrapper over [`BrCodeBuilder`] for callers that have all their
/// inputs in hand and no use for the fluent interface.
///
/// # Example
///
/// ```
/// use pix_brcode::encode_pix_payload;
/// use rust_decimal::Decimal;
///
/// let code = encode_pix_payload(
///     "05535232955",
///     "Lana Pet Care",
///     "Florianopolis",
///     Some(Decimal::new(5500, 2)),
///     Some("abc-123-def-456-ghi"),
/// )
/// .unwrap();
///
/// assert!(code.starts_with("000201"));
/// assert!(pix_brcode::emv::crc::verify(&code));
/// ```
pub fn encode_pix_payload(
    key: &str,
    merchant_name: &str,
    merchant_city: &str,
    amount: Option<Decimal>,
    reference: Option<&str>,
) -> Result<String, EncodeError> {
    let mut builder = BrCodeBuilder::new(key, merchant_name, merchant_city);
    if let Some(a) = amount {
        builder = builder.amount(a);
    }
    if let Some(r) = reference {
        builder = builder.reference(r);
    }
    builder.build()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn lana() -> BrCodeBuilder {
        BrCodeBuilder::new("05535232955", "Lana Pet Care", "Florianopolis")
    }

    #[test]
    fn known_vector_with_amount_and_reference() {
        let code = lana()
            .amount(Decimal::new(5500, 2))
            .reference("abc123de")
            .build()
            .unwrap();
        assert_eq!(
            code,
            "00020126330014BR.GOV.BCB.PIX011105535232955520400005303986540555.00\
             5802BR5913Lana Pet Care6013Florianopolis62120508abc123de6304D483"
        );
    }

    #[test]
    fn builder_is_deterministic() {
        let a = lana().amount(Decimal::new(5500, 2)).reference("x1").build().unwrap();
        let b = lana().amount(Decimal::new(5500, 2)).reference("x1").build().unwrap();
        assert_eq!(a, b, "same inputs must produce the same bytes");
    }

    #[test]
    fn open_amount_payload_has_no_54() {
        let code = BrCodeBuilder::new(
            "pagamentos@lanapetcare.com.br",
            "Lana Pet Care",
            "Florianopolis",
        )
        .build()
        .unwrap();
        assert_eq!(
            code,
            "00020126510014BR.GOV.BCB.PIX0129pagamentos@lanapetcare.com.br\
             5204000053039865802BR5913Lana Pet Care6013Florianopolis62070503***6304454E"
        );
        assert!(!code.contains("5405"), "no amount field expected");
    }

    #[test]
    fn amount_zero_omits_field_54() {
        let with_zero = lana().amount(Decimal::ZERO).build().unwrap();
        let without = lana().build().unwrap();
        assert_eq!(with_zero, without);
    }

    #[test]
    fn amount_is_rendered_with_two_fraction_digits() {
        let code = lana().amount(Decimal::new(50, 2)).reference("Pedido42").build().unwrap();
        assert!(code.contains("54040.50"), "got: {code}");
    }

    #[test]
    fn whole_amount_gains_fraction_digits() {
        let code = lana().amount(Decimal::new(55, 0)).build().unwrap();
        assert!(code.contains("540555.00"), "got: {code}");
    }

    #[test]
    fn amount_rounds_half_away_from_zero() {
        // 1.005 -> 1.01, not the banker's 1.00.
        let code = lana().amount(Decimal::new(1005, 3)).build().unwrap();
        assert!(code.contains("54041.01"), "got: {code}");
    }

    #[test]
    fn negative_amount_is_rejected() {
        let err = lana().amount(Decimal::new(-100, 2)).build().unwrap_err();
        assert!(matches!(err, EncodeError::InvalidAmount { .. }));
    }

    #[test]
    fn oversized_amount_is_rejected() {
        // 14 rendered chars, one over the field 54 cap.
        let big: Decimal = "99999999999.99".parse().unwrap();
        let err = lana().amount(big).build().unwrap_err();
        assert!(
            matches!(err, EncodeError::FieldTooLong { ref tag, max: 13, .. } if tag == "54")
        );
    }

    #[test]
    fn empty_key_fails_fast() {
        let err = BrCodeBuilder::new("   ", "Lana Pet Care", "Florianopolis")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            EncodeError::MissingRequiredField {
                field: "payment key"
            }
        );
    }

    #[test]
    fn name_that_sanitizes_to_nothing_fails() {
        let err = BrCodeBuilder::new("05535232955", "🐶🐱", "Florianopolis")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            EncodeError::MissingRequiredField {
                field: "merchant name"
            }
        );
    }

    #[test]
    fn missing_city_fails() {
        let err = BrCodeBuilder::new("05535232955", "Lana Pet Care", "")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            EncodeError::MissingRequiredField {
                field: "merchant city"
            }
        );
    }

    #[test]
    fn key_is_passed_through_untouched() {
        let code = BrCodeBuilder::new("+5548999990000", "Joao Petshop", "Sao Paulo")
            .amount(Decimal::new(123450, 2))
            .reference("BOOKING1")
            .build()
            .unwrap();
        assert_eq!(
            code,
            "00020126360014BR.GOV.BCB.PIX0114+55489999900005204000053039865407\
             1234.505802BR5912Joao Petshop6009Sao Paulo62120508BOOKING1630486ED"
        );
    }

    #[test]
    fn oversized_key_is_rejected_not_truncated() {
        let key = "k".repeat(90); // GUI sub-field (18) + key sub-field (4 + 90) > 99
        let err = BrCodeBuilder::new(key, "Lana Pet Care", "Florianopolis")
            .build()
            .unwrap_err();
        assert!(matches!(err, EncodeError::FieldTooLong { .. }));
    }

    #[test]
    fn merchant_name_is_folded_and_truncated() {
        let code = BrCodeBuilder::new(
            "05535232955",
            "Pensão Canina São Francisco de Assis",
            "Florianópolis",
        )
        .build()
        .unwrap();
        // 25-byte cap after folding, trailing space re-trimmed.
        assert!(code.contains("5925Pensao Canina Sao Francis"), "got: {code}");
        assert!(code.contains("6013Florianopolis"), "got: {code}");
    }

    #[test]
    fn city_is_capped_at_15() {
        let code = BrCodeBuilder::new("05535232955", "Lana Pet Care", "Sao Jose dos Campos")
            .build()
            .unwrap();
        assert!(code.contains("6015Sao Jose dos Ca"), "got: {code}");
    }

    #[test]
    fn reference_with_separators_is_sanitized() {
        let code = lana().reference("abc-123-def-456").build().unwrap();
        assert!(code.contains("62160512abc123def456"), "got: {code}");
    }

    #[test]
    fn reference_that_sanitizes_to_nothing_falls_back_to_placeholder() {
        let code = lana().reference("---").build().unwrap();
        assert!(code.contains("62070503***"), "got: {code}");
    }

    #[test]
    fn description_lands_in_merchant_account_subfield_02() {
        let code = lana()
            .amount(Decimal::new(5500, 2))
            .reference("abc123de")
            .description("Pedido abc123de")
            .build()
            .unwrap();
        assert_eq!(
            code,
            "00020126520014BR.GOV.BCB.PIX0111055352329550215Pedido abc123de\
             520400005303986540555.005802BR5913Lana Pet Care6013Florianopolis\
             62120508abc123de63046030"
        );
    }

    #[test]
    fn payload_always_passes_its_own_checksum() {
        let code = lana().amount(Decimal::new(5500, 2)).build().unwrap();
        assert!(crate::emv::crc::verify(&code));
    }

    #[test]
    fn convenience_function_matches_builder() {
        let via_fn = encode_pix_payload(
            "05535232955",
            "Lana Pet Care",
            "Florianopolis",
            Some(Decimal::new(5500, 2)),
            Some("abc123de"),
        )
        .unwrap();
        let via_builder = lana()
            .amount(Decimal::new(5500, 2))
            .reference("abc123de")
            .build()
            .unwrap();
        assert_eq!(via_fn, via_builder);
    }
}
