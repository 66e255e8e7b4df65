//! Input normalization for payload text fields.
//!
//! The standard mandates plain ASCII in the merchant name and city fields,
//! and `[A-Za-z0-9]` in the transaction reference. Real inputs arrive as
//! "Florianópolis" and "abc-123-def-456", so everything funnels through
//! here before a byte length is ever measured.
//!
//! The folding table is hand-rolled and deliberately small: Latin-1
//! supplement plus the Latin Extended-A characters that actually occur in
//! Portuguese, Spanish, French, and German text. Anything unmappable is
//! dropped rather than passed through — one stray multi-byte character
//! desynchronizes every length prefix after it.

/// Folds one character to its ASCII approximation.
///
/// Returns `None` for characters with no mapping; callers drop those.
/// Printable ASCII is handled by the caller and never reaches this table.
fn fold_char(c: char) -> Option<&'static str> {
    let folded = match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ă' | 'Ą' => "A",
        'é' | 'è' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'É' | 'È' | 'Ê' | 'Ë' | 'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => "E",
        'í' | 'ì' | 'î' | 'ï' | 'ĩ' | 'ī' | 'į' | 'ı' => "i",
        'Í' | 'Ì' | 'Î' | 'Ï' | 'Ĩ' | 'Ī' | 'Į' | 'İ' => "I",
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => "o",
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' | 'Ŏ' | 'Ő' => "O",
        'ú' | 'ù' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => "u",
        'Ú' | 'Ù' | 'Û' | 'Ü' | 'Ũ' | 'Ū' | 'Ŭ' | 'Ů' | 'Ű' | 'Ų' => "U",
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => "c",
        'Ç' | 'Ć' | 'Ĉ' | 'Ċ' | 'Č' => "C",
        'ñ' | 'ń' | 'ņ' | 'ň' => "n",
        'Ñ' | 'Ń' | 'Ņ' | 'Ň' => "N",
        'ý' | 'ÿ' | 'ŷ' => "y",
        'Ý' | 'Ŷ' | 'Ÿ' => "Y",
        'ś' | 'ŝ' | 'ş' | 'š' => "s",
        'Ś' | 'Ŝ' | 'Ş' | 'Š' => "S",
        'ź' | 'ż' | 'ž' => "z",
        'Ź' | 'Ż' | 'Ž' => "Z",
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => "g",
        'Ĝ' | 'Ğ' | 'Ġ' | 'Ģ' => "G",
        'ĺ' | 'ļ' | 'ľ' | 'ł' => "l",
        'Ĺ' | 'Ļ' | 'Ľ' | 'Ł' => "L",
        'ŕ' | 'ř' => "r",
        'Ŕ' | 'Ř' => "R",
        'ţ' | 'ť' => "t",
        'Ţ' | 'Ť' => "T",
        'ď' | 'đ' => "d",
        'Ď' | 'Đ' => "D",
        'ß' => "ss",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        'ª' => "a",
        'º' => "o",
        _ => return None,
    };
    Some(folded)
}

/// Folds a string to printable ASCII (0x20–0x7E).
///
/// Diacritics are transliterated, everything else non-ASCII (emoji,
/// control characters, exotic scripts) is dropped.
///
/// # Example
///
/// ```
/// use pix_brcode::payload::sanitize::fold_ascii;
///
/// assert_eq!(fold_ascii("Florianópolis"), "Florianopolis");
/// assert_eq!(fold_ascii("São Paulo"), "Sao Paulo");
/// assert_eq!(fold_ascii("pets 🐶 & cães"), "pets  & caes");
/// ```
pub fn fold_ascii(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if (' '..='~').contains(&c) {
            out.push(c);
        } else if let Some(folded) = fold_char(c) {
            out.push_str(folded);
        }
        // else: dropped
    }
    out
}

/// Folds to ASCII, trims, and truncates to `cap` bytes.
///
/// Truncation is deterministic and happens after folding, so the cap is
/// measured in the bytes that will actually appear in the payload. The
/// output is ASCII-only, so the byte cut can never split a character.
pub fn sanitize_text(input: &str, cap: usize) -> String {
    let folded = fold_ascii(input);
    let trimmed = folded.trim();
    let cut = trimmed.len().min(cap);
    trimmed[..cut].trim_end().to_string()
}

/// Sanitizes a transaction reference (txid): strips everything outside
/// `[A-Za-z0-9]` and truncates to 25 characters.
///
/// This is what prevents a booking id like `abc-123-def-456` from
/// producing a malformed field 62.
///
/// # Example
///
/// ```
/// use pix_brcode::payload::sanitize::sanitize_reference;
///
/// assert_eq!(sanitize_reference("abc-123-def-456"), "abc123def456");
/// ```
pub fn sanitize_reference(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(crate::config::MAX_REFERENCE_LEN)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
