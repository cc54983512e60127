/// Parses the longest leading decimal number of `text`, ignoring anything
/// after it, and yields `NaN` when no number prefix exists.
///
/// Mirrors JavaScript's `parseFloat`: leading whitespace is skipped, an
/// optional sign, digits, an optional fraction and an optional exponent are
/// accepted, as is `Infinity`. `"51.92893abc"` therefore parses to
/// `51.92893`. Customer files rely on this leniency, so `str::parse` must not
/// be used in its place.
pub fn parse_float_prefix(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    if text[pos..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &text[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &text[frac_start..end];
        pos = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return f64::NAN;
    }

    // The exponent only counts when at least one digit follows the marker.
    let mut exponent = "";
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut end = pos + 1;
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            exponent = &text[pos + 1..end];
        }
    }

    let normalized = format!(
        "{}{}.{}e{}",
        if negative { "-" } else { "" },
        if int_digits.is_empty() { "0" } else { int_digits },
        if frac_digits.is_empty() { "0" } else { frac_digits },
        if exponent.is_empty() { "0" } else { exponent },
    );
    normalized.parse().unwrap_or(f64::NAN)
}
