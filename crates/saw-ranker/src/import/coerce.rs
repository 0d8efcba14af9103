//! Lenient numeric coercion for spreadsheet-style input.
//!
//! A field contributes whatever numeric prefix it starts with (after leading
//! whitespace); anything else becomes zero. Nothing here ever fails.

/// Extent of the numeric prefix of `value` and whether it carried a fraction
/// or exponent part.
struct NumericPrefix {
    end: usize,
    integral: bool,
}

fn is_leading_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

fn scan_digits(bytes: &[u8], mut at: usize) -> usize {
    while bytes.get(at).is_some_and(u8::is_ascii_digit) {
        at += 1;
    }
    at
}

fn numeric_prefix(value: &str) -> Option<NumericPrefix> {
    let bytes = value.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = scan_digits(bytes, end);
    let mut digits = int_end - end;
    let mut integral = true;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = scan_digits(bytes, end + 1);
        let frac_digits = frac_end - end - 1;
        if digits + frac_digits > 0 {
            digits += frac_digits;
            integral = false;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = scan_digits(bytes, exp_start);
        if exp_end > exp_start {
            integral = false;
            end = exp_end;
        }
    }

    Some(NumericPrefix { end, integral })
}

/// `"12.5km"` → 12.5, `"abc"` → 0, `""` → 0.
pub fn coerce_float(raw: &str) -> f64 {
    let value = raw.trim_start_matches(is_leading_space);
    numeric_prefix(value)
        .and_then(|prefix| value.get(..prefix.end))
        .and_then(|digits| digits.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Integer fields truncate toward zero (`"4.9"` → 4) and saturate at the
/// bounds of `i64`.
pub fn coerce_int(raw: &str) -> i64 {
    let value = raw.trim_start_matches(is_leading_space);
    let Some(prefix) = numeric_prefix(value) else {
        return 0;
    };
    let Some(digits) = value.get(..prefix.end) else {
        return 0;
    };

    if prefix.integral {
        match digits.parse::<i64>() {
            Ok(parsed) => parsed,
            Err(_) if digits.starts_with('-') => i64::MIN,
            Err(_) => i64::MAX,
        }
    } else {
        digits.parse::<f64>().map(|parsed| parsed as i64).unwrap_or(0)
    }
}
