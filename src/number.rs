// src/number.rs — Integer validation and clamping

/// Whether `value` is an integer literal: optional sign followed by digits.
///
/// In strict mode the text must also be the canonical form of the number,
/// so `+7`, `007` and `-0` are rejected while `7`, `-1` and `0` pass.
///
/// ```
/// use khelpers::number::is_integer;
/// assert!(is_integer("-007", false));
/// assert!(!is_integer("-007", true));
/// assert!(!is_integer("7.0", false));
/// ```
pub fn is_integer(value: &str, strict: bool) -> bool {
    let digits = value
        .strip_prefix('-')
        .or_else(|| value.strip_prefix('+'))
        .unwrap_or(value);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if !strict {
        return true;
    }

    let signed = value.len() != digits.len();
    if value.starts_with('+') || (digits.len() > 1 && digits.starts_with('0')) {
        return false;
    }
    !(signed && digits == "0")
}

/// [`is_integer`] plus an inclusive range check.
///
/// Lenient mode also accepts surrounding whitespace. Values too large for
/// `i128` fail any range check but pass when no bound is given.
pub fn check_integer(value: &str, strict: bool, min: Option<i64>, max: Option<i64>) -> bool {
    let candidate = if strict { value } else { value.trim() };
    if !is_integer(candidate, strict) {
        return false;
    }
    if min.is_none() && max.is_none() {
        return true;
    }

    let Ok(n) = candidate.parse::<i128>() else {
        return false;
    };
    min.is_none_or(|m| n >= i128::from(m)) && max.is_none_or(|m| n <= i128::from(m))
}

/// Clamp `value` into the optional `[min, max]` bounds.
///
/// The lower bound is applied first, so with `min > max` the result is `max`.
pub fn limit<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> T {
    let mut value = value;
    if let Some(min) = min {
        if value < min {
            value = min;
        }
    }
    if let Some(max) = max {
        if value > max {
            value = max;
        }
    }
    value
}
