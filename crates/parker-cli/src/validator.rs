//! Input format checks for command arguments.

/// True if `input` is one or more ASCII digits.
#[must_use]
pub fn is_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// True if `input` looks like `KA-01-HH-1234`: two letters, two digits,
/// one or two letters, three or four digits, joined by dashes. Letters must
/// be uppercase ASCII.
#[must_use]
pub fn is_registration_number(input: &str) -> bool {
    let parts: Vec<&str> = input.split('-').collect();
    let [state, district, series, number] = parts.as_slice() else {
        return false;
    };
    is_upper(state, 2..=2)
        && is_numeric(district, 2..=2)
        && is_upper(series, 1..=2)
        && is_numeric(number, 3..=4)
}

fn is_upper(part: &str, len: std::ops::RangeInclusive<usize>) -> bool {
    len.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_uppercase())
}

fn is_numeric(part: &str, len: std::ops::RangeInclusive<usize>) -> bool {
    len.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
}
