//! Digit normalization for mixed Arabic/English input.

/// Replace Eastern Arabic digits (`٠`..`٩`) with ASCII `0`..`9`.
///
/// All other characters pass through unchanged.
pub fn normalize_digits(text: &str) -> String {
    text.chars().map(to_ascii_digit).collect()
}

fn to_ascii_digit(c: char) -> char {
    match c {
        '\u{0660}'..='\u{0669}' => {
            // Contiguous block, so the offset is the digit value.
            let value = c as u32 - 0x0660;
            char::from_digit(value, 10).unwrap_or(c)
        }
        _ => c,
    }
}

/// The first maximal run of ASCII digits, as a number.
///
/// Returns `None` when there is no run, or when the run does not fit in a
/// `u64`. Later runs are not consulted in that case.
pub fn first_integer(text: &str) -> Option<u64> {
    first_digit_run(text)?.parse().ok()
}

/// The first maximal run of ASCII digits, as text.
pub(crate) fn first_digit_run(text: &str) -> Option<&str> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..len])
}

/// True when `text` holds exactly one digit run and nothing else but
/// whitespace and punctuation.
pub fn is_bare_number(text: &str) -> bool {
    let mut runs = 0;
    let mut in_run = false;
    for c in text.chars() {
        if c.is_ascii_digit() {
            if !in_run {
                runs += 1;
                in_run = true;
            }
        } else if c.is_alphanumeric() {
            return false;
        } else {
            in_run = false;
        }
    }
    runs == 1
}
