//! Luhn checksum.

/// Luhn sum of an ASCII digit string.
///
/// Starting from the rightmost digit, every second digit is doubled and
/// reduced by 9 when the result exceeds 9. Returns `None` if `digits`
/// contains anything other than ASCII digits.
pub fn luhn_sum(digits: &str) -> Option<u32> {
    digits
        .bytes()
        .rev()
        .enumerate()
        .try_fold(0u32, |sum, (i, b)| {
            let mut digit = u32::from(b).checked_sub(u32::from(b'0')).filter(|d| *d <= 9)?;
            if i % 2 == 1 {
                digit *= 2;
                if digit > 9 {
                    digit -= 9;
                }
            }
            Some(sum + digit)
        })
}

/// Whether `digits` passes the Luhn check.
pub fn is_luhn_valid(digits: &str) -> bool {
    !digits.is_empty() && luhn_sum(digits).is_some_and(|sum| sum % 10 == 0)
}
