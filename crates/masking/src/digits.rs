//! Digit-preserving redaction of a text segment.

/// Count ASCII decimal digits in `text`.
pub fn count_digits(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Replace every digit of `segment` with `mask_char` except the last
/// `unmasked_digits` ones.
///
/// Non-digit characters (separators, brackets, a leading `+`) are copied
/// unchanged wherever they appear. A segment without digits comes back as is.
pub fn mask_segment(segment: &str, mask_char: char, unmasked_digits: usize) -> String {
    let total = count_digits(segment);
    if total == 0 {
        return segment.to_string();
    }

    let cutoff = total - unmasked_digits.min(total);
    let mut seen = 0;
    segment
        .chars()
        .map(|c| {
            if !c.is_ascii_digit() {
                return c;
            }
            seen += 1;
            if seen <= cutoff {
                mask_char
            } else {
                c
            }
        })
        .collect()
}
