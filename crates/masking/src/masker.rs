//! Main masking implementation.

use crate::digits::{count_digits, mask_segment};
use crate::grammar::{LibPhoneGrammar, PhoneGrammar};
use crate::international::find_international;
use crate::local::mask_local_counting;
use crate::options::MaskingOptions;
use tracing::{debug, trace, warn};

/// Result of masking.
#[derive(Debug)]
pub struct MaskingResult {
    /// The masked content.
    pub content: String,
    /// Statistics about what was masked.
    pub stats: MaskingStats,
}

/// Statistics about the masking performed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MaskingStats {
    /// International numbers masked.
    pub international_masked: usize,
    /// International numbers left alone because of the country filter.
    pub international_skipped: usize,
    /// Local-format numbers masked.
    pub local_masked: usize,
    /// Total digits replaced by the mask character.
    pub digits_masked: usize,
    /// Names of local patterns that matched.
    pub matched_patterns: Vec<String>,
}

impl MaskingStats {
    /// Total number of masked numbers.
    pub fn total(&self) -> usize {
        self.international_masked + self.local_masked
    }

    /// Merge with another stats.
    pub fn merge(&mut self, other: &MaskingStats) {
        self.international_masked += other.international_masked;
        self.international_skipped += other.international_skipped;
        self.local_masked += other.local_masked;
        self.digits_masked += other.digits_masked;
        for name in &other.matched_patterns {
            if !self.matched_patterns.contains(name) {
                self.matched_patterns.push(name.clone());
            }
        }
    }
}

/// Masks phone numbers in text with a fixed grammar and options.
#[derive(Debug, Clone)]
pub struct PhoneMasker<G = LibPhoneGrammar> {
    grammar: G,
    options: MaskingOptions,
}

impl PhoneMasker {
    /// Create a masker with the default grammar and options.
    ///
    /// The default grammar only reports numbers that are valid for their
    /// region; see [`LibPhoneGrammar::lenient`] for the permissive form.
    pub fn new() -> Self {
        Self::with_options(MaskingOptions::default())
    }

    /// Create a masker with the default grammar and custom options.
    pub fn with_options(options: MaskingOptions) -> Self {
        Self::with_grammar(LibPhoneGrammar::new(), options)
    }
}

impl Default for PhoneMasker {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: PhoneGrammar> PhoneMasker<G> {
    /// Create a masker over a custom grammar.
    pub fn with_grammar(grammar: G, options: MaskingOptions) -> Self {
        Self { grammar, options }
    }

    pub fn options(&self) -> &MaskingOptions {
        &self.options
    }

    /// Mask phone numbers in `text`.
    pub fn mask(&self, text: &str) -> String {
        self.mask_with_stats(text).content
    }

    /// Mask phone numbers in `text` and report what was masked.
    pub fn mask_with_stats(&self, text: &str) -> MaskingResult {
        let mut stats = MaskingStats::default();
        let content = mask_text(&self.grammar, text, &self.options, &mut stats);
        MaskingResult { content, stats }
    }
}

/// Mask phone numbers in `text` using the default grammar.
///
/// ```
/// use orbit_masking::{mask_phone_numbers, MaskingOptions};
///
/// let masked = mask_phone_numbers("Call me at +1 415-555-0123", &MaskingOptions::default());
/// assert_eq!(masked, "Call me at +* ***-***-**23");
/// ```
pub fn mask_phone_numbers(text: &str, options: &MaskingOptions) -> String {
    let mut stats = MaskingStats::default();
    mask_text(&LibPhoneGrammar::new(), text, options, &mut stats)
}

fn mask_text<G: PhoneGrammar + ?Sized>(
    grammar: &G,
    text: &str,
    options: &MaskingOptions,
    stats: &mut MaskingStats,
) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mask_char = options.mask_char;
    let unmasked = options.unmasked_digits;
    let candidates = find_international(grammar, text, options.default_country);

    // International spans are written once and never rescanned; only the
    // text between them goes through the local pass.
    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;

    for candidate in candidates {
        let span = candidate.span;
        if span.start < cursor {
            warn!(
                start = span.start,
                cursor, "Grammar reported an overlapping span, ignoring it"
            );
            continue;
        }
        let Some(segment) = span.slice(text) else {
            warn!(
                start = span.start,
                end = span.end,
                "Grammar reported a span outside the text, ignoring it"
            );
            continue;
        };

        result.push_str(&mask_local_counting(
            &text[cursor..span.start],
            mask_char,
            unmasked,
            stats,
        ));

        if options.allows(candidate.country) {
            let digits = count_digits(segment);
            stats.international_masked += 1;
            stats.digits_masked += digits - unmasked.min(digits);
            trace!(len = segment.len(), country = ?candidate.country, "Masked international number");
            result.push_str(&mask_segment(segment, mask_char, unmasked));
        } else {
            stats.international_skipped += 1;
            trace!(len = segment.len(), country = ?candidate.country, "Country not allowed, left unmasked");
            result.push_str(segment);
        }

        cursor = span.end;
    }

    result.push_str(&mask_local_counting(
        &text[cursor..],
        mask_char,
        unmasked,
        stats,
    ));

    debug!(
        international = stats.international_masked,
        skipped = stats.international_skipped,
        local = stats.local_masked,
        digits = stats.digits_masked,
        "Masked phone numbers"
    );

    result
}
