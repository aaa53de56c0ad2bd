//! Internationally formatted numbers, located through a [`PhoneGrammar`].

use crate::grammar::PhoneGrammar;
use crate::span::PhoneCandidate;
use orbit_common::CountryCode;

/// Find numbers the grammar can attribute, ordered by span start.
pub fn find_international<G: PhoneGrammar + ?Sized>(
    grammar: &G,
    text: &str,
    default_country: Option<CountryCode>,
) -> Vec<PhoneCandidate> {
    let mut candidates: Vec<PhoneCandidate> = grammar
        .find_numbers(text, default_country)
        .into_iter()
        .map(|m| PhoneCandidate {
            span: m.span,
            country: m.country,
        })
        .collect();

    candidates.sort_by_key(|c| c.span.start);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::GrammarMatch;
    use crate::span::TextSpan;

    struct Reversed;

    impl PhoneGrammar for Reversed {
        fn find_numbers(&self, _text: &str, default_country: Option<CountryCode>) -> Vec<GrammarMatch> {
            vec![
                GrammarMatch {
                    span: TextSpan::new(20, 30).unwrap(),
                    country: default_country,
                },
                GrammarMatch {
                    span: TextSpan::new(2, 12).unwrap(),
                    country: None,
                },
            ]
        }
    }

    #[test]
    fn test_candidates_sorted_by_start() {
        let us: CountryCode = "US".parse().unwrap();
        let found = find_international(&Reversed, "", Some(us));
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].span.start, 2);
        assert_eq!(found[0].country, None);
        assert_eq!(found[1].span.start, 20);
        assert_eq!(found[1].country, Some(us));
    }

    #[test]
    fn test_default_grammar_passes_default_country() {
        let grammar = crate::grammar::LibPhoneGrammar::new();
        let us: CountryCode = "US".parse().unwrap();
        let text = "office: (415) 555-0123";
        let found = find_international(&grammar, text, Some(us));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].span.slice(text), Some("(415) 555-0123"));
    }
}
