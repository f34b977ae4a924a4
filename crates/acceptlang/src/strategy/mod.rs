//! Strategies to reconcile the requested languages with the accepted languages.
//!
//! A matched language carries the tag of the accepted entry and the quality of
//! the requested one: the spelling configured by the application wins, and the
//! preference strength observed from the client is retained.

use crate::{Language, tag::LanguageTag};

mod exact;
mod subset;

pub use exact::ExactMatch;
pub use subset::SubsetMatch;

/// A strategy for matching the requested languages against the accepted languages.
pub trait MatchStrategy {
    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns `true` if the candidate tag satisfies the accepted tag.
    fn matches(&self, candidate: &LanguageTag, accepted: &LanguageTag) -> bool;

    /// Filters the candidates by the accepted languages.
    ///
    /// Every matching pair is emitted in the order of the candidates.
    /// If `accepted` is empty, the candidates are returned unchanged.
    fn filter(&self, candidates: &[Language], accepted: &[Language]) -> Vec<Language> {
        if accepted.is_empty() {
            return candidates.to_vec();
        }

        let mut languages = Vec::new();
        for candidate in candidates {
            for language in accepted {
                if self.matches(candidate.tag(), language.tag()) {
                    tracing::trace!(
                        strategy = self.name(),
                        candidate = candidate.tag().tag(),
                        accepted = language.tag().tag(),
                        "matched the requested language",
                    );
                    languages.push(language.with_quality_of(candidate));
                }
            }
        }
        languages
    }
}

#[cfg(test)]
mod tests {
    use super::{ExactMatch, MatchStrategy, SubsetMatch};
    use crate::{
        Language,
        quality::{QualityOptions, Weight},
        tag::TagOptions,
    };

    fn languages(entries: &[(&str, &str)]) -> Vec<Language> {
        entries
            .iter()
            .map(|&(tag, quality)| {
                Language::parse(tag, quality, TagOptions::default(), QualityOptions::default())
            })
            .collect()
    }

    #[test]
    fn it_passes_through_without_accepted_languages() {
        let candidates = languages(&[("en", "1"), ("de", "0.5")]);
        assert_eq!(SubsetMatch.filter(&candidates, &[]), candidates);
        assert_eq!(ExactMatch.filter(&candidates, &[]), candidates);
    }

    #[test]
    fn it_emits_all_matching_pairs() {
        let candidates = languages(&[("fr-CH", "0.9"), ("fr", "1"), ("de", "0.8")]);
        let accepted = languages(&[("fr", "1"), ("en", "1")]);
        let matched = SubsetMatch.filter(&candidates, &accepted);
        let pairs = matched
            .iter()
            .map(|language| (language.tag().tag(), language.weight()))
            .collect::<Vec<_>>();
        assert_eq!(pairs, [("fr", Weight::Float(0.9)), ("fr", Weight::ONE)]);

        let matched = ExactMatch.filter(&candidates, &accepted);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].weight(), Weight::ONE);
    }

    #[test]
    fn it_returns_nothing_when_nothing_matches() {
        let candidates = languages(&[("ja", "1")]);
        let accepted = languages(&[("en", "1")]);
        assert!(SubsetMatch.filter(&candidates, &accepted).is_empty());
        assert!(ExactMatch.filter(&candidates, &accepted).is_empty());
    }
}
