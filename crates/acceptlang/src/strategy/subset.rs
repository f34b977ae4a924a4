use super::MatchStrategy;
use crate::tag::LanguageTag;

/// A strategy which accepts a candidate if it has every subtag of the accepted tag.
///
/// The candidate may carry additional subtags, so `fr-Latn-CH` satisfies `fr-CH`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SubsetMatch;

impl MatchStrategy for SubsetMatch {
    #[inline]
    fn name(&self) -> &'static str {
        "subset"
    }

    fn matches(&self, candidate: &LanguageTag, accepted: &LanguageTag) -> bool {
        accepted
            .match_subtags()
            .all(|subtag| candidate.subtags().iter().any(|s| s == subtag))
    }
}

#[cfg(test)]
mod tests {
    use super::SubsetMatch;
    use crate::{
        strategy::MatchStrategy,
        tag::{LanguageTag, TagOptions},
    };

    #[test]
    fn it_matches_subsets() {
        let options = TagOptions {
            with_script: true,
            ..TagOptions::default()
        };
        let strategy = SubsetMatch;
        let matches = |candidate, accepted| {
            strategy.matches(
                &LanguageTag::new(candidate, options),
                &LanguageTag::new(accepted, options),
            )
        };
        assert!(matches("fr-Latn-CH", "fr-CH"));
        assert!(matches("fr-CH", "fr"));
        assert!(matches("fr-CH", "fr-CH"));
        assert!(!matches("fr", "fr-CH"));
        assert!(!matches("de-CH", "fr"));
    }

    #[test]
    fn it_never_matches_unplaced_subtags_of_accepted_tags() {
        let strategy = SubsetMatch;
        let accepted = LanguageTag::parse("de-AT-gsg");
        assert!(!strategy.matches(&LanguageTag::parse("de-AT"), &accepted));
        assert!(!strategy.matches(&LanguageTag::parse("de-AT-gsg"), &accepted));
    }

    #[test]
    fn it_ignores_private_use_subtags() {
        let strategy = SubsetMatch;
        let accepted = LanguageTag::parse("en-US-x-twain");
        assert!(strategy.matches(&LanguageTag::parse("en-US-x-twain"), &accepted));
        assert!(strategy.matches(&LanguageTag::parse("en-US"), &accepted));
        assert!(!strategy.matches(&LanguageTag::parse("en"), &accepted));
    }
}
