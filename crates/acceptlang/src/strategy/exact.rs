use super::MatchStrategy;
use crate::tag::LanguageTag;

/// A strategy which requires the candidate and the accepted tag to be identical
/// after normalization.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExactMatch;

impl MatchStrategy for ExactMatch {
    #[inline]
    fn name(&self) -> &'static str {
        "exact"
    }

    #[inline]
    fn matches(&self, candidate: &LanguageTag, accepted: &LanguageTag) -> bool {
        candidate
            .subtags()
            .iter()
            .map(|s| s.as_str())
            .eq(accepted.match_subtags())
    }
}
