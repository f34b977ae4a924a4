//! Selection of the preferred language.
//!
//! The selector runs a linear pipeline for every header value:
//!
//! 1. tokenize the header into raw entries;
//! 2. build the languages and discard the invalid ones;
//! 3. restrict them to the accepted languages with the configured strategy;
//! 4. sort them by quality in descending order, keeping the header order for ties;
//! 5. pick the first wildcard (resolved to the default language) or the first
//!    tag whose primary subtag has an acceptable length.
//!
//! If nothing qualifies, the default language is returned.

use crate::{
    Language,
    error::Error,
    header::{HeaderParser, HeaderSource},
    quality::{QualityInput, QualityOptions, QualityValue, Weight},
    strategy::{ExactMatch, MatchStrategy, SubsetMatch},
    tag::LanguageTag,
};
use serde::Serialize;
use toml::Table;

mod config;

pub use config::SelectorConfig;

/// Which branch of the selection produced the resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// A requested language has been selected.
    Matched,
    /// A wildcard has been resolved to the default language.
    Wildcard,
    /// No candidate qualifies and the default language is used.
    Default,
}

/// The result of resolving a header value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    /// The normalized preferred tag.
    pub preferred_tag: String,
    /// The weight of the preferred tag.
    pub quality: Weight,
    /// The header value which has been resolved.
    pub raw_header: String,
    /// Which branch of the selection produced the resolution.
    pub outcome: Outcome,
}

impl Resolution {
    /// Returns `true` if the default language is used.
    #[inline]
    pub fn is_default(&self) -> bool {
        self.outcome != Outcome::Matched
    }
}

/// A language selector with an immutable configuration.
///
/// The accepted languages are normalized once at construction,
/// so a selector can be shared across threads and reused for every request.
#[derive(Debug, Clone)]
pub struct Selector {
    /// Configuration.
    config: SelectorConfig,
    /// Normalized accepted languages.
    accepted: Vec<Language>,
    /// Normalized default language.
    default_tag: LanguageTag,
    /// Matching strategy.
    strategy: Strategy,
}

impl Selector {
    /// Creates a new instance.
    pub fn new(config: SelectorConfig) -> Self {
        let tag_options = config.tag_options();
        let accepted = config
            .accepted_languages()
            .iter()
            .map(|language| {
                Language::new(
                    LanguageTag::new(language, tag_options),
                    QualityValue::default(),
                )
            })
            .collect::<Vec<_>>();
        for language in accepted.iter().filter(|language| !language.is_valid()) {
            tracing::warn!(
                language = language.tag().raw(),
                "the accepted language is not a valid language tag and never matches"
            );
        }

        let default_tag = LanguageTag::new(config.default_language(), tag_options);
        let strategy = if config.exact_match_only() {
            Strategy::Exact
        } else {
            Strategy::Subset
        };
        Self {
            config,
            accepted,
            default_tag,
            strategy,
        }
    }

    /// Creates a new instance from a TOML table.
    #[inline]
    pub fn try_from_table(table: &Table) -> Result<Self, Error> {
        SelectorConfig::try_from_table(table).map(Self::new)
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Returns the normalized accepted languages, including the invalid ones.
    #[inline]
    pub fn accepted_languages(&self) -> &[Language] {
        &self.accepted
    }

    /// Returns the normalized default language.
    #[inline]
    pub fn default_language(&self) -> &str {
        self.default_tag.tag()
    }

    /// Returns the matching strategy.
    #[inline]
    pub fn strategy(&self) -> &dyn MatchStrategy {
        match self.strategy {
            Strategy::Exact => &ExactMatch,
            Strategy::Subset => &SubsetMatch,
        }
    }

    /// Parses the header value into languages, including the invalid ones.
    pub fn languages(&self, header: &str) -> Vec<Language> {
        let tag_options = self.config.tag_options();
        let quality_options = QualityOptions::default();
        HeaderParser::parse(header)
            .into_iter()
            .map(|entry| {
                if entry.is_malformed() {
                    Language::invalid(
                        LanguageTag::new(entry.tag, tag_options),
                        QualityValue::new(QualityInput::Text(""), quality_options),
                    )
                } else {
                    Language::parse(entry.tag, entry.quality, tag_options, quality_options)
                }
            })
            .collect()
    }

    /// Returns the valid and accepted languages sorted by quality in descending order.
    pub fn candidates(&self, header: &str) -> Vec<Language> {
        let languages = self
            .languages(header)
            .into_iter()
            .filter(|language| {
                let valid = language.is_valid();
                if !valid {
                    tracing::debug!(
                        tag = language.tag().raw(),
                        quality = %language.quality(),
                        "discarded an invalid language"
                    );
                }
                valid
            })
            .collect::<Vec<_>>();
        let mut candidates = self.strategy().filter(&languages, &self.accepted);
        candidates.retain(|language| language.is_valid());
        candidates.sort_by(|a, b| b.weight().total_cmp(&a.weight()));
        candidates
    }

    /// Resolves the header value to the preferred language.
    pub fn resolve(&self, header: &str) -> Resolution {
        let two_letter_only = self.config.two_letter_only();
        let ignore_zero_quality = self.config.ignore_zero_quality();
        for language in self.candidates(header) {
            let weight = language.weight();
            if ignore_zero_quality && weight.is_zero() {
                continue;
            }

            let tag = language.tag();
            if tag.is_wildcard() {
                return self.fallback(header, weight, Outcome::Wildcard);
            }

            let len = tag.primary_subtag().len();
            let qualified = if two_letter_only {
                len == 2
            } else {
                (2..=3).contains(&len)
            };
            if qualified {
                let preferred_tag = tag.tag().to_owned();
                tracing::trace!(
                    header,
                    preferred_tag = preferred_tag.as_str(),
                    quality = %weight,
                    "selected the preferred language"
                );
                return Resolution {
                    preferred_tag,
                    quality: weight,
                    raw_header: header.to_owned(),
                    outcome: Outcome::Matched,
                };
            }
        }
        self.fallback(header, Weight::ONE, Outcome::Default)
    }

    /// Resolves the header value provided by the source.
    /// The configured `http-accept-language` takes precedence if it is not empty.
    pub fn resolve_from<S: HeaderSource + ?Sized>(&self, source: &S) -> Resolution {
        match self.config.http_accept_language() {
            Some(header) => self.resolve(header),
            None => {
                let header = source.accept_language().unwrap_or_default();
                self.resolve(&header)
            }
        }
    }

    /// Returns the default language as the resolution.
    fn fallback(&self, header: &str, quality: Weight, outcome: Outcome) -> Resolution {
        let preferred_tag = self.default_tag.tag().to_owned();
        tracing::trace!(
            header,
            preferred_tag = preferred_tag.as_str(),
            "fell back to the default language"
        );
        Resolution {
            preferred_tag,
            quality,
            raw_header: header.to_owned(),
            outcome,
        }
    }
}

impl Default for Selector {
    #[inline]
    fn default() -> Self {
        Self::new(SelectorConfig::default())
    }
}

impl From<SelectorConfig> for Selector {
    #[inline]
    fn from(config: SelectorConfig) -> Self {
        Self::new(config)
    }
}

/// Built-in matching strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Exact,
    Subset,
}
