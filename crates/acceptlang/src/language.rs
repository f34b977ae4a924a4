use crate::{
    quality::{QualityInput, QualityOptions, QualityValue, Weight},
    tag::{LanguageTag, TagOptions},
};
use std::fmt;

/// A language preference which pairs a [`LanguageTag`] with a [`QualityValue`].
#[derive(Debug, Clone, PartialEq)]
pub struct Language {
    /// Language tag.
    tag: LanguageTag,
    /// Quality value.
    quality: QualityValue,
    /// Validity flag.
    valid: bool,
}

impl Language {
    /// Creates a new instance. It is valid if and only if
    /// both the tag and the quality are valid.
    #[inline]
    pub fn new(tag: LanguageTag, quality: QualityValue) -> Self {
        let valid = tag.is_valid() && quality.is_valid();
        Self {
            tag,
            quality,
            valid,
        }
    }

    /// Creates an invalid instance regardless of the validity of its parts.
    #[inline]
    pub fn invalid(tag: LanguageTag, quality: QualityValue) -> Self {
        Self {
            tag,
            quality,
            valid: false,
        }
    }

    /// Parses the raw tag and the raw quality.
    #[inline]
    pub fn parse<'a>(
        tag: &str,
        quality: impl Into<QualityInput<'a>>,
        tag_options: TagOptions,
        quality_options: QualityOptions,
    ) -> Self {
        let tag = LanguageTag::new(tag, tag_options);
        let quality = QualityValue::new(quality, quality_options);
        Self::new(tag, quality)
    }

    /// Returns a new instance with the tag of `self` and the quality of `other`.
    #[inline]
    pub(crate) fn with_quality_of(&self, other: &Language) -> Self {
        Self::new(self.tag.clone(), other.quality)
    }

    /// Returns the language tag.
    #[inline]
    pub fn tag(&self) -> &LanguageTag {
        &self.tag
    }

    /// Returns the quality value.
    #[inline]
    pub fn quality(&self) -> &QualityValue {
        &self.quality
    }

    /// Returns the weight of the quality value.
    #[inline]
    pub fn weight(&self) -> Weight {
        self.quality.quality()
    }

    /// Returns `true` if both the tag and the quality are valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl fmt::Display for Language {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};q={}", self.tag, self.quality)
    }
}
