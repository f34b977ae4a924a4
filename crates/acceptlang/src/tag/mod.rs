//! Language tags as defined in [RFC 5646](https://www.rfc-editor.org/rfc/rfc5646).
//!
//! A tag is normalized once at construction. The subtags are classified
//! by their positions and shapes, not by the IANA subtag registry:
//!
//! | position | shape | kind | casing |
//! |---|---|---|---|
//! | 0 | 1-8 letters | primary | `en` |
//! | 1 | 3 letters | extlang | `yue` |
//! | 1 or 2 | 4 letters | script | `Hant` |
//! | 1, 2 or 3 | 2 letters or 3 digits | region | `HK`, `419` |
//!
//! Variants, extensions, private-use and misplaced subtags are dropped from
//! the normalized tag.

use crate::{LazyLock, helper};
use regex::Regex;
use smallvec::SmallVec;
use std::fmt;

mod subtag;

pub use subtag::SubtagKind;

/// The wildcard tag.
pub const WILDCARD: &str = "*";

/// Options for normalizing a [`LanguageTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagOptions {
    /// The separator used to join the retained subtags.
    /// It is also accepted as an input separator besides `-` and `_`.
    pub separator: char,
    /// Whether the extlang subtag is retained.
    pub with_extlang: bool,
    /// Whether the script subtag is retained.
    pub with_script: bool,
    /// Whether the region subtag is retained.
    pub with_region: bool,
}

impl Default for TagOptions {
    #[inline]
    fn default() -> Self {
        Self {
            separator: '_',
            with_extlang: false,
            with_script: false,
            with_region: true,
        }
    }
}

/// A normalized language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTag {
    /// The raw tag. It is HTML-escaped if the tag is invalid.
    raw: String,
    /// The normalized tag joined with the separator.
    tag: String,
    /// Retained subtags.
    subtags: SmallVec<[String; 4]>,
    /// Extended language subtag.
    extlang: Option<String>,
    /// Script subtag.
    script: Option<String>,
    /// Region subtag.
    region: Option<String>,
    /// Extlang, script or region subtags in the wrong positions.
    unplaced: SmallVec<[String; 2]>,
    /// Validity flag.
    valid: bool,
}

impl LanguageTag {
    /// Creates a new instance from the raw tag.
    pub fn new(raw: &str, options: TagOptions) -> Self {
        let raw = raw.trim();
        let separator = options.separator;
        if raw == WILDCARD {
            return Self {
                raw: raw.to_owned(),
                tag: raw.to_owned(),
                subtags: SmallVec::from_elem(raw.to_owned(), 1),
                extlang: None,
                script: None,
                region: None,
                unplaced: SmallVec::new(),
                valid: true,
            };
        }

        let harmonized = harmonize(raw, separator);
        if !TAG_PATTERN.is_match(&harmonized) {
            let escaped = helper::escape_html(raw);
            let subtags = escaped.split(separator).map(|s| s.to_owned()).collect();
            return Self {
                raw: escaped.clone(),
                tag: escaped,
                subtags,
                extlang: None,
                script: None,
                region: None,
                unplaced: SmallVec::new(),
                valid: false,
            };
        }

        let classified = subtag::classify(harmonized.split('-'));
        let mut subtags = SmallVec::<[String; 4]>::new();
        subtags.push(classified.primary);
        if options.with_extlang {
            subtags.extend(classified.extlang.clone());
        }
        if options.with_script {
            subtags.extend(classified.script.clone());
        }
        if options.with_region {
            subtags.extend(classified.region.clone());
        }

        let mut buf = [0; 4];
        let tag = subtags.join(&*separator.encode_utf8(&mut buf));
        Self {
            raw: raw.to_owned(),
            tag,
            subtags,
            extlang: classified.extlang,
            script: classified.script,
            region: classified.region,
            unplaced: classified.unplaced.into_iter().collect(),
            valid: true,
        }
    }

    /// Creates a new instance with the default options.
    #[inline]
    pub fn parse(raw: &str) -> Self {
        Self::new(raw, TagOptions::default())
    }

    /// Returns the normalized tag.
    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the raw tag as it was received.
    /// An invalid tag is HTML-escaped.
    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the subtags of the normalized tag.
    #[inline]
    pub fn subtags(&self) -> &[String] {
        &self.subtags
    }

    /// Returns the primary subtag.
    #[inline]
    pub fn primary_subtag(&self) -> &str {
        self.subtags.first().map(|s| s.as_str()).unwrap_or_default()
    }

    /// Returns the extended language subtag, whether it is retained or not.
    #[inline]
    pub fn extlang(&self) -> Option<&str> {
        self.extlang.as_deref()
    }

    /// Returns the script subtag, whether it is retained or not.
    #[inline]
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Returns the region subtag, whether it is retained or not.
    #[inline]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Returns the subtags an accepted tag requires of a candidate:
    /// the retained subtags followed by the misplaced extlang, script or region subtags.
    /// Variants, extensions and private-use subtags are not included.
    #[inline]
    pub fn match_subtags(&self) -> impl Iterator<Item = &str> {
        self.subtags
            .iter()
            .chain(self.unplaced.iter())
            .map(|s| s.as_str())
    }

    /// Returns `true` if it is the wildcard tag `*`.
    #[inline]
    pub fn is_wildcard(&self) -> bool {
        self.valid && self.tag == WILDCARD
    }

    /// Returns `true` if the tag is well-formed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl fmt::Display for LanguageTag {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)
    }
}

#[cfg(feature = "unic-langid")]
impl TryFrom<&LanguageTag> for unic_langid::LanguageIdentifier {
    type Error = crate::error::Error;

    fn try_from(tag: &LanguageTag) -> Result<Self, Self::Error> {
        if !tag.is_valid() || tag.is_wildcard() {
            crate::bail!("`{}` is not a language identifier", tag.raw());
        }
        let langid = tag.subtags().join("-");
        langid.parse().map_err(|err| {
            crate::error::Error::with_source(format!("fail to parse `{langid}`"), err)
        })
    }
}

/// Replaces `_` and the custom separator with `-`.
fn harmonize(raw: &str, separator: char) -> String {
    raw.chars()
        .map(|ch| if ch == '_' || ch == separator { '-' } else { ch })
        .collect()
}

/// Pattern for a primary subtag optionally followed by other subtags.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{1,8}(-.*)?$").expect("fail to create the language tag pattern")
});

#[cfg(test)]
mod tests {
    use super::{LanguageTag, TagOptions};

    fn with_all_subtags(separator: char) -> TagOptions {
        TagOptions {
            separator,
            with_extlang: true,
            with_script: true,
            with_region: true,
        }
    }

    #[test]
    fn it_normalizes_case_insensitively() {
        let options = with_all_subtags('-');
        let expected = "mn-Cyrl-MN";
        assert_eq!(LanguageTag::new("MN-cYRL-mn", options).tag(), expected);
        assert_eq!(LanguageTag::new("mn-Cyrl-MN", options).tag(), expected);
        assert_eq!(LanguageTag::new("mn_cyrl_mn", options).tag(), expected);
    }

    #[test]
    fn it_is_idempotent() {
        for options in [TagOptions::default(), with_all_subtags('-'), with_all_subtags('_')] {
            for raw in ["zh-yue-Hant-HK", "EN_us", "es-419", "de-DE-1996", "*"] {
                let once = LanguageTag::new(raw, options);
                let twice = LanguageTag::new(once.tag(), options);
                assert_eq!(once.tag(), twice.tag(), "raw tag `{raw}`");
            }
        }
    }

    #[test]
    fn it_applies_options() {
        let raw = "zh-YUE-hant-hk";
        assert_eq!(LanguageTag::parse(raw).tag(), "zh_HK");
        assert_eq!(LanguageTag::new(raw, with_all_subtags('-')).tag(), "zh-yue-Hant-HK");

        let options = TagOptions {
            separator: '-',
            with_extlang: false,
            with_script: true,
            with_region: false,
        };
        let tag = LanguageTag::new(raw, options);
        assert_eq!(tag.tag(), "zh-Hant");
        assert_eq!(tag.subtags(), ["zh", "Hant"]);
        assert_eq!(tag.extlang(), Some("yue"));
        assert_eq!(tag.region(), Some("HK"));
    }

    #[test]
    fn it_drops_unplaced_subtags() {
        let tag = LanguageTag::new("de-DE-1996", with_all_subtags('-'));
        assert_eq!(tag.tag(), "de-DE");
        assert_eq!(tag.match_subtags().collect::<Vec<_>>(), ["de", "DE"]);

        let tag = LanguageTag::new("en-a-bbb-x-private", with_all_subtags('-'));
        assert_eq!(tag.tag(), "en");
        assert_eq!(tag.match_subtags().collect::<Vec<_>>(), ["en"]);

        let tag = LanguageTag::new("de-AT-gsg", with_all_subtags('-'));
        assert_eq!(tag.tag(), "de-AT");
        assert_eq!(tag.match_subtags().collect::<Vec<_>>(), ["de", "AT", "gsg"]);
    }

    #[test]
    fn it_uses_custom_separator() {
        let options = TagOptions {
            separator: '~',
            ..TagOptions::default()
        };
        let tag = LanguageTag::new("pt~br", options);
        assert_eq!(tag.tag(), "pt~BR");
        assert_eq!(tag.primary_subtag(), "pt");
        assert_eq!(LanguageTag::new("de_DE", TagOptions::default()).tag(), "de_DE");
    }

    #[test]
    fn it_rejects_invalid_tags() {
        for raw in ["", "123", "en1", "toolongtag", "-en", ";q=0.3", "en;level=1"] {
            let tag = LanguageTag::parse(raw);
            assert!(!tag.is_valid(), "raw tag `{raw}`");
        }

        let tag = LanguageTag::parse("<b>");
        assert!(!tag.is_valid());
        assert_eq!(tag.tag(), "&lt;b&gt;");
        assert_eq!(tag.raw(), "&lt;b&gt;");
    }

    #[test]
    fn it_accepts_wildcard() {
        let tag = LanguageTag::parse("*");
        assert!(tag.is_valid());
        assert!(tag.is_wildcard());
        assert_eq!(tag.primary_subtag(), "*");
        assert!(LanguageTag::parse("x").is_valid());
    }

    #[cfg(feature = "unic-langid")]
    #[test]
    fn it_converts_to_language_identifier() {
        use unic_langid::LanguageIdentifier;

        let tag = LanguageTag::new("sr-latn-rs", with_all_subtags('_'));
        let langid = LanguageIdentifier::try_from(&tag).unwrap();
        assert_eq!(langid.to_string(), "sr-Latn-RS");
        assert!(LanguageIdentifier::try_from(&LanguageTag::parse("*")).is_err());
    }
}
