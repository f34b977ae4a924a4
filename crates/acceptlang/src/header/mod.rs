//! Tokenization of the `Accept-Language` header value.

use crate::{LazyLock, quality::QualityInput, tag::WILDCARD};
use regex::Regex;

mod source;

pub use source::{EnvHeaderSource, HeaderSource};

/// The name of the environment variable which holds the header value in a CGI-like host.
pub const HTTP_ACCEPT_LANGUAGE: &str = "HTTP_ACCEPT_LANGUAGE";

/// A raw entry of the header: the tag string and the quality input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawEntry<'a> {
    /// The raw tag which has not been normalized.
    pub tag: &'a str,
    /// The raw quality.
    pub quality: QualityInput<'a>,
    /// Whether the entry contains more than one quality marker.
    malformed: bool,
}

impl<'a> RawEntry<'a> {
    /// Creates a new instance.
    #[inline]
    pub fn new(tag: &'a str, quality: QualityInput<'a>) -> Self {
        Self {
            tag,
            quality,
            malformed: false,
        }
    }

    /// Creates a malformed entry with an empty tag and an empty quality.
    #[inline]
    fn malformed() -> Self {
        Self {
            tag: "",
            quality: QualityInput::Text(""),
            malformed: true,
        }
    }

    /// Returns `true` if the entry contains more than one quality marker.
    #[inline]
    pub fn is_malformed(&self) -> bool {
        self.malformed
    }
}

/// A tokenizer for the `Accept-Language` header value.
///
/// It never fails: a malformed entry is returned with an empty tag and
/// an empty quality, which makes the language invalid downstream.
#[derive(Debug, Clone, Copy)]
pub struct HeaderParser;

impl HeaderParser {
    /// Parses the header value into raw entries.
    ///
    /// An entry without an explicit quality gets a weight descending with its
    /// position: `1` for the first entry, `0.9` for the second, and so on,
    /// floored at `0`.
    pub fn parse(header: &str) -> Vec<RawEntry<'_>> {
        let header = header.trim();
        if header.is_empty() || header == WILDCARD {
            return Vec::new();
        }
        header
            .split(',')
            .enumerate()
            .map(|(index, entry)| Self::parse_entry(index, entry.trim()))
            .collect()
    }

    /// Parses a single entry at the position `index`.
    fn parse_entry(index: usize, entry: &str) -> RawEntry<'_> {
        let (tag, quality) = match QUALITY_MARKER.find(entry) {
            Some(marker) => {
                let quality = &entry[marker.end()..];
                if QUALITY_MARKER.is_match(quality) {
                    return RawEntry::malformed();
                }
                (&entry[..marker.start()], Some(quality.trim()))
            }
            None => (entry, None),
        };
        let quality = match quality {
            Some(quality) if !quality.is_empty() => QualityInput::Text(quality),
            _ => QualityInput::Float(default_weight(index)),
        };
        RawEntry::new(tag.trim(), quality)
    }
}

/// Returns the default weight for the entry at the position `index`.
#[inline]
fn default_weight(index: usize) -> f64 {
    let steps = 10_usize.saturating_sub(index);
    steps as f64 / 10.0
}

/// Pattern for the quality marker `;q=` with optional whitespace.
static QUALITY_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[ \t]*;[ \t]*q[ \t]*=").expect("fail to create the quality marker pattern")
});
