/// Kind of a subtag which is retained by the normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtagKind {
    /// The primary language subtag, e.g. `zh`.
    Primary,
    /// The extended language subtag, e.g. `yue`.
    Extlang,
    /// The script subtag, e.g. `Hant`.
    Script,
    /// The region subtag, e.g. `HK` or `419`.
    Region,
}

impl SubtagKind {
    /// Normalizes the casing of the subtag according to its kind.
    pub(crate) fn normalize(self, subtag: &str) -> String {
        match self {
            Self::Primary | Self::Extlang => subtag.to_ascii_lowercase(),
            Self::Script => crate::helper::title_case(subtag),
            Self::Region => subtag.to_ascii_uppercase(),
        }
    }
}

/// States of the positional subtag classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    Primary,
    ExpectExtlangOrScriptOrRegion,
    ExpectScriptOrRegion,
    ExpectRegion,
    Done,
}

impl State {
    /// Consumes a subtag and returns the next state with the subtag kind.
    /// The kind is `None` if the subtag does not fit in the current position.
    pub(crate) fn advance(self, subtag: &str) -> (Self, Option<SubtagKind>) {
        use SubtagKind::*;

        match self {
            Self::Primary => (Self::ExpectExtlangOrScriptOrRegion, Some(Primary)),
            Self::ExpectExtlangOrScriptOrRegion => {
                if is_alpha(subtag, 3) {
                    (Self::ExpectScriptOrRegion, Some(Extlang))
                } else if is_alpha(subtag, 4) {
                    (Self::ExpectRegion, Some(Script))
                } else if is_region(subtag) {
                    (Self::Done, Some(Region))
                } else {
                    (Self::Done, None)
                }
            }
            Self::ExpectScriptOrRegion => {
                if is_alpha(subtag, 4) {
                    (Self::ExpectRegion, Some(Script))
                } else if is_region(subtag) {
                    (Self::Done, Some(Region))
                } else {
                    (Self::Done, None)
                }
            }
            Self::ExpectRegion => {
                if is_region(subtag) {
                    (Self::Done, Some(Region))
                } else {
                    (Self::Done, None)
                }
            }
            Self::Done => (Self::Done, None),
        }
    }
}

/// Classified subtags of a valid language tag.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Classified {
    pub(crate) primary: String,
    pub(crate) extlang: Option<String>,
    pub(crate) script: Option<String>,
    pub(crate) region: Option<String>,
    /// Extlang, script or region subtags in the wrong positions, e.g. `gsg` in `de-AT-gsg`.
    pub(crate) unplaced: Vec<String>,
}

/// Classifies the hyphen-separated subtags by their positions and shapes.
pub(crate) fn classify<'a>(subtags: impl IntoIterator<Item = &'a str>) -> Classified {
    let mut classified = Classified::default();
    let mut state = State::Primary;
    for subtag in subtags {
        // Extensions and private-use subtags start with a singleton.
        if state != State::Primary && subtag.len() == 1 {
            break;
        }

        let (next_state, kind) = state.advance(subtag);
        state = next_state;
        match kind {
            Some(kind) => {
                let subtag = kind.normalize(subtag);
                match kind {
                    SubtagKind::Primary => classified.primary = subtag,
                    SubtagKind::Extlang => classified.extlang = Some(subtag),
                    SubtagKind::Script => classified.script = Some(subtag),
                    SubtagKind::Region => classified.region = Some(subtag),
                }
            }
            None if is_misplaced(subtag) => classified.unplaced.push(subtag.to_ascii_lowercase()),
            None => {}
        }
    }
    classified
}

/// Returns `true` if the subtag consists of `len` ASCII letters.
#[inline]
fn is_alpha(subtag: &str, len: usize) -> bool {
    subtag.len() == len && subtag.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Returns `true` if the subtag has the shape of an extlang, a script or a region.
/// Variants have other shapes.
#[inline]
fn is_misplaced(subtag: &str) -> bool {
    is_alpha(subtag, 3) || is_alpha(subtag, 4) || is_region(subtag)
}

/// Returns `true` if the subtag is a region subtag: 2 letters or 3 digits.
#[inline]
fn is_region(subtag: &str) -> bool {
    is_alpha(subtag, 2) || (subtag.len() == 3 && subtag.bytes().all(|b| b.is_ascii_digit()))
}
