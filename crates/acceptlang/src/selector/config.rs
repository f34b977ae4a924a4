use crate::{
    bail,
    error::Error,
    extension::{TomlTableExt, TomlValueExt},
    tag::TagOptions,
};
use toml::Table;

/// Configuration of a [`Selector`](super::Selector).
///
/// Every option has a default value, so an empty table is a valid configuration:
///
/// ```toml
/// [accept-language]
/// default-language = "en"
/// accepted-languages = []
/// exact-match-only = false
/// two-letter-only = true
/// use-extlang-subtag = false
/// use-script-subtag = false
/// use-region-subtag = true
/// separator = "_"
/// http-accept-language = ""
/// ignore-zero-quality = false
/// ```
///
/// Option names may also be written in snake case, e.g. `default_language`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Fallback tag when no candidate qualifies.
    default_language: String,
    /// Languages supported by the application.
    accepted_languages: Vec<String>,
    /// Whether the exact strategy is used instead of the subset strategy.
    exact_match_only: bool,
    /// Whether the primary subtag must have exactly two letters.
    two_letter_only: bool,
    /// Whether the extlang subtag is retained.
    use_extlang_subtag: bool,
    /// Whether the script subtag is retained.
    use_script_subtag: bool,
    /// Whether the region subtag is retained.
    use_region_subtag: bool,
    /// Output subtag separator.
    separator: char,
    /// Header value which overrides the header source.
    http_accept_language: String,
    /// Whether the languages with a zero weight are skipped.
    ignore_zero_quality: bool,
}

impl SelectorConfig {
    /// Creates a new instance with the default options.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML document. The `[accept-language]` table is used if it exists,
    /// otherwise the root table.
    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        let table = s
            .parse::<Table>()
            .map_err(|err| Error::with_source("fail to parse the TOML configuration", err))?;
        if let Some(options) = table.get_table("accept-language") {
            return Self::try_from_table(options);
        }
        Self::try_from_table(&without_host_tables(table))
    }

    /// Creates a new instance from a TOML table.
    ///
    /// The primitive type of every recognized option is checked here, before any
    /// header is processed. Unknown options are ignored with a warning.
    pub fn try_from_table(table: &Table) -> Result<Self, Error> {
        let mut config = Self::default();
        for (key, value) in table {
            match key.replace('_', "-").as_str() {
                "default-language" => {
                    config.default_language = value.try_to_str(key)?.to_owned();
                }
                "accepted-languages" => {
                    config.accepted_languages = value
                        .try_to_str_array(key)?
                        .into_iter()
                        .map(|s| s.to_owned())
                        .collect();
                }
                "exact-match-only" => config.exact_match_only = value.try_to_bool(key)?,
                "two-letter-only" => config.two_letter_only = value.try_to_bool(key)?,
                "use-extlang-subtag" => config.use_extlang_subtag = value.try_to_bool(key)?,
                "use-script-subtag" => config.use_script_subtag = value.try_to_bool(key)?,
                "use-region-subtag" => config.use_region_subtag = value.try_to_bool(key)?,
                "separator" => config.separator = parse_separator(value.try_to_str(key)?)?,
                "http-accept-language" => {
                    config.http_accept_language = value.try_to_str(key)?.to_owned();
                }
                "ignore-zero-quality" => config.ignore_zero_quality = value.try_to_bool(key)?,
                _ => tracing::warn!(option = key.as_str(), "ignored an unknown option"),
            }
        }
        Ok(config)
    }

    /// Sets the fallback tag.
    #[inline]
    pub fn set_default_language(&mut self, language: impl Into<String>) -> &mut Self {
        self.default_language = language.into();
        self
    }

    /// Sets the languages supported by the application.
    #[inline]
    pub fn set_accepted_languages<T: Into<String>>(
        &mut self,
        languages: impl IntoIterator<Item = T>,
    ) -> &mut Self {
        self.accepted_languages = languages.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Sets whether the exact strategy is used instead of the subset strategy.
    #[inline]
    pub fn set_exact_match_only(&mut self, exact: bool) -> &mut Self {
        self.exact_match_only = exact;
        self
    }

    /// Sets whether the primary subtag must have exactly two letters.
    #[inline]
    pub fn set_two_letter_only(&mut self, two_letter_only: bool) -> &mut Self {
        self.two_letter_only = two_letter_only;
        self
    }

    /// Sets whether the extlang subtag is retained.
    #[inline]
    pub fn set_use_extlang_subtag(&mut self, enabled: bool) -> &mut Self {
        self.use_extlang_subtag = enabled;
        self
    }

    /// Sets whether the script subtag is retained.
    #[inline]
    pub fn set_use_script_subtag(&mut self, enabled: bool) -> &mut Self {
        self.use_script_subtag = enabled;
        self
    }

    /// Sets whether the region subtag is retained.
    #[inline]
    pub fn set_use_region_subtag(&mut self, enabled: bool) -> &mut Self {
        self.use_region_subtag = enabled;
        self
    }

    /// Sets the output subtag separator.
    #[inline]
    pub fn set_separator(&mut self, separator: char) -> &mut Self {
        self.separator = separator;
        self
    }

    /// Sets the header value which overrides the header source.
    #[inline]
    pub fn set_http_accept_language(&mut self, header: impl Into<String>) -> &mut Self {
        self.http_accept_language = header.into();
        self
    }

    /// Sets whether the languages with a zero weight are skipped.
    #[inline]
    pub fn set_ignore_zero_quality(&mut self, enabled: bool) -> &mut Self {
        self.ignore_zero_quality = enabled;
        self
    }

    /// Returns the fallback tag.
    #[inline]
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Returns the languages supported by the application.
    #[inline]
    pub fn accepted_languages(&self) -> &[String] {
        &self.accepted_languages
    }

    /// Returns `true` if the exact strategy is used.
    #[inline]
    pub fn exact_match_only(&self) -> bool {
        self.exact_match_only
    }

    /// Returns `true` if the primary subtag must have exactly two letters.
    #[inline]
    pub fn two_letter_only(&self) -> bool {
        self.two_letter_only
    }

    /// Returns the header value which overrides the header source.
    #[inline]
    pub fn http_accept_language(&self) -> Option<&str> {
        let header = self.http_accept_language.trim();
        (!header.is_empty()).then_some(header)
    }

    /// Returns `true` if the languages with a zero weight are skipped.
    #[inline]
    pub fn ignore_zero_quality(&self) -> bool {
        self.ignore_zero_quality
    }

    /// Returns the options for normalizing tags.
    #[inline]
    pub fn tag_options(&self) -> TagOptions {
        TagOptions {
            separator: self.separator,
            with_extlang: self.use_extlang_subtag,
            with_script: self.use_script_subtag,
            with_region: self.use_region_subtag,
        }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_owned(),
            accepted_languages: Vec::new(),
            exact_match_only: false,
            two_letter_only: true,
            use_extlang_subtag: false,
            use_script_subtag: false,
            use_region_subtag: true,
            separator: '_',
            http_accept_language: String::new(),
            ignore_zero_quality: false,
        }
    }
}

impl TryFrom<&Table> for SelectorConfig {
    type Error = Error;

    #[inline]
    fn try_from(table: &Table) -> Result<Self, Self::Error> {
        Self::try_from_table(table)
    }
}

/// Parses the separator which must be a single non-alphanumeric character.
fn parse_separator(s: &str) -> Result<char, Error> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if !ch.is_alphanumeric() && !ch.is_whitespace() => Ok(ch),
        _ => bail!(
            "invalid value for the option `separator`: \
                expected a single non-alphanumeric character, found `{}`",
            s
        ),
    }
}

/// Tables of the host configuration which may share the root with the selector options.
const HOST_TABLES: [&str; 1] = ["tracing"];

/// Removes the host tables so that they are not reported as unknown options.
fn without_host_tables(mut table: Table) -> Table {
    for key in HOST_TABLES {
        if table.get(key).is_some_and(|value| value.is_table()) {
            table.remove(key);
        }
    }
    table
}
