use super::HTTP_ACCEPT_LANGUAGE;
use crate::SharedString;
use std::env;

/// A provider of the `Accept-Language` header value.
///
/// It is implemented for string types, for closures returning `Option<String>`,
/// and for [`EnvHeaderSource`].
pub trait HeaderSource {
    /// Returns the header value if there is one.
    fn accept_language(&self) -> Option<String>;
}

impl HeaderSource for str {
    #[inline]
    fn accept_language(&self) -> Option<String> {
        Some(self.to_owned())
    }
}

impl HeaderSource for String {
    #[inline]
    fn accept_language(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl<F> HeaderSource for F
where
    F: Fn() -> Option<String>,
{
    #[inline]
    fn accept_language(&self) -> Option<String> {
        self()
    }
}

/// A header source which reads an environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvHeaderSource {
    /// The variable name.
    name: SharedString,
}

impl EnvHeaderSource {
    /// Creates a new instance which reads the variable `name`.
    #[inline]
    pub fn new(name: impl Into<SharedString>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the variable name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }
}

impl Default for EnvHeaderSource {
    #[inline]
    fn default() -> Self {
        Self::new(HTTP_ACCEPT_LANGUAGE)
    }
}

impl HeaderSource for EnvHeaderSource {
    fn accept_language(&self) -> Option<String> {
        let name = self.name();
        match env::var(name) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::debug!(name, "fail to read the header from the environment: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EnvHeaderSource, HeaderSource};

    #[test]
    fn it_provides_header_values() {
        assert_eq!("da, en-GB;q=0.8".accept_language().as_deref(), Some("da, en-GB;q=0.8"));
        assert_eq!(String::from("fr").accept_language().as_deref(), Some("fr"));

        let source = || Some("de".to_owned());
        assert_eq!(source.accept_language().as_deref(), Some("de"));
    }

    #[test]
    fn it_reads_missing_environment_variables() {
        let source = EnvHeaderSource::new("ACCEPTLANG_TEST_UNSET_VARIABLE");
        assert_eq!(source.accept_language(), None);
        assert_eq!(EnvHeaderSource::default().name(), "HTTP_ACCEPT_LANGUAGE");
    }
}
