//! Type-erased errors with a chain of source errors.

use crate::SharedString;
use std::{error, fmt};

/// An error type backed by an allocation-optimized string.
#[derive(Debug)]
pub struct Error {
    /// Error message.
    message: SharedString,
    /// Error source.
    source: Option<Box<Error>>,
}

impl Error {
    /// Creates a new instance with the supplied message.
    #[inline]
    pub fn new(message: impl Into<SharedString>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new instance with the supplied message and the error source.
    #[inline]
    pub fn with_source(message: impl Into<SharedString>, source: impl Into<Error>) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source.into())),
        }
    }

    /// Returns a new instance with the supplied message and `self` as the error source.
    #[inline]
    pub fn wrap(self, message: impl Into<SharedString>) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(self)),
        }
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the source.
    #[inline]
    pub fn source(&self) -> Option<&Error> {
        self.source.as_deref()
    }

    /// Returns an iterator over `self` and its source errors.
    #[inline]
    pub fn sources(&self) -> Sources<'_> {
        Sources { next: Some(self) }
    }

    /// Returns the lowest-level source error.
    #[inline]
    pub fn root_source(&self) -> &Error {
        self.sources().last().unwrap_or(self)
    }
}

impl<E: error::Error + 'static> From<E> for Error {
    #[inline]
    fn from(err: E) -> Self {
        Self {
            message: err.to_string().into(),
            source: err.source().map(|err| Box::new(Self::new(err.to_string()))),
        }
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = &self.message;
        if let Some(source) = &self.source {
            write!(f, "{message}: {source}")
        } else {
            write!(f, "{message}")
        }
    }
}

/// An iterator over an error and its sources created by [`sources()`](Error::sources).
#[derive(Debug, Clone)]
pub struct Sources<'a> {
    /// Next error in the chain.
    next: Option<&'a Error>,
}

impl<'a> Iterator for Sources<'a> {
    type Item = &'a Error;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let error = self.next.take()?;
        self.next = error.source.as_deref();
        Some(error)
    }
}

/// Returns early with an [`Error`].
#[macro_export]
macro_rules! bail {
    ($message:literal $(,)?) => {
        return Err($crate::error::Error::new(format!($message)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::error::Error::from($err))
    };
    ($fmt:expr, $($arg:tt)+) => {
        return Err($crate::error::Error::new(format!($fmt, $($arg)+)))
    };
}

#[cfg(test)]
mod tests {
    use super::Error;

    fn fail(flag: bool) -> Result<(), Error> {
        if flag {
            crate::bail!("flag `{}` is not allowed", flag);
        }
        Ok(())
    }

    #[test]
    fn test_error_chain() {
        let err = Error::new("expected `boolean`").wrap("invalid option");
        assert_eq!(err.to_string(), "invalid option: expected `boolean`");
        assert_eq!(err.sources().count(), 2);
        assert_eq!(err.root_source().message(), "expected `boolean`");
    }

    #[test]
    fn test_bail_with_formatted_message() {
        let err = fail(true).unwrap_err();
        assert_eq!(err.message(), "flag `true` is not allowed");
        assert!(fail(false).is_ok());
    }

    #[test]
    fn test_from_std_error() {
        let err = Error::from("x".parse::<i32>().unwrap_err());
        assert_eq!(err.message(), "invalid digit found in string");
        assert!(err.source().is_none());
    }
}
