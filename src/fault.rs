//! The generic fault type carried by [`AsyncCatching`](crate::AsyncCatching).
//!
//! A [`Fault`] is what a computation "raised": either a panic captured while
//! running it, or an ordinary error value it returned.

use std::any::Any;

use thiserror::Error;

/// A fault captured from a computation.
///
/// # Examples
///
/// ```rust
/// use asynceither::Fault;
///
/// let fault = Fault::new(std::fmt::Error);
/// assert!(!fault.is_panic());
/// assert_eq!(fault.to_string(), "an error occurred when formatting an argument");
/// ```
#[derive(Debug, Error)]
pub enum Fault {
    /// A panic captured while polling a computation.
    #[error("panicked: {0}")]
    Panic(String),
    /// An error returned by a computation.
    #[error(transparent)]
    Error(#[from] Box<dyn std::error::Error + Send + Sync>),
    /// An unchecked unwrap was attempted on a `Left` that did not hold a fault.
    #[error("no value present: {0}")]
    MissingValue(String),
}

impl Fault {
    pub fn new(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Fault::Error(Box::new(error))
    }

    /// Builds a fault from a panic payload.
    ///
    /// A payload that already is a `Fault` is returned as-is, so re-raising a
    /// fault and catching it again yields the original value.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Fault>() {
            Ok(fault) => return *fault,
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<&'static str>() {
            Ok(message) => return Fault::Panic((*message).to_string()),
            Err(payload) => payload,
        };
        match payload.downcast::<String>() {
            Ok(message) => Fault::Panic(*message),
            Err(_) => Fault::Panic("opaque panic payload".to_string()),
        }
    }

    #[inline]
    pub const fn is_panic(&self) -> bool {
        matches!(self, Fault::Panic(_))
    }

    /// Returns the wrapped error if this fault came from an `Err` value.
    pub fn as_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Fault::Error(error) => Some(error.as_ref()),
            _ => None,
        }
    }
}

impl From<String> for Fault {
    fn from(message: String) -> Self {
        Fault::Error(message.into())
    }
}

impl From<&str> for Fault {
    fn from(message: &str) -> Self {
        Fault::Error(message.into())
    }
}

impl From<std::io::Error> for Fault {
    fn from(error: std::io::Error) -> Self {
        Fault::new(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_panic_str() {
        let fault = Fault::from_panic(Box::new("boom"));
        assert!(matches!(fault, Fault::Panic(ref m) if m == "boom"));
        assert_eq!(fault.to_string(), "panicked: boom");
    }

    #[test]
    fn test_from_panic_string() {
        let fault = Fault::from_panic(Box::new(String::from("formatted 7")));
        assert!(matches!(fault, Fault::Panic(ref m) if m == "formatted 7"));
    }

    #[test]
    fn test_from_panic_keeps_fault_payload() {
        let fault = Fault::from_panic(Box::new(Fault::MissingValue("x".into())));
        assert!(matches!(fault, Fault::MissingValue(ref m) if m == "x"));
    }

    #[test]
    fn test_from_panic_opaque() {
        let fault = Fault::from_panic(Box::new(17_u8));
        assert!(fault.is_panic());
        assert_eq!(fault.to_string(), "panicked: opaque panic payload");
    }

    #[test]
    fn test_error_is_transparent() {
        let fault: Fault = "bad input".into();
        assert_eq!(fault.to_string(), "bad input");
        assert!(fault.as_error().is_some());
        assert!(!fault.is_panic());
    }

    #[test]
    fn test_io_error() {
        let fault = Fault::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(fault.to_string(), "gone");
    }
}
