//! Error types for the edges of the crate.
//!
//! The decoder itself cannot fail. Errors only come from reading GPIO,
//! parsing variant names, and loading configuration.

use core::fmt;

/// Failure reading one of the two encoder pins.
///
/// Generic over each pin's own error type so no information is lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinError<A, B> {
    /// Reading pin A failed.
    PinA(A),
    /// Reading pin B failed.
    PinB(B),
}

impl<A: fmt::Debug, B: fmt::Debug> fmt::Display for PinError<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PinA(e) => write!(f, "failed to read encoder pin A: {:?}", e),
            Self::PinB(e) => write!(f, "failed to read encoder pin B: {:?}", e),
        }
    }
}

#[cfg(feature = "std")]
impl<A: fmt::Debug, B: fmt::Debug> std::error::Error for PinError<A, B> {}

/// Unknown encoder variant name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseVariantError;

impl fmt::Display for ParseVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown encoder variant (expected full_step, half_step or tristate)")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseVariantError {}

/// Configuration could not be loaded.
#[cfg(feature = "json")]
#[derive(Debug)]
pub enum ConfigError {
    /// The document is not valid JSON for [`Config`](crate::Config).
    Json(serde_json::Error),
}

#[cfg(feature = "json")]
impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "invalid config: {}", e),
        }
    }
}

#[cfg(feature = "json")]
impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
        }
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
