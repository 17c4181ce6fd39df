//! Configuration for a linkify call.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::classify;

/// Configuration rejected before any text is processed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("truncate_length must be positive when set")]
    TruncateLengthZero,

    #[error("allowed_schemes must not be empty when set")]
    EmptySchemeSet,
}

/// Linkify options.
///
/// The defaults match the zero-configuration behavior: no truncation, no
/// new-context attributes, and the built-in scheme allow-list
/// (http, https, ftp, mailto).
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Maximum displayed link text length in characters. `None` disables
    /// truncation; `Some(0)` is a configuration error.
    pub truncate_length: Option<usize>,
    /// Add `target="_blank" rel="noopener noreferrer"` to every anchor.
    pub new_context: bool,
    /// Scheme names (lowercase) recognized as full-URL prefixes. `None`
    /// means the built-in default set; an empty set is a configuration
    /// error.
    pub allowed_schemes: Option<FxHashSet<String>>,
}

impl Options {
    /// Validate the configuration. Runs once per call, before scanning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.truncate_length == Some(0) {
            return Err(ConfigError::TruncateLengthZero);
        }
        if let Some(schemes) = &self.allowed_schemes {
            if schemes.is_empty() {
                return Err(ConfigError::EmptySchemeSet);
            }
        }
        Ok(())
    }

    /// The effective scheme set: configured or built-in default.
    pub(crate) fn scheme_set(&self) -> FxHashSet<String> {
        match &self.allowed_schemes {
            Some(schemes) => schemes.clone(),
            None => classify::default_schemes(),
        }
    }
}
