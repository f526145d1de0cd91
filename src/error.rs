//! Error types for settings resolution.
//!
//! Resolution outcomes are memoized, so every variant carries owned string
//! payloads and the enum is `Clone`: the first error produced for a setting
//! is also the error returned by every later resolution of that setting.

use thiserror::Error;

/// Result type alias for settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Errors surfaced while resolving release settings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    /// A deferred computation reported a failure.
    ///
    /// Propagated verbatim through resolution: never retried, wrapped, or
    /// suppressed.
    #[error("provider failed: {reason}")]
    Provider {
        /// Reason reported by the computation
        reason: String,
    },

    /// A required setting resolved to no value.
    ///
    /// Raised by the consuming side (see
    /// [`ResolvedRelease`](crate::settings::ResolvedRelease)), not by the
    /// resolver itself; an unset setting resolves to `None`.
    #[error("missing required configuration: {name}")]
    MissingConfiguration {
        /// Setting name
        name: String,
    },
}

impl SettingsError {
    /// Create a [`SettingsError::Provider`] failure.
    ///
    /// Convenience for deferred computations that fail with a plain
    /// message:
    ///
    /// ```
    /// use github_release_settings::{ReleaseSettings, SettingsError};
    ///
    /// let mut settings = ReleaseSettings::new();
    /// settings.set_body_with(|| Err(SettingsError::provider("changelog unavailable")));
    /// assert!(settings.body().is_err());
    /// ```
    pub fn provider(reason: impl Into<String>) -> Self {
        Self::Provider {
            reason: reason.into(),
        }
    }

    /// Create a [`SettingsError::MissingConfiguration`] failure.
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingConfiguration { name: name.into() }
    }
}
