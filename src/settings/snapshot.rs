//! Frozen view of resolved release settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SettingsError};

/// Release settings after resolution, frozen for the release-execution
/// collaborator.
///
/// Produced by
/// [`ReleaseSettings::snapshot`](crate::settings::ReleaseSettings::snapshot).
/// Every setting has been forced exactly once; settings that were never
/// assigned stay `None`, and no default is substituted here. The struct
/// is plain data and serializes with serde so the consuming pipeline can
/// persist it alongside its per-release state.
///
/// The `require_*` accessors express the consuming side of an unset
/// required setting: they turn absence into
/// [`SettingsError::MissingConfiguration`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRelease {
    /// Repository owner.
    pub owner: Option<String>,
    /// Repository name.
    pub repo: Option<String>,
    /// `Authorization` header value.
    pub authorization: Option<String>,
    /// Git tag to create or reuse.
    pub tag_name: Option<String>,
    /// Commitish the tag points at when it must be created.
    pub target_commitish: Option<String>,
    /// Human-readable release title.
    pub release_name: Option<String>,
    /// Release body text.
    pub body: Option<String>,
    /// Create the release as a draft.
    pub draft: Option<bool>,
    /// Mark the release as a prerelease.
    pub prerelease: Option<bool>,
    /// Replace an existing release with the same tag.
    pub overwrite: Option<bool>,
    /// Upload assets onto an existing release instead of failing.
    pub allow_upload_to_existing: Option<bool>,
    /// Asset files to upload, as given.
    #[serde(default)]
    pub release_assets: Vec<PathBuf>,
}

impl ResolvedRelease {
    /// Repository owner, required.
    ///
    /// # Errors
    ///
    /// [`SettingsError::MissingConfiguration`] when the owner was never
    /// assigned.
    pub fn require_owner(&self) -> Result<&str> {
        Self::require("owner", self.owner.as_deref())
    }

    /// Repository name, required.
    pub fn require_repo(&self) -> Result<&str> {
        Self::require("repo", self.repo.as_deref())
    }

    /// `Authorization` header value, required.
    pub fn require_authorization(&self) -> Result<&str> {
        Self::require("authorization", self.authorization.as_deref())
    }

    /// Tag name, required.
    pub fn require_tag_name(&self) -> Result<&str> {
        Self::require("tagName", self.tag_name.as_deref())
    }

    fn require<'a>(name: &str, value: Option<&'a str>) -> Result<&'a str> {
        value.ok_or_else(|| SettingsError::missing(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> ResolvedRelease {
        ResolvedRelease {
            owner: None,
            repo: None,
            authorization: None,
            tag_name: None,
            target_commitish: None,
            release_name: None,
            body: None,
            draft: None,
            prerelease: None,
            overwrite: None,
            allow_upload_to_existing: None,
            release_assets: Vec::new(),
        }
    }

    #[test]
    fn test_require_present_value() {
        let resolved = ResolvedRelease {
            owner: Some("example-org".to_string()),
            ..empty()
        };
        assert_eq!(resolved.require_owner(), Ok("example-org"));
    }

    #[test]
    fn test_require_absent_value() {
        let resolved = empty();
        assert_eq!(
            resolved.require_tag_name(),
            Err(SettingsError::missing("tagName"))
        );
    }
}
