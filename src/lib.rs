//! # GitHub Release Settings
//!
//! Lazily-resolved configuration for GitHub release publishing.
//!
//! This crate holds the settings a release pipeline consumes when it
//! publishes a GitHub release (repository coordinates, credentials, tag
//! and commit target, release metadata, asset files, and behavior flags)
//! and resolves each one to a final value at execution time, with
//! memoization and optional debug tracing.
//!
//! ## Features
//!
//! - **Three assignment forms**: every setting accepts an immediate
//!   literal, a shareable deferred handle ([`Provider`]), or a
//!   zero-argument computation
//! - **Resolve-once semantics**: the first resolution of a setting is
//!   cached; deferred computations run at most once
//! - **Frozen configuration**: reassigning a setting after its first
//!   resolution has no observable effect
//! - **Debug tracing**: an optional logging decorator records every
//!   resolution without altering its outcome
//!
//! ## Usage
//!
//! ```
//! use github_release_settings::ReleaseSettings;
//!
//! let mut settings = ReleaseSettings::new();
//! settings.set_owner("example-org");
//! settings.set_repo("widget");
//! settings.set_token("abc123");
//! settings.set_draft(true);
//!
//! assert_eq!(settings.owner().unwrap().as_deref(), Some("example-org"));
//! assert_eq!(settings.authorization().unwrap().as_deref(), Some("Token abc123"));
//! assert_eq!(settings.draft().unwrap(), Some(true));
//! ```
//!
//! The release upload itself (GitHub API calls, asset transfer, changelog
//! generation) lives in the consuming pipeline; this crate is the
//! configuration layer only and performs no I/O beyond carrying asset
//! path references.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod error;
pub mod provider;
pub mod settings;

// Re-export main types for public API
pub use error::{Result, SettingsError};
pub use provider::{Provider, Resolution, Resolve, Setting, Source, Traced};
pub use settings::{ReleaseSettings, ResolvedRelease};
