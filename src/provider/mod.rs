//! Lazy value resolution for release settings.
//!
//! A setting's value may be an immediate literal, a deferred computation,
//! or a transform over another deferred value. This module provides the
//! machinery shared by all settings:
//!
//! - [`Source`]: the assignment forms as a tagged variant
//! - [`Provider`]: a shareable deferred computation, invoked at most once
//! - [`Setting`]: a named slot that memoizes its first resolution
//! - [`Traced`]: a logging decorator over the [`Resolve`] interface

mod deferred;
mod resolver;
mod slot;
mod source;

pub use deferred::Provider;
pub use resolver::{Resolve, Traced};
pub use slot::{Resolution, Setting};
pub use source::Source;
