//! Resolution interface and logging decorator.

use std::fmt;

use crate::provider::Resolution;

/// Common interface over memoizing resolvers.
///
/// [`Setting`](crate::provider::Setting) is the canonical implementation;
/// [`Traced`] composes over any implementation without changing outcomes.
pub trait Resolve<T> {
    /// Name of the underlying setting.
    fn name(&self) -> &str;

    /// Resolves the setting, memoizing the first outcome.
    fn resolve(&self) -> Resolution<T>;
}

impl<T, R: Resolve<T>> Resolve<T> for &R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn resolve(&self) -> Resolution<T> {
        (**self).resolve()
    }
}

/// Logging decorator over a resolver.
///
/// Emits one `log::debug!` record per resolution, carrying the setting
/// name and the outcome, then returns the outcome unchanged. Applied by
/// [`ReleaseSettings`](crate::settings::ReleaseSettings) when verbose
/// diagnostics were enabled at construction.
pub struct Traced<R> {
    inner: R,
}

impl<R> Traced<R> {
    /// Wraps a resolver.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<T, R> Resolve<T> for Traced<R>
where
    T: fmt::Debug,
    R: Resolve<T>,
{
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn resolve(&self) -> Resolution<T> {
        let outcome = self.inner.resolve();
        match &outcome {
            Ok(Some(value)) => log::debug!("resolved {}: {:?}", self.name(), value),
            Ok(None) => log::debug!("resolved {}: <unset>", self.name()),
            Err(error) => log::debug!("resolving {} failed: {}", self.name(), error),
        }
        outcome
    }
}
