//! Assignment forms for a single setting.

use std::fmt;

use crate::error::Result;
use crate::provider::Provider;

/// How a setting's value will be produced.
///
/// The configuration phase assigns one of three forms, or leaves the
/// setting unset. Resolution logic is written once here and dispatches on
/// the variant:
///
/// - [`Literal`](Source::Literal) produces its value immediately
/// - [`Deferred`](Source::Deferred) forces the wrapped [`Provider`]
/// - [`Mapped`](Source::Mapped) forces its upstream, then applies a pure
///   transform to the produced value
pub enum Source<T> {
    /// No value assigned.
    Unset,
    /// An immediate literal.
    Literal(T),
    /// A deferred computation, forced at resolution time.
    Deferred(Provider<T>),
    /// A transform applied to another source's value.
    Mapped {
        /// Source producing the input value.
        upstream: Box<Source<T>>,
        /// Pure transform applied to the upstream value.
        apply: Box<dyn Fn(T) -> T>,
    },
}

impl<T> Source<T> {
    /// Wraps a computation as a deferred source.
    pub fn deferred<F>(compute: F) -> Self
    where
        F: FnOnce() -> Result<T> + 'static,
        T: 'static,
    {
        Self::Deferred(Provider::new(compute))
    }

    /// Chains `apply` over this source's value.
    ///
    /// The transform runs at resolution time, only when the upstream
    /// actually produces a value: an unset upstream stays unset and an
    /// upstream failure propagates without invoking the transform.
    pub fn map<F>(self, apply: F) -> Self
    where
        F: Fn(T) -> T + 'static,
        T: 'static,
    {
        Self::Mapped {
            upstream: Box::new(self),
            apply: Box::new(apply),
        }
    }

    /// Produces the value, `None` when unset.
    ///
    /// Deferred failures propagate verbatim.
    pub(crate) fn produce(&self) -> Result<Option<T>>
    where
        T: Clone,
    {
        match self {
            Self::Unset => Ok(None),
            Self::Literal(value) => Ok(Some(value.clone())),
            Self::Deferred(provider) => provider.get().map(Some),
            Self::Mapped { upstream, apply } => Ok(upstream.produce()?.map(|value| apply(value))),
        }
    }
}

impl<T> Default for Source<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T: fmt::Debug> fmt::Debug for Source<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("Unset"),
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Deferred(provider) => f.debug_tuple("Deferred").field(provider).finish(),
            Self::Mapped { upstream, .. } => f.debug_tuple("Mapped").field(upstream).finish(),
        }
    }
}
