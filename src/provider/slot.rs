//! Named memoizing slots.

use std::cell::OnceCell;
use std::fmt;

use crate::error::Result;
use crate::provider::{Resolve, Source};

/// Outcome of resolving a setting: the value, `None` when the setting was
/// never assigned, or the failure reported by a deferred computation.
pub type Resolution<T> = Result<Option<T>>;

/// A named, lazily-resolved configuration slot.
///
/// Pairs an assignment [`Source`] with a once-only cache. The assignment
/// may be replaced freely during the configuration phase (last write
/// wins); the first [`resolve`](Setting::resolve) forces whatever is
/// assigned at that moment and the outcome becomes permanent.
pub struct Setting<T> {
    name: &'static str,
    source: Source<T>,
    resolved: OnceCell<Resolution<T>>,
}

impl<T> Setting<T> {
    /// Creates an unset slot.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            source: Source::Unset,
            resolved: OnceCell::new(),
        }
    }

    /// Setting name, as shown in trace records and errors.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Replaces the assignment. Last write wins.
    ///
    /// Once the slot has been resolved this is a no-op in every observable
    /// sense: the cached outcome is permanent.
    pub fn assign(&mut self, source: Source<T>) {
        self.source = source;
    }

    /// Resolves the slot, memoizing the first outcome.
    ///
    /// The underlying computation chain runs on the first call only; later
    /// calls return the cached outcome, including a cached failure.
    pub fn resolve(&self) -> Resolution<T>
    where
        T: Clone,
    {
        self.resolved
            .get_or_init(|| self.source.produce())
            .clone()
    }
}

impl<T: Clone> Resolve<T> for Setting<T> {
    fn name(&self) -> &str {
        self.name
    }

    fn resolve(&self) -> Resolution<T> {
        Setting::resolve(self)
    }
}

impl<T: fmt::Debug> fmt::Debug for Setting<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Setting")
            .field("name", &self.name)
            .field("source", &self.source)
            .field("resolved", &self.resolved.get())
            .finish()
    }
}
