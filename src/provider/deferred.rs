//! Shareable deferred computations.

use std::cell::{OnceCell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::error::Result;

type Thunk<T> = Box<dyn FnOnce() -> Result<T>>;

/// A zero-argument deferred computation, invoked at most once.
///
/// `Provider` is a cheap handle: clones share the underlying computation
/// and its cached outcome, so a single expensive computation (reading a
/// credential, deriving a changelog header) can feed several settings or
/// consumers in the same configuration scope and still run only once.
///
/// # Examples
///
/// ```
/// use github_release_settings::Provider;
///
/// let commitish = Provider::new(|| Ok("main".to_string()));
/// let shared = commitish.clone();
///
/// assert_eq!(commitish.get().unwrap(), "main");
/// assert_eq!(shared.get().unwrap(), "main");
/// ```
pub struct Provider<T> {
    inner: Rc<Inner<T>>,
}

struct Inner<T> {
    /// Taken on first forcing; `None` afterwards.
    thunk: RefCell<Option<Thunk<T>>>,
    outcome: OnceCell<Result<T>>,
}

impl<T> Provider<T> {
    /// Wraps a computation to run on first [`get`](Self::get).
    pub fn new<F>(compute: F) -> Self
    where
        F: FnOnce() -> Result<T> + 'static,
        T: 'static,
    {
        Self {
            inner: Rc::new(Inner {
                thunk: RefCell::new(Some(Box::new(compute))),
                outcome: OnceCell::new(),
            }),
        }
    }

    /// Wraps an already-known value.
    pub fn literal(value: T) -> Self
    where
        T: 'static,
    {
        Self::new(move || Ok(value))
    }

    /// Forces the computation and returns its outcome.
    ///
    /// The computation runs on the first call only; every later call, from
    /// this handle or any clone, returns the first outcome again. A failed
    /// computation is not retried: its error is the permanent outcome.
    pub fn get(&self) -> Result<T>
    where
        T: Clone,
    {
        self.inner
            .outcome
            .get_or_init(|| {
                match self.inner.thunk.borrow_mut().take() {
                    Some(compute) => compute(),
                    // the thunk is consumed only through this cell
                    None => unreachable!("provider forced without a computation"),
                }
            })
            .clone()
    }

    /// Whether the computation has already run.
    pub fn is_forced(&self) -> bool {
        self.inner.outcome.get().is_some()
    }
}

impl<T> Clone for Provider<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Provider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.outcome.get() {
            Some(outcome) => f.debug_tuple("Provider").field(outcome).finish(),
            None => f.write_str("Provider(<pending>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SettingsError;
    use std::cell::Cell;

    #[test]
    fn test_get_returns_computed_value() {
        let provider = Provider::new(|| Ok(7u32));
        assert_eq!(provider.get(), Ok(7));
    }

    #[test]
    fn test_computation_runs_at_most_once() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        let provider = Provider::new(move || {
            counter.set(counter.get() + 1);
            Ok("value".to_string())
        });

        for _ in 0..3 {
            assert_eq!(provider.get().unwrap(), "value");
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_clones_share_one_computation() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        let provider = Provider::new(move || {
            counter.set(counter.get() + 1);
            Ok(true)
        });
        let clone = provider.clone();

        assert_eq!(provider.get(), Ok(true));
        assert_eq!(clone.get(), Ok(true));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_failure_is_permanent() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        let provider: Provider<String> = Provider::new(move || {
            counter.set(counter.get() + 1);
            Err(SettingsError::provider("boom"))
        });

        let first = provider.get();
        let second = provider.get();
        assert_eq!(first, Err(SettingsError::provider("boom")));
        assert_eq!(second, first);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_literal_needs_no_computation() {
        let provider = Provider::literal("v1.2.3".to_string());
        assert!(!provider.is_forced());
        assert_eq!(provider.get().unwrap(), "v1.2.3");
        assert!(provider.is_forced());
    }
}
