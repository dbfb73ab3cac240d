//! Widget ownership and the stale-response guard.

use std::sync::{Arc, Mutex, PoisonError, Weak};

/// A mounted widget session. Dropping it tears the widget down.
///
/// Not `Clone`: there is exactly one owner, so liveness is the owner's
/// lifetime. Background requests hold a [`Detached`] handle instead.
#[derive(Debug)]
pub struct Mounted<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> Mounted<S> {
    pub fn mount(state: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Run `f` against the session state.
    pub fn with<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Handle for a request that may outlive the widget.
    #[must_use]
    pub fn detach(&self) -> Detached<S> {
        Detached {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Tear the widget down. Late responses for it are discarded.
    pub fn unmount(self) {
        tracing::debug!("widget unmounted");
    }
}

impl<S: Clone> Mounted<S> {
    #[must_use]
    pub fn snapshot(&self) -> S {
        self.with(|state| state.clone())
    }
}

/// Weak handle to a [`Mounted`] session.
#[derive(Debug)]
pub struct Detached<S> {
    inner: Weak<Mutex<S>>,
}

impl<S> Clone for Detached<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S> Detached<S> {
    /// Apply `f` if the widget is still mounted. Returns `None` once it has
    /// been torn down.
    pub fn apply<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        let Some(inner) = self.inner.upgrade() else {
            tracing::debug!("widget torn down; discarding late response");
            return None;
        };
        let mut guard = inner.lock().unwrap_or_else(PoisonError::into_inner);
        Some(f(&mut guard))
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.inner.strong_count() > 0
    }
}
