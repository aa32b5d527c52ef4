//! Scopes are caller-pushed context values that annotate every event logged while
//! they are active.
//!
//! A [`ScopeProvider`] owns the stack; [`ScopeGuard`] pops on drop, so a scope is
//! released on early return and on unwinding alike.

mod render;
mod thread;

pub use render::{render, ARROW, FIRST_ARROW, TERMINATOR};
pub use thread::ThreadScopeProvider;

use std::fmt;

/// A context-local stack of scope values.
///
/// Implementations must keep stacks of unrelated execution contexts apart:
/// `for_each_scope` only visits what the calling context pushed.
pub trait ScopeProvider: Send + Sync {
    /// Pushes `state` onto the current context's stack. Dropping the guard removes it.
    fn push(&self, state: Box<dyn fmt::Display>) -> ScopeGuard;

    /// Visits the current context's scopes, outermost first.
    fn for_each_scope(&self, visit: &mut dyn FnMut(&dyn fmt::Display));
}

/// Releases one pushed scope when dropped.
///
/// Not `Send`: a scope belongs to the context that pushed it.
#[must_use = "the scope is released as soon as the guard is dropped"]
pub struct ScopeGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScopeGuard {
    /// Wraps the provider-specific release action.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release.
    pub const fn noop() -> Self {
        Self { release: None }
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for ScopeGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeGuard")
            .field("active", &self.release.is_some())
            .finish()
    }
}
