//! Default scope provider: one stack per provider per thread.

use super::{ScopeGuard, ScopeProvider};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_PROVIDER_ID: AtomicU64 = AtomicU64::new(0);

/// `Rc` so visiting can clone the stack out and run `Display` without holding the borrow.
struct ScopeEntry {
    id: u64,
    value: Rc<dyn fmt::Display>,
}

thread_local! {
    /// Keyed by provider id so two providers on one thread never see each other's scopes.
    static STACKS: RefCell<HashMap<u64, Vec<ScopeEntry>>> = RefCell::new(HashMap::new());
}

/// Thread-local scope stacks.
///
/// Scopes pushed on one thread are invisible on every other thread. Guards
/// normally drop in LIFO order; an out-of-order drop removes exactly its own
/// entry and leaves the rest in place.
#[derive(Debug)]
pub struct ThreadScopeProvider {
    id: u64,
    next_scope: AtomicU64,
}

impl Default for ThreadScopeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ThreadScopeProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: NEXT_PROVIDER_ID.fetch_add(1, Ordering::Relaxed),
            next_scope: AtomicU64::new(0),
        }
    }

    /// Number of scopes active on the calling thread.
    #[must_use]
    pub fn depth(&self) -> usize {
        STACKS
            .try_with(|stacks| stacks.borrow().get(&self.id).map_or(0, Vec::len))
            .unwrap_or(0)
    }
}

fn release(provider: u64, scope: u64) {
    // Thread-local storage may already be gone if the guard outlives it during thread exit.
    let removed = STACKS
        .try_with(|stacks| {
            let mut stacks = stacks.borrow_mut();
            let stack = stacks.get_mut(&provider)?;
            let removed = stack
                .iter()
                .rposition(|entry| entry.id == scope)
                .map(|pos| stack.remove(pos));
            if stack.is_empty() {
                stacks.remove(&provider);
            }
            removed
        })
        .ok()
        .flatten();

    // The value's own `Drop` may log, so it runs only after the borrow is released.
    drop(removed);
}

impl ScopeProvider for ThreadScopeProvider {
    fn push(&self, state: Box<dyn fmt::Display>) -> ScopeGuard {
        let scope = self.next_scope.fetch_add(1, Ordering::Relaxed);
        let pushed = STACKS.try_with(|stacks| {
            stacks
                .borrow_mut()
                .entry(self.id)
                .or_default()
                .push(ScopeEntry {
                    id: scope,
                    value: Rc::from(state),
                });
        });

        if pushed.is_err() {
            return ScopeGuard::noop();
        }

        let provider = self.id;
        ScopeGuard::new(move || release(provider, scope))
    }

    fn for_each_scope(&self, visit: &mut dyn FnMut(&dyn fmt::Display)) {
        // Snapshot first: a scope's `Display` may itself push or log.
        let snapshot: Vec<Rc<dyn fmt::Display>> = STACKS
            .try_with(|stacks| {
                stacks.borrow().get(&self.id).map_or_else(Vec::new, |stack| {
                    stack.iter().map(|entry| Rc::clone(&entry.value)).collect()
                })
            })
            .unwrap_or_default();

        for value in &snapshot {
            visit(value.as_ref());
        }
    }
}
