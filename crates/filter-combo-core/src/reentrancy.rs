//! Re-entrancy flags for synchronous change handlers.
//!
//! Writing one piece of widget state often notifies a handler that writes
//! back into the same widget: assigning the edit field's text fires the
//! text-changed handler, swapping the visible item list fires the
//! items-changed handler. A [`ReentrancyFlag`] marks "this write path is in
//! flight"; the handler it protects checks [`ReentrancyFlag::is_set`] and
//! returns early.
//!
//! Flags are plain booleans, not locks. They assume every handler runs on
//! the same UI thread. Code that dispatches handlers from several threads
//! needs real synchronization instead.
//!
//! # Example
//!
//! ```
//! use filter_combo_core::ReentrancyFlag;
//!
//! let filtering = ReentrancyFlag::new("filter_pass");
//! assert!(!filtering.is_set());
//!
//! let outer = filtering.scope();
//! {
//!     let _inner = filtering.scope();
//! }
//! // Leaving a nested scope restores the outer state.
//! assert!(filtering.is_set());
//! drop(outer);
//! assert!(!filtering.is_set());
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::logging::targets;

/// A named boolean guard shared between a write path and its handler.
///
/// Cloning a flag yields another handle to the same state.
#[derive(Clone)]
pub struct ReentrancyFlag {
    name: &'static str,
    state: Arc<AtomicBool>,
}

impl ReentrancyFlag {
    /// Create a new, cleared flag.
    ///
    /// The name only appears in trace output.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The flag's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check whether a guarded write is currently in flight.
    pub fn is_set(&self) -> bool {
        self.state.load(Ordering::Acquire)
    }

    /// Set the flag until the returned scope is dropped.
    ///
    /// Scopes nest: dropping an inner scope restores whatever state the flag
    /// had when that scope was entered.
    #[must_use = "the flag is cleared as soon as the scope is dropped"]
    pub fn scope(&self) -> FlagScope {
        let previous = self.state.swap(true, Ordering::AcqRel);
        tracing::trace!(target: targets::REENTRANCY, flag = self.name, nested = previous, "enter");
        FlagScope {
            name: self.name,
            state: self.state.clone(),
            previous,
        }
    }
}

impl fmt::Debug for ReentrancyFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReentrancyFlag")
            .field("name", &self.name)
            .field("set", &self.is_set())
            .finish()
    }
}

/// RAII scope returned by [`ReentrancyFlag::scope`].
pub struct FlagScope {
    name: &'static str,
    state: Arc<AtomicBool>,
    previous: bool,
}

impl Drop for FlagScope {
    fn drop(&mut self) {
        self.state.store(self.previous, Ordering::Release);
        tracing::trace!(target: targets::REENTRANCY, flag = self.name, restored = self.previous, "leave");
    }
}

impl fmt::Debug for FlagScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagScope")
            .field("name", &self.name)
            .field("previous", &self.previous)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_sets_and_clears() {
        let flag = ReentrancyFlag::new("edit_sync");
        assert!(!flag.is_set());
        {
            let _scope = flag.scope();
            assert!(flag.is_set());
        }
        assert!(!flag.is_set());
    }

    #[test]
    fn test_nested_scope_restores_outer_state() {
        let flag = ReentrancyFlag::new("filter_pass");
        let outer = flag.scope();
        let inner = flag.scope();
        drop(inner);
        assert!(flag.is_set());
        drop(outer);
        assert!(!flag.is_set());
    }

    #[test]
    fn test_clones_share_state() {
        let flag = ReentrancyFlag::new("edit_sync");
        let handle = flag.clone();
        let _scope = flag.scope();
        assert!(handle.is_set());
        assert_eq!(handle.name(), "edit_sync");
    }
}
