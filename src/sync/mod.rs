//! Synchronized wrapper around the core stack.
//!
//! Rather than threading a lock flag through the core container, thread
//! safety composes: [`SyncPriorityRowStack`] owns a
//! [`PriorityRowStack`](crate::stack::PriorityRowStack) behind a single
//! mutex. Every public operation holds the lock for its whole body and the
//! guard releases on every exit path, error returns included. No operation
//! calls another public operation while holding the lock, so a plain
//! (non-reentrant) mutex suffices.
//!
//! There is no waiting model: a full or empty container fails immediately
//! under the lock, exactly as the unsynchronized core does.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::StackError;
use crate::stack::{PriorityRowStack, StackConfig};

/// A [`PriorityRowStack`] shareable across threads.
///
/// All operations take `&self`; the wrapper is `Send + Sync` for any
/// `T: Send`. Borrowing APIs of the core (`peek`, `snapshot`) return owned
/// values here, since a borrow cannot outlive the lock guard.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use rowstack::sync::SyncPriorityRowStack;
///
/// let stack = Arc::new(SyncPriorityRowStack::new(8, 2)?);
/// let handles: Vec<_> = (0..4)
///     .map(|worker| {
///         let stack = Arc::clone(&stack);
///         thread::spawn(move || stack.push(worker, 1))
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap()?;
/// }
/// assert_eq!(stack.len(), 4);
/// # Ok::<(), rowstack::error::StackError>(())
/// ```
#[derive(Debug)]
pub struct SyncPriorityRowStack<T> {
    inner: Mutex<PriorityRowStack<T>>,
}

impl<T> SyncPriorityRowStack<T> {
    /// Creates an empty synchronized stack; see
    /// [`PriorityRowStack::new`](crate::stack::PriorityRowStack::new).
    pub fn new(row_capacity: usize, priority_levels: usize) -> Result<Self, StackError> {
        Ok(Self {
            inner: Mutex::new(PriorityRowStack::new(row_capacity, priority_levels)?),
        })
    }

    /// Creates an empty synchronized stack from a full configuration.
    pub fn with_config(config: StackConfig) -> Result<Self, StackError> {
        Ok(Self {
            inner: Mutex::new(PriorityRowStack::with_config(config)?),
        })
    }

    /// Pushes `item` at `priority` under the lock.
    pub fn push(&self, item: T, priority: usize) -> Result<(), StackError> {
        self.lock().push(item, priority)
    }

    /// Pops the top item under the lock.
    pub fn pop(&self) -> Result<T, StackError> {
        self.lock().pop()
    }

    /// Whether the stack holds no items.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Number of items across all rows.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Number of currently open rows.
    pub fn rows_count(&self) -> usize {
        self.lock().rows_count()
    }

    /// Unwraps the synchronized stack, returning the core container.
    pub fn into_inner(self) -> PriorityRowStack<T> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquires the lock, absorbing poisoning: a panic in another holder
    /// leaves the container in a consistent state (each operation restores
    /// its invariants before returning), so later callers proceed.
    fn lock(&self) -> MutexGuard<'_, PriorityRowStack<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> SyncPriorityRowStack<T> {
    /// A copy of the item the next [`pop`](Self::pop) would return.
    pub fn peek(&self) -> Result<T, StackError> {
        self.lock().peek().cloned()
    }

    /// Copies of all items in future-pop order; see
    /// [`PriorityRowStack::snapshot`](crate::stack::PriorityRowStack::snapshot).
    pub fn snapshot(&self) -> Vec<T> {
        self.lock().snapshot().into_iter().cloned().collect()
    }
}
