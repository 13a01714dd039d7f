//! The stack-of-rows container.

use crate::error::StackError;

use super::config::StackConfig;
use super::row::{Row, RowPushError};

/// A bounded, priority-partitioned stack of rows.
///
/// Pushes fill the most recently opened row; a new row opens when the top
/// is full, up to the optional row limit. Peek and pop always target the
/// topmost non-empty row and defer to its priority rule: most urgent
/// priority first, most recent first within a priority.
///
/// # Examples
///
/// ```
/// use rowstack::stack::PriorityRowStack;
///
/// let mut stack = PriorityRowStack::new(4, 3)?;
/// stack.push("render", 2)?;
/// stack.push("input", 1)?;
/// stack.push("audio", 3)?;
///
/// assert_eq!(stack.pop()?, "input");
/// assert_eq!(stack.pop()?, "render");
/// assert_eq!(stack.pop()?, "audio");
/// assert!(stack.is_empty());
/// # Ok::<(), rowstack::error::StackError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PriorityRowStack<T> {
    config: StackConfig,
    rows: Vec<Row<T>>,
    len: usize,
}

impl<T> PriorityRowStack<T> {
    /// Creates an empty stack with the given per-row capacity and priority
    /// level count, and no row limit.
    pub fn new(row_capacity: usize, priority_levels: usize) -> Result<Self, StackError> {
        Self::with_config(StackConfig::new(row_capacity, priority_levels))
    }

    /// Creates an empty stack from a full configuration.
    ///
    /// Fails with [`StackError::Config`] when the configuration is invalid;
    /// no container is produced in that case.
    pub fn with_config(config: StackConfig) -> Result<Self, StackError> {
        config.validate()?;
        Ok(Self {
            config,
            rows: Vec::new(),
            len: 0,
        })
    }

    /// The configuration this stack was built with.
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Pushes `item` at `priority` (1 = most urgent).
    ///
    /// Opens a new row when the top row is full. Fails with
    /// [`StackError::RowLimitReached`] when that would exceed the row
    /// limit — checked before the priority is validated, so a full stack
    /// reports the limit even for an out-of-range priority. Fails with
    /// [`StackError::InvalidPriority`] for priorities outside
    /// `1..=priority_levels`. On any failure the container is left exactly
    /// as it was: a row opened for this push is closed again.
    pub fn push(&mut self, mut item: T, priority: usize) -> Result<(), StackError> {
        let mut opened_here = false;
        loop {
            if self.rows.last().map_or(true, Row::is_full) {
                if let Some(limit) = self.config.max_rows {
                    if self.rows.len() >= limit {
                        return Err(StackError::RowLimitReached { limit });
                    }
                }
                self.rows.push(Row::new(
                    self.config.row_capacity,
                    self.config.priority_levels,
                ));
                opened_here = true;
            }
            let top = match self.rows.last_mut() {
                Some(row) => row,
                // Unreachable: the branch above guarantees an open row.
                None => return Err(StackError::Empty),
            };
            match top.push(item, priority) {
                Ok(()) => {
                    self.len += 1;
                    return Ok(());
                }
                Err(RowPushError::Priority { got }) => {
                    if opened_here {
                        self.rows.pop();
                    }
                    return Err(StackError::InvalidPriority {
                        got,
                        levels: self.config.priority_levels,
                    });
                }
                // Row filled up; loop around and open a fresh one.
                Err(RowPushError::Full(rejected)) => item = rejected,
            }
        }
    }

    /// The item the next [`pop`](Self::pop) would return.
    ///
    /// Takes `&mut self` because empty rows left by earlier operations are
    /// pruned from the top before delegating.
    pub fn peek(&mut self) -> Result<&T, StackError> {
        if self.len == 0 {
            return Err(StackError::Empty);
        }
        self.prune_stale_rows();
        match self.rows.last().and_then(Row::peek) {
            Some(item) => Ok(item),
            // len > 0 with no rows left means a broken invariant.
            None => Err(StackError::Empty),
        }
    }

    /// Removes and returns the top item: from the newest non-empty row, the
    /// most recent item of its most urgent occupied priority.
    pub fn pop(&mut self) -> Result<T, StackError> {
        if self.len == 0 {
            return Err(StackError::Empty);
        }
        // Staleness from prior operations.
        self.prune_stale_rows();
        let item = match self.rows.last_mut().and_then(Row::pop) {
            Some(item) => item,
            None => return Err(StackError::Empty),
        };
        self.len -= 1;
        // Staleness from this pop: drop the row it just drained.
        if self.rows.last().is_some_and(Row::is_empty) {
            self.rows.pop();
        }
        debug_assert_eq!(self.len, self.rows.iter().map(Row::len).sum::<usize>());
        Ok(item)
    }

    /// Whether the stack holds no items. O(1), never prunes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of items across all rows.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of currently open rows.
    pub fn rows_count(&self) -> usize {
        self.rows.len()
    }

    /// Items in the exact order repeated pops would return them, without
    /// mutating the stack: rows newest to oldest, each row priority-
    /// ascending and most-recent-first within a priority.
    pub fn snapshot(&self) -> Vec<&T> {
        self.rows
            .iter()
            .rev()
            .flat_map(|row| row.ordered())
            .collect()
    }

    /// Removes empty rows from the top of the row sequence.
    fn prune_stale_rows(&mut self) {
        while self.rows.last().is_some_and(Row::is_empty) {
            self.rows.pop();
        }
    }
}

impl<T> Default for PriorityRowStack<T> {
    fn default() -> Self {
        Self {
            config: StackConfig::default(),
            rows: Vec::new(),
            len: 0,
        }
    }
}
