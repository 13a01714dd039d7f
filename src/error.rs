//! Stack error types.
//!
//! Every failure is synchronous and reported as its own variant so callers
//! can branch on kind — e.g. retry a push with a different priority versus
//! abandon it because the row limit is reached. The container itself never
//! retries.

use thiserror::Error;

/// Rejected constructor arguments.
///
/// Construction fails atomically: no partially initialized container is
/// ever produced.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    /// `row_capacity` was zero.
    #[error("row capacity must be greater than zero")]
    ZeroRowCapacity,

    /// `priority_levels` was zero.
    #[error("priority levels must be greater than zero")]
    ZeroPriorityLevels,

    /// `max_rows` was set to zero.
    #[error("row limit must be greater than zero when set")]
    ZeroRowLimit,
}

/// Errors returned by [`PriorityRowStack`](crate::stack::PriorityRowStack)
/// operations.
///
/// A full row is not part of this taxonomy: it is an internal signal that
/// the stack layer always resolves by opening a new row (or failing with
/// [`StackError::RowLimitReached`] when it cannot).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StackError {
    /// Invalid construction arguments.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `push` called with a priority outside `1..=priority_levels`.
    ///
    /// The item is not inserted and container state is unchanged.
    #[error("priority must be in 1..={levels}, got {got}")]
    InvalidPriority {
        /// The rejected priority value.
        got: usize,
        /// The configured number of priority levels.
        levels: usize,
    },

    /// `push` could not open a new row: the row limit is reached and the
    /// top row is full.
    ///
    /// The push is rejected in full. Recoverable — pops that drain a row
    /// free a slot for future pushes.
    #[error("row limit of {limit} reached while the top row is full")]
    RowLimitReached {
        /// The configured maximum row count.
        limit: usize,
    },

    /// `peek` or `pop` called on an empty container.
    #[error("stack is empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ConfigError::ZeroRowCapacity.to_string(),
            "row capacity must be greater than zero"
        );
        assert_eq!(
            StackError::InvalidPriority { got: 9, levels: 4 }.to_string(),
            "priority must be in 1..=4, got 9"
        );
        assert_eq!(
            StackError::RowLimitReached { limit: 2 }.to_string(),
            "row limit of 2 reached while the top row is full"
        );
        assert_eq!(StackError::Empty.to_string(), "stack is empty");
    }

    #[test]
    fn test_config_error_converts() {
        let err: StackError = ConfigError::ZeroRowLimit.into();
        assert_eq!(err, StackError::Config(ConfigError::ZeroRowLimit));
        // Transparent: the inner message passes through unchanged.
        assert_eq!(
            err.to_string(),
            "row limit must be greater than zero when set"
        );
    }
}
