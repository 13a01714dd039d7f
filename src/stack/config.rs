//! Stack configuration.

use crate::error::ConfigError;

/// Configuration parameters for a priority row stack.
///
/// Fixed for the lifetime of the container that is built from it.
///
/// # Examples
///
/// ```
/// use rowstack::stack::StackConfig;
///
/// let config = StackConfig::default()
///     .with_row_capacity(8)
///     .with_priority_levels(3)
///     .with_max_rows(4);
/// assert_eq!(config.row_capacity, 8);
/// assert_eq!(config.item_capacity(), Some(32));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackConfig {
    /// Maximum number of items a single row holds. Must be positive.
    pub row_capacity: usize,

    /// Number of priority classes per row. Priority values run from 1
    /// (most urgent) to `priority_levels` inclusive. Must be positive.
    pub priority_levels: usize,

    /// Maximum number of concurrently open rows (None = unbounded).
    /// Must be positive when set.
    pub max_rows: Option<usize>,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            row_capacity: 16,
            priority_levels: 4,
            max_rows: None,
        }
    }
}

impl StackConfig {
    /// Creates a configuration with the given row capacity and priority
    /// level count, and no row limit.
    pub fn new(row_capacity: usize, priority_levels: usize) -> Self {
        Self {
            row_capacity,
            priority_levels,
            max_rows: None,
        }
    }

    /// Sets the per-row item capacity.
    pub fn with_row_capacity(mut self, capacity: usize) -> Self {
        self.row_capacity = capacity;
        self
    }

    /// Sets the number of priority levels.
    pub fn with_priority_levels(mut self, levels: usize) -> Self {
        self.priority_levels = levels;
        self
    }

    /// Caps the number of concurrently open rows.
    pub fn with_max_rows(mut self, limit: usize) -> Self {
        self.max_rows = Some(limit);
        self
    }

    /// Total item capacity, when a row limit makes the stack fully bounded.
    pub fn item_capacity(&self) -> Option<usize> {
        self.max_rows.map(|limit| limit * self.row_capacity)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.row_capacity == 0 {
            return Err(ConfigError::ZeroRowCapacity);
        }
        if self.priority_levels == 0 {
            return Err(ConfigError::ZeroPriorityLevels);
        }
        if self.max_rows == Some(0) {
            return Err(ConfigError::ZeroRowLimit);
        }
        Ok(())
    }
}
