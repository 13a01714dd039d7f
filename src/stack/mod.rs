//! Core priority row stack.
//!
//! A [`PriorityRowStack`] owns an ordered sequence of fixed-capacity rows,
//! newest last. Pushes land in the most recently opened row, opening a new
//! one when the top is full (subject to the optional row limit). Retrieval
//! always targets the topmost non-empty row and, within it, the most
//! recently pushed item of the most urgent priority present.
//!
//! The container is unsynchronized; concurrent use from multiple threads is
//! out of contract here. Wrap it in
//! [`SyncPriorityRowStack`](crate::sync::SyncPriorityRowStack) for shared
//! access.

mod config;
mod core;
mod row;

pub use config::StackConfig;
pub use self::core::PriorityRowStack;
