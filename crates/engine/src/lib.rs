//! Group reconciliation and key dispatch for edgegroups.
//!
//! This crate provides:
//! - `open_group_index` - make a position show exactly one group's panels
//! - `open_group_offset` - move the selection and reconcile
//! - `toggle_group_index` - close the group instead when it is all that shows
//! - `Dispatcher` - deferred fan-out of key presses to matching groups
//!
//! # Architecture
//!
//! ```text
//! key → Dispatcher (queue) ─ run_pending → reconcile → layout ops → Host
//!                                              ↑
//!                                        GroupRegistry
//! ```

pub mod dispatch;
pub mod reconcile;

pub use dispatch::{Dispatcher, OpenOptions, ScheduledOpen};
pub use reconcile::{
    current_titles, is_group_only_open, open_group_index, open_group_offset, toggle_group_index,
};
