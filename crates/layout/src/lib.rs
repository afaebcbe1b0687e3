//! Edgebar view operations for edgegroups.
//!
//! This crate provides the building blocks the reconciliation engine uses:
//! - `filter_by_titles` - pick views by title, in requested order
//! - `is_view_open` / `is_one_window_open` - window validity probes
//! - `activate` - open a single view, swallowing failures
//! - `close_views_by_titles` / `open_views_by_titles` - per-edgebar batches

pub mod activator;
pub mod edgebar;
pub mod filter;
pub mod probe;

pub use activator::activate;
pub use edgebar::{close_views_by_titles, open_views_by_titles};
pub use filter::filter_by_titles;
pub use probe::{is_one_window_open, is_view_open};
