//! Group registry for edgegroups.
//!
//! This crate provides:
//! - `Group` - a set of panel titles opened together, with a pick key
//! - `IndexedGroups` - the groups of one position plus the selected index
//! - `GroupRegistry` - per-position groups, key lookup, status-line labels

pub mod group;
pub mod registry;

pub use group::{Group, IndexedGroups};
pub use registry::{GroupLabel, GroupMatch, GroupRegistry};
