//! Core types and traits for edgegroups.
//!
//! This crate provides the vocabulary shared by every other crate:
//! - `Position` - the screen edge an edgebar is docked to
//! - `View` / `OpenAction` - panel descriptors read from the host layout
//! - `Editor` / `Layout` / `Host` - the host collaborators the engine drives

pub mod host;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod position;
pub mod view;

pub use host::{EdgebarWindow, Editor, Host, Layout};
pub use position::Position;
pub use view::{OpenAction, View, WindowId};
