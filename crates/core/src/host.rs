//! Host collaborator traits.
//!
//! The engine never owns windows. It reads the live window set through
//! `Editor`, the configured panels through `Layout`, and mutates windows
//! only through `Editor` calls.

use anyhow::Result;

use crate::{Position, View, WindowId};

/// A window that belongs to an edgebar, with the view it realizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgebarWindow {
    /// Window handle
    pub window: WindowId,
    /// Title of the owning view
    pub title: String,
    /// Position of the owning edgebar
    pub position: Position,
}

/// Window subsystem of the host editor.
///
/// All calls are synchronous and act on live UI state.
pub trait Editor {
    /// List every window currently owned by any edgebar.
    fn edgebar_windows(&self) -> Vec<EdgebarWindow>;

    /// Whether the window is still displayed.
    fn is_valid(&self, window: WindowId) -> bool;

    /// Whether the window should be hidden instead of destroyed.
    fn is_pinned(&self, window: WindowId) -> bool;

    /// Hide a window, keeping it alive.
    fn hide(&mut self, window: WindowId);

    /// Close and destroy a window.
    fn close(&mut self, window: WindowId);

    /// Run a named editor command.
    fn dispatch_command(&mut self, name: &str) -> Result<()>;
}

/// Configured panel layout of the host.
pub trait Layout {
    /// Views configured at an edgebar, or `None` when the position has no edgebar.
    fn views(&self, position: Position) -> Option<Vec<View>>;
}

/// Everything the engine needs from the host.
pub trait Host: Editor + Layout {}

impl<T: Editor + Layout + ?Sized> Host for T {}
