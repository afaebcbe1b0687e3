//! Panel view descriptors reported by the host layout.

use std::fmt;
use std::rc::Rc;

use anyhow::Result;

use crate::{Host, Position};

/// Opaque handle to a live window owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u64);

/// Callable that materializes a panel through the host.
pub type OpenFn = dyn Fn(&mut dyn Host) -> Result<()>;

/// How a view gets opened when it has no valid window.
#[derive(Clone)]
pub enum OpenAction {
    /// Custom open function supplied by the layout.
    Callable(Rc<OpenFn>),
    /// Named editor command dispatched through `Editor::dispatch_command`.
    Command(String),
}

impl OpenAction {
    /// Wrap a closure as a callable open action.
    pub fn callable<F>(f: F) -> Self
    where
        F: Fn(&mut dyn Host) -> Result<()> + 'static,
    {
        OpenAction::Callable(Rc::new(f))
    }

    /// Build a command open action.
    pub fn command(name: impl Into<String>) -> Self {
        OpenAction::Command(name.into())
    }
}

impl fmt::Debug for OpenAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenAction::Callable(_) => f.write_str("Callable(..)"),
            OpenAction::Command(name) => f.debug_tuple("Command").field(name).finish(),
        }
    }
}

/// A named panel docked at an edgebar.
///
/// Views are snapshots: the engine reads them from the layout on every call
/// and never keeps them past it.
#[derive(Debug, Clone)]
pub struct View {
    /// Panel title, the key groups refer to
    pub title: String,
    /// Edgebar owning the view
    pub position: Position,
    /// Windows currently realizing the view, in host order
    pub windows: Vec<WindowId>,
    /// Action used to open the view
    pub open: OpenAction,
}

impl View {
    /// Create a view with no windows.
    pub fn new(title: impl Into<String>, position: Position, open: OpenAction) -> Self {
        Self {
            title: title.into(),
            position,
            windows: Vec::new(),
            open,
        }
    }

    /// Attach windows to the view.
    pub fn with_windows(mut self, windows: impl IntoIterator<Item = WindowId>) -> Self {
        self.windows.extend(windows);
        self
    }
}
