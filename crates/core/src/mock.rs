//! In-memory host for tests.
//!
//! Windows live in a map keyed by id. Closing removes a window, hiding keeps
//! it valid, and `invalidate` simulates a stale handle that the host still
//! reports. Every mutation is recorded in `actions`.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{anyhow, Result};

use crate::{EdgebarWindow, Editor, Layout, OpenAction, Position, View, WindowId};

/// Mutation performed on the mock host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockAction {
    Hide(String),
    Close(String),
    Command(String),
}

#[derive(Debug, Clone)]
struct MockWindow {
    title: String,
    position: Position,
    valid: bool,
    pinned: bool,
    hidden: bool,
}

#[derive(Debug, Clone)]
struct MockView {
    title: String,
    position: Position,
    open: OpenAction,
}

/// Host stub implementing `Editor` and `Layout`.
#[derive(Debug, Default)]
pub struct MockHost {
    windows: BTreeMap<WindowId, MockWindow>,
    views: Vec<MockView>,
    edgebars: BTreeSet<Position>,
    failing_commands: BTreeSet<String>,
    next_id: u64,
    /// Recorded mutations, oldest first
    pub actions: Vec<MockAction>,
}

impl MockHost {
    /// Create an empty host with no edgebars.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view whose open action is the command named after its title.
    pub fn add_view(&mut self, position: Position, title: &str) -> &mut Self {
        self.add_view_with(position, title, OpenAction::command(title))
    }

    /// Register a view with a custom open action.
    pub fn add_view_with(&mut self, position: Position, title: &str, open: OpenAction) -> &mut Self {
        self.edgebars.insert(position);
        self.views.push(MockView {
            title: title.to_string(),
            position,
            open,
        });
        self
    }

    /// Make `dispatch_command` fail for this command name.
    pub fn fail_command(&mut self, name: &str) -> &mut Self {
        self.failing_commands.insert(name.to_string());
        self
    }

    /// Create a live window for a view.
    pub fn spawn(&mut self, position: Position, title: &str) -> WindowId {
        self.next_id += 1;
        let id = WindowId(self.next_id);
        self.windows.insert(
            id,
            MockWindow {
                title: title.to_string(),
                position,
                valid: true,
                pinned: false,
                hidden: false,
            },
        );
        id
    }

    /// Mark a window as pinned.
    pub fn pin(&mut self, window: WindowId) {
        if let Some(win) = self.windows.get_mut(&window) {
            win.pinned = true;
        }
    }

    /// Keep reporting a window but make it invalid.
    pub fn invalidate(&mut self, window: WindowId) {
        if let Some(win) = self.windows.get_mut(&window) {
            win.valid = false;
        }
    }

    /// Whether the window was hidden.
    pub fn is_hidden(&self, window: WindowId) -> bool {
        self.windows.get(&window).map(|w| w.hidden).unwrap_or(false)
    }

    /// Whether the window still exists.
    pub fn exists(&self, window: WindowId) -> bool {
        self.windows.contains_key(&window)
    }

    /// Titles with at least one valid window at a position.
    pub fn open_titles(&self, position: Position) -> BTreeSet<String> {
        self.windows
            .values()
            .filter(|w| w.position == position && w.valid)
            .map(|w| w.title.clone())
            .collect()
    }

    /// Number of windows realizing a title at a position.
    pub fn window_count(&self, position: Position, title: &str) -> usize {
        self.windows
            .values()
            .filter(|w| w.position == position && w.title == title)
            .count()
    }

    fn title_of(&self, window: WindowId) -> String {
        self.windows
            .get(&window)
            .map(|w| w.title.clone())
            .unwrap_or_default()
    }
}

impl Editor for MockHost {
    fn edgebar_windows(&self) -> Vec<EdgebarWindow> {
        self.windows
            .iter()
            .map(|(id, w)| EdgebarWindow {
                window: *id,
                title: w.title.clone(),
                position: w.position,
            })
            .collect()
    }

    fn is_valid(&self, window: WindowId) -> bool {
        self.windows.get(&window).map(|w| w.valid).unwrap_or(false)
    }

    fn is_pinned(&self, window: WindowId) -> bool {
        self.windows.get(&window).map(|w| w.pinned).unwrap_or(false)
    }

    fn hide(&mut self, window: WindowId) {
        let title = self.title_of(window);
        if let Some(win) = self.windows.get_mut(&window) {
            win.hidden = true;
        }
        self.actions.push(MockAction::Hide(title));
    }

    fn close(&mut self, window: WindowId) {
        let title = self.title_of(window);
        self.windows.remove(&window);
        self.actions.push(MockAction::Close(title));
    }

    fn dispatch_command(&mut self, name: &str) -> Result<()> {
        self.actions.push(MockAction::Command(name.to_string()));
        if self.failing_commands.contains(name) {
            return Err(anyhow!("Command failed: {}", name));
        }
        let target = self
            .views
            .iter()
            .find(|v| v.title == name)
            .map(|v| v.position)
            .ok_or_else(|| anyhow!("Unknown command: {}", name))?;
        self.spawn(target, name);
        Ok(())
    }
}

impl Layout for MockHost {
    fn views(&self, position: Position) -> Option<Vec<View>> {
        if !self.edgebars.contains(&position) {
            return None;
        }
        let views = self
            .views
            .iter()
            .filter(|v| v.position == position)
            .map(|v| {
                let windows = self
                    .windows
                    .iter()
                    .filter(|(_, w)| w.position == position && w.title == v.title)
                    .map(|(id, _)| *id);
                View::new(v.title.clone(), position, v.open.clone()).with_windows(windows)
            })
            .collect();
        Some(views)
    }
}
