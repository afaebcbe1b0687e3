//! Deferred key dispatch.
//!
//! A key press never reconciles synchronously. Each matching group becomes a
//! `ScheduledOpen` in a FIFO queue that the host drains on a later turn of
//! its event loop, so every reconciliation sees the editor state left behind
//! by the ones before it.

use std::collections::VecDeque;

use edgegroups_core::{Host, Position};
use edgegroups_groups::GroupRegistry;

use crate::{open_group_index, toggle_group_index};

/// Per-call overrides for key dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenOptions {
    /// Only consider groups at this position
    pub position: Option<Position>,
    /// Override the global toggle default
    pub toggle: Option<bool>,
}

impl OpenOptions {
    /// Restrict to one position.
    pub fn at(position: Position) -> Self {
        Self {
            position: Some(position),
            toggle: None,
        }
    }

    /// Override toggle.
    pub fn with_toggle(mut self, toggle: bool) -> Self {
        self.toggle = Some(toggle);
        self
    }
}

/// A reconciliation waiting for its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledOpen {
    pub position: Position,
    pub index: usize,
    pub toggle: bool,
}

/// Queue of pending reconciliations plus the global toggle default.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    queue: VecDeque<ScheduledOpen>,
    toggle: bool,
}

impl Dispatcher {
    /// Create dispatcher with the global toggle default.
    pub fn new(toggle: bool) -> Self {
        Self {
            queue: VecDeque::new(),
            toggle,
        }
    }

    /// Global toggle default.
    pub fn toggle(&self) -> bool {
        self.toggle
    }

    /// Schedule every group whose pick key is `key`.
    ///
    /// Returns the number of scheduled reconciliations. Nothing runs until
    /// `run_pending`.
    pub fn open_groups_by_key(
        &mut self,
        registry: &GroupRegistry,
        key: &str,
        opts: OpenOptions,
    ) -> usize {
        let toggle = opts.toggle.unwrap_or(self.toggle);
        let matches = registry.groups_by_key(key, opts.position);

        for found in &matches {
            self.queue.push_back(ScheduledOpen {
                position: found.position,
                index: found.index,
                toggle,
            });
        }

        if matches.is_empty() {
            log::debug!("No group bound to key {:?}", key);
        }
        matches.len()
    }

    /// Number of queued reconciliations.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Run the reconciliations queued before this call.
    ///
    /// Anything scheduled while draining waits for the next call. Returns the
    /// number of reconciliations run.
    pub fn run_pending(&mut self, registry: &mut GroupRegistry, host: &mut dyn Host) -> usize {
        let batch: Vec<ScheduledOpen> = self.queue.drain(..).collect();
        for task in &batch {
            if task.toggle {
                toggle_group_index(registry, host, task.position, task.index);
            } else {
                open_group_index(registry, host, task.position, task.index);
            }
        }
        batch.len()
    }
}
