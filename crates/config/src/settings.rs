//! Configuration structures for edgegroups settings.

use serde::{Deserialize, Serialize};

use edgegroups_core::Position;

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Groups per edgebar position
    #[serde(default)]
    pub groups: GroupsSettings,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Close a group picked by key when it is already the only thing open
    #[serde(default = "default_toggle")]
    pub toggle: bool,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,

    /// Number of entries kept in memory
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

/// One group of panel titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSettings {
    /// Label shown in the status line
    #[serde(default)]
    pub icon: String,

    /// Single-character key selecting the group
    pub pick_key: String,

    /// Panel titles, in open order
    #[serde(default)]
    pub titles: Vec<String>,
}

/// Groups bucketed by edgebar position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupsSettings {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub left: Vec<GroupSettings>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub right: Vec<GroupSettings>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bottom: Vec<GroupSettings>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top: Vec<GroupSettings>,
}

impl GroupsSettings {
    /// Groups configured at a position, in config order.
    pub fn for_position(&self, position: Position) -> &[GroupSettings] {
        match position {
            Position::Left => &self.left,
            Position::Right => &self.right,
            Position::Bottom => &self.bottom,
            Position::Top => &self.top,
        }
    }

    /// Iterate positions that have groups, in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &[GroupSettings])> {
        Position::ALL
            .into_iter()
            .map(|position| (position, self.for_position(position)))
            .filter(|(_, groups)| !groups.is_empty())
    }

    /// Check if no position has groups.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

// Default value functions for serde
fn default_toggle() -> bool {
    defaults::TOGGLE
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

fn default_max_entries() -> usize {
    defaults::MAX_LOG_ENTRIES
}

// Default implementations
impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            toggle: default_toggle(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
            max_entries: default_max_entries(),
        }
    }
}
