//! Named groups of edgebar panels, opened and closed as a unit.
//!
//! `EdgeGroups` is the setup object: it owns the group registry built from
//! configuration and the deferred key dispatcher, and exposes the entry
//! points host command and keymap glue calls.
//!
//! ```text
//! Config → EdgeGroups { GroupRegistry, Dispatcher }
//!   handle_key / open_groups_by_key → queue
//!   run_pending(host)               → reconcile each queued group
//!   open_group_offset(host)         → reconcile now
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use crossterm::event::KeyEvent;

pub use edgegroups_config::Config;
pub use edgegroups_core::{
    EdgebarWindow, Editor, Host, Layout, OpenAction, Position, View, WindowId,
};
pub use edgegroups_engine::OpenOptions;
pub use edgegroups_groups::{Group, GroupLabel, GroupMatch, GroupRegistry};
pub use edgegroups_layout::{
    close_views_by_titles, filter_by_titles, is_one_window_open, is_view_open,
    open_views_by_titles,
};

use edgegroups_engine::Dispatcher;

/// Group selection state and entry points for one editor session.
#[derive(Debug, Clone, Default)]
pub struct EdgeGroups {
    registry: GroupRegistry,
    dispatcher: Dispatcher,
}

impl EdgeGroups {
    /// Build from parsed configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            registry: GroupRegistry::from_settings(&config.groups),
            dispatcher: Dispatcher::new(config.general.toggle),
        }
    }

    /// Load configuration from the XDG config file and build.
    pub fn load() -> Result<Self> {
        Self::load_from(&Config::config_file_path()?)
    }

    /// Load configuration from an explicit path and build.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
        Ok(Self::new(&config))
    }

    /// Install the logger described by the `[logging]` section.
    ///
    /// Falls back to the data directory for the log file.
    pub fn init_logging(config: &Config) -> Result<()> {
        let level = edgegroups_logger::parse_level(&config.logging.min_level)
            .map_err(anyhow::Error::msg)?;
        let file_path = match &config.logging.file_path {
            Some(path) => PathBuf::from(path),
            None => Config::default_log_path()?,
        };
        edgegroups_logger::init(Some(file_path), config.logging.max_entries, level)
    }

    /// Get group registry.
    pub fn registry(&self) -> &GroupRegistry {
        &self.registry
    }

    /// Selected group of a position.
    pub fn selected(&self, position: Position) -> Option<&Group> {
        self.registry.selected(position)
    }

    /// Groups bound to `key`, optionally at one position only.
    pub fn groups_by_key(&self, key: &str, position: Option<Position>) -> Vec<GroupMatch<'_>> {
        self.registry.groups_by_key(key, position)
    }

    /// Status-line labels of a position.
    pub fn labels(&self, position: Position) -> Vec<GroupLabel> {
        self.registry.labels(position)
    }

    /// Show pick keys in the labels until the next key is handled.
    pub fn set_pick_mode(&mut self, enabled: bool) {
        self.registry.set_pick_mode(enabled);
    }

    /// Schedule every group bound to `key`. Returns the number scheduled.
    pub fn open_groups_by_key(&mut self, key: &str, opts: OpenOptions) -> usize {
        self.dispatcher
            .open_groups_by_key(&self.registry, key, opts)
    }

    /// Schedule groups for a terminal key event.
    ///
    /// Ends pick mode. Returns whether any group matched.
    pub fn handle_key(&mut self, event: &KeyEvent, position: Option<Position>) -> bool {
        self.registry.set_pick_mode(false);
        let Some(key) = edgegroups_keyboard::pick_key(event) else {
            return false;
        };
        let opts = OpenOptions {
            position,
            toggle: None,
        };
        self.open_groups_by_key(&key, opts) > 0
    }

    /// Reconcile `position` to group `index` right away.
    pub fn open_group_index(&mut self, host: &mut dyn Host, position: Position, index: usize) {
        edgegroups_engine::open_group_index(&mut self.registry, host, position, index);
    }

    /// Reconcile `position` to the group `offset` steps from the selection.
    pub fn open_group_offset(&mut self, host: &mut dyn Host, position: Position, offset: isize) {
        edgegroups_engine::open_group_offset(&mut self.registry, host, position, offset);
    }

    /// Number of scheduled reconciliations.
    pub fn pending(&self) -> usize {
        self.dispatcher.pending()
    }

    /// Run scheduled reconciliations. Call once per event loop turn.
    pub fn run_pending(&mut self, host: &mut dyn Host) -> usize {
        self.dispatcher.run_pending(&mut self.registry, host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use edgegroups_core::mock::MockHost;
    use std::collections::BTreeSet;

    const CONFIG: &str = r#"
[general]
toggle = false

[[groups.left]]
icon = "E"
pick_key = "a"
titles = ["Explorer"]

[[groups.left]]
icon = "O"
pick_key = "b"
titles = ["Outline", "Tags"]

[[groups.bottom]]
pick_key = "a"
titles = ["Terminal"]
"#;

    fn setup() -> (EdgeGroups, MockHost) {
        let config = Config::validate_content(CONFIG).unwrap();
        let mut host = MockHost::new();
        host.add_view(Position::Left, "Explorer")
            .add_view(Position::Left, "Outline")
            .add_view(Position::Left, "Tags")
            .add_view(Position::Bottom, "Terminal");
        (EdgeGroups::new(&config), host)
    }

    fn set(titles: &[&str]) -> BTreeSet<String> {
        titles.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_switch_left_group() {
        let (mut groups, mut host) = setup();
        host.spawn(Position::Left, "Explorer");

        groups.open_group_index(&mut host, Position::Left, 1);

        assert_eq!(host.open_titles(Position::Left), set(&["Outline", "Tags"]));
        assert_eq!(groups.selected(Position::Left).unwrap().icon, "O");
    }

    #[test]
    fn test_handle_key_schedules_all_positions() {
        let (mut groups, mut host) = setup();
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);

        assert!(groups.handle_key(&key, None));
        assert_eq!(groups.pending(), 2);
        assert_eq!(groups.run_pending(&mut host), 2);

        assert_eq!(host.open_titles(Position::Left), set(&["Explorer"]));
        assert_eq!(host.open_titles(Position::Bottom), set(&["Terminal"]));
    }

    #[test]
    fn test_handle_key_with_position_and_layout() {
        let (mut groups, mut host) = setup();
        // 'ф' sits on the 'a' key
        let key = KeyEvent::new(KeyCode::Char('ф'), KeyModifiers::NONE);

        assert!(groups.handle_key(&key, Some(Position::Bottom)));
        groups.run_pending(&mut host);

        assert!(host.open_titles(Position::Left).is_empty());
        assert_eq!(host.open_titles(Position::Bottom), set(&["Terminal"]));
    }

    #[test]
    fn test_handle_key_ends_pick_mode() {
        let (mut groups, _) = setup();
        groups.set_pick_mode(true);
        assert_eq!(groups.labels(Position::Left)[0].pick_key.as_deref(), Some("a"));

        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert!(!groups.handle_key(&key, None));
        assert!(groups.labels(Position::Left)[0].pick_key.is_none());
    }

    #[test]
    fn test_offset_navigation() {
        let (mut groups, mut host) = setup();

        groups.open_group_offset(&mut host, Position::Left, 1);
        assert_eq!(groups.selected(Position::Left).unwrap().pick_key, "b");

        groups.open_group_offset(&mut host, Position::Left, 1);
        assert_eq!(groups.selected(Position::Left).unwrap().pick_key, "a");
        assert_eq!(host.open_titles(Position::Left), set(&["Explorer"]));
    }

    #[test]
    fn test_groups_by_key() {
        let (groups, _) = setup();
        let found: Vec<_> = groups
            .groups_by_key("a", None)
            .iter()
            .map(|m| (m.position, m.index))
            .collect();
        assert_eq!(found, vec![(Position::Left, 0), (Position::Bottom, 0)]);
    }

    #[test]
    fn test_layout_operations_reexported() {
        let (_, mut host) = setup();

        open_views_by_titles(&mut host, Position::Left, &["Tags"]);
        assert!(is_one_window_open(&host, Position::Left, &["Tags"]));

        close_views_by_titles(&mut host, Position::Left, &["Tags"]);
        assert!(!is_one_window_open(&host, Position::Left, &["Tags"]));
    }

    // The only test installing the global logger; it lives for the whole test binary.
    #[test]
    fn test_init_logging_records_activation_failure() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("edgegroups.log");
        let mut config = Config::validate_content(CONFIG).unwrap();
        config.logging.file_path = Some(log_path.to_string_lossy().into_owned());
        config.logging.min_level = "debug".to_string();
        EdgeGroups::init_logging(&config).unwrap();

        let (mut groups, mut host) = setup();
        host.fail_command("Outline");
        groups.open_group_index(&mut host, Position::Left, 1);

        let entries = edgegroups_logger::get_entries();
        assert!(entries.iter().any(|e| e.level == log::Level::Warn
            && e.message.contains("Failed to open Outline at left")));
        assert!(std::fs::read_to_string(&log_path)
            .unwrap()
            .contains("Failed to open Outline"));
        assert!(EdgeGroups::init_logging(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, CONFIG).unwrap();

        let groups = EdgeGroups::load_from(&path).unwrap();

        assert_eq!(groups.registry().get(Position::Left).unwrap().len(), 2);
        assert!(groups.selected(Position::Top).is_none());
    }

    #[test]
    fn test_load_from_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[[groups.left]]\npick_key = \"\"\n").unwrap();

        assert!(EdgeGroups::load_from(&path).is_err());
    }
}
