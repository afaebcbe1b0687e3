//! Per-position group registry.

use std::collections::BTreeMap;

use edgegroups_config::GroupsSettings;
use edgegroups_core::Position;

use crate::{Group, IndexedGroups};

/// A group found by key lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupMatch<'a> {
    pub position: Position,
    pub index: usize,
    pub group: &'a Group,
}

/// Status-line data for one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupLabel {
    /// Group icon
    pub icon: String,
    /// Pick key, reported only while pick mode is active
    pub pick_key: Option<String>,
    /// Whether this is the selected group of its position
    pub selected: bool,
}

/// Groups of every position plus their selection state.
///
/// Owned by the setup object and passed to navigation calls; there is no
/// global instance.
#[derive(Debug, Clone, Default)]
pub struct GroupRegistry {
    positions: BTreeMap<Position, IndexedGroups>,
    pick_mode: bool,
}

impl GroupRegistry {
    /// Create empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build registry from configured groups, keeping config order.
    pub fn from_settings(settings: &GroupsSettings) -> Self {
        let mut registry = Self::new();
        for (position, groups) in settings.iter() {
            let groups = groups
                .iter()
                .map(|group| Group::from_settings(position, group))
                .collect();
            registry.insert(position, groups);
        }
        registry
    }

    /// Replace the groups of a position. An empty list removes the position.
    pub fn insert(&mut self, position: Position, groups: Vec<Group>) {
        if groups.is_empty() {
            self.positions.remove(&position);
        } else {
            self.positions.insert(position, IndexedGroups::new(groups));
        }
    }

    /// Get groups of a position.
    pub fn get(&self, position: Position) -> Option<&IndexedGroups> {
        self.positions.get(&position)
    }

    /// Get mutable groups of a position.
    pub fn get_mut(&mut self, position: Position) -> Option<&mut IndexedGroups> {
        self.positions.get_mut(&position)
    }

    /// Positions with groups, in scan order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.keys().copied()
    }

    /// Selected group of a position.
    pub fn selected(&self, position: Position) -> Option<&Group> {
        self.get(position).and_then(IndexedGroups::selected)
    }

    /// All groups whose pick key equals `key`, optionally at one position only.
    pub fn groups_by_key(&self, key: &str, position: Option<Position>) -> Vec<GroupMatch<'_>> {
        self.positions
            .iter()
            .filter(|(pos, _)| position.map_or(true, |p| p == **pos))
            .flat_map(|(pos, indexed)| {
                indexed
                    .groups()
                    .iter()
                    .enumerate()
                    .filter(move |(_, group)| group.pick_key == key)
                    .map(move |(index, group)| GroupMatch {
                        position: *pos,
                        index,
                        group,
                    })
            })
            .collect()
    }

    /// Enable or disable pick mode for status-line labels.
    pub fn set_pick_mode(&mut self, enabled: bool) {
        self.pick_mode = enabled;
    }

    /// Whether pick mode is active.
    pub fn pick_mode(&self) -> bool {
        self.pick_mode
    }

    /// Status-line labels for a position, in group order.
    pub fn labels(&self, position: Position) -> Vec<GroupLabel> {
        let Some(indexed) = self.get(position) else {
            return Vec::new();
        };
        indexed
            .groups()
            .iter()
            .enumerate()
            .map(|(index, group)| GroupLabel {
                icon: group.icon.clone(),
                pick_key: self.pick_mode.then(|| group.pick_key.clone()),
                selected: index == indexed.selected_index(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgegroups_config::GroupSettings;

    fn registry() -> GroupRegistry {
        let mut registry = GroupRegistry::new();
        registry.insert(
            Position::Left,
            vec![
                Group::new(Position::Left, "a", ["Explorer"]),
                Group::new(Position::Left, "b", ["Outline", "Tags"]),
            ],
        );
        registry.insert(
            Position::Bottom,
            vec![Group::new(Position::Bottom, "a", ["Terminal"])],
        );
        registry
    }

    fn found(matches: &[GroupMatch<'_>]) -> Vec<(Position, usize)> {
        matches.iter().map(|m| (m.position, m.index)).collect()
    }

    #[test]
    fn test_groups_by_key_across_positions() {
        let registry = registry();
        let matches = registry.groups_by_key("a", None);
        assert_eq!(
            found(&matches),
            vec![(Position::Left, 0), (Position::Bottom, 0)]
        );
    }

    #[test]
    fn test_groups_by_key_filtered() {
        let registry = registry();
        let matches = registry.groups_by_key("a", Some(Position::Bottom));
        assert_eq!(found(&matches), vec![(Position::Bottom, 0)]);
        assert_eq!(matches[0].group.titles, vec!["Terminal"]);
    }

    #[test]
    fn test_groups_by_key_unknown() {
        let registry = registry();
        assert!(registry.groups_by_key("z", None).is_empty());
        assert!(registry.groups_by_key("b", Some(Position::Top)).is_empty());
    }

    #[test]
    fn test_selected() {
        let mut registry = registry();
        assert_eq!(registry.selected(Position::Left).unwrap().pick_key, "a");
        registry.get_mut(Position::Left).unwrap().select(1);
        assert_eq!(registry.selected(Position::Left).unwrap().pick_key, "b");
        assert!(registry.selected(Position::Right).is_none());
    }

    #[test]
    fn test_insert_empty_removes_position() {
        let mut registry = registry();
        registry.insert(Position::Bottom, Vec::new());
        assert_eq!(registry.positions().collect::<Vec<_>>(), vec![Position::Left]);
    }

    #[test]
    fn test_labels_show_pick_keys_in_pick_mode() {
        let mut registry = registry();
        let labels = registry.labels(Position::Left);
        assert!(labels[0].selected);
        assert!(!labels[1].selected);
        assert!(labels.iter().all(|l| l.pick_key.is_none()));

        registry.set_pick_mode(true);
        let labels = registry.labels(Position::Left);
        assert_eq!(labels[1].pick_key.as_deref(), Some("b"));
        assert!(registry.labels(Position::Top).is_empty());
    }

    #[test]
    fn test_from_settings_keeps_order() {
        let settings = GroupsSettings {
            right: vec![
                GroupSettings {
                    icon: String::new(),
                    pick_key: "x".to_string(),
                    titles: vec!["Tags".to_string()],
                },
                GroupSettings {
                    icon: String::new(),
                    pick_key: "y".to_string(),
                    titles: vec!["Symbols".to_string()],
                },
            ],
            ..Default::default()
        };

        let registry = GroupRegistry::from_settings(&settings);
        let right = registry.get(Position::Right).unwrap();
        assert_eq!(right.len(), 2);
        assert_eq!(right.get(1).unwrap().pick_key, "y");
        assert_eq!(right.get(1).unwrap().position, Position::Right);
        assert!(registry.get(Position::Left).is_none());
    }
}
