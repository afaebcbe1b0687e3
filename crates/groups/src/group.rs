//! Groups and per-position selection.

use edgegroups_config::GroupSettings;
use edgegroups_core::Position;

/// Named set of panel titles toggled as a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Status-line label
    pub icon: String,
    /// Key selecting the group
    pub pick_key: String,
    /// Panel titles, in open order
    pub titles: Vec<String>,
    /// Edgebar the group belongs to
    pub position: Position,
}

impl Group {
    /// Create group without icon.
    pub fn new<S: Into<String>>(
        position: Position,
        pick_key: impl Into<String>,
        titles: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            icon: String::new(),
            pick_key: pick_key.into(),
            titles: titles.into_iter().map(Into::into).collect(),
            position,
        }
    }

    /// Build group from its configuration entry.
    pub fn from_settings(position: Position, settings: &GroupSettings) -> Self {
        Self {
            icon: settings.icon.clone(),
            pick_key: settings.pick_key.clone(),
            titles: settings.titles.clone(),
            position,
        }
    }
}

/// Groups of one position with the selected index (0-based).
#[derive(Debug, Clone, Default)]
pub struct IndexedGroups {
    groups: Vec<Group>,
    selected: usize,
}

impl IndexedGroups {
    /// Create with the first group selected.
    pub fn new(groups: Vec<Group>) -> Self {
        Self {
            groups,
            selected: 0,
        }
    }

    /// Get number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Get group by index.
    pub fn get(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)
    }

    /// Get reference to groups.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Get selected group index.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Get selected group.
    pub fn selected(&self) -> Option<&Group> {
        self.groups.get(self.selected)
    }

    /// Set selected group by index. Out of range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.groups.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Index `offset` steps away from the selection, wrapping both ways.
    pub fn offset_index(&self, offset: isize) -> Option<usize> {
        if self.groups.is_empty() {
            return None;
        }
        let len = self.groups.len() as isize;
        Some((self.selected as isize + offset).rem_euclid(len) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> IndexedGroups {
        IndexedGroups::new(vec![
            Group::new(Position::Left, "a", ["Explorer"]),
            Group::new(Position::Left, "b", ["Outline", "Tags"]),
            Group::new(Position::Left, "c", ["Search"]),
        ])
    }

    #[test]
    fn test_new_selects_first() {
        let groups = three();
        assert_eq!(groups.selected_index(), 0);
        assert_eq!(groups.selected().unwrap().pick_key, "a");
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut groups = three();
        assert!(groups.select(2));
        assert!(!groups.select(3));
        assert_eq!(groups.selected_index(), 2);
    }

    #[test]
    fn test_offset_index_wraps() {
        let mut groups = three();
        assert_eq!(groups.offset_index(1), Some(1));
        assert_eq!(groups.offset_index(-1), Some(2));
        assert_eq!(groups.offset_index(4), Some(1));

        groups.select(2);
        assert_eq!(groups.offset_index(1), Some(0));
        assert_eq!(groups.offset_index(-5), Some(0));
    }

    #[test]
    fn test_offset_index_empty() {
        let groups = IndexedGroups::default();
        assert_eq!(groups.offset_index(1), None);
        assert!(groups.selected().is_none());
    }

    #[test]
    fn test_from_settings() {
        let settings = GroupSettings {
            icon: "T".to_string(),
            pick_key: "t".to_string(),
            titles: vec!["Terminal".to_string()],
        };
        let group = Group::from_settings(Position::Bottom, &settings);
        assert_eq!(group.icon, "T");
        assert_eq!(group.titles, vec!["Terminal"]);
        assert_eq!(group.position, Position::Bottom);
    }
}
