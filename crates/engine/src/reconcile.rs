//! Reconciliation of an edgebar against a target group.

use std::collections::HashSet;

use edgegroups_core::{Editor, Host, Position};
use edgegroups_groups::{Group, GroupRegistry};
use edgegroups_layout::{close_views_by_titles, is_one_window_open, open_views_by_titles};

/// Distinct titles of edgebar windows at `position`, in host window order.
pub fn current_titles(host: &dyn Host, position: Position) -> Vec<String> {
    let mut seen = HashSet::new();
    host.edgebar_windows()
        .into_iter()
        .filter(|w| w.position == position)
        .filter_map(|w| seen.insert(w.title.clone()).then_some(w.title))
        .collect()
}

fn lookup(registry: &GroupRegistry, position: Position, index: usize) -> Option<&Group> {
    let group = registry.get(position).and_then(|groups| groups.get(index));
    if group.is_none() {
        log::debug!("No group {} at {}", index, position);
    }
    group
}

/// Make `position` show exactly the panels of group `index`.
///
/// Titles open at the position but not in the group are closed, then the
/// group's titles are opened. Panels already open and in the group are left
/// alone. The group becomes the selected one. Unknown positions or indices
/// are a no-op.
pub fn open_group_index(
    registry: &mut GroupRegistry,
    host: &mut dyn Host,
    position: Position,
    index: usize,
) {
    let Some(group) = lookup(registry, position, index) else {
        return;
    };
    let titles = group.titles.clone();

    let wanted: HashSet<&str> = titles.iter().map(String::as_str).collect();
    let close_titles: Vec<String> = current_titles(host, position)
        .into_iter()
        .filter(|title| !wanted.contains(title.as_str()))
        .collect();

    log::debug!(
        "Reconciling {} to group {}: close {:?}, open {:?}",
        position,
        index,
        close_titles,
        titles
    );

    close_views_by_titles(host, position, &close_titles);
    open_views_by_titles(host, position, &titles);

    if let Some(groups) = registry.get_mut(position) {
        groups.select(index);
    }
}

/// Reconcile to the group `offset` steps from the selected one, wrapping.
pub fn open_group_offset(
    registry: &mut GroupRegistry,
    host: &mut dyn Host,
    position: Position,
    offset: isize,
) {
    let Some(index) = registry
        .get(position)
        .and_then(|groups| groups.offset_index(offset))
    else {
        log::debug!("No groups at {}", position);
        return;
    };
    open_group_index(registry, host, position, index);
}

/// Whether the group has an open window and nothing else is open at its position.
///
/// Pinned windows outside the group are ignored: closing only hides them, so
/// they stay valid after the group that displaced them was opened.
pub fn is_group_only_open(host: &dyn Host, group: &Group) -> bool {
    if !is_one_window_open(host, group.position, &group.titles) {
        return false;
    }
    host.edgebar_windows()
        .iter()
        .filter(|w| w.position == group.position && host.is_valid(w.window))
        .filter(|w| !group.titles.contains(&w.title))
        .all(|w| host.is_pinned(w.window))
}

/// Close group `index` when it is the only thing open, otherwise reconcile to it.
pub fn toggle_group_index(
    registry: &mut GroupRegistry,
    host: &mut dyn Host,
    position: Position,
    index: usize,
) {
    let Some(group) = lookup(registry, position, index) else {
        return;
    };

    if is_group_only_open(host, group) {
        let titles = group.titles.clone();
        log::debug!("Toggling off group {} at {}", index, position);
        close_views_by_titles(host, position, &titles);
    } else {
        open_group_index(registry, host, position, index);
    }
}
