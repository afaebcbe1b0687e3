//! Read-only window state probes.

use edgegroups_core::{Editor, Host, Layout, Position, View};

use crate::filter_by_titles;

/// Whether at least one window of the view is valid.
pub fn is_view_open(host: &dyn Host, view: &View) -> bool {
    view.windows.iter().any(|window| host.is_valid(*window))
}

/// Whether any view with one of `titles` has a valid window at `position`.
pub fn is_one_window_open<S: AsRef<str>>(host: &dyn Host, position: Position, titles: &[S]) -> bool {
    let Some(views) = host.views(position) else {
        return false;
    };
    filter_by_titles(&views, titles)
        .iter()
        .any(|view| is_view_open(host, view))
}
