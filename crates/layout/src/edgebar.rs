//! Batch close and open of views at one edgebar.

use edgegroups_core::{Editor, Host, Layout, Position};

use crate::{activate, filter_by_titles, is_view_open};

/// Close every valid window of the views named by `titles` at `position`.
///
/// Pinned windows are hidden instead of closed. Validity is re-checked right
/// before each window is touched, since an earlier close may have taken
/// sibling windows down with it.
pub fn close_views_by_titles<S: AsRef<str>>(host: &mut dyn Host, position: Position, titles: &[S]) {
    let Some(views) = host.views(position) else {
        log::debug!("No edgebar at {}, nothing to close", position);
        return;
    };

    for view in filter_by_titles(&views, titles) {
        for window in view.windows {
            if !host.is_valid(window) {
                continue;
            }
            if host.is_pinned(window) {
                host.hide(window);
            } else {
                host.close(window);
            }
        }
    }
}

/// Open the views named by `titles` at `position`, skipping open ones.
///
/// Never closes anything, so calling it repeatedly is harmless.
pub fn open_views_by_titles<S: AsRef<str>>(host: &mut dyn Host, position: Position, titles: &[S]) {
    let Some(views) = host.views(position) else {
        log::debug!("No edgebar at {}, nothing to open", position);
        return;
    };

    for view in filter_by_titles(&views, titles) {
        if is_view_open(host, &view) {
            continue;
        }
        activate(host, &view);
    }
}
