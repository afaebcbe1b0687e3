//! Title-based view selection.

use edgegroups_core::View;

/// Select the views whose title is in `titles`.
///
/// Output follows the order of `titles`, not of `views`; for each title every
/// matching view is appended in input order. Close and open sequences rely on
/// this for predictable window stacking.
pub fn filter_by_titles<S: AsRef<str>>(views: &[View], titles: &[S]) -> Vec<View> {
    titles
        .iter()
        .flat_map(|title| {
            views
                .iter()
                .filter(move |view| view.title == title.as_ref())
                .cloned()
        })
        .collect()
}
