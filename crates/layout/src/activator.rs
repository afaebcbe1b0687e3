//! Single-view activation.

use std::panic::{self, AssertUnwindSafe};

use anyhow::{anyhow, Result};

use edgegroups_core::{Editor, Host, OpenAction, View};

/// Run `f`, turning both errors and panics into an `Err`.
fn protected<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        let reason = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Err(anyhow!("open action panicked: {}", reason))
    })
}

/// Open a view through its open action.
///
/// Failures are logged and dropped so sibling activations keep going. A
/// panicking action is stopped here, but the process panic hook still runs
/// and by default prints the message to stderr. Hosts drawing to the
/// terminal should install their own hook with `std::panic::set_hook`.
pub fn activate(host: &mut dyn Host, view: &View) {
    let result = match &view.open {
        OpenAction::Callable(open) => protected(|| (**open)(host)),
        OpenAction::Command(name) => protected(|| host.dispatch_command(name)),
    };

    match result {
        Ok(()) => log::debug!("Opened {} at {}", view.title, view.position),
        Err(e) => log::warn!("Failed to open {} at {}: {:#}", view.title, view.position, e),
    }
}
