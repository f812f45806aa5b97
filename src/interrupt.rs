use crate::error::{ChRot13Error, Result};
use crate::status::{format_status, StatusKind, StatusStyle};
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::iterator::Signals;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Message printed when the user cancels the run
pub const CANCELLED: &str = "Operation cancelled by user";

/// How long the run may take to notice a cancellation before the watcher ends the process
const GRACE_PERIOD: Duration = Duration::from_millis(250);

#[derive(Debug, Default)]
struct Inner {
    cancelled: AtomicBool,
    acknowledged: AtomicBool,
    staged: Mutex<Option<PathBuf>>,
}

/// Shared cancellation state
///
/// Set by the signal watcher, checked by the run between the read,
/// transform and write steps. A staging file registered with
/// [`Cancellation::track_staged`] is removed as soon as cancellation starts.
#[derive(Debug, Clone, Default)]
pub struct Cancellation {
    inner: Arc<Inner>,
}

impl Cancellation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation and discard any staged output
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::SeqCst);
        if let Some(path) = self.take_staged() {
            let _ = std::fs::remove_file(&path);
            tracing::debug!(path = %path.display(), "staged output discarded");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// `Err(Interrupted)` once cancellation has been requested
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            self.inner.acknowledged.store(true, Ordering::SeqCst);
            return Err(ChRot13Error::Interrupted);
        }
        Ok(())
    }

    /// Whether the run has seen the cancellation and is unwinding on its own
    pub fn is_acknowledged(&self) -> bool {
        self.inner.acknowledged.load(Ordering::SeqCst)
    }

    /// Register (or clear, with `None`) the staging file of an in-progress write
    pub fn track_staged(&self, path: Option<PathBuf>) {
        if let Ok(mut staged) = self.inner.staged.lock() {
            *staged = path;
        }
    }

    fn take_staged(&self) -> Option<PathBuf> {
        self.inner.staged.lock().ok().and_then(|mut staged| staged.take())
    }
}

/// Install handlers for SIGINT (Ctrl-C) and SIGTERM
///
/// A signal marks `cancellation` and removes any staged output. The run
/// then gets a short grace period to return `Interrupted` by itself; if it
/// is still blocked (for example on a read), the watcher prints the notice
/// and ends the process with status 0.
pub fn install_interrupt_handler(cancellation: Cancellation, style: StatusStyle) -> Result<()> {
    let mut signals = Signals::new([SIGINT, SIGTERM])
        .map_err(|e| ChRot13Error::Unexpected(format!("cannot install signal handler: {}", e)))?;

    thread::spawn(move || {
        #[allow(clippy::never_loop)]
        for sig in signals.forever() {
            tracing::debug!(signal = sig, "interrupt received");
            cancellation.cancel();
            thread::sleep(GRACE_PERIOD);
            if cancellation.is_acknowledged() {
                // main reports and exits on its own
                return;
            }
            eprintln!();
            eprintln!("{}", format_status(StatusKind::Info, CANCELLED, style));
            std::process::exit(0);
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_check_before_and_after_cancel() {
        let cancellation = Cancellation::new();
        assert!(cancellation.check().is_ok());
        assert!(!cancellation.is_acknowledged());

        cancellation.cancel();
        assert!(cancellation.is_cancelled());
        assert!(matches!(cancellation.check(), Err(ChRot13Error::Interrupted)));
        assert!(cancellation.is_acknowledged());
    }

    #[test]
    fn test_cancel_removes_staged_file() {
        let dir = tempdir().unwrap();
        let staged = dir.path().join(".tmpstaged");
        std::fs::write(&staged, "half written").unwrap();

        let cancellation = Cancellation::new();
        let watcher_side = cancellation.clone();
        cancellation.track_staged(Some(staged.clone()));
        watcher_side.cancel();

        assert!(!staged.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_cleared_staging_is_left_alone() {
        let dir = tempdir().unwrap();
        let done = dir.path().join("out.txt");
        std::fs::write(&done, "complete").unwrap();

        let cancellation = Cancellation::new();
        cancellation.track_staged(Some(done.clone()));
        cancellation.track_staged(None);
        cancellation.cancel();

        assert!(done.exists());
    }
}
