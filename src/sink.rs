use crate::error::{ChRot13Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use crate::interrupt::Cancellation;
use tempfile::{Builder, NamedTempFile};

/// Where the transformed text goes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Sink {
    #[default]
    Stdout,
    File(PathBuf),
}

impl Sink {
    pub fn from_output(output: Option<&Path>) -> Self {
        match output {
            Some(path) => Self::File(path.to_path_buf()),
            None => Self::Stdout,
        }
    }

    /// Write `text` to the sink
    /// `stdout` is only used for [`Sink::Stdout`]
    pub fn write<W: Write>(
        &self,
        text: &str,
        mut stdout: W,
        cancellation: &Cancellation,
    ) -> Result<()> {
        match self {
            Self::Stdout => {
                stdout
                    .write_all(text.as_bytes())
                    .and_then(|_| stdout.flush())
                    .map_err(|e| ChRot13Error::from_io("<stdout>", e))
            }
            Self::File(path) => write_atomic(path, text, cancellation),
        }
    }
}

/// Bytes written to the staging file between cancellation checks
const CHUNK_SIZE: usize = 64 * 1024;

/// Replace `path` with `text` in one step
/// The text is staged in a temporary file beside the target and renamed over it,
/// so the target is either fully written or left as it was
fn write_atomic(path: &Path, text: &str, cancellation: &Cancellation) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = std::fs::metadata(path).ok();
    let mut builder = Builder::new();
    if existing.is_none() {
        // Same mode a plain File::create would give (0o666 minus umask)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }
    }
    let mut staged = builder
        .tempfile_in(dir)
        .map_err(|e| ChRot13Error::from_io(path, e))?;
    cancellation.track_staged(Some(staged.path().to_path_buf()));

    let result = fill_staged(&mut staged, existing.as_ref(), text, cancellation, path)
        .and_then(|_| {
            staged
                .persist(path)
                .map_err(|e| ChRot13Error::from_io(path, e.error))
        });
    cancellation.track_staged(None);
    result?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "output persisted");
    Ok(())
}

fn fill_staged(
    staged: &mut NamedTempFile,
    existing: Option<&std::fs::Metadata>,
    text: &str,
    cancellation: &Cancellation,
    path: &Path,
) -> Result<()> {
    if let Some(existing) = existing {
        staged
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| ChRot13Error::from_io(path, e))?;
    }
    for chunk in text.as_bytes().chunks(CHUNK_SIZE) {
        cancellation.check()?;
        staged
            .write_all(chunk)
            .map_err(|e| ChRot13Error::from_io(path, e))?;
    }
    staged
        .as_file()
        .sync_all()
        .map_err(|e| ChRot13Error::from_io(path, e))?;
    cancellation.check()
}
