use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use tempfile::TempDir;
use tracing::{debug, warn};

const REMOVE_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_millis(100);

/// Temporary working directory that is removed on drop, on every exit path.
///
/// Removal clears read-only permission bits first (git pack files are written
/// read-only) and retries a few times. Failures are logged, never raised.
#[derive(Debug)]
pub struct ScratchDir {
    dir: Option<TempDir>,
    path: PathBuf,
}

impl ScratchDir {
    pub fn new(prefix: &str) -> io::Result<Self> {
        let dir = tempfile::Builder::new().prefix(prefix).tempdir()?;
        let path = dir.path().to_path_buf();
        debug!("created scratch dir {}", path.display());
        Ok(Self {
            dir: Some(dir),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let Some(dir) = self.dir.take() else {
            return;
        };
        clear_readonly(&self.path);
        let Err(e) = dir.close() else {
            debug!("removed scratch dir {}", self.path.display());
            return;
        };
        debug!("first removal of {} failed: {e}", self.path.display());

        for attempt in 1..=REMOVE_ATTEMPTS {
            thread::sleep(RETRY_DELAY * attempt);
            clear_readonly(&self.path);
            match fs::remove_dir_all(&self.path) {
                Ok(()) => return,
                Err(e) if e.kind() == io::ErrorKind::NotFound => return,
                Err(e) if attempt == REMOVE_ATTEMPTS => {
                    warn!(
                        "failed to remove scratch dir {} after {attempt} retries: {e}",
                        self.path.display()
                    );
                }
                Err(_) => {}
            }
        }
    }
}

/// Best-effort recursive removal of read-only bits below (and including) `root`.
pub fn clear_readonly(root: &Path) {
    let Ok(meta) = fs::symlink_metadata(root) else {
        return;
    };
    make_writable(root, &meta);
    if !meta.is_dir() {
        return;
    }
    let Ok(entries) = fs::read_dir(root) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        match entry.metadata() {
            Ok(m) if m.is_dir() => clear_readonly(&path),
            Ok(m) if !m.file_type().is_symlink() => make_writable(&path, &m),
            _ => {}
        }
    }
}

fn make_writable(path: &Path, meta: &fs::Metadata) {
    let mut perms = meta.permissions();
    if !perms.readonly() {
        return;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        perms.set_mode(perms.mode() | 0o200);
    }
    #[cfg(not(unix))]
    {
        #[allow(clippy::permissions_set_readonly_false)]
        perms.set_readonly(false);
    }
    if let Err(e) = fs::set_permissions(path, perms) {
        debug!("could not clear read-only flag on {}: {e}", path.display());
    }
}
