use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use wordfreq_core::{render_counts, WordCount};

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not a directory: {}", .0.display())]
    OutputDir(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Writes content to a target file, replacing whatever it held.
///
/// An existing regular file is replaced atomically: a temp file in the same
/// directory takes the old file's permissions and is renamed over it. A
/// missing target is created in place (honoring the umask) and removed again
/// if the write fails. Anything else, such as a symlink or a device, is opened
/// and truncated like a plain `File::create`.
pub struct AtomicFileWriter {
    target: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(target: PathBuf) -> Self {
        Self { target }
    }

    pub fn write(&self, content: &str) -> Result<PathBuf, PersistError> {
        let dir = parent_dir(&self.target);
        if !dir.is_dir() {
            return Err(PersistError::OutputDir(dir.to_path_buf()));
        }

        match fs::symlink_metadata(&self.target) {
            Ok(meta) if meta.file_type().is_file() => {
                self.replace(dir, content, meta.permissions())?
            }
            Ok(_) => write_through(&self.target, content)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => self.create(content)?,
            Err(err) => return Err(err.into()),
        }
        Ok(self.target.clone())
    }

    fn replace(
        &self,
        dir: &Path,
        content: &str,
        permissions: fs::Permissions,
    ) -> Result<(), PersistError> {
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file().set_permissions(permissions)?;
        tmp.as_file_mut().sync_all()?;
        tmp.persist(&self.target)
            .map_err(|e| PersistError::Io(e.error))?;
        Ok(())
    }

    fn create(&self, content: &str) -> Result<(), PersistError> {
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.target)?;
        if let Err(err) = write_synced(file, content) {
            let _ = fs::remove_file(&self.target);
            return Err(err.into());
        }
        Ok(())
    }
}

fn write_synced(file: File, content: &str) -> io::Result<()> {
    let mut out = BufWriter::new(file);
    out.write_all(content.as_bytes())?;
    out.flush()?;
    out.get_ref().sync_all()
}

// Follows symlinks and keeps device nodes. Not synced: character devices
// reject fsync.
fn write_through(target: &Path, content: &str) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(target)?);
    out.write_all(content.as_bytes())?;
    out.flush()
}

/// Write `entries` as `word: count` lines to `path`, replacing any existing file.
pub fn write_counts(path: &Path, entries: &[WordCount]) -> Result<PathBuf, PersistError> {
    AtomicFileWriter::new(path.to_path_buf()).write(&render_counts(entries))
}

fn parent_dir(target: &Path) -> &Path {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
