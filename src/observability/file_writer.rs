//! Rotating log file writer with size-based rotation.
//!
//! Implements the writer side of the tracing pipeline: log lines are appended
//! to a file under the plugin data directory, and the file rotates once it
//! exceeds a size limit, keeping a fixed number of numbered backups
//! (`snackbar.log.1` is the most recent backup).

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::fmt::MakeWriter;

/// A size-rotating append writer for the plugin log file.
///
/// Every write checks the current file size and rotates first when the write
/// would push it past `max_size`. Rotation shifts `log.N` to `log.N+1`,
/// dropping the oldest backup, then moves the live file to `log.1`.
#[derive(Debug, Clone)]
pub struct RotatingFileWriter {
    /// Path of the live log file.
    path: PathBuf,
    /// Size threshold in bytes that triggers rotation.
    max_size: u64,
    /// Number of numbered backups retained after rotation.
    backups: usize,
}

impl RotatingFileWriter {
    /// Creates a writer for the given log path.
    #[must_use]
    pub const fn new(path: PathBuf, max_size: u64, backups: usize) -> Self {
        Self {
            path,
            max_size,
            backups,
        }
    }

    /// Returns the path of the numbered backup file.
    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    /// Shifts backups up by one and moves the live file to `.1`.
    ///
    /// Rotation failures are swallowed: observability must never take the
    /// plugin down, and a failed rename simply means the live file keeps
    /// growing until the next attempt.
    fn rotate(&self) {
        let oldest = self.backup_path(self.backups);
        let _ = fs::remove_file(&oldest);

        for index in (1..self.backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                let _ = fs::rename(&from, self.backup_path(index + 1));
            }
        }

        let _ = fs::rename(&self.path, self.backup_path(1));
    }

    /// Returns whether appending `incoming` bytes would exceed the size limit.
    fn needs_rotation(&self, incoming: usize) -> bool {
        fs::metadata(&self.path)
            .map(|meta| meta.len() + incoming as u64 > self.max_size)
            .unwrap_or(false)
    }
}

impl Write for RotatingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.needs_rotation(buf.len()) {
            self.rotate();
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for RotatingFileWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_across_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snackbar.log");
        let mut writer = RotatingFileWriter::new(path.clone(), 1024, 3);

        writer.write_all(b"first line\n").unwrap();
        writer.write_all(b"second line\n").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first line\nsecond line\n");
    }

    #[test]
    fn rotates_once_size_limit_is_hit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snackbar.log");
        let mut writer = RotatingFileWriter::new(path.clone(), 16, 2);

        writer.write_all(b"0123456789abcdef").unwrap();
        writer.write_all(b"next file").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "next file");
        let backup = fs::read_to_string(dir.path().join("snackbar.log.1")).unwrap();
        assert_eq!(backup, "0123456789abcdef");
    }

    #[test]
    fn drops_the_oldest_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snackbar.log");
        let mut writer = RotatingFileWriter::new(path.clone(), 4, 2);

        for chunk in [b"aaaa", b"bbbb", b"cccc", b"dddd"] {
            writer.write_all(chunk).unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "dddd");
        assert_eq!(fs::read_to_string(writer.backup_path(1)).unwrap(), "cccc");
        assert_eq!(fs::read_to_string(writer.backup_path(2)).unwrap(), "bbbb");
        assert!(!writer.backup_path(3).exists());
    }
}
