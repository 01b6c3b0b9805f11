use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A file written beside its destination and renamed into place on commit.
///
/// Dropping without `commit` removes the partial file, so readers never see a
/// truncated destination.
pub struct AtomicFile {
    dest: PathBuf,
    temp: PathBuf,
    file: Option<File>,
}

impl AtomicFile {
    pub fn create(dest: &Path) -> io::Result<Self> {
        let temp = part_path(dest);
        let file = File::create(&temp)?;
        Ok(Self {
            dest: dest.to_path_buf(),
            temp,
            file: Some(file),
        })
    }

    /// Flush, close and rename over the destination.
    ///
    /// On failure the partial file is removed and the destination is untouched.
    pub fn commit(mut self) -> io::Result<()> {
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
            file.sync_all()?;
        }
        // Closed before the rename; from here on `Drop` no longer cleans up.
        self.file = None;
        fs::rename(&self.temp, &self.dest).map_err(|e| {
            let _ = fs::remove_file(&self.temp);
            e
        })
    }
}

impl Write for AtomicFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.file.as_mut() {
            Some(f) => f.write(buf),
            None => Err(io::Error::new(io::ErrorKind::Other, "file already committed")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(f) => f.flush(),
            None => Ok(()),
        }
    }
}

impl Drop for AtomicFile {
    fn drop(&mut self) {
        if self.file.take().is_some() {
            let _ = fs::remove_file(&self.temp);
        }
    }
}

/// `<dest>.part`, keeping the original extension visible.
pub fn part_path(dest: &Path) -> PathBuf {
    let mut name: OsString = dest
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".part");
    dest.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_part_path_appends_suffix() {
        assert_eq!(
            part_path(Path::new("/tmp/out/result.json")),
            PathBuf::from("/tmp/out/result.json.part")
        );
    }

    #[test]
    fn test_commit_moves_content_into_place() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("model.bin");

        let mut file = AtomicFile::create(&dest).unwrap();
        file.write_all(b"weights").unwrap();
        assert!(!dest.exists());
        file.commit().unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"weights");
        assert!(!part_path(&dest).exists());
    }

    #[test]
    fn test_drop_without_commit_leaves_nothing() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("transcript.json");

        {
            let mut file = AtomicFile::create(&dest).unwrap();
            file.write_all(b"{\"half\":").unwrap();
        }

        assert!(!dest.exists());
        assert!(!part_path(&dest).exists());
    }

    #[test]
    fn test_failed_commit_removes_part_file() {
        let tmp = TempDir::new().unwrap();
        // A non-empty directory cannot be replaced by a file rename.
        let dest = tmp.path().join("occupied");
        fs::create_dir_all(dest.join("child")).unwrap();

        let mut file = AtomicFile::create(&dest).unwrap();
        file.write_all(b"data").unwrap();
        assert!(file.commit().is_err());

        assert!(dest.is_dir());
        assert!(!part_path(&dest).exists());
    }

    #[test]
    fn test_commit_replaces_existing_destination() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("transcript.json");
        fs::write(&dest, b"old").unwrap();

        let mut file = AtomicFile::create(&dest).unwrap();
        file.write_all(b"new").unwrap();
        file.commit().unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"new");
    }
}
