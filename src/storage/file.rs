use super::{StorageBackend, StorageError};
use std::fs;
use std::path::PathBuf;

/// One `<key>.json` file per key under a data directory. Writes go to a
/// temp file first and are renamed into place, so a crash mid-write leaves
/// the previous blob intact. Two processes sharing the same directory race
/// last-writer-wins, same as two browser tabs on one localStorage.
#[derive(Debug)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn open(dir: impl AsRef<std::path::Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|source| StorageError::Write {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn write(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        let wrap = |source| StorageError::Write {
            key: key.to_string(),
            source,
        };
        fs::write(&tmp, blob).map_err(wrap)?;
        fs::rename(&tmp, self.path_for(key)).map_err(wrap)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();
        assert!(backend.read("ct_jobs").unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::open(dir.path()).unwrap();
        backend.write("ct_jobs", "[1,2,3]").unwrap();
        assert_eq!(backend.read("ct_jobs").unwrap().as_deref(), Some("[1,2,3]"));

        backend.write("ct_jobs", "[]").unwrap();
        assert_eq!(backend.read("ct_jobs").unwrap().as_deref(), Some("[]"));
    }
}
