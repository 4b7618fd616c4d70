use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

const RECORD_SIZE: usize = 8;

/// Append-only log of request timestamps, one 8-byte big-endian `i64`
/// per record. No header, no framing; a torn trailing record is dropped
/// on read. The file is the source of truth for restart recovery and is
/// never compacted.
pub struct EventLog {
    path: PathBuf,
}

impl EventLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one timestamp. Each call is its own open/write/close cycle;
    /// the handle is released on every exit path.
    pub fn append(&self, timestamp: i64) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        file.write_all(&timestamp.to_be_bytes())
    }

    /// Read every decodable record in file order. A missing file is an
    /// empty history, not an error. Any other error stops the read early
    /// and keeps whatever was decoded so far.
    pub fn read_all(&self) -> Vec<i64> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                tracing::error!("error opening {} for recovery: {}", self.path.display(), err);
                return Vec::new();
            }
        };

        let mut timestamps = Vec::new();
        let mut record = [0u8; RECORD_SIZE];
        loop {
            match file.read_exact(&mut record) {
                Ok(()) => timestamps.push(i64::from_be_bytes(record)),
                // short trailing record (killed mid-write) ends the log
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(err) => {
                    tracing::error!(
                        "error reading {}, keeping {} recovered records: {}",
                        self.path.display(),
                        timestamps.len(),
                        err
                    );
                    break;
                }
            }
        }
        timestamps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_empty() {
        let dir = tempdir().unwrap();
        let log = EventLog::new(dir.path().join("nothing.bin"));
        assert!(log.read_all().is_empty());
    }

    #[test]
    fn appends_are_read_back_in_order() {
        let dir = tempdir().unwrap();
        let log = EventLog::new(dir.path().join("requests.bin"));

        log.append(1_700_000_000).unwrap();
        log.append(1_700_000_000).unwrap();
        log.append(1_700_000_042).unwrap();

        assert_eq!(
            log.read_all(),
            vec![1_700_000_000, 1_700_000_000, 1_700_000_042]
        );
    }

    #[test]
    fn torn_trailing_record_is_dropped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("requests.bin");
        let log = EventLog::new(&path);

        log.append(100).unwrap();
        log.append(200).unwrap();

        // simulate a crash partway through the third write
        let mut file = OpenOptions::new().append(true).open(&path).unwrap();
        file.write_all(&[0xde, 0xad, 0xbe]).unwrap();
        drop(file);

        assert_eq!(log.read_all(), vec![100, 200]);
    }
}
