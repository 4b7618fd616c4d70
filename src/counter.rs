use std::sync::Mutex;

use chrono::Utc;

use crate::metrics::PERSIST_ERRORS;
use crate::persist::EventLog;

/// Sliding-window request counter.
///
/// Holds every observed timestamp in arrival order and lazily evicts the
/// expired prefix whenever a new request lands. Each accepted timestamp
/// is also appended to the [`EventLog`] so a restart can rebuild the
/// in-memory state.
pub struct RequestCounter {
    window_secs: i64,
    log: EventLog,
    timestamps: Mutex<Vec<i64>>,
}

impl RequestCounter {
    /// Build a counter by replaying the log. Stale entries are loaded
    /// as-is; the next recorded request trims them.
    pub fn recover(log: EventLog, window_secs: i64) -> Self {
        let timestamps = log.read_all();
        if !timestamps.is_empty() {
            tracing::info!(
                "recovered {} timestamps from {}",
                timestamps.len(),
                log.path().display()
            );
        }
        Self {
            window_secs,
            log,
            timestamps: Mutex::new(timestamps),
        }
    }

    pub fn window_secs(&self) -> i64 {
        self.window_secs
    }

    /// Record one request: trim the expired prefix, keep the timestamp in
    /// memory, append it to the log. The whole operation, disk write
    /// included, runs under one lock.
    ///
    /// A failed append is logged and counted but never surfaced; the
    /// request stays counted in memory even if it is lost to a restart.
    pub fn record(&self, timestamp: i64) {
        let mut timestamps = self.timestamps.lock().unwrap();

        let cutoff = Utc::now().timestamp() - self.window_secs;
        trim_expired(&mut timestamps, cutoff);
        timestamps.push(timestamp);

        if let Err(err) = self.log.append(timestamp) {
            PERSIST_ERRORS.inc();
            tracing::error!("error writing to persistence file: {}", err);
        }
    }

    /// Count the entries still inside the window. Fresh cutoff, fresh
    /// scan; does not depend on `record` having trimmed anything.
    pub fn count_recent(&self) -> usize {
        let timestamps = self.timestamps.lock().unwrap();
        let cutoff = Utc::now().timestamp() - self.window_secs;
        count_since(&timestamps, cutoff)
    }
}

// Drop the contiguous prefix older than the cutoff. When every entry is
// expired the scan finds no survivor and nothing is dropped; the next
// in-window arrival clears the backlog.
fn trim_expired(timestamps: &mut Vec<i64>, cutoff: i64) {
    let start = timestamps
        .iter()
        .position(|&ts| ts >= cutoff)
        .unwrap_or(0);
    timestamps.drain(..start);
}

fn count_since(timestamps: &[i64], cutoff: i64) -> usize {
    timestamps.iter().filter(|&&ts| ts >= cutoff).count()
}
