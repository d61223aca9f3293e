//! Daily JSON-lines publishing journal.
//!
//! Each event is one line of `{timestamp, event, data, level}` in
//! `{dir}/publishing-YYYY-MM-DD.log`, dated in UTC.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

use super::tracing_event_log::emit;
use crate::domain::models::{EventEntry, EventLevel};
use crate::domain::ports::EventLog;

const FILE_PREFIX: &str = "publishing-";
const FILE_SUFFIX: &str = ".log";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Size and entry count of today's journal file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventLogStats {
    pub current_file: String,
    pub size: u64,
    pub entries: usize,
}

/// Journal writing one file per UTC day.
#[derive(Clone)]
pub struct FileEventLog {
    dir: PathBuf,
    current: Arc<Mutex<Option<(NaiveDate, File)>>>,
}

impl FileEventLog {
    /// Open a journal in `dir`, creating the directory if needed.
    pub async fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("failed to create event log directory {}", dir.display()))?;

        Ok(Self {
            dir,
            current: Arc::new(Mutex::new(None)),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name used for `date`.
    pub fn file_name(date: NaiveDate) -> String {
        format!("{FILE_PREFIX}{}{FILE_SUFFIX}", date.format(DATE_FORMAT))
    }

    fn parse_file_name(name: &str) -> Option<NaiveDate> {
        let date = name.strip_prefix(FILE_PREFIX)?.strip_suffix(FILE_SUFFIX)?;
        NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    fn write_entry(&self, entry: &EventEntry) -> Result<()> {
        let line = serde_json::to_string(entry).context("failed to serialize event")?;
        let date = entry.timestamp.date_naive();

        let mut current = self
            .current
            .lock()
            .map_err(|e| anyhow::anyhow!("event log mutex poisoned: {e}"))?;

        if current.as_ref().map(|(d, _)| *d) != Some(date) {
            let path = self.dir.join(Self::file_name(date));
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            *current = Some((date, file));
        }

        if let Some((_, file)) = current.as_mut() {
            writeln!(file, "{line}").context("failed to write event")?;
            file.flush().context("failed to flush event log")?;
        }

        Ok(())
    }

    /// Entries from the file for `date` (today when `None`).
    ///
    /// A missing file yields no entries; malformed lines are skipped.
    pub async fn read_entries(&self, date: Option<NaiveDate>) -> Result<Vec<EventEntry>> {
        let path = self
            .dir
            .join(Self::file_name(date.unwrap_or_else(Self::today)));

        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()));
            }
        };

        Ok(contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match serde_json::from_str(line) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!(error = %e, "skipping malformed event log line");
                    None
                }
            })
            .collect())
    }

    /// Delete journal files dated more than `days` days ago, returning how
    /// many were removed. Files that do not follow the naming scheme are
    /// left alone.
    pub async fn clean_old(&self, days: u32) -> Result<usize> {
        let today = Self::today();
        let mut removed = 0;

        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .with_context(|| format!("failed to list {}", self.dir.display()))?;

        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let Some(date) = name.to_str().and_then(Self::parse_file_name) else {
                continue;
            };

            if (today - date).num_days() > i64::from(days) {
                tokio::fs::remove_file(entry.path())
                    .await
                    .with_context(|| format!("failed to remove {}", entry.path().display()))?;
                info!(file = ?name, "removed old event log");
                removed += 1;
            }
        }

        Ok(removed)
    }

    /// Statistics for today's file. A missing file reports zero size.
    pub async fn stats(&self) -> Result<EventLogStats> {
        let current_file = Self::file_name(Self::today());
        let path = self.dir.join(&current_file);

        let size = match tokio::fs::metadata(&path).await {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(EventLogStats {
                    current_file,
                    size: 0,
                    entries: 0,
                });
            }
            Err(e) => return Err(e).with_context(|| format!("failed to stat {}", path.display())),
        };

        let entries = self.read_entries(None).await?.len();
        Ok(EventLogStats {
            current_file,
            size,
            entries,
        })
    }
}

#[async_trait]
impl EventLog for FileEventLog {
    async fn record(&self, event: &str, data: Value, level: EventLevel) {
        emit(event, &data, level);

        let entry = EventEntry::now(event, data, level);
        if let Err(e) = self.write_entry(&entry) {
            warn!(event, error = %e, "failed to write event log entry");
        }
    }
}
