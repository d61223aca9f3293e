//! Publishing event journal commands.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{Config, EventEntry};
use crate::infrastructure::event_log::{EventLogStats, FileEventLog};

#[derive(Args, Debug)]
pub struct LogsArgs {
    #[command(subcommand)]
    pub command: LogsCommands,
}

#[derive(Subcommand, Debug)]
pub enum LogsCommands {
    /// List journal entries for a day
    List {
        /// Day to read (YYYY-MM-DD, UTC); defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Only show entries with this event name
        #[arg(short, long)]
        event: Option<String>,

        /// Show at most this many of the most recent entries
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show size and entry count of today's journal file
    Stats,
    /// Delete journal files older than the retention period
    Clean {
        /// Days to keep; defaults to event_log.retention_days
        #[arg(long)]
        days: Option<u32>,
    },
}

#[derive(Debug, Serialize)]
pub struct EventListOutput {
    pub date: NaiveDate,
    pub entries: Vec<EventEntry>,
}

impl CommandOutput for EventListOutput {
    fn to_human(&self) -> String {
        if self.entries.is_empty() {
            return format!("No events recorded on {}.", self.date);
        }
        format!(
            "Events on {} ({}):\n{}",
            self.date,
            self.entries.len(),
            TableFormatter::new().format_events(&self.entries)
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

impl CommandOutput for EventLogStats {
    fn to_human(&self) -> String {
        [
            "Event Journal Statistics:".to_string(),
            format!("  Current file: {}", self.current_file),
            format!("  Size:         {} bytes", self.size),
            format!("  Entries:      {}", self.entries),
        ]
        .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct CleanOutput {
    pub removed: usize,
    pub days_kept: u32,
}

impl CommandOutput for CleanOutput {
    fn to_human(&self) -> String {
        format!(
            "Removed {} journal file(s) older than {} day(s).",
            self.removed, self.days_kept
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Keep entries named `event` (when given), then the last `limit` of them.
pub fn select_entries(
    entries: Vec<EventEntry>,
    event: Option<&str>,
    limit: Option<usize>,
) -> Vec<EventEntry> {
    let mut selected: Vec<EventEntry> = entries
        .into_iter()
        .filter(|e| event.is_none_or(|name| e.event == name))
        .collect();

    if let Some(limit) = limit {
        let skip = selected.len().saturating_sub(limit);
        selected.drain(..skip);
    }

    selected
}

pub async fn execute(args: LogsArgs, config: &Config, json_mode: bool) -> Result<()> {
    let journal = FileEventLog::new(&config.event_log.dir).await?;

    match args.command {
        LogsCommands::List { date, event, limit } => {
            let date = date.unwrap_or_else(|| chrono::Utc::now().date_naive());
            let entries = journal.read_entries(Some(date)).await?;
            let out = EventListOutput {
                date,
                entries: select_entries(entries, event.as_deref(), limit),
            };
            output(&out, json_mode);
        }

        LogsCommands::Stats => {
            let stats = journal.stats().await?;
            output(&stats, json_mode);
        }

        LogsCommands::Clean { days } => {
            let days_kept = days.unwrap_or(config.event_log.retention_days);
            let removed = journal.clean_old(days_kept).await?;
            output(&CleanOutput { removed, days_kept }, json_mode);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::EventLevel;
    use serde_json::json;

    fn entry(name: &str, n: u32) -> EventEntry {
        EventEntry::now(name, json!({ "n": n }), EventLevel::Info)
    }

    #[test]
    fn test_select_entries() {
        let entries = vec![
            entry("term_created", 1),
            entry("slug_collision", 2),
            entry("term_created", 3),
            entry("term_created", 4),
        ];

        let all = select_entries(entries.clone(), None, None);
        assert_eq!(all.len(), 4);

        let terms = select_entries(entries.clone(), Some("term_created"), None);
        assert_eq!(terms.len(), 3);

        let last_two = select_entries(entries.clone(), Some("term_created"), Some(2));
        assert_eq!(last_two[0].data["n"], 3);
        assert_eq!(last_two[1].data["n"], 4);

        assert_eq!(select_entries(entries, None, Some(10)).len(), 4);
    }

    #[test]
    fn test_stats_human_output() {
        let stats = EventLogStats {
            current_file: "publishing-2024-03-15.log".to_string(),
            size: 512,
            entries: 4,
        };
        let text = stats.to_human();
        assert!(text.contains("publishing-2024-03-15.log"));
        assert!(text.contains("512 bytes"));
    }
}
