//! Table output formatting for CLI commands
//!
//! Formats journal entries using comfy-table, with level-coloured cells when
//! the terminal allows it.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

use super::truncate;
use crate::domain::models::{EventEntry, EventLevel};

const DATA_WIDTH: usize = 60;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    pub fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format journal entries as a table, oldest first
    pub fn format_events(&self, entries: &[EventEntry]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Time").add_attribute(Attribute::Bold),
            Cell::new("Level").add_attribute(Attribute::Bold),
            Cell::new("Event").add_attribute(Attribute::Bold),
            Cell::new("Data").add_attribute(Attribute::Bold),
        ]);

        for entry in entries {
            let level_cell = if self.use_colors {
                Cell::new(entry.level).fg(level_color(entry.level))
            } else {
                Cell::new(entry.level)
            };

            table.add_row(vec![
                Cell::new(entry.timestamp.format("%H:%M:%S%.3f")),
                level_cell,
                Cell::new(&entry.event),
                Cell::new(truncate(&entry.data.to_string(), DATA_WIDTH)),
            ]);
        }

        table.to_string()
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    !matches!(env::var("TERM").as_deref(), Ok("dumb"))
}

const fn level_color(level: EventLevel) -> Color {
    match level {
        EventLevel::Debug => Color::DarkGrey,
        EventLevel::Info => Color::Green,
        EventLevel::Warn => Color::Yellow,
        EventLevel::Error => Color::Red,
    }
}
