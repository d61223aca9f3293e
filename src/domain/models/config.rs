use serde::{Deserialize, Serialize};

/// Main configuration structure for Promptinator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Publishing event journal configuration
    #[serde(default)]
    pub event_log: EventLogConfig,

    /// Terms known before the first preflight runs
    #[serde(default)]
    pub terms: TermsConfig,

    /// Which slug existence check the preflight uses
    #[serde(default)]
    pub slug_registry: SlugRegistryKind,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Publishing event journal configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EventLogConfig {
    /// Write journal files; when false events only go to tracing
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Directory holding `publishing-YYYY-MM-DD.log` files
    #[serde(default = "default_event_log_dir")]
    pub dir: String,

    /// Days of journal files kept by `logs clean`
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,
}

const fn default_true() -> bool {
    true
}

fn default_event_log_dir() -> String {
    "logs".to_string()
}

const fn default_retention_days() -> u32 {
    7
}

impl Default for EventLogConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            dir: default_event_log_dir(),
            retention_days: default_retention_days(),
        }
    }
}

/// Seed terms for the known-term store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TermsConfig {
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    #[serde(default = "default_tags")]
    pub tags: Vec<String>,
}

fn default_categories() -> Vec<String> {
    [
        "business-marketing",
        "creative-writing",
        "technical-coding",
        "education-training",
        "data-analysis",
        "customer-support",
        "content-creation",
        "research-academic",
        "media-production",
        "general-purpose",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_tags() -> Vec<String> {
    [
        "template",
        "agent",
        "blueprint",
        "marketing",
        "email",
        "conversion",
        "assistant",
        "coding",
        "python",
        "midjourney",
        "product-photo",
        "ecommerce",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for TermsConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            tags: default_tags(),
        }
    }
}

/// Slug existence check wired into the preflight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SlugRegistryKind {
    /// Every slug is reported as free
    #[default]
    None,
    /// Slugs handed out by this process are remembered and avoided
    Memory,
}

