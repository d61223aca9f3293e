//! Project setup and service wiring
//!
//! Handles:
//! - Configuration directory creation
//! - Default config file creation
//! - Building the publishing services from a loaded `Config`

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::config::loader::CONFIG_DIR;
use super::event_log::{FileEventLog, TracingEventLog};
use crate::adapters::memory::{InMemoryPromptRepository, InMemorySlugRegistry, InMemoryTermStore};
use crate::domain::models::{Config, SlugRegistryKind};
use crate::domain::ports::{EventLog, NullSlugRegistry, PromptRepository, SlugRegistry, TermStore};
use crate::services::{PreflightService, PublishService};

/// Default configuration template content
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Promptinator Configuration
# Override settings by editing this file, adding .promptinator/local.yaml,
# or setting environment variables with the PROMPTINATOR_ prefix
#
# Example environment variables:
#   export PROMPTINATOR_LOGGING__LEVEL=debug
#   export PROMPTINATOR_EVENT_LOG__DIR=/var/log/promptinator
#   export PROMPTINATOR_SLUG_REGISTRY=memory

# Diagnostic logging (stderr)
logging:
  # Log level: trace, debug, info, warn, error
  level: "info"

  # Log format: json, pretty
  format: "pretty"

# Publishing event journal (publishing-YYYY-MM-DD.log files)
event_log:
  enabled: true
  dir: "logs"

  # Days of journal files kept by `promptinator logs clean`
  retention_days: 7

# Slug existence check: none (every slug is free) or memory
slug_registry: none

# Terms known before the first preflight
terms:
  categories:
    - business-marketing
    - creative-writing
    - technical-coding
    - education-training
    - data-analysis
    - customer-support
    - content-creation
    - research-academic
    - media-production
    - general-purpose
  tags:
    - template
    - agent
    - blueprint
    - marketing
    - email
    - conversion
    - assistant
    - coding
    - python
    - midjourney
    - product-photo
    - ecommerce
"#;

/// Setup paths and directories
pub struct SetupPaths {
    pub config_dir: PathBuf,
    pub config_file: PathBuf,
}

impl SetupPaths {
    /// Paths for a project rooted at `root`
    pub fn for_root(root: impl AsRef<Path>) -> Self {
        let config_dir = root.as_ref().join(CONFIG_DIR);
        Self {
            config_file: config_dir.join("config.yaml"),
            config_dir,
        }
    }

    /// Get setup paths for the current directory
    pub fn new() -> Result<Self> {
        let current_dir = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self::for_root(current_dir))
    }

    /// Check if the project already has a config file
    pub fn is_initialized(&self) -> bool {
        self.config_file.exists()
    }
}

/// Create the configuration directory and default config file.
///
/// Returns `false` without touching anything when already initialized and
/// `force` is not set.
pub fn init_project(paths: &SetupPaths, force: bool) -> Result<bool> {
    if paths.is_initialized() && !force {
        return Ok(false);
    }

    fs::create_dir_all(&paths.config_dir).context("Failed to create config directory")?;
    fs::write(&paths.config_file, DEFAULT_CONFIG_TEMPLATE)
        .context("Failed to write config file")?;

    Ok(true)
}

/// Publishing services built from one configuration.
///
/// Both services share the slug registry and event log, so slugs stored by
/// the publish step are seen by later preflights in the same process.
#[derive(Clone)]
pub struct AppServices {
    pub preflight: PreflightService,
    pub publish: PublishService,
    pub repository: Arc<dyn PromptRepository>,
    /// Present when the file journal is enabled.
    pub journal: Option<FileEventLog>,
}

impl AppServices {
    pub async fn from_config(config: &Config) -> Result<Self> {
        let journal = if config.event_log.enabled {
            Some(FileEventLog::new(&config.event_log.dir).await?)
        } else {
            None
        };

        let events: Arc<dyn EventLog> = match journal {
            Some(ref journal) => Arc::new(journal.clone()),
            None => Arc::new(TracingEventLog::new()),
        };

        let registry: Arc<dyn SlugRegistry> = match config.slug_registry {
            SlugRegistryKind::None => Arc::new(NullSlugRegistry::new()),
            SlugRegistryKind::Memory => Arc::new(InMemorySlugRegistry::new()),
        };

        let store: Arc<dyn TermStore> = Arc::new(InMemoryTermStore::from_config(&config.terms));
        let repository: Arc<dyn PromptRepository> = Arc::new(InMemoryPromptRepository::new());

        Ok(Self {
            preflight: PreflightService::new(store, Arc::clone(&registry), Arc::clone(&events)),
            publish: PublishService::new(Arc::clone(&repository), registry, events),
            repository,
            journal,
        })
    }
}
