//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_commerce::catalog::Catalog;
use storefront_commerce::session::Session;
use storefront_commerce::Currency;
use storefront_observability::{LogFormat, LogLevel, StructuredLogger};

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;
use crate::render::GridLayout;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Config file the settings came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (CliConfig::load(&path)?, Some(path))
            }
            // Try to find config in current directory or parent directories
            None => match find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        if let Some(ref path) = config_path {
            output.debug(&format!("Using config {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Directory relative catalog paths are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(self.cwd.as_path())
    }

    /// Load the catalog the config points at.
    pub fn catalog(&self) -> Result<Catalog> {
        let currency = self
            .config
            .store
            .currency
            .as_deref()
            .map(str::parse::<Currency>)
            .transpose()?;
        let catalog = self.config.catalog.load(self.base_dir(), currency)?;
        self.output
            .debug(&format!("Loaded {} products ({})", catalog.len(), catalog.currency()));
        Ok(catalog)
    }

    /// Logger for a session, honoring `[logging]` and `--verbose`.
    pub fn logger(&self, session: &Session) -> Result<StructuredLogger> {
        let mut level: LogLevel = self.config.logging.level.parse()?;
        if self.output.is_verbose() {
            level = level.min(LogLevel::Debug);
        }
        let format: LogFormat = self.config.logging.format.parse()?;

        Ok(StructuredLogger::new(session.id().clone())
            .with_component("storefront")
            .with_min_level(level)
            .with_format(format))
    }

    /// Grid layout for the current terminal.
    pub fn grid_layout(&self) -> GridLayout {
        GridLayout::fit(
            self.config.display.columns_per_row,
            self.output.term_width(),
            self.config.display.show_descriptions,
        )
    }

    /// Print the title and tagline.
    pub fn print_header(&self) {
        self.output.header(&self.config.store.title);
        self.output.caption(&self.config.store.tagline);
    }

    /// Print the footer caption.
    pub fn print_footer(&self) {
        self.output.rule();
        self.output.caption(&self.config.store.footer);
    }
}

/// Find config file in directory tree.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Resolve a path relative to the working directory.
fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
