//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::catalog::{Catalog, CatalogData};
use storefront_commerce::Currency;
use storefront_observability::{LogFormat, LogLevel};

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Page chrome.
    #[serde(default)]
    pub store: StoreConfig,

    /// Grid layout.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Where products come from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Log settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content, is_json(path))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse config text as JSON or TOML.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }

    /// Problems that make the config unusable, then ones worth a warning.
    pub fn check(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if self.store.title.trim().is_empty() {
            warnings.push("store.title is empty".to_string());
        }

        if let Some(ref code) = self.store.currency {
            if Currency::from_code(code).is_none() {
                errors.push(format!("store.currency '{}' is not supported", code));
            }
        }

        if self.display.columns_per_row == 0 {
            errors.push("display.columns_per_row must be at least 1".to_string());
        } else if self.display.columns_per_row > 6 {
            warnings.push(format!(
                "display.columns_per_row = {} will be cramped in most terminals",
                self.display.columns_per_row
            ));
        }

        if let Err(e) = self.logging.level.parse::<LogLevel>() {
            errors.push(format!("logging.level: {}", e));
        }
        if let Err(e) = self.logging.format.parse::<LogFormat>() {
            errors.push(format!("logging.format: {}", e));
        }

        (errors, warnings)
    }
}

/// Page chrome shown around the listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Title line.
    #[serde(default = "default_title")]
    pub title: String,

    /// Line under the title.
    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Caption printed after the listing.
    #[serde(default = "default_footer")]
    pub footer: String,

    /// Currency code overriding the catalog's own (e.g., "USD").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

fn default_title() -> String {
    "\u{1f6d2} Mini Amazon Demo".to_string()
}

fn default_tagline() -> String {
    "A simple Amazon-style product demo.".to_string()
}

fn default_footer() -> String {
    "This is a demo app and not an official Amazon website.".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tagline: default_tagline(),
            footer: default_footer(),
            currency: None,
        }
    }
}

/// Product grid layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Products per grid row.
    #[serde(default = "default_columns")]
    pub columns_per_row: usize,

    /// Whether cards include the description.
    #[serde(default = "default_true")]
    pub show_descriptions: bool,
}

fn default_columns() -> usize {
    3
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            columns_per_row: default_columns(),
            show_descriptions: true,
        }
    }
}

/// Catalog source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON or TOML product file. The built-in demo catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl CatalogConfig {
    /// Load the configured catalog, resolving relative paths against `base`.
    pub fn load(&self, base: &Path, currency: Option<Currency>) -> Result<Catalog> {
        let Some(ref path) = self.path else {
            let demo = Catalog::demo();
            return match currency {
                Some(currency) => Ok(Catalog::new(demo.products().to_vec(), currency)?),
                None => Ok(demo),
            };
        };

        let path = base.join(path);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        let mut data: CatalogData = if is_json(&path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON catalog: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML catalog: {}", path.display()))?
        };

        if let Some(currency) = currency {
            data.currency = currency;
        }

        Catalog::from_data(data)
            .with_context(|| format!("Invalid catalog: {}", path.display()))
    }
}

/// Log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level ("trace" through "error").
    #[serde(default = "default_level")]
    pub level: String,

    /// "human" or "json".
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "human".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront configuration

[store]
title = "🛒 Mini Amazon Demo"
tagline = "A simple Amazon-style product demo."
footer = "This is a demo app and not an official Amazon website."
# currency = "INR"

[display]
columns_per_row = 3
show_descriptions = true

[catalog]
# JSON or TOML file with `currency` and a `products` list.
# Leave unset to use the built-in demo catalog.
# path = "products.toml"

[logging]
level = "warn"
format = "human"
"#
    .to_string()
}
