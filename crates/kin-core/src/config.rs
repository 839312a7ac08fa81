//! Configuration for chart layout and navigation settings.
//!
//! Load order: `kintree.toml` → environment variables → defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level kintree configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KinConfig {
    pub layout: LayoutConfig,
    pub navigation: NavigationConfig,
}

/// Chart layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Vertical distance between generation rows.
    pub row_spacing: f32,
    /// Horizontal distance between adjacent slots in a row.
    pub col_spacing: f32,
    /// Default traversal depth for charts (`None` = whole connected tree).
    pub lookback: Option<usize>,
}

/// Navigation and search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Maximum number of name-search results returned.
    pub search_limit: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            row_spacing: 300.0,
            col_spacing: 500.0,
            lookback: None,
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self { search_limit: 20 }
    }
}

/// Helper to parse an env var and apply it to a config field.
fn env_override<T: std::str::FromStr>(var: &str, target: &mut T) {
    if let Ok(v) = std::env::var(var)
        && let Ok(n) = v.parse()
    {
        *target = n;
    }
}

impl KinConfig {
    /// Load config from `kintree.toml` in `dir`, with env var overrides.
    /// Falls back to defaults if no config file exists.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join("kintree.toml");

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        env_override("KIN_ROW_SPACING", &mut config.layout.row_spacing);
        env_override("KIN_COL_SPACING", &mut config.layout.col_spacing);
        env_override("KIN_SEARCH_LIMIT", &mut config.navigation.search_limit);

        if config.layout.row_spacing <= 0.0 || config.layout.col_spacing <= 0.0 {
            anyhow::bail!(
                "layout spacing must be positive (row {}, col {})",
                config.layout.row_spacing,
                config.layout.col_spacing,
            );
        }

        Ok(config)
    }
}
