//! Layered TOML configuration
//!
//! Files are merged from lowest to highest priority:
//! `$CONFIG_DIR/leozin/config.toml`, `./leozin.toml`, then an explicit path.
//! `LEOZIN_BACKEND_URL` overrides `backend.url` last.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::render::{LabelTable, TextRenderer};

/// Environment variable overriding the backend URL
pub const BACKEND_URL_ENV: &str = "LEOZIN_BACKEND_URL";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    /// Extra host → friendly name pairs, merged over the built-ins
    pub labels: BTreeMap<String, String>,
}

/// Where the chat backend lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL; `api/chat` is resolved against it
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:5000/".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Config {
    /// Built-in labels with the configured ones applied on top
    pub fn label_table(&self) -> LabelTable {
        let mut table = LabelTable::default();
        table.extend(self.labels.iter().map(|(h, n)| (h.as_str(), n.as_str())));
        table
    }

    pub fn renderer(&self) -> TextRenderer {
        TextRenderer::new(self.label_table())
    }
}

/// Ordered list of config file locations searched from lowest to highest priority.
fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(cfg) = dirs::config_dir() {
        paths.push(cfg.join("leozin/config.toml"));
    }
    paths.push(PathBuf::from("leozin.toml"));

    paths
}

/// Load configuration from the standard locations plus an optional
/// explicit path (e.g. `--config`).
pub fn load(extra: Option<&Path>) -> Result<Config> {
    let mut paths = config_search_paths();
    if let Some(p) = extra {
        if !p.is_file() {
            anyhow::bail!("config file not found: {}", p.display());
        }
        paths.push(p.to_path_buf());
    }

    let mut config = load_from(&paths)?;
    if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
        if !url.trim().is_empty() {
            debug!(%url, "backend url from environment");
            config.backend.url = url;
        }
    }
    Ok(config)
}

/// Merge the given files in order; missing files are skipped.
pub fn load_from(paths: &[PathBuf]) -> Result<Config> {
    let mut merged = toml::Value::Table(toml::map::Map::new());

    for path in paths {
        if !path.is_file() {
            continue;
        }
        debug!(path = %path.display(), "loading config layer");
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let layer: toml::Value =
            toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
        merge_toml(&mut merged, layer);
    }

    merged.try_into().context("invalid configuration")
}

/// Deep-merge `src` into `dst`; src wins on scalar conflicts.
fn merge_toml(dst: &mut toml::Value, src: toml::Value) {
    match (dst, src) {
        (toml::Value::Table(d), toml::Value::Table(s)) => {
            for (k, v) in s {
                match d.get_mut(&k) {
                    Some(existing) => merge_toml(existing, v),
                    None => {
                        d.insert(k, v);
                    }
                }
            }
        }
        (dst, src) => *dst = src,
    }
}
