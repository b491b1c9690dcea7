use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::rewrite::StripMode;
use crate::stages::{Stage, StageError, StageMap};

/// Environment variable that overrides `current_stage`.
pub const STAGE_ENV_VAR: &str = "WP_STAGE";

/// Switcher configuration loaded from `~/.config/stage-switcher/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitcherConfig {
    /// Name of the stage this installation runs as. Without it the switcher stays hidden.
    #[serde(default)]
    pub current_stage: Option<String>,
    /// Multi-site install that gives every site its own subdomain.
    #[serde(default)]
    pub subdomain_install: bool,
    /// How the current stage's path is cut from the request URI: "first" (default) or "all".
    #[serde(default)]
    pub strip_mode: StripMode,
    /// Stages in menu order. Kept last so it serializes as trailing `[[stages]]` tables.
    #[serde(default)]
    pub stages: Vec<Stage>,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            current_stage: Some("development".to_string()),
            subdomain_install: false,
            strip_mode: StripMode::First,
            stages: vec![
                Stage::new("development", "http://example.dev"),
                Stage::new("staging", "http://example-staging.com"),
                Stage::new("production", "http://example.com"),
            ],
        }
    }
}

impl SwitcherConfig {
    /// Validated stage map.
    pub fn stage_map(&self) -> Result<StageMap, StageError> {
        StageMap::new(self.stages.clone())
    }

    /// Apply `WP_STAGE` from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides read through `lookup`; empty values are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(stage) = lookup(STAGE_ENV_VAR).filter(|s| !s.trim().is_empty()) {
            tracing::debug!("current stage overridden by {}={}", STAGE_ENV_VAR, stage);
            self.current_stage = Some(stage.trim().to_string());
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("stage-switcher")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SwitcherConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SwitcherConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<SwitcherConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: SwitcherConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
