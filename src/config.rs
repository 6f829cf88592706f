//! 配置文件 (~/.config/listpick/config.toml)
//!
//! 所有字段都是可选的，命令行参数优先

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::PickerError;
use crate::models::PickerMode;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PickerConfig {
    pub title: Option<String>,
    pub mode: PickerMode,
    pub items_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub log_level: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            title: None,
            mode: PickerMode::Single,
            items_path: None,
            output_path: None,
            log_level: "info".to_string(),
        }
    }
}

/// 命令行覆盖项
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub title: Option<String>,
    pub multi: bool,
    pub items_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
}

impl PickerConfig {
    /// 默认配置文件路径
    pub fn default_path() -> Result<PathBuf, PickerError> {
        Ok(dirs::config_dir()
            .ok_or(PickerError::MissingDirectory { kind: "config" })?
            .join("listpick")
            .join("config.toml"))
    }

    /// 读取配置文件，不存在时使用默认值
    pub fn load(path: &Path) -> Result<Self, PickerError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: PickerConfig =
            toml::from_str(&content).map_err(|e| PickerError::parse(path, e))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if overrides.title.is_some() {
            self.title = overrides.title;
        }
        if overrides.multi {
            self.mode = PickerMode::Multi;
        }
        if overrides.items_path.is_some() {
            self.items_path = overrides.items_path;
        }
        if overrides.output_path.is_some() {
            self.output_path = overrides.output_path;
        }
        self
    }
}
