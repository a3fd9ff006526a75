// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::infra::errors::HelperError;
use crate::infra::paths;
use crate::tree::TreeBuilder;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeConfig,

    #[serde(default)]
    pub text: TextConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Default field names used by the tree commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    pub id_field: String,
    pub parent_field: String,
    pub children_field: String,
    pub level_field: String,
    pub detect_cycles: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            id_field: "id".into(),
            parent_field: "parent".into(),
            children_field: "children".into(),
            level_field: "level".into(),
            detect_cycles: true,
        }
    }
}

impl TreeConfig {
    /// Field names must be non-empty.
    fn validate(&self) -> Result<(), HelperError> {
        for (name, value) in [
            ("id_field", &self.id_field),
            ("parent_field", &self.parent_field),
            ("children_field", &self.children_field),
            ("level_field", &self.level_field),
        ] {
            if value.is_empty() {
                return Err(HelperError::Config(format!("tree.{name} must not be empty")));
            }
        }
        Ok(())
    }

    pub fn builder(&self) -> TreeBuilder {
        TreeBuilder::new(&self.id_field, &self.parent_field, &self.children_field)
            .detect_cycles(self.detect_cycles)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub ellipsis: String,
    pub more_tag: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            ellipsis: "…".into(),
            more_tag: "<!--more-->".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let path = paths::config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| HelperError::Config(format!("{}: {e}", path.display())))?;
        config.tree.validate()?;
        Ok(config)
    }
}
