use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::generate::{GenerateRequest, DEFAULT_CONSTANT_NAME, DEFAULT_SRC_GEN_FOLDER_BASE};

pub const DEFAULT_CONFIG_FILE: &str = "inject-text.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub version: String,
    #[serde(default = "default_src_gen_folder_base")]
    pub src_gen_folder_base: String,
    #[serde(default = "default_safe_mode")]
    pub safe_mode: bool,
    #[serde(default)]
    pub injections: Vec<InjectionConfig>,
}

/// One text file to embed in one generated class.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjectionConfig {
    pub input_file: String,
    pub package_name: String,
    pub class_name: String,
    #[serde(default = "default_constant_name")]
    pub constant_name: String,
    /// Overrides the top-level `srcGenFolderBase` for this injection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_gen_folder_base: Option<String>,
}

fn default_src_gen_folder_base() -> String {
    DEFAULT_SRC_GEN_FOLDER_BASE.to_string()
}

fn default_safe_mode() -> bool {
    true
}

fn default_constant_name() -> String {
    DEFAULT_CONSTANT_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            src_gen_folder_base: default_src_gen_folder_base(),
            safe_mode: default_safe_mode(),
            injections: Vec::new(),
        }
    }
}

impl Config {
    pub fn default_config_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_FILE)
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (config_path, is_custom_path) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_config_path(), false),
        };

        if !config_path.exists() {
            if is_custom_path {
                anyhow::bail!(
                    "Config file not found at specified path: {}",
                    config_path.display()
                );
            }
            anyhow::bail!(
                "Config file not found: {}. Run 'inject-text config init' to create one",
                config_path.display()
            );
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", config_path.display()))?;

        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.version.is_empty() {
            anyhow::bail!("Config version cannot be empty");
        }
        if self.src_gen_folder_base.trim().is_empty() {
            anyhow::bail!("srcGenFolderBase cannot be empty");
        }

        for (index, injection) in self.injections.iter().enumerate() {
            if injection.input_file.trim().is_empty() {
                anyhow::bail!("injections[{index}].inputFile cannot be empty");
            }
            if injection.class_name.trim().is_empty() {
                anyhow::bail!("injections[{index}].className cannot be empty");
            }
            if injection.constant_name.trim().is_empty() {
                anyhow::bail!("injections[{index}].constantName cannot be empty");
            }
            if let Some(base) = &injection.src_gen_folder_base {
                if base.trim().is_empty() {
                    anyhow::bail!("injections[{index}].srcGenFolderBase cannot be empty");
                }
            }
        }

        Ok(())
    }

    pub fn expand_tilde(path: &str) -> PathBuf {
        match (path.strip_prefix("~/"), dirs::home_dir()) {
            (Some(stripped), Some(home)) => home.join(stripped),
            _ => PathBuf::from(path),
        }
    }

    /// Expand `~/` and anchor relative paths at `config_dir`
    pub fn resolve_path(config_dir: &Path, path: &str) -> PathBuf {
        let expanded = Self::expand_tilde(path);
        if expanded.is_relative() {
            config_dir.join(expanded)
        } else {
            expanded
        }
    }

    /// Turn every injection into a generation request, resolving paths
    /// relative to the directory holding the config file.
    pub fn requests(&self, config_path: &Path) -> Vec<GenerateRequest> {
        let config_dir = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        self.injections
            .iter()
            .map(|injection| {
                let base = injection
                    .src_gen_folder_base
                    .as_deref()
                    .unwrap_or(&self.src_gen_folder_base);
                GenerateRequest {
                    input_file: Self::resolve_path(config_dir, &injection.input_file),
                    src_gen_folder_base: Self::resolve_path(config_dir, base),
                    package_name: injection.package_name.clone(),
                    class_name: injection.class_name.clone(),
                    constant_name: injection.constant_name.clone(),
                    safe_mode: self.safe_mode,
                }
            })
            .collect()
    }
}
