use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::permissions::REPORT_FILE_NAME;

pub const CONFIG_FILE_NAME: &str = ".apicheckrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Namespaces (glob patterns over qualified class names) to check.
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    /// Namespaces skipped even when included.
    #[serde(default = "default_excludes")]
    pub excludes: Vec<String>,
    #[serde(default = "default_model_root")]
    pub model_root: String,
    #[serde(default = "default_report_file")]
    pub report_file: String,
    #[serde(default = "default_permission_annotation")]
    pub permission_annotation: String,
    #[serde(default = "default_permission_prefix")]
    pub permission_prefix: String,
    #[serde(default = "default_doc_cache_size")]
    pub doc_cache_size: usize,
}

fn default_includes() -> Vec<String> {
    vec!["android.*".to_string()]
}

fn default_excludes() -> Vec<String> {
    vec!["android.icu.*".to_string()]
}

fn default_model_root() -> String {
    "./api".to_string()
}

fn default_report_file() -> String {
    REPORT_FILE_NAME.to_string()
}

fn default_permission_annotation() -> String {
    "RequiresPermission".to_string()
}

fn default_permission_prefix() -> String {
    "android.permission.".to_string()
}

fn default_doc_cache_size() -> usize {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: default_includes(),
            excludes: default_excludes(),
            model_root: default_model_root(),
            report_file: default_report_file(),
            permission_annotation: default_permission_annotation(),
            permission_prefix: default_permission_prefix(),
            doc_cache_size: default_doc_cache_size(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any namespace pattern is not a valid glob or the
    /// documentation cache has no capacity.
    pub fn validate(&self) -> Result<()> {
        compile_patterns(&self.includes, "includes")?;
        compile_patterns(&self.excludes, "excludes")?;
        if self.doc_cache_size == 0 {
            anyhow::bail!("'docCacheSize' must be at least 1");
        }
        if self.permission_annotation.is_empty() {
            anyhow::bail!("'permissionAnnotation' must not be empty");
        }

        Ok(())
    }
}

/// Compile the namespace patterns stored under config key `key`.
pub fn compile_patterns(patterns: &[String], key: &str) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in '{}': \"{}\"", key, pattern))
        })
        .collect()
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
