use std::path::PathBuf;

use anyhow::{Context as _, Result};
use glob::Pattern;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, compile_patterns, load_config},
    core::{
        model::Codebase,
        source::{LoadedModels, load_models},
    },
    issues::ParseErrorIssue,
    rules::permission::PermissionSettings,
};

/// Configuration compiled into the form the checker consumes.
#[derive(Debug, Clone)]
pub struct CheckSettings {
    includes: Vec<Pattern>,
    excludes: Vec<Pattern>,
    pub permissions: PermissionSettings,
    pub doc_cache_size: usize,
}

impl CheckSettings {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            includes: compile_patterns(&config.includes, "includes")?,
            excludes: compile_patterns(&config.excludes, "excludes")?,
            permissions: PermissionSettings {
                annotation: config.permission_annotation.clone(),
                prefix: config.permission_prefix.clone(),
            },
            doc_cache_size: config.doc_cache_size,
        })
    }

    /// True if the class named `qualified_name` is in a checked namespace.
    pub fn in_scope(&self, qualified_name: &str) -> bool {
        self.includes.iter().any(|p| p.matches(qualified_name))
            && !self.excludes.iter().any(|p| p.matches(qualified_name))
    }
}

/// Everything a check run needs: resolved configuration and the loaded
/// codebase.
pub struct CheckContext {
    pub config: Config,
    pub settings: CheckSettings,
    /// Paths the models were loaded from, after CLI overrides.
    pub model_paths: Vec<PathBuf>,
    models: LoadedModels,
}

impl CheckContext {
    /// Create a `CheckContext` from command line arguments.
    ///
    /// Configuration is looked up from the working directory. Model paths
    /// given on the command line replace the configured `modelRoot`.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read working directory")?;
        let config_result = load_config(&cwd)?;
        if !config_result.from_file {
            tracing::debug!("no {} found, using default configuration", CONFIG_FILE_NAME);
        }

        let config = config_result.config;
        let model_paths = if common_args.paths.is_empty() {
            vec![PathBuf::from(&config.model_root)]
        } else {
            common_args.paths.clone()
        };

        Self::with_config(config, model_paths)
    }

    /// Create a `CheckContext` from an already resolved configuration.
    pub fn with_config(config: Config, model_paths: Vec<PathBuf>) -> Result<Self> {
        config.validate()?;
        let settings = CheckSettings::from_config(&config)?;
        let models = load_models(&model_paths)?;
        tracing::debug!(
            files = models.files.len(),
            classes = models.codebase.len(),
            errors = models.errors.len(),
            "models loaded"
        );

        Ok(Self {
            config,
            settings,
            model_paths,
            models,
        })
    }

    pub fn codebase(&self) -> &Codebase {
        &self.models.codebase
    }

    /// Model files that loaded successfully.
    pub fn model_files(&self) -> &[PathBuf] {
        &self.models.files
    }

    /// Model files that failed to load, as issues.
    pub fn parse_errors(&self) -> Vec<ParseErrorIssue> {
        self.models
            .errors
            .iter()
            .map(|e| ParseErrorIssue {
                file_path: e.file_path.clone(),
                error: e.error.clone(),
            })
            .collect()
    }
}
