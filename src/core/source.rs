//! Loading API model files from disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rayon::prelude::*;
use walkdir::WalkDir;

use super::model::{Codebase, ModelFile};

/// A model file that could not be read or deserialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub file_path: String,
    pub error: String,
}

/// Result of loading a set of model files.
#[derive(Debug, Default)]
pub struct LoadedModels {
    pub codebase: Codebase,
    /// Files that were loaded successfully, in sorted order.
    pub files: Vec<PathBuf>,
    pub errors: Vec<LoadError>,
}

/// Expand `paths` into the list of model files: files are taken as given,
/// directories are walked for `*.json` files. The result is sorted and
/// deduplicated.
pub fn collect_model_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).follow_links(true) {
                let entry = entry
                    .with_context(|| format!("Failed to walk directory: {}", path.display()))?;
                if entry.file_type().is_file() && is_model_file(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        } else if path.exists() {
            files.push(path.clone());
        } else {
            anyhow::bail!("Model path does not exist: {}", path.display());
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn is_model_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Read and deserialize one model file.
pub fn load_model_file(path: &Path) -> Result<ModelFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read model file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse model file: {}", path.display()))
}

/// Load all model files under `paths` into one codebase.
///
/// Files are parsed in parallel and merged in sorted path order. Files that
/// fail to load are reported in [`LoadedModels::errors`] and skipped.
pub fn load_models(paths: &[PathBuf]) -> Result<LoadedModels> {
    let files = collect_model_files(paths)?;

    let results: Vec<(PathBuf, Result<ModelFile>)> = files
        .into_par_iter()
        .map(|path| {
            let result = load_model_file(&path);
            (path, result)
        })
        .collect();

    let mut loaded = LoadedModels::default();
    let mut classes = Vec::new();
    for (path, result) in results {
        match result {
            Ok(model) => {
                tracing::debug!(
                    path = %path.display(),
                    classes = model.classes.len(),
                    "loaded model file"
                );
                classes.extend(model.classes);
                loaded.files.push(path);
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), "skipping model file: {:#}", err);
                loaded.errors.push(LoadError {
                    file_path: path.display().to_string(),
                    error: format!("{:#}", err),
                });
            }
        }
    }

    loaded.codebase = Codebase::new(classes);
    Ok(loaded)
}
