use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::loader::{LoaderOptions, DEFAULT_NAME_FIELD};
use crate::models::DEFAULT_SENTINEL;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub boundaries: BoundariesConfig,
    pub classification: ClassificationConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BoundariesConfig {
    /// Shapefile, directory holding one, or GeoJSON file
    pub path: Option<PathBuf>,
    pub name_field: String,
}

impl Default for BoundariesConfig {
    fn default() -> Self {
        Self {
            path: None,
            name_field: DEFAULT_NAME_FIELD.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ClassificationConfig {
    pub sentinel: String,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of file values
    pub fn with_overrides(
        mut self,
        path: Option<PathBuf>,
        name_field: Option<String>,
        sentinel: Option<String>,
    ) -> Self {
        if path.is_some() {
            self.boundaries.path = path;
        }
        if let Some(field) = name_field {
            self.boundaries.name_field = field;
        }
        if let Some(text) = sentinel {
            self.classification.sentinel = text;
        }
        self
    }

    pub fn loader_options(&self) -> LoaderOptions {
        LoaderOptions {
            name_field: self.boundaries.name_field.clone(),
        }
    }

    /// Boundary path, failing when neither the file nor the CLI set one
    pub fn boundary_path(&self) -> Result<&Path> {
        self.boundaries
            .path
            .as_deref()
            .context("No boundary source given (use --shapefile or [boundaries].path)")
    }
}
