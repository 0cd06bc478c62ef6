use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = ".msgscanrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default = "default_catalog_dir")]
    pub catalog_dir: String,
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default = "default_context_names")]
    pub context_names: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_languages() -> Vec<String> {
    ["cs", "sk"].map(String::from).to_vec()
}

fn default_catalog_dir() -> String {
    "po".to_string()
}

fn default_marker() -> String {
    "_".to_string()
}

fn default_context_names() -> Vec<String> {
    ["ctx", "tc"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            catalog_dir: default_catalog_dir(),
            marker: default_marker(),
            context_names: default_context_names(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Language codes become file names, so they may not contain path
    /// separators or `..`, and each may appear only once.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.languages.is_empty() {
            bail!("'languages' must contain at least one language code");
        }
        let mut seen = HashSet::new();
        for language in &self.languages {
            if language.trim().is_empty() {
                bail!("Empty language code in 'languages'");
            }
            if language.contains(['/', '\\']) || language.contains("..") {
                bail!("Invalid language code in 'languages': \"{}\"", language);
            }
            if !seen.insert(language.as_str()) {
                bail!("Duplicate language code in 'languages': \"{}\"", language);
            }
        }

        if self.marker.trim().is_empty() {
            bail!("'marker' must not be empty");
        }

        if self.context_names.is_empty() {
            bail!("'contextNames' must contain at least one name");
        }
        if self.context_names.iter().any(|name| name.trim().is_empty()) {
            bail!("Empty name in 'contextNames'");
        }

        if self.catalog_dir.trim().is_empty() {
            bail!("'catalogDir' must not be empty");
        }

        Ok(())
    }
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
    /// The file the configuration was read from, `None` for defaults.
    pub path: Option<PathBuf>,
}

/// Load configuration for a scan root.
///
/// The result is not validated yet: CLI overrides are applied on top of it
/// first.
pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
