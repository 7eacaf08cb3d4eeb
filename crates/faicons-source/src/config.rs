use crate::FetchError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_REPO_URL: &str = "https://github.com/FortAwesome/Font-Awesome.git";
pub const DEFAULT_PACKAGE: &str = "@fortawesome/fontawesome-free";
pub const DEFAULT_YAML_PATH: &str = "metadata/icons.yml";

/// Where the icon catalog is fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_repo_url")]
    pub repo_url: String,
    #[serde(default = "default_package")]
    pub package_name: String,
    /// Catalog location relative to the repository or package root, `/`-separated.
    #[serde(default = "default_yaml_path")]
    pub yaml_path: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            repo_url: default_repo_url(),
            package_name: default_package(),
            yaml_path: default_yaml_path(),
        }
    }
}

fn default_repo_url() -> String {
    DEFAULT_REPO_URL.to_owned()
}

fn default_package() -> String {
    DEFAULT_PACKAGE.to_owned()
}

fn default_yaml_path() -> String {
    DEFAULT_YAML_PATH.to_owned()
}

impl SourceConfig {
    #[must_use]
    pub fn with_repo_url(mut self, url: &str) -> Self {
        self.repo_url = url.trim().to_owned();
        self
    }

    #[must_use]
    pub fn with_package(mut self, package: &str) -> Self {
        self.package_name = package.trim().to_owned();
        self
    }

    /// Load `~/.config/faicons/source.json`, or defaults if it does not exist.
    pub fn load_default() -> Result<Self, FetchError> {
        let path = default_config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    pub fn load(path: &Path) -> Result<Self, FetchError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| FetchError::Config(format!("invalid source config: {e}")))
    }

    pub fn save(&self, path: &Path) -> Result<(), FetchError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| FetchError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Catalog path inside a checkout or package directory.
    pub fn catalog_path(&self, root: &Path) -> PathBuf {
        join_segments(root, &self.yaml_path)
    }

    /// Installed package directory below `project/node_modules`.
    pub fn package_dir(&self, project: &Path) -> PathBuf {
        join_segments(&project.join("node_modules"), &self.package_name)
    }
}

fn join_segments(base: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|s| !s.is_empty())
        .fold(base.to_path_buf(), |p, seg| p.join(seg))
}

pub fn default_config_path() -> Result<PathBuf, FetchError> {
    let home = std::env::var("HOME").map_err(|_| FetchError::Config("HOME not set".to_owned()))?;
    Ok(PathBuf::from(home).join(".config/faicons/source.json"))
}
