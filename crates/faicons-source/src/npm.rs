use crate::config::SourceConfig;
use crate::process::{ensure_tool, run_checked, CommandRunner, SystemRunner};
use crate::{read_catalog, FetchError, IconYamlProvider};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const NPM: &str = if cfg!(windows) { "npm.cmd" } else { "npm" };

/// Installs the project's npm dependencies and reads the catalog from the
/// installed Font Awesome package.
pub struct NpmSource<R: CommandRunner = SystemRunner> {
    config: SourceConfig,
    runner: R,
    project_dir: Option<PathBuf>,
}

impl NpmSource {
    pub fn new(config: SourceConfig) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: CommandRunner> NpmSource<R> {
    pub fn with_runner(config: SourceConfig, runner: R) -> Self {
        Self {
            config,
            runner,
            project_dir: None,
        }
    }

    /// Search for `package.json` upward from `dir` instead of from the executable.
    #[must_use]
    pub fn with_project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.project_dir = Some(dir.into());
        self
    }

    fn locate_project(&self) -> Option<PathBuf> {
        if let Some(start) = &self.project_dir {
            return find_package_root(start);
        }

        let from_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().and_then(find_package_root));
        if from_exe.is_some() {
            return from_exe;
        }

        let cwd = std::env::current_dir().ok()?;
        cwd.join("package.json").is_file().then_some(cwd)
    }

    fn install(&self, project: &Path) -> Result<(), FetchError> {
        let command = if project.join("package-lock.json").is_file() {
            "ci"
        } else {
            "install"
        };
        info!("running npm {command} in {}", project.display());
        run_checked(&self.runner, NPM, &[command], Some(project))?;
        Ok(())
    }
}

impl<R: CommandRunner> IconYamlProvider for NpmSource<R> {
    fn name(&self) -> &'static str {
        "npm"
    }

    fn icons_yaml(&self) -> Result<String, FetchError> {
        ensure_tool(&self.runner, NPM)?;

        let project = self.locate_project().ok_or(FetchError::NoPackageManifest)?;
        debug!("using npm project at {}", project.display());
        self.install(&project)?;

        let package = self.config.package_dir(&project);
        read_catalog(&self.config.catalog_path(&package))
    }
}

/// Nearest directory at or above `start` that contains a `package.json`.
pub fn find_package_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join("package.json").is_file())
        .map(Path::to_path_buf)
}
