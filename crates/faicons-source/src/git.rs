use crate::config::SourceConfig;
use crate::process::{ensure_tool, run_checked, CommandRunner, SystemRunner};
use crate::scratch::ScratchDir;
use crate::{read_catalog, FetchError, IconYamlProvider};
use tracing::info;

const GIT: &str = "git";

/// Shallow-clones the upstream repository into a scratch directory and reads
/// the catalog from the checkout.
pub struct GitSource<R: CommandRunner = SystemRunner> {
    config: SourceConfig,
    runner: R,
}

impl GitSource {
    pub fn new(config: SourceConfig) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: CommandRunner> GitSource<R> {
    pub fn with_runner(config: SourceConfig, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }
}

impl<R: CommandRunner> IconYamlProvider for GitSource<R> {
    fn name(&self) -> &'static str {
        "git"
    }

    fn icons_yaml(&self) -> Result<String, FetchError> {
        ensure_tool(&self.runner, GIT)?;

        let scratch = ScratchDir::new("fa-repo-")?;
        let dest = scratch.path().to_string_lossy().into_owned();
        info!("cloning {} into {dest}", self.config.repo_url);
        run_checked(
            &self.runner,
            GIT,
            &["clone", "--depth", "1", &self.config.repo_url, &dest],
            None,
        )?;

        read_catalog(&self.config.catalog_path(scratch.path()))
    }
}
