use super::{
    fetch_error, metadata_error, print_summary, spin_fail, spin_ok, spinner, EXIT_SUCCESS,
};
use faicons_schema::parse_icons_by_style;
use faicons_source::{
    check_fetch_prereqs, format_missing, select_source, IconYamlProvider, NpmSource,
    SourceConfig, SourceKind, SystemRunner,
};
use std::path::Path;
use tracing::{debug, info};

pub struct FetchArgs<'a> {
    pub source: &'a str,
    pub output: Option<&'a Path>,
    pub summary: bool,
    pub config: Option<&'a Path>,
    pub repo_url: Option<&'a str>,
    pub package: Option<&'a str>,
    pub project_dir: Option<&'a Path>,
}

impl FetchArgs<'_> {
    /// Stored config with command-line overrides applied on top.
    fn source_config(&self) -> Result<SourceConfig, String> {
        let mut config = match self.config {
            Some(path) => SourceConfig::load(path),
            None => SourceConfig::load_default(),
        }
        .map_err(|e| fetch_error(&e))?;
        if let Some(url) = self.repo_url {
            config = config.with_repo_url(url);
        }
        if let Some(package) = self.package {
            config = config.with_package(package);
        }
        Ok(config)
    }

    fn provider(&self, kind: SourceKind, config: SourceConfig) -> Box<dyn IconYamlProvider> {
        match (kind, self.project_dir) {
            (SourceKind::Npm, Some(dir)) => {
                Box::new(NpmSource::new(config).with_project_dir(dir))
            }
            _ => select_source(kind, &config),
        }
    }
}

pub fn run(args: &FetchArgs<'_>, json: bool) -> Result<u8, String> {
    let kind: SourceKind = args.source.parse().map_err(|e| fetch_error(&e))?;
    let config = args.source_config()?;

    if std::env::var("FAICONS_SKIP_PREREQS").as_deref() != Ok("1") {
        let missing = check_fetch_prereqs(&SystemRunner, &[kind]);
        if !missing.is_empty() {
            return Err(format!("fetch error: {}", format_missing(&missing)));
        }
    }

    let provider = args.provider(kind, config);
    debug!("fetching catalog via {} source", provider.name());

    let pb = spinner(&format!("fetching icons.yml via {kind}..."));
    let yaml = match provider.icons_yaml() {
        Ok(yaml) => {
            spin_ok(&pb, &format!("fetched icons.yml via {kind}"));
            yaml
        }
        Err(e) => {
            spin_fail(&pb, &format!("fetch via {kind} failed"));
            return Err(fetch_error(&e));
        }
    };

    match args.output {
        Some(path) => {
            std::fs::write(path, &yaml)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            info!("wrote {} bytes to {}", yaml.len(), path.display());
        }
        None if !args.summary => print!("{yaml}"),
        None => {}
    }

    if args.summary {
        let groups = parse_icons_by_style(&yaml).map_err(|e| metadata_error(&e))?;
        print_summary(&groups, json)?;
    }
    Ok(EXIT_SUCCESS)
}
