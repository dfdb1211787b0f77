//! Main workflow orchestration logic
//!
//! Keeps `main.rs` down to argument parsing and output: everything between
//! "settings are known" and "version string is ready" lives here.

use crate::assembler;
use crate::cli::Args;
use crate::config::{self, Backend, RepoOptions, VersionConfig};
use crate::error::{Result, VersionError};
use crate::git::{Git2Repository, GitCliRepository, Repository};

/// Resolve settings from file, environment and flags
pub fn resolve_settings(args: &Args) -> Result<(VersionConfig, RepoOptions)> {
    let file = config::load_config(args.config.as_deref())?;
    Ok(config::resolve(file, args.overrides()))
}

/// Open the repository with the configured backend
pub fn open_repository(options: &RepoOptions) -> Result<Box<dyn Repository>> {
    tracing::debug!(backend = ?options.backend, path = %options.path.display(), "opening repository");

    let repo: Box<dyn Repository> = match options.backend {
        Backend::Git2 => Box::new(Git2Repository::open(&options.path).map_err(|e| {
            VersionError::environment(format!("Unable to determine current commit: {}", e))
        })?),
        Backend::Cli => Box::new(GitCliRepository::new(&options.path)),
    };
    Ok(repo)
}

/// Full run: settings, repository, version
pub fn run(args: &Args) -> Result<String> {
    let (version_config, repo_options) = resolve_settings(args)?;
    let repo = open_repository(&repo_options)?;
    assembler::assemble(&version_config, repo.as_ref())
}
