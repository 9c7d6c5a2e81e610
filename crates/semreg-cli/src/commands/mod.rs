//! Command dispatch and handler modules.

mod check;
mod resolve;
mod versions;

use std::path::{Path, PathBuf};

use miette::Result;
use semreg_core::registry::Registry;
use semreg_core::REGISTRY_FILE_NAME;
use semreg_util::errors::RegistryError;
use semreg_util::fs::find_in_ancestors;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let path = registry_path(cli.registry.as_deref())?;
    match cli.command {
        Command::Check => check::exec(&path),
        Command::Resolve { network, format } => resolve::exec(&path, network.as_deref(), format),
        Command::Versions { role, network } => versions::exec(&path, &role, network.as_deref()),
    }
}

/// The explicit `--registry` path, or the nearest `semreg.toml` above the
/// current directory.
fn registry_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(RegistryError::Io)?;
    find_in_ancestors(&cwd, REGISTRY_FILE_NAME).ok_or_else(|| {
        RegistryError::Config {
            message: format!("{REGISTRY_FILE_NAME} not found in any parent directory"),
        }
        .into()
    })
}

fn load(path: &Path) -> Result<Registry> {
    tracing::debug!("Loading registry from {}", path.display());
    Registry::from_path(path)
}
