//! Handler for `semreg resolve`.

use std::path::Path;

use miette::{IntoDiagnostic, Result};

use crate::cli::OutputFormat;

pub fn exec(path: &Path, network: Option<&str>, format: OutputFormat) -> Result<()> {
    let registry = super::load(path)?;
    let resolved = semreg_resolver::resolve_registry(&registry, network)?;

    match format {
        OutputFormat::Text => print!("{resolved}"),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&resolved).into_diagnostic()?;
            println!("{json}");
        }
    }
    Ok(())
}
