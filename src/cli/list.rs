//! List command implementation.
//!
//! Discovers definition files and prints an inventory of themes and
//! token sets.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{load_registry, scan};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::registry::ThemeRegistry;

/// List builtin and discovered themes
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Project root to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let scan_result = scan(&args.path)?;
    let registry = load_registry(&scan_result)?;

    let themes: Vec<String> = registry
        .names()
        .map(|name| {
            if ThemeRegistry::is_builtin(name) {
                format!("{} {}", name, printer.dim("(builtin)"))
            } else {
                name.to_string()
            }
        })
        .collect();
    printer.info("Themes", &themes.join(", "));

    if !scan_result.tokens.is_empty() {
        let tokens: Vec<String> = scan_result
            .tokens
            .iter()
            .map(|p| display_path(p))
            .collect();
        printer.info("Tokens", &tokens.join(", "));
    }

    printer.status(
        "Found",
        &format!(
            "{}, {}",
            plural(registry.len(), "theme", "themes"),
            plural(scan_result.tokens.len(), "token file", "token files")
        ),
    );

    Ok(())
}
