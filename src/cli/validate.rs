//! Validate command implementation.
//!
//! Runs the full check suite over the project's token set and every
//! discovered theme, without composing anything.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{find_manifest, scan, Manifest};
use crate::error::{Result, TailorError};
use crate::output::{plural, Printer};
use crate::types::{Theme, TokenSet};
use crate::validation::{print_diagnostics, validate_all};

/// Validate token and theme definitions without composing
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Project root to scan for definition files
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Also validate the builtin themes and token set
    #[arg(long)]
    pub builtins: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let root = &args.path;
    let scan_result = scan(root)?;

    let manifest = match find_manifest(root) {
        Some(path) => Manifest::load(&path)?,
        None => Manifest::default(),
    };

    let tokens = match &manifest.tokens {
        Some(path) => TokenSet::load(&root.join(path))?,
        None => match scan_result.tokens.first() {
            Some(path) => TokenSet::load(path)?,
            None => TokenSet::default_tokens(),
        },
    };

    let mut themes = Vec::new();
    if args.builtins || scan_result.themes.is_empty() {
        themes.extend(crate::registry::BuiltinThemes::all());
    }
    for path in &scan_result.themes {
        themes.push(Theme::load(path)?);
    }

    printer.status(
        "Checking",
        &format!(
            "{}, {}",
            plural(themes.len(), "theme", "themes"),
            plural(scan_result.tokens.len().max(1), "token set", "token sets"),
        ),
    );

    let result = validate_all(&tokens, &themes);
    print_diagnostics(&result);

    if result.has_errors() {
        return Err(TailorError::Build {
            message: format!(
                "Validation failed with {}",
                plural(result.error_count(), "error", "errors")
            ),
            help: None,
        });
    }

    Ok(())
}
