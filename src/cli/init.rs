//! Init command implementation.
//!
//! Generates a starter `tailor.yaml` manifest, and optionally a theme
//! file to fork from.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::MANIFEST_FILENAME;
use crate::error::{Result, TailorError};
use crate::output::{display_path, Printer};
use crate::registry::BuiltinThemes;

/// Initialize a tailor project by generating a tailor.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Also write the builtin theme as <name>.theme.yaml to fork from
    #[arg(long)]
    pub with_theme: bool,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

const MANIFEST_TEMPLATE: &str = "\
# tailor project manifest
#
# content: globs the CSS build tool scans for class names
# theme:   a builtin theme name or a path to a *.theme.yaml file
# output:  where the composed Tailwind config is written

content:
  - \"./src/**/*.rs\"
  - \"./index.html\"
  - \"./templates/**/*.html\"

dark_mode: class
theme: financial-dark
output: tailwind.config.json

# tokens: design/base.tokens.yaml
# overrides: design/overrides.yaml
";

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(TailorError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    fs::write(&manifest_path, MANIFEST_TEMPLATE).map_err(|e| TailorError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;
    printer.status("Created", &display_path(&manifest_path));

    if args.with_theme {
        let theme = BuiltinThemes::financial_dark();
        let theme_path = args.path.join(format!("{}.theme.yaml", theme.name));

        if theme_path.exists() && !args.force {
            return Err(TailorError::Build {
                message: format!("{} already exists", display_path(&theme_path)),
                help: Some("Use --force to overwrite".to_string()),
            });
        }

        let yaml = serde_yaml::to_string(&theme).map_err(|e| TailorError::Build {
            message: format!("Failed to serialize theme: {}", e),
            help: None,
        })?;
        fs::write(&theme_path, yaml).map_err(|e| TailorError::Io {
            path: theme_path.clone(),
            message: format!("Failed to write theme: {}", e),
        })?;
        printer.status("Created", &display_path(&theme_path));
    }

    Ok(())
}
