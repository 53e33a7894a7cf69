//! Build command implementation.
//!
//! Loads the project manifest, token set, and selected theme, composes
//! the Tailwind configuration, layers overrides, and writes the JSON.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::compose::{compose, Overrides, TailwindConfig};
use crate::discovery::{find_manifest, load_registry, scan, Manifest};
use crate::error::{Result, TailorError};
use crate::output::{display_path, Printer};
use crate::types::{Theme, TokenSet};
use crate::validation::{print_diagnostics, validate_all};

/// Compose the Tailwind configuration from tokens and a theme
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Project root (looks for tailor.yaml and definition files here)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Theme to compose: a theme name or a path to a theme file
    #[arg(long)]
    pub theme: Option<String>,

    /// Token definition file (defaults to the builtin token set)
    #[arg(long)]
    pub tokens: Option<PathBuf>,

    /// Overrides file to layer onto the composed config
    #[arg(long)]
    pub overrides: Option<PathBuf>,

    /// Output file (defaults to the manifest's output setting)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print the composed config to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Skip the validation pass before composing
    #[arg(long)]
    pub skip_checks: bool,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let root = &args.path;

    let manifest = match find_manifest(root) {
        Some(path) => Manifest::load(&path)?,
        None => Manifest::default(),
    };

    let tokens = load_tokens(&args, &manifest, root)?;
    let theme = select_theme(&args, &manifest, root)?;

    if !args.skip_checks {
        let result = validate_all(&tokens, std::slice::from_ref(&theme));
        if !result.is_ok() {
            print_diagnostics(&result);
        }
        if result.has_errors() {
            return Err(TailorError::Build {
                message: format!("Validation failed for theme '{}'", theme.name),
                help: Some("Fix the reported errors, or rerun with --skip-checks".to_string()),
            });
        }
    }

    printer.status("Composing", &theme.name);
    let mut extend = compose(&tokens, &theme)?;

    let overrides_path = args
        .overrides
        .clone()
        .or_else(|| manifest.overrides.as_ref().map(|p| resolve(root, p)));
    if let Some(path) = overrides_path {
        let overrides = Overrides::load(&path)?;
        if !overrides.is_empty() {
            printer.status("Layering", &display_path(&path));
            overrides.apply_to(&mut extend);
        }
    }

    let config = TailwindConfig::new(manifest.content.clone(), manifest.dark_mode.clone(), extend);
    let mut json = config.to_json()?;
    json.push('\n');

    if args.stdout {
        print!("{}", json);
        return Ok(());
    }

    let output = args
        .output
        .clone()
        .map(|p| resolve(root, &p))
        .unwrap_or_else(|| resolve(root, &manifest.output));

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| TailorError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    fs::write(&output, json).map_err(|e| TailorError::Io {
        path: output.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.status("Finished", &display_path(&output));

    Ok(())
}

/// Load the token set from CLI flag, manifest, or builtin default.
fn load_tokens(args: &BuildArgs, manifest: &Manifest, root: &Path) -> Result<TokenSet> {
    let path = args
        .tokens
        .clone()
        .or_else(|| manifest.tokens.as_ref().map(|p| resolve(root, p)));

    match path {
        Some(path) => TokenSet::load(&path),
        None => Ok(TokenSet::default_tokens()),
    }
}

/// Resolve the selected theme: a file path or a registered name.
fn select_theme(args: &BuildArgs, manifest: &Manifest, root: &Path) -> Result<Theme> {
    let selection = args
        .theme
        .clone()
        .unwrap_or_else(|| manifest.effective_theme().to_string());

    // A path wins over a name so projects can point at unregistered files
    let as_path = resolve(root, Path::new(&selection));
    if selection.ends_with(".yaml") || selection.ends_with(".yml") || as_path.is_file() {
        return Theme::load(&as_path);
    }

    let registry = load_registry(&scan(root)?)?;
    registry
        .get(&selection)
        .cloned()
        .ok_or_else(|| TailorError::Build {
            message: format!("Theme not found: {}", selection),
            help: Some(format!(
                "Known themes: {}",
                registry.names().collect::<Vec<_>>().join(", ")
            )),
        })
}

/// Join a relative path onto the project root.
fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn build_args(path: PathBuf) -> BuildArgs {
        BuildArgs {
            path,
            theme: None,
            tokens: None,
            overrides: None,
            output: None,
            stdout: false,
            skip_checks: false,
        }
    }

    fn read_config(path: &Path) -> serde_json::Value {
        let content = fs::read_to_string(path).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    #[test]
    fn test_build_with_defaults() {
        let dir = tempdir().unwrap();
        let args = build_args(dir.path().to_path_buf());

        run(args, &Printer::new()).unwrap();

        let config = read_config(&dir.path().join("tailwind.config.json"));
        let extend = &config["theme"]["extend"];

        assert_eq!(extend["colors"]["bg-primary"], "#0A0E27");
        assert_eq!(extend["colors"]["bullish"], "#10B981");
        assert_eq!(extend["fontSize"]["sm"], "0.875rem");
        assert_eq!(extend["borderRadius"]["md"], "6px");
        assert_eq!(extend["transitionDuration"]["DEFAULT"], "200ms");
        assert_eq!(config["darkMode"], "class");
    }

    #[test]
    fn test_build_with_manifest_output() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("tailor.yaml"),
            "output: dist/tw.json\ndark_mode: media\n",
        )
        .unwrap();

        run(build_args(dir.path().to_path_buf()), &Printer::new()).unwrap();

        let config = read_config(&dir.path().join("dist/tw.json"));
        assert_eq!(config["darkMode"], "media");
    }

    #[test]
    fn test_build_with_discovered_theme() {
        let dir = tempdir().unwrap();
        let mut theme = crate::registry::BuiltinThemes::financial_dark();
        theme.name = "custom-dark".to_string();
        theme
            .colours
            .bg
            .insert("primary".to_string(), "#000000".to_string());
        fs::write(
            dir.path().join("custom.theme.yaml"),
            serde_yaml::to_string(&theme).unwrap(),
        )
        .unwrap();

        let mut args = build_args(dir.path().to_path_buf());
        args.theme = Some("custom-dark".to_string());

        run(args, &Printer::new()).unwrap();

        let config = read_config(&dir.path().join("tailwind.config.json"));
        assert_eq!(config["theme"]["extend"]["colors"]["bg-primary"], "#000000");
    }

    #[test]
    fn test_build_with_overrides() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("overrides.yaml"),
            "colors:\n  my-special: \"#FF00FF\"\n",
        )
        .unwrap();

        let mut args = build_args(dir.path().to_path_buf());
        args.overrides = Some(dir.path().join("overrides.yaml"));

        run(args, &Printer::new()).unwrap();

        let config = read_config(&dir.path().join("tailwind.config.json"));
        let colors = &config["theme"]["extend"]["colors"];

        assert_eq!(colors["my-special"], "#FF00FF");
        // composed keys survive the merge
        assert_eq!(colors["accent"], "#3B82F6");
    }

    #[test]
    fn test_build_unknown_theme_fails() {
        let dir = tempdir().unwrap();
        let mut args = build_args(dir.path().to_path_buf());
        args.theme = Some("no-such-theme".to_string());

        let err = run(args, &Printer::new()).unwrap_err();
        assert!(matches!(err, TailorError::Build { .. }));
    }

    #[test]
    fn test_build_invalid_theme_file_fails_checks() {
        let dir = tempdir().unwrap();
        // A theme missing required roles entirely
        fs::write(
            dir.path().join("broken.theme.yaml"),
            "name: broken\ncolors:\n  bg: {}\n  border: {}\n  text: {}\n  semantic: {}\n  accent: {}\n",
        )
        .unwrap();

        let mut args = build_args(dir.path().to_path_buf());
        args.theme = Some(
            dir.path()
                .join("broken.theme.yaml")
                .to_string_lossy()
                .into_owned(),
        );

        let err = run(args, &Printer::new()).unwrap_err();
        assert!(matches!(err, TailorError::Build { .. }));
    }

    #[test]
    fn test_build_with_token_file() {
        let dir = tempdir().unwrap();
        let mut tokens = TokenSet::default_tokens();
        tokens.radius.insert("md".to_string(), "5px".to_string());
        fs::write(
            dir.path().join("custom.tokens.yaml"),
            serde_yaml::to_string(&tokens).unwrap(),
        )
        .unwrap();

        let mut args = build_args(dir.path().to_path_buf());
        args.tokens = Some(dir.path().join("custom.tokens.yaml"));

        run(args, &Printer::new()).unwrap();

        let config = read_config(&dir.path().join("tailwind.config.json"));
        assert_eq!(config["theme"]["extend"]["borderRadius"]["md"], "5px");
    }
}
