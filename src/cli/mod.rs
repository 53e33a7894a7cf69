pub mod build;
pub mod completions;
pub mod init;
pub mod list;
pub mod validate;

use clap::{Parser, Subcommand};

/// tailor - Tailwind theme configuration composer
#[derive(Parser, Debug)]
#[command(name = "tailor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose the Tailwind configuration from tokens and a theme
    Build(build::BuildArgs),

    /// Initialize a tailor project (generates tailor.yaml)
    Init(init::InitArgs),

    /// Validate token and theme definitions without composing
    Validate(validate::ValidateArgs),

    /// List builtin and discovered themes
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
