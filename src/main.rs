use clap::Parser;
use miette::Result;
use tailor::cli::{Cli, Commands};
use tailor::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => tailor::cli::build::run(args, &printer)?,
        Commands::Init(args) => tailor::cli::init::run(args, &printer)?,
        Commands::Validate(args) => tailor::cli::validate::run(args, &printer)?,
        Commands::List(args) => tailor::cli::list::run(args, &printer)?,
        Commands::Completions(args) => tailor::cli::completions::run(args)?,
    }

    Ok(())
}
