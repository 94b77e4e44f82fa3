use std::path::Path;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use figma_design_tokens::{extract_design_system, extract_design_tokens, summary};

/// Flatten a design-tool document export into design-system and design-token JSON
#[derive(Parser, Debug)]
#[command(name = "figma-tokens")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract the root frame as a nested tree into design-system.json
    System,
    /// Extract flat color, font and component tokens into design-tokens.json
    Tokens,
    /// Run both extractions
    All,
}

fn system(dir: &Path) -> Result<()> {
    let system = extract_design_system(dir)?;
    summary::design_system(&mut std::io::stdout().lock(), system.as_ref()).into_diagnostic()
}

fn tokens(dir: &Path) -> Result<()> {
    let tokens = extract_design_tokens(dir)?;
    summary::design_tokens(&mut std::io::stdout().lock(), &tokens).into_diagnostic()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let dir = Path::new(".");

    match cli.command {
        Commands::System => system(dir)?,
        Commands::Tokens => tokens(dir)?,
        Commands::All => {
            system(dir)?;
            tokens(dir)?;
        }
    }

    Ok(())
}
