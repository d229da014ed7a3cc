//! CLI Adapter.

mod expand;
mod form;
mod generate;
mod presets;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api::{self, DefaultContext, RunOptions, RunOutcome};
use crate::app::config::{RuntimeConfig, load_runtime_config};
use crate::domain::{AppError, GenerationResult};

#[derive(Parser)]
#[command(name = "artprompt")]
#[command(version)]
#[command(
    about = "Compose AI art prompts from presets or keywords and expand them with Gemini",
    long_about = None
)]
struct Cli {
    /// Path to a config file (defaults to ./artprompt.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a prompt from style, angle, lighting, tone and details
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// Expand raw keywords into a full prompt
    #[clap(visible_alias = "e")]
    Expand(expand::ExpandArgs),
    /// List the preset catalog
    #[clap(visible_alias = "p")]
    Presets {
        /// Preset kind: style, angle, lighting or tone
        kind: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    crate::app::logging::init_logging();
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Generate(args) => generate::run_generate(cli.config.as_deref(), args),
        Commands::Expand(args) => expand::run_expand(cli.config.as_deref(), args),
        Commands::Presets { kind } => presets::run_presets(kind.as_deref()).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_context(config_path: Option<&std::path::Path>) -> Result<DefaultContext, AppError> {
    let work_dir = std::env::current_dir()?;
    let config: RuntimeConfig = load_runtime_config(&work_dir, config_path)?;
    api::build_context(&config)
}

fn run_options(prompt_preview: bool, copy: bool) -> RunOptions {
    RunOptions { prompt_preview, copy }
}

/// Print a run outcome and map it to an exit code.
fn report(outcome: RunOutcome) -> i32 {
    match outcome {
        RunOutcome::Preview(instruction) => {
            println!("{}", instruction);
            0
        }
        RunOutcome::Generated(GenerationResult::Success(text)) => {
            println!("{}", text);
            0
        }
        RunOutcome::Generated(GenerationResult::Failure(message)) => {
            eprintln!("Error: {}", message);
            1
        }
        RunOutcome::Generated(GenerationResult::Empty | GenerationResult::Pending) => {
            eprintln!("Error: No prompt was generated");
            1
        }
    }
}
