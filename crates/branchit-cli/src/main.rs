use std::path::PathBuf;

use anyhow::{Context, Result};
use branchit_application::ConfigService;
use branchit_core::Screen;
use clap::{ArgAction, Parser, Subcommand};

mod commands;
mod logging;
mod text_renderer;

#[derive(Parser)]
#[command(name = "branchit")]
#[command(about = "BranchIT - campus social networking shell", long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/branchit/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the frame the app shows for a window width
    Frame {
        /// Window width in dp
        #[arg(long, default_value_t = 411)]
        width: u32,
        /// Screen to select after login (home, connect, post, chat, profile, updates, settings)
        #[arg(long)]
        screen: Option<Screen>,
        /// Show the app without signing in
        #[arg(long)]
        logged_out: bool,
        /// Sign in with this profile JSON instead of the demo profile
        #[arg(long, conflicts_with = "logged_out")]
        profile: Option<PathBuf>,
        /// Print the layout decision as JSON
        #[arg(long)]
        json: bool,
    },
    /// Walk through login, navigation, rotation and logout
    Demo {
        /// Starting window width in dp
        #[arg(long, default_value_t = 411)]
        width: u32,
    },
    /// Validate a profile JSON file and report its strength
    Profile {
        path: PathBuf,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    let config_service = match &cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new()?,
    };
    let config = config_service
        .load()
        .with_context(|| format!("Failed to load config from {}", config_service.path().display()))?;

    match cli.command {
        Commands::Frame {
            width,
            screen,
            logged_out,
            profile,
            json,
        } => commands::frame::run(
            &config,
            commands::frame::FrameArgs {
                width,
                screen,
                logged_out,
                profile,
                json,
            },
        )?,
        Commands::Demo { width } => commands::demo::run(&config, width)?,
        Commands::Profile { path, json } => commands::profile::run(&path, json)?,
    }

    Ok(())
}
