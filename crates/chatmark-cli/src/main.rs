//! Command-line interface for chatmark.
//!
//! Usage:
//!   chatmark render [PATH]       - Render markdown text (file or stdin) to an HTML fragment
//!   chatmark transcript [PATH]   - Render a JSON array of messages to transcript HTML
//!   chatmark init-config         - Write a default config file

use anyhow::{Context, Result, bail};
use chatmark_config::Config;
use chatmark_engine::{Message, TranscriptRenderer};
use clap::{Parser, Subcommand};
use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

#[derive(Debug, Parser)]
#[command(name = "chatmark", version, about = "Render chat markdown into safe HTML")]
struct Cli {
    /// Config file to use instead of ~/.config/chatmark/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Do not add target="_blank" to links
    #[arg(long, global = true)]
    same_tab: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render markdown text to an HTML fragment
    Render {
        /// Input file; reads stdin when omitted
        path: Option<PathBuf>,
    },
    /// Render a JSON array of {role, content} messages
    Transcript {
        /// Input file; reads stdin when omitted
        path: Option<PathBuf>,
    },
    /// Write the default configuration to the config path
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    log::info!("Config path: {}", config_path.display());

    if let Command::InitConfig { force } = cli.command {
        return init_config(&config_path, force);
    }

    let mut config = Config::load_or_default(&config_path)?;
    if cli.same_tab {
        config.render.open_links_in_new_tab = false;
    }
    let transcript = config.transcript_renderer();

    let html = match &cli.command {
        Command::Render { path } => {
            let text = read_input(path.as_deref())?;
            transcript.renderer().render(&text)
        }
        Command::Transcript { path } => render_transcript(&transcript, path.as_deref())?,
        Command::InitConfig { .. } => unreachable!("handled before loading config"),
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{html}")?;
    Ok(())
}

fn init_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }
    Config::default().save_to_path(config_path)?;
    log::info!("Wrote default config to {}", config_path.display());
    Ok(())
}

fn render_transcript(transcript: &TranscriptRenderer, path: Option<&Path>) -> Result<String> {
    let json = read_input(path)?;
    let messages: Vec<Message> =
        serde_json::from_str(&json).context("Failed to parse messages as JSON")?;
    log::info!("Rendering {} messages", messages.len());
    Ok(transcript.render_transcript(&messages))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
