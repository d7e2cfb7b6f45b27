use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::headless::{format_transcript, run_script};
use crate::tea::message::Screen;
use crate::terminal::ProfileKind;
use crate::theme::{Theme, THEME_NAMES};

/// folioterm - portfolio command terminal
#[derive(Parser, Debug)]
#[command(name = "folioterm")]
#[command(about = "A TUI command terminal that presents a portfolio")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Terminal profile (classic, panel)
    #[arg(long, global = true)]
    pub profile: Option<ProfileKind>,

    /// Color theme
    #[arg(long, global = true)]
    pub theme: Option<String>,

    /// Start in the section menu instead of the terminal
    #[arg(long = "menu")]
    pub start_menu: bool,
}

impl Cli {
    /// Determine the startup screen based on CLI arguments
    pub fn startup_screen(&self) -> Screen {
        if self.start_menu {
            Screen::Menu
        } else {
            Screen::Terminal
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(AppConfig::default_path)
    }

    /// Load the config file and apply command line overrides
    pub async fn load_config(&self) -> Result<AppConfig> {
        let path = self.config_path();
        let mut config = AppConfig::load_from_file(&path)
            .await
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        if let Some(profile) = self.profile {
            config.profile = profile;
        }
        if let Some(theme) = &self.theme {
            if Theme::by_name(theme).is_none() {
                return Err(anyhow!(
                    "Unknown theme '{}'. Available: {}",
                    theme,
                    THEME_NAMES.join(", ")
                ));
            }
            config.theme = theme.clone();
        }
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recognized commands
    #[command(name = "commands", alias = "list")]
    List,

    /// Run input lines through a terminal session and print the transcript
    Exec(ExecArgs),

    /// Show or create the configuration file
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Input lines; read from stdin when omitted
    pub lines: Vec<String>,

    /// Print the transcript as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Print the configuration file path
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run a non-interactive subcommand
pub async fn execute(command: Commands, config: AppConfig, config_path: PathBuf) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::List => {
            let profile = config.resolve_profile();
            let catalogue = config.catalogue()?;
            for name in catalogue.names() {
                writeln!(out, "{}", name)?;
            }
            for name in profile.reserved.names() {
                writeln!(out, "{} (built-in)", name)?;
            }
        }

        Commands::Exec(args) => {
            let lines = if args.lines.is_empty() {
                read_stdin_lines()?
            } else {
                args.lines
            };
            let mut session = config.mount_session()?;
            let outcome = run_script(&mut session, &lines);
            session.unmount();

            if args.json {
                serde_json::to_writer_pretty(&mut out, &outcome)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", format_transcript(&outcome.transcript))?;
            }
        }

        Commands::Config(args) => match args.action {
            ConfigAction::Show => {
                write!(out, "{}", config.to_toml()?)?;
            }
            ConfigAction::Path => {
                writeln!(out, "{}", config_path.display())?;
            }
            ConfigAction::Init { force } => {
                if config_path.exists() && !force {
                    return Err(anyhow!(
                        "{} already exists (use --force to overwrite)",
                        config_path.display()
                    ));
                }
                AppConfig::default().save_to_file(&config_path).await?;
                writeln!(out, "Wrote {}", config_path.display())?;
            }
        },
    }

    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = std::io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        lines.push(line.context("Failed to read input line")?);
    }
    Ok(lines)
}
