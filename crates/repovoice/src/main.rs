// SPDX-FileCopyrightText: 2026 Repovoice Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Repovoice - voice-skill session handler for repository updates.
//!
//! This is the binary entry point: it loads configuration, wires the
//! dispatcher to the real fetcher and session store, and exposes an
//! interactive shell plus a one-shot turn mode.

mod shell;
mod skill;

use clap::{Parser, Subcommand};
use repovoice_core::TurnRequest;

use crate::skill::Skill;

/// Repovoice - spoken update summaries for your favorite repositories.
#[derive(Parser, Debug)]
#[command(name = "repovoice", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch an interactive shell session.
    Shell {
        /// User identity the session's favorites are stored under.
        #[arg(long, default_value = "shell")]
        user: String,
    },
    /// Run a single turn and print the spoken response.
    Turn {
        /// Intent name, e.g. RepoUpdates or AddFavorite.
        #[arg(long)]
        intent: String,
        /// Raw repo-name slot text, if the intent takes one.
        #[arg(long)]
        repo: Option<String>,
        /// User identity the turn runs under.
        #[arg(long, default_value = "shell")]
        user: String,
    },
    /// Print the effective configuration.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match repovoice_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            repovoice_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    let result = match cli.command {
        Some(Commands::Shell { user }) => match Skill::from_config(&config) {
            Ok(skill) => shell::run_shell(&skill, &user).await,
            Err(e) => Err(e),
        },
        Some(Commands::Turn { intent, repo, user }) => match Skill::from_config(&config) {
            Ok(skill) => {
                let request = match repo {
                    Some(repo) => TurnRequest::with_slot(intent, repo),
                    None => TurnRequest::new(intent),
                };
                let response = skill.run_turn(&user, &request).await;
                println!("{}", response.speech);
                Ok(())
            }
            Err(e) => Err(e),
        },
        Some(Commands::Config) => {
            match toml::to_string_pretty(&config) {
                Ok(rendered) => {
                    print!("{rendered}");
                    Ok(())
                }
                Err(e) => Err(repovoice_core::RepoVoiceError::Internal(format!(
                    "cannot render config: {e}"
                ))),
            }
        }
        None => {
            println!("repovoice: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("repovoice={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
