// SPDX-FileCopyrightText: 2026 Repovoice Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `repovoice shell` command implementation.
//!
//! An interactive stand-in for the voice platform: each typed command is
//! translated into an intent and run as a full turn against the real
//! fetcher and session store. Uses readline history and a colored prompt.

use colored::Colorize;
use repovoice_core::{Intent, RepoVoiceError, TurnRequest};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::skill::Skill;

/// Runs the interactive shell until the user stops.
pub async fn run_shell(skill: &Skill, user_id: &str) -> Result<(), RepoVoiceError> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| RepoVoiceError::Internal(format!("cannot start shell: {e}")))?;

    // Greet the way the platform would on launch.
    let launch = skill.run_turn(user_id, &TurnRequest::new("LaunchRequest")).await;
    println!("{}", launch.speech.cyan());
    println!(
        "{}",
        "(commands: updates <repo>, favorites, favorite updates, add <repo>, \
         remove <repo>, clear, help, stop)"
            .dimmed()
    );

    loop {
        match editor.readline(&"repovoice> ".green().to_string()) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);

                let request = parse_command(line);
                let stopping = request.intent == Intent::Stop.to_string();

                let response = skill.run_turn(user_id, &request).await;
                println!("{}", response.speech.cyan());

                if stopping {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", "Bye".cyan());
                break;
            }
            Err(e) => {
                return Err(RepoVoiceError::Internal(format!("readline error: {e}")));
            }
        }
    }

    Ok(())
}

/// Maps a typed shell command to the intent the platform would deliver.
///
/// Anything unrecognized becomes a made-up intent name so the dispatcher's
/// fallback branch answers, same as an unhandled voice request.
fn parse_command(line: &str) -> TurnRequest {
    let lower = line.to_lowercase();

    if let Some(repo) = lower.strip_prefix("updates ") {
        return TurnRequest::with_slot(Intent::RepoUpdates.to_string(), repo.trim());
    }
    if let Some(repo) = lower
        .strip_prefix("add favorite ")
        .or_else(|| lower.strip_prefix("add "))
    {
        return TurnRequest::with_slot(Intent::AddFavorite.to_string(), repo.trim());
    }
    if let Some(repo) = lower
        .strip_prefix("remove favorite ")
        .or_else(|| lower.strip_prefix("remove "))
    {
        return TurnRequest::with_slot(Intent::RemoveFavorite.to_string(), repo.trim());
    }

    match lower.as_str() {
        "favorites" => TurnRequest::new(Intent::GetFavorites.to_string()),
        "favorite updates" | "updates" => TurnRequest::new(Intent::FavoriteUpdates.to_string()),
        "clear" => TurnRequest::new(Intent::RemoveAllFavorites.to_string()),
        "help" => TurnRequest::new(Intent::Help.to_string()),
        "stop" | "quit" | "exit" | "bye" => TurnRequest::new(Intent::Stop.to_string()),
        "launch" => TurnRequest::new(Intent::Launch.to_string()),
        _ => TurnRequest::new("Unhandled"),
    }
}
