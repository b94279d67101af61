//! Interactive terminal chat with the tutor.
//!
//! Drives the same `TutorService` as the HTTP API, in-process. Each line
//! is either a command (see [`commands`]) or a question. A subject set with
//! `subject:` is recorded on later questions; a grade set with `grade:`
//! prefixes them.

pub mod commands;

use std::io::Write;

use anyhow::Result;
use console::style;
use tokio::io::{AsyncBufReadExt, BufReader};

use somaleo_core::curriculum::TUTOR_NAME;
use somaleo_types::history::{Sender, TutorRequest, resolve_session_id};

use crate::cli::curriculum::{print_grades, print_subjects};
use crate::state::AppState;

use self::commands::ChatCommand;

/// Run the chat loop until `quit` or end of input.
pub async fn run_chat(state: &AppState, session: Option<String>) -> Result<()> {
    let session_id = resolve_session_id(session.as_deref()).to_string();

    println!();
    println!(
        "  {} {} {}",
        style("🎓").bold(),
        style(TUTOR_NAME).cyan().bold(),
        style(format!("(session: {session_id})")).dim()
    );
    println!(
        "  {}",
        style("Ask a question, or type 'help' for commands.").dim()
    );
    if !state.tutor.is_ready() {
        println!(
            "  {} {} is not set; questions will fail.",
            style("⚠").yellow(),
            style(&state.config.upstream.api_key_env).yellow()
        );
    }
    println!();

    let mut current_subject: Option<String> = None;
    let mut current_grade: Option<u8> = None;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", style("you>").green().bold());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        match commands::parse(&line) {
            ChatCommand::Empty => continue,
            ChatCommand::Exit => break,
            ChatCommand::Help => commands::print_help(),
            ChatCommand::Subjects => {
                print_subjects();
                println!();
            }
            ChatCommand::Grades => {
                print_grades();
                println!();
            }
            ChatCommand::History => print_history(state, &session_id).await?,
            ChatCommand::SetSubject(subject) => {
                println!("  {} Subject set to {}", style("✓").green(), style(&subject).cyan());
                current_subject = Some(subject);
            }
            ChatCommand::SetGrade(grade) => {
                println!("  {} Grade set to {}", style("✓").green(), style(grade).cyan());
                current_grade = Some(grade);
            }
            ChatCommand::Invalid(reason) => {
                println!("  {} {reason}", style("✗").red());
            }
            ChatCommand::Ask(question) => {
                let request = TutorRequest {
                    message: Some(commands::compose_question(current_grade, &question)),
                    subject: current_subject.clone(),
                    session_id: Some(session_id.clone()),
                    ..Default::default()
                };
                match state.tutor.ask(&request).await {
                    Ok(reply) => {
                        println!();
                        println!("{} {}", style("tutor>").cyan().bold(), reply.content);
                        println!();
                    }
                    Err(e) => {
                        println!("  {} {e}", style("✗").red());
                    }
                }
            }
        }
    }

    println!("  {}", style("Kwaheri! Keep learning.").dim());
    Ok(())
}

async fn print_history(state: &AppState, session_id: &str) -> Result<()> {
    let messages = state.tutor.history(Some(session_id), 0).await?;
    if messages.is_empty() {
        println!("  {}", style("No messages yet.").dim());
        return Ok(());
    }

    println!();
    for message in messages {
        let who = match message.sender {
            Sender::User => style("you").green(),
            Sender::Ai => style("tutor").cyan(),
        };
        println!(
            "  {} {}: {}",
            style(message.timestamp.format("%H:%M:%S")).dim(),
            who,
            message.content
        );
    }
    println!();
    Ok(())
}
