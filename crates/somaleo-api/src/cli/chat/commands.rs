//! Command parsing for the terminal chat loop.
//!
//! Commands are bare words (`quit`, `history`) or their slash forms
//! (`/quit`, `/history`). `subject: <name>` and `grade: <n>` set the
//! context sent with later questions. Anything else is a question for
//! the tutor.

use console::style;

use somaleo_core::curriculum::{GRADES, SUBJECTS, is_supported_grade};

/// What a line of input asks the chat loop to do.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Exit the chat session.
    Exit,
    /// Show the delivered history of this session.
    History,
    /// List supported subjects.
    Subjects,
    /// List supported grades.
    Grades,
    /// Tag later questions with a subject (canonical spelling).
    SetSubject(String),
    /// Tag later questions with a grade.
    SetGrade(u8),
    /// A recognized command with an unusable value; carries the reason.
    Invalid(String),
    /// Blank line.
    Empty,
    /// A question for the tutor.
    Ask(String),
}

/// Parse one line of input.
pub fn parse(input: &str) -> ChatCommand {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ChatCommand::Empty;
    }

    let command = trimmed.strip_prefix('/').unwrap_or(trimmed);
    if let Some((key, value)) = command.split_once(':') {
        match key.trim().to_lowercase().as_str() {
            "subject" => return parse_subject(value.trim()),
            "grade" => return parse_grade(value.trim()),
            _ => {}
        }
    }

    match command.to_lowercase().as_str() {
        "help" | "h" | "?" => ChatCommand::Help,
        "quit" | "exit" | "q" => ChatCommand::Exit,
        "history" => ChatCommand::History,
        "subjects" => ChatCommand::Subjects,
        "grades" => ChatCommand::Grades,
        _ => ChatCommand::Ask(trimmed.to_string()),
    }
}

fn parse_subject(value: &str) -> ChatCommand {
    match SUBJECTS.iter().find(|subject| subject.eq_ignore_ascii_case(value)) {
        Some(subject) => ChatCommand::SetSubject((*subject).to_string()),
        None => ChatCommand::Invalid(format!(
            "Invalid subject. Choose from: {}",
            SUBJECTS.join(", ")
        )),
    }
}

fn parse_grade(value: &str) -> ChatCommand {
    let Ok(grade) = value.parse::<u8>() else {
        return ChatCommand::Invalid("Invalid grade format".to_string());
    };
    if is_supported_grade(grade) {
        ChatCommand::SetGrade(grade)
    } else {
        let grades = GRADES
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        ChatCommand::Invalid(format!("Invalid grade. Choose from: {grades}"))
    }
}

/// The text sent upstream: the question, prefixed with the grade if one is set.
pub fn compose_question(grade: Option<u8>, question: &str) -> String {
    match grade {
        Some(grade) => format!("[Grade {grade}] {question}"),
        None => question.to_string(),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}          Show this help message", style("help").cyan());
    println!("  {}       Show this session's messages", style("history").cyan());
    println!("  {}      List supported subjects", style("subjects").cyan());
    println!("  {}        List supported grades", style("grades").cyan());
    println!("  {} Tag questions with a subject", style("subject: <name>").cyan());
    println!("  {}     Tag questions with a grade", style("grade: <n>").cyan());
    println!("  {}          End the chat session", style("quit").cyan());
    println!();
    println!("  {}", style("Anything else is sent to the tutor.").dim());
    println!();
}
