use crate::debug_log;
use crate::dictionary::{DEFAULT_DICTIONARY_PATH, DEFAULT_LANGUAGE};
use crate::engine::RoundView;
use crate::game_state::{GameInterface, UserAction};
use crate::outcome::Outcome;
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

pub const NEW_WORD_COMMAND: &str = ":new";
pub const QUIT_COMMAND: &str = ":quit";

/// Word Scramble: make as many words as you can from the root word
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of root words
    #[arg(short = 'i', long = "input")]
    pub word_list_path: Option<PathBuf>,

    /// Path to a newline-delimited dictionary of real words
    #[arg(short = 'd', long = "dictionary", default_value = DEFAULT_DICTIONARY_PATH)]
    pub dictionary_path: PathBuf,

    /// Language tag of the dictionary
    #[arg(short = 'l', long = "language", default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Seed for root word selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use the interactive terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Write logs to this file instead of the default location
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Maps a line of input to an action. End of input counts as quitting.
pub fn read_action<R: BufRead>(reader: &mut R) -> UserAction {
    println!("\nEnter a word ('{NEW_WORD_COMMAND}' for another root word, '{QUIT_COMMAND}' to exit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => return UserAction::Exit,
        Ok(_) => {}
        Err(e) => {
            debug_log!("read_action() - read error: {}", e);
            return UserAction::Exit;
        }
    }

    match input.trim().to_lowercase().as_str() {
        NEW_WORD_COMMAND => UserAction::NewWord,
        QUIT_COMMAND => UserAction::Exit,
        _ => UserAction::Submit(input),
    }
}

/// One history line: the word with its letter count.
#[must_use]
pub fn format_history_entry(word: &str) -> String {
    format!("({}) {}", word.chars().count(), word)
}

pub fn display_round(round: &RoundView<'_>) {
    println!("Root word: {}", round.root.to_uppercase());
    display_history(round.history);
    display_score(round.score);
}

pub fn display_history(history: &[String]) {
    for word in history {
        println!("  {}", format_history_entry(word));
    }
}

pub fn display_score(score: u32) {
    println!("Score: {score}");
}

pub fn display_outcome(outcome: Outcome, round: &RoundView<'_>) {
    match outcome {
        Outcome::Accepted => {
            if let Some(word) = round.history.first() {
                println!("Accepted: {word}");
            }
            display_history(round.history);
            display_score(round.score);
        }
        Outcome::Rejected(reason) if reason.is_silent() => {}
        Outcome::Rejected(reason) => {
            println!("{}: {}", reason.title(), reason.message());
        }
    }
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the `GameInterface` trait on a `BufRead` source.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_round(&mut self, round: &RoundView<'_>) {
        display_round(round);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        Some(read_action(&mut self.reader))
    }

    fn display_outcome(&mut self, outcome: Outcome, round: &RoundView<'_>) {
        display_outcome(outcome, round);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
