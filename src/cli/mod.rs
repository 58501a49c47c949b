//! CLI for the MCQ answer relay

pub mod serve;

use clap::{Parser, Subcommand};

/// MCQ answer relay - forwards multiple-choice questions to Gemini
#[derive(Parser)]
#[command(name = "mcq-relay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the relay server
    Serve,
}
