//! CLI module - Command-line interface for Chatterbox
//!
//! This module provides a structured CLI using clap for argument parsing.

pub mod commands;

use clap::{Parser, Subcommand};

/// Chatterbox - conversational search API
#[derive(Parser)]
#[command(name = "chatterbox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API (default)
    #[command(alias = "daemon", alias = "web")]
    Serve,

    /// Create default config file
    Init,

    /// Answer a question the way the chat endpoint does, without recording it
    #[command(alias = "a")]
    Ask {
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Print the text analysis as JSON
    Analyze {
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Rewrite text in a conversational register
    Humanize {
        #[arg(required = true)]
        text: Vec<String>,
    },
}
