//! Defines the command-line interface structure using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "storycast",
    version,
    about = "Research a topic and turn it into a podcast-style story"
)]
pub struct Cli {
    /// Configuration file (defaults to ~/.storycast/config.toml)
    #[arg(long, global = true, env = "STORYCAST_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Serve the /generate-story and /generate-questions endpoints
    Serve {
        /// Address to listen on, e.g. 127.0.0.1:3000 (overrides the config file)
        #[arg(long, env = "STORYCAST_BIND")]
        bind: Option<String>,
    },
    /// Research a question and generate a story from it
    Story {
        /// What you want to learn about (at least 10 characters)
        query: String,
        /// Write the resulting story record as JSON to this file
        #[arg(long)]
        out: Option<PathBuf>,
        /// Also print the research brief
        #[arg(long)]
        show_research: bool,
    },
    /// Ask for clarifying questions about a learning topic
    Questions {
        /// The topic, described in at least 20 characters
        topic: String,
    },
    /// Write a configuration file with the default providers
    InitConfig {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },
}
