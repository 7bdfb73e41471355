use std::net::SocketAddr;
use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use tubesum_client::{DEFAULT_BACKEND_URL, MODEL_OPTIONS};

/// YouTube video summarizer backed by Gemini
#[derive(Debug, Parser)]
#[command(name = "tubesum", version, about = "Summarize YouTube videos with hosted Gemini models")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "tubesum.toml", env = "TUBESUM_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the summarization API server
    Serve {
        /// Override the listen address
        #[arg(long, env = "TUBESUM_LISTEN")]
        listen: Option<SocketAddr>,
    },
    /// Submit a video to a running server and print the summary
    Summarize {
        /// YouTube video link
        #[arg(default_value = "")]
        youtube_link: String,

        /// Gemini model to use
        #[arg(short, long, default_value = MODEL_OPTIONS[0], value_parser = PossibleValuesParser::new(MODEL_OPTIONS))]
        model: String,

        /// Custom instructions, e.g. "focus on the technical aspects"
        #[arg(short, long, default_value = "")]
        instructions: String,

        /// Base URL of the tubesum server
        #[arg(long, default_value = DEFAULT_BACKEND_URL, env = "TUBESUM_BACKEND_URL")]
        backend_url: String,
    },
}
