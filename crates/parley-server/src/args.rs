//! Command-line arguments

use clap::Parser;

/// Parley chat relay server
#[derive(Debug, Parser)]
#[command(name = "parley-server", version, about)]
pub struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 3000)]
    pub port: u16,

    /// Model identifier to request from the provider
    #[arg(long)]
    pub model: Option<String>,

    /// Maximum output tokens per reply
    #[arg(long)]
    pub max_tokens: Option<u32>,
}
