use clap::Parser;
use std::path::PathBuf;

/// Hosts a single embedded web page in a native window.
#[derive(Parser, Debug)]
#[command(name = "webpane-demo", version, about)]
pub struct Args {
    /// URL to load.
    #[arg(long, default_value = "https://example.com")]
    pub url: String,

    /// Background color as hex (e.g. "#1e1e2e").
    #[arg(long)]
    pub background: Option<String>,

    /// Path to a stylesheet injected at document start.
    #[arg(long)]
    pub css: Option<PathBuf>,

    /// Path to a script injected at document end.
    #[arg(long)]
    pub js: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
