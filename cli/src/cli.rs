use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Show the program version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Optional custom configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long)]
    pub nc: bool,

    /// Browser to read (chrome, edge or brave), skipping the browser prompt
    #[arg(short, long)]
    pub browser: Option<String>,

    /// Profile directory name, skipping profile discovery and its prompt
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Output format: json for the raw decoded document, tree otherwise
    #[arg(short = 'f', long)]
    pub format: Option<String>,
}
