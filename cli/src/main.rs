mod cli;
mod format;
mod interactive;
mod output;

use clap::Parser;
use marktree::config::Config;
use marktree::error::{MarktreeError, Result};
use marktree::platform::{Browser, Os};
use marktree::utils;

use crate::format::OutputFormat;
use crate::interactive::{Shell, ShellOptions};

fn main() {
    // Initialize logger
    env_logger::init();

    let args = cli::Cli::parse();

    if args.version {
        println!("marktree {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Err(e) = run(args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: cli::Cli) -> Result<()> {
    // Load configuration
    let cfg = if let Some(config_path) = &args.config {
        Config::load_from_path(config_path)?
    } else {
        Config::load()
    };

    let browser = match args.browser.as_deref().or(cfg.default_browser.as_deref()) {
        Some(name) => Some(
            Browser::from_string(name)
                .ok_or_else(|| MarktreeError::Other(format!("Unknown browser: {}", name)))?,
        ),
        None => None,
    };

    let os = Os::current().ok_or_else(|| {
        MarktreeError::Other(format!("Unsupported platform: {}", std::env::consts::OS))
    })?;
    let home = utils::home_dir()?;

    let opts = ShellOptions {
        browser,
        profile: args.profile.clone(),
        format: args
            .format
            .as_deref()
            .map(OutputFormat::from_string)
            .unwrap_or(OutputFormat::Tree),
        color: !args.nc && cfg.color,
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());
    shell.run(os, &home, &opts)
}
