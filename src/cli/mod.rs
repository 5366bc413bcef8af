use clap::Parser;
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use crate::config::Config;
use crate::session::{self, Console, Settings};

#[derive(Parser, Debug)]
#[command(name = "albumdeck")]
#[command(version = "0.1")]
#[command(about = "Build a music album from the console and save it as text")]
pub struct Cli {
    /// Path to the config TOML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory where the album file is written (overrides the config)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Do not print the sample albums
    #[arg(long)]
    pub no_samples: bool,
}

impl Cli {
    /// Config file values, with command line flags taking precedence
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut cfg = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(dir) = &self.output_dir {
            cfg.output_dir = dir.clone();
        }
        if self.no_samples {
            cfg.show_samples = false;
        }
        Ok(cfg)
    }
}

/// Entrypoint for CLI
pub fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let cfg = cli.resolve_config()?;
    log::debug!("using {cfg:?}");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(stdin.lock(), stdout.lock(), &cfg)
}

pub fn run_with<R: BufRead, W: Write>(input: R, output: W, cfg: &Config) -> anyhow::Result<()> {
    let mut console = Console::new(input, output, cfg.max_attempts);
    let settings = Settings {
        output_dir: &cfg.output_dir,
        show_samples: cfg.show_samples,
    };

    let outcome = session::run_session(&mut console, &settings)?;
    log::info!(
        "session finished with album '{}' ({} tracks)",
        outcome.album.name(),
        outcome.album.tracks().len()
    );
    Ok(())
}
