use anyhow::{Context, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    /// Directory where saved albums are written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Print the built-in sample albums before prompting
    #[serde(default = "default_show_samples")]
    pub show_samples: bool,
    /// Give up on a prompt after this many invalid answers. Unbounded if absent.
    #[serde(default)]
    pub max_attempts: Option<u32>,
}

/// Config layout this build understands
const SUPPORTED_VERSION: u32 = 1;

fn default_version() -> u32 {
    SUPPORTED_VERSION
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_show_samples() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            output_dir: default_output_dir(),
            show_samples: default_show_samples(),
            max_attempts: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.to_string_lossy()))?;
        let cfg: Config =
            toml::from_str(&contents).with_context(|| "Failed to parse config TOML")?;
        if cfg.version != SUPPORTED_VERSION {
            bail!(
                "Unsupported config version {}, expected {SUPPORTED_VERSION}",
                cfg.version
            );
        }
        Ok(cfg)
    }
}
