//! Layered configuration for the table-setup commands.
//!
//! Values resolve in precedence order: built-in defaults, then a TOML
//! config file, then `FELT_*` environment variables. Command-line flags
//! sit above all three; the handlers apply them after loading and then
//! re-run [`validate`].
//!
//! The file is `felt.toml` in the working directory, or whatever
//! `FELT_CONFIG` (or `--config`) points at. An explicitly named file must
//! exist; the default path is optional.

use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

use felt_engine::player::STARTING_STACK;

/// Config file read when no explicit path is given.
pub const DEFAULT_CONFIG_PATH: &str = "felt.toml";

/// Upper bound on AI opponents; with the human seat this caps a table at 9.
pub const MAX_OPPONENTS: usize = 8;

const PROFILES: [&str; 4] = ["cautious", "balanced", "aggressive", "random"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub opponents: usize,
    pub seed: Option<u64>,
    pub profile: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_stack: STARTING_STACK,
            opponents: 3,
            seed: None,
            profile: "random".into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Loads config from the default locations only.
pub fn load() -> Result<Config, ConfigError> {
    load_from(None)
}

/// Loads config, preferring `path` over `FELT_CONFIG` over `felt.toml`.
///
/// A path named by the caller or the environment must be readable; only
/// the default path is allowed to be absent.
pub fn load_from(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut cfg = Config::default();

    let env_path = std::env::var("FELT_CONFIG").ok().filter(|p| !p.is_empty());
    let explicit = path.map(str::to_string).or(env_path);

    let contents = match &explicit {
        Some(p) => Some(fs::read_to_string(p)?),
        None => match fs::read_to_string(DEFAULT_CONFIG_PATH) {
            Ok(s) => Some(s),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        },
    };
    if let Some(s) = &contents {
        apply_file(&mut cfg, s)?;
    }

    if let Ok(stack) = std::env::var("FELT_STACK")
        && !stack.is_empty()
    {
        cfg.starting_stack = stack.parse().map_err(|_| {
            ConfigError::Invalid(format!("FELT_STACK must be a number, got '{}'", stack))
        })?;
    }
    if let Ok(opponents) = std::env::var("FELT_OPPONENTS")
        && !opponents.is_empty()
    {
        cfg.opponents = opponents.parse().map_err(|_| {
            ConfigError::Invalid(format!("FELT_OPPONENTS must be a number, got '{}'", opponents))
        })?;
    }
    if let Ok(seed) = std::env::var("FELT_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(seed.parse().map_err(|_| {
            ConfigError::Invalid(format!("FELT_SEED must be a number, got '{}'", seed))
        })?);
    }
    if let Ok(profile) = std::env::var("FELT_PROFILE")
        && !profile.is_empty()
    {
        cfg.profile = profile;
    }

    validate(&cfg)?;
    Ok(cfg)
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    opponents: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    profile: Option<String>,
}

fn apply_file(cfg: &mut Config, contents: &str) -> Result<(), ConfigError> {
    let f: FileConfig = toml::from_str(contents)?;
    if let Some(v) = f.starting_stack {
        cfg.starting_stack = v;
    }
    if let Some(v) = f.opponents {
        cfg.opponents = v;
    }
    if let Some(v) = f.seed {
        cfg.seed = Some(v);
    }
    if let Some(v) = f.profile {
        cfg.profile = v;
    }
    Ok(())
}

/// Rejects configs no table can be built from. Handlers call this again
/// after merging command-line flags on top of the loaded values.
pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid("starting_stack must be > 0".into()));
    }
    if cfg.opponents == 0 || cfg.opponents > MAX_OPPONENTS {
        return Err(ConfigError::Invalid(format!(
            "opponents must be between 1 and {}",
            MAX_OPPONENTS
        )));
    }
    if !PROFILES.contains(&cfg.profile.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "unknown profile '{}', expected cautious, balanced, aggressive, or random",
            cfg.profile
        )));
    }
    Ok(())
}
