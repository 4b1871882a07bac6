use crate::Cli;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "sonar";
pub const DEFAULT_API_BASE: &str = "https://api.perplexity.ai";
pub const DEFAULT_MAX_TOKENS: u32 = 800;

/// Final resolved configuration for suggestbot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Missing key does not abort the run; the client turns it into an
    /// error string inside the report instead.
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub max_tokens: u32,
}

impl Config {
    /// Build the final config from CLI flags, environment, TOML file, and defaults.
    ///
    /// Precedence:
    ///   1. CLI flags (`--model`, `--api-base`, ...)
    ///   2. Env vars `SUGGESTBOT_MODEL`, `SUGGESTBOT_API_BASE`
    ///   3. TOML `~/.config/suggestbot.toml`
    ///   4. Hardcoded defaults ("sonar", the Perplexity endpoint, 800 tokens)
    pub fn from_sources(cli: &Cli) -> Self {
        let file_cfg = load_file_config().unwrap_or_default();

        let model_env = env::var("SUGGESTBOT_MODEL").ok();
        let api_base_env = env::var("SUGGESTBOT_API_BASE").ok();
        let api_key_env = env::var("PERPLEXITY_API_KEY").ok();

        let model = cli
            .model
            .clone()
            .or(model_env)
            .or(file_cfg.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let api_base = cli
            .api_base
            .clone()
            .or(api_base_env)
            .or(file_cfg.api_base)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let api_key = cli.api_key.clone().or(api_key_env).or(file_cfg.api_key);

        let max_tokens = cli
            .max_tokens
            .or(file_cfg.max_tokens)
            .unwrap_or(DEFAULT_MAX_TOKENS);

        Config {
            api_key,
            model,
            api_base,
            max_tokens,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    /// Default model to use when not provided via CLI or env.
    pub model: Option<String>,
    pub api_base: Option<String>,
    pub api_key: Option<String>,
    pub max_tokens: Option<u32>,
}

/// Return `~/.config/suggestbot.toml`
fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("suggestbot.toml"))
}

fn load_file_config() -> Option<FileConfig> {
    let path = config_path()?;
    if !path.exists() {
        return None;
    }

    let data = fs::read_to_string(&path).ok()?;
    toml::from_str::<FileConfig>(&data).ok()
}
