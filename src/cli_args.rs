use std::path::PathBuf;

use clap::Parser;

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "suggestbot",
    version,
    about = "LLM-assisted unit-test suggestions for a PR diff"
)]
pub struct Cli {
    /// Path to the unified diff file for the pull request
    #[arg(long)]
    pub diff: PathBuf,

    /// Path to the changed-file list (newline-separated paths)
    #[arg(long)]
    pub files: PathBuf,

    /// Path for the generated markdown report
    #[arg(long)]
    pub output: PathBuf,

    /// Optional API schema / extra context file (backend prompts only)
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Model name to use (e.g. sonar)
    #[arg(long)]
    pub model: Option<String>,

    /// API key (otherwise uses PERPLEXITY_API_KEY env var)
    #[arg(long, env = "PERPLEXITY_API_KEY")]
    pub api_key: Option<String>,

    /// Base URL of the completions API
    #[arg(long)]
    pub api_base: Option<String>,

    /// Maximum tokens the model may produce per category
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Disable model calls; return dummy suggestions instead
    #[arg(long)]
    pub no_model: bool,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
