use clap::{Parser, Subcommand};
use textstats_core::remote::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Word, sentence and top-word statistics for text
#[derive(Parser, Debug)]
#[command(name = "textstats", version)]
#[command(about = "Word, sentence and top-word statistics for text")]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count words and sentences and rank the most frequent words
    Analyze(AnalyzeArgs),
    /// Show the sentence segments and normalized tokens
    ///
    /// Text without any token reports no sentences, as `analyze` does.
    Tokens(TokensArgs),
}

#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    /// Input file path (use - for stdin)
    #[arg(default_value = "-")]
    pub input: String,

    /// Read from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Analysis strategy: local, remote, auto
    #[arg(short, long, default_value = "auto")]
    pub strategy: String,

    #[command(flatten)]
    pub remote: RemoteArgs,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct RemoteArgs {
    /// API key for the remote model; without one, auto stays local
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub api_base: String,

    /// Model name for the remote strategy
    #[arg(long, env = "TEXTSTATS_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Remote request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(clap::Args, Debug)]
pub struct TokensArgs {
    /// Input file path (use - for stdin)
    #[arg(default_value = "-")]
    pub input: String,

    /// Read from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}
