//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands;
use ccverify::config::Config;
use ccverify::output::OutputMode;

/// ccverify - Score whether an API response came from the real Claude Code CLI
#[derive(Parser, Debug)]
#[command(
    name = "ccverify",
    version,
    about = "Score whether an API response came from the real Claude Code CLI",
    long_about = "Run a weighted battery of heuristic checks over a captured API response.\n\n\
                  Checks look at the signature length, the response envelope, and\n\
                  identity and tool keywords in the answer and thinking text.\n\
                  The score maps to a verdict: genuine, suspected or likely_fake."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ~/.ccverify/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Verify a captured response
    Verify(VerifyArgs),

    /// Call an endpoint with a test prompt, then verify its response
    #[cfg(feature = "fetch")]
    Test(TestArgs),

    /// Import API settings from shell `export` lines
    ImportEnv {
        /// File with export lines (`-` or omitted for stdin)
        file: Option<String>,

        /// Save the imported settings to the config file
        #[arg(long)]
        save: bool,
    },

    /// Find the signature in a response JSON body
    ExtractSignature {
        /// Response file (`-` or omitted for stdin)
        file: Option<String>,
    },

    /// List the checks that would run
    Checks {
        /// Mode: quick, full
        #[arg(short, long)]
        mode: Option<String>,

        /// Leave out identity checks
        #[arg(long)]
        skip_identity: bool,
    },

    /// List suggested model names
    Models {
        /// API type: anthropic, openai
        #[arg(long)]
        api_type: Option<String>,
    },

    /// Show version
    Version,
}

/// Inputs of a verification run
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Mode: quick, full
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Signature value (wins over one found in the response)
    #[arg(short, long)]
    pub signature: Option<String>,

    /// Minimum signature length
    #[arg(long)]
    pub signature_min: Option<usize>,

    /// Response JSON file (`-` for stdin)
    #[arg(short, long)]
    pub response: Option<String>,

    /// Answer text
    #[arg(short, long, conflicts_with = "answer_file")]
    pub answer: Option<String>,

    /// File with the answer text
    #[arg(long)]
    pub answer_file: Option<String>,

    /// Thinking text
    #[arg(short, long, conflicts_with = "thinking_file")]
    pub thinking: Option<String>,

    /// File with the thinking text
    #[arg(long)]
    pub thinking_file: Option<String>,

    /// Leave out identity checks (for prompts that don't ask about identity)
    #[arg(long)]
    pub skip_identity: bool,

    /// Exit with an error when the verdict is likely_fake
    #[arg(long)]
    pub ci: bool,
}

/// Settings of a live API test
#[cfg(feature = "fetch")]
#[derive(Args, Debug)]
pub struct TestArgs {
    /// API type: anthropic, openai
    #[arg(long)]
    pub api_type: Option<String>,

    /// Endpoint URL
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// API key
    #[arg(short, long)]
    pub key: Option<String>,

    /// Model name
    #[arg(long)]
    pub model: Option<String>,

    /// Test prompt
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Mode used for the follow-up verification: quick, full
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Signature value for the follow-up verification
    #[arg(short, long)]
    pub signature: Option<String>,

    /// Leave out identity checks (for prompts that don't ask about identity)
    #[arg(long)]
    pub skip_identity: bool,

    /// Only fetch; don't verify the response
    #[arg(long)]
    pub no_verify: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };
    let config = Config::load_from(&config_path);
    log::debug!("using config {}", config_path.display());

    match cli.command {
        Some(Command::Verify(args)) => commands::verify(&args, &config, output_mode),
        #[cfg(feature = "fetch")]
        Some(Command::Test(args)) => commands::api_test(&args, &config, output_mode),
        Some(Command::ImportEnv { file, save }) => {
            commands::import_env(file.as_deref(), save, &config_path, output_mode)
        },
        Some(Command::ExtractSignature { file }) => {
            commands::extract_signature(file.as_deref(), output_mode)
        },
        Some(Command::Checks {
            mode,
            skip_identity,
        }) => commands::checks(mode.as_deref(), skip_identity, &config, output_mode),
        Some(Command::Models { api_type }) => {
            commands::models(api_type.as_deref(), &config, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": ccverify::VERSION
                    })
                );
            } else {
                println!("ccverify v{}", ccverify::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": ccverify::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("ccverify v{}", ccverify::VERSION);
                println!("\nRun 'ccverify --help' for usage");
                println!("Run 'ccverify verify --response response.json' to get started");
            }
            Ok(())
        },
    }
}
