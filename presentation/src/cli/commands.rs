//! CLI command definitions

use clap::{Parser, ValueEnum};
use legalai_domain::UserRole;
use std::path::PathBuf;

/// Output format for responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// The response envelope as JSON
    Json,
}

/// CLI arguments for legalai
#[derive(Parser, Debug)]
#[command(name = "legalai")]
#[command(author, version, about = "Legal assistant - drafting, summaries, analysis and case-law search")]
#[command(long_about = r#"
LegalAi answers chat messages. A leading slash command selects a task:

  /draft <request>                 Draft a petition or notice
  /summarize                       Summarize the --document attachment
  /timeline <facts>                Extract a dated timeline
  /analyze                         Annotate the --document and cite precedent
  /search <query> [court:x] [year:n] [judge:x] [subject:x]
  /translate to <language> <text>  Translate text
  /transcribe                      Transcribe the --audio attachment

Anything else is answered conversationally.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./legalai.toml        Project-level config
3. ~/.config/legalai/config.toml   Global config

Example:
  legalai --role public "/draft File a consumer complaint about a defective phone"
  legalai --document lease.pdf /analyze
  legalai --chat --role student
"#)]
pub struct Cli {
    /// The message to send (not required in chat mode)
    pub message: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Your role: advocate, student or public
    #[arg(short, long, value_name = "ROLE")]
    pub role: Option<UserRole>,

    /// Document attachment (path or data: URI)
    #[arg(short, long, value_name = "REF")]
    pub document: Option<String>,

    /// Audio attachment (path or data: URI)
    #[arg(short, long, value_name = "REF")]
    pub audio: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_shot() {
        let cli = Cli::try_parse_from([
            "legalai",
            "--role",
            "advocate",
            "--document",
            "lease.pdf",
            "-o",
            "json",
            "/analyze",
        ])
        .unwrap();
        assert_eq!(cli.message.as_deref(), Some("/analyze"));
        assert_eq!(cli.role, Some(UserRole::Advocate));
        assert_eq!(cli.document.as_deref(), Some("lease.pdf"));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(!cli.chat);
    }

    #[test]
    fn test_parse_chat_with_verbosity() {
        let cli = Cli::try_parse_from(["legalai", "--chat", "-vv"]).unwrap();
        assert!(cli.chat);
        assert_eq!(cli.verbose, 2);
        assert!(cli.message.is_none());
        assert!(cli.role.is_none());
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!(Cli::try_parse_from(["legalai", "--role", "judge", "hi"]).is_err());
    }
}
