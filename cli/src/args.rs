use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sharebridge")]
#[command(about = "Build, inspect and bridge shared text payloads")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: SHAREBRIDGE_CONFIG or the user config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a payload and print its mapping
    Encode(EncodeArgs),

    /// Decode a JSON mapping into a payload
    Decode(DecodeArgs),

    /// Turn a share intent into a payload
    Intent(IntentArgs),

    /// Inspect configuration
    Config(ConfigArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Args)]
pub struct EncodeArgs {
    /// Shared text content
    #[arg(short, long)]
    pub text: Option<String>,

    /// Subject line
    #[arg(short, long)]
    pub subject: Option<String>,

    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args)]
pub struct DecodeArgs {
    /// JSON mapping; reads stdin when omitted or "-"
    pub input: Option<String>,

    /// Accept missing keys and ignore unknown ones
    #[arg(long)]
    pub lenient: bool,

    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct IntentArgs {
    /// Intent action
    #[arg(short, long, default_value = sharebridge_core::ACTION_SEND)]
    pub action: String,

    /// MIME type of the shared content
    #[arg(short, long)]
    pub mime_type: Option<String>,

    /// Intent extra as KEY=VALUE (repeatable)
    #[arg(short, long = "extra")]
    pub extras: Vec<String>,

    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show effective configuration
    Show,

    /// Print the config file location
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_encode() {
        let cli = Cli::try_parse_from([
            "sharebridge",
            "encode",
            "--text",
            "https://example.com",
            "--format",
            "table",
        ])
        .unwrap();
        match cli.command {
            Commands::Encode(args) => {
                assert_eq!(args.text.as_deref(), Some("https://example.com"));
                assert_eq!(args.subject, None);
                assert_eq!(args.format, OutputFormat::Table);
                assert!(!args.pretty);
            }
            _ => panic!("expected encode"),
        }
    }

    #[test]
    fn test_parse_intent_extras() {
        let cli = Cli::try_parse_from([
            "sharebridge",
            "-v",
            "intent",
            "--mime-type",
            "text/plain",
            "-e",
            "android.intent.extra.TEXT=hello",
            "--extra",
            "android.intent.extra.SUBJECT=re: hi",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Intent(args) => {
                assert_eq!(args.action, sharebridge_core::ACTION_SEND);
                assert_eq!(args.extras.len(), 2);
            }
            _ => panic!("expected intent"),
        }
    }

    #[test]
    fn test_parse_decode_defaults() {
        let cli = Cli::try_parse_from(["sharebridge", "decode"]).unwrap();
        match cli.command {
            Commands::Decode(args) => {
                assert_eq!(args.input, None);
                assert!(!args.lenient);
                assert_eq!(args.format, OutputFormat::Table);
            }
            _ => panic!("expected decode"),
        }
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["sharebridge", "encode", "--format", "yaml"]).is_err());
    }
}
