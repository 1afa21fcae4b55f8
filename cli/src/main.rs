mod args;
mod ui;

use anyhow::{Context, Result};
use args::{Cli, Commands, OutputFormat};
use clap::Parser;
use colored::*;
use sharebridge_core::{
    decode, default_config_path, encode, parse_extra, BridgeConfig, CodecOptions, ShareIntent,
    SharedPayload,
};
use std::io::Read;
use std::path::Path;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => BridgeConfig::load_from(Some(path.as_path())),
        None => BridgeConfig::load(),
    }
    .context("Failed to load configuration")?;

    setup_logging(cli.verbose, &config.log_level);
    debug!("Effective configuration: {:?}", config);

    match cli.command {
        Commands::Encode(args) => encode_payload(&config, args),
        Commands::Decode(args) => decode_payload(&config, args),
        Commands::Intent(args) => receive_intent(&config, args),
        Commands::Config(args) => handle_config(&config, cli.config.as_deref(), args),
    }
}

fn encode_payload(config: &BridgeConfig, args: args::EncodeArgs) -> Result<()> {
    let payload = SharedPayload::new(args.text, args.subject);
    let options = CodecOptions {
        pretty: args.pretty || config.pretty,
        ..config.codec_options()
    };
    print_payload(&payload, args.format, &options)
}

fn decode_payload(config: &BridgeConfig, args: args::DecodeArgs) -> Result<()> {
    let input = match args.input.as_deref() {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read mapping from stdin")?;
            buf
        }
        Some(input) => input.to_string(),
    };

    let options = CodecOptions {
        strict: config.strict && !args.lenient,
        ..config.codec_options()
    };
    let payload = decode_input(&input, &options)?;
    print_payload(&payload, args.format, &options)
}

fn decode_input(input: &str, options: &CodecOptions) -> Result<SharedPayload> {
    let payload = decode(input, options).context("Failed to decode shared payload")?;
    if payload.is_empty() {
        debug!("Decoded payload carries neither text nor subject");
    }
    Ok(payload)
}

fn receive_intent(config: &BridgeConfig, args: args::IntentArgs) -> Result<()> {
    let mut intent = ShareIntent::new(args.action);
    if let Some(mime_type) = args.mime_type {
        intent = intent.with_mime_type(mime_type);
    }
    for extra in &args.extras {
        let (key, value) = parse_extra(extra)?;
        intent = intent.with_extra(key, value);
    }

    let Some(payload) = SharedPayload::from_intent(&intent) else {
        anyhow::bail!(
            "Intent {} ({}) carries no text share",
            intent.action,
            intent.mime_type.as_deref().unwrap_or("no MIME type")
        );
    };
    print_payload(&payload, args.format, &config.codec_options())
}

fn handle_config(
    config: &BridgeConfig,
    explicit_path: Option<&Path>,
    args: args::ConfigArgs,
) -> Result<()> {
    match args.action {
        args::ConfigAction::Show => {
            let rendered = toml::to_string_pretty(config).context("Failed to render configuration")?;
            print!("{}", rendered);
        }
        args::ConfigAction::Path => {
            let path = match explicit_path {
                Some(path) => path.to_path_buf(),
                None => default_config_path()?,
            };
            let status = if path.exists() {
                "found".green()
            } else {
                "not found, using defaults".yellow()
            };
            println!("{} ({})", path.display(), status);
        }
    }
    Ok(())
}

fn print_payload(payload: &SharedPayload, format: OutputFormat, options: &CodecOptions) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", encode(payload, options)?),
        OutputFormat::Table => ui::display_mapping(&payload.to_mapping()),
    }
    Ok(())
}

fn setup_logging(verbose: bool, configured: &str) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        configured.parse().unwrap_or(tracing::Level::INFO)
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
