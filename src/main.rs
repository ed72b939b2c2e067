// src/main.rs

// Modules defined in the crate
mod api;
mod config;
mod constants;
mod descriptor;
mod error;
mod fit;
mod handler;
mod limits;
mod region;
mod request;
mod types;

// Specific imports
use crate::config::{CommandLineInput, Operation, RunConfig};
use crate::error::AppError;
use crate::handler::{ImageRequestHandler, ToolPayload};
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;
use std::io::Write;
use std::sync::Arc;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("iiif2agent.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Executes the requested tool operation and delivers its payload.
async fn execute(config: &RunConfig) -> Result<(), Box<dyn std::error::Error>> {
    let client = api::IiifHttpClient::new()?;
    let handler = ImageRequestHandler::new(config.handler, Arc::new(client));

    let payload = match &config.operation {
        Operation::Manifest { url } => handler.fetch_manifest(url).await?,
        Operation::Image { base_uri } => handler.fetch_image(base_uri).await?,
        Operation::Region { base_uri, region } => {
            handler.fetch_image_region(base_uri, region).await?
        }
    };

    deliver(payload, config)?;
    Ok(())
}

/// Delivers the fetched payload to the configured destination.
///
/// Text payloads default to stdout; binary payloads need a file (or `--pipe`
/// for raw stdout, e.g. piping into an image viewer).
fn deliver(payload: ToolPayload, config: &RunConfig) -> Result<(), AppError> {
    match payload {
        ToolPayload::Text { content } => {
            if config.pipe {
                print!("{}", content);
                return Ok(());
            }
            match &config.output_file {
                Some(path) => {
                    fs::write(path, &content)?;
                    println!("✓ Manifest saved to {}", path.display());
                }
                None => println!("{}", content),
            }
        }
        ToolPayload::Binary { media_type, bytes } => {
            if config.pipe {
                std::io::stdout().write_all(&bytes)?;
                return Ok(());
            }
            let path = config.output_file.as_ref().ok_or_else(|| {
                AppError::MissingConfiguration(
                    "--output-file is required for image payloads (or use --pipe)".to_string(),
                )
            })?;
            fs::write(path, &bytes)?;
            println!(
                "✓ Image saved to {} ({} bytes, {})",
                path.display(),
                bytes.len(),
                media_type
            );
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = RunConfig::resolve(cli);

    execute(&config).await?;

    Ok(())
}
