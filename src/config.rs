// src/config.rs
use crate::constants::DEFAULT_MAX_DIMENSION;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    #[command(subcommand)]
    pub operation: Operation,

    /// Absolute ceiling on either requested dimension, in pixels
    #[arg(long, default_value_t = DEFAULT_MAX_DIMENSION)]
    pub max_dimension: u32,

    /// Optional ceiling on total requested pixel area
    #[arg(long)]
    pub max_area: Option<u64>,

    /// Output file for the fetched payload
    #[arg(short, long)]
    pub output_file: Option<String>,

    /// Pipe mode - write the raw payload to stdout for piping
    #[arg(short = 'p', long, default_value_t = false)]
    pub pipe: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// The three tool operations exposed to a calling agent.
#[derive(Subcommand, Debug, Clone)]
pub enum Operation {
    /// Fetch a presentation manifest and return it as a document
    Manifest {
        /// Manifest URL (e.g. "https://iiif.example.org/abc/manifest.json")
        url: String,
    },
    /// Resolve and fetch a full image at the largest permitted size
    Image {
        /// Base resource identifier (the URL prefix of info.json)
        base_uri: String,
    },
    /// Resolve and fetch a percentage region of an image
    Region {
        /// Base resource identifier (the URL prefix of info.json)
        base_uri: String,
        /// Region selector: "full" or "pct:x,y,width,height"
        region: String,
    },
}

/// The caller's absolute ceiling on requested image size.
///
/// Fixed for the lifetime of one handler instance and read-only after
/// construction, so concurrent resolution calls share it freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerConfig {
    /// Upper bound on either requested dimension, in pixels.
    pub max_dimension: u32,
    /// Optional upper bound on total requested pixel area.
    pub max_area: Option<u64>,
}

impl HandlerConfig {
    pub fn new(max_dimension: u32, max_area: Option<u64>) -> Self {
        Self {
            max_dimension,
            max_area,
        }
    }
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            max_area: None,
        }
    }
}

/// Resolved run configuration, ready to drive one invocation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub operation: Operation,
    pub handler: HandlerConfig,
    pub output_file: Option<PathBuf>,
    pub pipe: bool,
    #[allow(dead_code)] // Read before resolution by the bin target
    pub verbose: bool,
}

impl RunConfig {
    /// Resolves a complete run configuration from CLI input.
    pub fn resolve(cli: CommandLineInput) -> Self {
        RunConfig {
            operation: cli.operation,
            handler: HandlerConfig::new(cli.max_dimension, cli.max_area),
            output_file: cli.output_file.map(PathBuf::from),
            pipe: cli.pipe,
            verbose: cli.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_config_defaults() {
        let config = HandlerConfig::default();
        assert_eq!(config.max_dimension, DEFAULT_MAX_DIMENSION);
        assert_eq!(config.max_area, None);
    }

    #[test]
    fn resolve_carries_ceilings_into_handler_config() {
        let cli = CommandLineInput::parse_from([
            "iiif2agent",
            "--max-dimension",
            "1500",
            "--max-area",
            "2000000",
            "image",
            "https://iiif.example.org/abc",
        ]);
        let config = RunConfig::resolve(cli);
        assert_eq!(config.handler, HandlerConfig::new(1500, Some(2_000_000)));
        assert!(matches!(config.operation, Operation::Image { .. }));
    }
}
