//! Triangle SVG to render-buffer converter.
//!
//! ## Usage
//!
//! ```bash
//! # Write svg_data.json into the current directory
//! svg2json convert Girl_with_a_Pearl_Earring.svg
//!
//! # Custom output space and flat color array
//! svg2json convert image.svg -o data.json --scale 0.5 --offset-x 512 --flat-colors
//!
//! # Check an input without writing anything
//! svg2json inspect image.svg
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::debug;
use trisvg_core::{
    convert_file, init_logging, inspect_file, ColorLayout, ConvertConfig, LogConfig, LogFormat,
    DEFAULT_OUTPUT,
};

#[derive(Parser, Debug)]
#[command(name = "svg2json")]
#[command(version, about = "Convert triangle SVG images into JSON render buffers")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log output format
    #[arg(long, value_enum, default_value = "pretty", global = true)]
    log_format: LogFormatArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert an SVG into a {coordinates, colors} JSON file
    Convert {
        /// Input SVG file
        input: PathBuf,
        /// Output JSON path (overwritten)
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output x of the scene midpoint
        #[arg(long, allow_negative_numbers = true)]
        offset_x: Option<f64>,
        /// Output y of the scene midpoint
        #[arg(long, allow_negative_numbers = true)]
        offset_y: Option<f64>,
        /// Scale factor from SVG units to output units
        #[arg(long, allow_negative_numbers = true)]
        scale: Option<f64>,
        /// Write colors as one flat array instead of [r, g, b] triples
        #[arg(long)]
        flat_colors: bool,
    },

    /// Parse an SVG and print a JSON summary without writing output
    Inspect {
        /// Input SVG file
        input: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

/// Explicit flags that override the configuration file.
#[derive(Debug, Default)]
struct Overrides {
    offset_x: Option<f64>,
    offset_y: Option<f64>,
    scale: Option<f64>,
    flat_colors: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_config = if cli.verbose {
        LogConfig::debug()
    } else {
        LogConfig::default()
    };
    init_logging(log_config.with_format(cli.log_format.into()))
        .context("failed to initialize logging")?;

    match cli.command {
        Commands::Convert {
            input,
            output,
            config,
            offset_x,
            offset_y,
            scale,
            flat_colors,
        } => {
            let overrides = Overrides {
                offset_x,
                offset_y,
                scale,
                flat_colors,
            };
            let config = resolve_config(config.as_deref(), &overrides)?;
            debug!(?config, "resolved configuration");

            let summary = convert_file(&input, &output, &config)
                .with_context(|| format!("failed to convert {}", input.display()))?;

            println!(
                "Wrote {} triangles to {}",
                summary.triangles,
                summary.output.display()
            );
        }

        Commands::Inspect { input } => {
            let report = inspect_file(&input)
                .with_context(|| format!("failed to inspect {}", input.display()))?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

/// Defaults, then the config file, then explicit flags.
fn resolve_config(path: Option<&Path>, overrides: &Overrides) -> anyhow::Result<ConvertConfig> {
    let mut config = match path {
        Some(path) => ConvertConfig::load(path)?,
        None => ConvertConfig::default(),
    };

    if let Some(x) = overrides.offset_x {
        config.normalize.offset_x = x;
    }
    if let Some(y) = overrides.offset_y {
        config.normalize.offset_y = y;
    }
    if let Some(scale) = overrides.scale {
        config.normalize.scale = scale;
    }
    if overrides.flat_colors {
        config.color_layout = ColorLayout::Flat;
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_convert_defaults() {
        let cli = Cli::try_parse_from(["svg2json", "convert", "in.svg"]).unwrap();
        assert!(!cli.verbose);
        assert_eq!(cli.log_format, LogFormatArg::Pretty);
        match cli.command {
            Commands::Convert {
                input,
                output,
                config,
                scale,
                flat_colors,
                ..
            } => {
                assert_eq!(input, PathBuf::from("in.svg"));
                assert_eq!(output, PathBuf::from("svg_data.json"));
                assert!(config.is_none());
                assert!(scale.is_none());
                assert!(!flat_colors);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_convert_flags() {
        let cli = Cli::try_parse_from([
            "svg2json",
            "convert",
            "in.svg",
            "-o",
            "out.json",
            "--offset-x",
            "-12.5",
            "--scale",
            "0.5",
            "--flat-colors",
            "-v",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_format, LogFormatArg::Json);
        match cli.command {
            Commands::Convert {
                output,
                offset_x,
                scale,
                flat_colors,
                ..
            } => {
                assert_eq!(output, PathBuf::from("out.json"));
                assert_eq!(offset_x, Some(-12.5));
                assert_eq!(scale, Some(0.5));
                assert!(flat_colors);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_inspect_requires_input() {
        assert!(Cli::try_parse_from(["svg2json", "inspect"]).is_err());
    }

    #[test]
    fn test_resolve_config_overrides() {
        let overrides = Overrides {
            offset_y: Some(0.0),
            scale: Some(1.0),
            flat_colors: true,
            ..Default::default()
        };
        let config = resolve_config(None, &overrides).unwrap();
        assert_eq!(config.normalize.offset_x, 400.0);
        assert_eq!(config.normalize.offset_y, 0.0);
        assert_eq!(config.normalize.scale, 1.0);
        assert_eq!(config.color_layout, ColorLayout::Flat);
    }

    #[test]
    fn test_resolve_config_rejects_non_finite() {
        let overrides = Overrides {
            scale: Some(f64::NAN),
            ..Default::default()
        };
        assert!(resolve_config(None, &overrides).is_err());
    }

    #[test]
    fn test_resolve_config_missing_file() {
        assert!(resolve_config(Some(Path::new("/nonexistent/trisvg.json")), &Overrides::default())
            .is_err());
    }
}
