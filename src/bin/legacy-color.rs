//! legacy-color: print the stage walkthrough for an input string.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use legacy_color_core::{normalize, render::render_normalization, ViewConfig};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "legacy-color", version, about = "Show how a legacy browser turns a string into a color")]
struct Args {
    /// String to normalize. Defaults to the config's initial input.
    input: Option<String>,

    /// TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print only the resulting color.
    #[arg(short, long)]
    quiet: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<ViewConfig> {
    let Some(path) = path else {
        return Ok(ViewConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = ViewConfig::from_toml_str(&raw)
        .with_context(|| format!("Failed to load config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "legacy_color_core=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;
    let input = args.input.unwrap_or(config.initial_input);

    let normalization = normalize(&input);

    if args.quiet {
        println!("{}", normalization.css_color());
        return Ok(());
    }

    match args.format {
        Format::Text => print!("{}", render_normalization(&normalization).to_text()),
        Format::Json => {
            let json = serde_json::to_string_pretty(&normalization)
                .context("Failed to serialize result")?;
            println!("{json}");
        }
    }

    Ok(())
}
