use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use retronote_config::Config;
use retronote_engine::{
    FormatOptions, GuideCatalog, MetricsHandle, Preset, parse_with, serialize,
    to_editable_markdown,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "retronote",
    version,
    about = "Format and normalize retrospective note templates"
)]
struct Cli {
    /// Print parse/render timings to stderr when done.
    #[arg(long, global = true)]
    timings: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Re-emit a template in canonical form (whitespace normalized, title
    /// block enforced).
    Normalize {
        /// Template markdown file.
        file: PathBuf,
        /// Fallback title used when the template lacks one.
        #[arg(long, default_value = "Untitled")]
        title: String,
        /// Write here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render the editable view with presentation options applied.
    Format {
        /// Template markdown file.
        file: PathBuf,
        /// Fallback title used when the template lacks one.
        #[arg(long, default_value = "Untitled")]
        title: String,
        /// Auto-number sections.
        #[arg(long)]
        numbered: bool,
        /// Strip editor emoji from section titles.
        #[arg(long)]
        strip_emoji: bool,
        /// JSON file of section presets used for guide questions.
        #[arg(long)]
        guides: Option<PathBuf>,
        /// Write here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()
        .context("failed to load configuration")?
        .unwrap_or_default();
    let metrics = MetricsHandle::new();

    match cli.command {
        Command::Normalize {
            file,
            title,
            output,
        } => {
            let markdown = read_template(&file)?;
            let blocks = metrics.time("parse", || {
                parse_with(&markdown, &title, &config.syntax())
            });
            let rendered = metrics.time("serialize", || serialize(&blocks));
            emit(output.as_deref(), &rendered)?;
        }
        Command::Format {
            file,
            title,
            numbered,
            strip_emoji,
            guides,
            output,
        } => {
            let markdown = read_template(&file)?;
            let presets = match &guides {
                Some(path) => load_presets(path)?,
                None => vec![],
            };
            let defaults = config.format_options();
            let options = FormatOptions {
                numbering: numbered || defaults.numbering,
                strip_emoji: strip_emoji || defaults.strip_emoji,
                guide_questions: (guides.is_some() && !presets.is_empty())
                    || defaults.guide_questions,
            };

            let blocks = metrics.time("parse", || {
                parse_with(&markdown, &title, &config.syntax())
            });
            let catalog = GuideCatalog::from_presets(&presets);
            let rendered = metrics.time("format", || {
                to_editable_markdown(&blocks, &options, &catalog)
            });
            emit(output.as_deref(), &rendered)?;
        }
    }

    if cli.timings {
        for sample in metrics.samples() {
            eprintln!(
                "[timing] {}: {:.3} ms",
                sample.label,
                sample.duration.as_secs_f64() * 1000.0
            );
        }
    }

    Ok(())
}

fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read template {}", path.display()))
}

fn load_presets(path: &Path) -> Result<Vec<Preset>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read preset file {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("failed to parse preset file {}", path.display()))
}

fn emit(output: Option<&Path>, rendered: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, format!("{rendered}\n"))
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            println!("{rendered}");
            Ok(())
        }
    }
}
