//! tagwrap CLI - measure and wrap label text from the terminal
//!
//! Usage:
//!   tagwrap 'text'                    Wrap at the default width and print lines
//!   tagwrap --file label.txt --json   Print the bounds result as JSON
//!   tagwrap 'text' --even 3           Only insert evenly spaced breaks

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use tagwrap_fontdue::{Font, FontdueFontMetrics, load_font_from_path, load_system_font};
use tagwrap_layout::{
    ApproximateFontMetrics, BoundsCalculator, BoundsResult, FontDescriptor, FontMetrics,
    FontStyle, WrapConfig, insert_breaks_evenly_with,
};

/// tagwrap - compute the bounds needed to display markup-bearing text
#[derive(Parser, Debug)]
#[command(name = "tagwrap")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Wrap a sentence at 100px with the approximate metrics
    tagwrap --max-width 100 'The quick brown fox jumps over the lazy dog'

    # Inline markup is kept and never measured
    tagwrap --max-width 80 '<b>Toxic</b> <i>conscience</i> ruling'

    # Measure with a real font file and print JSON
    tagwrap --font ./DejaVuSans.ttf --json 'Hello world'

    # Split plain text into three lines without measuring
    tagwrap --even 3 'abcdefghijklmnopqrstuvwxyz'
"#)]
struct Cli {
    /// Text to measure; markup tags are allowed
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Read the text from a file instead
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Maximum line width in pixels (default: from config, 1200)
    #[arg(short = 'w', long, value_name = "PX")]
    max_width: Option<u32>,

    /// Font size in pixels (default: 20)
    #[arg(short = 's', long, value_name = "PX")]
    font_size: Option<f32>,

    /// Font style: regular, bold, italic or bold-italic
    #[arg(long, default_value = "regular")]
    style: FontStyle,

    /// Measure with this font file (TTF/OTF)
    #[arg(long, value_name = "FONT", conflicts_with = "system_font")]
    font: Option<PathBuf>,

    /// Measure with an installed system font
    #[arg(long)]
    system_font: bool,

    /// JSON file overriding the wrap configuration
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Only insert breaks splitting the text into this many lines
    #[arg(long, value_name = "LINES")]
    even: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let text = read_text(&cli)?;
    let config = load_config(cli.config.as_deref())?;

    if let Some(lines) = cli.even {
        let broken = insert_breaks_evenly_with(&text, lines, &config)?;
        println!("{broken}");
        return Ok(());
    }

    let mut font = FontDescriptor::default_small();
    font.style = cli.style;
    if let Some(size) = cli.font_size {
        font.size = size;
    }

    let loaded = load_font(&cli)?;
    let fontdue_metrics = loaded.as_ref().map(FontdueFontMetrics::new);
    let metrics: &dyn FontMetrics = match &fontdue_metrics {
        Some(metrics) => metrics,
        None => &ApproximateFontMetrics,
    };

    let max_width = cli.max_width.unwrap_or(config.default_max_width);
    let calc = BoundsCalculator::with_config(metrics, config)?;
    let result = calc.measure_and_wrap_with(&text, &font, max_width)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result, calc.config(), max_width);
    }
    Ok(())
}

/// Get the text from the positional argument or `--file`.
fn read_text(cli: &Cli) -> Result<String> {
    if let Some(ref text) = cli.text {
        Ok(text.clone())
    } else if let Some(ref path) = cli.file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        Ok(content.trim_end_matches(['\r', '\n']).to_string())
    } else {
        bail!("no input: pass TEXT or --file")
    }
}

fn load_config(path: Option<&Path>) -> Result<WrapConfig> {
    let Some(path) = path else {
        return Ok(WrapConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config '{}'", path.display()))?;
    let config: WrapConfig = serde_json::from_str(&raw)
        .with_context(|| format!("invalid config '{}'", path.display()))?;
    config.validate()?;
    Ok(config)
}

fn load_font(cli: &Cli) -> Result<Option<Font>> {
    if let Some(ref path) = cli.font {
        return Ok(Some(load_font_from_path(path)?));
    }
    if cli.system_font {
        return Ok(Some(load_system_font(cli.style)?));
    }
    Ok(None)
}

fn print_result(result: &BoundsResult, config: &WrapConfig, max_width: u32) {
    let lines = result.lines(config);
    println!(
        "{} {} line(s) within {max_width}px",
        "===".dimmed(),
        lines.len().bold()
    );
    for line in &lines {
        println!("  {line}");
    }
    println!(
        "{} {}px x {}px",
        "bounds:".dimmed(),
        result.width.green(),
        result.height.green()
    );
    if !result.warnings.is_empty() {
        println!(
            "{} {} overflowing line(s)",
            "warnings:".dimmed(),
            result.warnings.len().yellow()
        );
    }
}
