mod formulas;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use docmark_config::Config;
use docmark_engine::{CancelToken, Converter, Formula, PreviewRenderer, check};
use formulas::FormulaCollector;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "docmark")]
#[command(version)]
#[command(about = "Convert chat-style Markdown with LaTeX math into structured output", long_about = None)]
struct Cli {
    /// Input file (reads stdin when neither INPUT nor --text is given)
    input: Option<PathBuf>,

    /// Convert this text instead of a file
    #[arg(long, conflicts_with = "input")]
    text: Option<String>,

    /// What to print
    #[arg(short, long, value_enum, default_value_t = Format::Preview)]
    format: Format,

    /// Report unclosed fences and ragged tables on stderr before converting
    #[arg(long)]
    check: bool,

    /// Config file to use instead of ~/.config/docmark/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Plain-text preview with linear math
    Preview,
    /// Block tree as JSON
    Blocks,
    /// One line per formula: block line, display mode, OMML
    Omml,
}

fn main() {
    let mut logger = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        logger.filter_level(log::LevelFilter::Info);
    }
    logger.init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    log::debug!("Conversion options: {:?}", config.convert);

    let text = read_input(&cli)?;
    if cli.check {
        for diagnostic in check(&text) {
            eprintln!("warning: {diagnostic}");
        }
    }

    let converter = Converter::new(config.convert);
    let cancel = CancelToken::new();
    let mut stdout = io::stdout().lock();

    match cli.format {
        Format::Preview => {
            let mut preview = PreviewRenderer::new();
            converter.render(&text, &mut preview, &cancel, None)?;
            stdout.write_all(preview.output().as_bytes())?;
        }
        Format::Blocks => {
            serde_json::to_writer_pretty(&mut stdout, &converter.parse(&text))?;
            writeln!(stdout)?;
        }
        Format::Omml => {
            let mut collector = FormulaCollector::default();
            converter.render(&text, &mut collector, &cancel, None)?;
            for entry in &collector.entries {
                writeln!(stdout, "{}", entry.to_line())?;
            }
            let failed = collector
                .entries
                .iter()
                .filter(|e| matches!(e.formula, Formula::Fallback(_)))
                .count();
            if failed > 0 {
                log::info!("{failed} of {} formulas fell back to text", collector.entries.len());
            }
        }
    }
    Ok(())
}

fn read_input(cli: &Cli) -> Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file '{}'", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read standard input")?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_to_preview_from_stdin() {
        let cli = Cli::try_parse_from(["docmark"]).unwrap();
        assert_eq!(cli.format, Format::Preview);
        assert!(cli.input.is_none() && cli.text.is_none());
    }

    #[test]
    fn text_and_input_conflict() {
        assert!(Cli::try_parse_from(["docmark", "notes.md", "--text", "x"]).is_err());
    }

    #[test]
    fn text_argument_is_the_input() {
        let cli = Cli::try_parse_from(["docmark", "--text", "# Hi", "-f", "omml"]).unwrap();
        assert_eq!(cli.format, Format::Omml);
        assert_eq!(read_input(&cli).unwrap(), "# Hi");
    }

    #[test]
    fn missing_input_file_is_an_error() {
        let cli = Cli::try_parse_from(["docmark", "/nonexistent/answer.md"]).unwrap();
        let err = read_input(&cli).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/answer.md"));
    }
}
