//! prettify - highlight and lay out source code from the command line

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use prettify::render::{self, RenderOptions};
use prettify::{logging, Config, Prettifier, SyntaxManager};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Ansi,
    Json,
    Text,
}

#[derive(Parser)]
#[command(
    name = "prettify",
    version,
    about = "Highlight source code and infer its nesting depth.",
    long_about = "Highlight a source file (or stdin) and print it as HTML, colored terminal output, JSON or text."
)]
struct Cli {
    /// Source file to read (defaults to stdin).
    input: Option<PathBuf>,

    /// Language to highlight as (defaults to detection by extension, then the config).
    #[arg(short, long, value_name = "NAME")]
    language: Option<String>,

    /// Spaces per tab, 1 to 16.
    #[arg(short, long, value_name = "N")]
    tab_width: Option<usize>,

    /// Configuration file (defaults to ~/.prettify.toml).
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "ansi")]
    format: Format,

    /// Prefix each line with its number (ansi and text).
    #[arg(short = 'n', long)]
    line_numbers: bool,

    /// Indent each line from its inferred depth instead of its own whitespace.
    #[arg(short, long)]
    reindent: bool,

    /// Clip lines to this many columns (ansi; defaults to the terminal width).
    #[arg(short, long, value_name = "COLS")]
    width: Option<usize>,

    /// List available languages and exit.
    #[arg(long)]
    list_languages: bool,

    /// Log level: off, error, warn, info, debug or trace (defaults to $PRETTIFY_LOG).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.as_deref() {
        Some(name) => logging::parse_level(name)
            .with_context(|| format!("unknown log level `{}`", name))?,
        None => logging::level_from_env(),
    };
    logging::init(level);

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load(),
    };
    if let Some(tab_width) = cli.tab_width {
        config.tab_width = tab_width;
    }

    let manager = config
        .syntax_manager()
        .context("failed to load language definitions")?;

    if cli.list_languages {
        return list_languages(&mut io::stdout().lock(), &manager);
    }

    if let Some(language) = resolve_language(&cli, &manager) {
        config.language = language;
    }
    let prettifier = Prettifier::from_config(&config, &manager)?;
    log::debug!("using {:?}", prettifier);

    let source = read_input(&cli)?;
    let result = prettifier
        .prettify_bytes(&source)
        .with_context(|| format!("failed to read {}", input_name(&cli)))?;

    let options = RenderOptions {
        line_numbers: cli.line_numbers,
        reindent: cli.reindent.then_some(prettifier.tab_width()),
        max_width: cli.width.or_else(|| terminal_width(cli.format)),
    };

    let mut stdout = io::stdout().lock();
    match cli.format {
        Format::Html => stdout.write_all(render::html(&result).as_bytes())?,
        Format::Json => writeln!(stdout, "{}", render::json(&result)?)?,
        Format::Text => stdout.write_all(render::text(&result, &options).as_bytes())?,
        Format::Ansi => render::ansi(&mut stdout, &result, &options)?,
    }
    stdout.flush()?;
    Ok(())
}

/// Explicit flag first, then the file extension
fn resolve_language(cli: &Cli, manager: &SyntaxManager) -> Option<String> {
    if let Some(language) = &cli.language {
        return Some(language.clone());
    }
    let detected = cli
        .input
        .as_deref()
        .and_then(|path| manager.detect_language(path))?;
    log::info!("detected language {}", detected);
    Some(detected.to_string())
}

fn read_input(cli: &Cli) -> Result<Vec<u8>> {
    match &cli.input {
        Some(path) => fs::read(path).with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn input_name(cli: &Cli) -> String {
    cli.input
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "stdin".to_string())
}

fn terminal_width(format: Format) -> Option<usize> {
    if format != Format::Ansi || !io::stdout().is_terminal() {
        return None;
    }
    crossterm::terminal::size()
        .ok()
        .map(|(cols, _)| cols as usize)
}

/// Each language with its extensions, then its keywords in order
fn list_languages<W: Write>(out: &mut W, manager: &SyntaxManager) -> Result<()> {
    for name in manager.list_languages() {
        let language = manager.require_language(name)?;
        writeln!(out, "{} ({})", language.name, language.extensions.join(", "))?;
        writeln!(out, "    {}", language.sorted_keywords().join(" "))?;
    }
    Ok(())
}
