use anyhow::{Context, Result};
use clap::Parser;
use screenplay_fmt_config::Config;
use screenplay_fmt_engine::{
    CheckCoverage, FormatOptions, FormattedPair, classify_document, format_document_with,
    validate_format,
};
use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
};

/// Reformat free-form screenplay text into standard screenplay layout.
///
/// Reads a full screenplay or a single scene from INPUT (or stdin) and prints
/// the formatted text.
#[derive(Debug, Parser)]
#[command(name = "screenplay-fmt", version, about)]
struct Cli {
    /// Input file; reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Write output here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (defaults to ~/.config/screenplay-fmt/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Wrap column for action blocks
    #[arg(long)]
    action_width: Option<usize>,

    /// Wrap column for dialogue blocks
    #[arg(long)]
    dialogue_width: Option<usize>,

    /// Treat mixed-case lines after a character cue as dialogue
    #[arg(long, overrides_with = "no_detect_dialogue")]
    detect_dialogue: bool,

    /// Keep mixed-case lines after a cue as action, even if the config enables detection
    #[arg(long, overrides_with = "detect_dialogue")]
    no_detect_dialogue: bool,

    /// Print `{ raw, formatted }` as JSON
    #[arg(long, conflicts_with = "blocks")]
    json: bool,

    /// Print the classified blocks as JSON instead of formatted text
    #[arg(long)]
    blocks: bool,

    /// Print the validation report to stderr
    #[arg(long)]
    check: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Text,
    Json,
    Blocks,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.blocks {
            OutputMode::Blocks
        } else {
            OutputMode::Text
        }
    }

    /// Config file options with command-line overrides applied on top.
    fn format_options(&self) -> Result<FormatOptions> {
        let config_path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut options = Config::load_or_default(&config_path)?.format;

        if let Some(width) = self.action_width {
            options.action_width = width;
        }
        if let Some(width) = self.dialogue_width {
            options.dialogue_width = width;
        }
        if self.detect_dialogue {
            options.detect_dialogue = true;
        } else if self.no_detect_dialogue {
            options.detect_dialogue = false;
        }

        log::debug!("Format options: {options:?}");
        Ok(options)
    }
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        _ => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read stdin")?;
            Ok(raw)
        }
    }
}

fn render_output(raw: &str, options: &FormatOptions, mode: OutputMode) -> Result<String> {
    Ok(match mode {
        OutputMode::Text => format_document_with(raw, options),
        OutputMode::Json => serde_json::to_string_pretty(&FormattedPair::new(raw, options))?,
        OutputMode::Blocks => serde_json::to_string_pretty(&classify_document(raw, options))?,
    })
}

/// Writes `content` to the file or stdout, ending it with exactly one added
/// newline when it has none.
fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    let newline = if content.ends_with('\n') { "" } else { "\n" };
    match output {
        Some(path) => std::fs::write(path, format!("{content}{newline}"))
            .with_context(|| format!("Failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(newline.as_bytes())?;
            Ok(())
        }
    }
}

fn report_check(raw: &str) -> Result<()> {
    let report = validate_format(raw);
    if report.coverage == CheckCoverage::NotImplemented {
        log::warn!("Format validation has no checks yet; the report below is not a verdict");
    }
    eprintln!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.format_options()?;
    let raw = read_input(cli.input.as_deref())?;

    if cli.check {
        report_check(&raw)?;
    }

    let rendered = render_output(&raw, &options, cli.output_mode())?;
    write_output(cli.output.as_deref(), &rendered)
}

fn main() {
    // RUST_LOG wins over the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
