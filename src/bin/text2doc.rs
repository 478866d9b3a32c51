//! CLI binary for text2doc.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `ConversionConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use text2doc::{convert, convert_to_file, ConversionConfig, HeadingStrategy};
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Basic conversion (pretty JSON to stdout)
  text2doc manual.txt

  # Convert to file
  text2doc manual.txt -o manual.json

  # Read extracted text from stdin
  pdftotext manual.pdf - | text2doc -

  # Attach per-section HTML to the report
  text2doc --html manual.txt > report.json

  # Documents with long shouted titles
  text2doc --max-heading-len 160 manual.txt

  # Rename the synthetic pre-heading section
  text2doc --intro-title Preamble manual.txt

INPUT:
  text2doc consumes plain text that has already been extracted from the
  source document (pdftotext, docx2txt, OCR output, ...). It does not
  open PDFs or .docx files itself. Bytes that are not valid UTF-8 are
  replaced rather than rejected.

OUTPUT:
  A JSON object whose keys are section titles in first-occurrence order.
  Each value has a "content" string and a (currently always empty)
  "subsections" object. With --html, the object is wrapped in a report
  that also carries per-section rendered HTML and run stats.
"#;

/// Segment extracted document text into a JSON section tree.
#[derive(Parser, Debug)]
#[command(
    name = "text2doc",
    version,
    about = "Segment extracted document text into a JSON section tree",
    long_about = "Segment plain text extracted from office documents into a hierarchical \
section tree, keyed by detected headings, and optionally render each section's body to a \
constrained HTML subset.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Input text file path, or '-' for stdin.
    input: String,

    /// Write JSON to this file instead of stdout.
    #[arg(short, long, env = "TEXT2DOC_OUTPUT")]
    output: Option<PathBuf>,

    /// Heading detection strategy.
    ///
    /// Only `pattern` is available here: plain text carries no paragraph
    /// styles, so the style strategy is library-only.
    #[arg(long, env = "TEXT2DOC_STRATEGY", value_enum, default_value = "pattern")]
    strategy: StrategyArg,

    /// Maximum heading length in characters for the pattern strategy.
    #[arg(long, env = "TEXT2DOC_MAX_HEADING_LEN", default_value_t = 100,
          value_parser = clap::value_parser!(u16).range(1..))]
    max_heading_len: u16,

    /// Title of the synthetic section holding pre-heading content.
    #[arg(long, env = "TEXT2DOC_INTRO_TITLE", default_value = "Introduction")]
    intro_title: String,

    /// Emit a combined report (tree + per-section HTML + stats) instead of
    /// the bare tree.
    #[arg(long, env = "TEXT2DOC_HTML")]
    html: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "TEXT2DOC_VERBOSE")]
    verbose: bool,

    /// Suppress the summary; print only the JSON (or errors).
    #[arg(short, long, env = "TEXT2DOC_QUIET")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum StrategyArg {
    Pattern,
}

impl From<StrategyArg> for HeadingStrategy {
    fn from(v: StrategyArg) -> Self {
        match v {
            StrategyArg::Pattern => HeadingStrategy::Pattern,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Read input ───────────────────────────────────────────────────────
    // UTF-8 with lossy fallback: extraction tools occasionally leave
    // stray Latin-1 bytes behind and rejecting the whole file over them
    // helps nobody.
    let text = if cli.input == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read from stdin")?;
        String::from_utf8_lossy(&buf).into_owned()
    } else {
        let bytes = std::fs::read(&cli.input)
            .with_context(|| format!("Failed to read input file '{}'", cli.input))?;
        String::from_utf8_lossy(&bytes).into_owned()
    };

    // ── Build config ─────────────────────────────────────────────────────
    let config = ConversionConfig::builder()
        .strategy(cli.strategy.clone().into())
        .max_heading_len(cli.max_heading_len as usize)
        .intro_title(cli.intro_title.clone())
        .render_html(cli.html)
        .build()
        .context("Invalid configuration")?;

    // ── Run conversion ───────────────────────────────────────────────────
    if let Some(ref output_path) = cli.output {
        if cli.html {
            // The combined report has no bare-tree file writer; serialise
            // it here and reuse the stdout path below for files too.
            let output = convert(&text, &config).context("Conversion failed")?;
            let json = serde_json::to_string_pretty(&output)
                .context("Failed to serialise report")?;
            std::fs::write(output_path, json)
                .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
            if !cli.quiet {
                print_summary(&output.document);
                eprintln!("  {}", bold(&output_path.display().to_string()));
            }
        } else {
            let stats = convert_to_file(&text, output_path, &config)
                .context("Conversion failed")?;
            if !cli.quiet {
                eprintln!(
                    "{}  {} sections  {}ms  →  {}",
                    green("✔"),
                    stats.section_count,
                    stats.total_duration_ms,
                    bold(&output_path.display().to_string()),
                );
            }
        }
    } else {
        let output = convert(&text, &config).context("Conversion failed")?;
        let json = if cli.html {
            serde_json::to_string_pretty(&output).context("Failed to serialise report")?
        } else {
            serde_json::to_string_pretty(&output.document)
                .context("Failed to serialise document tree")?
        };

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(json.as_bytes())
            .context("Failed to write to stdout")?;
        handle.write_all(b"\n").ok();

        if !cli.quiet {
            print_summary(&output.document);
        }
    }

    Ok(())
}

/// Per-section summary on stderr, in the shape users of the original
/// converter expect: one line per section, then totals.
fn print_summary(document: &text2doc::DocumentTree) {
    eprintln!(
        "{} {}",
        green("✔"),
        bold(&format!("{} sections processed", document.len()))
    );
    let mut total_subsections = 0;
    for (title, record) in document.iter() {
        total_subsections += record.subsections.len();
        eprintln!(
            "  • {}: {} subsections, {}",
            title,
            record.subsections.len(),
            dim(&format!("{} chars", record.content.chars().count())),
        );
    }
    eprintln!("  {} total subsections", total_subsections);
}
