//! pagecraft - render post HTML into component instructions

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use pagecraft::export::{Stats, outline};
use pagecraft::{Error, Fragment, Result};

#[derive(Parser)]
#[command(name = "pagecraft")]
#[command(version, about = "Render post HTML into rich component instructions", long_about = None)]
#[command(after_help = "EXAMPLES:
    pagecraft post.html                   Print the instruction tree as JSON
    pagecraft post.md -f outline          Convert markdown, print an outline
    cat post.html | pagecraft - -f stats  Count components from stdin")]
struct Cli {
    /// Input file (HTML or markdown), or `-` for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Treat input as markdown regardless of extension
    #[arg(short, long)]
    markdown: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Suppress status messages
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Pretty-printed JSON instruction tree
    Json,
    /// Indented one-line-per-node outline
    Outline,
    /// Component counts
    Stats,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // --verbose forces debug, otherwise RUST_LOG or warn
    let filter = if cli.verbose {
        EnvFilter::new("pagecraft=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let fragments = load(cli)?;
    let rendered = format_output(&fragments, cli.format)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            if !cli.quiet {
                eprintln!(
                    "Wrote {} instructions to {}",
                    Stats::collect(&fragments).instructions(),
                    path.display()
                );
            }
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn load(cli: &Cli) -> Result<Vec<Fragment>> {
    if cli.input == "-" {
        let mut bytes = Vec::new();
        std::io::stdin().lock().read_to_end(&mut bytes)?;
        return render_bytes(bytes, cli.markdown);
    }

    let path = Path::new(&cli.input);
    if cli.markdown {
        render_bytes(std::fs::read(path)?, true)
    } else {
        pagecraft::render_file(path)
    }
}

fn render_bytes(bytes: Vec<u8>, markdown: bool) -> Result<Vec<Fragment>> {
    if markdown {
        let text = String::from_utf8(bytes)
            .map_err(|e| Error::InvalidInput(format!("markdown input is not valid UTF-8: {e}")))?;
        Ok(pagecraft::render_markdown(&text))
    } else {
        Ok(pagecraft::render_html_bytes(&bytes))
    }
}

fn format_output(fragments: &[Fragment], format: Format) -> Result<String> {
    let mut out = match format {
        Format::Json => serde_json::to_string_pretty(fragments).map_err(Error::from)?,
        Format::Outline => outline(fragments),
        Format::Stats => Stats::collect(fragments).to_string(),
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}
