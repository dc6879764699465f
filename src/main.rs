use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use myers_diff::myers::{reconstruct, search, to_entries};
use myers_diff::{read_lines, ColorChoice, Renderer};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "myers-diff")]
#[command(about = "Show the line-by-line differences between two files")]
#[command(version)]
struct Cli {
    #[arg(help = "Path to the old file")]
    old: String,
    #[arg(help = "Path to the new file")]
    new: String,
    #[arg(
        long,
        value_enum,
        default_value = "auto",
        env = "MYERS_DIFF_COLOR",
        help = "When to color the output"
    )]
    color: ColorChoice,
    #[arg(long, help = "Print the edit-graph search trace to stderr")]
    trace: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let old = read_lines(&cli.old).context("cannot load old file")?;
    let new = read_lines(&cli.new).context("cannot load new file")?;

    let trace = search(&old, &new);
    if cli.trace {
        eprint!("{trace}");
    }
    let script = reconstruct(&old, &new, &trace);
    tracing::debug!(
        operations = script.len(),
        distance = trace.distance(),
        "edit script reconstructed"
    );
    let entries = to_entries(&script, &old, &new);

    let renderer = Renderer::new(cli.color);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    renderer
        .write_diff(&mut out, &entries)
        .context("failed to write diff")?;
    out.flush().context("failed to write diff")?;
    Ok(())
}
