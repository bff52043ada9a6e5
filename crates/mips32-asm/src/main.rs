use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mips32_rs::{decode_line, encode_line, TranslateError};

#[derive(Parser, Debug)]
#[command(author, version, about = "MIPS I subset assembler/disassembler", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assemble a source file into 32-bit words, one binary line each
    Asm {
        /// Input assembly file
        input: PathBuf,
        /// Output file
        output: PathBuf,
    },
    /// Disassemble a file of 32-bit binary words back into mnemonics
    Disasm {
        /// Input file (one 32-character binary word per line)
        input: PathBuf,
        /// Output file
        output: PathBuf,
    },
}

/// Runs the per-line codec over a whole input. A failing line yields one
/// diagnostic replacement line and never aborts the batch; skipped lines
/// yield nothing. Output order follows input order.
fn translate<F>(text: &str, per_line: F) -> String
where
    F: Fn(&str) -> Result<Option<String>, TranslateError>,
{
    let mut out = String::new();
    for line in text.lines() {
        match per_line(line) {
            Ok(None) => {}
            Ok(Some(translated)) => {
                out.push_str(&translated);
                out.push('\n');
            }
            Err(e) => {
                debug!(line, error = %e, "line failed to translate");
                out.push_str(&format!("error: {e}\n"));
            }
        }
    }
    out
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let (input, output, out_text) = match cli.cmd {
        Command::Asm { input, output } => {
            let text = fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            (input, output, translate(&text, encode_line))
        }
        Command::Disasm { input, output } => {
            let text = fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            (input, output, translate(&text, decode_line))
        }
    };
    debug!(input = %input.display(), output = %output.display(), "translated");
    fs::write(&output, out_text).with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}
