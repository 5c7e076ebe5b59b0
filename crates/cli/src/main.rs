//! jsonc — strip, check, merge, and format JSON-with-comments files.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jsonc_toolkit_core::{
    WriteOptions, parse_jsonc, strip_comments, to_string_formatted, update_leaves, write_json,
};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "jsonc",
    version,
    about = "JSONC toolkit — strip, check, merge, and format JSON-with-comments files"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Strip comments from a JSONC file and print the result.
    Strip {
        /// Input file, or `-` for stdin.
        file: String,
        /// Delete comment regions outright instead of space-filling them
        /// (parse-error positions no longer match the original source).
        #[arg(long)]
        compact: bool,
    },

    /// Check that a JSONC file parses after comment stripping.
    Check {
        /// Input file, or `-` for stdin.
        file: String,
    },

    /// Merge overlay files into a base document, leaf keys winning.
    Merge {
        /// Base document.
        base: String,
        /// Overlay documents, applied left to right.
        #[arg(required = true)]
        overlays: Vec<String>,
        /// Output file; prints to stdout when omitted.
        #[arg(long, short)]
        out: Option<PathBuf>,
        /// Indentation width of the merged output.
        #[arg(long, default_value_t = 4)]
        indent: usize,
    },

    /// Reformat a JSONC file (comments are stripped).
    Fmt {
        /// Input file, or `-` for stdin.
        file: String,
        /// Indentation width.
        #[arg(long, default_value_t = 4)]
        indent: usize,
        /// Indent with tabs instead of spaces.
        #[arg(long)]
        tabs: bool,
        /// Collapse multi-line arrays onto one line.
        #[arg(long)]
        pack_arrays: bool,
        /// Escape non-ASCII characters as \uXXXX.
        #[arg(long)]
        ensure_ascii: bool,
        /// Write the formatted output back to the file (in-place).
        #[arg(long, short, conflicts_with = "check")]
        write: bool,
        /// Check if the file is already formatted (exit 1 if not). For CI.
        #[arg(long, conflicts_with = "write")]
        check: bool,
    },
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Strip { file, compact } => cmd_strip(&file, compact)?,
        Cmd::Check { file } => cmd_check(&file)?,
        Cmd::Merge {
            base,
            overlays,
            out,
            indent,
        } => cmd_merge(&base, &overlays, out.as_deref(), indent)?,
        Cmd::Fmt {
            file,
            indent,
            tabs,
            pack_arrays,
            ensure_ascii,
            write,
            check,
        } => {
            let options = WriteOptions {
                indent: Some(indent),
                indent_char: if tabs { '\t' } else { ' ' },
                pack_arrays,
                ensure_ascii,
            };
            cmd_fmt(&file, &options, write, check)?;
        }
    }
    Ok(())
}

/// Read an input argument, treating `-` as stdin.
fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(file).with_context(|| format!("reading '{file}'"))
    }
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_strip(file: &str, compact: bool) -> Result<()> {
    let text = read_input(file)?;
    print!("{}", strip_comments(&text, !compact));
    Ok(())
}

fn cmd_check(file: &str) -> Result<()> {
    let text = read_input(file)?;
    match parse_jsonc(&text) {
        Ok(_) => {
            println!("{}", serde_json::json!({ "ok": true, "file": file }));
        }
        Err(e) => {
            println!(
                "{}",
                serde_json::json!({ "ok": false, "file": file, "error": e.to_string() })
            );
            process::exit(1);
        }
    }
    Ok(())
}

fn cmd_merge(
    base: &str,
    overlays: &[String],
    out: Option<&std::path::Path>,
    indent: usize,
) -> Result<()> {
    let text = read_input(base)?;
    let mut merged = parse_jsonc(&text).with_context(|| format!("parsing '{base}'"))?;

    for overlay in overlays {
        let text = read_input(overlay)?;
        let value = parse_jsonc(&text).with_context(|| format!("parsing '{overlay}'"))?;
        merged = update_leaves(&merged, &value);
    }

    let options = WriteOptions {
        indent: Some(indent),
        ..Default::default()
    };
    match out {
        Some(path) => write_json(path, &merged, &options)?,
        None => println!("{}", to_string_formatted(&merged, &options)),
    }
    Ok(())
}

fn cmd_fmt(file: &str, options: &WriteOptions, write: bool, check: bool) -> Result<()> {
    let text = read_input(file)?;
    let value = parse_jsonc(&text).with_context(|| format!("parsing '{file}'"))?;
    let mut formatted = to_string_formatted(&value, options);
    formatted.push('\n');

    if check {
        if formatted != text {
            eprintln!("not formatted: {file}");
            process::exit(1);
        }
    } else if write {
        anyhow::ensure!(file != "-", "--write requires a file argument, not stdin");
        fs::write(file, &formatted).with_context(|| format!("writing '{file}'"))?;
    } else {
        print!("{formatted}");
    }
    Ok(())
}
