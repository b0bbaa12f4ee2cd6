//! mathscan CLI - interactive menu over the core scanner and validator.
//!
//! Two operations are offered, mirroring the two core entry paths: validate
//! one typed expression ([`mathscan_core::is_valid`]), or scan a named file
//! and list every confirmed expression
//! ([`mathscan_core::find_expressions`]). Results go to stdout; logging
//! goes to stderr so the menu stays readable. The log filter comes from
//! `RUST_LOG`.

mod source;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use mathscan_core::{find_expressions, is_valid};

use crate::source::read_text_source;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("*=== Math expression search ===*");

    loop {
        println!();
        println!("1. Validate an expression");
        println!("2. Find expressions in a file");
        println!("3. Quit");

        let Some(choice) = prompt(&mut lines, "Your choice (1-3): ")? else {
            break;
        };

        match choice.trim() {
            "1" => {
                let Some(expression) = prompt(&mut lines, "Enter an expression: ")? else {
                    break;
                };
                present_verdict(is_valid(&expression));
            }
            "2" => {
                let Some(filename) = prompt(&mut lines, "Enter a file name: ")? else {
                    break;
                };
                scan_file(filename.trim());
            }
            "3" => {
                println!("Leaving.");
                break;
            }
            other => {
                tracing::debug!(choice = other, "unknown menu selection");
                println!("Unknown choice. Try again.");
            }
        }
    }

    Ok(())
}

/// Print `message`, flush, and read one line. `None` means stdin hit EOF
/// and the menu loop should end cleanly.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

/// Scan one file and present whatever the pipeline confirms. A failed read
/// is reported and degrades to an empty scan; it never aborts the menu.
fn scan_file(path: &str) {
    let text = match read_text_source(Path::new(path)) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(path, error = %err, "text source unavailable");
            println!("Error: {err}");
            String::new()
        }
    };

    present_results(&find_expressions(&text));
}

fn present_verdict(valid: bool) {
    if valid {
        println!("✓ Expression is valid");
    } else {
        println!("✗ Expression is invalid");
    }
}

fn present_results(expressions: &[&str]) {
    if expressions.is_empty() {
        println!("\nNo expressions found");
        return;
    }

    println!("\nFound {} expression(s):", expressions.len());
    for (i, expr) in expressions.iter().enumerate() {
        println!("{}. {expr}", i + 1);
    }
}
