//! Interactive prompt mode
//!
//! Line-based loop: ask for a pattern, required letters and excluded letters,
//! then show the matching words. Repeats until `quit` or end of input.

use super::find::{FindConfig, run_find};
use crate::dictionary::Dictionary;
use crate::output::formatters::{format_columns, plural};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Words shown per round before truncating
const MAX_SHOWN: usize = 60;
const COLUMNS: usize = 6;

/// Run the interactive loop on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_interactive(dictionary: &Dictionary) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(dictionary, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the interactive loop over arbitrary input and output
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_session<R: BufRead, W: Write>(
    dictionary: &Dictionary,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                  Word Pattern Finder                         ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Searching {} words.", dictionary.len())?;
    writeln!(output, "Enter a pattern with _ (or . ? *) for unknown letters, e.g. cr__e")?;
    writeln!(output, "Commands: 'quit' to exit\n")?;

    loop {
        let Some(pattern) = prompt(input, output, "Pattern")? else {
            return Ok(());
        };
        match pattern.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                writeln!(output, "\n👋 Bye!\n")?;
                return Ok(());
            }
            _ => {}
        }

        let Some(require) = prompt(input, output, "Required letters (blank for none)")? else {
            return Ok(());
        };
        let Some(exclude) = prompt(input, output, "Excluded letters (blank for none)")? else {
            return Ok(());
        };

        let mut config = FindConfig::new(pattern);
        config.require = require;
        config.exclude = exclude;
        config.limit = Some(MAX_SHOWN);

        match run_find(&config, dictionary) {
            Ok(result) => {
                writeln!(output, "{}", "─".repeat(60))?;
                if !result.conflicts.is_empty() {
                    let letters: String = result.conflicts.iter().collect();
                    writeln!(
                        output,
                        "⚠ {letters} is both required and excluded, nothing can match"
                    )?;
                }
                writeln!(
                    output,
                    "{} {} for {}",
                    result.total,
                    plural(result.total, "match", "matches"),
                    result.query
                )?;
                if !result.words.is_empty() {
                    writeln!(output, "\n{}", format_columns(&result.words, COLUMNS))?;
                }
                if result.truncated() {
                    writeln!(output, "... and {} more", result.total - result.words.len())?;
                }
                writeln!(output, "{}\n", "─".repeat(60))?;
            }
            Err(e) => {
                writeln!(output, "{} {e}\n", "❌".red())?;
            }
        }
    }
}

/// Prompt for a line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
