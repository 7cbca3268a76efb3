//! Line-oriented prompt.
//!
//! A plain-terminal alternative to the TUI: one session lives across many
//! lines, so a cow found with `<id>` can then be milked with `milk`.
//!
//! - `<id>` inspects an animal
//! - `milk` / `kick` act on the last inspected id
//! - `list` prints the herd
//! - `q` quits (as does end of input)

use std::io::{BufRead, Write};

use crate::app::session::Session;
use crate::error::AppError;
use crate::report::{format_registry_table, render_view};

const PROMPT: &str = "herd> ";

pub fn run<R: BufRead, W: Write>(session: &mut Session, mut input: R, mut out: W) -> Result<(), AppError> {
    writeln!(out, "{}", render_view(session.view())).map_err(write_err)?;

    loop {
        write!(out, "{PROMPT}").map_err(write_err)?;
        out.flush().map_err(write_err)?;

        let mut line = String::new();
        let bytes = input
            .read_line(&mut line)
            .map_err(|e| AppError::io("Failed to read input", e))?;
        if bytes == 0 {
            writeln!(out).map_err(write_err)?;
            return Ok(());
        }

        let line = line.trim_end_matches(['\r', '\n']);
        let view = match line.trim() {
            "q" | "quit" | "exit" => return Ok(()),
            "" => continue,
            "list" => {
                write!(out, "{}", format_registry_table(session.registry().iter())).map_err(write_err)?;
                continue;
            }
            "milk" | "yield" => session.yield_milk(),
            "kick" => session.kick_back(),
            _ => {
                // Validation sees the raw text, so stray spaces are rejected.
                session.set_input(line);
                session.check()
            }
        };
        writeln!(out, "{}", render_view(view)).map_err(write_err)?;
    }
}

fn write_err(e: std::io::Error) -> AppError {
    AppError::io("Failed to write output", e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use crate::rules::random::ScriptedSource;

    fn run_script(script: &str, samples: &[f64]) -> String {
        let mut session = Session::new(
            Registry::seeded(),
            Box::new(ScriptedSource::new(samples.iter().copied())),
        );
        let mut out = Vec::new();
        run(&mut session, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn check_then_milk() {
        let out = run_script("12345678\nmilk\nq\n", &[0.9]);
        assert!(out.contains("Cow with ID 12345678 found."));
        assert!(out.contains("  Milk:  5.17 liters"));
        assert!(out.contains("[milk] Yield milk"));
        assert!(out.contains("Milk yielded: 5.17 liters."));
    }

    #[test]
    fn goat_then_kick() {
        let out = run_script("87654321\nkick\n", &[]);
        assert!(out.contains("This is a goat!"));
        assert!(out.contains("[kick]"));
        assert!(out.contains("Goat with ID 87654321 has been kicked back to the mountain."));
    }

    #[test]
    fn invalid_and_unknown_ids() {
        let out = run_script("0123\n 12345678\n11111111\n", &[]);
        assert_eq!(out.matches("Invalid ID.").count(), 2);
        assert!(out.contains("No cow or goat found with ID: 11111111"));
    }

    #[test]
    fn list_prints_table() {
        let out = run_script("list\nq\n", &[]);
        assert!(out.contains("98765432"));
        assert!(out.contains("N/A (goat)"));
    }
}
