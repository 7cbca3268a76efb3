//! Command-line parsing for the `herd` binary.
//!
//! Argument parsing and command dispatch are kept apart from the model code;
//! the commands here only decide which front-end drives the session.

use clap::{Parser, Subcommand};

pub mod shell;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "herd", version, about = "Look up cows and goats, milk them, kick them back")]
pub struct Cli {
    /// Seed for teat loss/regrowth rolls (overrides HERD_SEED).
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive terminal UI (the default).
    Tui,
    /// Inspect one animal and print its details.
    Check(IdArgs),
    /// Milk one cow.
    Milk(IdArgs),
    /// Kick one goat back to the mountain.
    Kick(IdArgs),
    /// Print the whole herd.
    List(ListArgs),
    /// Line-oriented prompt sharing one session across commands.
    Shell,
}

#[derive(Debug, Parser, Clone)]
pub struct IdArgs {
    /// 8-digit animal id, first digit not 0.
    pub id: String,
}

#[derive(Debug, Parser, Clone)]
pub struct ListArgs {
    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subcommand_with_global_seed() {
        let cli = Cli::parse_from(["herd", "check", "12345678", "--seed", "9"]);
        assert_eq!(cli.seed, Some(9));
        match cli.command {
            Command::Check(args) => assert_eq!(args.id, "12345678"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn id_is_taken_verbatim() {
        let cli = Cli::parse_from(["herd", "milk", "0123"]);
        let Command::Milk(args) = cli.command else {
            panic!("expected milk");
        };
        assert_eq!(args.id, "0123");
    }
}
