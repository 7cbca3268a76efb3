//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads settings and installs logging
//! - builds the session (seeded registry + random source)
//! - hands it to the chosen front-end

use std::io;

use clap::Parser;
use tracing::info;

use crate::cli::{Command, IdArgs};
use crate::config::Settings;
use crate::error::AppError;
use crate::logging::{self, LogTarget};
use crate::registry::Registry;
use crate::rules::RngSource;

pub mod session;

use session::{Session, ViewState};

/// Entry point for the `herd` binary.
pub fn run() -> Result<(), AppError> {
    // `herd` and `herd --seed 7` behave like `herd tui ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    let mut settings = Settings::from_env()?;
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }

    let target = match cli.command {
        Command::Tui => LogTarget::File(&settings.log_file),
        _ => LogTarget::Stderr,
    };
    logging::init(&settings.log_filter, target)?;
    info!(seed = ?settings.seed, "starting session");

    let session = new_session(&settings);
    match cli.command {
        Command::Tui => crate::tui::run(session),
        Command::Check(args) => handle_one_shot(session, args, Session::check),
        Command::Milk(args) => handle_one_shot(session, args, Session::yield_milk),
        Command::Kick(args) => handle_one_shot(session, args, Session::kick_back),
        Command::List(args) => handle_list(session.registry(), args.json),
        Command::Shell => {
            let mut session = session;
            crate::cli::shell::run(&mut session, io::stdin().lock(), io::stdout().lock())
        }
    }
}

pub fn new_session(settings: &Settings) -> Session {
    Session::new(Registry::seeded(), Box::new(RngSource::new(settings.seed)))
}

fn handle_one_shot(
    mut session: Session,
    args: IdArgs,
    action: fn(&mut Session) -> &ViewState,
) -> Result<(), AppError> {
    session.set_input(args.id);
    println!("{}", crate::report::render_view(action(&mut session)));
    Ok(())
}

fn handle_list(registry: &Registry, json: bool) -> Result<(), AppError> {
    if json {
        let records: Vec<_> = registry.iter().collect();
        let text = serde_json::to_string_pretty(&records)
            .map_err(|e| AppError::io("Failed to serialize herd", e))?;
        println!("{text}");
    } else {
        print!("{}", crate::report::format_registry_table(registry.iter()));
    }
    Ok(())
}

/// Rewrite argv so `herd` defaults to `herd tui`.
///
/// Rules:
/// - `herd`                     -> `herd tui`
/// - `herd --seed 7 ...`        -> `herd tui --seed 7 ...`
/// - `herd --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
    }
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_opens_tui() {
        assert_eq!(rewrite_args(args(&["herd"])), args(&["herd", "tui"]));
    }

    #[test]
    fn leading_flag_goes_to_tui() {
        assert_eq!(
            rewrite_args(args(&["herd", "--seed", "7"])),
            args(&["herd", "tui", "--seed", "7"])
        );
    }

    #[test]
    fn subcommands_and_help_untouched() {
        for argv in [
            args(&["herd", "check", "12345678"]),
            args(&["herd", "--help"]),
            args(&["herd", "-V"]),
            args(&["herd", "list", "--json"]),
        ] {
            assert_eq!(rewrite_args(argv.clone()), argv);
        }
    }

    #[test]
    fn rewritten_args_parse() {
        let cli = crate::cli::Cli::parse_from(rewrite_args(args(&["herd", "--seed", "3"])));
        assert_eq!(cli.seed, Some(3));
        assert!(matches!(cli.command, Command::Tui));
    }

    #[test]
    fn seeded_sessions_behave_identically() {
        let settings = Settings {
            seed: Some(11),
            ..Settings::default()
        };
        let mut a = new_session(&settings);
        let mut b = new_session(&settings);
        for _ in 0..50 {
            for s in [&mut a, &mut b] {
                s.set_input("12345678");
                s.check();
                s.yield_milk();
                s.set_input("34567890");
                s.check();
            }
            assert_eq!(a.view(), b.view());
        }
        let teats = |s: &Session| s.registry().iter().map(|r| r.teat_count()).collect::<Vec<_>>();
        assert_eq!(teats(&a), teats(&b));
    }
}
