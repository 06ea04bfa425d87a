//! Wiring from parsed command-line arguments to a workflow run.
//!
//! Subcommands pre-seed the state so the matching prompts are skipped; with no
//! subcommand every step asks for what it needs.
use super::state::{Action, RankState};
use super::steps::{run_ranking, RankContext};
use crate::cli::{Command, RootArgs};
use crate::config::RankConfig;
use crate::console::Console;
use crate::dataset::Record;
use crate::source::CsvSource;
use anyhow::Result;

pub fn run_from_args(args: &RootArgs, config: &RankConfig) -> Result<()> {
    let source = CsvSource::new(config.delimiter_byte()?);
    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    let mut ctx = RankContext {
        source: &source,
        console: &mut console,
        config,
    };
    run_ranking(&mut ctx, seed_state(args, config))?;
    Ok(())
}

fn seed_state(args: &RootArgs, config: &RankConfig) -> RankState {
    let location = args.file.clone();
    // An explicit subcommand never prompts about headers.
    let header_flag = |header: bool, no_header: bool| {
        Some(match (header, no_header) {
            (true, _) => true,
            (_, true) => false,
            _ => config.header.unwrap_or(false),
        })
    };
    match &args.command {
        None => RankState {
            location,
            ..RankState::default()
        },
        Some(Command::Add(add)) => RankState {
            location,
            has_header: header_flag(add.header, add.no_header),
            action: Some(Action::Add),
            pending: Some(Record::new(add.row.clone())),
            ..RankState::default()
        },
        Some(Command::Reorder(reorder)) => RankState {
            location,
            has_header: header_flag(reorder.header, reorder.no_header),
            action: Some(Action::Reorder),
            ..RankState::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;
    use clap::Parser;
    use std::path::PathBuf;

    fn parse(argv: &[&str]) -> RootArgs {
        RootArgs::try_parse_from(argv).expect("parse args")
    }

    #[test]
    fn add_command_seeds_row_and_header() {
        let args = parse(&["pairrank", "data.csv", "add", "c", "3", "--header"]);
        let state = seed_state(&args, &default_config());
        assert_eq!(state.location, Some(PathBuf::from("data.csv")));
        assert_eq!(state.has_header, Some(true));
        assert_eq!(state.action, Some(Action::Add));
        assert_eq!(state.pending, Some(Record::from(["c", "3"])));
    }

    #[test]
    fn reorder_without_flag_uses_config_default() {
        let args = parse(&["pairrank", "data.csv", "reorder"]);
        assert_eq!(
            seed_state(&args, &default_config()).has_header,
            Some(false)
        );

        let mut config = default_config();
        config.header = Some(true);
        let state = seed_state(&args, &config);
        assert_eq!(state.has_header, Some(true));
        assert_eq!(state.action, Some(Action::Reorder));
        assert!(state.pending.is_none());
    }

    #[test]
    fn no_header_flag_overrides_config_default() {
        let mut config = default_config();
        config.header = Some(true);
        let reorder = parse(&["pairrank", "data.csv", "reorder", "--no-header"]);
        assert_eq!(seed_state(&reorder, &config).has_header, Some(false));
        let add = parse(&["pairrank", "data.csv", "add", "c", "--no-header"]);
        assert_eq!(seed_state(&add, &config).has_header, Some(false));

        let both = ["pairrank", "data.csv", "reorder", "--header", "--no-header"];
        assert!(RootArgs::try_parse_from(both).is_err());
    }

    #[test]
    fn bare_invocation_leaves_everything_to_prompts() {
        let args = parse(&["pairrank"]);
        assert_eq!(seed_state(&args, &default_config()), RankState::default());
    }

    #[test]
    fn add_requires_at_least_one_field() {
        assert!(RootArgs::try_parse_from(["pairrank", "data.csv", "add"]).is_err());
    }
}
