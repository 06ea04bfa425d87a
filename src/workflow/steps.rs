use super::state::{Action, Outcome, RankState, Step};
use crate::config::RankConfig;
use crate::console::{Console, ConsoleOracle};
use crate::dataset::{Dataset, Snapshot};
use crate::engine;
use crate::insertion::{insert_one, rebuild};
use crate::source::{CsvSource, DataSource};
use anyhow::{anyhow, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Collaborators a run talks to.
pub struct RankContext<'a, R, W> {
    pub source: &'a dyn DataSource,
    pub console: &'a mut Console<R, W>,
    pub config: &'a RankConfig,
}

/// Run the ranking workflow from `seed` until it terminates, then report.
pub fn run_ranking<R: BufRead, W: Write>(
    ctx: &mut RankContext<'_, R, W>,
    seed: RankState,
) -> Result<RankState> {
    let state = engine::drive(seed, Step::AcquireLocation, |step, state| {
        tracing::debug!(?step, "workflow step");
        advance(ctx, step, state)
    })?;
    report_outcome(ctx.console, &state)?;
    Ok(state)
}

fn advance<R: BufRead, W: Write>(
    ctx: &mut RankContext<'_, R, W>,
    step: Step,
    state: RankState,
) -> Result<(RankState, Option<Step>)> {
    match step {
        Step::AcquireLocation => acquire_location(ctx, state),
        Step::LoadDataset => load_dataset(ctx, state),
        Step::ChooseAction => choose_action(ctx, state),
        Step::CollectRecord => collect_record(ctx, state),
        Step::RankRecord => rank_record(ctx, state),
        Step::ReorderAll => reorder_all(ctx, state),
        Step::Persist => persist(ctx, state),
    }
}

fn acquire_location<R: BufRead, W: Write>(
    ctx: &mut RankContext<'_, R, W>,
    state: RankState,
) -> Result<(RankState, Option<Step>)> {
    let location = match state.location {
        Some(location) => location,
        None => PathBuf::from(ctx.console.ask_nonempty("Path to the CSV file: ")?),
    };
    let next = RankState {
        location: Some(location),
        ..state
    };
    Ok((next, Some(Step::LoadDataset)))
}

fn load_dataset<R: BufRead, W: Write>(
    ctx: &mut RankContext<'_, R, W>,
    state: RankState,
) -> Result<(RankState, Option<Step>)> {
    let location = require_location(&state)?.to_path_buf();
    let has_header = match state.has_header.or(ctx.config.header) {
        Some(flag) => flag,
        None => ctx
            .console
            .ask_yes_no("Does the file have a header row? [y/n]: ")?,
    };
    let (dataset, missing) = match ctx.source.load(&location, has_header)? {
        Snapshot::Missing if has_header => {
            return Err(anyhow!(
                "{} does not exist, so it has no header row to keep",
                location.display()
            ));
        }
        Snapshot::Missing => (Dataset::default(), true),
        Snapshot::Present(dataset) if has_header && dataset.header.is_none() => {
            return Err(anyhow!(
                "{} is empty, so it has no header row to keep",
                location.display()
            ));
        }
        Snapshot::Present(dataset) => (dataset, false),
    };
    if missing {
        tracing::info!(path = %location.display(), "data file does not exist yet");
    }
    let next = RankState {
        has_header: Some(has_header),
        missing,
        dataset,
        ..state
    };
    Ok((next, Some(Step::ChooseAction)))
}

fn choose_action<R: BufRead, W: Write>(
    ctx: &mut RankContext<'_, R, W>,
    state: RankState,
) -> Result<(RankState, Option<Step>)> {
    let action = match state.action {
        Some(action) => action,
        None => Action::from_label(&ctx.console.ask_line("Action (add or reorder): ")?),
    };
    let following = match action {
        Action::Add => Step::CollectRecord,
        Action::Reorder => Step::ReorderAll,
    };
    let next = RankState {
        action: Some(action),
        ..state
    };
    Ok((next, Some(following)))
}

fn collect_record<R: BufRead, W: Write>(
    ctx: &mut RankContext<'_, R, W>,
    state: RankState,
) -> Result<(RankState, Option<Step>)> {
    let record = match state.pending {
        Some(record) => record,
        None => {
            let parser = CsvSource::new(ctx.config.delimiter_byte()?);
            loop {
                let line = ctx.console.ask_nonempty("New row (delimited fields): ")?;
                let record = parser.parse_line(&line)?;
                if !record.is_empty() {
                    break record;
                }
            }
        }
    };
    let next = RankState {
        pending: Some(record),
        ..state
    };
    Ok((next, Some(Step::RankRecord)))
}

fn rank_record<R: BufRead, W: Write>(
    ctx: &mut RankContext<'_, R, W>,
    state: RankState,
) -> Result<(RankState, Option<Step>)> {
    let RankState {
        dataset: Dataset { header, records },
        pending,
        ..
    } = state;
    let record = pending.ok_or_else(|| anyhow!("no pending row to rank"))?;
    let prompt_header = header.as_ref().filter(|_| ctx.config.show_header);
    let mut oracle = ConsoleOracle::new(&mut *ctx.console, prompt_header);
    let records = insert_one(records, record.clone(), &mut oracle)?;
    let next = RankState {
        dataset: Dataset { header, records },
        pending: None,
        outcome: Some(Outcome::Added(record)),
        ..state
    };
    Ok((next, Some(Step::Persist)))
}

fn reorder_all<R: BufRead, W: Write>(
    ctx: &mut RankContext<'_, R, W>,
    state: RankState,
) -> Result<(RankState, Option<Step>)> {
    let location = require_location(&state)?;
    if state.missing {
        return Err(anyhow!(
            "{} does not exist; nothing to reorder",
            location.display()
        ));
    }
    if state.dataset.records.is_empty() {
        let next = RankState {
            outcome: Some(Outcome::NothingToReorder),
            ..state
        };
        return Ok((next, None));
    }
    let Dataset { header, records } = state.dataset;
    let prompt_header = header.as_ref().filter(|_| ctx.config.show_header);
    let mut oracle = ConsoleOracle::new(&mut *ctx.console, prompt_header);
    let records = rebuild(records, &mut oracle)?;
    let next = RankState {
        dataset: Dataset { header, records },
        outcome: Some(Outcome::Reordered),
        ..state
    };
    Ok((next, Some(Step::Persist)))
}

fn persist<R: BufRead, W: Write>(
    ctx: &mut RankContext<'_, R, W>,
    state: RankState,
) -> Result<(RankState, Option<Step>)> {
    let location = require_location(&state)?;
    ctx.source.save(
        location,
        state.dataset.header.as_ref(),
        &state.dataset.records,
    )?;
    Ok((state, None))
}

fn require_location(state: &RankState) -> Result<&std::path::Path> {
    state
        .location
        .as_deref()
        .ok_or_else(|| anyhow!("no data file location chosen"))
}

fn report_outcome<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &RankState,
) -> Result<()> {
    match &state.outcome {
        Some(Outcome::Added(record)) => {
            console.say("")?;
            console.say(&format!("Added new row: {record}"))
        }
        Some(Outcome::Reordered) => {
            console.say("")?;
            console.say("File has been reordered.")
        }
        Some(Outcome::NothingToReorder) => console.say("File is empty. Nothing to reorder."),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "steps_tests.rs"]
mod tests;
