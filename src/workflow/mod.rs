//! The interactive ranking workflow.
//!
//! Each step is a small function over an owned `RankState`; the engine walks
//! them from location to persist, and only the persist step changes the file.
mod run;
mod state;
mod steps;

pub use run::run_from_args;
