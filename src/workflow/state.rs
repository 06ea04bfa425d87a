use crate::dataset::{Dataset, Record};
use std::path::PathBuf;

/// The fixed menu of workflow steps. Termination is the absence of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    AcquireLocation,
    LoadDataset,
    ChooseAction,
    CollectRecord,
    RankRecord,
    ReorderAll,
    Persist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Reorder,
}

impl Action {
    /// Anything other than "add" means reorder.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("add") {
            Action::Add
        } else {
            Action::Reorder
        }
    }
}

/// What a finished run did, for the closing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(Record),
    Reordered,
    NothingToReorder,
}

/// Everything threaded between steps. Each step takes it by value and hands
/// back a replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankState {
    pub location: Option<PathBuf>,
    pub has_header: Option<bool>,
    /// Set when the location did not exist at load time.
    pub missing: bool,
    pub dataset: Dataset,
    pub action: Option<Action>,
    pub pending: Option<Record>,
    pub outcome: Option<Outcome>,
}
