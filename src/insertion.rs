//! Binary insertion driven by an external comparison oracle.
//!
//! Sequences are ordered top first: index 0 holds the item that ranks highest.
//! The oracle never answers "equal", so every comparison pushes the item to one
//! side of the midpoint. When the oracle is inconsistent (a human changing
//! their mind) the result is still well defined but pairs that were never
//! compared directly may disagree with the answers given.
use anyhow::Result;

/// Which of two compared items ranks higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    First,
    Second,
}

/// Source of pairwise "which ranks higher" answers.
pub trait Oracle<T> {
    fn ask(&mut self, first: &T, second: &T) -> Result<Preference>;
}

impl<T, F> Oracle<T> for F
where
    F: FnMut(&T, &T) -> Result<Preference>,
{
    fn ask(&mut self, first: &T, second: &T) -> Result<Preference> {
        self(first, second)
    }
}

/// Insert `item` into the top-first `ordered` sequence.
///
/// Issues at most `ceil(log2(n + 1))` oracle calls, and none for an empty
/// sequence.
pub fn insert_one<T, O>(mut ordered: Vec<T>, item: T, oracle: &mut O) -> Result<Vec<T>>
where
    O: Oracle<T> + ?Sized,
{
    let index = insertion_index(&ordered, &item, oracle)?;
    ordered.insert(index, item);
    Ok(ordered)
}

/// Rebuild a full order by inserting each item in its original order.
pub fn rebuild<T, O>(unordered: Vec<T>, oracle: &mut O) -> Result<Vec<T>>
where
    O: Oracle<T> + ?Sized,
{
    let total = unordered.len();
    let mut ordered = Vec::with_capacity(total);
    for item in unordered {
        ordered = insert_one(ordered, item, oracle)?;
    }
    tracing::debug!(records = total, "rebuild complete");
    Ok(ordered)
}

fn insertion_index<T, O>(ordered: &[T], item: &T, oracle: &mut O) -> Result<usize>
where
    O: Oracle<T> + ?Sized,
{
    let mut low = 0;
    let mut high = ordered.len();
    let mut comparisons = 0usize;
    while low < high {
        let mid = low + (high - low) / 2;
        comparisons += 1;
        match oracle.ask(item, &ordered[mid])? {
            Preference::First => high = mid,
            Preference::Second => low = mid + 1,
        }
    }
    tracing::debug!(
        comparisons,
        index = low,
        len = ordered.len(),
        "insertion point found"
    );
    Ok(low)
}
