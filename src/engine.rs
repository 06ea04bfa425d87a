//! Step trampoline for the ranking workflow.
//!
//! The engine has no policy of its own: it hands the current state and step to
//! the caller's function and adopts whatever comes back until no step remains.

/// Drive `step` from `first` until it returns no next step.
///
/// The terminal marker is `None`, so it can never be dispatched. Errors from
/// `step` propagate unchanged.
pub fn drive<S, T, E, F>(state: S, first: T, mut step: F) -> Result<S, E>
where
    F: FnMut(T, S) -> Result<(S, Option<T>), E>,
{
    let mut current_state = state;
    let mut current_step = Some(first);
    while let Some(token) = current_step {
        let (next_state, next_step) = step(token, current_state)?;
        current_state = next_state;
        current_step = next_step;
    }
    Ok(current_state)
}
