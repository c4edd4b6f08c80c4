//! Centralized state store with an effect-emitting reducer

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

/// Result of dispatching an action.
///
/// Carries the re-render indicator and any effects to process after
/// dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchResult {
    /// Whether the state was modified by this action.
    pub changed: bool,
    /// Effects to be processed after dispatch.
    pub effects: Vec<Effect>,
}

impl DispatchResult {
    /// No state change and no effects.
    #[inline]
    pub fn unchanged() -> Self {
        Self::default()
    }

    /// State changed, no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// State changed with a single effect.
    #[inline]
    pub fn changed_with(effect: Effect) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// Returns true if there are any effects to process.
    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// A reducer function that handles actions and mutates state.
pub type Reducer = fn(&mut AppState, Action) -> DispatchResult;

/// Holds the application state; all mutations go through [`Store::dispatch`].
pub struct Store {
    state: AppState,
    reducer: Reducer,
}

impl Store {
    /// Create a new store with initial state and reducer.
    pub fn new(state: AppState, reducer: Reducer) -> Self {
        Self { state, reducer }
    }

    /// Get a reference to the current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a mutable reference to the state.
    ///
    /// Use sparingly - prefer dispatching actions for state changes.
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Dispatch an action, logging its summary and outcome.
    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let summary = action.summary();
        let result = (self.reducer)(&mut self.state, action);
        tracing::debug!(
            action = %summary,
            changed = result.changed,
            effects = result.effects.len(),
            "action processed"
        );
        result
    }
}
