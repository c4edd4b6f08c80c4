//! Reducer - pure transition function: (state, action) -> DispatchResult
//!
//! All state mutations happen here. Side work is declared as effects and
//! executed by the main loop. Transitions are strictly
//! `{Idle, Failed, Loaded} -> Loading -> {Loaded, Failed}` per fetch cycle.

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, ViewState};
use crate::store::DispatchResult;

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult {
    match action {
        Action::WeatherFetch => {
            // One request at a time; a second trigger while loading is
            // ignored rather than relying on the hint being hidden.
            if state.view.is_loading() {
                return DispatchResult::unchanged();
            }
            state.view = ViewState::Loading;
            DispatchResult::changed_with(Effect::FetchWeather)
        }

        Action::WeatherDidLoad(records) => {
            state.view = ViewState::Loaded(records);
            DispatchResult::changed()
        }

        Action::WeatherDidError(message) => {
            state.view = ViewState::Failed(message);
            DispatchResult::changed()
        }

        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Only re-render while the spinner is visible.
            if state.view.is_loading() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // Quit is handled in the main loop, not here.
        Action::Quit => DispatchResult::unchanged(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WeatherRecord;

    fn record(place: &str) -> WeatherRecord {
        WeatherRecord {
            place: place.into(),
            date: "2024-01-01".into(),
            temperature: "10C".into(),
        }
    }

    #[test]
    fn test_fetch_sets_loading_and_emits_effect() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::WeatherFetch);

        assert!(result.changed);
        assert_eq!(result.effects, vec![Effect::FetchWeather]);
        assert!(state.view.is_loading());
    }

    #[test]
    fn test_fetch_is_ignored_while_loading() {
        let mut state = AppState {
            view: ViewState::Loading,
            ..Default::default()
        };

        let result = reducer(&mut state, Action::WeatherFetch);

        assert!(!result.changed);
        assert!(!result.has_effects());
        assert!(state.view.is_loading());
    }

    #[test]
    fn test_fetch_refreshes_from_loaded() {
        let mut state = AppState {
            view: ViewState::Loaded(vec![record("Paris")]),
            ..Default::default()
        };

        let result = reducer(&mut state, Action::WeatherFetch);

        assert_eq!(result.effects, vec![Effect::FetchWeather]);
        assert!(state.view.is_loading());
    }

    #[test]
    fn test_fetch_retries_from_failed() {
        let mut state = AppState {
            view: ViewState::Failed("timeout".into()),
            ..Default::default()
        };

        let result = reducer(&mut state, Action::WeatherFetch);

        assert_eq!(result.effects, vec![Effect::FetchWeather]);
        assert!(state.view.is_loading());
    }

    #[test]
    fn test_did_load_replaces_loading() {
        let mut state = AppState {
            view: ViewState::Loading,
            ..Default::default()
        };

        let changed = reducer(&mut state, Action::WeatherDidLoad(vec![record("Paris")])).changed;

        assert!(changed);
        assert!(!state.view.is_loading());
        assert_eq!(state.view.records().map(<[WeatherRecord]>::len), Some(1));
    }

    #[test]
    fn test_did_load_with_empty_records_is_loaded_not_failed() {
        let mut state = AppState {
            view: ViewState::Loading,
            ..Default::default()
        };

        reducer(&mut state, Action::WeatherDidLoad(vec![]));

        assert_eq!(state.view, ViewState::Loaded(vec![]));
    }

    #[test]
    fn test_did_error_replaces_loading() {
        let mut state = AppState {
            view: ViewState::Loading,
            ..Default::default()
        };

        let changed = reducer(&mut state, Action::WeatherDidError("timeout".into())).changed;

        assert!(changed);
        assert!(!state.view.is_loading());
        assert_eq!(state.view.error(), Some("timeout"));
    }

    #[test]
    fn test_error_does_not_linger_after_later_success() {
        let mut state = AppState {
            view: ViewState::Failed("old error".into()),
            ..Default::default()
        };

        reducer(&mut state, Action::WeatherFetch);
        reducer(&mut state, Action::WeatherDidLoad(vec![record("Paris")]));

        assert!(state.view.error().is_none());
        assert!(state.view.records().is_some());
    }

    #[test]
    fn test_tick_only_rerenders_while_loading() {
        let mut state = AppState::default();

        assert!(!reducer(&mut state, Action::Tick).changed);

        state.view = ViewState::Loading;
        assert!(reducer(&mut state, Action::Tick).changed);
        assert_eq!(state.tick_count, 2);
    }

    #[test]
    fn test_quit_leaves_state_untouched() {
        let mut state = AppState {
            view: ViewState::Loaded(vec![record("Paris")]),
            ..Default::default()
        };
        let before = state.clone();

        let result = reducer(&mut state, Action::Quit);

        assert!(!result.changed);
        assert_eq!(state, before);
    }
}
