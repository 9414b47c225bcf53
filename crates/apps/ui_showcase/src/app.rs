use leptos::*;
use semantic_markup::into_view;
use serde_json::Value;

use crate::{update, view, ShowcaseConfig, ShowcaseMsg, ShowcaseState};

/// Decodes a persisted state snapshot, logging and discarding payloads that
/// no longer match the state shape.
pub fn restore_state(snapshot: Option<Value>) -> ShowcaseState {
    let Some(snapshot) = snapshot else {
        return ShowcaseState::default();
    };
    match serde_json::from_value::<ShowcaseState>(snapshot) {
        Ok(state) => state,
        Err(err) => {
            logging::warn!("showcase state restore failed: {err}");
            ShowcaseState::default()
        }
    }
}

#[component]
/// Interactive showcase. Widget messages flow through [`update`] into one
/// signal and the page is re-rendered from it.
pub fn ShowcaseApp(
    /// Page settings.
    #[prop(optional)]
    config: Option<ShowcaseConfig>,
    /// Previously persisted state snapshot.
    #[prop(optional)]
    restored_state: Option<Value>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let state = create_rw_signal(restore_state(restored_state));
    let dispatch = Callback::new(move |msg: ShowcaseMsg| {
        state.update(|state| update(state, msg));
    });

    move || into_view(view(&state.get(), &config), dispatch)
}
