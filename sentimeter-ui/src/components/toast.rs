//! Toast Notification Component
//!
//! The single banner used for validation errors, request failures and
//! confirmations.

use leptos::*;

use crate::state::view::BANNER_TIMEOUT_MS;
use crate::state::{PageController, ViewSlices};

/// Banner container
#[component]
pub fn Toast() -> impl IntoView {
    let ctrl = use_context::<PageController>().expect("PageController not found");
    let state = *ctrl.store();
    let banner = use_context::<ViewSlices>().expect("ViewSlices not found").banner;

    // Only a new banner schedules a timer
    let banner_id = create_memo(move |_| banner.with(|b| b.as_ref().map(|b| b.id)));
    create_effect(move |_| {
        if let Some(id) = banner_id.get() {
            gloo_timers::callback::Timeout::new(BANNER_TIMEOUT_MS, move || {
                state.update(|v| v.dismiss_banner(id));
            })
            .forget();
        }
    });

    view! {
        <div
            id="error-box"
            class="error-box rounded-lg px-4 py-3 text-sm font-medium"
            class:show=move || banner.with(Option::is_some)
            style=move || banner.with(|b| b.as_ref().map(|b| b.tone.style()).unwrap_or_default())
        >
            <span id="error-msg">
                {move || banner.with(|b| b.as_ref().map(|b| b.message.clone()).unwrap_or_default())}
            </span>
        </div>
    }
}
