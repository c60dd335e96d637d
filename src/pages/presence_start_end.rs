//! Presence Start/End Page
//!
//! Timeline of the selected user's average arrival and leave times per
//! weekday.

use leptos::*;

use crate::api;
use crate::components::{Loading, TimelineChart, UserCard, UserSelect};
use crate::state::global::{transform_intervals, GlobalState, PresenceRow};

/// Start/end timeline page component
#[component]
pub fn PresenceStartEnd() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let rows = create_rw_signal(Vec::<PresenceRow>::new());

    let state_for_effect = state.clone();
    create_effect(move |_| {
        // Empty selection: no fetch, prior chart stays as-is.
        let Some(user_id) = state_for_effect.selected_user.get() else {
            return;
        };
        let generation = state_for_effect.current_generation();

        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_presence_start_end(user_id).await {
                Ok(intervals) => match transform_intervals(intervals) {
                    Ok(fetched) => {
                        if state.is_current(generation) {
                            rows.set(fetched);
                        }
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Bad interval data for user {}: {}", user_id, e).into(),
                        );
                        if state.is_current(generation) {
                            state.show_error(&e);
                        }
                    }
                },
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch intervals for user {}: {}", user_id, e).into(),
                    );
                    if state.is_current(generation) {
                        state.show_error(&e);
                    }
                }
            }

            if state.is_current(generation) {
                state.loading.set(false);
            }
        });
    });

    let state_for_title = state.clone();
    let state_for_chart = state.clone();

    view! {
        <div class="space-y-8">
            // Page header with the shared user selector
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Presence start & end"</h1>
                    <p class="text-gray-400 mt-1">"Average arrival and leave times per weekday"</p>
                </div>
                <UserSelect />
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">
                    {move || {
                        state_for_title
                            .selected_user_name()
                            .map(|name| format!("Timeline for {}", name))
                            .unwrap_or_else(|| "Timeline".to_string())
                    }}
                </h2>

                {move || {
                    if state_for_chart.loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        view! { <TimelineChart rows=rows /> }.into_view()
                    }
                }}
            </section>

            <UserCard />
        </div>
    }
}
