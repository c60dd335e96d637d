//! Mean Time Per Weekday Page

use leptos::*;

use crate::api;
use crate::components::weekday_chart::WeekdayBar;
use crate::components::{Loading, UserCard, UserSelect, WeekdayBarChart};
use crate::state::global::GlobalState;

/// Mean presence time page component
#[component]
pub fn MeanTimeWeekday() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let bars = create_rw_signal(Vec::<WeekdayBar>::new());

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let Some(user_id) = state_for_effect.selected_user.get() else {
            return;
        };
        let generation = state_for_effect.current_generation();

        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_mean_time_weekday(user_id).await {
                Ok(means) => {
                    if state.is_current(generation) {
                        bars.set(
                            means
                                .into_iter()
                                .map(|m| (m.weekday, m.mean_seconds))
                                .collect(),
                        );
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch mean times for user {}: {}", user_id, e).into(),
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

    let state_for_chart = state.clone();

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Mean presence time"</h1>
                    <p class="text-gray-400 mt-1">"Average time spent present per weekday"</p>
                </div>
                <UserSelect />
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                {move || {
                    if state_for_chart.loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        view! { <WeekdayBarChart bars=bars /> }.into_view()
                    }
                }}
            </section>

            <UserCard />
        </div>
    }
}
