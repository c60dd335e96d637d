//! User Detail Card
//!
//! Shows the selected user's name and avatar. Owns its loading state and
//! clears it when the profile fetch completes.

use leptos::*;

use crate::api;
use crate::components::InlineLoading;
use crate::state::global::{GlobalState, UserProfile};

/// Detail card for the selected user
#[component]
pub fn UserCard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let profile = create_rw_signal(None::<UserProfile>);
    let loading = create_rw_signal(false);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        // No selection: keep whatever was rendered before.
        let Some(user_id) = state_for_effect.selected_user.get() else {
            return;
        };
        let generation = state_for_effect.current_generation();

        let state = state_for_effect.clone();
        spawn_local(async move {
            loading.set(true);
            match api::fetch_user_profile(user_id).await {
                Ok(fetched) => {
                    if state.is_current(generation) {
                        profile.set(Some(fetched));
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch profile of user {}: {}", user_id, e).into(),
                    );
                    if state.is_current(generation) {
                        state.show_error(&e);
                    }
                }
            }
            if state.is_current(generation) {
                loading.set(false);
            }
        });
    });

    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">"User details"</span>
                {move || loading.get().then(|| view! { <InlineLoading /> })}
            </div>

            {move || {
                match profile.get() {
                    Some(profile) => view! {
                        <div class="flex items-center space-x-4 mt-3">
                            <img
                                src=profile.image_url
                                alt=profile.name.clone()
                                class="w-16 h-16 rounded-full object-cover"
                            />
                            <span class="text-lg font-semibold">{profile.name}</span>
                        </div>
                    }.into_view(),
                    None => view! {
                        <p class="text-gray-500 text-sm mt-3">"No user selected"</p>
                    }.into_view(),
                }
            }}
        </div>
    }
}
