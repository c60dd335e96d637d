//! User Selector Component
//!
//! Dropdown populated from the users endpoint. The selected value is the
//! shared contract between the chart pages and the detail card.

use leptos::*;

use crate::api;
use crate::components::InlineLoading;
use crate::state::global::GlobalState;

/// Whether an option with `value` should render as selected. The placeholder
/// carries the empty value and wins when nothing is selected.
fn option_is_selected(selected: Option<u32>, value: &str) -> bool {
    match selected {
        Some(id) => value.parse() == Ok(id),
        None => value.is_empty(),
    }
}

/// User dropdown. Fetches the users listing once on mount; the spinner is
/// replaced by the selector only when the fetch resolves, so a failed fetch
/// leaves the spinner visible.
#[component]
pub fn UserSelect() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_effect = state.clone();
    create_effect(move |prev: Option<()>| {
        // Run the fetch once, not on every signal change
        if prev.is_some() {
            return;
        }
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(users) => {
                    state.users.set(users);
                    state.users_loading.set(false);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch users: {}", e).into());
                    state.show_error(&e);
                }
            }
        });
    });

    let state_for_change = state.clone();
    let on_change = move |ev| {
        let value = event_target_value(&ev);
        // An empty value deselects; no fetch is triggered downstream.
        state_for_change.select_user(value.parse().ok());
    };

    view! {
        <div class="flex items-center space-x-3">
            <label class="text-sm text-gray-400" for="user_id">"Employee"</label>

            {move || {
                if state.users_loading.get() {
                    view! { <InlineLoading /> }.into_view()
                } else {
                    let users = state.users.get();
                    // Keep the dropdown in sync with the selection, so a page
                    // change does not reset it to the placeholder.
                    let current = state.selected_user.get();
                    view! {
                        <select
                            id="user_id"
                            on:change=on_change.clone()
                            class="bg-gray-700 rounded-lg px-4 py-2 focus:outline-none
                                   focus:ring-2 focus:ring-primary-500"
                        >
                            <option value="" selected=option_is_selected(current, "")>
                                "Select a user"
                            </option>
                            {users.into_iter().map(|user| {
                                let value = user.user_id.to_string();
                                let is_selected = option_is_selected(current, &value);
                                view! {
                                    <option value=value selected=is_selected>{user.name}</option>
                                }
                            }).collect_view()}
                        </select>
                    }.into_view()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_selected_without_a_selection() {
        assert!(option_is_selected(None, ""));
        assert!(!option_is_selected(None, "1"));
    }

    #[test]
    fn test_matching_user_option_is_selected() {
        assert!(option_is_selected(Some(1), "1"));
        assert!(!option_is_selected(Some(1), "2"));
        assert!(!option_is_selected(Some(1), ""));
    }
}
