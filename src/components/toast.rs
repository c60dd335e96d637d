//! Toast Notification Component
//!
//! Shows fetch errors as auto-clearing toasts.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || {
                state.error.get().map(|msg| view! {
                    <ToastMessage message=msg />
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3 bg-red-600 text-white px-4 py-3 rounded-lg \
                    shadow-lg transform transition-all duration-300 ease-out animate-slide-in">
            <span class="text-lg">"✕"</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
