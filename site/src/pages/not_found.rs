//! Fallback for unknown paths.

use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-black text-white font-mono flex items-center justify-center">
            <p class="text-gray-400 tracking-wide">"Page not found."</p>
        </div>
    }
}
