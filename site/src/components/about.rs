//! About section with the pointer-tilted portrait.
//!
//! The portrait container follows the pointer with a small 3D rotation on
//! desktop. The last offset is kept when the pointer leaves the container.

use leptos::prelude::*;

use crate::content::{ABOUT_PARAGRAPHS, ABOUT_TITLE, PORTRAIT_ALT, PORTRAIT_SRC};
use crate::state::landing::{LandingState, PORTRAIT_TRANSITION};
use crate::util::browser;
use crate::util::section::Section;

#[component]
pub fn About() -> impl IntoView {
    let state = expect_context::<RwSignal<LandingState>>();
    let container = NodeRef::<leptos::html::Div>::new();

    let on_mouse_move = move |ev: leptos::ev::MouseEvent| {
        let Some(rect) = browser::node_rect(container) else {
            return;
        };
        let (client_x, client_y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        state.maybe_update(|s| s.on_pointer_move(rect, client_x, client_y));
    };

    let portrait_transform = move || state.with(|s| s.portrait_transform().css());

    view! {
        <div id=Section::About.id() class="py-20 bg-zinc-900/30">
            <div class="max-w-7xl mx-auto px-4">
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="space-y-6">
                        <h2 class="text-4xl font-bold tracking-tighter">{ABOUT_TITLE}</h2>
                        <div class="space-y-4 text-gray-400">
                            {ABOUT_PARAGRAPHS
                                .iter()
                                .map(|text| view! { <p class="leading-relaxed tracking-wide">{*text}</p> })
                                .collect_view()}
                        </div>
                    </div>
                    <div
                        node_ref=container
                        class="relative overflow-hidden rounded-lg"
                        style:transform=portrait_transform
                        style:transition=PORTRAIT_TRANSITION
                        on:mousemove=on_mouse_move
                    >
                        <img src=PORTRAIT_SRC alt=PORTRAIT_ALT class="w-[600px] h-[900px] object-cover"/>
                        <div class="absolute inset-0 bg-gradient-to-t from-black/50 to-transparent"></div>
                    </div>
                </div>
            </div>
        </div>
    }
}
