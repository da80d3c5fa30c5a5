//! Feature grid.

use leptos::prelude::*;

use crate::components::icons::feature_icon;
use crate::content::{FEATURES, Feature};
use crate::util::section::Section;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <div id=Section::Features.id() class="py-20 bg-gradient-to-b from-black to-zinc-900/20">
            <div class="max-w-7xl mx-auto px-4">
                <div class="grid md:grid-cols-3 gap-12">
                    {FEATURES.iter().map(|feature| view! { <FeatureCard feature=*feature/> }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="p-8 bg-white/5 backdrop-blur-lg border border-white/10 hover:border-white/30 transition-all">
            <div class="mb-6 text-white">{feature_icon(feature.icon)}</div>
            <h3 class="text-xl font-semibold mb-4 tracking-wider">{feature.title}</h3>
            <p class="text-gray-400 tracking-wide">{feature.description}</p>
        </div>
    }
}
