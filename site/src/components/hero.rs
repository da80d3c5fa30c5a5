//! Hero section with the parallax headline.

use leptos::prelude::*;

use crate::components::icons::ArrowRightIcon;
use crate::content::{HERO_HEADLINE, HERO_LEDE, HERO_SUBHEADLINE};
use crate::state::landing::LandingState;
use crate::util::section::{Section, scroll_to};

/// Headline block. The headline drifts down at a fifth of the scroll speed
/// on desktop and stays put on mobile.
#[component]
pub fn Hero() -> impl IntoView {
    let state = expect_context::<RwSignal<LandingState>>();

    let headline_transform = move || state.with(|s| s.headline_transform().css());

    view! {
        <div class="pt-32 pb-20 px-4">
            <div class="max-w-7xl mx-auto text-center">
                <h1 class="text-4xl md:text-6xl font-light mb-8 leading-tight tracking-tight space-y-4">
                    <div class="h-[80px] md:h-[120px] flex items-center justify-center overflow-visible">
                        <div class="header-text" style:transform=headline_transform>
                            {HERO_HEADLINE}
                        </div>
                    </div>
                    <span class="block text-white/60 text-2xl md:text-3xl font-normal tracking-widest uppercase">
                        {HERO_SUBHEADLINE}
                    </span>
                </h1>
                <p class="text-xl text-gray-400 max-w-2xl mx-auto mb-12 tracking-wide">{HERO_LEDE}</p>
                <div class="flex justify-center">
                    <button
                        type="button"
                        class="glow-effect bg-white text-black hover:bg-gray-200 px-8 py-4 rounded-none text-lg font-semibold flex items-center justify-center space-x-2 transition-all tracking-wider"
                        on:click=move |_| scroll_to(Section::Contact)
                    >
                        <span>"Book a Demo"</span>
                        <ArrowRightIcon/>
                    </button>
                </div>
            </div>
        </div>
    }
}
