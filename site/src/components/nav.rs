//! Fixed top navigation bar.

use leptos::prelude::*;

use crate::components::icons::ChevronRightIcon;
use crate::content::BRAND;
use crate::util::section::{Section, scroll_to};

/// Brand mark, section links and the (unbound) docs button.
#[component]
pub fn Navigation() -> impl IntoView {
    view! {
        <nav class="fixed w-full z-50 bg-black/90 backdrop-blur-lg border-b border-white/10">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16 items-center">
                    <div class="text-2xl font-bold tracking-tighter">{BRAND}</div>
                    <div class="hidden md:flex space-x-8">
                        <button
                            type="button"
                            class="text-gray-400 hover:text-white transition-colors tracking-wide"
                            on:click=move |_| scroll_to(Section::Features)
                        >
                            "Features"
                        </button>
                        <a
                            href=Section::About.href()
                            class="text-gray-400 hover:text-white transition-colors tracking-wide"
                        >
                            "About"
                        </a>
                        <button
                            type="button"
                            class="text-gray-400 hover:text-white transition-colors tracking-wide"
                            on:click=move |_| scroll_to(Section::Contact)
                        >
                            "Contact"
                        </button>
                    </div>
                    <button
                        type="button"
                        class="bg-white text-black hover:bg-gray-200 px-6 py-2 rounded-none flex items-center space-x-2 transition-all tracking-wider"
                    >
                        <span>"View Docs"</span>
                        <ChevronRightIcon/>
                    </button>
                </div>
            </div>
        </nav>
    }
}
