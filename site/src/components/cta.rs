//! Call-to-action block with the email draft field.
//!
//! The email value is held in page state only. Nothing submits it; the
//! "Book a Call" button has no handler.

use leptos::prelude::*;

use crate::content::{CTA_EMAIL_PLACEHOLDER, CTA_LEDE, CTA_TITLE};
use crate::state::landing::LandingState;
use crate::util::section::Section;

#[component]
pub fn CallToAction() -> impl IntoView {
    let state = expect_context::<RwSignal<LandingState>>();

    view! {
        <div id=Section::Contact.id() class="py-20">
            <div class="max-w-7xl mx-auto px-4">
                <div class="p-12 bg-zinc-900/50 border border-white/10">
                    <div class="max-w-2xl">
                        <h2 class="text-4xl font-bold mb-6 tracking-tighter">{CTA_TITLE}</h2>
                        <p class="text-gray-400 mb-8 tracking-wide">{CTA_LEDE}</p>
                        <div class="flex flex-col sm:flex-row gap-4">
                            <input
                                type="email"
                                placeholder=CTA_EMAIL_PLACEHOLDER
                                class="flex-1 px-6 py-4 bg-black/50 border border-white/20 focus:border-white outline-none rounded-none tracking-wider"
                                prop:value=move || state.with(|s| s.email.clone())
                                on:input=move |ev| state.update(|s| s.on_email_input(event_target_value(&ev)))
                            />
                            <button
                                type="button"
                                class="glow-effect bg-white text-black hover:bg-gray-200 px-8 py-4 rounded-none font-semibold whitespace-nowrap transition-all tracking-wider"
                            >
                                "Book a Call"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
