//! The landing page.
//!
//! ARCHITECTURE
//! ============
//! `LandingPage` owns the page's `LandingState` signal and provides it to the
//! section components. In the browser it also classifies the viewport once
//! after hydration and subscribes to window `resize` and `scroll`; both
//! listeners are removed when the page is disposed. The wiring is generic
//! over `WindowEvents` so it runs natively against a scripted window.

use leptos::prelude::*;

use crate::components::{
    about::About, cta::CallToAction, features::Features, hero::Hero, nav::Navigation,
};
use crate::state::landing::LandingState;
#[cfg(feature = "hydrate")]
use crate::util::browser::BrowserWindow;
use crate::util::browser::{Subscription, WindowEvent, WindowEvents};

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

#[component]
pub fn LandingPage() -> impl IntoView {
    let state = RwSignal::new(LandingState::default());
    provide_context(state);

    #[cfg(feature = "hydrate")]
    track_window(state);

    view! {
        <div class="min-h-screen bg-black text-white font-mono">
            <Navigation/>
            <Hero/>
            <Features/>
            <CallToAction/>
            <About/>
        </div>
    }
}

/// Listener registrations held for the lifetime of a mounted page.
pub struct WindowSubscriptions<S> {
    resize: S,
    scroll: S,
}

impl<S: Subscription> WindowSubscriptions<S> {
    pub fn remove(self) {
        self.resize.remove();
        self.scroll.remove();
    }
}

/// Reclassify the viewport from the current window width. Subscribers are
/// only notified when the mode flips.
pub fn classify_viewport<W: WindowEvents>(window: &W, state: RwSignal<LandingState>) {
    let Some(width) = window.width() else {
        return;
    };
    state.maybe_update(|s| {
        let changed = s.on_resize(width);
        #[cfg(feature = "hydrate")]
        if changed {
            log::debug!("viewport mode -> {:?} (width {width})", s.viewport);
        }
        changed
    });
}

/// Record the current window scroll offset.
pub fn record_scroll<W: WindowEvents>(window: &W, state: RwSignal<LandingState>) {
    if let Some(scroll_y) = window.scroll_y() {
        state.maybe_update(|s| s.on_scroll(scroll_y));
    }
}

/// Register the resize and scroll handlers that feed `state`.
pub fn subscribe_window<W>(window: &W, state: RwSignal<LandingState>) -> WindowSubscriptions<W::Subscription>
where
    W: WindowEvents + Clone + 'static,
{
    let resize = {
        let w = window.clone();
        window.subscribe(WindowEvent::Resize, move || classify_viewport(&w, state))
    };
    let scroll = {
        let w = window.clone();
        window.subscribe(WindowEvent::Scroll, move || record_scroll(&w, state))
    };
    WindowSubscriptions { resize, scroll }
}

/// Subscribe to window events and remove the listeners when the current
/// reactive owner is cleaned up.
pub fn watch_window<W>(window: &W, state: RwSignal<LandingState>)
where
    W: WindowEvents + Clone + 'static,
    W::Subscription: Send + Sync + 'static,
{
    let subscriptions = subscribe_window(window, state);
    on_cleanup(move || subscriptions.remove());
}

#[cfg(feature = "hydrate")]
fn track_window(state: RwSignal<LandingState>) {
    let window = BrowserWindow;

    // Runs once after hydration so the server-rendered markup matches first.
    Effect::new(move || classify_viewport(&window, state));

    watch_window(&window, state);
}
