//! Window metric reads and event subscriptions used by the landing page.
//!
//! Each metric helper returns `None` when the value is unavailable, including
//! in non-browser builds, so SSR renders the default state. Event handlers go
//! through [`WindowEvents`] so page wiring can run against a scripted window.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use crate::state::landing::ElementRect;

/// Current `window.innerWidth` in CSS pixels.
pub fn window_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Current `window.scrollY` in CSS pixels.
pub fn scroll_y() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
pub fn element_rect(element: &web_sys::Element) -> ElementRect {
    let rect = element.get_bounding_client_rect();
    ElementRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// Bounding rect of the element behind `node`, if it is mounted.
pub fn node_rect(node: leptos::prelude::NodeRef<leptos::html::Div>) -> Option<ElementRect> {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::Get;
        node.get().map(|el| element_rect(&el))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = node;
        None
    }
}

/// Window events the landing page listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowEvent {
    Resize,
    Scroll,
}

/// A live listener registration.
pub trait Subscription {
    /// Deregister the listener.
    fn remove(self);
}

/// Window metrics plus listener registration.
pub trait WindowEvents {
    type Subscription: Subscription;

    fn width(&self) -> Option<f64>;

    fn scroll_y(&self) -> Option<f64>;

    fn subscribe(&self, event: WindowEvent, handler: impl Fn() + 'static) -> Self::Subscription;
}

/// The real `window`, via Leptos window listeners.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserWindow;

#[cfg(feature = "hydrate")]
impl Subscription for leptos::prelude::WindowListenerHandle {
    fn remove(self) {
        leptos::prelude::WindowListenerHandle::remove(self);
    }
}

#[cfg(feature = "hydrate")]
impl WindowEvents for BrowserWindow {
    type Subscription = leptos::prelude::WindowListenerHandle;

    fn width(&self) -> Option<f64> {
        window_width()
    }

    fn scroll_y(&self) -> Option<f64> {
        scroll_y()
    }

    fn subscribe(&self, event: WindowEvent, handler: impl Fn() + 'static) -> Self::Subscription {
        use leptos::prelude::window_event_listener;

        match event {
            WindowEvent::Resize => window_event_listener(leptos::ev::resize, move |_| handler()),
            WindowEvent::Scroll => window_event_listener(leptos::ev::scroll, move |_| handler()),
        }
    }
}
