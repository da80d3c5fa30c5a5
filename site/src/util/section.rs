//! In-page section navigation.
//!
//! Navigation buttons scroll a named section into view. A missing target is
//! not an error: the action quietly does nothing.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

/// Page sections reachable from navigation controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Features,
    Contact,
    About,
}

impl Section {
    /// DOM element id carried by the section container.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Features => "features",
            Self::Contact => "contact",
            Self::About => "about",
        }
    }

    /// Fragment link (`#id`) for plain anchors.
    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Document abstraction for locating and scrolling section elements.
pub trait SectionHost {
    type Element;

    fn find(&self, id: &str) -> Option<Self::Element>;

    /// Smooth-scroll `element` into view.
    fn scroll_into_view(&self, element: &Self::Element);
}

/// Scroll `section` into view if `host` contains it.
///
/// Returns whether a scroll was started.
pub fn scroll_to_section<H: SectionHost>(host: &H, section: Section) -> bool {
    let Some(element) = host.find(section.id()) else {
        return false;
    };
    host.scroll_into_view(&element);
    true
}

/// The live browser document.
#[cfg(feature = "hydrate")]
pub struct BrowserDocument(web_sys::Document);

#[cfg(feature = "hydrate")]
impl BrowserDocument {
    #[must_use]
    pub fn current() -> Option<Self> {
        web_sys::window().and_then(|w| w.document()).map(Self)
    }
}

#[cfg(feature = "hydrate")]
impl SectionHost for BrowserDocument {
    type Element = web_sys::Element;

    fn find(&self, id: &str) -> Option<Self::Element> {
        self.0.get_element_by_id(id)
    }

    fn scroll_into_view(&self, element: &Self::Element) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Click handler body for navigation controls. No-op outside the browser.
pub fn scroll_to(section: Section) {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = BrowserDocument::current() else {
            return;
        };
        if !scroll_to_section(&document, section) {
            log::debug!("scroll target #{} not found", section.id());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = section;
    }
}
