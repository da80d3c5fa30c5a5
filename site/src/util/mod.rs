//! Browser-facing helpers for the landing page.
//!
//! `browser` reads window metrics and registers the resize/scroll listeners,
//! `section` scrolls navigation targets into view, and `transform` renders
//! the hero and portrait CSS transforms. Outside a hydrated build the
//! browser reads return `None` and scrolling does nothing.

pub mod browser;
pub mod section;
pub mod transform;
