//! Interaction state for the landing page.
//!
//! DESIGN
//! ======
//! All four tracked values (viewport mode, scroll offset, pointer offset,
//! email draft) live in one plain struct owned by `LandingPage` and handed
//! to child components through a `RwSignal` context. Event handlers call the
//! `on_*` methods; render closures call the `*_transform` methods. The
//! viewport mode is the single gate consulted by both visual effects, so a
//! stale scroll or pointer value never leaks into the mobile layout.
//!
//! Every `on_*` method returns whether anything observable changed, which
//! lets callers use `RwSignal::maybe_update` and skip redundant re-renders.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use crate::util::transform::Transform;

/// Viewports narrower than this are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 992.0;
/// Fraction of the page scroll applied to the hero headline.
pub const HEADLINE_PARALLAX_FACTOR: f64 = 0.2;
/// Rotation in degrees at the container edge (offset of 1.0).
pub const PORTRAIT_TILT_DEG: f64 = 15.0;
pub const PORTRAIT_PERSPECTIVE_PX: f64 = 1000.0;
pub const PORTRAIT_TRANSITION: &str = "transform 0.2s ease-out";

/// Layout class derived from the window width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewportMode {
    #[default]
    Desktop,
    Mobile,
}

impl ViewportMode {
    #[must_use]
    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX { Self::Mobile } else { Self::Desktop }
    }

    #[must_use]
    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}

/// Client-space bounding box of an element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer position relative to an element's center, normalized so the
/// element spans `-0.5..=0.5` on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    /// Normalize client coordinates against `rect`.
    ///
    /// Returns `None` for a zero-area (or negative) rectangle. Positions
    /// outside the rectangle are not clamped.
    #[must_use]
    pub fn from_client(rect: ElementRect, client_x: f64, client_y: f64) -> Option<Self> {
        if !(rect.width > 0.0 && rect.height > 0.0) {
            return None;
        }
        Some(Self {
            x: (client_x - rect.left) / rect.width - 0.5,
            y: (client_y - rect.top) / rect.height - 0.5,
        })
    }
}

/// Ephemeral state for one mounted landing page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandingState {
    pub viewport: ViewportMode,
    pub scroll_y: f64,
    pub pointer: PointerOffset,
    pub email: String,
}

impl LandingState {
    /// Reclassify the viewport. Returns `true` only when the mode flips.
    pub fn on_resize(&mut self, width: f64) -> bool {
        let next = ViewportMode::from_width(width);
        if next == self.viewport {
            return false;
        }
        self.viewport = next;
        true
    }

    /// Record the page scroll offset. Ignored on mobile; the previous value
    /// is kept but never rendered there.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        if self.viewport.is_mobile() {
            return false;
        }
        self.scroll_y = scroll_y;
        true
    }

    /// Record the pointer offset over the portrait container. Ignored on
    /// mobile and for degenerate rectangles.
    pub fn on_pointer_move(&mut self, rect: ElementRect, client_x: f64, client_y: f64) -> bool {
        if self.viewport.is_mobile() {
            return false;
        }
        let Some(offset) = PointerOffset::from_client(rect, client_x, client_y) else {
            return false;
        };
        self.pointer = offset;
        true
    }

    pub fn on_email_input(&mut self, value: String) {
        self.email = value;
    }

    /// Parallax offset for the hero headline.
    #[must_use]
    pub fn headline_transform(&self) -> Transform {
        if self.viewport.is_mobile() {
            return Transform::Identity;
        }
        Transform::TranslateY { px: self.scroll_y * HEADLINE_PARALLAX_FACTOR }
    }

    /// 3D tilt for the about-section portrait.
    #[must_use]
    pub fn portrait_transform(&self) -> Transform {
        if self.viewport.is_mobile() {
            return Transform::Identity;
        }
        Transform::Tilt {
            perspective_px: PORTRAIT_PERSPECTIVE_PX,
            rotate_y_deg: self.pointer.x * PORTRAIT_TILT_DEG,
            rotate_x_deg: -self.pointer.y * PORTRAIT_TILT_DEG,
        }
    }
}
