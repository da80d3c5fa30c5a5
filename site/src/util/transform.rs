//! CSS transform values produced by the landing page interaction state.
//!
//! Rendering code never formats transform strings itself; it asks the state
//! for a [`Transform`] and writes [`Transform::css`] into a `style:transform`
//! binding.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

/// A linear CSS transform applied to one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    /// No transform (`none`).
    Identity,
    /// Vertical translation in pixels.
    TranslateY { px: f64 },
    /// Perspective projection followed by Y then X rotation.
    Tilt {
        perspective_px: f64,
        rotate_y_deg: f64,
        rotate_x_deg: f64,
    },
}

impl Transform {
    /// Value for the CSS `transform` property.
    #[must_use]
    pub fn css(self) -> String {
        match self {
            Self::Identity => "none".to_owned(),
            Self::TranslateY { px } => format!("translateY({}px)", css_number(px)),
            Self::Tilt { perspective_px, rotate_y_deg, rotate_x_deg } => format!(
                "perspective({}px) rotateY({}deg) rotateX({}deg)",
                css_number(perspective_px),
                css_number(rotate_y_deg),
                css_number(rotate_x_deg),
            ),
        }
    }
}

/// Folds `-0.0` into `0.0` so negated zero offsets print as `0`.
fn css_number(value: f64) -> f64 {
    value + 0.0
}
