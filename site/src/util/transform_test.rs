use super::*;

#[test]
fn identity_renders_none() {
    assert_eq!(Transform::Identity.css(), "none");
}

#[test]
fn translate_y_renders_pixels() {
    assert_eq!(Transform::TranslateY { px: 40.0 }.css(), "translateY(40px)");
    assert_eq!(Transform::TranslateY { px: 12.5 }.css(), "translateY(12.5px)");
    assert_ne!(Transform::TranslateY { px: 0.0 }, Transform::Identity);
}

#[test]
fn tilt_renders_perspective_then_rotations() {
    let t = Transform::Tilt { perspective_px: 1000.0, rotate_y_deg: 3.0, rotate_x_deg: -4.5 };
    assert_eq!(t.css(), "perspective(1000px) rotateY(3deg) rotateX(-4.5deg)");
}

#[test]
fn negative_zero_prints_as_zero() {
    let t = Transform::Tilt { perspective_px: 1000.0, rotate_y_deg: -0.0, rotate_x_deg: -0.0 };
    assert_eq!(t.css(), "perspective(1000px) rotateY(0deg) rotateX(0deg)");
}
