//! Landing page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections render static copy from `content` and read the page's
//! `LandingState` from the Leptos context provided by `LandingPage`.

pub mod about;
pub mod cta;
pub mod features;
pub mod hero;
pub mod icons;
pub mod nav;
