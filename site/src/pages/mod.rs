//! Routed screens.
//!
//! `landing` is the only real page: it holds the `LandingState` signal and
//! wires window events into it. `not_found` renders for every other path.

pub mod landing;
pub mod not_found;
