//! Client-side page state.
//!
//! DESIGN
//! ======
//! State types are plain structs with event methods so the interaction rules
//! can be tested without a browser.

pub mod landing;
