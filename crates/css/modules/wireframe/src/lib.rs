//! `@wireframe [color|auto] [outline]` expansion.
//!
//! Turns the at-rule's parameters into placeholder-box declarations with a
//! readable text color and a matching border. Everything here is a pure
//! function over strings; document traversal lives in the `css` crate.

pub mod colors;
pub mod mixin;

pub use colors::{ColorTrio, TextColor, derive_background_from_selector, derive_colors};
pub use mixin::{BackgroundSpec, MixinIntent, expand, parse_intent};

/// Name of the at-rule handled by this crate, without the `@`.
pub const AT_RULE_NAME: &str = "wireframe";
