//! Stylesheet pass that expands `@wireframe` at-rules.
//!
//! The pass parses a document, prepends the shared boilerplate once, and
//! replaces each `@wireframe` with the declarations produced by
//! [`css_wireframe::expand`].

mod boilerplate;
mod options;
mod process;

pub use boilerplate::load_boilerplate;
pub use options::{BUNDLED_BOILERPLATE, Boilerplate, WireframeOptions};
pub use process::{DocumentContext, process_css, process_stylesheet};

pub use css_syntax::{Declaration, Stylesheet, parse_stylesheet};
