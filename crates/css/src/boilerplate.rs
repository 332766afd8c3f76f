//! Loading of the shared boilerplate stylesheet.

use crate::options::Boilerplate;
use anyhow::Result;
use css_syntax::{Stylesheet, parse_stylesheet};
use log::debug;

/// Read and parse the boilerplate stylesheet.
///
/// # Errors
/// Returns an error if a boilerplate file cannot be read.
pub fn load_boilerplate(source: &Boilerplate) -> Result<Stylesheet> {
    let text = source.text()?;
    let sheet = parse_stylesheet(&text);
    debug!(
        "loaded wireframe boilerplate from {} ({} rules)",
        source.describe(),
        sheet.rules.len()
    );
    Ok(sheet)
}
