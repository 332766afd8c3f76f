//! Configuration for the wireframe pass.

use anyhow::{Context as _, Result};
use css_wireframe::AT_RULE_NAME;
use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

/// Boilerplate stylesheet compiled into the crate.
pub const BUNDLED_BOILERPLATE: &str = include_str!("../assets/wireframe.css");

/// Where the shared boilerplate stylesheet is read from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Boilerplate {
    /// The stylesheet embedded in this crate.
    #[default]
    Bundled,
    /// A stylesheet at a caller-chosen path, read when first needed.
    File(PathBuf),
}

impl Boilerplate {
    /// Human-readable origin, used in logs.
    pub fn describe(&self) -> Cow<'_, str> {
        match self {
            Self::Bundled => Cow::Borrowed("<bundled>"),
            Self::File(path) => path.to_string_lossy(),
        }
    }

    /// Raw CSS text of the boilerplate.
    ///
    /// # Errors
    /// Returns an error if a [`Boilerplate::File`] cannot be read.
    pub fn text(&self) -> Result<Cow<'static, str>> {
        match self {
            Self::Bundled => Ok(Cow::Borrowed(BUNDLED_BOILERPLATE)),
            Self::File(path) => fs::read_to_string(path)
                .map(Cow::Owned)
                .with_context(|| {
                    format!("failed to read wireframe boilerplate {}", path.display())
                }),
        }
    }
}

/// Options for one run of the pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WireframeOptions {
    /// At-rule name to expand, without the `@`.
    pub at_rule: String,
    /// Source of the shared boilerplate.
    pub boilerplate: Boilerplate,
    /// Whether the boilerplate is prepended at all.
    pub inject_common: bool,
}

impl Default for WireframeOptions {
    fn default() -> Self {
        Self {
            at_rule: AT_RULE_NAME.to_owned(),
            boilerplate: Boilerplate::default(),
            inject_common: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    /// # Panics
    /// Panics if the default boilerplate is read from disk instead of the binary.
    fn default_boilerplate_needs_no_files() {
        let options = WireframeOptions::default();
        assert_eq!(options.boilerplate, Boilerplate::Bundled);
        let text = options.boilerplate.text().unwrap();
        assert!(matches!(text, Cow::Borrowed(embedded) if embedded == BUNDLED_BOILERPLATE));
        assert_eq!(options.boilerplate.describe(), "<bundled>");
    }

    #[test]
    /// # Panics
    /// Panics if an override file is not read verbatim.
    fn file_boilerplate_is_read_on_demand() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("common.css");
        fs::write(&path, ".common { margin: 0 }").unwrap();
        let source = Boilerplate::File(path);
        assert_eq!(source.text().unwrap(), ".common { margin: 0 }");
    }
}
