//! Per-document driver for the wireframe pass.

use crate::boilerplate::load_boilerplate;
use crate::options::WireframeOptions;
use anyhow::Result;
use css_syntax::{Stylesheet, parse_stylesheet};
use css_wireframe::expand;
use log::{debug, info};

/// State for processing a single document.
///
/// The shared boilerplate is prepended at most once per context, before the
/// first at-rule is expanded.
pub struct DocumentContext<'opts> {
    options: &'opts WireframeOptions,
    common_emitted: bool,
}

impl<'opts> DocumentContext<'opts> {
    #[inline]
    pub const fn new(options: &'opts WireframeOptions) -> Self {
        Self {
            options,
            common_emitted: false,
        }
    }

    /// Whether the boilerplate has already been prepended.
    #[inline]
    pub const fn common_emitted(&self) -> bool {
        self.common_emitted
    }

    /// Prepend the boilerplate to `sheet` unless this context already did so
    /// or injection is disabled.
    ///
    /// # Errors
    /// Returns an error if the boilerplate cannot be loaded.
    pub fn ensure_common(&mut self, sheet: &mut Stylesheet) -> Result<()> {
        if self.common_emitted || !self.options.inject_common {
            return Ok(());
        }
        let fragment = load_boilerplate(&self.options.boilerplate)?;
        sheet.prepend(fragment);
        self.common_emitted = true;
        Ok(())
    }

    /// Expand every matching at-rule in `sheet`.
    ///
    /// Returns the number of expansions. Documents without a matching at-rule
    /// are left untouched.
    ///
    /// # Errors
    /// Returns an error if the boilerplate is needed but cannot be loaded.
    pub fn process(&mut self, sheet: &mut Stylesheet) -> Result<usize> {
        let options = self.options;
        let name = options.at_rule.as_str();
        if !sheet.contains_at_rule(name) {
            debug!("no @{name} at-rules; stylesheet left as is");
            return Ok(0);
        }
        self.ensure_common(sheet)?;
        let expanded = sheet.replace_at_rules(name, |at_rule, selector| {
            let declarations = expand(&at_rule.prelude, selector);
            debug!(
                "@{name} {} in {} -> {} declarations",
                at_rule.prelude,
                selector.unwrap_or("<root>"),
                declarations.len()
            );
            declarations
        });
        info!("expanded {expanded} @{name} at-rules");
        Ok(expanded)
    }
}

/// Run the pass over an already parsed stylesheet.
///
/// # Errors
/// Returns an error if the boilerplate is needed but cannot be loaded.
pub fn process_stylesheet(sheet: &mut Stylesheet, options: &WireframeOptions) -> Result<usize> {
    DocumentContext::new(options).process(sheet)
}

/// Parse `css`, run the pass and serialize the result.
///
/// # Errors
/// Returns an error if the boilerplate is needed but cannot be loaded.
pub fn process_css(css: &str, options: &WireframeOptions) -> Result<String> {
    let mut sheet = parse_stylesheet(css);
    process_stylesheet(&mut sheet, options)?;
    Ok(sheet.to_string())
}
