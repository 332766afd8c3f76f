//! Parameter parsing and declaration assembly for `@wireframe`.

use crate::colors::{FALLBACK_BORDER, derive_background_from_selector, derive_colors};
use css_syntax::Declaration;
use log::debug;

/// Font applied to every wireframe box.
pub const FONT_FAMILY: &str = "Comic Neue";

const PADDING: &str = "1rem";
const BORDER_PREFIX: &str = "2px solid ";

const AUTO_TOKEN: &str = "auto";
const OUTLINE_TOKEN: &str = "outline";

/// Where the background of a wireframe box comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackgroundSpec {
    /// A color literal taken verbatim from the first parameter.
    Literal(String),
    /// A grey derived from the enclosing selector (`auto`).
    FromSelector,
}

/// What the at-rule parameters ask for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MixinIntent {
    pub background: Option<BackgroundSpec>,
    pub outline: bool,
}

/// Scan the whitespace-separated parameters of `@wireframe`.
///
/// Only the first token can name a background (`auto` or a literal);
/// `outline` is recognized anywhere. Other tokens are ignored.
pub fn parse_intent(raw_params: &str) -> MixinIntent {
    let mut intent = MixinIntent::default();
    for (index, token) in raw_params.split_whitespace().enumerate() {
        if index == 0 && token == AUTO_TOKEN {
            intent.background = Some(BackgroundSpec::FromSelector);
        } else if token == OUTLINE_TOKEN {
            intent.outline = true;
        } else if index == 0 {
            intent.background = Some(BackgroundSpec::Literal(token.to_owned()));
        } else {
            debug!("wireframe: ignoring parameter `{token}`");
        }
    }
    intent
}

/// Expand one `@wireframe` at-rule into its declarations.
///
/// `enclosing_selector` is the prelude of the style rule holding the at-rule;
/// `auto` falls back to the empty selector when there is none. A background
/// that is not a color is treated exactly like no background at all.
///
/// Note: that includes `outline` padding, so `@wireframe typo outline` still
/// gets `padding: 1rem` even though a literal was given.
pub fn expand(raw_params: &str, enclosing_selector: Option<&str>) -> Vec<Declaration> {
    let intent = parse_intent(raw_params);
    let mut declarations = vec![Declaration::new("font-family", FONT_FAMILY)];

    let resolved = intent.background.map(|source| match source {
        BackgroundSpec::FromSelector => {
            derive_background_from_selector(enclosing_selector.unwrap_or_default())
        }
        BackgroundSpec::Literal(literal) => literal,
    });
    let trio = resolved.as_deref().and_then(derive_colors);

    let border = match &trio {
        Some(colors) => {
            declarations.push(Declaration::new("background-color", colors.background.as_str()));
            declarations.push(Declaration::new("color", colors.foreground.as_str()));
            declarations.push(Declaration::new("padding", PADDING));
            colors.border.clone()
        }
        None => FALLBACK_BORDER.to_owned(),
    };

    if intent.outline {
        declarations.push(Declaration::new("border", format!("{BORDER_PREFIX}{border}")));
        if trio.is_none() {
            declarations.push(Declaration::new("padding", PADDING));
        }
    }

    declarations
}
