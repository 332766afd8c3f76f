//! Color decisions for a wireframe box: text color, border color and the
//! selector-derived grey used by `@wireframe auto`.
//! Spec: <https://www.w3.org/TR/WCAG20/#visual-audio-contrast-contrast>

use css_color::{Color, contrast_ratio_of};
use log::debug;
use std::fmt::{self, Display, Formatter};

/// WCAG AA minimum contrast for normal-size text.
pub const AA_NORMAL_TEXT: f64 = 4.5;

/// How far the border's HSL lightness moves away from the background.
pub const BORDER_LIGHTNESS_STEP: f64 = 0.3;

/// Border color used when no usable background is in play.
pub const FALLBACK_BORDER: &str = "#aaa";

/// Alpha of the selector-derived grey.
const SELECTOR_GREY_ALPHA: &str = "0.8";

/// Text color placed on a wireframe background. Only pure black or pure
/// white is ever chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    /// The CSS keyword for this color.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }

    fn to_color(self) -> Color {
        match self {
            Self::Black => Color::from_rgba(0.0, 0.0, 0.0, 1.0),
            Self::White => Color::from_rgba(1.0, 1.0, 1.0, 1.0),
        }
    }
}

impl Display for TextColor {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Background, text and border colors for one expansion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorTrio {
    /// The background literal exactly as it was given.
    pub background: String,
    pub foreground: TextColor,
    /// Border color as lowercase `#rrggbb`.
    pub border: String,
}

/// Pick the text and border colors for `background`.
///
/// Black text is used whenever it reaches [`AA_NORMAL_TEXT`] against the
/// background, and the border is then darkened; otherwise the text is white
/// and the border lightened. White contrast is not checked separately.
///
/// Returns `None` when `background` is not a color.
pub fn derive_colors(background: &str) -> Option<ColorTrio> {
    let color = match Color::parse(background) {
        Ok(color) => color,
        Err(err) => {
            debug!("wireframe: no usable background: {err}");
            return None;
        }
    };
    let lightness = color.lightness();
    let (foreground, border_lightness) =
        if contrast_ratio_of(&color, &TextColor::Black.to_color()) >= AA_NORMAL_TEXT {
            (TextColor::Black, (lightness - BORDER_LIGHTNESS_STEP).max(0.0))
        } else {
            (TextColor::White, (lightness + BORDER_LIGHTNESS_STEP).min(1.0))
        };
    Some(ColorTrio {
        background: background.to_owned(),
        foreground,
        border: color.with_lightness(border_lightness).to_hex(),
    })
}

/// 32-bit string hash over UTF-16 code units: `hash * 31 + unit`, wrapping.
pub fn selector_hash(selector: &str) -> i32 {
    selector.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// A stable translucent grey for `selector`, as `rgba(c, c, c, 0.8)` with
/// `c` in `100..=199`.
///
/// The same selector always yields the same grey; different selectors
/// usually differ but may collide.
pub fn derive_background_from_selector(selector: &str) -> String {
    let grey = 100 + selector_hash(selector).rem_euclid(100);
    format!("rgba({grey}, {grey}, {grey}, {SELECTOR_GREY_ALPHA})")
}
