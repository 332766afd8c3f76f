//! WCAG 2.0 relative luminance and contrast ratio.
//! Spec: <https://www.w3.org/TR/2008/REC-WCAG20-20081211/#relativeluminancedef>

use crate::{Color, ColorParseError};

/// Channel values below this are linearized by division instead of the power curve.
const LINEAR_THRESHOLD: f64 = 0.039_28;
const LINEAR_DIVISOR: f64 = 12.92;
const GAMMA: f64 = 2.4;

const RED_WEIGHT: f64 = 0.2125;
const GREEN_WEIGHT: f64 = 0.7152;
const BLUE_WEIGHT: f64 = 0.0722;

/// Offset added to both luminances before dividing.
const FLARE: f64 = 0.05;

#[inline]
fn linearize(part: f64) -> f64 {
    if part < LINEAR_THRESHOLD {
        part / LINEAR_DIVISOR
    } else {
        ((part + 0.055) / 1.055).powf(GAMMA)
    }
}

/// Relative luminance of `color`, in `[0, 1]`.
pub fn luminance(color: &Color) -> f64 {
    RED_WEIGHT.mul_add(
        linearize(color.red()),
        GREEN_WEIGHT.mul_add(linearize(color.green()), BLUE_WEIGHT * linearize(color.blue())),
    )
}

/// Contrast ratio between two parsed colors; always `>= 1`.
///
/// Spec: <https://www.w3.org/TR/2008/REC-WCAG20-20081211/#contrast-ratiodef>
pub fn contrast_ratio_of(background: &Color, foreground: &Color) -> f64 {
    let background_term = luminance(background) + FLARE;
    let foreground_term = luminance(foreground) + FLARE;
    let ratio = background_term / foreground_term;
    if foreground_term > background_term {
        return 1.0 / ratio;
    }
    ratio
}

/// Contrast ratio between two color literals.
///
/// # Errors
/// Returns [`ColorParseError`] if either literal is not a color.
pub fn contrast_ratio(background: &str, foreground: &str) -> Result<f64, ColorParseError> {
    let background_color = Color::parse(background)?;
    let foreground_color = Color::parse(foreground)?;
    Ok(contrast_ratio_of(&background_color, &foreground_color))
}
