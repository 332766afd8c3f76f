//! CSS Color Module Level 4 — Color values, lightness adjustment and contrast.
//! Spec: <https://www.w3.org/TR/css-color-4/>
//!
//! Parsing, HSL conversion and 8-bit output come from `csscolorparser`; the
//! WCAG math in [`contrast`] works on the unrounded channels.
use core::str::FromStr;
use csscolorparser::Color as ParsedColor;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

pub mod contrast;

pub use contrast::{contrast_ratio, contrast_ratio_of, luminance};

/// Error produced when a string cannot be interpreted as a CSS `<color>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorParseError {
    /// The input was empty or only whitespace.
    Empty,
    /// The input was not a recognized color literal.
    Invalid(String),
}

impl Display for ColorParseError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(formatter, "empty color literal"),
            Self::Invalid(literal) => write!(formatter, "unparseable color literal `{literal}`"),
        }
    }
}

impl Error for ColorParseError {}

/// An immutable sRGB color with normalized channels.
///
/// Every adjustment returns a new value.
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    inner: ParsedColor,
}

impl Color {
    /// Build a color from normalized channels; values are clamped to `[0, 1]`.
    pub fn from_rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            inner: ParsedColor::new(red as f32, green as f32, blue as f32, alpha as f32).clamp(),
        }
    }

    /// Parse a CSS color literal: named colors, hex forms and the functional
    /// notations (`rgb()`, `rgba()`, `hsl()`, ...).
    ///
    /// Spec: <https://www.w3.org/TR/css-color-4/#typedef-color>
    ///
    /// # Errors
    /// Returns [`ColorParseError`] when the literal is empty or malformed.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let parsed: ParsedColor = trimmed
            .parse()
            .map_err(|_err| ColorParseError::Invalid(trimmed.to_owned()))?;
        Ok(Self {
            inner: parsed.clamp(),
        })
    }

    #[inline]
    pub fn red(&self) -> f64 {
        f64::from(self.inner.r)
    }

    #[inline]
    pub fn green(&self) -> f64 {
        f64::from(self.inner.g)
    }

    #[inline]
    pub fn blue(&self) -> f64 {
        f64::from(self.inner.b)
    }

    #[inline]
    pub fn alpha(&self) -> f64 {
        f64::from(self.inner.a)
    }

    /// HSL lightness in `[0, 1]`.
    ///
    /// Spec: <https://www.w3.org/TR/css-color-4/#rgb-to-hsl>
    pub fn lightness(&self) -> f64 {
        let [_hue, _saturation, lightness, _alpha] = self.inner.to_hsla();
        f64::from(lightness)
    }

    /// Return a copy with the HSL lightness replaced, keeping hue, saturation
    /// and alpha. The new lightness is clamped to `[0, 1]`.
    pub fn with_lightness(&self, lightness: f64) -> Self {
        let [hue, saturation, _old, alpha] = self.inner.to_hsla();
        Self {
            inner: ParsedColor::from_hsla(hue, saturation, lightness.clamp(0.0, 1.0) as f32, alpha),
        }
    }

    /// Serialize as lowercase `#rrggbb`. Alpha is dropped.
    pub fn to_hex(&self) -> String {
        let [red, green, blue, _alpha] = self.inner.to_rgba8();
        format!("#{red:02x}{green:02x}{blue:02x}")
    }

    /// Serialize as `rgba(r, g, b, a)` with 8-bit channels.
    pub fn to_rgba_string(&self) -> String {
        let [red, green, blue, _alpha] = self.inner.to_rgba8();
        let alpha = (self.alpha() * 1000.0).round() / 1000.0;
        format!("rgba({red}, {green}, {blue}, {alpha})")
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}
