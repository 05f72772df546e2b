//! Gutter sizes and CSS-style length parsing.
//!
//! Gutters arrive either as a bare number (already pixels) or as a short
//! CSS-like string such as `"1rem"` or `"24px"`. Resolution never fails:
//! anything unrecognized falls back to [`DEFAULT_GUTTER_PX`].

use std::str::FromStr;

use thiserror::Error;

/// Root font size assumed when converting rem values to pixels.
pub const REM_BASE_PX: f64 = 16.0;

/// Fallback gutter applied when a string form cannot be parsed.
pub const DEFAULT_GUTTER_PX: f64 = 16.0;

/// Error from the strict gutter parsing path.
///
/// Public resolution via [`Gutter::resolve_px`] never surfaces this; it is
/// only returned by [`parse_css_px`] for callers that want diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GutterParseError {
    /// The string did not end in a recognized unit suffix.
    #[error("unrecognized length unit in `{0}`")]
    UnknownUnit(String),
    /// The numeric portion before the unit suffix was not a valid float.
    #[error("invalid numeric value in `{0}`")]
    InvalidNumber(String),
}

/// Spacing between columns and between stacked items within a column.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gutter {
    /// Absolute pixel value, used as-is.
    Px(f64),
    /// CSS-style length string (`"1rem"`, `"24px"`), resolved on demand.
    Css(String),
}

impl Gutter {
    /// Create a pixel gutter.
    pub fn px(value: f64) -> Self {
        Gutter::Px(value)
    }

    /// Create a gutter from a CSS-style length string.
    pub fn css(value: impl Into<String>) -> Self {
        Gutter::Css(value.into())
    }

    /// Resolve to an absolute pixel value.
    ///
    /// Numbers pass through unchanged. Strings ending in `rem` are scaled by
    /// [`REM_BASE_PX`]; strings ending in `px` are taken directly. Any other
    /// form, including an unparseable numeric portion, yields
    /// [`DEFAULT_GUTTER_PX`].
    pub fn resolve_px(&self) -> f64 {
        match self {
            Gutter::Px(value) => *value,
            Gutter::Css(value) => parse_css_px(value).unwrap_or(DEFAULT_GUTTER_PX),
        }
    }
}

impl Default for Gutter {
    fn default() -> Self {
        Gutter::Css("1rem".to_string())
    }
}

impl From<f64> for Gutter {
    fn from(value: f64) -> Self {
        Gutter::Px(value)
    }
}

impl From<&str> for Gutter {
    fn from(value: &str) -> Self {
        Gutter::Css(value.to_string())
    }
}

impl FromStr for Gutter {
    type Err = GutterParseError;

    /// Parse strictly, rejecting strings the lenient path would default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_css_px(s).map(Gutter::Px)
    }
}

/// Parse a CSS-style length string into pixels.
///
/// Recognizes `rem` (multiplied by [`REM_BASE_PX`]) and `px` suffixes.
pub fn parse_css_px(s: &str) -> Result<f64, GutterParseError> {
    let trimmed = s.trim();
    if let Some(number) = trimmed.strip_suffix("rem") {
        number
            .trim()
            .parse::<f64>()
            .map(|value| value * REM_BASE_PX)
            .map_err(|_| GutterParseError::InvalidNumber(s.to_string()))
    } else if let Some(number) = trimmed.strip_suffix("px") {
        number
            .trim()
            .parse::<f64>()
            .map_err(|_| GutterParseError::InvalidNumber(s.to_string()))
    } else {
        Err(GutterParseError::UnknownUnit(s.to_string()))
    }
}
