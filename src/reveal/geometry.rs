use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Axis-aligned rectangle in viewport coordinates (logical pixels, y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self { top, left, bottom, right }
    }

    /// Rectangle anchored at the origin, e.g. the window's inner size.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, height, width)
    }

    pub fn grow(&self, margin: &RootMargin) -> Self {
        Self {
            top: self.top - margin.top,
            left: self.left - margin.left,
            bottom: self.bottom + margin.bottom,
            right: self.right + margin.right,
        }
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.top <= other.bottom
            && self.bottom >= other.top
            && self.left <= other.right
            && self.right >= other.left
    }
}

/// Per-edge adjustment applied to the viewport before testing for intersection.
/// Positive values grow the viewport outward, negative values shrink it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RootMargin {
    pub fn uniform(px: f64) -> Self {
        Self { top: px, right: px, bottom: px, left: px }
    }

    /// Margin on the top and bottom edges only.
    pub fn vertical(px: f64) -> Self {
        Self { top: px, right: 0.0, bottom: px, left: 0.0 }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}px {}px {}px", self.top, self.right, self.bottom, self.left)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MarginParseError {
    #[error("root margin must have 1 to 4 values, got {0}")]
    Arity(usize),
    #[error("invalid root margin value `{0}` (expected a length in px)")]
    Value(String),
}

impl FromStr for RootMargin {
    type Err = MarginParseError;

    /// Parses the CSS shorthand accepted by `IntersectionObserver.rootMargin`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(parse_length)
            .collect::<Result<Vec<f64>, _>>()?;

        match values.as_slice() {
            [all] => Ok(Self::uniform(*all)),
            [v, h] => Ok(Self { top: *v, right: *h, bottom: *v, left: *h }),
            [t, h, b] => Ok(Self { top: *t, right: *h, bottom: *b, left: *h }),
            [t, r, b, l] => Ok(Self { top: *t, right: *r, bottom: *b, left: *l }),
            other => Err(MarginParseError::Arity(other.len())),
        }
    }
}

fn parse_length(token: &str) -> Result<f64, MarginParseError> {
    let number = match token.strip_suffix("px") {
        Some(number) => number,
        None if token == "0" => token,
        None => return Err(MarginParseError::Value(token.to_string())),
    };
    number
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| MarginParseError::Value(token.to_string()))
}

/// True when `target` overlaps `viewport` after the viewport is adjusted by `margin`.
pub fn intersects(target: &Rect, viewport: &Rect, margin: &RootMargin) -> bool {
    target.overlaps(&viewport.grow(margin))
}
