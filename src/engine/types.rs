use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Root font size used for every px <-> rem conversion
pub const BASE_FONT_SIZE_PX: f64 = 16.0;

/// Display unit for the interpolated values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Px,
    #[default]
    Rem,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Rem => "rem",
        }
    }

    /// Convert a value expressed in this unit to pixels
    pub fn unit_to_px(&self, value: f64) -> f64 {
        match self {
            Unit::Px => value,
            Unit::Rem => value * BASE_FONT_SIZE_PX,
        }
    }

    /// Convert a pixel value back into this unit
    pub fn px_to_unit(&self, px: f64) -> f64 {
        match self {
            Unit::Px => px,
            Unit::Rem => px / BASE_FONT_SIZE_PX,
        }
    }

    /// Label shown next to the value fields, e.g. "(rem)"
    pub fn label(&self) -> String {
        format!("({})", self.as_str())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "px" => Ok(Unit::Px),
            "rem" => Ok(Unit::Rem),
            other => Err(Error::UnknownUnit(other.to_string())),
        }
    }
}

/// CSS property the generated declaration targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CssProperty {
    #[default]
    FontSize,
    Width,
    Height,
    Padding,
    Gap,
}

impl CssProperty {
    pub const ALL: [CssProperty; 5] = [
        CssProperty::FontSize,
        CssProperty::Width,
        CssProperty::Height,
        CssProperty::Padding,
        CssProperty::Gap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CssProperty::FontSize => "font-size",
            CssProperty::Width => "width",
            CssProperty::Height => "height",
            CssProperty::Padding => "padding",
            CssProperty::Gap => "gap",
        }
    }
}

impl fmt::Display for CssProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CssProperty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        CssProperty::ALL
            .into_iter()
            .find(|p| p.as_str() == name)
            .ok_or_else(|| Error::UnknownProperty(name.to_string()))
    }
}

/// One recomputation's worth of form state
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterpolationRequest {
    /// Viewport width (px) where the value starts growing
    pub min_width: f64,
    /// Viewport width (px) where the value stops growing
    pub max_width: f64,
    /// Value at `min_width`, in `unit`
    pub min_value: f64,
    /// Value at `max_width`, in `unit`
    pub max_value: f64,
    pub unit: Unit,
    pub property: CssProperty,
}

/// Straight line through (min_width, min_px) and (max_width, max_px), unrounded
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FluidLine {
    /// px of value per px of viewport
    pub slope: f64,
    /// px value at a zero-width viewport
    pub intercept_px: f64,
}

impl FluidLine {
    /// Value in px at the given viewport width, without clamping
    pub fn evaluate_px(&self, viewport_width: f64) -> f64 {
        self.intercept_px + self.slope * viewport_width
    }
}

/// Output of the formula engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpolationResult {
    /// Full declaration, e.g. `font-size: clamp(1rem, ..., 3rem);`
    pub expression: String,
    /// Declaration value only, e.g. `clamp(1rem, ..., 3rem)`
    pub raw_value_only: String,
    pub line: FluidLine,
    /// Lower bound in px
    pub lower_px: f64,
    /// Upper bound in px
    pub upper_px: f64,
}

impl InterpolationResult {
    /// Value in px a browser would compute at the given viewport width
    pub fn value_at(&self, viewport_width: f64) -> f64 {
        // max/min rather than f64::clamp, which panics on NaN bounds
        self.line
            .evaluate_px(viewport_width)
            .max(self.lower_px)
            .min(self.upper_px)
    }
}
