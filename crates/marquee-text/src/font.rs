//! Font descriptors and their legacy single-string form.
//!
//! A descriptor is kept structured internally and converts to and from the
//! space-joined `"<weight> <size> <family>"` string that measurement and
//! styling APIs expect, e.g. `"bold 2rem Fira Sans"`.

use std::fmt;
use std::str::FromStr;

use crate::error::{TextError, TextResult};

/// Root font size in pixels used to resolve `rem`/`em` when nothing else is known.
pub const DEFAULT_ROOT_PX: f32 = 16.0;

/// Unit suffix of a font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontUnit {
    Px,
    Rem,
    Em,
    Pt,
}

impl FontUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            FontUnit::Px => "px",
            FontUnit::Rem => "rem",
            FontUnit::Em => "em",
            FontUnit::Pt => "pt",
        }
    }

    /// Pixels covered by one unit.
    pub fn px_per_unit(self, root_px: f32) -> f32 {
        match self {
            FontUnit::Px => 1.0,
            FontUnit::Rem | FontUnit::Em => root_px,
            FontUnit::Pt => 4.0 / 3.0,
        }
    }
}

/// A linear font size such as `16px` or `2rem`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSize {
    pub value: f32,
    pub unit: FontUnit,
}

impl FontSize {
    pub const fn new(value: f32, unit: FontUnit) -> Self {
        Self { value, unit }
    }

    pub const fn px(value: f32) -> Self {
        Self::new(value, FontUnit::Px)
    }

    pub const fn rem(value: f32) -> Self {
        Self::new(value, FontUnit::Rem)
    }

    /// The same unit, a different magnitude.
    pub fn with_value(self, value: f32) -> Self {
        Self::new(value, self.unit)
    }

    pub fn to_px(self, root_px: f32) -> f32 {
        self.value * self.unit.px_per_unit(root_px)
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

impl FromStr for FontSize {
    type Err = TextError;

    fn from_str(s: &str) -> TextResult<Self> {
        let s = s.trim();
        // "rem" before "em" so the longer suffix wins.
        let units = [FontUnit::Rem, FontUnit::Px, FontUnit::Em, FontUnit::Pt];
        let (number, unit) = units
            .iter()
            .find_map(|unit| s.strip_suffix(unit.suffix()).map(|n| (n, *unit)))
            .ok_or_else(|| {
                TextError::InvalidFontDescriptor(format!("font size '{}' has no known unit", s))
            })?;

        let value: f32 = number.parse().map_err(|_| {
            TextError::InvalidFontDescriptor(format!("font size '{}' is not a number", s))
        })?;
        if !value.is_finite() || value < 0.0 {
            return Err(TextError::InvalidFontDescriptor(format!(
                "font size '{}' must be a non-negative finite number",
                s
            )));
        }
        Ok(FontSize::new(value, unit))
    }
}

/// Resolve a CSS-style weight keyword or number to a numeric weight.
///
/// Unknown keywords resolve to 400.
pub fn numeric_weight(weight: &str) -> u16 {
    match weight.trim().to_ascii_lowercase().as_str() {
        "normal" | "regular" => 400,
        "bold" => 700,
        "lighter" => 300,
        "bolder" => 800,
        other => other
            .parse::<u16>()
            .map(|w| w.clamp(1, 1000))
            .unwrap_or(400),
    }
}

fn is_weight_token(token: &str) -> bool {
    matches!(
        token.to_ascii_lowercase().as_str(),
        "normal" | "regular" | "bold" | "lighter" | "bolder"
    ) || token.parse::<u16>().is_ok_and(|w| (1..=1000).contains(&w))
}

/// A font as `{weight, size, family}`.
///
/// ```
/// use marquee_text::{FontDescriptor, FontSize};
///
/// let font: FontDescriptor = "bold 2rem Fira Sans".parse().unwrap();
/// assert_eq!(font.weight, "bold");
/// assert_eq!(font.size, FontSize::rem(2.0));
/// assert_eq!(font.family, "Fira Sans");
/// assert_eq!(font.to_string(), "bold 2rem Fira Sans");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    pub weight: String,
    pub size: FontSize,
    pub family: String,
}

impl FontDescriptor {
    pub fn new(weight: impl Into<String>, size: FontSize, family: impl Into<String>) -> Self {
        Self {
            weight: weight.into(),
            size,
            family: family.into(),
        }
    }

    /// Copy of this descriptor at another size.
    pub fn with_size(&self, size: FontSize) -> Self {
        Self {
            weight: self.weight.clone(),
            size,
            family: self.family.clone(),
        }
    }

    pub fn numeric_weight(&self) -> u16 {
        numeric_weight(&self.weight)
    }

    /// The first family of a comma-separated family list, unquoted.
    pub fn primary_family(&self) -> &str {
        self.family
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .trim_matches(|c| c == '"' || c == '\'')
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new("normal", FontSize::px(DEFAULT_ROOT_PX), "sans-serif")
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.weight, self.size, self.family)
    }
}

impl FromStr for FontDescriptor {
    type Err = TextError;

    /// Parses `"<weight> <size> <family>"`.
    ///
    /// Computed-style strings carry extra leading tokens (style, variant), so
    /// the size is located as the first token with a unit suffix; the last
    /// weight-like token before it becomes the weight (default `normal`) and
    /// everything after it is the family.
    fn from_str(s: &str) -> TextResult<Self> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let size_index = tokens
            .iter()
            .position(|t| t.parse::<FontSize>().is_ok())
            .ok_or_else(|| {
                TextError::InvalidFontDescriptor(format!("no font size found in '{}'", s))
            })?;

        let size: FontSize = tokens[size_index].parse()?;
        let weight = tokens[..size_index]
            .iter()
            .rev()
            .find(|t| is_weight_token(t))
            .copied()
            .unwrap_or("normal");
        let family = tokens[size_index + 1..].join(" ");
        if family.is_empty() {
            return Err(TextError::InvalidFontDescriptor(format!(
                "no font family found in '{}'",
                s
            )));
        }

        Ok(FontDescriptor::new(weight, size, family))
    }
}
