//! Geometry and paint primitives shared by the builder, the layout adapter and
//! the canvas backends.
//!
//! Coordinates are pixels in a y-down space with the origin at the top-left
//! corner of the view.

use std::fmt;
use std::str::FromStr;

use glam::{DVec2, dvec2};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Width and height of a view, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub const ZERO: Size = Size { w: 0.0, h: 0.0 };

    pub fn new(w: f64, h: f64) -> Self {
        Size { w, h }
    }
}

/// Axis-aligned rectangle, `min` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    /// Rectangle from its edges. Inverted edges are swapped so that
    /// `min <= max` always holds.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Rect {
            min: dvec2(left.min(right), top.min(bottom)),
            max: dvec2(left.max(right), top.max(bottom)),
        }
    }

    /// `(0,0)-(w,h)`
    pub fn from_size(size: Size) -> Self {
        Rect::new(0.0, 0.0, size.w, size.h)
    }

    /// An empty box that absorbs the first point expanded into it.
    pub fn empty() -> Self {
        Rect {
            min: DVec2::splat(f64::INFINITY),
            max: DVec2::splat(f64::NEG_INFINITY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn expand_point(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn left(&self) -> f64 {
        self.min.x
    }

    pub fn top(&self) -> f64 {
        self.min.y
    }

    pub fn right(&self) -> f64 {
        self.max.x
    }

    pub fn bottom(&self) -> f64 {
        self.max.y
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    pub fn area(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.width() * self.height()
        }
    }

    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Converts dp to pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    pub scale: f64,
}

impl Default for Density {
    fn default() -> Self {
        Density { scale: 1.0 }
    }
}

impl Density {
    /// Create a Density with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(scale: f64) -> Result<Self, NumericError> {
        if scale.is_nan() {
            Err(NumericError::NaN)
        } else if scale.is_infinite() {
            Err(NumericError::Infinite)
        } else if scale == 0.0 {
            Err(NumericError::Zero)
        } else if scale < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Density { scale })
        }
    }

    pub fn dp_to_px(&self, dp: f64) -> f64 {
        dp * self.scale
    }
}

/// Snap a dimension to whole pixels.
///
/// Rounds half away from zero, but a nonzero value never collapses to zero:
/// it becomes one pixel with the original sign.
pub fn pixel_size(px: f64) -> f64 {
    let rounded = if px >= 0.0 {
        (px + 0.5).trunc()
    } else {
        (px - 0.5).trunc()
    };
    if rounded != 0.0 || px == 0.0 {
        rounded
    } else if px > 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// 8-bit ARGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::argb(0x00, 0x00, 0x00, 0x00);
    pub const BLACK: Color = Color::argb(0xff, 0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::argb(0xff, 0xff, 0xff, 0xff);

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color { a, r, g, b }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::argb(0xff, r, g, b)
    }

    /// Alpha as a 0..=1 opacity.
    pub fn opacity(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// `rgb(r,g,b)` without alpha, for SVG `fill`.
    pub fn to_rgb_string(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    fn named(name: &str) -> Option<Color> {
        let color = match name {
            "black" => Color::BLACK,
            "white" => Color::WHITE,
            "transparent" => Color::TRANSPARENT,
            "red" => Color::rgb(0xff, 0x00, 0x00),
            "green" => Color::rgb(0x00, 0xff, 0x00),
            "blue" => Color::rgb(0x00, 0x00, 0xff),
            "yellow" => Color::rgb(0xff, 0xff, 0x00),
            "cyan" | "aqua" => Color::rgb(0x00, 0xff, 0xff),
            "magenta" | "fuchsia" => Color::rgb(0xff, 0x00, 0xff),
            "gray" | "grey" => Color::rgb(0x88, 0x88, 0x88),
            "lightgray" | "lightgrey" => Color::rgb(0xcc, 0xcc, 0xcc),
            "darkgray" | "darkgrey" => Color::rgb(0x44, 0x44, 0x44),
            "lime" => Color::rgb(0x00, 0xff, 0x00),
            "maroon" => Color::rgb(0x80, 0x00, 0x00),
            "navy" => Color::rgb(0x00, 0x00, 0x80),
            "olive" => Color::rgb(0x80, 0x80, 0x00),
            "purple" => Color::rgb(0x80, 0x00, 0x80),
            "silver" => Color::rgb(0xc0, 0xc0, 0xc0),
            "teal" => Color::rgb(0x00, 0x80, 0x80),
            _ => return None,
        };
        Some(color)
    }
}

/// Why a color literal was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError(pub String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color `{}`", self.0)
    }
}

impl std::error::Error for ColorParseError {}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Accepts `#RGB`, `#ARGB`, `#RRGGBB`, `#AARRGGBB` and a small set of
    /// named colors (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError(s.to_string());
        let Some(hex) = s.strip_prefix('#') else {
            return Color::named(&s.to_ascii_lowercase()).ok_or_else(err);
        };
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|n| n * 0x11);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let color = match hex.len() {
            3 => Color::rgb(nibble(0).map_err(|_| err())?, nibble(1).map_err(|_| err())?, nibble(2).map_err(|_| err())?),
            4 => Color::argb(
                nibble(0).map_err(|_| err())?,
                nibble(1).map_err(|_| err())?,
                nibble(2).map_err(|_| err())?,
                nibble(3).map_err(|_| err())?,
            ),
            6 => Color::rgb(byte(0).map_err(|_| err())?, byte(2).map_err(|_| err())?, byte(4).map_err(|_| err())?),
            8 => Color::argb(
                byte(0).map_err(|_| err())?,
                byte(2).map_err(|_| err())?,
                byte(4).map_err(|_| err())?,
                byte(6).map_err(|_| err())?,
            ),
            _ => return Err(err()),
        };
        Ok(color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.a, self.r, self.g, self.b)
    }
}

/// Format a coordinate for text output: three decimals, no trailing zeros,
/// never `-0`.
pub fn fmt_num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_new_normalizes_inverted_edges() {
        let r = Rect::new(10.0, 20.0, 0.0, 5.0);
        assert_eq!(r.min, dvec2(0.0, 5.0));
        assert_eq!(r.max, dvec2(10.0, 20.0));
        assert_eq!(r.area(), 150.0);
    }

    #[test]
    fn empty_rect_absorbs_points() {
        let mut r = Rect::empty();
        assert!(r.is_empty());
        assert_eq!(r.area(), 0.0);
        r.expand_point(dvec2(3.0, 4.0));
        r.expand_point(dvec2(-1.0, 8.0));
        assert_eq!(r, Rect::new(-1.0, 4.0, 3.0, 8.0));
    }

    #[test]
    fn density_rejects_bad_scales() {
        assert_eq!(Density::try_new(f64::NAN), Err(NumericError::NaN));
        assert_eq!(Density::try_new(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(Density::try_new(0.0), Err(NumericError::Zero));
        assert_eq!(Density::try_new(-2.0), Err(NumericError::Negative));
        assert_eq!(Density::try_new(2.0).map(|d| d.dp_to_px(3.0)), Ok(6.0));
    }

    #[test]
    fn pixel_size_rounding() {
        assert_eq!(pixel_size(0.0), 0.0);
        assert_eq!(pixel_size(2.4), 2.0);
        assert_eq!(pixel_size(2.5), 3.0);
        assert_eq!(pixel_size(-2.5), -3.0);
        // tiny values keep their sign instead of vanishing
        assert_eq!(pixel_size(0.2), 1.0);
        assert_eq!(pixel_size(-0.2), -1.0);
    }

    #[test]
    fn parse_hex_colors() {
        assert_eq!("#80000000".parse(), Ok(Color::argb(0x80, 0, 0, 0)));
        assert_eq!("#ff0000".parse(), Ok(Color::rgb(0xff, 0, 0)));
        assert_eq!("#f00".parse(), Ok(Color::rgb(0xff, 0, 0)));
        assert_eq!("#8f00".parse(), Ok(Color::argb(0x88, 0xff, 0, 0)));
        assert_eq!("Navy".parse(), Ok(Color::rgb(0, 0, 0x80)));
    }

    #[test]
    fn reject_bad_colors() {
        assert!("#12345".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
        assert!("chartreuse-ish".parse::<Color>().is_err());
    }

    #[test]
    fn color_display_roundtrips_through_parse() {
        let c = Color::argb(0x80, 0x12, 0xab, 0xef);
        assert_eq!(c.to_string(), "#8012abef");
        assert_eq!(c.to_string().parse(), Ok(c));
    }

    #[test]
    fn fmt_num_trims_and_normalizes() {
        assert_eq!(fmt_num(100.0), "100");
        assert_eq!(fmt_num(14.142135623730951), "14.142");
        assert_eq!(fmt_num(-4.142135623730951), "-4.142");
        assert_eq!(fmt_num(-1e-12), "0");
        assert_eq!(fmt_num(9.999999999999998), "10");
    }
}
