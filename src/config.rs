//! Shape configuration: corner rounding, arrow geometry and arrow edge.

use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// The side of the body the arrow protrudes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArrowEdge {
    #[default]
    Top,
    Left,
    Bottom,
    Right,
}

/// Layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl ArrowEdge {
    pub const ALL: [ArrowEdge; 4] = [ArrowEdge::Top, ArrowEdge::Left, ArrowEdge::Bottom, ArrowEdge::Right];

    /// Validate a raw edge value (`0` top, `1` left, `2` bottom, `3` right).
    pub fn from_raw(value: i64) -> Result<ArrowEdge, ConfigError> {
        match value {
            0 => Ok(ArrowEdge::Top),
            1 => Ok(ArrowEdge::Left),
            2 => Ok(ArrowEdge::Bottom),
            3 => Ok(ArrowEdge::Right),
            _ => Err(ConfigError::InvalidEdgeConfiguration { value }),
        }
    }

    pub fn raw(self) -> i64 {
        match self {
            ArrowEdge::Top => 0,
            ArrowEdge::Left => 1,
            ArrowEdge::Bottom => 2,
            ArrowEdge::Right => 3,
        }
    }

    /// The axis the arrow protrudes along. Top/Bottom arrows grow the height.
    pub fn axis(self) -> Axis {
        match self {
            ArrowEdge::Top | ArrowEdge::Bottom => Axis::Vertical,
            ArrowEdge::Left | ArrowEdge::Right => Axis::Horizontal,
        }
    }

    pub fn opposite(self) -> ArrowEdge {
        match self {
            ArrowEdge::Top => ArrowEdge::Bottom,
            ArrowEdge::Bottom => ArrowEdge::Top,
            ArrowEdge::Left => ArrowEdge::Right,
            ArrowEdge::Right => ArrowEdge::Left,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ArrowEdge::Top => "top",
            ArrowEdge::Left => "left",
            ArrowEdge::Bottom => "bottom",
            ArrowEdge::Right => "right",
        }
    }
}

impl TryFrom<i64> for ArrowEdge {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        ArrowEdge::from_raw(value)
    }
}

impl FromStr for ArrowEdge {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArrowEdge::ALL
            .into_iter()
            .find(|edge| edge.name().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

impl fmt::Display for ArrowEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-corner radii.
///
/// Corners are listed clockwise from the top-left, the order the rounded
/// rectangle is traced in.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadii {
    pub const fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    pub const fn all(r: f64) -> Self {
        Self::new(r, r, r, r)
    }

    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.as_array().iter().all(|r| *r == 0.0)
    }

    /// Clockwise from the top-left.
    pub fn as_array(&self) -> [f64; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.top_left * factor,
            self.top_right * factor,
            self.bottom_right * factor,
            self.bottom_left * factor,
        )
    }
}

/// Which rounding rule is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadiusMode {
    /// Radius is half the view height on every corner.
    FullyRound,
    /// One radius on every corner.
    Uniform,
    /// Independent corner radii.
    PerCorner,
}

/// Arrow geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArrowSpec {
    pub edge: ArrowEdge,
    /// Side of the square that becomes the arrow once rotated 45°.
    pub side_length: f64,
    /// Rounding applied to the square's corners before rotation.
    pub corner_radius: f64,
    /// Distance from the edge origin to the arrow center. Below 1 the arrow
    /// is centered on the edge.
    pub start_offset: f64,
}

impl ArrowSpec {
    /// How far the arrow tip protrudes past the body edge.
    ///
    /// Negative when the corner radius exceeds the square's half-diagonal.
    pub fn height(&self) -> f64 {
        (self.side_length * self.side_length / 2.0).sqrt() - self.corner_radius
    }

    pub fn is_auto_centered(&self) -> bool {
        self.start_offset < 1.0
    }
}

/// Everything the outline builder needs besides the view size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShapeConfig {
    pub fully_round: bool,
    pub radius: f64,
    pub corners: CornerRadii,
    pub arrow: ArrowSpec,
}

impl ShapeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fully_round(mut self, fully_round: bool) -> Self {
        self.fully_round = fully_round;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_corners(mut self, corners: CornerRadii) -> Self {
        self.corners = corners;
        self
    }

    pub fn with_arrow_edge(mut self, edge: ArrowEdge) -> Self {
        self.arrow.edge = edge;
        self
    }

    pub fn with_arrow_side_length(mut self, side_length: f64) -> Self {
        self.arrow.side_length = side_length;
        self
    }

    pub fn with_arrow_corner_radius(mut self, corner_radius: f64) -> Self {
        self.arrow.corner_radius = corner_radius;
        self
    }

    pub fn with_arrow_start_offset(mut self, start_offset: f64) -> Self {
        self.arrow.start_offset = start_offset;
        self
    }

    /// FullyRound wins over a positive uniform radius, which wins over the
    /// per-corner radii.
    pub fn radius_mode(&self) -> RadiusMode {
        if self.fully_round {
            RadiusMode::FullyRound
        } else if self.radius > 0.0 {
            RadiusMode::Uniform
        } else {
            RadiusMode::PerCorner
        }
    }

    /// Effective corner radii for a view of the given height.
    pub fn resolve_radii(&self, height: f64) -> CornerRadii {
        match self.radius_mode() {
            RadiusMode::FullyRound => CornerRadii::all(height / 2.0),
            RadiusMode::Uniform => CornerRadii::all(self.radius),
            RadiusMode::PerCorner => self.corners,
        }
    }

    pub fn arrow_height(&self) -> f64 {
        self.arrow.height()
    }
}
