//! Outline construction: rounded body plus the rotated arrow square.
//!
//! The builder is a pure function of the view size and the configuration:
//!
//! 1. Resolve the corner radii (fully round, uniform, or per corner).
//! 2. Derive the arrow height, `sqrt(s² / 2) - r`.
//! 3. Trace the body as a rounded rectangle inset by the arrow height on the
//!    arrow's edge.
//! 4. Trace the arrow as a rounded square at the origin.
//! 5. Rotate the square 45° about its center and translate it onto the edge.
//! 6. Append the arrow after the body. There is no boolean union: both
//!    subpaths run clockwise, so a nonzero fill or clip covers both.
//!
//! The background drawable targets the whole view, `(0,0)-(w,h)`.

use glam::DVec2;

use super::geometry::{
    arrow_transform, arrow_translation, body_rect, create_arrow_square_path,
    create_rounded_rect_path,
};
use super::path::{FillRule, PathData, from_point, to_point};
use crate::config::{ArrowEdge, Axis, CornerRadii, ShapeConfig};
use crate::log::{debug, warn};
use crate::types::{Rect, Size};

/// A built outline and the values it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    /// Rounded body, clockwise.
    pub body: PathData,
    /// Arrow diamond in view coordinates, clockwise.
    pub arrow: PathData,
    /// Rectangle the body was traced in.
    pub body_rect: Rect,
    /// Center of the arrow diamond.
    pub arrow_center: DVec2,
    pub arrow_height: f64,
    /// Radii before they were fitted to the body.
    pub radii: CornerRadii,
    pub edge: ArrowEdge,
    /// Target bounds for the background drawable.
    pub bounds: Rect,
}

impl Outline {
    /// Body followed by arrow, as one path.
    pub fn path(&self) -> PathData {
        let mut path = self.body.clone();
        path.append(&self.arrow);
        path
    }

    pub fn contains(&self, p: DVec2, rule: FillRule) -> bool {
        self.path().contains(p, rule)
    }

    /// Arrow center measured along its edge (x for top/bottom, y for
    /// left/right).
    pub fn arrow_position(&self) -> f64 {
        match self.edge.axis() {
            Axis::Vertical => self.arrow_center.x,
            Axis::Horizontal => self.arrow_center.y,
        }
    }
}

/// Builds [`Outline`]s for one configuration.
#[derive(Debug, Clone, Copy)]
pub struct OutlineBuilder<'a> {
    config: &'a ShapeConfig,
}

impl<'a> OutlineBuilder<'a> {
    pub fn new(config: &'a ShapeConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, size: Size) -> Outline {
        let config = self.config;
        let arrow = &config.arrow;
        let edge = arrow.edge;

        let radii = config.resolve_radii(size.h);
        let arrow_height = config.arrow_height();
        if arrow_height < 0.0 {
            warn!(
                side_length = arrow.side_length,
                corner_radius = arrow.corner_radius,
                "arrow corner radius exceeds the half-diagonal, arrow height is negative"
            );
        }

        let body_rect = body_rect(edge, size, arrow_height);
        let body = create_rounded_rect_path(body_rect, radii);

        let square = create_arrow_square_path(arrow);
        let pivot = square.control_bounds().center();
        let translation = arrow_translation(edge, size, arrow);
        let transform = arrow_transform(pivot, translation);
        let arrow_path = square.transformed(transform);
        let arrow_center = from_point(transform * to_point(pivot));

        let outline = Outline {
            body,
            arrow: arrow_path,
            body_rect,
            arrow_center,
            arrow_height,
            radii,
            edge,
            bounds: Rect::from_size(size),
        };

        let edge_length = match edge.axis() {
            Axis::Vertical => size.w,
            Axis::Horizontal => size.h,
        };
        let half = arrow.side_length / 2.0;
        let position = outline.arrow_position();
        if position - half < 0.0 || position + half > edge_length {
            warn!(
                position,
                edge_length,
                "arrow extends past the {} edge",
                edge
            );
        }

        debug!(
            w = size.w,
            h = size.h,
            arrow_height,
            ?radii,
            "built outline: {}",
            outline.path()
        );
        outline
    }
}

/// `OutlineBuilder::new(config).build(size)`
pub fn build_outline(size: Size, config: &ShapeConfig) -> Outline {
    OutlineBuilder::new(config).build(size)
}
