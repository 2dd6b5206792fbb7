//! Geometry functions: rounded rectangles, the arrow diamond and its placement

use glam::{DVec2, dvec2};
use kurbo::{Affine, Vec2};

use super::defaults::{ARROW_ROTATION, KAPPA};
use super::path::PathData;
use crate::config::{ArrowEdge, ArrowSpec, CornerRadii};
use crate::types::{Rect, Size};

/// Shrink radii that don't fit their rectangle.
///
/// Negative radii count as zero. When two adjacent radii add up to more than
/// the side they share, every radius is scaled by the same factor so the
/// tightest side fits exactly.
pub fn fit_radii(rect: Rect, radii: CornerRadii) -> CornerRadii {
    let radii = CornerRadii::new(
        radii.top_left.max(0.0),
        radii.top_right.max(0.0),
        radii.bottom_right.max(0.0),
        radii.bottom_left.max(0.0),
    );
    let (w, h) = (rect.width(), rect.height());
    let sides = [
        (w, radii.top_left + radii.top_right),
        (h, radii.top_right + radii.bottom_right),
        (w, radii.bottom_right + radii.bottom_left),
        (h, radii.bottom_left + radii.top_left),
    ];
    let scale = sides
        .iter()
        .filter(|(_, sum)| *sum > 0.0)
        .map(|(len, sum)| len / sum)
        .fold(1.0f64, f64::min);
    if scale < 1.0 { radii.scaled(scale.max(0.0)) } else { radii }
}

/// Create a rounded rectangle traced clockwise on screen, starting at the end
/// of the top-left corner.
///
/// Each corner is one cubic quarter circle; corners with a zero radius are
/// sharp and emit no curve.
pub fn create_rounded_rect_path(rect: Rect, radii: CornerRadii) -> PathData {
    let r = fit_radii(rect, radii);
    let (x1, y1, x2, y2) = (rect.left(), rect.top(), rect.right(), rect.bottom());

    let mut path = PathData::new()
        .m(dvec2(x1 + r.top_left, y1))
        .l(dvec2(x2 - r.top_right, y1));
    if r.top_right > 0.0 {
        let k = r.top_right * KAPPA;
        path = path.c(
            dvec2(x2 - r.top_right + k, y1),
            dvec2(x2, y1 + r.top_right - k),
            dvec2(x2, y1 + r.top_right),
        );
    }
    path = path.l(dvec2(x2, y2 - r.bottom_right));
    if r.bottom_right > 0.0 {
        let k = r.bottom_right * KAPPA;
        path = path.c(
            dvec2(x2, y2 - r.bottom_right + k),
            dvec2(x2 - r.bottom_right + k, y2),
            dvec2(x2 - r.bottom_right, y2),
        );
    }
    path = path.l(dvec2(x1 + r.bottom_left, y2));
    if r.bottom_left > 0.0 {
        let k = r.bottom_left * KAPPA;
        path = path.c(
            dvec2(x1 + r.bottom_left - k, y2),
            dvec2(x1, y2 - r.bottom_left + k),
            dvec2(x1, y2 - r.bottom_left),
        );
    }
    path = path.l(dvec2(x1, y1 + r.top_left));
    if r.top_left > 0.0 {
        let k = r.top_left * KAPPA;
        path = path.c(
            dvec2(x1, y1 + r.top_left - k),
            dvec2(x1 + r.top_left - k, y1),
            dvec2(x1 + r.top_left, y1),
        );
    }
    path.z()
}

/// The part of the view left for the body once the arrow's protrusion is
/// reserved on its edge.
pub fn body_rect(edge: ArrowEdge, size: Size, arrow_height: f64) -> Rect {
    match edge {
        ArrowEdge::Top => Rect::new(0.0, arrow_height, size.w, size.h),
        ArrowEdge::Bottom => Rect::new(0.0, 0.0, size.w, size.h - arrow_height),
        ArrowEdge::Left => Rect::new(arrow_height, 0.0, size.w, size.h),
        ArrowEdge::Right => Rect::new(0.0, 0.0, size.w - arrow_height, size.h),
    }
}

/// The arrow before placement: a square at the origin with rounded corners.
pub fn create_arrow_square_path(arrow: &ArrowSpec) -> PathData {
    create_rounded_rect_path(
        Rect::new(0.0, 0.0, arrow.side_length, arrow.side_length),
        CornerRadii::all(arrow.corner_radius),
    )
}

/// Where the arrow square starts along its edge.
///
/// Offsets below 1 center the arrow; otherwise the offset names the arrow's
/// center.
pub fn along_edge_offset(edge_length: f64, arrow: &ArrowSpec) -> f64 {
    if arrow.is_auto_centered() {
        (edge_length - arrow.side_length) / 2.0
    } else {
        arrow.start_offset - arrow.side_length / 2.0
    }
}

/// Translation applied after the rotation, per edge.
pub fn arrow_translation(edge: ArrowEdge, size: Size, arrow: &ArrowSpec) -> DVec2 {
    let s = arrow.side_length;
    let r = arrow.corner_radius;
    match edge {
        ArrowEdge::Top => dvec2(along_edge_offset(size.w, arrow), r),
        ArrowEdge::Bottom => dvec2(along_edge_offset(size.w, arrow), size.h - s - r),
        ArrowEdge::Left => dvec2(r, along_edge_offset(size.h, arrow)),
        ArrowEdge::Right => dvec2(size.w - s - r, along_edge_offset(size.h, arrow)),
    }
}

/// Rotate 45° about `pivot`, then translate.
pub fn arrow_transform(pivot: DVec2, translation: DVec2) -> Affine {
    let pivot = Vec2::new(pivot.x, pivot.y);
    Affine::translate((translation.x, translation.y))
        * Affine::translate(pivot)
        * Affine::rotate(ARROW_ROTATION)
        * Affine::translate(-pivot)
}
