//! Vector path data: the command list an outline is made of.
//!
//! [`PathData`] is a thin fluent layer (`m`, `l`, `c`, `z`) over a kurbo
//! [`BezPath`]. Area, winding, bounds and flattening come from kurbo; the
//! `d` serialization keeps our three-decimal number format.

use std::fmt;

use glam::{DVec2, dvec2};
use kurbo::{Affine, BezPath, PathEl, Point, Shape};

use crate::types::{Rect, fmt_num};

pub(crate) fn to_point(p: DVec2) -> Point {
    Point::new(p.x, p.y)
}

pub(crate) fn from_point(p: Point) -> DVec2 {
    dvec2(p.x, p.y)
}

/// How overlapping subpaths combine when filled or used as a clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    /// Inside when the winding number is nonzero. Two clockwise subpaths
    /// that overlap stay filled in the overlap.
    #[default]
    NonZero,
    /// Inside when an odd number of edges is crossed. Overlaps become holes.
    EvenOdd,
}

impl FillRule {
    /// SVG `fill-rule` / `clip-rule` keyword
    pub fn svg_name(self) -> &'static str {
        match self {
            FillRule::NonZero => "nonzero",
            FillRule::EvenOdd => "evenodd",
        }
    }
}

/// An ordered list of path elements, possibly several subpaths.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathData {
    path: BezPath,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn m(mut self, p: DVec2) -> Self {
        self.path.move_to(to_point(p));
        self
    }

    pub fn l(mut self, p: DVec2) -> Self {
        self.path.line_to(to_point(p));
        self
    }

    pub fn c(mut self, c1: DVec2, c2: DVec2, p: DVec2) -> Self {
        self.path.curve_to(to_point(c1), to_point(c2), to_point(p));
        self
    }

    pub fn z(mut self) -> Self {
        self.path.close_path();
        self
    }

    pub fn elements(&self) -> &[PathEl] {
        self.path.elements()
    }

    pub fn as_bez_path(&self) -> &BezPath {
        &self.path
    }

    pub fn is_empty(&self) -> bool {
        self.path.elements().is_empty()
    }

    /// Append another path's subpaths after this one's.
    pub fn append(&mut self, other: &PathData) {
        for el in other.path.iter() {
            self.path.push(el);
        }
    }

    /// A copy with every point run through `transform`.
    pub fn transformed(&self, transform: Affine) -> PathData {
        let mut path = self.path.clone();
        path.apply_affine(transform);
        PathData { path }
    }

    /// Number of subpaths (each move starts one).
    pub fn subpath_count(&self) -> usize {
        self.path
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count()
    }

    /// Bounds of every point including Bézier control points.
    ///
    /// Control points of the quarter-circle corners lie inside the corner's
    /// box, so for rounded rectangles this equals the tight bounds.
    pub fn control_bounds(&self) -> Rect {
        let mut bounds = Rect::empty();
        for el in self.path.elements() {
            match *el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => bounds.expand_point(from_point(p)),
                PathEl::QuadTo(c, p) => {
                    bounds.expand_point(from_point(c));
                    bounds.expand_point(from_point(p));
                }
                PathEl::CurveTo(c1, c2, p) => {
                    bounds.expand_point(from_point(c1));
                    bounds.expand_point(from_point(c2));
                    bounds.expand_point(from_point(p));
                }
                PathEl::ClosePath => {}
            }
        }
        bounds
    }

    /// Bounds of the curve itself, curve extrema included.
    pub fn tight_bounds(&self) -> Rect {
        if self.is_empty() {
            return Rect::empty();
        }
        let bbox = self.path.bounding_box();
        Rect::new(bbox.x0, bbox.y0, bbox.x1, bbox.y1)
    }

    /// Flatten into one closed polygon per subpath. The closing edge is
    /// implied, the first point is not repeated.
    pub fn flatten(&self, tolerance: f64) -> Vec<Vec<DVec2>> {
        let mut polygons = Vec::new();
        let mut current: Vec<DVec2> = Vec::new();
        kurbo::flatten(self.path.iter(), tolerance, |el| match el {
            PathEl::MoveTo(p) => {
                if current.len() > 1 {
                    polygons.push(std::mem::take(&mut current));
                }
                current.clear();
                current.push(from_point(p));
            }
            PathEl::LineTo(p) => current.push(from_point(p)),
            PathEl::ClosePath => {
                if current.len() > 1 && current.last() == current.first() {
                    current.pop();
                }
                if current.len() > 1 {
                    polygons.push(std::mem::take(&mut current));
                }
                current.clear();
            }
            // flatten only emits moves, lines and closes
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
        });
        if current.len() > 1 {
            polygons.push(current);
        }
        polygons
    }

    /// Signed area of the closed subpaths.
    ///
    /// Positive for subpaths that run clockwise on screen (y pointing down).
    pub fn signed_area(&self) -> f64 {
        self.path.area()
    }

    /// Winding number of `p` with respect to every subpath.
    pub fn winding(&self, p: DVec2) -> i32 {
        self.path.winding(to_point(p))
    }

    pub fn contains(&self, p: DVec2, rule: FillRule) -> bool {
        let winding = self.winding(p);
        match rule {
            FillRule::NonZero => winding != 0,
            FillRule::EvenOdd => winding % 2 != 0,
        }
    }
}

impl fmt::Display for PathData {
    /// SVG path `d` syntax, e.g. `M0,0 L10,0 L10,10 Z`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pt = |p: Point| format!("{},{}", fmt_num(p.x), fmt_num(p.y));
        for (i, el) in self.path.elements().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *el {
                PathEl::MoveTo(p) => write!(f, "M{}", pt(p))?,
                PathEl::LineTo(p) => write!(f, "L{}", pt(p))?,
                PathEl::QuadTo(c, p) => write!(f, "Q{} {}", pt(c), pt(p))?,
                PathEl::CurveTo(c1, c2, p) => write!(f, "C{} {} {}", pt(c1), pt(c2), pt(p))?,
                PathEl::ClosePath => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}
