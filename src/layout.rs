//! Measurement: room for the arrow and content pushed away from it.

use crate::config::{ArrowEdge, Axis, ShapeConfig};
use crate::errors::ConfigError;
use crate::types::Size;

/// Translates the arrow edge into layout decisions for the host container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutAdapter {
    edge: ArrowEdge,
    arrow_height: f64,
}

impl LayoutAdapter {
    pub fn new(config: &ShapeConfig) -> Self {
        Self {
            edge: config.arrow.edge,
            arrow_height: config.arrow_height(),
        }
    }

    /// Like [`LayoutAdapter::new`], with the edge given as a raw value.
    pub fn with_raw_edge(config: &ShapeConfig, edge: i64) -> Result<Self, ConfigError> {
        Ok(Self {
            edge: ArrowEdge::from_raw(edge)?,
            arrow_height: config.arrow_height(),
        })
    }

    pub fn edge(&self) -> ArrowEdge {
        self.edge
    }

    /// Edge the content is aligned to: the one facing away from the arrow.
    pub fn content_alignment(&self) -> ArrowEdge {
        self.edge.opposite()
    }

    /// Grow the content's natural size by the arrow height along the arrow's
    /// axis.
    pub fn measure(&self, natural: Size) -> Size {
        match self.edge.axis() {
            Axis::Vertical => Size::new(natural.w, natural.h + self.arrow_height),
            Axis::Horizontal => Size::new(natural.w + self.arrow_height, natural.h),
        }
    }

    /// [`LayoutAdapter::measure`] for hosts that measure in whole pixels: the
    /// grown dimension is truncated.
    pub fn measure_whole_pixels(&self, natural: Size) -> Size {
        let measured = self.measure(natural);
        Size::new(measured.w.trunc(), measured.h.trunc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter(edge: ArrowEdge) -> LayoutAdapter {
        LayoutAdapter::new(
            &ShapeConfig::new()
                .with_arrow_edge(edge)
                .with_arrow_side_length(20.0)
                .with_arrow_corner_radius(2.0),
        )
    }

    #[test]
    fn alignment_is_opposite_the_arrow() {
        assert_eq!(adapter(ArrowEdge::Top).content_alignment(), ArrowEdge::Bottom);
        assert_eq!(adapter(ArrowEdge::Bottom).content_alignment(), ArrowEdge::Top);
        assert_eq!(adapter(ArrowEdge::Left).content_alignment(), ArrowEdge::Right);
        assert_eq!(adapter(ArrowEdge::Right).content_alignment(), ArrowEdge::Left);
    }

    #[test]
    fn measure_grows_the_arrow_axis() {
        let ah = 200.0f64.sqrt() - 2.0;
        let natural = Size::new(120.0, 40.0);
        assert_eq!(adapter(ArrowEdge::Top).measure(natural), Size::new(120.0, 40.0 + ah));
        assert_eq!(adapter(ArrowEdge::Bottom).measure(natural), Size::new(120.0, 40.0 + ah));
        assert_eq!(adapter(ArrowEdge::Left).measure(natural), Size::new(120.0 + ah, 40.0));
        assert_eq!(adapter(ArrowEdge::Right).measure(natural), Size::new(120.0 + ah, 40.0));
    }

    #[test]
    fn whole_pixel_measure_truncates() {
        let natural = Size::new(120.0, 40.0);
        assert_eq!(
            adapter(ArrowEdge::Top).measure_whole_pixels(natural),
            Size::new(120.0, 52.0)
        );
        assert_eq!(
            adapter(ArrowEdge::Left).measure_whole_pixels(natural),
            Size::new(132.0, 40.0)
        );
    }

    #[test]
    fn raw_edge_is_validated() {
        let config = ShapeConfig::new();
        assert_eq!(
            LayoutAdapter::with_raw_edge(&config, 4),
            Err(ConfigError::InvalidEdgeConfiguration { value: 4 })
        );
        let adapter = LayoutAdapter::with_raw_edge(&config, 3).unwrap();
        assert_eq!(adapter.edge(), ArrowEdge::Right);
    }
}
