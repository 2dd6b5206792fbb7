//! The tooltip view: owns the configuration, the cached outline and the
//! background, and tells the host when it needs a new layout or frame.

use crate::attrs::{TipStyle, parse_style};
use crate::config::{ArrowEdge, ShapeConfig};
use crate::errors::{AttrError, ConfigError, SourceContext};
use crate::layout::LayoutAdapter;
use crate::log::{debug, trace};
use crate::render::canvas::{Canvas, paint_clipped};
use crate::render::drawable::{Background, Drawable};
use crate::render::path_builder::{Outline, build_outline};
use crate::render::svg::SvgCanvas;
use crate::types::{Density, Size};

/// Work the host owes the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Invalidation {
    pub redraw: bool,
    pub relayout: bool,
}

impl Invalidation {
    pub const NONE: Invalidation = Invalidation {
        redraw: false,
        relayout: false,
    };

    pub fn is_empty(&self) -> bool {
        !self.redraw && !self.relayout
    }
}

/// Result of [`TipView::on_measure`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measured {
    pub size: Size,
    /// Edge the content should be aligned to.
    pub alignment: ArrowEdge,
}

/// A tooltip: rounded body, arrow, and a background clipped to both.
#[derive(Debug, Clone)]
pub struct TipView {
    config: ShapeConfig,
    background: Background,
    size: Size,
    outline: Option<Outline>,
    pending: Invalidation,
}

impl Default for TipView {
    fn default() -> Self {
        TipView::new(ShapeConfig::default(), Background::default())
    }
}

impl From<TipStyle> for TipView {
    fn from(style: TipStyle) -> Self {
        TipView::new(style.config, style.background)
    }
}

impl TipView {
    pub fn new(config: ShapeConfig, background: Background) -> Self {
        Self {
            config,
            background,
            size: Size::ZERO,
            outline: None,
            pending: Invalidation::NONE,
        }
    }

    /// Build a view from an attribute list such as
    /// `radius = 8dp; arrow-edge = bottom; arrow-side-length = 12dp`.
    pub fn from_attrs(source: &str, density: Density) -> Result<Self, AttrError> {
        let ctx = SourceContext::new("<attrs>", source);
        parse_style(&ctx, density).map(TipView::from)
    }

    pub fn config(&self) -> &ShapeConfig {
        &self.config
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn arrow_edge(&self) -> ArrowEdge {
        self.config.arrow.edge
    }

    pub fn arrow_start_offset(&self) -> f64 {
        self.config.arrow.start_offset
    }

    pub fn arrow_height(&self) -> f64 {
        self.config.arrow_height()
    }

    /// Move the arrow to another edge. Changes the measured size, so the host
    /// is asked for a new layout as well as a redraw.
    pub fn set_arrow_edge(&mut self, edge: ArrowEdge) {
        if self.config.arrow.edge == edge {
            return;
        }
        debug!(from = %self.config.arrow.edge, to = %edge, "arrow edge changed");
        self.config.arrow.edge = edge;
        self.invalidate_outline();
        self.pending.relayout = true;
    }

    /// [`TipView::set_arrow_edge`] for a raw edge value (`0` top, `1` left,
    /// `2` bottom, `3` right).
    pub fn set_arrow_edge_raw(&mut self, raw: i64) -> Result<(), ConfigError> {
        let edge = ArrowEdge::from_raw(raw)?;
        self.set_arrow_edge(edge);
        Ok(())
    }

    /// Slide the arrow along its edge. Values below 1 center it.
    pub fn set_arrow_start_offset(&mut self, offset: f64) {
        if self.config.arrow.start_offset == offset {
            return;
        }
        debug!(offset, "arrow start offset changed");
        self.config.arrow.start_offset = offset;
        self.invalidate_outline();
    }

    /// Measure around content of the given natural size.
    pub fn on_measure(&self, natural: Size) -> Measured {
        let layout = LayoutAdapter::new(&self.config);
        Measured {
            size: layout.measure(natural),
            alignment: layout.content_alignment(),
        }
    }

    pub fn on_size_changed(&mut self, w: f64, h: f64) {
        let size = Size::new(w, h);
        if self.size == size {
            return;
        }
        trace!(w, h, "size changed");
        self.size = size;
        self.invalidate_outline();
    }

    /// The current outline, rebuilt first if anything it depends on changed.
    /// Rebuilding also resizes the background to the view.
    pub fn outline(&mut self) -> &Outline {
        let outline = match self.outline.take() {
            Some(outline) => outline,
            None => self.rebuild(),
        };
        self.outline.insert(outline)
    }

    pub fn is_outline_cached(&self) -> bool {
        self.outline.is_some()
    }

    /// Paint the background clipped to the outline.
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        if self.outline.is_none() {
            self.outline = Some(self.rebuild());
        }
        if let Some(outline) = &self.outline {
            paint_clipped(canvas, outline, &self.background);
        }
    }

    /// Draw into a fresh SVG document the size of the view.
    pub fn to_svg(&mut self) -> String {
        let mut canvas = SvgCanvas::new();
        self.draw(&mut canvas);
        canvas.finish(self.size.w, self.size.h)
    }

    /// Pending requests for the host; clears them.
    pub fn take_invalidation(&mut self) -> Invalidation {
        std::mem::take(&mut self.pending)
    }

    fn invalidate_outline(&mut self) {
        self.outline = None;
        self.pending.redraw = true;
    }

    fn rebuild(&mut self) -> Outline {
        let outline = build_outline(self.size, &self.config);
        self.background.set_bounds(outline.bounds);
        outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::canvas::tests::Recorder;
    use crate::types::Rect;

    fn view() -> TipView {
        let config = ShapeConfig::new()
            .with_radius(10.0)
            .with_arrow_side_length(20.0)
            .with_arrow_corner_radius(2.0);
        let mut view = TipView::new(config, Background::default());
        view.on_size_changed(200.0, 100.0);
        view.take_invalidation();
        view
    }

    #[test]
    fn edge_change_requests_layout_and_redraw() {
        let mut view = view();
        view.outline();
        view.set_arrow_edge(ArrowEdge::Right);
        assert!(!view.is_outline_cached());
        assert_eq!(
            view.take_invalidation(),
            Invalidation {
                redraw: true,
                relayout: true
            }
        );
        assert_eq!(view.take_invalidation(), Invalidation::NONE);
    }

    #[test]
    fn offset_change_requests_redraw_only() {
        let mut view = view();
        view.outline();
        view.set_arrow_start_offset(30.0);
        assert!(!view.is_outline_cached());
        assert_eq!(
            view.take_invalidation(),
            Invalidation {
                redraw: true,
                relayout: false
            }
        );
        assert!((view.outline().arrow_position() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn unchanged_values_do_not_invalidate() {
        let mut view = view();
        view.outline();
        view.set_arrow_edge(ArrowEdge::Top);
        view.set_arrow_start_offset(0.0);
        view.on_size_changed(200.0, 100.0);
        assert!(view.is_outline_cached());
        assert!(view.take_invalidation().is_empty());
    }

    #[test]
    fn raw_edge_is_validated_before_anything_changes() {
        let mut view = view();
        view.outline();
        assert_eq!(
            view.set_arrow_edge_raw(4),
            Err(ConfigError::InvalidEdgeConfiguration { value: 4 })
        );
        assert_eq!(view.arrow_edge(), ArrowEdge::Top);
        assert!(view.is_outline_cached());

        view.set_arrow_edge_raw(1).unwrap();
        assert_eq!(view.arrow_edge(), ArrowEdge::Left);
    }

    #[test]
    fn resize_rebuilds_lazily_and_resizes_background() {
        let mut view = view();
        assert!(!view.is_outline_cached());
        view.outline();
        assert_eq!(view.background().bounds(), Rect::new(0.0, 0.0, 200.0, 100.0));

        view.on_size_changed(300.0, 80.0);
        assert!(!view.is_outline_cached());
        assert!(view.take_invalidation().redraw);
        let outline = view.outline();
        assert_eq!(outline.bounds, Rect::new(0.0, 0.0, 300.0, 80.0));
        assert_eq!(view.background().bounds(), Rect::new(0.0, 0.0, 300.0, 80.0));
    }

    #[test]
    fn measure_follows_the_edge() {
        let mut view = view();
        let ah = view.arrow_height();
        let natural = Size::new(120.0, 40.0);
        assert_eq!(
            view.on_measure(natural),
            Measured {
                size: Size::new(120.0, 40.0 + ah),
                alignment: ArrowEdge::Bottom
            }
        );
        view.set_arrow_edge(ArrowEdge::Left);
        assert_eq!(
            view.on_measure(natural),
            Measured {
                size: Size::new(120.0 + ah, 40.0),
                alignment: ArrowEdge::Right
            }
        );
    }

    #[test]
    fn draw_clips_then_paints() {
        let mut view = view();
        let mut canvas = Recorder::default();
        view.draw(&mut canvas);
        assert_eq!(
            canvas.ops,
            vec![
                "save",
                "clip 2 subpaths nonzero",
                "fill 0,0 200x100 #80000000",
                "restore",
            ]
        );
        assert!(view.is_outline_cached());
    }

    #[test]
    fn from_attrs_reads_the_style() {
        let view = TipView::from_attrs("arrow-edge = bottom; radius = 4dp", Density::try_new(2.0).unwrap()).unwrap();
        assert_eq!(view.arrow_edge(), ArrowEdge::Bottom);
        assert_eq!(view.config().radius, 8.0);
    }
}
