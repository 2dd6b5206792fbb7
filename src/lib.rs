//! Tooltip outlines: a rounded body with a pointer arrow on one of its edges.
//!
//! The arrow is a square with rounded corners, turned 45° and pushed onto the
//! edge so half of it sticks out. Body and arrow form one outline that a
//! background (a color or an image) is clipped to.
//!
//! ```
//! let svg = tipshape::render_svg("radius = 8; arrow-side-length = 16", 160.0, 60.0).unwrap();
//! assert!(svg.contains("<clipPath"));
//! ```

use pest_derive::Parser;

pub mod attrs;
pub mod config;
pub mod errors;
pub mod layout;
pub mod log;
pub mod parse;
pub mod render;
pub mod types;
pub mod view;

pub use attrs::{TipStyle, parse_style};
pub use config::{ArrowEdge, ArrowSpec, CornerRadii, RadiusMode, ShapeConfig};
pub use errors::{AttrError, ConfigError, SourceContext};
pub use layout::LayoutAdapter;
pub use render::{Background, Canvas, Outline, OutlineBuilder, PathData, SvgCanvas, build_outline};
pub use types::{Color, Density, Rect, Size};
pub use view::{Invalidation, Measured, TipView};

#[derive(Parser)]
#[grammar = "attrs.pest"]
pub struct AttrParser;

/// Build a view from an attribute list, size it to `width` × `height`, and
/// draw it as SVG.
pub fn render_svg(source: &str, width: f64, height: f64) -> Result<String, miette::Report> {
    let ctx = SourceContext::new("<attrs>", source);
    let style = parse_style(&ctx, Density::default())?;
    let mut view = TipView::from(style);
    view.on_size_changed(width, height);
    Ok(view.to_svg())
}
