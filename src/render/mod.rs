//! Outline geometry and painting
//!
//! This module is organized into submodules:
//! - `defaults`: Default fill and geometric constants
//! - `path`: Fluent path building over kurbo, bounds, flattening and fill-rule queries
//! - `geometry`: Rounded rectangles, the arrow square and its placement
//! - `path_builder`: Assembles body and arrow into an [`Outline`]
//! - `drawable`: Backgrounds clipped to the outline
//! - `canvas`: The clip-and-paint surface
//! - `svg`: SVG backend for the canvas

pub mod canvas;
pub mod defaults;
pub mod drawable;
pub mod geometry;
pub mod path;
pub mod path_builder;
pub mod svg;

pub use canvas::{Canvas, paint_clipped};
pub use drawable::{Background, ColorDrawable, Drawable, ImageDrawable};
pub use path::{FillRule, PathData};
pub use path_builder::{Outline, OutlineBuilder, build_outline};
pub use svg::SvgCanvas;
