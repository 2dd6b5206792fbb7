//! Resolve parsed attributes into a shape configuration and a background.

use std::collections::HashMap;

use miette::SourceSpan;

use crate::config::{ArrowEdge, ShapeConfig};
use crate::errors::{AttrError, EdgeAtSpan, SourceContext};
use crate::parse::{Attr, AttrValue, Unit, parse};
use crate::render::drawable::Background;
use crate::types::{Color, Density, pixel_size};

/// Every attribute the tooltip understands.
pub const ATTRIBUTES: &[&str] = &[
    "fill",
    "fully-round",
    "radius",
    "top-left-radius",
    "top-right-radius",
    "bottom-right-radius",
    "bottom-left-radius",
    "arrow-edge",
    "arrow-side-length",
    "arrow-corner-radius",
    "arrow-start-offset",
];

/// Construction-time styling: the shape plus what gets clipped to it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TipStyle {
    pub config: ShapeConfig,
    pub background: Background,
}

/// Parse and resolve an attribute list.
pub fn parse_style(ctx: &SourceContext, density: Density) -> Result<TipStyle, AttrError> {
    let attrs = parse(ctx)?;
    resolve(ctx, &attrs, density)
}

/// Resolve attributes. Missing attributes keep their defaults.
pub fn resolve(ctx: &SourceContext, attrs: &[Attr], density: Density) -> Result<TipStyle, AttrError> {
    let mut seen: HashMap<&str, SourceSpan> = HashMap::new();
    let mut style = TipStyle::default();

    for attr in attrs {
        if !ATTRIBUTES.contains(&attr.name.as_str()) {
            return Err(unknown(ctx, attr));
        }
        if let Some(first) = seen.insert(attr.name.as_str(), attr.name_span) {
            return Err(AttrError::DuplicateAttribute {
                name: attr.name.clone(),
                src: ctx.named_source(),
                first,
                second: attr.name_span,
            });
        }
        apply(ctx, &mut style, attr, density)?;
    }
    Ok(style)
}

fn apply(ctx: &SourceContext, style: &mut TipStyle, attr: &Attr, density: Density) -> Result<(), AttrError> {
    let config = &mut style.config;
    match attr.name.as_str() {
        "fill" => style.background = background(ctx, attr)?,
        "fully-round" => match attr.value {
            AttrValue::Bool(b) => config.fully_round = b,
            _ => return Err(mismatch(ctx, attr, "boolean")),
        },
        "radius" => config.radius = dimension(ctx, attr, density)?,
        "top-left-radius" => config.corners.top_left = dimension(ctx, attr, density)?,
        "top-right-radius" => config.corners.top_right = dimension(ctx, attr, density)?,
        "bottom-right-radius" => config.corners.bottom_right = dimension(ctx, attr, density)?,
        "bottom-left-radius" => config.corners.bottom_left = dimension(ctx, attr, density)?,
        "arrow-edge" => config.arrow.edge = edge(ctx, attr)?,
        "arrow-side-length" => config.arrow.side_length = dimension(ctx, attr, density)?,
        "arrow-corner-radius" => config.arrow.corner_radius = dimension(ctx, attr, density)?,
        "arrow-start-offset" => config.arrow.start_offset = dimension(ctx, attr, density)?,
        _ => return Err(unknown(ctx, attr)),
    }
    Ok(())
}

fn unknown(ctx: &SourceContext, attr: &Attr) -> AttrError {
    AttrError::UnknownAttribute {
        name: attr.name.clone(),
        src: ctx.named_source(),
        span: attr.name_span,
        suggestion: suggest(&attr.name).map(|s| format!("did you mean `{}`?", s)),
    }
}

fn mismatch(ctx: &SourceContext, attr: &Attr, expected: &'static str) -> AttrError {
    AttrError::TypeMismatch {
        name: attr.name.clone(),
        expected,
        src: ctx.named_source(),
        span: attr.value_span,
    }
}

/// Dimension in whole pixels.
fn dimension(ctx: &SourceContext, attr: &Attr, density: Density) -> Result<f64, AttrError> {
    match attr.value {
        AttrValue::Dimension(n, Unit::Bare | Unit::Px) => Ok(pixel_size(n)),
        AttrValue::Dimension(n, Unit::Dp) => Ok(pixel_size(density.dp_to_px(n))),
        _ => Err(mismatch(ctx, attr, "dimension")),
    }
}

fn background(ctx: &SourceContext, attr: &Attr) -> Result<Background, AttrError> {
    let literal = match &attr.value {
        AttrValue::Url(href) => return Ok(Background::image(href.as_str())),
        AttrValue::Color(s) | AttrValue::Ident(s) => s,
        _ => return Err(mismatch(ctx, attr, "color or url(\"...\")")),
    };
    literal
        .parse::<Color>()
        .map(Background::color)
        .map_err(|e| AttrError::InvalidColor {
            value: e.0,
            src: ctx.named_source(),
            span: attr.value_span,
        })
}

/// Edge by name or raw value. Raw values are unitless integers.
fn edge(ctx: &SourceContext, attr: &Attr) -> Result<ArrowEdge, AttrError> {
    const EXPECTED: &str = "edge (top, left, bottom, right, or 0 to 3)";
    let raw = match &attr.value {
        AttrValue::Ident(name) => {
            return name.parse().map_err(|()| mismatch(ctx, attr, EXPECTED));
        }
        AttrValue::Dimension(n, Unit::Bare) if n.fract() == 0.0 => *n as i64,
        _ => return Err(mismatch(ctx, attr, EXPECTED)),
    };
    ArrowEdge::from_raw(raw).map_err(|inner| {
        EdgeAtSpan {
            inner,
            src: ctx.named_source(),
            span: attr.value_span,
            help: Some("use top, left, bottom or right".to_string()),
        }
        .into()
    })
}

/// Known attribute that differs from `name` only in separators or case, or
/// that `name` abbreviates from either end.
fn suggest(name: &str) -> Option<&'static str> {
    let squash = |s: &str| {
        s.chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect::<String>()
    };
    let wanted = squash(name);
    if wanted.is_empty() {
        return None;
    }
    ATTRIBUTES
        .iter()
        .copied()
        .find(|known| squash(known) == wanted)
        .or_else(|| {
            ATTRIBUTES.iter().copied().find(|known| {
                let known = squash(known);
                known.starts_with(&wanted) || known.ends_with(&wanted)
            })
        })
}
