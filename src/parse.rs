//! Parse pest pairs into attribute entries

use miette::SourceSpan;
use pest::Parser;
use pest::iterators::Pair;

use crate::errors::{AttrError, SourceContext};
use crate::{AttrParser, Rule};

/// Dimension unit as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// No unit. Pixels where a dimension is expected, a plain integer
    /// where a raw code is.
    Bare,
    Px,
    Dp,
}

/// A parsed attribute value, not yet checked against its attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Dimension(f64, Unit),
    /// `#...` literal, validated when the attribute is resolved
    Color(String),
    Bool(bool),
    Ident(String),
    Url(String),
}

impl AttrValue {
    /// Human-readable kind, used in type mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            AttrValue::Dimension(..) => "dimension",
            AttrValue::Color(_) => "color",
            AttrValue::Bool(_) => "boolean",
            AttrValue::Ident(_) => "identifier",
            AttrValue::Url(_) => "url",
        }
    }
}

/// One `name = value` entry with the spans of both halves.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub name: String,
    pub name_span: SourceSpan,
    pub value: AttrValue,
    pub value_span: SourceSpan,
}

/// Parse an attribute list.
pub fn parse(ctx: &SourceContext) -> Result<Vec<Attr>, AttrError> {
    let pairs = AttrParser::parse(Rule::attributes, &ctx.source).map_err(|e| {
        let span: SourceSpan = match e.location {
            pest::error::InputLocation::Pos(pos) => (pos, 0).into(),
            pest::error::InputLocation::Span((start, end)) => (start..end).into(),
        };
        AttrError::Syntax {
            message: e.variant.message().into_owned(),
            src: ctx.named_source(),
            span,
        }
    })?;

    let mut attrs = Vec::new();
    for pair in pairs {
        if pair.as_rule() != Rule::attributes {
            continue;
        }
        for inner in pair.into_inner() {
            if inner.as_rule() == Rule::attribute {
                attrs.push(parse_attribute(ctx, inner)?);
            }
        }
    }
    Ok(attrs)
}

fn span_of(pair: &Pair<Rule>) -> SourceSpan {
    let span = pair.as_span();
    (span.start()..span.end()).into()
}

fn syntax_error(ctx: &SourceContext, pair: &Pair<Rule>, message: impl Into<String>) -> AttrError {
    AttrError::Syntax {
        message: message.into(),
        src: ctx.named_source(),
        span: span_of(pair),
    }
}

fn parse_attribute(ctx: &SourceContext, pair: Pair<Rule>) -> Result<Attr, AttrError> {
    let outer = pair.clone();
    let mut inner = pair.into_inner();
    let (Some(name), Some(value)) = (inner.next(), inner.next()) else {
        return Err(syntax_error(ctx, &outer, "expected `name = value`"));
    };

    let name_span = span_of(&name);
    let value_span = span_of(&value);
    Ok(Attr {
        name: name.as_str().to_string(),
        name_span,
        value: parse_value(ctx, value)?,
        value_span,
    })
}

fn parse_value(ctx: &SourceContext, pair: Pair<Rule>) -> Result<AttrValue, AttrError> {
    let outer = pair.clone();
    let Some(inner) = pair.into_inner().next() else {
        return Err(syntax_error(ctx, &outer, "missing value"));
    };
    match inner.as_rule() {
        Rule::dimension => parse_dimension(ctx, inner),
        Rule::color => Ok(AttrValue::Color(inner.as_str().to_string())),
        Rule::boolean => Ok(AttrValue::Bool(inner.as_str() == "true")),
        Rule::ident => Ok(AttrValue::Ident(inner.as_str().to_string())),
        Rule::url => {
            let target = inner
                .clone()
                .into_inner()
                .flat_map(|string| string.into_inner())
                .find(|p| p.as_rule() == Rule::inner)
                .map(|p| p.as_str().to_string())
                .unwrap_or_default();
            Ok(AttrValue::Url(target))
        }
        other => Err(syntax_error(ctx, &inner, format!("unexpected rule in value: {:?}", other))),
    }
}

fn parse_dimension(ctx: &SourceContext, pair: Pair<Rule>) -> Result<AttrValue, AttrError> {
    let mut number = None;
    let mut unit = Unit::Bare;
    for part in pair.clone().into_inner() {
        match part.as_rule() {
            Rule::number => {
                let n = part
                    .as_str()
                    .parse::<f64>()
                    .map_err(|e| syntax_error(ctx, &part, format!("invalid number: {}", e)))?;
                number = Some(n);
            }
            Rule::unit => {
                unit = if part.as_str() == "dp" { Unit::Dp } else { Unit::Px };
            }
            _ => {}
        }
    }
    number
        .map(|n| AttrValue::Dimension(n, unit))
        .ok_or_else(|| syntax_error(ctx, &pair, "expected a number"))
}
