//! SVG generation
//!
//! [`SvgCanvas`] records canvas calls as an SVG document. Each clip becomes a
//! `<clipPath>` in `<defs>` plus a `<g clip-path>` group that stays open until
//! the matching `restore()`.

use super::canvas::Canvas;
use super::path::{FillRule, PathData};
use crate::log::{trace, warn};
use crate::types::{Color, Rect, fmt_num};

const CLIP_ID_PREFIX: &str = "tip-clip-";

/// A [`Canvas`] that writes SVG.
#[derive(Debug, Default)]
pub struct SvgCanvas {
    defs: String,
    body: String,
    next_clip: usize,
    /// Groups opened since each unmatched `save()`.
    saves: Vec<usize>,
    /// Groups opened outside any `save()`.
    unsaved: usize,
}

impl SvgCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    fn open_groups(&self) -> usize {
        self.unsaved + self.saves.iter().sum::<usize>()
    }

    fn push_line(&mut self, line: &str) {
        let depth = self.open_groups() + 1;
        for _ in 0..depth {
            self.body.push_str("  ");
        }
        self.body.push_str(line);
        self.body.push('\n');
    }

    fn close_groups(&mut self, count: usize) {
        for _ in 0..count {
            if let Some(open) = self.saves.iter_mut().rev().find(|n| **n > 0) {
                *open -= 1;
            } else {
                self.unsaved = self.unsaved.saturating_sub(1);
            }
            self.push_line("</g>");
        }
    }

    /// Close anything still open and wrap the recording in an `<svg>` root of
    /// the given size.
    pub fn finish(mut self, width: f64, height: f64) -> String {
        let open = self.open_groups();
        self.close_groups(open);

        let (w, h) = (fmt_num(width), fmt_num(height));
        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
        ));
        if !self.defs.is_empty() {
            out.push_str("  <defs>\n");
            out.push_str(&self.defs);
            out.push_str("  </defs>\n");
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl Canvas for SvgCanvas {
    fn save(&mut self) {
        self.saves.push(0);
    }

    fn restore(&mut self) {
        match self.saves.last().copied() {
            Some(open) => {
                self.close_groups(open);
                self.saves.pop();
            }
            None => {
                warn!("restore() without a matching save(), ignored");
            }
        }
    }

    fn clip_path(&mut self, path: &PathData, rule: FillRule) {
        let id = format!("{}{}", CLIP_ID_PREFIX, self.next_clip);
        self.next_clip += 1;
        trace!(id = %id, "clip");

        self.defs.push_str(&format!("    <clipPath id=\"{id}\">\n"));
        self.defs.push_str(&format!(
            "      <path d=\"{}\" clip-rule=\"{}\"/>\n",
            path,
            rule.svg_name()
        ));
        self.defs.push_str("    </clipPath>\n");

        self.push_line(&format!(r#"<g clip-path="url(#{id})">"#));
        match self.saves.last_mut() {
            Some(open) => *open += 1,
            None => self.unsaved += 1,
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let mut line = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
            fmt_num(rect.left()),
            fmt_num(rect.top()),
            fmt_num(rect.width()),
            fmt_num(rect.height()),
            color.to_rgb_string()
        );
        if color.a != 0xff {
            line.push_str(&format!(r#" fill-opacity="{}""#, fmt_num(color.opacity())));
        }
        line.push_str("/>");
        self.push_line(&line);
    }

    fn draw_image(&mut self, rect: Rect, href: &str) {
        let line = format!(
            r#"<image href="{}" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="none"/>"#,
            escape_attr(href),
            fmt_num(rect.left()),
            fmt_num(rect.top()),
            fmt_num(rect.width()),
            fmt_num(rect.height())
        );
        self.push_line(&line);
    }
}

/// Escape a string for a double-quoted XML attribute.
fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
