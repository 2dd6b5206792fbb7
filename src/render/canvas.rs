//! The clip-and-paint surface the background is drawn onto.

use super::drawable::Drawable;
use super::path::{FillRule, PathData};
use super::path_builder::Outline;
use crate::types::{Color, Rect};

/// A drawing surface with a clip stack.
///
/// `save` pushes the current clip, `restore` pops it. Clips intersect.
pub trait Canvas {
    fn save(&mut self);

    fn restore(&mut self);

    /// Restrict later drawing to the inside of `path`.
    fn clip_path(&mut self, path: &PathData, rule: FillRule);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw the image at `href` stretched over `rect`.
    fn draw_image(&mut self, rect: Rect, href: &str);
}

/// Save, clip to the outline, paint `drawable`, restore.
///
/// The outline is clipped with the nonzero rule so the overlap between body
/// and arrow stays inside.
pub fn paint_clipped<D: Drawable + ?Sized>(canvas: &mut dyn Canvas, outline: &Outline, drawable: &D) {
    canvas.save();
    canvas.clip_path(&outline.path(), FillRule::NonZero);
    drawable.draw(canvas);
    canvas.restore();
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::ShapeConfig;
    use crate::render::drawable::ColorDrawable;
    use crate::render::path_builder::build_outline;
    use crate::types::Size;

    /// Records canvas calls as short strings.
    #[derive(Debug, Default)]
    pub(crate) struct Recorder {
        pub ops: Vec<String>,
    }

    impl Canvas for Recorder {
        fn save(&mut self) {
            self.ops.push("save".to_string());
        }

        fn restore(&mut self) {
            self.ops.push("restore".to_string());
        }

        fn clip_path(&mut self, path: &PathData, rule: FillRule) {
            self.ops
                .push(format!("clip {} subpaths {}", path.subpath_count(), rule.svg_name()));
        }

        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.ops.push(format!(
                "fill {},{} {}x{} {}",
                rect.left(),
                rect.top(),
                rect.width(),
                rect.height(),
                color
            ));
        }

        fn draw_image(&mut self, rect: Rect, href: &str) {
            self.ops
                .push(format!("image {} {}x{}", href, rect.width(), rect.height()));
        }
    }

    #[test]
    fn paint_is_scoped_by_save_and_restore() {
        let outline = build_outline(Size::new(40.0, 30.0), &ShapeConfig::new().with_arrow_side_length(8.0));
        let mut drawable = ColorDrawable::new(Color::rgb(1, 2, 3));
        drawable.set_bounds(outline.bounds);

        let mut canvas = Recorder::default();
        paint_clipped(&mut canvas, &outline, &drawable);
        assert_eq!(
            canvas.ops,
            vec![
                "save",
                "clip 2 subpaths nonzero",
                "fill 0,0 40x30 #ff010203",
                "restore",
            ]
        );
    }
}
