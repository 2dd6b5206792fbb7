//! Backgrounds that get clipped to the outline.

use enum_dispatch::enum_dispatch;

use super::canvas::Canvas;
use super::defaults;
use crate::types::{Color, Rect};

/// Something that paints itself into its bounds.
#[enum_dispatch]
pub trait Drawable {
    fn set_bounds(&mut self, bounds: Rect);

    fn bounds(&self) -> Rect;

    fn draw(&self, canvas: &mut dyn Canvas);
}

/// Solid color fill.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorDrawable {
    pub color: Color,
    bounds: Rect,
}

impl ColorDrawable {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            bounds: Rect::new(0.0, 0.0, 0.0, 0.0),
        }
    }
}

impl Drawable for ColorDrawable {
    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        if self.color.a == 0 {
            return;
        }
        canvas.fill_rect(self.bounds, self.color);
    }
}

/// An image reference stretched over its bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDrawable {
    pub href: String,
    bounds: Rect,
}

impl ImageDrawable {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            bounds: Rect::new(0.0, 0.0, 0.0, 0.0),
        }
    }
}

impl Drawable for ImageDrawable {
    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_image(self.bounds, &self.href);
    }
}

/// The view's background.
#[enum_dispatch(Drawable)]
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Color(ColorDrawable),
    Image(ImageDrawable),
}

impl Default for Background {
    /// Translucent black.
    fn default() -> Self {
        Background::Color(ColorDrawable::new(defaults::FILL))
    }
}

impl Background {
    pub fn color(color: Color) -> Self {
        Background::Color(ColorDrawable::new(color))
    }

    pub fn image(href: impl Into<String>) -> Self {
        Background::Image(ImageDrawable::new(href))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::canvas::tests::Recorder;

    #[test]
    fn default_background_is_translucent_black() {
        assert_eq!(Background::default(), Background::color(Color::argb(0x80, 0, 0, 0)));
    }

    #[test]
    fn bounds_follow_set_bounds() {
        let mut bg = Background::image("tip.png");
        let rect = Rect::new(0.0, 0.0, 120.0, 48.0);
        bg.set_bounds(rect);
        assert_eq!(bg.bounds(), rect);

        let mut canvas = Recorder::default();
        bg.draw(&mut canvas);
        assert_eq!(canvas.ops, vec!["image tip.png 120x48"]);
    }

    #[test]
    fn transparent_color_paints_nothing() {
        let mut canvas = Recorder::default();
        Background::color(Color::TRANSPARENT).draw(&mut canvas);
        assert!(canvas.ops.is_empty());
    }

    #[test]
    fn drawables_convert_into_backgrounds() {
        let bg: Background = ColorDrawable::new(Color::WHITE).into();
        assert!(matches!(bg, Background::Color(_)));
    }
}
