//! Default values and geometric constants

use crate::types::Color;

/// Background when no `fill` is given: translucent black.
pub const FILL: Color = Color::argb(0x80, 0x00, 0x00, 0x00);

/// Cubic Bézier handle length for a quarter circle of radius 1.
pub const KAPPA: f64 = 0.552_284_749_830_793_4;

/// Rotation that turns the arrow square into a diamond.
pub const ARROW_ROTATION: f64 = std::f64::consts::FRAC_PI_4;
