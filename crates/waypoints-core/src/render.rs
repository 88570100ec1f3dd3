//! Draw commands handed to the map's drawing surface.

use crate::coord::ScreenPoint;
use kurbo::{Circle, Point};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl MarkerColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Translucent crimson used for waypoints by default.
    pub fn crimson() -> Self {
        Self::new(0x80, 0x00, 0x20, 0xc0)
    }
}

impl From<Color> for MarkerColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<MarkerColor> for Color {
    fn from(color: MarkerColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// How waypoints are painted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    /// Ring radius in pixels.
    pub radius: f64,
    /// Ring stroke width in pixels.
    pub stroke_width: f64,
    /// Stroke color.
    pub color: MarkerColor,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 8.0,
            stroke_width: 4.0,
            color: MarkerColor::crimson(),
        }
    }
}

impl MarkerStyle {
    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.color.into()
    }
}

/// One waypoint to paint: a stroked ring with a dot at its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub center: ScreenPoint,
    pub style: MarkerStyle,
}

impl DrawCommand {
    /// The ring as a kurbo circle.
    pub fn circle(&self) -> Circle {
        Circle::new(self.center.to_kurbo(), self.style.radius)
    }

    /// The center dot.
    pub fn point(&self) -> Point {
        self.center.to_kurbo()
    }
}

/// Drawing surface that can paint waypoints.
///
/// The store never renders itself; the map view implements this for
/// whatever canvas it draws on.
pub trait MarkerCanvas {
    fn draw_marker(&mut self, command: &DrawCommand);
}

impl MarkerCanvas for Vec<DrawCommand> {
    fn draw_marker(&mut self, command: &DrawCommand) {
        self.push(*command);
    }
}
