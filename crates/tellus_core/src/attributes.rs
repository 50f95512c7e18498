//! Visual style parameters for a shape.
//!
//! A `ShapeAttributes` bundle is assigned to a shape by its owner and handed
//! — untouched — to the shape's geometry producer each frame.  The render
//! core never inspects the fields; only producers do, when tessellating.
//!
//! Shapes hold *two* independent bundles (normal and highlight) and select
//! one per frame; see `tellus_scene::shape`.

use crate::color::Color;

/// Fill, outline and depth parameters for one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeAttributes {
    /// Fill color for the shape's interior.
    pub interior_color: Color,
    /// Color of the shape's outline.
    pub outline_color: Color,
    /// Outline width in screen pixels.
    pub outline_width: f32,
    /// Whether the interior is tessellated at all.
    pub draw_interior: bool,
    /// Whether the outline is tessellated at all.
    pub draw_outline: bool,
    /// Whether generated geometry is depth-tested against the scene.
    pub depth_test: bool,
    /// Whether generated geometry participates in lighting.
    pub enable_lighting: bool,
}

impl Default for ShapeAttributes {
    fn default() -> Self {
        Self {
            interior_color: Color::WHITE,
            outline_color: Color::BLACK,
            outline_width: 1.0,
            draw_interior: true,
            draw_outline: true,
            depth_test: true,
            enable_lighting: false,
        }
    }
}

impl ShapeAttributes {
    /// Default attributes — white interior, black 1 px outline.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interior_color(mut self, color: Color) -> Self {
        self.interior_color = color;
        self
    }

    pub fn with_outline_color(mut self, color: Color) -> Self {
        self.outline_color = color;
        self
    }

    pub fn with_outline_width(mut self, width: f32) -> Self {
        self.outline_width = width;
        self
    }

    pub fn with_interior(mut self, draw: bool) -> Self {
        self.draw_interior = draw;
        self
    }

    pub fn with_outline(mut self, draw: bool) -> Self {
        self.draw_outline = draw;
        self
    }

    pub fn with_depth_test(mut self, test: bool) -> Self {
        self.depth_test = test;
        self
    }

    pub fn with_lighting(mut self, lit: bool) -> Self {
        self.enable_lighting = lit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chains() {
        let a = ShapeAttributes::new()
            .with_interior_color(Color::BLUE)
            .with_outline_width(2.5)
            .with_outline(false);
        assert_eq!(a.interior_color, Color::BLUE);
        assert_eq!(a.outline_width, 2.5);
        assert!(!a.draw_outline);
        assert!(a.draw_interior);
    }
}
