//! Draw-list primitives
//!
//! Pure geometric data handed to the host for rendering, in the style of a
//! CGO instruction list. The core never draws; it only produces these.

use lin_alg::f32::Vec3;

/// One line segment (a unit cell wireframe edge)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec3,
    pub end: Vec3,
}

impl Segment {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Segment { start, end }
    }
}

/// Graphics primitive for the host to render
#[derive(Debug, Clone)]
pub enum Primitive {
    /// Line segment with an RGB color
    Line { start: Vec3, end: Vec3, color: [f32; 3] },
    /// Cylinder with per-end colors
    Cylinder {
        start: Vec3,
        end: Vec3,
        radius: f32,
        color1: [f32; 3],
        color2: [f32; 3],
    },
    /// Truncated cone (arrow head when radius2 = 0)
    Cone {
        start: Vec3,
        end: Vec3,
        radius1: f32,
        radius2: f32,
        color1: [f32; 3],
        color2: [f32; 3],
    },
}
