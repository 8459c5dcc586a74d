use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An RGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scales every channel by `intensity`, truncating toward zero.
    ///
    /// `intensity` is expected in `[0.0, 1.0]`; the interpreter never passes anything
    /// outside that range.
    pub fn scaled(self, intensity: f32) -> Self {
        Self::new(
            (self.r as f32 * intensity) as u8,
            (self.g as f32 * intensity) as u8,
            (self.b as f32 * intensity) as u8,
        )
    }
}

/// An axis-aligned rectangle in drawing-surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// One drawn branch segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BranchSegment {
    pub from: Vec2,
    pub to: Vec2,

    /// Stroke width in pixels.
    pub width: u32,

    /// Stroke color, already faded for the branch's nesting depth.
    pub color: Rgb,
}

/// The complete drawn plant: every segment emitted by one interpretation pass, in draw
/// order.
///
/// This structure is the "Phenotype" grown from an L-System string. A backend that
/// missed the live pass (or rendered it fast-forwarded) can replay it verbatim, and it
/// serializes cleanly for shipping to an engine process.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlantSketch {
    pub segments: Vec<BranchSegment>,
}

impl PlantSketch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_segment(&mut self, segment: BranchSegment) {
        self.segments.push(segment);
    }

    /// Number of drawn segments. For the bundled grammar this equals the number of `F`
    /// symbols interpreted.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
