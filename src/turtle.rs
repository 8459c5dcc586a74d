//! Turtle state and operations for plant interpretation.

use crate::sketch::Rgb;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The state of the plant-drawing turtle.
///
/// Tracks the pen (position, heading) together with the "brush" attributes (branch
/// width, color intensity) that fade as the turtle descends into nested branches.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlantCursor {
    /// Current position in drawing-surface coordinates.
    pub position: Vec2,

    /// Current heading angle in radians.
    pub heading: f32,

    /// Stroke width in pixels for the next drawn segment. Never drops below 1.
    pub width: u32,

    /// Brightness multiplier applied to the base color, kept within `[0.01, 1.0]`.
    pub intensity: f32,
}

impl Default for PlantCursor {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: 180.0,
            width: 8,
            intensity: 1.0,
        }
    }
}

impl PlantCursor {
    /// Target of a forward step of `length` along the current heading, snapped to the
    /// pixel grid.
    pub fn step_target(&self, length: f32) -> Vec2 {
        (self.position + Vec2::from_angle(self.heading) * length).round()
    }

    /// Rotates the heading by `angle` radians.
    pub fn turn(&mut self, angle: f32) {
        self.heading += angle;
    }

    /// Current stroke color: `base` with every channel scaled by the intensity.
    pub fn ink(&self, base: Rgb) -> Rgb {
        base.scaled(self.intensity)
    }

    /// Thins and darkens the brush by one nesting level, respecting both floors.
    pub fn descend(&mut self, width_floor: u32, fade: f32, intensity_floor: f32) {
        self.width = self.width.saturating_sub(1).max(width_floor);
        self.intensity = (self.intensity - fade).max(intensity_floor);
    }
}

/// Operations that can be performed by the plant turtle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlantOp {
    /// Draw one segment forward along the heading (`F`).
    Draw,
    /// Rotate the heading (`+`/`-`). The payload is the mirror sign; whether it is
    /// honored depends on [`TurnStyle`](crate::interpreter::TurnStyle).
    Turn(f32),
    /// Save the full cursor onto the branch stack, then thin the brush (`[`).
    Push,
    /// Restore the most recently saved cursor (`]`).
    Pop,
    /// Symbol has no drawing meaning (`X` and any other constant).
    Ignore,
}

impl PlantOp {
    /// Maps one grammar symbol to its turtle operation.
    pub fn from_symbol(sym: char) -> Self {
        match sym {
            'F' => Self::Draw,
            '+' => Self::Turn(1.0),
            '-' => Self::Turn(-1.0),
            '[' => Self::Push,
            ']' => Self::Pop,
            _ => Self::Ignore,
        }
    }
}
