//! Interpreter that walks an expanded L-System string and draws a [`PlantSketch`].
//!
//! The entry point is [`PlantInterpreter`]. Configure it with a [`PlantConfig`], then
//! call [`PlantInterpreter::grow`] with the expanded symbol string, a starting
//! [`PlantCursor`], a random source, and the stage collaborators.

use crate::ShrubberyError;
use crate::sketch::{BranchSegment, PlantSketch, Rgb};
use crate::stage::{ControlSignal, ControlSource, StageLayout, Surface};
use crate::turtle::{PlantCursor, PlantOp};
use rand::Rng;

/// How `+` and `-` symbols steer the turtle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnStyle {
    /// Both symbols rotate by the full turn angle with a coin-flipped sign. The branch
    /// symbol does not pick the direction, the random source does; this is what gives
    /// the shrub its windblown asymmetry.
    Randomized,

    /// `+` rotates by the turn angle, `-` by its negation.
    Mirrored,
}

/// Configuration for plant interpretation.
#[derive(Clone, Debug)]
pub struct PlantConfig {
    /// Length of one `F` step, in pixels.
    pub step_length: f32,

    /// Magnitude in radians of a `+`/`-` rotation.
    pub turn_angle: f32,

    /// Heading wobble added after every drawn segment: `jitter × uniform{-1, 0, +1}`.
    pub jitter: f32,

    /// Stroke width of the trunk.
    pub initial_width: u32,

    /// Lower bound for the stroke width.
    pub width_floor: u32,

    /// How much color intensity one nesting level costs.
    pub fade: f32,

    /// Lower bound for the color intensity.
    pub intensity_floor: f32,

    /// Base stroke color before intensity scaling.
    pub base_color: Rgb,

    /// Steering behavior of `+`/`-`.
    pub turn_style: TurnStyle,
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self {
            step_length: 4.0,
            turn_angle: 170.0,
            jitter: 0.02,
            initial_width: 8,
            width_floor: 1,
            fade: 0.1,
            intensity_floor: 0.01,
            base_color: Rgb::new(78, 117, 28),
            turn_style: TurnStyle::Randomized,
        }
    }
}

/// Interprets an expanded L-System string, drawing onto a [`Surface`] as it goes.
pub struct PlantInterpreter {
    config: PlantConfig,
}

impl PlantInterpreter {
    /// Creates a new interpreter with the given configuration.
    pub fn new(config: PlantConfig) -> Self {
        Self { config }
    }

    /// Walks `symbols` once, left to right, and returns the accumulated sketch.
    ///
    /// # Drawing
    ///
    /// Every `F` emits one segment from the cursor to one step along the heading, with
    /// the cursor's current width and intensity-faded color. The segment is drawn on
    /// `surface` immediately *and* recorded in the returned sketch. After the move the
    /// heading wobbles by `jitter × uniform{-1, 0, +1}`.
    ///
    /// # Branching
    ///
    /// `[` snapshots the full cursor onto the branch stack and thins the brush; `]`
    /// restores the matching snapshot verbatim, discarding any drift that happened
    /// inside the branch. A `]` with nothing to restore fails with
    /// [`ShrubberyError::UnbalancedPop`]; the bundled grammar never produces one.
    ///
    /// # Progress and control
    ///
    /// After every symbol the progress bar is redrawn at `processed / total`. When not
    /// fast-forwarding, the frame is then presented and the control queue drained:
    /// [`Quit`](ControlSignal::Quit) abandons the pass with
    /// [`ShrubberyError::Terminated`], [`FastForward`](ControlSignal::FastForward)
    /// latches for the rest of the pass and skips the per-symbol present (drawing and
    /// recording continue unchanged).
    pub fn grow<R, S, C>(
        &self,
        symbols: &str,
        mut cursor: PlantCursor,
        layout: &StageLayout,
        rng: &mut R,
        surface: &mut S,
        controls: &mut C,
    ) -> Result<PlantSketch, ShrubberyError>
    where
        R: Rng,
        S: Surface,
        C: ControlSource,
    {
        let total = symbols.chars().count();
        let mut sketch = PlantSketch::new();
        let mut stack: Vec<PlantCursor> = Vec::new();
        let mut skip = false;

        for (index, sym) in symbols.chars().enumerate() {
            match PlantOp::from_symbol(sym) {
                PlantOp::Draw => {
                    let to = cursor.step_target(self.config.step_length);
                    let color = cursor.ink(self.config.base_color);
                    surface.draw_line(cursor.position, to, cursor.width, color);
                    sketch.add_segment(BranchSegment {
                        from: cursor.position,
                        to,
                        width: cursor.width,
                        color,
                    });
                    cursor.position = to;
                    cursor.turn(self.config.jitter * rng.random_range(-1..=1) as f32);
                }
                PlantOp::Turn(mirror_sign) => {
                    let sign = match self.config.turn_style {
                        TurnStyle::Randomized => {
                            if rng.random_bool(0.5) {
                                1.0
                            } else {
                                -1.0
                            }
                        }
                        TurnStyle::Mirrored => mirror_sign,
                    };
                    cursor.turn(self.config.turn_angle * sign);
                }
                PlantOp::Push => {
                    stack.push(cursor.clone());
                    cursor.descend(
                        self.config.width_floor,
                        self.config.fade,
                        self.config.intensity_floor,
                    );
                }
                PlantOp::Pop => {
                    cursor = stack.pop().ok_or(ShrubberyError::UnbalancedPop(index))?;
                }
                PlantOp::Ignore => {}
            }

            surface.fill_rect(layout.progress_frame, Rgb::BLACK);
            let fraction = (index + 1) as f32 / total as f32;
            surface.fill_rect(layout.progress_fill(fraction), Rgb::WHITE);

            if !skip {
                surface.present();
                while let Some(signal) = controls.poll() {
                    match signal {
                        ControlSignal::Quit => return Err(ShrubberyError::Terminated),
                        ControlSignal::FastForward => skip = true,
                    }
                }
            }
        }

        debug_assert!(
            stack.is_empty(),
            "balanced input must drain the branch stack"
        );
        Ok(sketch)
    }
}
