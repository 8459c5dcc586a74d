//! Collaborator seams toward the platform: drawing surface, control input, frame pacing.
//!
//! The crate never opens a window itself. An engine adapter implements the three traits
//! here and hands them to [`Stage::run`], which owns the whole life of a growth session:
//! fill the sky, expand the grammar, interpret the result while drawing live, then idle
//! at a capped frame rate until the user quits.

use crate::ShrubberyError;
use crate::grammar::Ruleset;
use crate::interpreter::{PlantConfig, PlantInterpreter};
use crate::sketch::{PlantSketch, Rect, Rgb};
use crate::turtle::PlantCursor;
use glam::Vec2;
use rand::Rng;

/// A discrete signal from the user, already translated from raw platform events.
///
/// Adapters map their window-close event and the `Escape` key to [`Quit`](Self::Quit)
/// and the `Enter` key to [`FastForward`](Self::FastForward).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlSignal {
    Quit,
    FastForward,
}

/// Something that can draw the plant: a window, a framebuffer, an SVG writer.
pub trait Surface {
    /// Draws one line segment with the given stroke width and color.
    fn draw_line(&mut self, from: Vec2, to: Vec2, width: u32, color: Rgb);

    /// Fills an axis-aligned rectangle (used for the sky and the progress bar).
    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Flushes everything drawn so far to the viewer.
    fn present(&mut self);
}

/// A drained queue of user control signals.
pub trait ControlSource {
    /// Returns the next pending signal, or `None` once the queue is empty.
    fn poll(&mut self) -> Option<ControlSignal>;
}

/// Paces the idle loop once the plant is fully grown.
pub trait FrameClock {
    /// Sleeps long enough to cap the calling loop at `fps` frames per second.
    fn tick(&mut self, fps: u32);
}

/// Fixed geometry of the stage the plant grows on.
#[derive(Clone, Debug)]
pub struct StageLayout {
    /// Window caption for adapters that have one.
    pub title: &'static str,

    /// Canvas size in logical pixels.
    pub width: u32,
    pub height: u32,

    /// Background fill.
    pub sky: Rgb,

    /// Outline of the progress bar near the bottom edge.
    pub progress_frame: Rect,

    /// Where the trunk is rooted, far outside the canvas: the early, still small
    /// generations stay off-screen until growth reaches into view.
    pub seed_point: Vec2,

    /// Frame cap for the idle phase after interpretation completes.
    pub idle_fps: u32,
}

impl Default for StageLayout {
    fn default() -> Self {
        Self {
            title: "L-System Test",
            width: 800,
            height: 600,
            sky: Rgb::new(179, 229, 254),
            progress_frame: Rect::new(10, 550, 780, 20),
            seed_point: Vec2::new(1000.0, 1000.0),
            idle_fps: 30,
        }
    }
}

impl StageLayout {
    /// Full-canvas rectangle.
    pub fn canvas(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// The filled part of the progress bar at `fraction` (`0.0..=1.0`) completion.
    pub fn progress_fill(&self, fraction: f32) -> Rect {
        let frame = self.progress_frame;
        Rect::new(frame.x, frame.y, (frame.w as f32 * fraction) as u32, frame.h)
    }
}

/// Owns the three collaborators and runs a complete growth session against them.
pub struct Stage<S, C, K> {
    surface: S,
    controls: C,
    clock: K,
    layout: StageLayout,
}

impl<S: Surface, C: ControlSource, K: FrameClock> Stage<S, C, K> {
    pub fn new(surface: S, controls: C, clock: K, layout: StageLayout) -> Self {
        Self {
            surface,
            controls,
            clock,
            layout,
        }
    }

    /// Grows one plant and then idles until the user quits.
    ///
    /// Expands `seed` through `generations` rounds of `rules`, interprets the result
    /// once (drawing as it goes), then presents at [`StageLayout::idle_fps`] until a
    /// [`ControlSignal::Quit`] arrives; the finished sketch is returned at that point.
    /// A quit *during* interpretation surfaces as [`ShrubberyError::Terminated`] so the
    /// caller can release the surface immediately.
    pub fn run<R: Rng>(
        &mut self,
        rules: &Ruleset,
        seed: &str,
        generations: u32,
        config: &PlantConfig,
        rng: &mut R,
    ) -> Result<PlantSketch, ShrubberyError> {
        self.surface.fill_rect(self.layout.canvas(), self.layout.sky);

        let symbols = rules.expand(seed, generations);
        log::info!(
            "expanded {generations} generations into {} symbols",
            symbols.len()
        );

        let cursor = PlantCursor {
            position: self.layout.seed_point,
            width: config.initial_width,
            ..Default::default()
        };
        let interpreter = PlantInterpreter::new(config.clone());
        let sketch = interpreter.grow(
            &symbols,
            cursor,
            &self.layout,
            rng,
            &mut self.surface,
            &mut self.controls,
        )?;
        log::info!("grew {} branch segments", sketch.len());

        loop {
            self.clock.tick(self.layout.idle_fps);
            self.surface.present();
            while let Some(signal) = self.controls.poll() {
                // FastForward is meaningless once the pass is over.
                if signal == ControlSignal::Quit {
                    return Ok(sketch);
                }
            }
        }
    }

    /// Releases the collaborators back to the adapter, e.g. to tear the window down.
    pub fn into_parts(self) -> (S, C, K) {
        (self.surface, self.controls, self.clock)
    }
}
