// tests/branch_topology.rs
use glam::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use shrubbery::{
    ControlSignal, ControlSource, PlantConfig, PlantCursor, PlantInterpreter, PlantSketch, Rect,
    Rgb, ShrubberyError, StageLayout, Surface, TurnStyle,
};

#[derive(Default, Debug)]
struct RecordingSurface {
    lines: Vec<(Vec2, Vec2, u32, Rgb)>,
}

impl Surface for RecordingSurface {
    fn draw_line(&mut self, from: Vec2, to: Vec2, width: u32, color: Rgb) {
        self.lines.push((from, to, width, color));
    }

    fn fill_rect(&mut self, _rect: Rect, _color: Rgb) {}

    fn present(&mut self) {}
}

struct SilentControls;

impl ControlSource for SilentControls {
    fn poll(&mut self) -> Option<ControlSignal> {
        None
    }
}

fn quiet_config() -> PlantConfig {
    // No wobble, so segment geometry is exactly predictable.
    PlantConfig {
        jitter: 0.0,
        ..Default::default()
    }
}

fn grow(
    symbols: &str,
    config: PlantConfig,
) -> Result<(RecordingSurface, PlantSketch), ShrubberyError> {
    let mut surface = RecordingSurface::default();
    let mut controls = SilentControls;
    let mut rng = StdRng::seed_from_u64(7);
    let cursor = PlantCursor {
        position: Vec2::new(100.0, 100.0),
        ..Default::default()
    };
    let sketch = PlantInterpreter::new(config).grow(
        symbols,
        cursor,
        &StageLayout::default(),
        &mut rng,
        &mut surface,
        &mut controls,
    )?;
    Ok((surface, sketch))
}

#[test]
fn bracket_restores_the_enclosing_scope() {
    let (surface, sketch) = grow("F[F]F", quiet_config()).unwrap();
    assert_eq!(sketch.len(), 3);
    assert_eq!(surface.lines.len(), 3);

    let trunk = sketch.segments[0];
    let twig = sketch.segments[1];
    let resumed = sketch.segments[2];

    // The branch picks up where the trunk stopped, one level thinner and darker.
    assert_eq!(twig.from, trunk.to);
    assert_eq!(twig.width, trunk.width - 1);
    assert_eq!(twig.color, Rgb::new(78, 117, 28).scaled(0.9));

    // The pop discards the branch's drift: the third segment starts where the trunk
    // stopped, at full width and full brightness again.
    assert_eq!(resumed.from, trunk.to);
    assert_eq!(resumed.width, trunk.width);
    assert_eq!(resumed.color, trunk.color);
}

#[test]
fn floors_hold_for_deep_nesting() {
    // Twelve nested pushes drive the brush well past both floors before drawing.
    let symbols = format!("{}F{}", "[".repeat(12), "]".repeat(12));
    let (_, sketch) = grow(&symbols, quiet_config()).unwrap();

    assert_eq!(sketch.len(), 1);
    assert_eq!(sketch.segments[0].width, 1);
    assert_eq!(sketch.segments[0].color, Rgb::new(78, 117, 28).scaled(0.01));
}

#[test]
fn unmatched_pop_is_fatal() {
    let err = grow("F]", quiet_config()).unwrap_err();
    assert!(matches!(err, ShrubberyError::UnbalancedPop(1)));
}

#[test]
fn mirrored_turns_are_inverses() {
    let config = PlantConfig {
        jitter: 0.0,
        turn_style: TurnStyle::Mirrored,
        ..Default::default()
    };
    let (_, right) = grow("F+F", config.clone()).unwrap();
    let (_, left) = grow("F-F", config).unwrap();

    // Identical trunks, opposite rotations afterwards.
    assert_eq!(right.segments[0], left.segments[0]);
    let from = right.segments[0].to;
    let target = |heading: f32| (from + Vec2::from_angle(heading) * 4.0).round();
    assert_eq!(right.segments[1].to, target(180.0 + 170.0));
    assert_eq!(left.segments[1].to, target(180.0 - 170.0));
}

#[test]
fn randomized_turns_ignore_the_symbol() {
    // Under the same seed, `+` and `-` make the same coin flips: the symbol does not
    // pick the turn direction, the random source does.
    let (_, plus) = grow("F+F+F", quiet_config()).unwrap();
    let (_, minus) = grow("F-F-F", quiet_config()).unwrap();
    assert_eq!(plus, minus);
}
