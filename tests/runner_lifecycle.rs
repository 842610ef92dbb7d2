use dotfield::{
    DotField, FieldConfig, FieldRunner, InputEvent, Point, Rgba8, Surface, Viewport,
};

/// Spy surface: counts calls so the after-stop guarantees are observable.
#[derive(Default)]
struct CountingSurface {
    clears: u64,
    shapes: u64,
}

impl Surface for CountingSurface {
    fn clear(&mut self, _color: Rgba8) {
        self.clears += 1;
    }

    fn fill_circle(&mut self, _center: Point, _radius: f64, _color: Rgba8, _opacity: f64) {
        self.shapes += 1;
    }

    fn fill_rect(&mut self, _center: Point, _size: f64, _color: Rgba8, _opacity: f64) {
        self.shapes += 1;
    }
}

fn runner_at(width: f64, height: f64) -> FieldRunner {
    let field = DotField::new(
        FieldConfig::default(),
        Viewport::from_logical(width, height, 1.0),
    )
    .unwrap();
    FieldRunner::new(field)
}

#[test]
fn stop_cancels_all_future_frames_and_listeners() {
    let mut runner = runner_at(320.0, 240.0);
    let mut surface = CountingSurface::default();

    runner.start();
    runner.tick(1.0 / 60.0, &mut surface).unwrap();
    runner.tick(1.0 / 60.0, &mut surface).unwrap();
    let clears_before = surface.clears;
    let shapes_before = surface.shapes;
    let elapsed_before = runner.field().elapsed_secs();

    runner.stop();
    for _ in 0..10 {
        assert!(runner.tick(1.0 / 60.0, &mut surface).unwrap().is_none());
        runner.handle(InputEvent::PointerMoved { x: 1.0, y: 1.0 });
        runner.handle(InputEvent::Resized {
            logical_width: 64.0,
            logical_height: 64.0,
            dpr: 1.0,
        });
    }

    // Zero draw calls after stop, and the clock is frozen.
    assert_eq!(surface.clears, clears_before);
    assert_eq!(surface.shapes, shapes_before);
    assert_eq!(runner.field().elapsed_secs(), elapsed_before);
    // Ignored resize: the viewport is exactly as mounted.
    assert_eq!(runner.field().viewport().width, 320);
}

#[test]
fn pointer_events_steer_the_field_while_running() {
    let mut runner = runner_at(320.0, 240.0);
    runner.start();
    runner.handle(InputEvent::PointerMoved { x: 10.0, y: 20.0 });
    assert_eq!(runner.field().cursor().target(), Point::new(10.0, 20.0));

    // Latest value wins.
    runner.handle(InputEvent::PointerMoved { x: 30.0, y: 40.0 });
    assert_eq!(runner.field().cursor().target(), Point::new(30.0, 40.0));
}

#[test]
fn resize_applies_before_the_next_draw() {
    let mut runner = runner_at(320.0, 240.0);
    let mut surface = CountingSurface::default();
    runner.start();
    runner.handle(InputEvent::Resized {
        logical_width: 100.0,
        logical_height: 50.0,
        dpr: 2.0,
    });
    assert_eq!(runner.field().viewport().width, 200);
    assert_eq!(runner.field().viewport().height, 100);
    runner.tick(1.0 / 60.0, &mut surface).unwrap();
    assert_eq!(surface.clears, 1);
}

#[test]
fn two_runners_do_not_interfere() {
    // Cursor state is per instance, not global.
    let mut a = runner_at(320.0, 240.0);
    let mut b = runner_at(320.0, 240.0);
    a.start();
    b.start();
    a.handle(InputEvent::PointerMoved { x: 5.0, y: 5.0 });
    assert_eq!(a.field().cursor().target(), Point::new(5.0, 5.0));
    assert_eq!(b.field().cursor().target(), Point::new(160.0, 120.0));
}
