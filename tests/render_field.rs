use dotfield::{
    DotField, FieldConfig, Point, Rgba8, Surface, Viewport, render_frame, render_frame_rgba,
};

/// Test double for the drawing seam: records every call instead of
/// rasterizing.
#[derive(Default)]
struct RecordingSurface {
    clears: Vec<Rgba8>,
    circles: Vec<(Point, f64, Rgba8, f64)>,
    rects: usize,
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Rgba8) {
        self.clears.push(color);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8, opacity: f64) {
        self.circles.push((center, radius, color, opacity));
    }

    fn fill_rect(&mut self, _center: Point, _size: f64, _color: Rgba8, _opacity: f64) {
        self.rects += 1;
    }
}

fn scenario_config() -> FieldConfig {
    let mut cfg = FieldConfig::default();
    cfg.grid_size = 50;
    cfg.dot_color = Rgba8::parse_hex("#22d3ee").unwrap();
    cfg.bg_color = Rgba8::parse_hex("#09090b").unwrap();
    cfg
}

#[test]
fn one_frame_clears_bg_and_draws_dots_in_dot_color() {
    let vp = Viewport::from_logical(800.0, 600.0, 1.0);
    let mut field = DotField::new(scenario_config(), vp).unwrap();
    let mut surface = RecordingSurface::default();

    let drawn = render_frame(&mut field, 1.0 / 60.0, &mut surface).unwrap();

    assert_eq!(surface.clears, vec![Rgba8::rgb(0x09, 0x09, 0x0b)]);
    assert!(drawn > 0);
    assert_eq!(surface.circles.len(), drawn);
    for (_, radius, color, opacity) in &surface.circles {
        assert_eq!((color.r, color.g, color.b), (0x22, 0xd3, 0xee));
        assert!(*radius > 0.0);
        assert!(*opacity > 0.0 && *opacity <= field.config().max_opacity);
    }
}

#[test]
fn rasterized_frame_has_bg_corners_and_dot_hue_pixels() {
    let vp = Viewport::from_logical(800.0, 600.0, 1.0);
    let cfg = scenario_config();
    let bg = cfg.bg_color;
    let mut field = DotField::new(cfg, vp).unwrap();

    let frame = render_frame_rgba(&mut field, 1.0 / 60.0).unwrap();
    assert_eq!((frame.width, frame.height), (800, 600));

    // The very corner sits outside the nearest dot's rim.
    assert_eq!(frame.pixel(0, 0).unwrap(), bg);

    // Sample the center pixel of a solidly visible dot: the cyan dot color
    // has b > g > r, and over the near-black background that ordering must
    // survive blending.
    let dot = field
        .frame()
        .into_iter()
        .find(|d| d.radius > 1.5 && d.opacity > 0.1)
        .expect("at least one solidly visible dot");
    let px = frame
        .pixel(dot.center.x as u32, dot.center.y as u32)
        .unwrap();
    assert_ne!(px, bg);
    assert!(px.b > px.g && px.g > px.r);
}

#[test]
fn dpr_scaling_changes_buffer_not_logic() {
    let cfg = scenario_config();
    let mut lo = DotField::new(cfg.clone(), Viewport::from_logical(400.0, 300.0, 1.0)).unwrap();
    let mut hi = DotField::new(cfg, Viewport::from_logical(400.0, 300.0, 2.0)).unwrap();

    let lo_frame = render_frame_rgba(&mut lo, 1.0 / 60.0).unwrap();
    let hi_frame = render_frame_rgba(&mut hi, 1.0 / 60.0).unwrap();

    assert_eq!((lo_frame.width, lo_frame.height), (400, 300));
    assert_eq!((hi_frame.width, hi_frame.height), (800, 600));
    // Same density constant regardless of scale.
    assert_eq!(lo.grid_dims(), hi.grid_dims());
}

#[test]
fn pointer_near_a_cell_brightens_it() {
    let vp = Viewport::from_logical(800.0, 600.0, 1.0);
    let mut cfg = scenario_config();
    cfg.smoothing = 1.0;
    let mut plain = DotField::new(cfg.clone(), vp).unwrap();
    let mut hovered = DotField::new(cfg, vp).unwrap();

    let probe = Point::new(402.0, 306.0);
    hovered.set_pointer(probe);
    plain.set_pointer(Point::new(-10_000.0, -10_000.0));
    plain.advance(1.0 / 60.0);
    hovered.advance(1.0 / 60.0);

    let nearest = |field: &DotField| {
        field
            .frame()
            .into_iter()
            .min_by(|a, b| {
                a.center
                    .distance(probe)
                    .total_cmp(&b.center.distance(probe))
            })
            .expect("dot near probe")
    };
    let plain_dot = nearest(&plain);
    let hovered_dot = nearest(&hovered);
    assert!(hovered_dot.opacity > plain_dot.opacity);
    assert!(hovered_dot.radius > plain_dot.radius);
}
