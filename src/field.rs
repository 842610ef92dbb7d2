use crate::{
    clock::Clock,
    config::FieldConfig,
    core::{Point, Viewport},
    cursor::Cursor,
    error::DotfieldResult,
};

/// One renderable dot, the output of a grid-cell sample that survived the
/// visibility thresholds.
#[derive(Clone, Copy, Debug)]
pub struct Dot {
    pub center: Point,
    pub radius: f64,
    pub opacity: f64,
}

/// Full diagnostic sample for a single grid cell. [`DotField::frame`] reduces
/// these to [`Dot`]s; tests and tuning tools read the intermediate terms.
#[derive(Clone, Copy, Debug)]
pub struct CellSample {
    pub center: Point,
    /// Euclidean distance to the anchor, normalized by the canvas diagonal.
    pub anchor_dist: f64,
    /// Glow term peaking at 1.0 on the anchor itself.
    pub anchor_glow: f64,
    /// Linear cursor falloff, exactly 0 at and beyond `mouse_radius`.
    pub mouse_influence: f64,
    pub wave: f64,
    pub radius: f64,
    pub opacity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDims {
    pub cols: u32,
    pub rows: u32,
}

fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    if edge0 >= edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// The reactive dot-grid field.
///
/// Owns the smoothed cursor, the animation clock and the (DPR-scaled)
/// viewport. Cells are never materialized: every frame resamples the grid
/// from cell indices, the clock and the cursor, which keeps memory flat and
/// makes resize a pure change of loop bounds.
#[derive(Clone, Debug)]
pub struct DotField {
    config: FieldConfig,
    viewport: Viewport,
    cursor: Cursor,
    clock: Clock,
}

impl DotField {
    pub fn new(config: FieldConfig, viewport: Viewport) -> DotfieldResult<Self> {
        config.validate()?;
        let center = Point::new(
            f64::from(viewport.width) / 2.0,
            f64::from(viewport.height) / 2.0,
        );
        let clock = Clock::new(config.clock);
        Ok(Self {
            config,
            viewport,
            cursor: Cursor::new(center),
            clock,
        })
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.clock.elapsed_secs()
    }

    /// Record the latest pointer position (device pixels). Older positions
    /// are overwritten, never queued.
    pub fn set_pointer(&mut self, position: Point) {
        self.cursor.set_target(position);
    }

    /// Apply a viewport change before the next draw.
    pub fn resize(&mut self, logical_width: f64, logical_height: f64, dpr: f64) {
        self.viewport.resize(logical_width, logical_height, dpr);
    }

    /// Per-frame state advance: ease the cursor toward its target and tick
    /// the clock. `dt` is real elapsed seconds (ignored in fixed-step mode).
    pub fn advance(&mut self, dt: f64) {
        self.cursor.step(self.config.smoothing);
        self.clock.tick(dt);
    }

    /// Square cell size: shorter viewport side divided by the grid density.
    pub fn cell_size(&self) -> f64 {
        if self.viewport.is_empty() {
            return 0.0;
        }
        self.viewport.min_side() / f64::from(self.config.grid_size)
    }

    /// Smallest column/row counts that fully cover the canvas, plus one
    /// overscan cell per axis so edge cells are never clipped mid-cell.
    pub fn grid_dims(&self) -> GridDims {
        let cell = self.cell_size();
        if cell <= 0.0 {
            return GridDims { cols: 0, rows: 0 };
        }
        let cols = (f64::from(self.viewport.width) / cell).ceil() as u32 + 1;
        let rows = (f64::from(self.viewport.height) / cell).ceil() as u32 + 1;
        GridDims { cols, rows }
    }

    /// Anchor point in device pixels (fractions may exceed the frame).
    pub fn anchor_point(&self) -> Point {
        Point::new(
            self.config.anchor.x * f64::from(self.viewport.width),
            self.config.anchor.y * f64::from(self.viewport.height),
        )
    }

    /// Linear cursor falloff: `max(0, 1 - d / mouse_radius)`.
    pub fn mouse_influence(&self, p: Point) -> f64 {
        let d = self.cursor.position().distance(p);
        (1.0 - d / self.config.mouse_radius).max(0.0)
    }

    fn wave_at(&self, anchor_dist: f64) -> f64 {
        let w = &self.config.wave;
        let s = (self.clock.elapsed_secs() * w.frequency + anchor_dist * w.spatial_frequency).sin();
        (w.baseline + w.amplitude * s).max(0.0)
    }

    fn edge_fade(&self, p: Point) -> f64 {
        let margin = (self.cell_size() * 2.0).max(1.0);
        let w = f64::from(self.viewport.width);
        let h = f64::from(self.viewport.height);
        let fx = smoothstep(0.0, 1.0, p.x.min(w - p.x) / margin);
        let fy = smoothstep(0.0, 1.0, p.y.min(h - p.y) / margin);
        fx * fy
    }

    pub fn sample_cell(&self, col: u32, row: u32) -> CellSample {
        let cell = self.cell_size();
        let center = Point::new(
            (f64::from(col) + 0.5) * cell,
            (f64::from(row) + 0.5) * cell,
        );

        let diag = self.viewport.diagonal();
        let anchor_dist = if diag > 0.0 {
            (self.anchor_point().distance(center) / diag).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let anchor_glow = 1.0 - smoothstep(0.15, 0.85, anchor_dist);
        let mouse_influence = self.mouse_influence(center);
        let wave = self.wave_at(anchor_dist);

        let base_frac = (anchor_dist * anchor_dist * self.config.radius_growth)
            .min(self.config.max_radius_frac);
        let radius = base_frac * cell * wave * (1.0 + mouse_influence * self.config.mouse_size_boost);
        let radius = if radius.is_finite() { radius.max(0.0) } else { 0.0 };

        let opacity = self.config.dot_opacity
            * wave
            * self.edge_fade(center)
            * (0.25 + 0.75 * anchor_glow)
            * (1.0 + mouse_influence * self.config.mouse_opacity_boost);
        let opacity = if opacity.is_finite() {
            opacity.clamp(0.0, self.config.max_opacity)
        } else {
            0.0
        };

        CellSample {
            center,
            anchor_dist,
            anchor_glow,
            mouse_influence,
            wave,
            radius,
            opacity,
        }
    }

    /// Sample every grid cell, dropping dots below the visibility
    /// thresholds. An empty viewport produces an empty frame.
    pub fn frame(&self) -> Vec<Dot> {
        let dims = self.grid_dims();
        let mut dots = Vec::new();
        for row in 0..dims.rows {
            for col in 0..dims.cols {
                let s = self.sample_cell(col, row);
                if s.radius < self.config.min_radius || s.opacity < self.config.min_opacity {
                    continue;
                }
                dots.push(Dot {
                    center: s.center,
                    radius: s.radius,
                    opacity: s.opacity,
                });
            }
        }
        dots
    }
}
