use crate::core::{Point, Rect};

/// Dead zone around the element center, as a fraction of half the smaller
/// dimension. Pointer moves inside it leave the border dark.
pub const DEFAULT_INACTIVE_ZONE: f64 = 0.7;
/// Seconds the border angle takes to sweep onto a new target.
pub const DEFAULT_MOVEMENT_DURATION: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowOptions {
    /// Inactive-zone fraction, see [`DEFAULT_INACTIVE_ZONE`].
    pub inactive_zone: f64,
    /// Extra margin around the bounds within which the glow still activates.
    pub proximity: f64,
    /// Sweep duration in seconds. Non-positive snaps the angle immediately.
    pub movement_duration: f64,
}

impl Default for GlowOptions {
    fn default() -> Self {
        Self {
            inactive_zone: DEFAULT_INACTIVE_ZONE,
            proximity: 0.0,
            movement_duration: DEFAULT_MOVEMENT_DURATION,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct AngleSweep {
    from: f64,
    to: f64,
    t: f64,
    duration: f64,
}

fn ease_out_expo(t: f64) -> f64 {
    if t >= 1.0 { 1.0 } else { 1.0 - 2.0f64.powf(-10.0 * t) }
}

/// Pointer-tracking border glow: a conic highlight whose start angle eases
/// toward the cursor whenever the cursor is near the element's bounds but
/// outside the inactive zone around its center.
///
/// The angle is in degrees and deliberately unbounded: retargeting always
/// takes the shortest arc, so crossing 0/360 never sweeps the long way
/// around.
#[derive(Clone, Copy, Debug)]
pub struct BorderGlow {
    options: GlowOptions,
    active: bool,
    angle: f64,
    sweep: Option<AngleSweep>,
}

impl BorderGlow {
    pub fn new(options: GlowOptions) -> Self {
        Self {
            options,
            active: false,
            angle: 0.0,
            sweep: None,
        }
    }

    /// Whether the highlight is currently shown.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current highlight start angle in degrees (0 points up).
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Feed a pointer position against the element's bounds. Inside the
    /// inactive zone the glow turns off without retargeting; outside the
    /// bounds (plus proximity margin) it turns off and the angle freezes.
    pub fn pointer_moved(&mut self, pointer: Point, bounds: Rect) {
        let center = bounds.center();
        let inactive_radius =
            0.5 * bounds.width().min(bounds.height()) * self.options.inactive_zone;
        if center.distance(pointer) < inactive_radius {
            self.active = false;
            return;
        }

        let p = self.options.proximity;
        self.active = pointer.x > bounds.x0 - p
            && pointer.x < bounds.x1 + p
            && pointer.y > bounds.y0 - p
            && pointer.y < bounds.y1 + p;
        if !self.active {
            return;
        }

        let target = (pointer.y - center.y).atan2(pointer.x - center.x).to_degrees() + 90.0;
        // Shortest arc: the sweep never travels more than half a turn.
        let diff = (target - self.angle + 180.0).rem_euclid(360.0) - 180.0;
        let to = self.angle + diff;
        let duration = self.options.movement_duration;
        if duration.is_finite() && duration > 0.0 {
            self.sweep = Some(AngleSweep {
                from: self.angle,
                to,
                t: 0.0,
                duration,
            });
        } else {
            self.angle = to;
            self.sweep = None;
        }
    }

    /// Advance the in-flight sweep by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        let Some(sweep) = &mut self.sweep else {
            return;
        };
        if !(dt > 0.0) {
            return;
        }
        sweep.t = (sweep.t + dt).min(sweep.duration);
        let progress = ease_out_expo(sweep.t / sweep.duration);
        self.angle = sweep.from + (sweep.to - sweep.from) * progress;
        if sweep.t >= sweep.duration {
            self.angle = sweep.to;
            self.sweep = None;
        }
    }
}

impl Default for BorderGlow {
    fn default() -> Self {
        Self::new(GlowOptions::default())
    }
}
