use crate::core::{Point, Vec2};

/// Grid tile size in pixels; offsets wrap at this period so the drift is
/// seamless.
pub const TILE_SIZE: f64 = 40.0;
/// Default radius of the cursor-centered reveal mask.
pub const DEFAULT_REVEAL_RADIUS: f64 = 400.0;

/// Endlessly drifting grid offset, advanced per frame and wrapped to the
/// tile period.
#[derive(Clone, Copy, Debug)]
pub struct GridDrift {
    offset: Vec2,
    speed: Vec2,
}

impl GridDrift {
    pub fn new(speed_x: f64, speed_y: f64) -> Self {
        Self {
            offset: Vec2::ZERO,
            speed: Vec2::new(speed_x, speed_y),
        }
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn advance(&mut self) {
        self.offset.x = (self.offset.x + self.speed.x).rem_euclid(TILE_SIZE);
        self.offset.y = (self.offset.y + self.speed.y).rem_euclid(TILE_SIZE);
    }
}

impl Default for GridDrift {
    fn default() -> Self {
        Self::new(0.3, 0.3)
    }
}

/// Radial reveal around the cursor: the active grid layer is only visible
/// inside this mask, fading linearly to the edge.
#[derive(Clone, Copy, Debug)]
pub struct RevealMask {
    pub center: Point,
    pub radius: f64,
}

impl RevealMask {
    pub fn new(center: Point) -> Self {
        Self {
            center,
            radius: DEFAULT_REVEAL_RADIUS,
        }
    }

    /// Visibility in `[0,1]` at `p`: 1 at the center, 0 at and beyond the
    /// radius.
    pub fn visibility(&self, p: Point) -> f64 {
        if !(self.radius > 0.0) {
            return 0.0;
        }
        (1.0 - self.center.distance(p) / self.radius).max(0.0)
    }
}
