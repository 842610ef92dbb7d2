use crate::core::Point;

/// Smoothed pointer position in device-pixel units.
///
/// Pointer events only overwrite the target (latest value wins, older
/// positions are never queued); the rendered position eases toward it once
/// per frame, so input jitter is absorbed by the smoothing itself.
#[derive(Clone, Copy, Debug)]
pub struct Cursor {
    current: Point,
    target: Point,
}

impl Cursor {
    pub fn new(initial: Point) -> Self {
        Self {
            current: initial,
            target: initial,
        }
    }

    pub fn position(&self) -> Point {
        self.current
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn set_target(&mut self, target: Point) {
        self.target = target;
    }

    /// Close `smoothing` of the remaining distance to the target.
    /// `smoothing` is expected in `(0, 1]`; values outside are clamped.
    pub fn step(&mut self, smoothing: f64) {
        let s = if smoothing.is_finite() {
            smoothing.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.current.x += (self.target.x - self.current.x) * s;
        self.current.y += (self.target.y - self.current.y) * s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_closes_fraction_of_distance() {
        let mut cursor = Cursor::new(Point::new(0.0, 0.0));
        cursor.set_target(Point::new(100.0, 200.0));
        cursor.step(0.1);
        assert!((cursor.position().x - 10.0).abs() < 1e-9);
        assert!((cursor.position().y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn latest_target_wins() {
        let mut cursor = Cursor::new(Point::new(0.0, 0.0));
        cursor.set_target(Point::new(50.0, 50.0));
        cursor.set_target(Point::new(-10.0, 5.0));
        assert_eq!(cursor.target(), Point::new(-10.0, 5.0));
    }

    #[test]
    fn converges_to_target() {
        let mut cursor = Cursor::new(Point::new(0.0, 0.0));
        cursor.set_target(Point::new(300.0, 400.0));
        for _ in 0..400 {
            cursor.step(0.08);
        }
        assert!((cursor.position().x - 300.0).abs() < 1e-6);
        assert!((cursor.position().y - 400.0).abs() < 1e-6);
    }

    #[test]
    fn full_smoothing_snaps() {
        let mut cursor = Cursor::new(Point::new(1.0, 1.0));
        cursor.set_target(Point::new(9.0, 9.0));
        cursor.step(1.0);
        assert_eq!(cursor.position(), Point::new(9.0, 9.0));
    }
}
