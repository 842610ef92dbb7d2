use std::collections::VecDeque;

use crate::{
    core::{Point, Rgba8},
    render::Surface,
};

/// Side length of a trail pixel, and the minimum cursor travel before a new
/// one is spawned.
pub const PIXEL_SIZE: f64 = 12.0;
/// Maximum number of live trail pixels.
pub const TRAIL_LENGTH: usize = 40;
/// Opacity lost per frame.
pub const FADE_SPEED: f64 = 0.04;

#[derive(Clone, Copy, Debug)]
pub struct TrailPixel {
    pub position: Point,
    pub opacity: f64,
    pub age: u32,
}

impl TrailPixel {
    /// Pixels shrink with age, floored so old ones stay visible until they
    /// fade out.
    pub fn size(&self) -> f64 {
        PIXEL_SIZE * (1.0 - f64::from(self.age) / 100.0).max(0.3)
    }
}

/// Square-pixel cursor trail: spawns a pixel whenever the cursor has moved
/// far enough, fades and shrinks them per frame.
#[derive(Clone, Debug, Default)]
pub struct PixelTrail {
    pixels: VecDeque<TrailPixel>,
    last_spawn: Option<Point>,
}

impl PixelTrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pixels(&self) -> impl Iterator<Item = &TrailPixel> {
        self.pixels.iter()
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Feed a pointer position; spawns a pixel if the cursor travelled more
    /// than one pixel-size since the last spawn.
    pub fn record_move(&mut self, position: Point) {
        let spawn = match self.last_spawn {
            Some(last) => last.distance(position) > PIXEL_SIZE,
            None => true,
        };
        if !spawn {
            return;
        }
        while self.pixels.len() >= TRAIL_LENGTH {
            self.pixels.pop_front();
        }
        self.pixels.push_back(TrailPixel {
            position,
            opacity: 1.0,
            age: 0,
        });
        self.last_spawn = Some(position);
    }

    /// Per-frame fade and aging; dead pixels are dropped.
    pub fn advance(&mut self) {
        for px in &mut self.pixels {
            px.opacity -= FADE_SPEED;
            px.age += 1;
        }
        self.pixels.retain(|px| px.opacity > 0.0);
    }

    /// Draw the live pixels as squares, at 0.6 of their logical opacity.
    pub fn draw(&self, surface: &mut dyn Surface, color: Rgba8) {
        for px in &self.pixels {
            surface.fill_rect(px.position, px.size(), color, px.opacity * 0.6);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_moves_do_not_spawn() {
        let mut trail = PixelTrail::new();
        trail.record_move(Point::new(0.0, 0.0));
        trail.record_move(Point::new(PIXEL_SIZE - 1.0, 0.0));
        assert_eq!(trail.len(), 1);
        trail.record_move(Point::new(PIXEL_SIZE + 1.0, 0.0));
        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn trail_is_capped() {
        let mut trail = PixelTrail::new();
        for i in 0..(TRAIL_LENGTH * 2) {
            trail.record_move(Point::new((i as f64) * PIXEL_SIZE * 2.0, 0.0));
        }
        assert_eq!(trail.len(), TRAIL_LENGTH);
    }

    #[test]
    fn pixels_fade_out_and_die() {
        let mut trail = PixelTrail::new();
        trail.record_move(Point::new(0.0, 0.0));
        let frames_to_die = (1.0 / FADE_SPEED).ceil() as usize;
        for _ in 0..frames_to_die {
            trail.advance();
        }
        assert!(trail.is_empty());
    }

    #[test]
    fn size_shrinks_with_age_to_floor() {
        let fresh = TrailPixel {
            position: Point::ZERO,
            opacity: 1.0,
            age: 0,
        };
        let old = TrailPixel { age: 90, ..fresh };
        let ancient = TrailPixel { age: 500, ..fresh };
        assert_eq!(fresh.size(), PIXEL_SIZE);
        assert!(old.size() < fresh.size());
        assert_eq!(ancient.size(), PIXEL_SIZE * 0.3);
    }
}
