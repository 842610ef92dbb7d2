//! Scroll-linked parallax transforms for the layered sections: background
//! slowest, connection lines medium, foreground fastest, with a slight
//! depth scale toward the scroll extremes.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Clone, Copy, Debug)]
pub struct ParallaxOptions {
    /// 0.3 = layer moves at 30% of scroll speed.
    pub speed: f64,
    pub axis: Axis,
}

impl Default for ParallaxOptions {
    fn default() -> Self {
        Self {
            speed: 0.5,
            axis: Axis::Y,
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Map scroll progress in `[0,1]` to a single layer's translation offset.
pub fn layer_offset(progress: f64, opts: ParallaxOptions) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    let range = match opts.axis {
        Axis::Y => 100.0 * opts.speed,
        Axis::X => 50.0 * opts.speed,
    };
    lerp(-range, range, t)
}

/// Piecewise scale through `[start, mid, start]` peaking at mid-scroll.
fn depth_scale(progress: f64, edge: f64) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    if t < 0.5 {
        lerp(edge, 1.0, t * 2.0)
    } else {
        lerp(1.0, edge, (t - 0.5) * 2.0)
    }
}

/// Transforms for the standard three-layer composition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxLayers {
    pub bg_y: f64,
    pub lines_y: f64,
    pub fg_y: f64,
    pub bg_scale: f64,
    pub fg_scale: f64,
}

/// Compute all layer transforms for one scroll position. With
/// `reduced_motion` everything is pinned to its midpoint (no movement, unit
/// scale).
pub fn layers(progress: f64, reduced_motion: bool) -> ParallaxLayers {
    if reduced_motion {
        return ParallaxLayers {
            bg_y: 0.0,
            lines_y: 0.0,
            fg_y: 0.0,
            bg_scale: 1.0,
            fg_scale: 1.0,
        };
    }
    let t = progress.clamp(0.0, 1.0);
    ParallaxLayers {
        bg_y: lerp(-40.0, 40.0, t),
        lines_y: lerp(-25.0, 25.0, t),
        fg_y: lerp(-10.0, 10.0, t),
        bg_scale: depth_scale(t, 0.98),
        fg_scale: depth_scale(t, 0.96),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_layer_range_scales_with_speed() {
        let opts = ParallaxOptions {
            speed: 0.3,
            axis: Axis::Y,
        };
        assert_eq!(layer_offset(0.0, opts), -30.0);
        assert_eq!(layer_offset(0.5, opts), 0.0);
        assert_eq!(layer_offset(1.0, opts), 30.0);

        let x = ParallaxOptions {
            speed: 1.0,
            axis: Axis::X,
        };
        assert_eq!(layer_offset(1.0, x), 50.0);
    }

    #[test]
    fn progress_is_clamped() {
        let opts = ParallaxOptions::default();
        assert_eq!(layer_offset(-3.0, opts), layer_offset(0.0, opts));
        assert_eq!(layer_offset(7.0, opts), layer_offset(1.0, opts));
    }

    #[test]
    fn layer_speeds_are_ordered_bg_slowest() {
        let l = layers(1.0, false);
        assert_eq!(l.bg_y, 40.0);
        assert_eq!(l.lines_y, 25.0);
        assert_eq!(l.fg_y, 10.0);
        assert!(l.bg_y > l.lines_y && l.lines_y > l.fg_y);
    }

    #[test]
    fn depth_scale_peaks_at_mid_scroll() {
        let start = layers(0.0, false);
        let mid = layers(0.5, false);
        let end = layers(1.0, false);
        assert_eq!(start.bg_scale, 0.98);
        assert_eq!(mid.bg_scale, 1.0);
        assert_eq!(end.fg_scale, 0.96);
        assert!(mid.fg_scale > start.fg_scale);
    }

    #[test]
    fn reduced_motion_pins_everything() {
        for p in [0.0, 0.3, 1.0] {
            let l = layers(p, true);
            assert_eq!(l.bg_y, 0.0);
            assert_eq!(l.fg_y, 0.0);
            assert_eq!(l.bg_scale, 1.0);
            assert_eq!(l.fg_scale, 1.0);
        }
    }
}
