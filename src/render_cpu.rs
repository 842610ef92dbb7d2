use crate::{
    core::{Point, Rgba8, Viewport},
    render::{FrameRgba, Surface},
};

/// Software rasterizer writing straight-alpha RGBA8.
///
/// The dot field only needs antialiased circles and small rects, so coverage
/// is computed analytically per pixel instead of going through a general
/// vector scene.
#[derive(Clone, Debug)]
pub struct CpuSurface {
    frame: FrameRgba,
}

impl CpuSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_dims(viewport.width, viewport.height)
    }

    pub fn with_dims(width: u32, height: u32) -> Self {
        Self {
            frame: FrameRgba::new(width, height),
        }
    }

    pub fn frame(&self) -> &FrameRgba {
        &self.frame
    }

    pub fn into_frame(self) -> FrameRgba {
        self.frame
    }

    fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba8, alpha: f64) {
        if x >= self.frame.width || y >= self.frame.height {
            return;
        }
        let a_s = (alpha * f64::from(color.a) / 255.0).clamp(0.0, 1.0);
        if a_s <= 0.0 {
            return;
        }
        let i = ((y as usize) * (self.frame.width as usize) + (x as usize)) * 4;
        let a_d = f64::from(self.frame.data[i + 3]) / 255.0;
        let a_out = a_s + a_d * (1.0 - a_s);
        if a_out <= 0.0 {
            return;
        }
        let blend = |src: u8, dst: u8| -> u8 {
            let c = (f64::from(src) * a_s + f64::from(dst) * a_d * (1.0 - a_s)) / a_out;
            c.round().clamp(0.0, 255.0) as u8
        };
        self.frame.data[i] = blend(color.r, self.frame.data[i]);
        self.frame.data[i + 1] = blend(color.g, self.frame.data[i + 1]);
        self.frame.data[i + 2] = blend(color.b, self.frame.data[i + 2]);
        self.frame.data[i + 3] = (a_out * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    /// Clamped integer bounds of a shape's bounding box, or `None` when it is
    /// entirely off-buffer.
    fn clip_box(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Option<(u32, u32, u32, u32)> {
        if self.frame.is_empty() || !min_x.is_finite() || !min_y.is_finite() {
            return None;
        }
        let w = f64::from(self.frame.width);
        let h = f64::from(self.frame.height);
        if max_x < 0.0 || max_y < 0.0 || min_x >= w || min_y >= h {
            return None;
        }
        let x0 = min_x.floor().max(0.0) as u32;
        let y0 = min_y.floor().max(0.0) as u32;
        let x1 = (max_x.ceil().min(w - 1.0)).max(0.0) as u32;
        let y1 = (max_y.ceil().min(h - 1.0)).max(0.0) as u32;
        Some((x0, y0, x1, y1))
    }
}

impl Surface for CpuSurface {
    fn clear(&mut self, color: Rgba8) {
        for px in self.frame.data.chunks_exact_mut(4) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
            px[3] = color.a;
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8, opacity: f64) {
        if !(radius > 0.0) || !(opacity > 0.0) || !radius.is_finite() {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.clip_box(
            center.x - radius - 1.0,
            center.y - radius - 1.0,
            center.x + radius + 1.0,
            center.y + radius + 1.0,
        ) else {
            return;
        };
        let opacity = opacity.clamp(0.0, 1.0);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = center.distance(Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5));
                // 1px analytic edge: full inside, linear falloff across the rim.
                let coverage = (radius - d + 0.5).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend_pixel(x, y, color, opacity * coverage);
                }
            }
        }
    }

    fn fill_rect(&mut self, center: Point, size: f64, color: Rgba8, opacity: f64) {
        if !(size > 0.0) || !(opacity > 0.0) || !size.is_finite() {
            return;
        }
        let half = size / 2.0;
        let Some((x0, y0, x1, y1)) = self.clip_box(
            center.x - half,
            center.y - half,
            center.x + half,
            center.y + half,
        ) else {
            return;
        };
        let opacity = opacity.clamp(0.0, 1.0);
        for y in y0..=y1 {
            for x in x0..=x1 {
                // Per-axis overlap of the unit pixel with the rect.
                let px0 = f64::from(x);
                let py0 = f64::from(y);
                let ox = (px0 + 1.0).min(center.x + half) - px0.max(center.x - half);
                let oy = (py0 + 1.0).min(center.y + half) - py0.max(center.y - half);
                let coverage = ox.clamp(0.0, 1.0) * oy.clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend_pixel(x, y, color, opacity * coverage);
                }
            }
        }
    }
}
