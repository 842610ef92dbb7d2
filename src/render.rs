use crate::{
    core::{Point, Rgba8},
    error::DotfieldResult,
    field::DotField,
};

/// A rendered frame: straight-alpha RGBA8, row-major.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRgba {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; (width as usize) * (height as usize) * 4],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some(Rgba8 {
            r: self.data[i],
            g: self.data[i + 1],
            b: self.data[i + 2],
            a: self.data[i + 3],
        })
    }
}

/// Drawing seam between the field and a pixel target. The field only ever
/// clears and fills shapes; anything implementing this can display it.
pub trait Surface {
    fn clear(&mut self, color: Rgba8);
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8, opacity: f64);
    fn fill_rect(&mut self, center: Point, size: f64, color: Rgba8, opacity: f64);
}

/// Surface for environments with no drawing target (headless, unsupported
/// context). Every operation is a no-op; the decorative layer must never
/// block the rest of the page.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self, _color: Rgba8) {}
    fn fill_circle(&mut self, _center: Point, _radius: f64, _color: Rgba8, _opacity: f64) {}
    fn fill_rect(&mut self, _center: Point, _size: f64, _color: Rgba8, _opacity: f64) {}
}

/// Advance the field by one frame and draw it: clear to the background
/// color, then fill every visible dot. Returns the number of dots drawn.
pub fn render_frame(
    field: &mut DotField,
    dt: f64,
    surface: &mut dyn Surface,
) -> DotfieldResult<usize> {
    field.advance(dt);
    let cfg = field.config();
    surface.clear(cfg.bg_color);
    let dots = field.frame();
    for dot in &dots {
        surface.fill_circle(dot.center, dot.radius, cfg.dot_color, dot.opacity);
    }
    Ok(dots.len())
}

/// One-shot convenience: render the next frame into a fresh CPU buffer.
pub fn render_frame_rgba(field: &mut DotField, dt: f64) -> DotfieldResult<FrameRgba> {
    let mut surface = crate::render_cpu::CpuSurface::new(field.viewport());
    render_frame(field, dt, &mut surface)?;
    Ok(surface.into_frame())
}

/// Render `count` consecutive frames (e.g. for a PNG sequence export).
pub fn render_frames(
    field: &mut DotField,
    count: u32,
    dt: f64,
) -> DotfieldResult<Vec<FrameRgba>> {
    let mut out = Vec::with_capacity(count as usize);
    for _ in 0..count {
        out.push(render_frame_rgba(field, dt)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::FieldConfig, core::Viewport, field::DotField};

    #[test]
    fn null_surface_renders_without_drawing() {
        let vp = Viewport::from_logical(320.0, 240.0, 1.0);
        let mut field = DotField::new(FieldConfig::default(), vp).unwrap();
        let mut surface = NullSurface;
        let drawn = render_frame(&mut field, 0.016, &mut surface).unwrap();
        assert!(drawn > 0);
        // A second frame advances state even with no visible target.
        assert!(field.elapsed_secs() > 0.0);
    }

    #[test]
    fn empty_viewport_yields_empty_frame() {
        let vp = Viewport::from_logical(0.0, 0.0, 1.0);
        let mut field = DotField::new(FieldConfig::default(), vp).unwrap();
        let frame = render_frame_rgba(&mut field, 0.016).unwrap();
        assert!(frame.is_empty());
        assert!(frame.data.is_empty());
    }

    #[test]
    fn render_frames_produces_requested_count() {
        let vp = Viewport::from_logical(64.0, 64.0, 1.0);
        let mut field = DotField::new(FieldConfig::default(), vp).unwrap();
        let frames = render_frames(&mut field, 3, 0.016).unwrap();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].width, 64);
    }
}
