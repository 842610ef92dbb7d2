use crate::{
    core::Point,
    error::DotfieldResult,
    field::DotField,
    render::{Surface, render_frame},
};

/// Input events the runner consumes between frames. Pointer positions are
/// device pixels; resize carries logical dimensions plus the reported DPR.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMoved { x: f64, y: f64 },
    Resized { logical_width: f64, logical_height: f64, dpr: f64 },
}

/// Owns the animation lifecycle around a [`DotField`].
///
/// Mouse position, elapsed time and the in-flight frame handle live in this
/// one struct with `start()`/`stop()` rather than in module-level state.
/// After `stop()` no further frames are produced and no input is consumed,
/// which is the contract that prevents the classic detached-canvas leak.
#[derive(Debug)]
pub struct FieldRunner {
    field: DotField,
    running: bool,
    frames_rendered: u64,
    events_consumed: u64,
}

impl FieldRunner {
    pub fn new(field: DotField) -> Self {
        Self {
            field,
            running: false,
            frames_rendered: 0,
            events_consumed: 0,
        }
    }

    pub fn start(&mut self) {
        if !self.running {
            tracing::debug!("field runner started");
            self.running = true;
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            tracing::debug!(frames = self.frames_rendered, "field runner stopped");
            self.running = false;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn field(&self) -> &DotField {
        &self.field
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn events_consumed(&self) -> u64 {
        self.events_consumed
    }

    /// Feed one input event. Dropped entirely when stopped, as if the
    /// listeners had been removed.
    pub fn handle(&mut self, event: InputEvent) {
        if !self.running {
            return;
        }
        self.events_consumed += 1;
        match event {
            InputEvent::PointerMoved { x, y } => self.field.set_pointer(Point::new(x, y)),
            InputEvent::Resized {
                logical_width,
                logical_height,
                dpr,
            } => self.field.resize(logical_width, logical_height, dpr),
        }
    }

    /// Render the next frame onto `surface`. Returns the number of dots
    /// drawn, or `None` when stopped (the cancelled-frame case).
    pub fn tick(&mut self, dt: f64, surface: &mut dyn Surface) -> DotfieldResult<Option<usize>> {
        if !self.running {
            return Ok(None);
        }
        let drawn = render_frame(&mut self.field, dt, surface)?;
        self.frames_rendered += 1;
        Ok(Some(drawn))
    }
}
