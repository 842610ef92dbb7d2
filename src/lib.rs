//! Dotfield renders the reactive dot-grid ambient background: a procedural
//! grid of dots whose size and opacity follow a fixed anchor falloff, a slow
//! time-based wave, and the smoothed mouse cursor.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: `DotField + elapsed time + cursor -> Vec<Dot>` (pure, cells
//!    are recomputed every frame, never stored)
//! 2. **Draw**: dots go through the [`Surface`] seam (`CpuSurface` rasterizes
//!    to RGBA8; `NullSurface` is the safe no-op for headless environments)
//! 3. **Drive**: [`FieldRunner`] owns start/stop and the input event stream,
//!    so nothing keeps animating after teardown
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Flat memory**: grid cells are derived from indices per frame; resize
//!   only changes loop bounds.
//! - **Decorative failure is non-fatal**: a missing drawing target or a bad
//!   color string degrades to a no-op or a default, never a panic.
#![forbid(unsafe_code)]

pub mod clock;
pub mod config;
pub mod core;
pub mod cursor;
pub mod error;
pub mod field;
pub mod glow;
pub mod gridscroll;
pub mod parallax;
pub mod preview;
pub mod render;
pub mod render_cpu;
pub mod runner;
pub mod trail;
pub mod waitlist;

pub use crate::clock::{Clock, ClockMode};
pub use crate::config::{DEFAULT_BG_COLOR, DEFAULT_DOT_COLOR, FieldConfig, WaveConfig};
pub use crate::core::{MAX_DPR, Point, Rect, Rgba8, Vec2, Viewport};
pub use crate::cursor::Cursor;
pub use crate::error::{DotfieldError, DotfieldResult};
pub use crate::field::{CellSample, Dot, DotField, GridDims};
pub use crate::glow::{BorderGlow, GlowOptions};
pub use crate::gridscroll::{GridDrift, RevealMask};
pub use crate::parallax::{Axis, ParallaxLayers, ParallaxOptions, layer_offset, layers};
pub use crate::render::{
    FrameRgba, NullSurface, Surface, render_frame, render_frame_rgba, render_frames,
};
pub use crate::render_cpu::CpuSurface;
pub use crate::runner::{FieldRunner, InputEvent};
pub use crate::trail::{PixelTrail, TrailPixel};
pub use crate::waitlist::{
    FormPhase, SimulatedBackend, WaitlistBackend, WaitlistEntry, WaitlistForm,
};
