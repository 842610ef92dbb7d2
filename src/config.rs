use crate::{
    clock::ClockMode,
    core::{Rgba8, Vec2},
    error::{DotfieldError, DotfieldResult},
};

/// Default dot color (the site's primary cyan).
pub const DEFAULT_DOT_COLOR: Rgba8 = Rgba8::rgb(0x22, 0xd3, 0xee);
/// Default background color.
pub const DEFAULT_BG_COLOR: Rgba8 = Rgba8::rgb(0x09, 0x09, 0x0b);

/// Parameters of the time-based "breathing" oscillation:
/// `baseline + amplitude * sin(frequency * t + spatial_frequency * d)`,
/// where `d` is the cell's normalized anchor distance. The spatial term keeps
/// the grid from pulsing uniformly.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    pub frequency: f64,
    pub spatial_frequency: f64,
    pub amplitude: f64,
    pub baseline: f64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            frequency: 2.0,
            spatial_frequency: 10.0,
            amplitude: 0.3,
            baseline: 1.0,
        }
    }
}

/// Tuning knobs for a [`DotField`](crate::DotField). Every field has a
/// default; JSON configs may set any subset.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub dot_color: Rgba8,
    pub bg_color: Rgba8,
    /// Grid density: cells across the shorter viewport dimension.
    pub grid_size: u32,
    /// Base opacity multiplier applied to every dot.
    pub dot_opacity: f64,
    /// Anchor point as fractions of viewport width/height. Deliberately
    /// below/right of the visible frame by default so the falloff reads as a
    /// glow from the corner.
    pub anchor: Vec2,
    /// Cursor influence radius in device pixels.
    pub mouse_radius: f64,
    /// Fraction of remaining cursor distance closed per frame.
    pub smoothing: f64,
    pub wave: WaveConfig,
    /// Hard cap on final dot opacity.
    pub max_opacity: f64,
    /// How quickly dots grow with anchor distance.
    pub radius_growth: f64,
    /// Max dot radius as a fraction of the cell size.
    pub max_radius_frac: f64,
    /// Radius multiplier gain near the cursor.
    pub mouse_size_boost: f64,
    /// Opacity multiplier gain near the cursor.
    pub mouse_opacity_boost: f64,
    pub clock: ClockMode,
    /// Dots below these thresholds are skipped entirely.
    pub min_radius: f64,
    pub min_opacity: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            dot_color: DEFAULT_DOT_COLOR,
            bg_color: DEFAULT_BG_COLOR,
            grid_size: 50,
            dot_opacity: 0.3,
            anchor: Vec2::new(0.7, 1.1),
            mouse_radius: 200.0,
            smoothing: 0.08,
            wave: WaveConfig::default(),
            max_opacity: 0.6,
            radius_growth: 1.2,
            max_radius_frac: 0.3,
            mouse_size_boost: 0.5,
            mouse_opacity_boost: 4.0,
            clock: ClockMode::default(),
            min_radius: 0.15,
            min_opacity: 0.01,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> DotfieldResult<()> {
        if self.grid_size == 0 {
            return Err(DotfieldError::config("grid_size must be > 0"));
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(DotfieldError::config("smoothing must be in (0, 1]"));
        }
        if !(self.mouse_radius > 0.0) {
            return Err(DotfieldError::config("mouse_radius must be > 0"));
        }
        if !(self.max_opacity > 0.0 && self.max_opacity <= 1.0) {
            return Err(DotfieldError::config("max_opacity must be in (0, 1]"));
        }
        if !(self.dot_opacity >= 0.0) {
            return Err(DotfieldError::config("dot_opacity must be >= 0"));
        }
        if !(self.wave.amplitude >= 0.0) {
            return Err(DotfieldError::config("wave amplitude must be >= 0"));
        }
        if !(self.max_radius_frac > 0.0) {
            return Err(DotfieldError::config("max_radius_frac must be > 0"));
        }
        if !(self.radius_growth > 0.0) {
            return Err(DotfieldError::config("radius_growth must be > 0"));
        }
        if !(self.mouse_size_boost >= 0.0 && self.mouse_opacity_boost >= 0.0) {
            return Err(DotfieldError::config("mouse boosts must be >= 0"));
        }
        if !self.anchor.x.is_finite() || !self.anchor.y.is_finite() {
            return Err(DotfieldError::config("anchor fractions must be finite"));
        }
        if let ClockMode::FixedStep { step } = self.clock
            && !(step > 0.0 && step.is_finite())
        {
            return Err(DotfieldError::config("fixed clock step must be > 0"));
        }
        Ok(())
    }

    /// Parse from JSON, validating the result.
    pub fn from_json(json: &str) -> DotfieldResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| DotfieldError::serde(format!("parse field config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
