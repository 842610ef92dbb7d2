/// How elapsed time advances between frames.
///
/// The default adds a fixed increment per frame, which ties effective
/// animation speed to the display refresh rate. `DeltaTime` is the
/// frame-rate-independent alternative and must be opted into explicitly so
/// the visible timing change is a deliberate choice.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ClockMode {
    /// Fixed seconds per frame regardless of real elapsed time.
    FixedStep { step: f64 },
    /// Real elapsed seconds reported by the caller.
    DeltaTime,
}

impl Default for ClockMode {
    fn default() -> Self {
        Self::FixedStep { step: 1.0 / 60.0 }
    }
}

/// Monotonic elapsed time driving the wave oscillation. Reset only when the
/// owning field is recreated.
#[derive(Clone, Copy, Debug, Default)]
pub struct Clock {
    mode: ClockMode,
    elapsed: f64,
}

impl Clock {
    pub fn new(mode: ClockMode) -> Self {
        Self { mode, elapsed: 0.0 }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed
    }

    /// Advance by one frame. `dt` is the real elapsed seconds since the last
    /// tick; it is ignored in `FixedStep` mode.
    pub fn tick(&mut self, dt: f64) {
        let step = match self.mode {
            ClockMode::FixedStep { step } => step,
            ClockMode::DeltaTime => dt,
        };
        if step.is_finite() && step > 0.0 {
            self.elapsed += step;
        }
    }
}
