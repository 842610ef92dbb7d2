use crate::error::{DotfieldError, DotfieldResult};

/// Delay between closing the dialog and the form clearing, so the success
/// state does not visibly flash back to an empty form.
pub const RESET_DELAY_SECS: f64 = 0.4;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WaitlistEntry {
    pub name: String,
    pub email: String,
    pub use_case: Option<String>,
}

/// External collaborator that persists a waitlist entry. The UI only calls
/// and awaits this; transport and storage belong to whoever implements it.
pub trait WaitlistBackend {
    fn submit(&mut self, entry: &WaitlistEntry) -> DotfieldResult<()>;
}

/// Backend matching the shipped page: no network call, submission always
/// succeeds. Records entries so tests can observe what was sent.
#[derive(Debug, Default)]
pub struct SimulatedBackend {
    pub submissions: Vec<WaitlistEntry>,
}

impl WaitlistBackend for SimulatedBackend {
    fn submit(&mut self, entry: &WaitlistEntry) -> DotfieldResult<()> {
        self.submissions.push(entry.clone());
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitted,
}

/// Transient per-session form state. Never persisted; discarded with the
/// page.
#[derive(Debug)]
pub struct WaitlistForm {
    name: String,
    email: String,
    use_case: String,
    phase: FormPhase,
    error: Option<String>,
    reset_in: Option<f64>,
}

impl Default for WaitlistForm {
    fn default() -> Self {
        Self::new()
    }
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            use_case: String::new(),
            phase: FormPhase::Editing,
            error: None,
            reset_in: None,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.error = None;
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.error = None;
    }

    pub fn set_use_case(&mut self, value: impl Into<String>) {
        self.use_case = value.into();
    }

    fn entry(&self) -> DotfieldResult<WaitlistEntry> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(DotfieldError::config("name and email are required"));
        }
        if !email.contains('@') {
            return Err(DotfieldError::config("email address looks invalid"));
        }
        let use_case = self.use_case.trim();
        Ok(WaitlistEntry {
            name: name.to_string(),
            email: email.to_string(),
            use_case: (!use_case.is_empty()).then(|| use_case.to_string()),
        })
    }

    /// Validate and hand the entry to the backend. On any failure the form
    /// stays editable with an inline error; nothing is swallowed.
    pub fn submit(&mut self, backend: &mut dyn WaitlistBackend) {
        if self.phase == FormPhase::Submitted {
            return;
        }
        let entry = match self.entry() {
            Ok(e) => e,
            Err(err) => {
                self.error = Some(err.to_string());
                return;
            }
        };
        match backend.submit(&entry) {
            Ok(()) => {
                self.error = None;
                self.phase = FormPhase::Submitted;
            }
            Err(err) => {
                tracing::warn!(%err, "waitlist submission failed");
                self.error = Some(err.to_string());
            }
        }
    }

    /// Dialog closed: schedule the delayed reset.
    pub fn close(&mut self) {
        self.reset_in = Some(RESET_DELAY_SECS);
    }

    /// Advance the reset timer by `dt` seconds; clears the form when it
    /// expires.
    pub fn tick(&mut self, dt: f64) {
        if let Some(remaining) = self.reset_in {
            let remaining = remaining - dt.max(0.0);
            if remaining <= 0.0 {
                *self = Self::new();
            } else {
                self.reset_in = Some(remaining);
            }
        }
    }
}
