//! Wizard session state machine.

use crate::domain::brand::BrandProfile;
use crate::domain::error::AppError;
use crate::domain::generation::{GenerationRequest, GenerationResult};

/// One named stage in the fixed wizard sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Api,
    Brand,
    Style,
    Colors,
    Generate,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Api,
        WizardStep::Brand,
        WizardStep::Style,
        WizardStep::Colors,
        WizardStep::Generate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Api => "API Setup",
            WizardStep::Brand => "Brand",
            WizardStep::Style => "Style",
            WizardStep::Colors => "Colors",
            WizardStep::Generate => "Generate",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WizardStep::Api => "Configure API key",
            WizardStep::Brand => "Brand details",
            WizardStep::Style => "Design style",
            WizardStep::Colors => "Color palette",
            WizardStep::Generate => "Create logos",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|step| *step == self).unwrap_or(0)
    }

    /// Next step in sequence, if any.
    pub fn next(self) -> Option<WizardStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Previous step in sequence, if any.
    pub fn prev(self) -> Option<WizardStep> {
        self.index().checked_sub(1).and_then(|i| Self::ALL.get(i)).copied()
    }
}

/// Mutable state of one interactive session.
///
/// Single-owner aggregate: created with defaults at session start, mutated
/// only through these methods, discarded when the session ends. Nothing is
/// persisted.
#[derive(Debug, Clone, Default)]
pub struct WizardSession {
    /// Brand parameters under edit.
    pub profile: BrandProfile,
    /// Runware API credential, masked in the UI.
    pub api_key: String,
    /// Optional full prompt override. When non-blank it takes precedence
    /// over a freshly built prompt.
    pub custom_prompt: String,
    step: WizardStep,
    last_request: Option<GenerationRequest>,
    result: Option<GenerationResult>,
    in_flight: bool,
}

impl WizardSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current wizard step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Last successful result, if any.
    pub fn result(&self) -> Option<&GenerationResult> {
        self.result.as_ref()
    }

    /// Request recorded for the most recent run attempt.
    pub fn last_request(&self) -> Option<&GenerationRequest> {
        self.last_request.as_ref()
    }

    /// Whether a generation run is currently in progress.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// The requirement blocking `advance()` from the current step, if any.
    pub fn missing_requirement(&self) -> Option<&'static str> {
        match self.step() {
            WizardStep::Api if self.api_key.trim().is_empty() => Some("an API key"),
            WizardStep::Brand if self.profile.name.trim().is_empty() => Some("a brand name"),
            WizardStep::Brand if self.profile.vision.trim().is_empty() => Some("a brand vision"),
            WizardStep::Style if self.profile.style.trim().is_empty() => Some("a design style"),
            WizardStep::Colors if self.profile.colors.is_empty() => {
                Some("at least one color")
            }
            _ => None,
        }
    }

    /// Move to the next step if the current step's requirements are met.
    ///
    /// Returns the new step on success; `None` leaves state unchanged
    /// (requirement missing, or already on the final step).
    pub fn advance(&mut self) -> Option<WizardStep> {
        if self.missing_requirement().is_some() {
            return None;
        }
        let next = self.step.next()?;
        self.step = next;
        Some(next)
    }

    /// Move to the previous step unconditionally. No-op on the first step.
    pub fn back(&mut self) -> Option<WizardStep> {
        let prev = self.step.prev()?;
        self.step = prev;
        Some(prev)
    }

    /// Navigate directly to any step without re-validating prior steps.
    pub fn jump_to(&mut self, step: WizardStep) {
        self.step = step;
    }

    /// Mark a generation run as started. Fails if one is already in flight.
    pub fn begin_generation(&mut self, request: GenerationRequest) -> Result<(), AppError> {
        if self.in_flight {
            return Err(AppError::GenerationInFlight);
        }
        self.in_flight = true;
        self.last_request = Some(request);
        Ok(())
    }

    /// Store a completed result, replacing any prior one wholesale.
    pub fn complete_generation(&mut self, result: GenerationResult) {
        self.result = Some(result);
        self.in_flight = false;
    }

    /// Clear the in-flight flag after a failed run. Any prior result stays
    /// untouched.
    pub fn fail_generation(&mut self) {
        self.in_flight = false;
    }
}
