//! Interactive wizard loop.
//!
//! Drives the session state machine one step at a time. All business logic
//! lives in the domain and command modules; this loop only renders the
//! current step and applies the outcome the user chose.

use crate::domain::{AppConfig, AppError, WizardSession, WizardStep, credential_from_env};

use super::forms;
use super::results;

/// What the user chose to do after a step's form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum StepOutcome {
    Continue,
    Back,
    Jump(WizardStep),
    Exit,
}

pub(super) fn run_wizard(config: &AppConfig, mock: bool) -> Result<(), AppError> {
    let mut session = WizardSession::new();
    if let Some(key) = credential_from_env() {
        session.api_key = key;
    }

    println!("🎨 AI Logo Generator");

    loop {
        println!();
        let outcome = match session.step() {
            WizardStep::Api => forms::api_step(&mut session)?,
            WizardStep::Brand => forms::brand_step(&mut session)?,
            WizardStep::Style => forms::style_step(&mut session)?,
            WizardStep::Colors => forms::colors_step(&mut session)?,
            WizardStep::Generate => results::generate_step(&mut session, config, mock)?,
        };

        match outcome {
            StepOutcome::Continue => {
                if session.advance().is_none() {
                    if let Some(missing) = session.missing_requirement() {
                        println!("⚠️  Enter {} to continue", missing);
                    }
                }
            }
            StepOutcome::Back => {
                session.back();
            }
            StepOutcome::Jump(step) => session.jump_to(step),
            StepOutcome::Exit => break,
        }
    }

    Ok(())
}
