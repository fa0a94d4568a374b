//! Per-step dialoguer forms for the wizard.

use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input, Password, Select};

use crate::domain::{
    AppError, PRESET_COLORS, STYLE_CATALOG, WizardSession, WizardStep, find_preset,
};

use super::wizard::StepOutcome;

pub(super) fn api_step(session: &mut WizardSession) -> Result<StepOutcome, AppError> {
    println!("🔑 API Configuration");
    println!("Connect to Runware to generate logos. Get a free API key at https://runware.ai/");

    let prompt = if session.api_key.trim().is_empty() {
        "Runware API key".to_string()
    } else {
        "Runware API key (configured, leave blank to keep)".to_string()
    };

    let entered = match Password::new().with_prompt(prompt).allow_empty_password(true).interact() {
        Ok(value) => value,
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
            return Ok(StepOutcome::Exit);
        }
        Err(err) => {
            return Err(AppError::config_error(format!("Failed to read API key: {}", err)));
        }
    };

    if !entered.trim().is_empty() {
        session.api_key = entered.trim().to_string();
    }

    nav_menu(WizardStep::Api, "Continue to Brand Setup")
}

pub(super) fn brand_step(session: &mut WizardSession) -> Result<StepOutcome, AppError> {
    println!("✨ Brand Details");

    let Some(name) = prompt_text("Brand name", &session.profile.name)? else {
        return Ok(StepOutcome::Exit);
    };
    session.profile.name = name;

    let Some(vision) = prompt_text("Brand vision", &session.profile.vision)? else {
        return Ok(StepOutcome::Exit);
    };
    session.profile.vision = vision;

    nav_menu(WizardStep::Brand, "Continue to Style")
}

pub(super) fn style_step(session: &mut WizardSession) -> Result<StepOutcome, AppError> {
    println!("🖌️  Design Style");

    let items: Vec<String> = STYLE_CATALOG
        .iter()
        .map(|style| format!("{}: {}", style.name, style.description))
        .collect();
    let current = STYLE_CATALOG
        .iter()
        .position(|style| style.name == session.profile.style)
        .unwrap_or(0);

    let selection = match Select::new()
        .with_prompt("Select your style")
        .items(&items)
        .default(current)
        .interact()
    {
        Ok(index) => index,
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
            return Ok(StepOutcome::Exit);
        }
        Err(err) => {
            return Err(AppError::config_error(format!("Style selection failed: {}", err)));
        }
    };

    let chosen = &STYLE_CATALOG[selection];
    session.profile.style = chosen.name.to_string();
    println!("  {}", chosen.features.join(" · "));

    nav_menu(WizardStep::Style, "Continue to Colors")
}

pub(super) fn colors_step(session: &mut WizardSession) -> Result<StepOutcome, AppError> {
    println!("🎨 Color Palette");

    loop {
        let selected = if session.profile.colors.is_empty() {
            "none".to_string()
        } else {
            session.profile.colors.join(", ")
        };
        println!("Selected colors ({}): {}", session.profile.colors.len(), selected);

        let mut items: Vec<String> = PRESET_COLORS
            .iter()
            .map(|color| {
                let marker = if session.profile.has_color(color.name) { "x" } else { " " };
                format!("[{}] {} ({})", marker, color.name, color.hex)
            })
            .collect();
        items.push("Add a custom color".to_string());
        items.push("Remove a color".to_string());
        items.push("Done choosing colors".to_string());

        let selection = match Select::new()
            .with_prompt("Toggle a color")
            .items(&items)
            .default(items.len() - 1)
            .interact()
        {
            Ok(index) => index,
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                return Ok(StepOutcome::Exit);
            }
            Err(err) => {
                return Err(AppError::config_error(format!("Color selection failed: {}", err)));
            }
        };

        if let Some(preset) = PRESET_COLORS.get(selection) {
            session.profile.toggle_color(preset.name);
        } else if selection == PRESET_COLORS.len() {
            add_custom_color(session)?;
        } else if selection == PRESET_COLORS.len() + 1 {
            remove_color(session)?;
        } else {
            break;
        }
    }

    nav_menu(WizardStep::Colors, "Continue to Generate")
}

fn add_custom_color(session: &mut WizardSession) -> Result<(), AppError> {
    let name: String = match Input::new()
        .with_prompt("Color name (e.g., Gold, Navy)")
        .allow_empty(true)
        .interact_text()
    {
        Ok(value) => value,
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => return Ok(()),
        Err(err) => {
            return Err(AppError::config_error(format!("Failed to read color name: {}", err)));
        }
    };

    if !session.profile.add_custom_color(&name) && !name.trim().is_empty() {
        println!("⚠️  '{}' is already selected", name.trim());
    }
    Ok(())
}

fn remove_color(session: &mut WizardSession) -> Result<(), AppError> {
    if session.profile.colors.is_empty() {
        println!("No colors selected yet");
        return Ok(());
    }

    let items: Vec<String> = session
        .profile
        .colors
        .iter()
        .map(|name| match find_preset(name) {
            Some(preset) => format!("{} ({})", preset.name, preset.hex),
            None => format!("{} (custom)", name),
        })
        .collect();

    let selection = match Select::new().with_prompt("Remove which color").items(&items).interact()
    {
        Ok(index) => index,
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => return Ok(()),
        Err(err) => {
            return Err(AppError::config_error(format!("Color selection failed: {}", err)));
        }
    };

    let name = session.profile.colors[selection].clone();
    session.profile.remove_color(&name);
    Ok(())
}

fn prompt_text(prompt: &str, current: &str) -> Result<Option<String>, AppError> {
    let result = Input::new()
        .with_prompt(prompt)
        .default(current.to_string())
        .allow_empty(true)
        .interact_text();
    interruptible(result, prompt)
}

/// Maps a prompt result so Ctrl-C becomes `Ok(None)` rather than an error,
/// letting the caller exit the wizard cleanly.
fn interruptible<T>(
    result: Result<T, DialoguerError>,
    what: &str,
) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::config_error(format!("Failed to read {}: {}", what, err))),
    }
}

/// Standard end-of-step navigation menu.
pub(super) fn nav_menu(
    step: WizardStep,
    continue_label: &str,
) -> Result<StepOutcome, AppError> {
    let has_back = step.prev().is_some();

    let mut items: Vec<String> = vec![continue_label.to_string()];
    if has_back {
        items.push("Back".to_string());
    }
    items.push("Jump to a step".to_string());
    items.push("Exit".to_string());

    let selection =
        match Select::new().with_prompt("Next").items(&items).default(0).interact() {
            Ok(index) => index,
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                return Ok(StepOutcome::Exit);
            }
            Err(err) => {
                return Err(AppError::config_error(format!("Navigation failed: {}", err)));
            }
        };

    let back_index = 1;
    let jump_index = if has_back { 2 } else { 1 };

    if selection == 0 {
        Ok(StepOutcome::Continue)
    } else if has_back && selection == back_index {
        Ok(StepOutcome::Back)
    } else if selection == jump_index {
        jump_menu()
    } else {
        Ok(StepOutcome::Exit)
    }
}

/// Persistent step list: direct navigation to any step, no re-validation.
pub(super) fn jump_menu() -> Result<StepOutcome, AppError> {
    let items: Vec<String> = WizardStep::ALL
        .iter()
        .map(|step| format!("{}: {}", step.label(), step.description()))
        .collect();

    let selection =
        match Select::new().with_prompt("Go to step").items(&items).default(0).interact() {
            Ok(index) => index,
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                return Ok(StepOutcome::Exit);
            }
            Err(err) => {
                return Err(AppError::config_error(format!("Navigation failed: {}", err)));
            }
        };

    Ok(StepOutcome::Jump(WizardStep::ALL[selection]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn interruptible_passes_values_through() {
        let result: Result<&str, DialoguerError> = Ok("Nimbus");
        assert_eq!(interruptible(result, "Brand name").unwrap(), Some("Nimbus"));
    }

    #[test]
    fn interruptible_turns_ctrl_c_into_none() {
        let err = DialoguerError::from(io::Error::from(ErrorKind::Interrupted));
        let result: Result<String, DialoguerError> = Err(err);
        assert_eq!(interruptible(result, "Brand name").unwrap(), None);
    }

    #[test]
    fn interruptible_reports_other_io_errors() {
        let err = DialoguerError::from(io::Error::from(ErrorKind::BrokenPipe));
        let result: Result<String, DialoguerError> = Err(err);
        let message = interruptible(result, "Brand vision").unwrap_err().to_string();
        assert!(message.contains("Brand vision"));
    }
}
