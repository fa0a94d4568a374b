//! Generate screen: configuration summary, prompt override, generation run,
//! and result downloads.

use std::io::ErrorKind;
use std::path::Path;

use dialoguer::{Editor, Error as DialoguerError, Select};

use crate::adapters::{HttpImageClient, HttpLogoDownloader};
use crate::app::commands::{download_logo, plan_request, run_generation};
use crate::domain::{AppConfig, AppError, GenerationResult, WizardSession, WizardStep};
use crate::ports::MockImageClient;

use super::forms;
use super::wizard::StepOutcome;

pub(super) fn generate_step(
    session: &mut WizardSession,
    config: &AppConfig,
    mock: bool,
) -> Result<StepOutcome, AppError> {
    print_summary(session, config);

    let count = config.generation.effective_count();
    let has_result = session.result().is_some();

    let mut items: Vec<String> = Vec::new();
    if has_result {
        items.push(format!("Regenerate {} logos", count));
        items.push("Download one logo".to_string());
        items.push("Download all logos".to_string());
    } else {
        items.push(format!("Generate {} logos", count));
    }
    items.push("Preview prompt".to_string());
    items.push("Edit custom prompt".to_string());
    items.push("Back".to_string());
    items.push("Jump to a step".to_string());
    items.push("Exit".to_string());

    let selection = match Select::new()
        .with_prompt("What next")
        .items(&items)
        .default(0)
        .interact()
    {
        Ok(index) => index,
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
            return Ok(StepOutcome::Exit);
        }
        Err(err) => return Err(AppError::config_error(format!("Selection failed: {}", err))),
    };

    // Download entries only exist once a result set is shown; later entries
    // shift by two without them.
    let action = match (has_result, selection) {
        (true, n) => n,
        (false, 0) => 0,
        (false, n) => n + 2,
    };
    match action {
        0 => run_once(session, config, mock),
        1 => download_one(session, config)?,
        2 => download_all(session, config)?,
        3 => preview_prompt(session, config),
        4 => edit_custom_prompt(session)?,
        5 => return Ok(StepOutcome::Back),
        6 => return forms::jump_menu(),
        _ => return Ok(StepOutcome::Exit),
    }

    // Stay on the generate screen after an action.
    Ok(StepOutcome::Jump(WizardStep::Generate))
}

fn print_summary(session: &WizardSession, config: &AppConfig) {
    println!("👁️  Generate Logos");
    println!("  Brand:  {}", session.profile.name);
    println!("  Vision: {}", session.profile.vision);
    println!("  Style:  {}", session.profile.style);
    println!("  Colors: {}", session.profile.colors.join(", "));
    println!(
        "  Output: {} logos as {}",
        config.generation.effective_count(),
        config.generation.output_format.as_str()
    );
    if !session.custom_prompt.trim().is_empty() {
        println!("  Prompt: custom override active");
    }

    if let Some(result) = session.result() {
        println!();
        println!("Generated logos:");
        for (index, url) in result.urls.iter().enumerate() {
            println!("  {}. {}", index + 1, url);
        }
    }
}

fn run_once(session: &mut WizardSession, config: &AppConfig, mock: bool) {
    let override_prompt =
        (!session.custom_prompt.trim().is_empty()).then(|| session.custom_prompt.clone());
    let request =
        plan_request(&session.profile, override_prompt.as_deref(), &config.generation);

    if let Err(err) = session.begin_generation(request.clone()) {
        eprintln!("⚠️  {}", err);
        return;
    }

    println!(
        "✨ Generating {} unique designs for {}...",
        request.desired_count, session.profile.name
    );

    // Execute with the appropriate client.
    let outcome = if mock {
        let client = MockImageClient::default();
        run_generation(&client, &session.api_key, &request)
    } else {
        HttpImageClient::new(session.api_key.clone(), &config.runware)
            .and_then(|client| run_generation(&client, &session.api_key, &request))
    };

    match outcome {
        Ok(result) => {
            let generated = result.len();
            session.complete_generation(result);
            println!("✅ {} unique logos have been created for your brand", generated);
        }
        Err(err) => {
            session.fail_generation();
            eprintln!("⚠️  {}", err);
            eprintln!("   Check your API key and try again");
        }
    }
}

fn preview_prompt(session: &WizardSession, config: &AppConfig) {
    let override_prompt =
        (!session.custom_prompt.trim().is_empty()).then(|| session.custom_prompt.clone());
    let request =
        plan_request(&session.profile, override_prompt.as_deref(), &config.generation);
    println!();
    println!("{}", request.prompt);
}

fn edit_custom_prompt(session: &mut WizardSession) -> Result<(), AppError> {
    let edited = Editor::new()
        .edit(&session.custom_prompt)
        .map_err(|err| AppError::config_error(format!("Failed to edit prompt: {}", err)))?;

    match edited {
        Some(text) if text.trim().is_empty() => {
            session.custom_prompt.clear();
            println!("Custom prompt cleared; the generated prompt will be used");
        }
        Some(text) => {
            session.custom_prompt = text;
            println!("✅ Custom prompt saved");
        }
        None => {}
    }
    Ok(())
}

fn download_one(session: &WizardSession, config: &AppConfig) -> Result<(), AppError> {
    let Some(result) = session.result() else {
        println!("No logos generated yet");
        return Ok(());
    };

    let items: Vec<String> =
        result.urls.iter().enumerate().map(|(i, url)| format!("Logo {}: {}", i + 1, url)).collect();

    let selection = match Select::new().with_prompt("Download which logo").items(&items).interact()
    {
        Ok(index) => index,
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => return Ok(()),
        Err(err) => return Err(AppError::config_error(format!("Selection failed: {}", err))),
    };

    save_logos(session, config, result, selection..selection + 1)
}

fn download_all(session: &WizardSession, config: &AppConfig) -> Result<(), AppError> {
    let Some(result) = session.result() else {
        println!("No logos generated yet");
        return Ok(());
    };

    save_logos(session, config, result, 0..result.len())
}

fn save_logos(
    session: &WizardSession,
    config: &AppConfig,
    result: &GenerationResult,
    range: std::ops::Range<usize>,
) -> Result<(), AppError> {
    let downloader = HttpLogoDownloader::new(config.runware.timeout_secs)?;

    for index in range {
        let url = &result.urls[index];
        match download_logo(
            &downloader,
            &session.profile.name,
            url,
            index,
            config.generation.output_format,
            Path::new("."),
        ) {
            Ok(path) => println!("✅ Saved {}", path.display()),
            Err(err) => eprintln!("⚠️  {}", err),
        }
    }
    Ok(())
}
