//! Generation orchestrator: one run, N sequential single-image calls,
//! all-or-nothing result.

use crate::domain::{
    AppError, BrandProfile, GenerationConfig, GenerationRequest, GenerationResult, build_prompt,
};
use crate::ports::{ImageClient, ImageRequest};

/// Resolve the request for a run: a non-blank override prompt always wins
/// over a freshly built one.
pub fn plan_request(
    profile: &BrandProfile,
    override_prompt: Option<&str>,
    config: &GenerationConfig,
) -> GenerationRequest {
    let count = config.effective_count();
    let prompt = match override_prompt.map(str::trim) {
        Some(custom) if !custom.is_empty() => custom.to_string(),
        _ => build_prompt(profile, count, config.output_format),
    };

    GenerationRequest { prompt, desired_count: count, output_format: config.output_format }
}

/// Execute one generation run.
///
/// Fails fast on an empty credential before touching the client. Issues
/// `desired_count` strictly sequential calls, each for exactly one image,
/// collecting URLs in call order. Any individual failure aborts the run and
/// discards the partial sequence; partial results never reach the caller.
///
/// Mutates no session state; storing the result is the caller's job.
pub fn run_generation<C: ImageClient>(
    client: &C,
    credential: &str,
    request: &GenerationRequest,
) -> Result<GenerationResult, AppError> {
    if credential.trim().is_empty() {
        return Err(AppError::MissingCredential);
    }

    let mut urls = Vec::with_capacity(request.desired_count);
    for index in 0..request.desired_count {
        let call = ImageRequest {
            prompt: request.prompt.clone(),
            output_format: request.output_format,
        };
        let image = client.generate(&call).map_err(|err| AppError::GenerationFailed {
            index: index + 1,
            requested: request.desired_count,
            message: err.to_string(),
        })?;
        urls.push(image.url);
    }

    Ok(GenerationResult { urls })
}
