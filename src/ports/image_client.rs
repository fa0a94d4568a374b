//! Image generation client port definition.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{AppError, OutputFormat};

/// Request for exactly one image from the remote service.
#[derive(Debug, Clone)]
pub struct ImageRequest {
    /// Full prompt text.
    pub prompt: String,
    /// Requested output format.
    pub output_format: OutputFormat,
}

/// One generated image, addressed by a resolvable URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub url: String,
}

/// Port for remote image generation.
///
/// One call maps to one remote request producing one image URL. Failures
/// surface unchanged as `AppError::RemoteGeneration`; retry behavior is
/// deliberately absent.
pub trait ImageClient {
    fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage, AppError>;
}

/// Mock client for exercising the wizard without API calls.
#[derive(Debug, Default)]
pub struct MockImageClient {
    calls: AtomicUsize,
}

impl ImageClient for MockImageClient {
    fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage, AppError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        println!("=== MOCK MODE ===");
        println!("Would request one {} image from Runware:", request.output_format.as_str());
        println!("  Prompt length: {} chars", request.prompt.len());

        Ok(GeneratedImage { url: format!("mock://logo-{}.{}", call, request.output_format.extension()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_client_numbers_results_in_call_order() {
        let client = MockImageClient::default();
        let request =
            ImageRequest { prompt: "p".to_string(), output_format: OutputFormat::Webp };
        assert_eq!(client.generate(&request).unwrap().url, "mock://logo-1.webp");
        assert_eq!(client.generate(&request).unwrap().url, "mock://logo-2.webp");
    }
}
