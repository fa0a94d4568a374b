//! Runware API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::domain::{AppError, RunwareApiConfig};
use crate::ports::{GeneratedImage, ImageClient, ImageRequest};

const DEFAULT_STATUS_MESSAGE: &str = "Runware API request failed";
const MODEL: &str = "runware:100@1";
const IMAGE_SIZE: u32 = 1024;

/// HTTP transport for the Runware REST task API.
///
/// Each call posts one authentication task plus one single-image inference
/// task. No retry, no backoff; failures propagate unchanged to the caller.
#[derive(Clone)]
pub struct HttpImageClient {
    api_key: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpImageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpImageClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpImageClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &RunwareApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::RemoteGeneration {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { api_key, api_url: config.api_url.clone(), client })
    }

    fn send_request(&self, task: &InferenceTask) -> Result<GeneratedImage, AppError> {
        let auth = AuthenticationTask { task_type: "authentication", api_key: &self.api_key };
        let response = self
            .client
            .post(self.api_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(&(auth, task))
            .send()
            .map_err(|e| AppError::RemoteGeneration {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let api_response: ApiResponse =
                serde_json::from_str(&body_text).map_err(|e| AppError::RemoteGeneration {
                    message: format!("Failed to parse response: {}", e),
                    status: Some(status.as_u16()),
                })?;

            let url = api_response
                .data
                .into_iter()
                .find_map(|result| result.image_url)
                .ok_or_else(|| AppError::RemoteGeneration {
                    message: "No image URL in response".into(),
                    status: Some(status.as_u16()),
                })?;

            return Ok(GeneratedImage { url });
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::RemoteGeneration { message, status: Some(status.as_u16()) })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthenticationTask<'a> {
    task_type: &'static str,
    api_key: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InferenceTask {
    task_type: &'static str,
    task_uuid: String,
    positive_prompt: String,
    model: &'static str,
    number_results: u8,
    output_format: &'static str,
    width: u32,
    height: u32,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    data: Vec<TaskResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskResult {
    #[serde(default)]
    image_url: Option<String>,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("errors")
        .and_then(|errors| errors.get(0))
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl ImageClient for HttpImageClient {
    fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage, AppError> {
        let task = InferenceTask {
            task_type: "imageInference",
            task_uuid: Uuid::new_v4().to_string(),
            positive_prompt: request.prompt.clone(),
            model: MODEL,
            number_results: 1,
            output_format: request.output_format.as_str(),
            width: IMAGE_SIZE,
            height: IMAGE_SIZE,
        };

        self.send_request(&task)
    }
}
