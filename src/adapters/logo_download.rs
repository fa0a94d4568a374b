//! Logo download adapter using reqwest.

use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::domain::AppError;
use crate::ports::LogoDownloader;

/// Fetches a generated image URL and writes the bytes to a local file.
#[derive(Debug, Clone)]
pub struct HttpLogoDownloader {
    client: Client,
}

impl HttpLogoDownloader {
    pub fn new(timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl LogoDownloader for HttpLogoDownloader {
    fn download(&self, url: &str, target: &Path) -> Result<(), AppError> {
        let response = self.client.get(url).send().map_err(|e| AppError::Download {
            url: url.to_string(),
            message: format!("HTTP request failed: {}", e),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Download {
                url: url.to_string(),
                message: format!("Server responded with status {}", status.as_u16()),
            });
        }

        let bytes = response.bytes().map_err(|e| AppError::Download {
            url: url.to_string(),
            message: format!("Failed to read response body: {}", e),
        })?;

        if bytes.is_empty() {
            return Err(AppError::Download {
                url: url.to_string(),
                message: "Empty response body".to_string(),
            });
        }

        fs::write(target, &bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downloads_bytes_to_target_file() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/logo.webp")
            .with_status(200)
            .with_header("content-type", "image/webp")
            .with_body(b"RIFF....WEBP")
            .create();

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("Acme_logo_1.webp");

        let downloader = HttpLogoDownloader::new(1).unwrap();
        downloader.download(&format!("{}/logo.webp", server.url()), &target).unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"RIFF....WEBP");
    }

    #[test]
    fn rejects_error_status() {
        let mut server = mockito::Server::new();
        let _m = server.mock("GET", "/gone.webp").with_status(404).create();

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.webp");

        let downloader = HttpLogoDownloader::new(1).unwrap();
        let err = downloader.download(&format!("{}/gone.webp", server.url()), &target).unwrap_err();
        assert!(matches!(err, AppError::Download { .. }));
        assert!(!target.exists());
    }

    #[test]
    fn rejects_empty_body() {
        let mut server = mockito::Server::new();
        let _m = server.mock("GET", "/empty.webp").with_status(200).with_body("").create();

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.webp");

        let downloader = HttpLogoDownloader::new(1).unwrap();
        let err =
            downloader.download(&format!("{}/empty.webp", server.url()), &target).unwrap_err();
        match err {
            AppError::Download { message, .. } => assert_eq!(message, "Empty response body"),
            other => panic!("unexpected error variant: {}", other),
        }
    }
}
