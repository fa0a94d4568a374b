//! Logo download port definition.

use std::path::Path;

use crate::domain::AppError;

/// Port for fetching a generated image URL to a local file.
pub trait LogoDownloader {
    fn download(&self, url: &str, target: &Path) -> Result<(), AppError>;
}
