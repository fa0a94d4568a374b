//! Generation request/result domain models.

use serde::Deserialize;

/// Image output format requested from the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OutputFormat {
    #[default]
    Webp,
    Png,
}

impl OutputFormat {
    /// Wire representation expected by the Runware API.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Webp => "WEBP",
            OutputFormat::Png => "PNG",
        }
    }

    /// File extension for downloaded results.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Webp => "webp",
            OutputFormat::Png => "png",
        }
    }

    /// Parse a user-supplied format name (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "WEBP" => Some(OutputFormat::Webp),
            "PNG" => Some(OutputFormat::Png),
            _ => None,
        }
    }
}

/// Parameters of one orchestration run. Built fresh per attempt and
/// immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Full prompt text sent with every call of the run.
    pub prompt: String,
    /// Number of images the run must produce.
    pub desired_count: usize,
    /// Output format for every image in the run.
    pub output_format: OutputFormat,
}

/// Ordered image URLs produced by one successful orchestration run.
///
/// A new result replaces any prior one wholesale; results never accumulate
/// across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub urls: Vec<String>,
}

impl GenerationResult {
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// File name for a downloaded result: brand name with whitespace runs
/// collapsed to underscores, one-based index, extension from the format.
pub fn logo_file_name(brand_name: &str, index: usize, format: OutputFormat) -> String {
    let stem: String = brand_name.split_whitespace().collect::<Vec<_>>().join("_");
    let stem = if stem.is_empty() { "logo".to_string() } else { stem };
    format!("{}_logo_{}.{}", stem, index + 1, format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_strings_round_trip() {
        assert_eq!(OutputFormat::Webp.as_str(), "WEBP");
        assert_eq!(OutputFormat::Png.extension(), "png");
        assert_eq!(OutputFormat::parse("webp"), Some(OutputFormat::Webp));
        assert_eq!(OutputFormat::parse(" PNG "), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::parse("jpeg"), None);
    }

    #[test]
    fn file_name_collapses_whitespace() {
        assert_eq!(logo_file_name("Acme Tools", 0, OutputFormat::Webp), "Acme_Tools_logo_1.webp");
        assert_eq!(logo_file_name("  Acme   Co ", 1, OutputFormat::Png), "Acme_Co_logo_2.png");
    }

    #[test]
    fn file_name_for_blank_brand_falls_back() {
        assert_eq!(logo_file_name("", 2, OutputFormat::Webp), "logo_logo_3.webp");
    }
}
