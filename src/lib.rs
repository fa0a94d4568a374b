//! logoforge: generate brand logos through the Runware image API from an
//! interactive terminal wizard.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

pub use adapters::{HttpImageClient, HttpLogoDownloader};
pub use app::commands::{download_logo, plan_request, run_generation};
pub use domain::{
    AppConfig, AppError, BrandProfile, GenerationConfig, GenerationRequest, GenerationResult,
    OutputFormat, WizardSession, WizardStep, build_prompt,
};
pub use ports::{ImageClient, ImageRequest, LogoDownloader, MockImageClient};
