pub mod brand;
pub mod config;
pub mod error;
pub mod generation;
pub mod palette;
pub mod prompt;
pub mod session;
pub mod style;

pub use brand::BrandProfile;
pub use config::{API_KEY_ENV, AppConfig, GenerationConfig, RunwareApiConfig, credential_from_env};
pub use error::AppError;
pub use generation::{GenerationRequest, GenerationResult, OutputFormat, logo_file_name};
pub use palette::{PRESET_COLORS, PresetColor, find_preset};
pub use prompt::build_prompt;
pub use session::{WizardSession, WizardStep};
pub use style::{STYLE_CATALOG, StyleOption, find_style};
