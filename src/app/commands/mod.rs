pub mod download;
pub mod generate;

pub use download::download_logo;
pub use generate::{plan_request, run_generation};
