pub mod downloader;
pub mod image_client;

pub use downloader::LogoDownloader;
pub use image_client::{GeneratedImage, ImageClient, ImageRequest, MockImageClient};
