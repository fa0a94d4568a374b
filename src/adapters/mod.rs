pub mod logo_download;
pub mod runware_http;

pub use logo_download::HttpLogoDownloader;
pub use runware_http::HttpImageClient;
