//! Download command: map a result URL to a named local file.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, OutputFormat, logo_file_name};
use crate::ports::LogoDownloader;

/// Download one result URL into `dir`, named after the brand and the
/// zero-based result index. Returns the written path.
pub fn download_logo<D: LogoDownloader>(
    downloader: &D,
    brand_name: &str,
    url: &str,
    index: usize,
    format: OutputFormat,
    dir: &Path,
) -> Result<PathBuf, AppError> {
    let target = dir.join(logo_file_name(brand_name, index, format));
    downloader.download(url, &target)?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingDownloader {
        requests: RefCell<Vec<(String, PathBuf)>>,
    }

    impl LogoDownloader for RecordingDownloader {
        fn download(&self, url: &str, target: &Path) -> Result<(), AppError> {
            self.requests.borrow_mut().push((url.to_string(), target.to_path_buf()));
            Ok(())
        }
    }

    #[test]
    fn derives_target_from_brand_and_index() {
        let downloader = RecordingDownloader { requests: RefCell::new(Vec::new()) };
        let path = download_logo(
            &downloader,
            "Acme Tools",
            "https://im.runware.ai/a.webp",
            1,
            OutputFormat::Webp,
            Path::new("/tmp/out"),
        )
        .unwrap();

        assert_eq!(path, PathBuf::from("/tmp/out/Acme_Tools_logo_2.webp"));
        let requests = downloader.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "https://im.runware.ai/a.webp");
    }
}
