//! Image capture: turn a user-selected file into a transmittable data URI.

use crate::error::{AppError, AppResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Files handed over by a file picker or camera capture.
///
/// An empty selection means the picker was cancelled.
#[derive(Debug, Clone, Default)]
pub struct FileSelection {
    pub files: Vec<PathBuf>,
}

impl FileSelection {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    pub fn single(path: impl Into<PathBuf>) -> Self {
        Self {
            files: vec![path.into()],
        }
    }

    pub fn cancelled() -> Self {
        Self::default()
    }

    pub fn first(&self) -> Option<&Path> {
        self.files.first().map(PathBuf::as_path)
    }
}

/// An encoded image (`data:<mime>;base64,<payload>`).
///
/// Cheap to clone: the encoded text is shared.
#[derive(Clone, PartialEq, Eq)]
pub struct CapturedImage {
    data_uri: Arc<str>,
}

impl CapturedImage {
    pub fn from_bytes(bytes: &[u8], mime: &str) -> Self {
        let data_uri = format!("data:{};base64,{}", mime, STANDARD.encode(bytes));
        Self {
            data_uri: data_uri.into(),
        }
    }

    /// Wrap an existing data URI. Returns `None` unless it is a base64 data URI.
    pub fn from_data_uri(data_uri: &str) -> Option<Self> {
        if data_uri.starts_with("data:") && data_uri.contains(";base64,") {
            Some(Self {
                data_uri: data_uri.into(),
            })
        } else {
            None
        }
    }

    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }

    pub fn mime_type(&self) -> &str {
        self.data_uri
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .unwrap_or_default()
    }

    /// Size of the encoded payload in bytes.
    pub fn encoded_len(&self) -> usize {
        self.data_uri.len()
    }
}

// Images can be megabytes of base64; keep them out of debug output.
impl fmt::Debug for CapturedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedImage")
            .field("mime_type", &self.mime_type())
            .field("encoded_len", &self.encoded_len())
            .finish()
    }
}

/// Read the first selected file and encode it.
///
/// Returns `Ok(None)` when nothing was selected. Read failures surface as
/// `AppError::ImageRead`.
pub async fn capture_image(selection: &FileSelection) -> AppResult<Option<CapturedImage>> {
    let Some(path) = selection.first() else {
        debug!("Image selection cancelled, nothing to capture");
        return Ok(None);
    };

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        warn!("Failed to read image {}: {}", path.display(), e);
        AppError::ImageRead(e)
    })?;

    let mime = detect_mime(&bytes, path);
    debug!(
        "Captured {} ({}, {} bytes)",
        path.display(),
        mime,
        bytes.len()
    );
    Ok(Some(CapturedImage::from_bytes(&bytes, mime)))
}

/// Sniff the MIME type from magic bytes, then from the file extension.
fn detect_mime(bytes: &[u8], path: &Path) -> &'static str {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        return "image/png";
    }
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return "image/jpeg";
    }
    if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        return "image/gif";
    }
    if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return "image/webp";
    }
    if bytes.starts_with(b"BM") {
        return "image/bmp";
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        Some("heic") => "image/heic",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, bytes).expect("Failed to write fixture");
        path
    }

    // ==================== capture_image Tests ====================

    #[tokio::test]
    async fn test_capture_valid_file_produces_one_image() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "photo.png", &PNG_HEADER);

        let image = capture_image(&FileSelection::single(path))
            .await
            .expect("capture should succeed")
            .expect("an image should be produced");

        assert_eq!(image.mime_type(), "image/png");
        assert_eq!(image.data_uri(), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[tokio::test]
    async fn test_capture_cancelled_selection_is_silent() {
        let result = capture_image(&FileSelection::cancelled()).await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_capture_reads_only_first_file() {
        let dir = TempDir::new().unwrap();
        let first = write_file(&dir, "a.gif", b"GIF89a....");
        let second = write_file(&dir, "b.png", &PNG_HEADER);

        let image = capture_image(&FileSelection::new(vec![first, second]))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(image.mime_type(), "image/gif");
    }

    #[tokio::test]
    async fn test_capture_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("does-not-exist.jpg");

        let result = capture_image(&FileSelection::single(path)).await;
        assert!(matches!(result, Err(AppError::ImageRead(_))));
    }

    // ==================== MIME Detection Tests ====================

    #[test]
    fn test_detect_mime_prefers_magic_bytes() {
        let mime = detect_mime(&[0xFF, 0xD8, 0xFF, 0xE0], Path::new("mislabelled.png"));
        assert_eq!(mime, "image/jpeg");
    }

    #[test]
    fn test_detect_mime_webp() {
        let bytes = b"RIFF\x00\x00\x00\x00WEBPVP8 ";
        assert_eq!(detect_mime(bytes, Path::new("x")), "image/webp");
    }

    #[test]
    fn test_detect_mime_falls_back_to_extension() {
        assert_eq!(detect_mime(b"", Path::new("photo.JPG")), "image/jpeg");
        assert_eq!(detect_mime(b"<svg/>", Path::new("icon.svg")), "image/svg+xml");
    }

    #[test]
    fn test_detect_mime_unknown() {
        assert_eq!(
            detect_mime(b"hello", Path::new("notes.txt")),
            "application/octet-stream"
        );
    }

    // ==================== CapturedImage Tests ====================

    #[test]
    fn test_from_data_uri_validates_shape() {
        assert!(CapturedImage::from_data_uri("data:image/png;base64,AAAA").is_some());
        assert!(CapturedImage::from_data_uri("https://example.com/a.png").is_none());
        assert!(CapturedImage::from_data_uri("data:text/plain,hello").is_none());
    }

    #[test]
    fn test_debug_hides_payload() {
        let image = CapturedImage::from_bytes(&[1, 2, 3, 4, 5, 6], "image/png");
        let debug = format!("{:?}", image);
        assert!(debug.contains("image/png"));
        assert!(!debug.contains("AQIDBAUG"));
    }

    #[test]
    fn test_clones_share_payload() {
        let image = CapturedImage::from_bytes(&PNG_HEADER, "image/png");
        let clone = image.clone();
        assert_eq!(image, clone);
        assert!(std::ptr::eq(image.data_uri(), clone.data_uri()));
    }
}
