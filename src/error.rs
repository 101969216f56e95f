use thiserror::Error;

/// Errors that can occur while loading a background image or working with snapshots
#[derive(Error, Debug)]
pub enum SketchError {
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),
    #[error("dropped file contained no data")]
    EmptyUpload,
    #[error("snapshot payload is not a PNG data URL")]
    BadSnapshotUrl,
    #[error("failed to decode snapshot base64: {0}")]
    SnapshotBase64(#[from] base64::DecodeError),
    #[error("canvas size {0}x{1} is too small to capture")]
    DegenerateCanvas(u32, u32),
}
