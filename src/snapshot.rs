use crate::document::Document;
use crate::error::SketchError;
use crate::raster;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use egui::{ColorImage, Rect};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;

/// Prefix of every captured canvas string
pub const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// An encoded copy of the canvas bitmap, captured after each completed
/// stroke. Survives app restarts via serde so the next session can replay it.
#[derive(Clone, serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    data_url: String,
}

impl Snapshot {
    /// Re-encode the current canvas to a portable PNG data URL. `replayed`
    /// is the snapshot restored at startup, if any, so its pixels are not
    /// lost from the capture chain.
    pub fn capture(
        document: &Document,
        canvas: Rect,
        replayed: Option<&Snapshot>,
    ) -> Result<Self, SketchError> {
        let width = canvas.width().round() as u32;
        let height = canvas.height().round() as u32;
        if width == 0 || height == 0 {
            return Err(SketchError::DegenerateCanvas(width, height));
        }

        let replayed_pixels = match replayed {
            Some(snapshot) => Some(snapshot.decode()?),
            None => None,
        };
        let bitmap = raster::rasterize(document, canvas, replayed_pixels.as_ref());

        let mut png = Vec::new();
        bitmap.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(Self {
            data_url: format!("{DATA_URL_PREFIX}{}", STANDARD.encode(&png)),
        })
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    /// Decode back to raw pixels for replay
    pub fn decode(&self) -> Result<RgbaImage, SketchError> {
        let encoded = self
            .data_url
            .strip_prefix(DATA_URL_PREFIX)
            .ok_or(SketchError::BadSnapshotUrl)?;
        let png = STANDARD.decode(encoded)?;
        Ok(image::load_from_memory(&png)?.to_rgba8())
    }

    /// Decode into an egui image for texture upload
    pub fn to_color_image(&self) -> Result<ColorImage, SketchError> {
        let bitmap = self.decode()?;
        let size = [bitmap.width() as usize, bitmap.height() as usize];
        Ok(ColorImage::from_rgba_unmultiplied(size, bitmap.as_raw()))
    }
}
