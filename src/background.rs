use crate::error::SketchError;
use egui::{ColorImage, Pos2, Rect, Vec2};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// Static counter so the renderer can tell one upload from the next
static NEXT_BACKGROUND_ID: AtomicUsize = AtomicUsize::new(1);

/// A decoded background image, shared immutably once uploaded
#[derive(Clone)]
pub struct Background {
    id: usize,
    data: Vec<u8>, // raw RGBA, row-major
    width: u32,
    height: u32,
}

// Define a reference-counted type alias for Background
pub type BackgroundRef = Arc<Background>;

impl Background {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        let id = NEXT_BACKGROUND_ID.fetch_add(1, Ordering::SeqCst);
        Self {
            id,
            data,
            width,
            height,
        }
    }

    pub fn new_ref(data: Vec<u8>, width: u32, height: u32) -> BackgroundRef {
        Arc::new(Self::new(data, width, height))
    }

    /// Decode uploaded image bytes (PNG, JPEG, ...) into a background
    pub fn from_encoded_bytes(bytes: &[u8]) -> Result<Self, SketchError> {
        let decoded = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = decoded.dimensions();
        Ok(Self::new(decoded.into_raw(), width, height))
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// The centered rect the image is drawn into, scaled to fit the canvas
    /// while preserving its aspect ratio.
    pub fn fit_rect(&self, canvas: Rect) -> Rect {
        let scale = (canvas.width() / self.width as f32)
            .min(canvas.height() / self.height as f32);
        let fitted = self.size() * scale;
        let min = Pos2::new(
            canvas.min.x + (canvas.width() - fitted.x) / 2.0,
            canvas.min.y + (canvas.height() - fitted.y) / 2.0,
        );
        Rect::from_min_size(min, fitted)
    }

    /// Convert to an egui image for texture upload
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [self.width as usize, self.height as usize],
            &self.data,
        )
    }
}
