use crate::background::Background;
use crate::command::Command;
use crate::error::SketchError;
use eframe::egui;

/// Accepts image files dropped onto the window and turns them into
/// background-change commands.
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self {
            dropped_files: Vec::new(),
        }
    }

    /// Pull any newly dropped files out of the UI context.
    /// Returns true if new files arrived.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        let mut new_dropped_files = false;

        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                self.dropped_files = i.raw.dropped_files.clone();
                new_dropped_files = true;
            }
        });

        new_dropped_files
    }

    /// Process the dropped files and return commands to execute. A later
    /// drop simply replaces the background of an earlier one.
    pub fn process_dropped_files(&mut self) -> Vec<Command> {
        let mut commands = Vec::new();

        for file in self.dropped_files.drain(..) {
            let file_name = if let Some(path) = &file.path {
                path.display().to_string()
            } else if !file.name.is_empty() {
                file.name.clone()
            } else {
                "unknown".to_owned()
            };

            if !is_image_file(&file) {
                log::warn!("dropped file is not a supported image type: {file_name}");
                continue;
            }

            match load_background(&file) {
                Ok(background) => {
                    log::info!(
                        "loaded background from {file_name}: {}x{}",
                        background.width(),
                        background.height()
                    );
                    commands.push(Command::SetBackground(background.into()));
                }
                Err(err) => log::error!("failed to load {file_name}: {err}"),
            }
        }

        commands
    }

    /// Overlay shown while files are dragged over the window
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, Id, LayerId, Order, TextStyle};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            "Drop image to set background",
            ctx.style()
                .text_styles
                .get(&TextStyle::Heading)
                .cloned()
                .unwrap_or_else(|| egui::FontId::proportional(24.0)),
            Color32::WHITE,
        );
    }
}

impl Default for FileHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if a file is an image based on MIME type or extension
fn is_image_file(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        file.mime.starts_with("image/")
    } else if let Some(path) = &file.path {
        path.extension().is_some_and(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp")
        })
    } else {
        false
    }
}

/// Decode a dropped file into a background image
fn load_background(file: &egui::DroppedFile) -> Result<Background, SketchError> {
    if let Some(bytes) = &file.bytes {
        log::debug!("decoding image from memory ({} bytes)", bytes.len());
        return Background::from_encoded_bytes(bytes);
    }

    // For native platforms we can load the file from its path
    #[cfg(not(target_arch = "wasm32"))]
    if let Some(path) = &file.path {
        log::debug!("decoding image from path: {}", path.display());
        let bytes = std::fs::read(path)
            .map_err(|err| SketchError::ImageDecode(image::ImageError::IoError(err)))?;
        return Background::from_encoded_bytes(&bytes);
    }

    Err(SketchError::EmptyUpload)
}
