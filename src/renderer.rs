use crate::document::Document;
use crate::snapshot::Snapshot;
use crate::stroke::MutableStroke;
use egui::{self, Color32, Pos2, Rect, TextureHandle, TextureOptions};

const UV_FULL: Rect = Rect {
    min: Pos2::ZERO,
    max: Pos2::new(1.0, 1.0),
};

/// Draws the canvas each frame: white base, fitted background, replayed
/// snapshot, finished strokes, then the in-progress stroke preview.
pub struct Renderer {
    ctx: egui::Context,
    // Uploaded background texture, keyed by the background's id
    background_texture: Option<(usize, TextureHandle)>,
    snapshot_texture: Option<TextureHandle>,
    // An undecodable replay is reported once, then left alone
    snapshot_decode_failed: bool,
}

impl Renderer {
    /// Called once before the first frame
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            ctx: cc.egui_ctx.clone(),
            background_texture: None,
            snapshot_texture: None,
            snapshot_decode_failed: false,
        }
    }

    pub fn render(
        &mut self,
        painter: &egui::Painter,
        rect: Rect,
        document: &Document,
        replayed: Option<&Snapshot>,
        live_stroke: Option<&MutableStroke>,
    ) {
        painter.rect_filled(rect, 0.0, Color32::WHITE);

        if let Some(background) = document.background() {
            let needs_upload = self
                .background_texture
                .as_ref()
                .is_none_or(|(id, _)| *id != background.id());
            if needs_upload {
                let texture = self.ctx.load_texture(
                    "background",
                    background.to_color_image(),
                    TextureOptions::LINEAR,
                );
                self.background_texture = Some((background.id(), texture));
            }
            if let Some((_, texture)) = &self.background_texture {
                painter.image(
                    texture.id(),
                    background.fit_rect(rect),
                    UV_FULL,
                    Color32::WHITE,
                );
            }
        } else {
            self.background_texture = None;
        }

        match replayed {
            Some(snapshot) => {
                if self.snapshot_texture.is_none() && !self.snapshot_decode_failed {
                    match snapshot.to_color_image() {
                        Ok(img) => {
                            self.snapshot_texture = Some(self.ctx.load_texture(
                                "replayed_snapshot",
                                img,
                                TextureOptions::LINEAR,
                            ));
                        }
                        Err(err) => {
                            log::error!("failed to decode replayed snapshot: {err}");
                            self.snapshot_decode_failed = true;
                        }
                    }
                }
                if let Some(texture) = &self.snapshot_texture {
                    painter.image(texture.id(), rect, UV_FULL, Color32::WHITE);
                }
            }
            None => {
                self.snapshot_texture = None;
                self.snapshot_decode_failed = false;
            }
        }

        for stroke in document.strokes() {
            paint_stroke(painter, stroke.points(), stroke.color(), stroke.width());
        }
        if let Some(stroke) = live_stroke {
            paint_stroke(painter, stroke.points(), stroke.color(), stroke.width());
        }
    }
}


/// One polyline with round caps. A single point becomes a dot.
fn paint_stroke(painter: &egui::Painter, points: &[Pos2], color: Color32, width: f32) {
    let radius = width / 2.0;
    match points {
        [] => {}
        [single] => {
            painter.circle_filled(*single, radius, color);
        }
        _ => {
            painter.add(egui::Shape::line(
                points.to_vec(),
                egui::Stroke::new(width, color),
            ));
            painter.circle_filled(points[0], radius, color);
            painter.circle_filled(points[points.len() - 1], radius, color);
        }
    }
}
