use crate::SketchApp;
use crate::brush::{self, PALETTE};
use crate::command::Command;
use egui::{self, Sense, Slider, Vec2};

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Sketchpad");
            ui.separator();

            ui.label("Color");
            ui.horizontal_wrapped(|ui| {
                for color in PALETTE {
                    let selected = app.brush().color() == color;
                    if swatch(ui, color, selected).clicked() {
                        log::info!("palette color selected: {color:?}");
                        app.brush_mut().set_color(color);
                    }
                }
            });

            ui.separator();

            ui.label("Brush size");
            let mut size = app.brush().size();
            if ui
                .add(Slider::new(&mut size, brush::MIN_SIZE..=brush::MAX_SIZE))
                .changed()
            {
                // setter clamps, so edited text input cannot escape the range
                app.brush_mut().set_size(size);
            }

            ui.separator();

            if ui.button("Clear canvas").clicked() {
                app.execute_command(Command::Clear);
            }

            ui.separator();
            ui.label("Drop an image on the window to use it as the background.");
        });
}

/// One clickable palette square, outlined when selected
fn swatch(ui: &mut egui::Ui, color: egui::Color32, selected: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(22.0), Sense::click());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, 3.0, color);
        let outline = if selected {
            egui::Stroke::new(2.0, ui.visuals().strong_text_color())
        } else {
            egui::Stroke::new(1.0, ui.visuals().weak_text_color())
        };
        painter.rect_stroke(rect, 3.0, outline);
    }
    response
}
