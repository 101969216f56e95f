use crate::brush::Brush;
use crate::command::Command;
use crate::document::Document;
use crate::file_handler::FileHandler;
use crate::input::{InputEvent, InputHandler};
use crate::panels;
use crate::renderer::Renderer;
use crate::snapshot::Snapshot;
use crate::stroke::MutableStroke;

/// We derive Deserialize/Serialize so brush settings and the latest snapshot
/// survive an app restart.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct SketchApp {
    // Skip serializing the renderer since it holds GPU resources
    #[serde(skip)]
    renderer: Option<Renderer>,
    #[serde(skip)]
    document: Document,
    brush: Brush,
    /// Canvas capture taken after the last completed stroke
    snapshot: Option<Snapshot>,
    /// Snapshot restored from the previous session, replayed beneath new strokes
    #[serde(skip)]
    replayed: Option<Snapshot>,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    file_handler: FileHandler,
    /// The gesture currently being painted, if the pointer is down
    #[serde(skip)]
    active_stroke: Option<MutableStroke>,
    #[serde(skip)]
    canvas_rect: egui::Rect,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self {
            renderer: None,
            document: Document::new(),
            brush: Brush::default(),
            snapshot: None,
            replayed: None,
            input: InputHandler::new(egui::Rect::NOTHING),
            file_handler: FileHandler::new(),
            active_stroke: None,
            canvas_rect: egui::Rect::NOTHING,
        }
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        app.replay_persisted_snapshot();
        app.renderer = Some(Renderer::new(cc));
        app
    }

    /// Adopt the persisted snapshot as this session's replayed base layer.
    /// Called once at startup.
    pub fn replay_persisted_snapshot(&mut self) {
        self.replayed = self.snapshot.clone();
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut Brush {
        &mut self.brush
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn replayed(&self) -> Option<&Snapshot> {
        self.replayed.as_ref()
    }

    /// Single funnel for all document mutations
    pub fn execute_command(&mut self, command: Command) {
        if matches!(command, Command::Clear) {
            self.snapshot = None;
            self.replayed = None;
            self.active_stroke = None;
        }
        command.execute(&mut self.document);
    }

    /// Route pointer events within the canvas into the active stroke
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.input.set_canvas_rect(canvas_rect);
        self.canvas_rect = canvas_rect;

        for event in self.input.process_input(ctx) {
            match event {
                InputEvent::PointerDown { location } if location.is_in_canvas => {
                    let mut stroke = MutableStroke::new(self.brush.color(), self.brush.width());
                    stroke.add_point(location.position);
                    self.active_stroke = Some(stroke);
                }
                InputEvent::PointerDrag { location } => {
                    if self.active_stroke.is_some() && !location.is_in_canvas {
                        // Dragging off the surface ends the gesture
                        self.finish_active_stroke();
                    } else if let Some(stroke) = self.active_stroke.as_mut() {
                        stroke.add_point(location.position);
                    }
                }
                InputEvent::PointerUp { location } => {
                    if let Some(stroke) = self.active_stroke.as_mut() {
                        if location.is_in_canvas {
                            stroke.add_point(location.position);
                        }
                        self.finish_active_stroke();
                    }
                }
                InputEvent::PointerLeave { .. } => self.finish_active_stroke(),
                InputEvent::PointerDown { .. } => {}
            }
        }
    }

    /// Commit the in-progress gesture and re-capture the canvas
    fn finish_active_stroke(&mut self) {
        let Some(stroke) = self.active_stroke.take() else {
            return;
        };
        if stroke.points().is_empty() {
            return;
        }

        self.execute_command(Command::AddStroke(stroke.to_stroke_ref()));
        self.capture_snapshot(self.canvas_rect);
    }

    /// Re-encode the canvas bitmap; on failure the previous capture is kept
    pub fn capture_snapshot(&mut self, canvas_rect: egui::Rect) {
        match Snapshot::capture(&self.document, canvas_rect, self.replayed.as_ref()) {
            Ok(snapshot) => self.snapshot = Some(snapshot),
            Err(err) => log::error!("failed to capture canvas snapshot: {err}"),
        }
    }

    pub fn render(&mut self, painter: &egui::Painter, canvas_rect: egui::Rect) {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(
                painter,
                canvas_rect,
                &self.document,
                self.replayed.as_ref(),
                self.active_stroke.as_ref(),
            );
        }
    }
}

impl eframe::App for SketchApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.file_handler.preview_files_being_dropped(ctx);
        if self.file_handler.check_for_dropped_files(ctx) {
            for command in self.file_handler.process_dropped_files() {
                self.execute_command(command);
            }
        }

        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
