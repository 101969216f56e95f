use crate::background::BackgroundRef;
use crate::document::Document;
use crate::stroke::StrokeRef;

/// Represents the mutations the UI can apply to the document
pub enum Command {
    /// Adds a finished stroke to the document
    AddStroke(StrokeRef),
    /// Replaces the background image
    SetBackground(BackgroundRef),
    /// Drops all strokes and the background
    Clear,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::AddStroke(stroke) => f
                .debug_struct("AddStroke")
                .field("points", &stroke.points().len())
                .finish(),
            Command::SetBackground(background) => f
                .debug_struct("SetBackground")
                .field("id", &background.id())
                .finish(),
            Command::Clear => f.debug_struct("Clear").finish(),
        }
    }
}

impl Command {
    pub fn execute(&self, document: &mut Document) {
        match self {
            Command::AddStroke(stroke) => {
                document.add_stroke(stroke.clone());
            }
            Command::SetBackground(background) => {
                log::info!(
                    "setting background image {} ({}x{})",
                    background.id(),
                    background.width(),
                    background.height()
                );
                document.set_background(background.clone());
            }
            Command::Clear => {
                log::info!("clearing canvas");
                document.clear();
            }
        }
    }
}
