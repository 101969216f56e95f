use crate::background::BackgroundRef;
use crate::stroke::StrokeRef;

/// Everything painted in the current session: finished strokes plus the
/// optional background image they sit on.
#[derive(Default)]
pub struct Document {
    strokes: Vec<StrokeRef>,
    background: Option<BackgroundRef>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stroke(&mut self, stroke: StrokeRef) {
        self.strokes.push(stroke);
    }

    pub fn strokes(&self) -> &[StrokeRef] {
        &self.strokes
    }

    pub fn set_background(&mut self, background: BackgroundRef) {
        self.background = Some(background);
    }

    pub fn background(&self) -> Option<&BackgroundRef> {
        self.background.as_ref()
    }

    /// Clearing resets both the drawn strokes and the background
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.background = None;
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.background.is_none()
    }
}
