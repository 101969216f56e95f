use egui::{Color32, Pos2};
use std::sync::Arc;

/// A finished paint gesture: the pointer path plus the brush settings it
/// was started with. Immutable once committed to the document.
#[derive(Clone)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
}

/// The gesture in progress, collecting points until pointer-up
pub struct MutableStroke {
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
}

/// Cheap shared handle to a committed stroke
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    pub fn new(color: Color32, width: f32, points: Vec<Pos2>) -> Self {
        Self {
            points,
            color,
            width,
        }
    }

    pub fn new_ref(color: Color32, width: f32, points: Vec<Pos2>) -> StrokeRef {
        Arc::new(Self::new(color, width, points))
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

impl MutableStroke {
    pub fn new(color: Color32, width: f32) -> Self {
        Self {
            points: Vec::new(),
            color,
            width,
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    /// Freeze the gesture at pointer-up
    pub fn to_stroke(&self) -> Stroke {
        Stroke::new(self.color, self.width, self.points.clone())
    }

    pub fn to_stroke_ref(&self) -> StrokeRef {
        Arc::new(self.to_stroke())
    }

    // points so far, for the live preview
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}
