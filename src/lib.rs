#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod background;
pub mod brush;
pub mod command;
pub mod document;
pub mod error;
pub mod file_handler;
pub mod input;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod snapshot;
pub mod stroke;

pub use app::SketchApp;
pub use background::{Background, BackgroundRef};
pub use brush::Brush;
pub use command::Command;
pub use document::Document;
pub use error::SketchError;
pub use input::{InputEvent, InputHandler, InputLocation};
pub use renderer::Renderer;
pub use snapshot::Snapshot;
pub use stroke::{MutableStroke, Stroke, StrokeRef};
