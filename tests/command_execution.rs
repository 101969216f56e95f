use egui::{Color32, Pos2};
use sketchpad::{Background, Command, Document, Stroke};

fn red_dot_stroke() -> sketchpad::StrokeRef {
    Stroke::new_ref(Color32::RED, 3.0, vec![Pos2::new(5.0, 5.0)])
}

#[test]
fn test_add_stroke_appends_to_document() {
    let mut document = Document::new();
    assert!(document.is_empty());

    Command::AddStroke(red_dot_stroke()).execute(&mut document);
    Command::AddStroke(red_dot_stroke()).execute(&mut document);

    assert_eq!(document.strokes().len(), 2);
    assert!(!document.is_empty());
}

#[test]
fn test_set_background_replaces_previous_upload() {
    let mut document = Document::new();

    let first = Background::new_ref(vec![0u8; 16], 2, 2);
    let second = Background::new_ref(vec![0u8; 16], 2, 2);
    Command::SetBackground(first.clone()).execute(&mut document);
    Command::SetBackground(second.clone()).execute(&mut document);

    let current = document.background().unwrap();
    assert_eq!(current.id(), second.id());
    assert_ne!(current.id(), first.id());
}

#[test]
fn test_clear_resets_strokes_and_background() {
    let mut document = Document::new();
    Command::AddStroke(red_dot_stroke()).execute(&mut document);
    Command::SetBackground(Background::new_ref(vec![0u8; 16], 2, 2)).execute(&mut document);

    Command::Clear.execute(&mut document);

    assert!(document.strokes().is_empty());
    assert!(document.background().is_none());
    assert!(document.is_empty());
}
