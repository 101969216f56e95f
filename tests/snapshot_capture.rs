use egui::{Color32, Pos2, Rect, vec2};
use sketchpad::snapshot::{DATA_URL_PREFIX, Snapshot};
use sketchpad::{Background, Command, Document, SketchApp, SketchError, Stroke};

fn canvas(width: f32, height: f32) -> Rect {
    Rect::from_min_size(Pos2::ZERO, vec2(width, height))
}

#[test]
fn test_capture_of_empty_canvas_is_transparent_png_data_url() {
    let document = Document::new();
    let snapshot = Snapshot::capture(&document, canvas(20.0, 20.0), None).unwrap();

    assert!(snapshot.data_url().starts_with(DATA_URL_PREFIX));

    // unpainted pixels stay transparent so a replay never covers what is
    // drawn beneath it later
    let pixels = snapshot.decode().unwrap();
    assert_eq!(pixels.dimensions(), (20, 20));
    assert!(pixels.pixels().all(|p| p.0 == [0, 0, 0, 0]));
}

#[test]
fn test_capture_contains_painted_stroke() {
    let mut document = Document::new();
    document.add_stroke(Stroke::new_ref(
        Color32::RED,
        6.0,
        vec![Pos2::new(4.0, 10.0), Pos2::new(16.0, 10.0)],
    ));

    let snapshot = Snapshot::capture(&document, canvas(20.0, 20.0), None).unwrap();
    let pixels = snapshot.decode().unwrap();
    assert_eq!(pixels.get_pixel(10, 10).0, [255, 0, 0, 255]);
    assert_eq!(pixels.get_pixel(0, 0).0, [0, 0, 0, 0]);
}

#[test]
fn test_capture_draws_background_centered() {
    // A 2:1 blue image in a square canvas leaves empty bands above and below
    let blue = [0u8, 0, 255, 255];
    let data: Vec<u8> = blue.repeat(2);
    let mut document = Document::new();
    document.set_background(Background::new_ref(data, 2, 1));

    let snapshot = Snapshot::capture(&document, canvas(8.0, 8.0), None).unwrap();
    let pixels = snapshot.decode().unwrap();
    assert_eq!(pixels.get_pixel(4, 4).0, blue);
    assert_eq!(pixels.get_pixel(4, 0).0, [0, 0, 0, 0]);
    assert_eq!(pixels.get_pixel(4, 7).0, [0, 0, 0, 0]);
}

#[test]
fn test_replayed_snapshot_pixels_survive_recapture() {
    // Simulates a restart: the earlier capture is replayed beneath a fresh
    // document and must show through in the next capture.
    let mut earlier = Document::new();
    earlier.add_stroke(Stroke::new_ref(
        Color32::RED,
        4.0,
        vec![Pos2::new(5.0, 5.0)],
    ));
    let restored = Snapshot::capture(&earlier, canvas(16.0, 16.0), None).unwrap();

    let mut fresh = Document::new();
    fresh.add_stroke(Stroke::new_ref(
        Color32::BLACK,
        4.0,
        vec![Pos2::new(12.0, 12.0)],
    ));
    let recapture = Snapshot::capture(&fresh, canvas(16.0, 16.0), Some(&restored)).unwrap();

    let pixels = recapture.decode().unwrap();
    assert_eq!(pixels.get_pixel(5, 5).0, [255, 0, 0, 255]);
    assert_eq!(pixels.get_pixel(12, 12).0, [0, 0, 0, 255]);
}

#[test]
fn test_background_dropped_after_restore_shows_through_replay() {
    // A stroke-only capture from an earlier session must not hide a
    // background image uploaded afterwards.
    let mut earlier = Document::new();
    earlier.add_stroke(Stroke::new_ref(
        Color32::RED,
        4.0,
        vec![Pos2::new(5.0, 5.0)],
    ));
    let restored = Snapshot::capture(&earlier, canvas(16.0, 16.0), None).unwrap();

    let mut fresh = Document::new();
    fresh.set_background(Background::new_ref(vec![0, 0, 255, 255], 1, 1));
    let recapture = Snapshot::capture(&fresh, canvas(16.0, 16.0), Some(&restored)).unwrap();

    let pixels = recapture.decode().unwrap();
    // the new background fills the canvas wherever the replay is unpainted
    assert_eq!(pixels.get_pixel(12, 12).0, [0, 0, 255, 255]);
    // the replayed stroke still sits on top
    assert_eq!(pixels.get_pixel(5, 5).0, [255, 0, 0, 255]);
}

#[test]
fn test_clear_discards_snapshot_and_replay() {
    let mut app = SketchApp::default();
    app.execute_command(Command::AddStroke(Stroke::new_ref(
        Color32::RED,
        4.0,
        vec![Pos2::new(5.0, 5.0)],
    )));
    app.capture_snapshot(canvas(16.0, 16.0));
    assert!(app.snapshot().is_some());

    // simulate a restart adopting the capture as the replay layer
    app.replay_persisted_snapshot();
    assert!(app.replayed().is_some());

    app.execute_command(Command::Clear);
    assert!(app.snapshot().is_none());
    assert!(app.replayed().is_none());
    assert!(app.document().is_empty());
}

#[test]
fn test_degenerate_canvas_is_an_error() {
    let document = Document::new();
    let result = Snapshot::capture(&document, canvas(0.0, 20.0), None);
    assert!(matches!(result, Err(SketchError::DegenerateCanvas(0, 20))));
}

#[test]
fn test_snapshot_serde_round_trip() {
    let document = Document::new();
    let snapshot = Snapshot::capture(&document, canvas(4.0, 4.0), None).unwrap();

    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.data_url(), snapshot.data_url());
    assert_eq!(restored.decode().unwrap().dimensions(), (4, 4));
}
