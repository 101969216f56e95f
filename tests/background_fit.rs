use egui::{Pos2, Rect, vec2};
use sketchpad::Background;

fn blank_background(width: u32, height: u32) -> Background {
    Background::new(vec![0u8; (width * height * 4) as usize], width, height)
}

#[test]
fn test_wide_image_fits_width_and_centers_vertically() {
    let background = blank_background(200, 100);
    let canvas = Rect::from_min_size(Pos2::ZERO, vec2(100.0, 100.0));

    let fit = background.fit_rect(canvas);
    assert_eq!(fit.width(), 100.0);
    assert_eq!(fit.height(), 50.0);
    assert_eq!(fit.min, Pos2::new(0.0, 25.0));
    assert_eq!(fit.center(), canvas.center());
}

#[test]
fn test_tall_image_fits_height_and_centers_horizontally() {
    let background = blank_background(100, 400);
    let canvas = Rect::from_min_size(Pos2::ZERO, vec2(200.0, 200.0));

    let fit = background.fit_rect(canvas);
    assert_eq!(fit.height(), 200.0);
    assert_eq!(fit.width(), 50.0);
    assert_eq!(fit.min, Pos2::new(75.0, 0.0));
}

#[test]
fn test_aspect_ratio_is_preserved() {
    let background = blank_background(300, 200);
    let canvas = Rect::from_min_size(Pos2::new(50.0, 10.0), vec2(120.0, 90.0));

    let fit = background.fit_rect(canvas);
    let source_aspect = 300.0 / 200.0;
    let fitted_aspect = fit.width() / fit.height();
    assert!((source_aspect - fitted_aspect).abs() < 1e-4);
    // stays inside and centered on an offset canvas too
    assert!(canvas.contains_rect(fit));
    assert_eq!(fit.center(), canvas.center());
}

#[test]
fn test_small_image_is_scaled_up_to_fill() {
    let background = blank_background(10, 10);
    let canvas = Rect::from_min_size(Pos2::ZERO, vec2(80.0, 60.0));

    let fit = background.fit_rect(canvas);
    assert_eq!(fit.height(), 60.0);
    assert_eq!(fit.width(), 60.0);
}

#[test]
fn test_decode_rejects_non_image_bytes() {
    assert!(Background::from_encoded_bytes(b"definitely not an image").is_err());
}

#[test]
fn test_decode_round_trips_png_bytes() {
    let mut source = image::RgbaImage::new(3, 2);
    source.put_pixel(1, 1, image::Rgba([10, 20, 30, 255]));
    let mut png = Vec::new();
    source
        .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
        .unwrap();

    let background = Background::from_encoded_bytes(&png).unwrap();
    assert_eq!(background.width(), 3);
    assert_eq!(background.height(), 2);
    // pixel (1, 1) of a 3-wide image
    let i = (3 + 1) * 4;
    assert_eq!(&background.data()[i..i + 4], &[10, 20, 30, 255]);
}
