//! Software rasterizer used for snapshot capture. Renders the same layers the
//! on-screen renderer draws, but into a plain RGBA buffer: fitted background,
//! replayed snapshot pixels, then every stroke as round dabs stamped along
//! its segments. The base stays transparent so a replayed capture never
//! hides a background chosen later; the on-screen renderer supplies the
//! white canvas underneath.

use crate::document::Document;
use egui::{Color32, Pos2, Rect};
use image::{Rgba, RgbaImage};

/// Rasterize the document into a bitmap matching the canvas rect, 1 point per
/// pixel. `replayed` is a previously captured canvas restored at startup; it
/// is drawn beneath the strokes painted since.
pub fn rasterize(document: &Document, canvas: Rect, replayed: Option<&RgbaImage>) -> RgbaImage {
    let width = canvas.width().round().max(1.0) as u32;
    let height = canvas.height().round().max(1.0) as u32;
    let mut img = RgbaImage::new(width, height);

    if let Some(background) = document.background() {
        let fit = background.fit_rect(canvas);
        blit_scaled(
            &mut img,
            background.data(),
            background.width(),
            background.height(),
            // fit rect in canvas-local pixels
            Rect::from_min_size(fit.min - canvas.min.to_vec2(), fit.size()),
        );
    }

    if let Some(previous) = replayed {
        blit_scaled(
            &mut img,
            previous.as_raw(),
            previous.width(),
            previous.height(),
            Rect::from_min_size(Pos2::ZERO, canvas.size()),
        );
    }

    for stroke in document.strokes() {
        stamp_stroke(
            &mut img,
            stroke.points(),
            stroke.width(),
            stroke.color(),
            canvas.min,
        );
    }

    img
}

/// Nearest-neighbor copy of an RGBA source into `dst_rect` of the target,
/// source-over alpha blended so transparent regions keep what is underneath
fn blit_scaled(img: &mut RgbaImage, src: &[u8], src_w: u32, src_h: u32, dst_rect: Rect) {
    if src_w == 0 || src_h == 0 || dst_rect.width() < 1.0 || dst_rect.height() < 1.0 {
        return;
    }
    let x0 = dst_rect.min.x.round().max(0.0) as u32;
    let y0 = dst_rect.min.y.round().max(0.0) as u32;
    let x1 = (dst_rect.max.x.round() as u32).min(img.width());
    let y1 = (dst_rect.max.y.round() as u32).min(img.height());

    for y in y0..y1 {
        let v = (y as f32 - dst_rect.min.y) / dst_rect.height();
        let sy = ((v * src_h as f32) as u32).min(src_h - 1);
        for x in x0..x1 {
            let u = (x as f32 - dst_rect.min.x) / dst_rect.width();
            let sx = ((u * src_w as f32) as u32).min(src_w - 1);
            let i = ((sy * src_w + sx) * 4) as usize;
            let sa = src[i + 3] as u32;
            if sa == 0 {
                continue;
            }
            if sa == 255 {
                img.put_pixel(x, y, Rgba([src[i], src[i + 1], src[i + 2], 255]));
                continue;
            }
            let dst = img.get_pixel_mut(x, y);
            let da = dst.0[3] as u32;
            // alpha scaled by 255 to stay in integer math
            let out_a = sa * 255 + da * (255 - sa);
            for c in 0..3 {
                let sc = src[i + c] as u32;
                let dc = dst.0[c] as u32;
                dst.0[c] = ((sc * sa * 255 + dc * da * (255 - sa)) / out_a) as u8;
            }
            dst.0[3] = (out_a / 255) as u8;
        }
    }
}

/// Stamp round dabs along every segment of a stroke
fn stamp_stroke(img: &mut RgbaImage, points: &[Pos2], width: f32, color: Color32, origin: Pos2) {
    let radius = (width / 2.0).max(0.5);
    match points {
        [] => {}
        [single] => stamp_dab(img, *single - origin.to_vec2(), radius, color),
        _ => {
            for pair in points.windows(2) {
                let (a, b) = (pair[0] - origin.to_vec2(), pair[1] - origin.to_vec2());
                let length = a.distance(b);
                // dab spacing of a quarter radius keeps the edge smooth
                let steps = (length / (radius * 0.25)).ceil().max(1.0) as u32;
                for step in 0..=steps {
                    let t = step as f32 / steps as f32;
                    stamp_dab(img, a + (b - a) * t, radius, color);
                }
            }
        }
    }
}

fn stamp_dab(img: &mut RgbaImage, center: Pos2, radius: f32, color: Color32) {
    let x0 = (center.x - radius).floor().max(0.0) as u32;
    let y0 = (center.y - radius).floor().max(0.0) as u32;
    let x1 = ((center.x + radius).ceil() as i64).clamp(0, img.width() as i64) as u32;
    let y1 = ((center.y + radius).ceil() as i64).clamp(0, img.height() as i64) as u32;
    let rgba = Rgba([color.r(), color.g(), color.b(), color.a()]);

    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - center.x;
            let dy = y as f32 + 0.5 - center.y;
            if dx * dx + dy * dy <= radius * radius {
                img.put_pixel(x, y, rgba);
            }
        }
    }
}
