use image::{Rgba, RgbaImage};
use rusttype::{Font, Scale, point};

/// Rendered pixel width of `text` at `scale`, measured by glyph advances.
///
/// Advance-based measurement is monotonic in the text length, which the
/// greedy wrapper relies on.
pub fn line_width(font: &Font<'_>, scale: Scale, text: &str) -> u32 {
    let last = font.layout(text, scale, point(0.0, 0.0)).last();
    match last {
        Some(glyph) => {
            let end = glyph.position().x + glyph.unpositioned().h_metrics().advance_width;
            end.ceil().max(0.0) as u32
        }
        None => 0,
    }
}

/// Vertical advance of one text line at `scale`.
pub fn line_height(font: &Font<'_>, scale: Scale) -> u32 {
    let v = font.v_metrics(scale);
    (v.ascent - v.descent + v.line_gap).ceil() as u32
}

/// Draw one line of text horizontally centered, its top edge at `y_top`.
///
/// Glyph coverage is alpha-blended with `color`; pixels outside the canvas
/// are clipped, so anchors above the top edge degrade gracefully.
pub fn draw_line_centered(
    img: &mut RgbaImage,
    font: &Font<'_>,
    scale: Scale,
    y_top: i32,
    text: &str,
    color: Rgba<u8>,
) {
    let line_w = line_width(font, scale, text) as i32;
    let x0 = (img.width() as i32 - line_w) / 2;
    let baseline = y_top as f32 + font.v_metrics(scale).ascent;

    let (img_w, img_h) = (img.width() as i32, img.height() as i32);
    for glyph in font.layout(text, scale, point(x0 as f32, baseline)) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = gx as i32 + bb.min.x;
            let py = gy as i32 + bb.min.y;
            if px < 0 || py < 0 || px >= img_w || py >= img_h {
                return;
            }
            let pixel = img.get_pixel_mut(px as u32, py as u32);
            blend(pixel, color, coverage);
        });
    }
}

fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>, coverage: f32) {
    let a = coverage * f32::from(src.0[3]) / 255.0;
    if a <= 0.0 {
        return;
    }
    for c in 0..3 {
        let d = f32::from(dst.0[c]);
        let s = f32::from(src.0[c]);
        dst.0[c] = (d + (s - d) * a).round().clamp(0.0, 255.0) as u8;
    }
    let da = f32::from(dst.0[3]);
    dst.0[3] = (da + (255.0 - da) * a).round().clamp(0.0, 255.0) as u8;
}

#[cfg(test)]
#[path = "../../tests/unit/render/glyphs.rs"]
mod tests;
