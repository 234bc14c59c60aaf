use super::*;

const FONT: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/fonts/DejaVuSansCondensed.ttf"
);

fn font() -> Font<'static> {
    Font::try_from_vec(std::fs::read(FONT).unwrap()).unwrap()
}

#[test]
fn measurement_is_monotonic_in_text_length() {
    let font = font();
    let scale = Scale::uniform(33.0);
    assert_eq!(line_width(&font, scale, ""), 0);
    let a = line_width(&font, scale, "CIAO");
    let b = line_width(&font, scale, "CIAO MONDO");
    assert!(a > 0);
    assert!(b > a);
}

#[test]
fn line_height_grows_with_scale() {
    let font = font();
    let small = line_height(&font, Scale::uniform(16.0));
    let large = line_height(&font, Scale::uniform(48.0));
    assert!(small > 0);
    assert!(large > small);
}

#[test]
fn drawing_marks_pixels_on_the_canvas() {
    let font = font();
    let mut img = RgbaImage::from_pixel(200, 100, Rgba([0, 0, 0, 255]));
    draw_line_centered(&mut img, &font, Scale::uniform(33.0), 30, "HI", Rgba([255, 255, 255, 255]));
    let lit = img.pixels().filter(|p| p.0[0] > 0).count();
    assert!(lit > 0, "no glyph coverage reached the canvas");
}

#[test]
fn offscreen_anchors_clip_instead_of_panicking() {
    let font = font();
    let mut img = RgbaImage::from_pixel(60, 40, Rgba([0, 0, 0, 255]));
    draw_line_centered(&mut img, &font, Scale::uniform(33.0), -500, "CLIPPED", Rgba([255; 4]));
    draw_line_centered(&mut img, &font, Scale::uniform(33.0), 500, "CLIPPED", Rgba([255; 4]));
    // a line much wider than the canvas clips horizontally as well
    draw_line_centered(
        &mut img,
        &font,
        Scale::uniform(33.0),
        10,
        "UNA RIGA DAVVERO MOLTO PIU LARGA DELLA TELA",
        Rgba([255; 4]),
    );
}
