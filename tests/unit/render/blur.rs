use super::*;

use image::Rgba;

#[test]
fn radius_zero_is_identity() {
    let img = RgbaImage::from_fn(9, 7, |x, y| Rgba([x as u8, y as u8, 0, 255]));
    assert_eq!(blur_rgba(&img, 0), img);
}

#[test]
fn flat_images_stay_flat() {
    // the q16 kernel sums exactly to one, so uniform areas do not drift
    let img = RgbaImage::from_pixel(40, 30, Rgba([120, 7, 200, 255]));
    let blurred = blur_rgba(&img, 3);
    assert_eq!(blurred, img);
}

#[test]
fn edges_are_smoothed() {
    let img = RgbaImage::from_fn(20, 20, |x, _| {
        if x < 10 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    });
    let blurred = blur_rgba(&img, 2);
    let boundary = blurred.get_pixel(10, 10).0[0];
    assert!(boundary > 0 && boundary < 255, "boundary stayed hard: {boundary}");
    // alpha was uniform and must stay so
    assert_eq!(blurred.get_pixel(10, 10).0[3], 255);
}

#[test]
fn dimensions_are_preserved() {
    let img = RgbaImage::from_pixel(13, 5, Rgba([1, 2, 3, 4]));
    let blurred = blur_rgba(&img, 4);
    assert_eq!(blurred.dimensions(), (13, 5));
}
