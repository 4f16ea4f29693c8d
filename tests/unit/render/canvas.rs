use super::*;
use crate::geometry::mask::{circular_mask, rounded_corner_mask};

fn size(w: u32, h: u32) -> FrameSize {
    FrameSize::new(w, h).unwrap()
}

#[test]
fn draw_image_clips_to_canvas() {
    let mut c = Canvas::filled(size(4, 4), Color::BLACK).unwrap();
    let red = PreparedImage::solid(3, 3, Color::rgb(255, 0, 0)).unwrap();
    c.draw_image(&red, 2, -1);
    let img = c.into_image().unwrap();
    assert_eq!(img.pixel(2, 0), [255, 0, 0, 255]);
    assert_eq!(img.pixel(3, 1), [255, 0, 0, 255]);
    assert_eq!(img.pixel(3, 2), [0, 0, 0, 255]);
    assert_eq!(img.pixel(1, 0), [0, 0, 0, 255]);
}

#[test]
fn fully_outside_draw_is_noop() {
    let mut c = Canvas::filled(size(4, 4), Color::BLACK).unwrap();
    let red = PreparedImage::solid(3, 3, Color::rgb(255, 0, 0)).unwrap();
    c.draw_image(&red, 10, 10);
    c.draw_image(&red, -3, 0);
    let img = c.into_image().unwrap();
    assert!(img.rgba8_premul.chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
}

#[test]
fn masked_paste_keeps_background_outside_circle() {
    let mut c = Canvas::filled(size(20, 20), Color::rgb(0, 0, 255)).unwrap();
    let red = PreparedImage::solid(10, 10, Color::rgb(255, 0, 0)).unwrap();
    let mask = circular_mask(10).unwrap();
    c.paste_masked(&red, &mask, 5, 5).unwrap();
    let img = c.into_image().unwrap();
    assert_eq!(img.pixel(10, 10), [255, 0, 0, 255]);
    assert_eq!(img.pixel(5, 5), [0, 0, 255, 255]);
    assert_eq!(img.pixel(14, 14), [0, 0, 255, 255]);
    assert_eq!(img.pixel(0, 0), [0, 0, 255, 255]);
}

#[test]
fn masked_paste_requires_matching_mask() {
    let mut c = Canvas::filled(size(20, 20), Color::BLACK).unwrap();
    let red = PreparedImage::solid(10, 10, Color::rgb(255, 0, 0)).unwrap();
    let mask = circular_mask(9).unwrap();
    assert!(matches!(
        c.paste_masked(&red, &mask, 0, 0),
        Err(ThumbError::InvalidGeometry(_))
    ));
}

#[test]
fn corner_mask_clears_frame_corners() {
    let mut c = Canvas::filled(size(40, 30), Color::WHITE).unwrap();
    c.apply_mask(&rounded_corner_mask(40, 30, 8).unwrap()).unwrap();
    let img = c.into_image().unwrap();
    assert_eq!(img.pixel(0, 0), [0, 0, 0, 0]);
    assert_eq!(img.pixel(39, 29), [0, 0, 0, 0]);
    assert_eq!(img.pixel(20, 15), [255, 255, 255, 255]);

    let mut c = Canvas::filled(size(40, 30), Color::WHITE).unwrap();
    assert!(c.apply_mask(&rounded_corner_mask(30, 40, 8).unwrap()).is_err());
}

#[test]
fn layers_composite_over_canvas() {
    let mut c = Canvas::filled(size(2, 1), Color::BLACK).unwrap();
    c.draw_layer(&[0, 0, 0, 0, 255, 255, 255, 255]).unwrap();
    assert_eq!(c.size(), size(2, 1));
    let img = c.into_image().unwrap();
    assert_eq!(img.pixel(0, 0), [0, 0, 0, 255]);
    assert_eq!(img.pixel(1, 0), [255, 255, 255, 255]);
}
