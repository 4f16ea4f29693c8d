use super::*;
use crate::foundation::color::Color;

#[test]
fn brightness_scales_colour_not_alpha() {
    let img = PreparedImage::solid(2, 2, Color::rgb(255, 100, 0)).unwrap();
    let out = brightness(&img, 0.6).unwrap();
    assert_eq!(out.pixel(1, 1), [153, 60, 0, 255]);
}

#[test]
fn brightness_respects_premultiplication() {
    let img = PreparedImage::solid(1, 1, Color::rgba(200, 200, 200, 128)).unwrap();
    let out = brightness(&img, 0.5).unwrap();
    let px = out.pixel(0, 0);
    assert_eq!(px[3], 128);
    assert!((i16::from(px[0]) - 50).abs() <= 1);
}

#[test]
fn unit_brightness_is_identity_for_opaque_pixels() {
    let img = PreparedImage::solid(3, 1, Color::rgb(12, 34, 56)).unwrap();
    assert_eq!(brightness(&img, 1.0).unwrap(), img);
    assert!(brightness(&img, -0.1).is_err());
}
