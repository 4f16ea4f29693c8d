use super::*;
use crate::foundation::color::Color;

#[test]
fn encodes_png_signature_and_straight_alpha() {
    let img = PreparedImage::solid(3, 2, Color::rgba(200, 100, 50, 128)).unwrap();
    let enc = encode_png(&img).unwrap();
    assert_eq!(enc.format, OutputFormat::Png);
    assert_eq!(&enc.bytes[..8], b"\x89PNG\r\n\x1a\n");

    let back = image::load_from_memory(&enc.bytes).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (3, 2));
    let px = back.get_pixel(1, 1).0;
    assert_eq!(px[3], 128);
    assert!(px[0].abs_diff(200) <= 2, "{px:?}");
    assert!(px[1].abs_diff(100) <= 2, "{px:?}");
}

#[test]
fn fully_transparent_pixels_encode_as_zero() {
    let img = PreparedImage::solid(2, 2, Color::rgba(255, 255, 255, 0)).unwrap();
    let back = image::load_from_memory(&encode_png(&img).unwrap().bytes)
        .unwrap()
        .to_rgba8();
    assert_eq!(back.get_pixel(0, 0).0, [0, 0, 0, 0]);
}

#[test]
fn extension_is_png() {
    assert_eq!(OutputFormat::Png.extension(), "png");
}
