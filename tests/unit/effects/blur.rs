use super::*;
use crate::foundation::color::Color;

#[test]
fn zero_sigma_is_identity() {
    let img = PreparedImage::from_premul(1, 2, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    assert_eq!(gaussian_blur(&img, 0.0).unwrap(), img);
    assert_eq!(kernel_radius_for_sigma(6.0), 18);
    assert_eq!(kernel_radius_for_sigma(-1.0), 0);
}

#[test]
fn constant_image_is_unchanged() {
    let img = PreparedImage::solid(7, 5, Color::rgba(10, 20, 30, 40)).unwrap();
    assert_eq!(gaussian_blur(&img, 2.0).unwrap(), img);
}

#[test]
fn kernel_sums_to_one_in_q16() {
    for (r, s) in [(1u32, 0.5f32), (6, 2.0), (18, 6.0)] {
        let k = gaussian_kernel_q16(r, s).unwrap();
        assert_eq!(k.len(), (2 * r + 1) as usize);
        assert_eq!(k.iter().map(|&w| u64::from(w)).sum::<u64>(), 65536);
    }
    assert!(gaussian_kernel_q16(3, f32::NAN).is_err());
}

#[test]
fn blur_spreads_energy_from_single_pixel() {
    let (w, h) = (9u32, 9u32);
    let mut src = vec![0u8; (w * h * 4) as usize];
    let centre = ((4 * w + 4) * 4) as usize;
    src[centre..centre + 4].copy_from_slice(&[255, 255, 255, 255]);
    let img = PreparedImage::from_premul(w, h, src).unwrap();

    let out = gaussian_blur(&img, 1.0).unwrap();

    let nonzero = out.rgba8_premul.chunks_exact(4).filter(|px| px[3] != 0).count();
    assert!(nonzero > 1);
    let sum_a: u32 = out.rgba8_premul.chunks_exact(4).map(|px| u32::from(px[3])).sum();
    assert!((sum_a as i32 - 255).abs() <= 8);
}

#[test]
fn oversized_radius_is_an_error_not_a_panic() {
    assert!(matches!(
        gaussian_kernel_q16(u32::MAX, 1.0),
        Err(ThumbError::Validation(_))
    ));
    assert!(matches!(
        gaussian_kernel_q16(u32::MAX / 2 + 1, 1.0),
        Err(ThumbError::Validation(_))
    ));
}
