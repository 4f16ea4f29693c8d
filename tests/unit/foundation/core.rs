use super::*;

#[test]
fn zero_sized_surfaces_are_rejected() {
    assert!(matches!(
        FrameSize::new(0, 10),
        Err(ThumbError::InvalidGeometry(_))
    ));
    assert_eq!(FrameSize::new(3, 2).unwrap().rgba_len().unwrap(), 24);
}

#[test]
fn fit_within_preserves_aspect_ratio() {
    let square = FrameSize::new(100, 100).unwrap();
    assert_eq!(square.fit_within(FrameSize::HD), FrameSize::new(720, 720).unwrap());

    let wide = FrameSize::new(1920, 1080).unwrap();
    assert_eq!(wide.fit_within(FrameSize::HD), FrameSize::HD);

    let tall = FrameSize::new(480, 640).unwrap();
    assert_eq!(tall.fit_within(FrameSize::HD), FrameSize::new(540, 720).unwrap());
}

#[test]
fn fit_within_rounds_to_nearest_pixel() {
    // Width-bound: 1001 * 1280 / 3000 = 427.09.
    let s = FrameSize::new(3000, 1001).unwrap().fit_within(FrameSize::HD);
    assert_eq!(s.width, 1280);
    assert_eq!(s.height, 427);

    let sliver = FrameSize::new(10_000, 1).unwrap().fit_within(FrameSize::HD);
    assert_eq!(sliver.height, 1);
}
