use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::rgb(255, 0, 0));

    let c: Color = serde_json::from_value(json!("#0000FF80")).unwrap();
    assert_eq!(c, Color::rgba(0, 0, 255, 128));
}

#[test]
fn parses_byte_arrays() {
    let c: Color = serde_json::from_value(json!([220, 220, 220])).unwrap();
    assert_eq!(c, Color::rgb(220, 220, 220));

    let c: Color = serde_json::from_value(json!([0, 0, 0, 180])).unwrap();
    assert_eq!(c, Color::BLACK.with_alpha(180));

    assert!(serde_json::from_value::<Color>(json!([1, 2])).is_err());
    assert!(serde_json::from_value::<Color>(json!("#12345")).is_err());
}

#[test]
fn hex_serialization_is_stable() {
    assert_eq!(
        serde_json::to_value(Color::rgb(240, 240, 240)).unwrap(),
        json!("#f0f0f0")
    );
    assert_eq!(Color::WHITE.with_alpha(240).to_hex(), "#fffffff0");
}

#[test]
fn premul_scales_by_alpha() {
    assert_eq!(Color::WHITE.to_premul(), [255, 255, 255, 255]);
    assert_eq!(Color::rgba(255, 128, 0, 0).to_premul(), [0, 0, 0, 0]);
    assert_eq!(Color::rgba(255, 255, 255, 128).to_premul(), [128, 128, 128, 128]);
}
