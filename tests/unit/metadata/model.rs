use super::*;

#[test]
fn new_rejects_empty_fields() {
    let err = Metadata::new("title", "  ", "1 view", "chan").unwrap_err();
    assert!(matches!(err, ThumbError::Validation(_)));
    assert!(err.to_string().contains("duration"));
}

#[test]
fn new_strips_control_and_format_characters() {
    let m = Metadata::new("a\tb\u{200B}c\n", "1:00", "5 views", "ch").unwrap();
    assert_eq!(m.title(), "a bc");
}

#[test]
fn info_line_joins_channel_and_views() {
    let m = Metadata::new("t", "1:00", "1.2M views", "Some Channel").unwrap();
    assert_eq!(m.info_line(), "Some Channel | 1.2M views");
}

#[test]
fn normalize_title_collapses_symbols_and_title_cases() {
    assert_eq!(
        normalize_title("never gonna   GIVE you up!!! (official video)"),
        "Never Gonna Give You Up Official Video"
    );
    assert_eq!(normalize_title("lo-fi beats_2024"), "Lo Fi Beats_2024");
    assert_eq!(normalize_title("3d printing"), "3D Printing");
    assert_eq!(normalize_title("***"), "");
}

#[test]
fn from_record_fills_placeholders() {
    let m = Metadata::from_record(&SearchRecord::default());
    assert_eq!(m.title(), UNKNOWN_TITLE);
    assert_eq!(m.duration(), UNKNOWN_DURATION);
    assert_eq!(m.views(), UNKNOWN_VIEWS);
    assert_eq!(m.channel(), UNKNOWN_CHANNEL);
}

#[test]
fn from_record_treats_symbol_only_title_as_missing() {
    let rec = SearchRecord {
        title: Some("!!! ???".into()),
        duration: Some("4:20".into()),
        view_count: Some("".into()),
        channel: Some(" Chan ".into()),
        thumbnail_url: None,
    };
    let m = Metadata::from_record(&rec);
    assert_eq!(m.title(), UNKNOWN_TITLE);
    assert_eq!(m.duration(), "4:20");
    assert_eq!(m.views(), UNKNOWN_VIEWS);
    assert_eq!(m.channel(), "Chan");
}

#[test]
fn source_url_drops_query_string() {
    let rec = SearchRecord {
        thumbnail_url: Some("https://i.example/vi/abc/hq720.jpg?sqp=xyz&rs=1".into()),
        ..SearchRecord::default()
    };
    assert_eq!(rec.source_url(), Some("https://i.example/vi/abc/hq720.jpg"));
    assert_eq!(SearchRecord::default().source_url(), None);
}

#[test]
fn record_deserializes_with_missing_fields() {
    let rec: SearchRecord = serde_json::from_str(r#"{"title":"hello"}"#).unwrap();
    assert_eq!(rec.title.as_deref(), Some("hello"));
    assert!(rec.channel.is_none());
}

#[test]
fn metadata_deserialization_validates() {
    let ok: Metadata =
        serde_json::from_str(r#"{"title":"t","duration":"d","views":"v","channel":"c"}"#).unwrap();
    assert_eq!(ok.channel(), "c");
    assert!(
        serde_json::from_str::<Metadata>(r#"{"title":"","duration":"d","views":"v","channel":"c"}"#)
            .is_err()
    );
}
