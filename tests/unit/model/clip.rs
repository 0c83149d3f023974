use super::*;

#[test]
fn composite_mode_tokens_round_trip() {
    for token in [
        "normal",
        "add",
        "subtract",
        "difference",
        "multiply",
        "screen",
        "texturize",
        "hardlight",
        "softlight",
        "darken",
        "lighten",
        "mask",
        "lumamask",
    ] {
        let mode = CompositeMode::parse(token);
        assert!(mode.is_known(), "{token}");
        assert_eq!(mode.as_str(), token);
    }
}

#[test]
fn unknown_composite_mode_is_kept_verbatim() {
    let mode = CompositeMode::parse("overlay");
    assert_eq!(mode, CompositeMode::Other("overlay".to_string()));
    assert_eq!(mode.as_str(), "overlay");
    assert!(!mode.is_known());
    assert_eq!(CompositeMode::parse("HardLight").as_str(), "HardLight");
}

#[test]
fn alpha_type_tokens() {
    assert_eq!(AlphaType::parse("straight"), AlphaType::Straight);
    assert_eq!(AlphaType::parse("none").as_str(), "none");
    assert_eq!(AlphaType::parse("luma").as_str(), "luma");
    assert!(!AlphaType::parse("luma").is_known());
}

#[test]
fn composite_mode_serializes_lowercase() {
    let s = serde_json::to_string(&CompositeMode::HardLight).unwrap();
    assert_eq!(s, "\"hardlight\"");
}

#[test]
fn timeline_len_needs_both_ends() {
    let mut item = ClipItem {
        start: Field::Present(10),
        ..ClipItem::default()
    };
    assert_eq!(item.timeline_len(), None);
    item.end = Field::Present(35);
    assert_eq!(item.timeline_len(), Some(25));
}

#[test]
fn timeline_len_is_none_when_the_difference_overflows() {
    let item = ClipItem {
        start: Field::Present(-2),
        end: Field::Present(i64::MAX),
        ..ClipItem::default()
    };
    assert_eq!(item.timeline_len(), None);

    let item = ClipItem {
        start: Field::Present(i64::MIN),
        end: Field::Present(-1),
        ..ClipItem::default()
    };
    assert_eq!(item.timeline_len(), Some(i64::MAX));
}
