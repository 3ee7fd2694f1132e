//! Tests for colour, font and key stroke encoding.

use super::*;
use gdark_common::{OptionValue, WrapperKind};

fn packed(option: &WrappedOption) -> i32 {
    match option.states()[0].value() {
        OptionValue::Integer(i) => *i,
        other => panic!("expected int state, got {other:?}"),
    }
}

#[test]
fn red_opaque_matches_java_argb() {
    let red = encode_color("FF0000", 100).unwrap();
    assert_eq!(red.kind(), WrapperKind::Color);
    assert_eq!(red.states()[0].name(), "color");
    assert_eq!(red.states()[0].type_tag(), "int");
    // bytes 00 00 FF FF read little-endian
    assert_eq!(packed(&red), i32::from_le_bytes([0x00, 0x00, 0xFF, 0xFF]));
    assert_eq!(packed(&red), -65536);
}

#[test]
fn channels_are_reordered() {
    let c = encode_color("123456", 100).unwrap();
    assert_eq!(packed(&c), i32::from_le_bytes([0x56, 0x34, 0x12, 0xFF]));
}

#[test]
fn lowercase_hex_accepted() {
    assert_eq!(
        packed(&encode_color("ff79c6", 100).unwrap()),
        packed(&encode_color("FF79C6", 100).unwrap())
    );
}

#[test]
fn alpha_is_rounded() {
    // 255 * 0.5 = 127.5 -> 128
    let half = encode_color("000000", 50).unwrap();
    assert_eq!(packed(&half), i32::from_le_bytes([0, 0, 0, 128]));
    // 255 * 0.4 = 102
    let forty = encode_color("000000", 40).unwrap();
    assert_eq!(packed(&forty), 102 << 24);
    // 255 * 0.8 = 204
    let eighty = encode_color("ffffff", 80).unwrap();
    assert_eq!(packed(&eighty), i32::from_le_bytes([0xff, 0xff, 0xff, 204]));
}

#[test]
fn alpha_is_clamped() {
    assert_eq!(
        packed(&encode_color("44475a", 250).unwrap()),
        packed(&encode_color("44475a", 100).unwrap())
    );
    assert_eq!(packed(&encode_color("000000", -20).unwrap()), 0);
}

#[test]
fn malformed_colors_rejected() {
    for bad in ["", "FFF", "#FF0000", "FF00000", "GG0000", " FF0000"] {
        let err = encode_color(bad, 100).unwrap_err();
        assert!(
            matches!(err, PatchError::Encoding(_)),
            "{bad:?} should be an encoding error"
        );
    }
}

#[test]
fn font_states_in_order() {
    let font = encode_font(14, 0, "Fira Code").unwrap();
    assert_eq!(font.kind(), WrapperKind::Font);
    let states: Vec<_> = font
        .states()
        .iter()
        .map(|s| (s.name(), s.type_tag(), s.serialized()))
        .collect();
    assert_eq!(
        states,
        vec![
            ("size", "int", "14".to_string()),
            ("style", "int", "0".to_string()),
            ("family", "string", "Fira Code".to_string()),
        ]
    );
}

#[test]
fn font_rejects_bad_input() {
    assert!(encode_font(0, 0, "Mono").is_err());
    assert!(encode_font(12, 4, "Mono").is_err());
    assert!(encode_font(12, 0, "  ").is_err());
    assert!(encode_font(12, 3, "Mono").is_ok());
}

#[test]
fn keystroke_states_in_order() {
    let ks = encode_keystroke(75, 128).unwrap();
    assert_eq!(ks.class_name(), "ghidra.framework.options.WrappedKeyStroke");
    assert_eq!(ks.states()[0].serialized(), "75");
    assert_eq!(ks.states()[1].serialized(), "128");
    assert!(encode_keystroke(-1, 0).is_err());
}
