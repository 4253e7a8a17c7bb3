use super::*;

#[test]
fn parse_hex_rgb_supports_short_and_long_forms() {
    assert_eq!(parse_hex_rgb("#ABC"), Some((170, 187, 204)));
    assert_eq!(parse_hex_rgb("  #a1B2c3 "), Some((161, 178, 195)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("AABBCC"), None);
    assert_eq!(parse_hex_rgb("#12"), None);
    assert_eq!(parse_hex_rgb("#abcd"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
    assert_eq!(parse_hex_rgb("transparent"), None);
    assert_eq!(parse_hex_rgb("#ééé"), None);
    assert_eq!(parse_hex_rgb("#+f0000"), None);
}

#[test]
fn normalize_hex_color_uses_canonical_lowercase() {
    assert_eq!(normalize_hex_color("#ABC", "#000000"), "#aabbcc");
    assert_eq!(normalize_hex_color("#3B82F6", "#000000"), "#3b82f6");
}

#[test]
fn normalize_hex_color_falls_back() {
    assert_eq!(normalize_hex_color("transparent", "#ffffff"), "#ffffff");
    assert_eq!(normalize_hex_color("blue", "invalid"), "#000000");
}

#[test]
fn is_hex_color_matches_parse() {
    assert!(is_hex_color("#333333"));
    assert!(!is_hex_color("#33"));
}
