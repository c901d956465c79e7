use super::*;
use crate::schema::ColorConfig;

#[test]
fn parses_hex_formats() {
    assert_eq!(parse_color("#3b82f6").unwrap(), Color::rgb(0x3b, 0x82, 0xf6));
    assert_eq!(parse_color("#fff").unwrap(), Color::rgb(255, 255, 255));
    assert_eq!(
        parse_color("#10b98180").unwrap(),
        Color::from_rgba(0x10, 0xb9, 0x81, 0x80)
    );
}

#[test]
fn parses_rgba_formats() {
    assert_eq!(
        parse_color("rgba(148,163,184,0.5)").unwrap(),
        Color::from_rgba(148, 163, 184, 128)
    );
    assert_eq!(
        parse_color("rgba( 1 , 2 , 3 , 200 )").unwrap(),
        Color::from_rgba(1, 2, 3, 200)
    );
    assert_eq!(parse_color("rgb(1,2,3)").unwrap(), Color::rgb(1, 2, 3));
}

#[test]
fn rejects_bad_colors() {
    assert!(parse_color("#12345").is_err());
    assert!(parse_color("#ggghhh").is_err());
    assert!(parse_color("rgba(1,2,3,1.5)").is_err());
    assert!(parse_color("rgba(1,2,3,300)").is_err());
    assert!(parse_color("rgba(300,2,3,1)").is_err());
    assert!(parse_color("blue").is_err());
}

#[test]
fn validate_color_matches_parse() {
    assert!(validate_color("#abc"));
    assert!(validate_color("rgba(0,0,0,0.2)"));
    assert!(!validate_color(""));
    assert!(!validate_color("rgba(999,0,0,1)"));
    assert!(!validate_color("hsl(0,0%,0%)"));
}

#[test]
fn default_palette_resolves() {
    let palette = Palette::default();
    assert_eq!(palette.primary, Color::rgb(0x3b, 0x82, 0xf6));
    assert_eq!(palette.accent, Color::rgb(0x8b, 0x5c, 0xf6));
}

#[test]
fn invalid_palette_entry_falls_back() {
    let config = ColorConfig {
        primary: "not-a-color".into(),
        ..ColorConfig::default()
    };
    let palette = Palette::resolve(&config);
    assert_eq!(palette.primary, Color::rgb(0x3b, 0x82, 0xf6));
}
