use tempchart::color::{self, ColorError, Rgba, color_from_string, parse_color};

#[test]
fn hex_forms() {
    assert_eq!(parse_color("#355E3B").unwrap(), Rgba::rgb(0x35, 0x5E, 0x3B));
    assert_eq!(parse_color("#ffffff").unwrap(), color::WHITE);
    assert_eq!(parse_color("#80FF0000").unwrap(), Rgba::new(255, 0, 0, 0x80));
    assert_eq!(parse_color("  #000  ").unwrap(), color::BLACK);
}

#[test]
fn rgb_functions_and_names() {
    assert_eq!(parse_color("rgb(1, 2, 3)").unwrap(), Rgba::rgb(1, 2, 3));
    assert_eq!(parse_color("RGBA(10,20,30,0.5)").unwrap(), Rgba::new(10, 20, 30, 128));
    assert_eq!(parse_color("Orange").unwrap(), color::ORANGE);
    assert_eq!(parse_color("clear").unwrap(), color::CLEAR);
}

#[test]
fn malformed_input_is_reported() {
    assert_eq!(parse_color(""), Err(ColorError::Empty));
    assert!(matches!(parse_color("#12345"), Err(ColorError::InvalidHex(_))));
    assert!(matches!(parse_color("#GGGGGG"), Err(ColorError::InvalidHex(_))));
    assert!(matches!(parse_color("rgb(300,0,0)"), Err(ColorError::InvalidFunction(_))));
    assert!(matches!(parse_color("rgba(0,0,0,2)"), Err(ColorError::InvalidFunction(_))));
    assert!(matches!(parse_color("chartreuse-ish"), Err(ColorError::UnknownName(_))));
}

#[test]
fn total_parser_falls_back_to_visible_black() {
    assert_eq!(color_from_string("not a colour"), color::BLACK);
    assert_eq!(color_from_string("#355E3B"), Rgba::rgb(0x35, 0x5E, 0x3B));
}

#[test]
fn colours_serialize_as_hex() {
    let s = serde_json::to_string(&Rgba::rgb(0x35, 0x5E, 0x3B)).unwrap();
    assert_eq!(s, "\"#355E3B\"");
    let c: Rgba = serde_json::from_str("\"#7F000000\"").unwrap();
    assert_eq!(c, Rgba::new(0, 0, 0, 0x7F));
    assert!(serde_json::from_str::<Rgba>("\"nope\"").is_err());
}
