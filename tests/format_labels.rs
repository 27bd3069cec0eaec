use tempchart::format::{
    LabelFormatter, fahrenheit_label, millilitre_label, time_of_day_label, value_label,
};

#[test]
fn fahrenheit_truncates_and_appends_unit() {
    assert_eq!(fahrenheit_label(10.0), "10°F");
    assert_eq!(fahrenheit_label(101.9), "101°F");
    assert_eq!(fahrenheit_label(90.0), "90°F");
}

#[test]
fn millilitre_labels_only_the_allow_set() {
    assert_eq!(millilitre_label(3.0), "");
    assert_eq!(millilitre_label(4.0), "4ml");
    assert_eq!(millilitre_label(10.0), "10ml");
    assert_eq!(millilitre_label(12.0), "");
    // Truncation before the membership check
    assert_eq!(millilitre_label(4.9), "4ml");
    assert_eq!(millilitre_label(5.9), "");
}

#[test]
fn time_of_day_rounds_then_looks_up() {
    assert_eq!(time_of_day_label("01-05", 12.4), "01-05\n12:00\n");
    assert_eq!(time_of_day_label("01-05", 0.0), "01-05\n0:00\n");
    assert_eq!(time_of_day_label("01-05", 24.0), "01-05\n0:00\n");
    assert_eq!(time_of_day_label("01-05", 7.6), "01-05\n8:00\n");
    assert_eq!(time_of_day_label("01-05", 10.0), "");
}

#[test]
fn rounding_versus_truncation_at_boundaries() {
    // 3.6 rounds to 4 on the time axis but truncates to 3 on the volume axis.
    assert_eq!(time_of_day_label("d", 3.6), "d\n4:00\n");
    assert_eq!(millilitre_label(3.6), "");
    assert_eq!(fahrenheit_label(3.6), "3°F");
}

#[test]
fn value_label_has_one_decimal() {
    assert_eq!(value_label(101.3), "101.3");
    assert_eq!(value_label(98.0), "98.0");
    assert_eq!(value_label(99.96), "100.0");
}

#[test]
fn formatter_enum_dispatches_to_functions() {
    let date = LabelFormatter::TimeOfDay {
        date: "02-14".into(),
    };
    for v in [-1.0, 0.0, 2.5, 4.0, 11.5, 23.9, 108.0] {
        assert_eq!(LabelFormatter::Fahrenheit.format(v), fahrenheit_label(v));
        assert_eq!(LabelFormatter::Millilitre.format(v), millilitre_label(v));
        assert_eq!(date.format(v), time_of_day_label("02-14", v));
        assert_eq!(LabelFormatter::OneDecimal.format(v), value_label(v));
    }
}

#[test]
fn formatter_selects_by_kind_in_json() {
    let f: LabelFormatter =
        serde_json::from_str(r#"{"kind":"time_of_day","date":"03-01"}"#).unwrap();
    assert_eq!(f.format(16.0), "03-01\n16:00\n");
}

#[test]
fn fahrenheit_keeps_large_magnitudes_exact() {
    assert_eq!(fahrenheit_label(1e20), "100000000000000000000°F");
    assert_eq!(fahrenheit_label(-1e20), "-100000000000000000000°F");
    assert_eq!(fahrenheit_label(-0.0), "0°F");
    assert_eq!(fahrenheit_label(-0.9), "0°F");
    assert_eq!(millilitre_label(1e20), "");
}
