use tempchart::axis::{AxisSpec, compute_tick_values};

#[test]
fn temperature_axis_ticks_every_two_degrees() {
    let axis = AxisSpec::temperature();
    let expected: Vec<f64> = (0..10).map(|i| 90.0 + 2.0 * i as f64).collect();
    assert_eq!(axis.tick_values(), expected);
    let labels: Vec<String> = axis.tick_labels().into_iter().map(|(_, l)| l).collect();
    assert_eq!(labels.first().unwrap(), "90°F");
    assert_eq!(labels.last().unwrap(), "108°F");
}

#[test]
fn volume_axis_labels_only_low_even_ticks() {
    let axis = AxisSpec::volume();
    let ticks = axis.tick_values();
    assert_eq!(ticks.first(), Some(&0.0));
    assert_eq!(ticks.last(), Some(&26.0));
    assert_eq!(ticks.len(), 14);

    let shown: Vec<String> = axis
        .tick_labels()
        .into_iter()
        .map(|(_, l)| l)
        .filter(|l| !l.is_empty())
        .collect();
    assert_eq!(shown, vec!["0ml", "2ml", "4ml", "6ml", "8ml", "10ml"]);
}

#[test]
fn time_axis_ticks_every_four_hours() {
    let axis = AxisSpec::time_of_day("01-05");
    assert_eq!(
        axis.tick_values(),
        vec![0.0, 4.0, 8.0, 12.0, 16.0, 20.0, 24.0]
    );
    assert!(axis.tick_labels().iter().all(|(_, l)| l.starts_with("01-05\n")));
}

#[test]
fn negative_domain_has_no_negative_zero() {
    let ticks = compute_tick_values(-4.0, 4.0, 4, None);
    assert_eq!(ticks, vec![-4.0, -2.0, 0.0, 2.0, 4.0]);
    assert!(ticks[2].is_sign_positive());
}

#[test]
fn huge_label_count_is_clamped() {
    let ticks = compute_tick_values(90.0, 108.0, 50_000_000, None);
    assert!(!ticks.is_empty());
    assert!(ticks.len() <= 26, "got {} ticks", ticks.len());
    assert_eq!(ticks, compute_tick_values(90.0, 108.0, 25, None));
}
