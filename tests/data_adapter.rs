use tempchart::chart::{ChartView, ScatterChart, setup_data};
use tempchart::color::{self, Rgba};
use tempchart::config::ChartConfig;
use tempchart::dataset::{
    ScatterDataSet, ScatterShape, SeriesStyle, ValueLabelStyle, build_scatter_data,
    build_scatter_data_default,
};
use tempchart::format::LabelFormatter;
use tempchart::models::{Point, SeriesDescriptor};

#[test]
fn one_descriptor_becomes_one_single_point_series() {
    let values = vec![SeriesDescriptor::new((10.0, 101.3), "Amber", "#355E3B")];
    let data = build_scatter_data_default(
        &values,
        &SeriesStyle::default(),
        &ValueLabelStyle::default(),
    );
    assert_eq!(data.data_sets.len(), 1);
    let set = &data.data_sets[0];
    assert_eq!(set.label, "Amber");
    assert_eq!(set.entries, vec![Point::new(10.0, 101.3)]);
    assert_eq!(set.color, Rgba::rgb(0x35, 0x5E, 0x3B));
}

#[test]
fn per_series_constants_do_not_depend_on_data() {
    let values = vec![
        SeriesDescriptor::new((1.0, 97.0), "a", "#FF0000"),
        SeriesDescriptor::new((23.0, 104.0), "b", "#0000FF"),
    ];
    let data = build_scatter_data_default(
        &values,
        &SeriesStyle::default(),
        &ValueLabelStyle::default(),
    );
    for set in &data.data_sets {
        assert_eq!(set.shape, ScatterShape::Circle);
        assert_eq!(set.shape_size, 6.0);
        assert_eq!(set.hole_radius, 1.5);
        assert_eq!(set.hole_color, color::WHITE);
        assert!(!set.draw_highlight_indicators);
    }
    let labels: Vec<&str> = data.data_sets.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["a", "b"]);
    assert_eq!(data.value_labels.font_size, 10.0);
    assert_eq!(data.value_labels.text_color, color::BLACK);
    assert_eq!(data.value_labels.formatter, LabelFormatter::OneDecimal);
}

#[test]
fn colour_resolution_is_delegated() {
    let values = vec![SeriesDescriptor::new((1.0, 97.0), "a", "whatever")];
    let data = build_scatter_data(
        &values,
        &SeriesStyle::default(),
        &ValueLabelStyle::default(),
        |_| Rgba::rgb(1, 2, 3),
    );
    assert_eq!(data.data_sets[0].color, Rgba::rgb(1, 2, 3));
    assert_eq!(data.data_sets[0].hole_color, Rgba::rgb(1, 2, 3));
}

#[test]
fn bad_colour_degrades_to_default() {
    let values = vec![SeriesDescriptor::new((1.0, 97.0), "a", "#nothex")];
    let data = build_scatter_data_default(
        &values,
        &SeriesStyle::default(),
        &ValueLabelStyle::default(),
    );
    assert_eq!(data.data_sets[0].color, color::FALLBACK);
}

#[test]
fn setup_data_replaces_previous_dataset() {
    let cfg = ChartConfig::default();
    let mut chart = ScatterChart::load(&cfg, &[SeriesDescriptor::new((1.0, 97.0), "old", "red")]);
    setup_data(
        &mut chart,
        &[SeriesDescriptor::new((2.0, 98.0), "new", "blue")],
        &cfg,
    );
    let data = chart.data.as_ref().unwrap();
    assert_eq!(data.data_sets.len(), 1);
    assert_eq!(data.data_sets[0].label, "new");
    assert_eq!(chart.legend_entries(), vec![("new".to_string(), color::BLUE)]);
}

#[test]
fn empty_input_installs_empty_dataset() {
    let chart = ScatterChart::load(&ChartConfig::default(), &[]);
    let data = chart.data.as_ref().unwrap();
    assert!(data.is_empty());
    assert!(chart.legend_entries().is_empty());
}

#[test]
fn data_set_container_holds_many_points() {
    let mut chart = ScatterChart::default();
    let set = ScatterDataSet::new(
        vec![Point::new(0.0, 98.0), Point::new(4.0, 99.1), Point::new(8.0, 100.2)],
        "night",
    );
    chart.set_data(tempchart::dataset::ScatterData::new(vec![set]));
    assert_eq!(chart.data.as_ref().unwrap().entry_count(), 3);
}
