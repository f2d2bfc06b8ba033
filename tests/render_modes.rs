//! Integration tests for the two rendering modes.

mod common;

use forecast_compare::{Alignment, ChartStyle, LineSeries, RenderRequest};

fn xs(series: Option<&LineSeries>) -> Vec<f64> {
    series
        .map(|s| s.points.iter().map(|p| p.0).collect())
        .unwrap_or_default()
}

#[test]
fn default_mode_places_predictions_at_forecast_time() {
    let aligner = common::ramp_aligner(3);
    let request = RenderRequest::default().range(0, Some(7));
    let fig = aligner.render(&request, &ChartStyle::default());

    assert_eq!(xs(fig.axes.actual()), (0..=6).map(f64::from).collect::<Vec<_>>());
    assert_eq!(xs(fig.axes.predicted()), (3..=9).map(f64::from).collect::<Vec<_>>());
}

#[test]
fn overlap_mode_places_both_on_original_range() {
    let aligner = common::ramp_aligner(3);
    let request = RenderRequest::default()
        .range(0, Some(7))
        .alignment(Alignment::Overlap);
    let fig = aligner.render(&request, &ChartStyle::default());

    let expected: Vec<f64> = (0..=6).map(f64::from).collect();
    assert_eq!(xs(fig.axes.actual()), expected);
    assert_eq!(xs(fig.axes.predicted()), expected);
}

#[test]
fn naive_forecast_coincides_in_overlap_mode() {
    // A "repeat the input" forecaster: predicted[i] == actual[i].
    let actual: Vec<f64> = vec![2.0, 3.5, 1.0, 4.0, 4.5, 2.5];
    let aligner = forecast_compare::SeriesAligner::new(&actual, &actual, 2).expect("valid pair");

    let overlap = aligner.render(
        &RenderRequest::default().overlap(true),
        &ChartStyle::default(),
    );
    assert_eq!(
        overlap.axes.actual().map(|s| &s.points),
        overlap.axes.predicted().map(|s| &s.points)
    );

    let aligned = aligner.render(&RenderRequest::default(), &ChartStyle::default());
    assert_ne!(
        aligned.axes.actual().map(|s| &s.points),
        aligned.axes.predicted().map(|s| &s.points)
    );
}

#[test]
fn unset_end_means_full_length() {
    let aligner = common::ramp_aligner(2);
    let fig = aligner.render(&RenderRequest::default().range(1, None), &ChartStyle::default());
    assert_eq!(fig.axes.actual().map(|s| s.points.len()), Some(6));
    assert_eq!(
        fig.axes.predicted().and_then(LineSeries::x_range),
        Some((3.0, 8.0))
    );
}

#[test]
fn repeated_renders_are_independent() {
    let aligner = common::ramp_aligner(3);
    let style = ChartStyle::default();
    let first = aligner.render(&RenderRequest::default().title_suffix(" A"), &style);
    let second = aligner.render(&RenderRequest::default(), &style);
    assert_eq!(first.title, "Predictions vs actual A");
    assert_eq!(second.title, "Predictions vs actual");
    assert_eq!(first.axes, second.axes);
}
