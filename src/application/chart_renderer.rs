// Chart renderer - Builds bar, bubble and gauge descriptions and plots them
use crate::application::view::PlotSurface;
use crate::domain::chart::{
    Axis, BarTrace, ChartDescription, ChartRegion, Domain, Gauge, GaugeAxis, GaugeBar, GaugeStep,
    IndicatorTrace, Layout, Marker, Orientation, ScatterTrace, Title, Trace,
};
use crate::domain::dataset::{Demographics, FieldValue, Subject};

const TOP_OTU_COUNT: usize = 10;

const BAR_HOVER_TEMPLATE: &str =
    "<b>Number of Samples within %{y}:</b> %{x}<br><b>OTU Organisms:</b><br><i>%{text}</i>";
const BUBBLE_HOVER_TEMPLATE: &str =
    "<b>Number of Samples within OTU:</b> %{y}<br><b>OTU Organisms:</b><br><i>%{text}</i>";
const GAUGE_TITLE: &str = "<b>Belly Button Washing Frequency</b><br>Scrubs per Week";

const GAUGE_MAX: f64 = 9.0;
/// Light yellow to dark blue, one color per unit band of the gauge.
const GAUGE_BANDS: [&str; 9] = [
    "#fafa6e", "#bdea75", "#86d780", "#54c18a", "#23aa8f", "#00918d", "#007882", "#1f5f70",
    "#2a4858",
];

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ShapeError {
    #[error(
        "subject {id} has misaligned sequences: {ids} otu_ids, {labels} otu_labels, {values} sample_values"
    )]
    Misaligned {
        id: String,
        ids: usize,
        labels: usize,
        values: usize,
    },

    #[error("record has no usable field {0}")]
    MissingField(&'static str),

    #[error("field {field} has unusable value {value}")]
    InvalidField { field: &'static str, value: String },
}

/// The parallel sequences of a subject, checked to be present and of equal length.
struct Columns<'a> {
    ids: &'a [i64],
    labels: &'a [String],
    values: &'a [f64],
}

fn parallel_columns(subject: &Subject) -> Result<Columns<'_>, ShapeError> {
    let ids = subject
        .otu_ids
        .as_deref()
        .ok_or(ShapeError::MissingField("otu_ids"))?;
    let labels = subject
        .otu_labels
        .as_deref()
        .ok_or(ShapeError::MissingField("otu_labels"))?;
    let values = subject
        .sample_values
        .as_deref()
        .ok_or(ShapeError::MissingField("sample_values"))?;

    if ids.len() != labels.len() || ids.len() != values.len() {
        return Err(ShapeError::Misaligned {
            id: subject
                .id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            ids: ids.len(),
            labels: labels.len(),
            values: values.len(),
        });
    }
    Ok(Columns { ids, labels, values })
}

/// Horizontal bars for the first ten OTUs, reversed so the first entry is drawn on top.
///
/// The subject's sequences are expected to be sorted by value, descending;
/// no re-sorting happens here.
pub fn ranked_bar_chart(subject: &Subject) -> Result<ChartDescription, ShapeError> {
    let columns = parallel_columns(subject)?;
    let count = columns.ids.len().min(TOP_OTU_COUNT);

    let y = columns.ids[..count]
        .iter()
        .rev()
        .map(|id| format!("OTU {}", id))
        .collect();
    let text = columns.labels[..count].iter().rev().cloned().collect();
    let x = columns.values[..count].iter().rev().copied().collect();

    let trace = BarTrace {
        x,
        y,
        text,
        hovertemplate: BAR_HOVER_TEMPLATE.to_string(),
        orientation: Orientation::Horizontal,
    };

    Ok(ChartDescription::new(Trace::Bar(trace), Layout::sized(450, 600)))
}

/// One bubble per OTU: position and size from the sample value, color from the OTU id.
pub fn bubble_chart(subject: &Subject) -> Result<ChartDescription, ShapeError> {
    let columns = parallel_columns(subject)?;

    let trace = ScatterTrace {
        x: columns.ids.to_vec(),
        y: columns.values.to_vec(),
        text: columns.labels.to_vec(),
        hovertemplate: BUBBLE_HOVER_TEMPLATE.to_string(),
        mode: "markers".to_string(),
        marker: Marker {
            size: columns.values.to_vec(),
            color: columns.ids.to_vec(),
        },
    };

    let layout = Layout {
        xaxis: Some(Axis {
            title: Title::new("OTU Number"),
        }),
        yaxis: Some(Axis {
            title: Title::new("Sample Value"),
        }),
        ..Layout::sized(600, 1250)
    };

    Ok(ChartDescription::new(Trace::Scatter(trace), layout))
}

fn washing_frequency(record: &Demographics) -> Result<Option<f64>, ShapeError> {
    match record.field("wfreq") {
        None => Err(ShapeError::MissingField("wfreq")),
        Some(FieldValue::Null) => Ok(None),
        Some(FieldValue::Number(n)) => Ok(Some(*n)),
        Some(FieldValue::Text(s)) => {
            s.trim()
                .parse()
                .map(Some)
                .map_err(|_| ShapeError::InvalidField {
                    field: "wfreq",
                    value: s.clone(),
                })
        }
        Some(other) => Err(ShapeError::InvalidField {
            field: "wfreq",
            value: other.to_string(),
        }),
    }
}

/// Gauge of weekly washing frequency on a fixed 0-9 scale.
///
/// Values outside the scale are passed through as-is.
pub fn gauge_chart(record: &Demographics) -> Result<ChartDescription, ShapeError> {
    let value = washing_frequency(record)?;

    let steps = GAUGE_BANDS
        .iter()
        .enumerate()
        .map(|(i, color)| GaugeStep {
            range: [i as f64, (i + 1) as f64],
            color: color.to_string(),
        })
        .collect();

    let trace = IndicatorTrace {
        domain: Domain {
            x: [0.0, 1.0],
            y: [0.0, 1.0],
        },
        value,
        title: Title::new(GAUGE_TITLE),
        mode: "gauge+number".to_string(),
        gauge: Gauge {
            axis: GaugeAxis {
                range: [0.0, GAUGE_MAX],
            },
            bar: GaugeBar {
                color: "black".to_string(),
            },
            steps,
        },
    };

    Ok(ChartDescription::new(Trace::Indicator(trace), Layout::sized(500, 400)))
}

pub fn render_ranked_bar(surface: &mut impl PlotSurface, subject: &Subject) -> Result<(), ShapeError> {
    surface.new_plot(ChartRegion::Bar, ranked_bar_chart(subject)?);
    Ok(())
}

pub fn render_bubble(surface: &mut impl PlotSurface, subject: &Subject) -> Result<(), ShapeError> {
    surface.new_plot(ChartRegion::Bubble, bubble_chart(subject)?);
    Ok(())
}

pub fn render_gauge(surface: &mut impl PlotSurface, record: &Demographics) -> Result<(), ShapeError> {
    surface.new_plot(ChartRegion::Gauge, gauge_chart(record)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::SubjectId;
    use crate::infrastructure::view_state::ViewState;
    use serde_json::json;

    fn subject(len: usize) -> Subject {
        Subject {
            id: Some(SubjectId::new("940")),
            otu_ids: Some((0..len as i64).map(|i| 1000 + i).collect()),
            otu_labels: Some((0..len).map(|i| format!("label-{}", i)).collect()),
            sample_values: Some((0..len).map(|i| (100 - i) as f64).collect()),
        }
    }

    fn bar_trace(chart: &ChartDescription) -> &BarTrace {
        match &chart.data[0] {
            Trace::Bar(trace) => trace,
            other => panic!("expected bar trace, got {:?}", other),
        }
    }

    #[test]
    fn test_ranked_bar_takes_first_ten_reversed() {
        let subject = subject(15);
        let chart = ranked_bar_chart(&subject).unwrap();
        let trace = bar_trace(&chart);

        let ids = subject.otu_ids.as_ref().unwrap();
        let labels = subject.otu_labels.as_ref().unwrap();
        let values = subject.sample_values.as_ref().unwrap();
        let expected_y: Vec<String> = (0..10).rev().map(|i| format!("OTU {}", ids[i])).collect();
        let expected_x: Vec<f64> = (0..10).rev().map(|i| values[i]).collect();
        let expected_text: Vec<String> = (0..10).rev().map(|i| labels[i].clone()).collect();

        assert_eq!(trace.y, expected_y);
        assert_eq!(trace.x, expected_x);
        assert_eq!(trace.text, expected_text);
        assert_eq!(trace.orientation, Orientation::Horizontal);
        assert_eq!(chart.layout, Layout::sized(450, 600));
    }

    #[test]
    fn test_ranked_bar_with_fewer_than_ten_entries() {
        let chart = ranked_bar_chart(&subject(3)).unwrap();
        let trace = bar_trace(&chart);

        assert_eq!(trace.y, vec!["OTU 1002", "OTU 1001", "OTU 1000"]);
        assert_eq!(trace.x, vec![98.0, 99.0, 100.0]);
    }

    #[test]
    fn test_bubble_has_one_marker_per_entry() {
        let subject = subject(23);
        let chart = bubble_chart(&subject).unwrap();
        let Trace::Scatter(trace) = &chart.data[0] else {
            panic!("expected scatter trace");
        };

        assert_eq!(trace.x.len(), 23);
        assert_eq!(trace.marker.size.len(), 23);
        assert_eq!(trace.marker.color.len(), 23);
        assert_eq!(Some(&trace.marker.size), subject.sample_values.as_ref());
        assert_eq!(Some(&trace.marker.color), subject.otu_ids.as_ref());
        assert_eq!(trace.mode, "markers");

        let layout = serde_json::to_value(&chart.layout).unwrap();
        assert_eq!(layout["xaxis"]["title"]["text"], "OTU Number");
        assert_eq!(layout["yaxis"]["title"]["text"], "Sample Value");
        assert_eq!(layout["height"], 600);
        assert_eq!(layout["width"], 1250);
    }

    #[test]
    fn test_misaligned_subject_is_rejected() {
        let mut subject = subject(4);
        subject.otu_labels.as_mut().unwrap().pop();

        assert!(matches!(
            ranked_bar_chart(&subject),
            Err(ShapeError::Misaligned { labels: 3, .. })
        ));
        assert!(bubble_chart(&subject).is_err());
    }

    #[test]
    fn test_subject_without_sequence_is_rejected_at_render() {
        let subject: Subject = serde_json::from_value(json!({
            "id": "941",
            "otu_ids": [1, 2],
            "sample_values": [5, 3]
        }))
        .unwrap();

        assert_eq!(
            ranked_bar_chart(&subject),
            Err(ShapeError::MissingField("otu_labels"))
        );
        assert_eq!(
            bubble_chart(&subject),
            Err(ShapeError::MissingField("otu_labels"))
        );
    }

    #[test]
    fn test_gauge_uses_wfreq_and_fixed_bands() {
        let record: Demographics = serde_json::from_value(json!({"id": 940, "wfreq": 3})).unwrap();
        let chart = gauge_chart(&record).unwrap();
        let Trace::Indicator(trace) = &chart.data[0] else {
            panic!("expected indicator trace");
        };

        assert_eq!(trace.value, Some(3.0));
        assert_eq!(trace.gauge.axis.range, [0.0, 9.0]);
        assert_eq!(trace.gauge.bar.color, "black");
        assert_eq!(trace.gauge.steps.len(), 9);
        assert_eq!(trace.gauge.steps[0].range, [0.0, 1.0]);
        assert_eq!(trace.gauge.steps[0].color, "#fafa6e");
        assert_eq!(trace.gauge.steps[8].range, [8.0, 9.0]);
        assert_eq!(trace.gauge.steps[8].color, "#2a4858");
        assert!(trace.title.text.contains("Belly Button Washing Frequency"));
        assert!(trace.title.text.contains("Scrubs per Week"));
        assert_eq!(chart.layout, Layout::sized(500, 400));
    }

    #[test]
    fn test_gauge_passes_through_null_and_out_of_range() {
        let null: Demographics = serde_json::from_value(json!({"id": 1, "wfreq": null})).unwrap();
        let high: Demographics = serde_json::from_value(json!({"id": 2, "wfreq": 12.5})).unwrap();

        let value = serde_json::to_value(gauge_chart(&null).unwrap()).unwrap();
        assert!(value["data"][0]["value"].is_null());

        let Trace::Indicator(trace) = &gauge_chart(&high).unwrap().data[0] else {
            panic!("expected indicator trace");
        };
        assert_eq!(trace.value, Some(12.5));
    }

    #[test]
    fn test_gauge_without_wfreq_fails() {
        let record: Demographics = serde_json::from_value(json!({"id": 940})).unwrap();
        assert_eq!(gauge_chart(&record), Err(ShapeError::MissingField("wfreq")));
    }

    #[test]
    fn test_render_replaces_region_content() {
        let mut view = ViewState::default();
        render_ranked_bar(&mut view, &subject(12)).unwrap();
        render_ranked_bar(&mut view, &subject(2)).unwrap();

        let chart = view.chart(ChartRegion::Bar).unwrap();
        assert_eq!(bar_trace(chart).y.len(), 2);
        assert!(view.chart(ChartRegion::Bubble).is_none());
    }
}
