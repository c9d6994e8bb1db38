// Chart description domain models (Plotly-compatible trace + layout)
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Named display region a chart is plotted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartRegion {
    Bar,
    Bubble,
    Gauge,
}

impl ChartRegion {
    pub fn id(&self) -> &'static str {
        match self {
            ChartRegion::Bar => "bar",
            ChartRegion::Bubble => "bubble",
            ChartRegion::Gauge => "gauge",
        }
    }
}

impl fmt::Display for ChartRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ChartRegion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bar" => Ok(ChartRegion::Bar),
            "bubble" => Ok(ChartRegion::Bubble),
            "gauge" => Ok(ChartRegion::Gauge),
            other => Err(format!("unknown chart region: {}", other)),
        }
    }
}

/// A complete chart: the traces to draw and the layout to draw them in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDescription {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl ChartDescription {
    pub fn new(trace: Trace, layout: Layout) -> Self {
        Self {
            data: vec![trace],
            layout,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar(BarTrace),
    Scatter(ScatterTrace),
    Indicator(IndicatorTrace),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Orientation {
    #[serde(rename = "h")]
    Horizontal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Vec<f64>,
    pub y: Vec<String>,
    pub text: Vec<String>,
    pub hovertemplate: String,
    pub orientation: Orientation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub x: Vec<i64>,
    pub y: Vec<f64>,
    pub text: Vec<String>,
    pub hovertemplate: String,
    pub mode: String,
    pub marker: Marker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub size: Vec<f64>,
    pub color: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorTrace {
    pub domain: Domain,
    /// Needle value; `None` serializes as `null` and is left to the renderer.
    pub value: Option<f64>,
    pub title: Title,
    pub mode: String,
    pub gauge: Gauge,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Domain {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gauge {
    pub axis: GaugeAxis,
    pub bar: GaugeBar,
    pub steps: Vec<GaugeStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeAxis {
    pub range: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeBar {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeStep {
    pub range: [f64; 2],
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub height: u32,
    pub width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

impl Layout {
    pub fn sized(height: u32, width: u32) -> Self {
        Self {
            height,
            width,
            xaxis: None,
            yaxis: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}
