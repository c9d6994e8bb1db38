// View layer seams consumed by the dashboard components
use crate::domain::chart::{ChartDescription, ChartRegion};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorOption {
    pub text: String,
    pub value: String,
}

/// The subject selector control.
pub trait SelectorControl {
    fn append_option(&mut self, option: SelectorOption);

    /// Current value of the control, `None` when it has no options.
    fn selector_value(&self) -> Option<String>;
}

/// The demographics panel; each line is one child paragraph.
pub trait PanelContainer {
    fn remove_lines(&mut self);

    fn append_line(&mut self, line: String);
}

/// The external chart renderer.
pub trait PlotSurface {
    /// Fully replace whatever is plotted in `region`.
    fn new_plot(&mut self, region: ChartRegion, chart: ChartDescription);
}

pub trait ViewLayer: SelectorControl + PanelContainer + PlotSurface {}

impl<T: SelectorControl + PanelContainer + PlotSurface> ViewLayer for T {}
