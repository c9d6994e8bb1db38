// In-memory view model backing the dashboard's selector, panel and chart regions
use crate::application::view::{PanelContainer, PlotSurface, SelectorControl, SelectorOption};
use crate::domain::chart::{ChartDescription, ChartRegion};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    options: Vec<SelectorOption>,
    selected: Option<String>,
    panel: Vec<String>,
    charts: BTreeMap<ChartRegion, ChartDescription>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardStatus {
    Unloaded,
    Loaded,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectorSnapshot {
    pub options: Vec<SelectorOption>,
    pub value: Option<String>,
}

/// Everything currently displayed, as served to clients.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub status: DashboardStatus,
    pub selector: SelectorSnapshot,
    pub demographics: Vec<String>,
    pub charts: BTreeMap<ChartRegion, ChartDescription>,
}

impl ViewState {
    /// A view whose selector already holds the given option values.
    #[cfg(test)]
    pub fn with_options<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = values
            .into_iter()
            .map(|value| {
                let value = value.into();
                SelectorOption {
                    text: value.clone(),
                    value,
                }
            })
            .collect();
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn selector_options(&self) -> &[SelectorOption] {
        &self.options
    }

    /// Set the selector value. Like a select element, only existing option values are accepted.
    pub fn select(&mut self, value: &str) -> bool {
        if self.options.iter().any(|o| o.value == value) {
            self.selected = Some(value.to_string());
            true
        } else {
            false
        }
    }

    pub fn panel_lines(&self) -> &[String] {
        &self.panel
    }

    pub fn chart(&self, region: ChartRegion) -> Option<&ChartDescription> {
        self.charts.get(&region)
    }

    pub fn snapshot(&self, status: DashboardStatus) -> DashboardSnapshot {
        DashboardSnapshot {
            status,
            selector: SelectorSnapshot {
                options: self.options.clone(),
                value: self.selector_value(),
            },
            demographics: self.panel.clone(),
            charts: self.charts.clone(),
        }
    }
}

impl SelectorControl for ViewState {
    fn append_option(&mut self, option: SelectorOption) {
        self.options.push(option);
    }

    fn selector_value(&self) -> Option<String> {
        // An untouched select shows its first option
        self.selected
            .clone()
            .or_else(|| self.options.first().map(|o| o.value.clone()))
    }
}

impl PanelContainer for ViewState {
    fn remove_lines(&mut self) {
        self.panel.clear();
    }

    fn append_line(&mut self, line: String) {
        self.panel.push(line);
    }
}

impl PlotSurface for ViewState {
    fn new_plot(&mut self, region: ChartRegion, chart: ChartDescription) {
        self.charts.insert(region, chart);
    }
}
