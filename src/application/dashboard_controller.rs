// Dashboard controller - Loads the dataset once and re-renders on selection change
use crate::application::chart_renderer::{self, ShapeError};
use crate::application::dataset_source::{DatasetSource, LoadError};
use crate::application::demographics_panel::DemographicsPanel;
use crate::application::selection_registry::SelectionRegistry;
use crate::application::view::ViewLayer;
use crate::domain::dataset::{Dataset, Demographics, Subject};

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("dataset load failed")]
    Load(#[from] LoadError),

    #[error("chart data does not have the expected shape")]
    Shape(#[from] ShapeError),

    #[error("dashboard has no dataset loaded")]
    NotLoaded,

    #[error("dashboard dataset is already loaded")]
    AlreadyLoaded,
}

#[derive(Debug)]
pub enum DashboardState {
    Unloaded,
    Loaded { dataset: Dataset },
}

/// Which halves of the display a selection change refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionOutcome {
    pub charts_updated: bool,
    pub demographics_updated: bool,
}

pub struct DashboardController<V> {
    view: V,
    state: DashboardState,
}

impl<V: ViewLayer> DashboardController<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            state: DashboardState::Unloaded,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, DashboardState::Loaded { .. })
    }

    /// Fetch the dataset, fill the selector and render the first subject.
    ///
    /// A failed fetch leaves the dashboard `Unloaded` with nothing rendered.
    pub async fn load(&mut self, source: &dyn DatasetSource) -> Result<(), DashboardError> {
        if self.is_loaded() {
            return Err(DashboardError::AlreadyLoaded);
        }

        let dataset = source.load().await.inspect_err(|e| {
            tracing::error!("Dataset load failed: {:?}", e);
        })?;

        tracing::info!(
            "Loaded dataset with {} samples and {} metadata records",
            dataset.samples.len(),
            dataset.metadata.len()
        );

        SelectionRegistry::populate(&mut self.view, &dataset.samples);

        // The default view is positional: index 0 of each collection, not joined by id.
        // Each half renders even if the other fails; the first failure is reported.
        let demographics = match dataset.metadata.first() {
            Some(record) => render_demographics(&mut self.view, record),
            None => {
                tracing::warn!("Dataset has no metadata; skipping demographics and gauge");
                Ok(())
            }
        };
        let charts = match dataset.samples.first() {
            Some(subject) => render_subject(&mut self.view, subject),
            None => {
                tracing::warn!("Dataset has no samples; skipping bar and bubble charts");
                Ok(())
            }
        };

        self.state = DashboardState::Loaded { dataset };
        demographics.and(charts)?;
        Ok(())
    }

    /// Handle a change of the selector: re-render whatever matches the new value.
    pub fn on_selection_change(&mut self) -> Result<SelectionOutcome, DashboardError> {
        let DashboardState::Loaded { dataset } = &self.state else {
            return Err(DashboardError::NotLoaded);
        };

        let Some(selection) = SelectionRegistry::current_selection(&self.view) else {
            return Ok(SelectionOutcome::default());
        };
        tracing::debug!("Selection changed to {}", selection);

        let mut outcome = SelectionOutcome::default();

        let charts = match dataset.find_subject(&selection) {
            Some(subject) => {
                outcome.charts_updated = true;
                render_subject(&mut self.view, subject)
            }
            None => {
                tracing::warn!("No samples found for subject {}", selection);
                Ok(())
            }
        };

        let demographics = match dataset.find_demographics(&selection) {
            Some(record) => {
                outcome.demographics_updated = true;
                render_demographics(&mut self.view, record)
            }
            None => {
                tracing::warn!("No metadata found for subject {}", selection);
                Ok(())
            }
        };

        charts.and(demographics)?;
        Ok(outcome)
    }
}

fn render_subject(view: &mut impl ViewLayer, subject: &Subject) -> Result<(), ShapeError> {
    chart_renderer::render_ranked_bar(view, subject)?;
    chart_renderer::render_bubble(view, subject)
}

/// Panel first: a bad `wfreq` still leaves the demographics lines shown.
fn render_demographics(view: &mut impl ViewLayer, record: &Demographics) -> Result<(), ShapeError> {
    DemographicsPanel::render(view, record);
    chart_renderer::render_gauge(view, record)
}
