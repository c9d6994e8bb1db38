// Demographics panel - One "name: value" line per metadata field
use crate::application::view::PanelContainer;
use crate::domain::dataset::Demographics;

pub struct DemographicsPanel;

impl DemographicsPanel {
    /// Replace the panel content with the fields of `record`.
    pub fn render(panel: &mut impl PanelContainer, record: &Demographics) {
        // Lines are built before the panel is touched so it is never left half-filled
        let lines: Vec<String> = record
            .fields()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect();

        panel.remove_lines();
        for line in lines {
            panel.append_line(line);
        }
    }
}
