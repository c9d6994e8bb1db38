// Selection registry - Fills the subject selector and reads it back
use crate::application::view::{SelectorControl, SelectorOption};
use crate::domain::dataset::Subject;

pub struct SelectionRegistry;

impl SelectionRegistry {
    /// Append one option per subject, in dataset order. Existing options stay.
    ///
    /// A subject without a usable id cannot be selected and gets no option.
    pub fn populate(selector: &mut impl SelectorControl, subjects: &[Subject]) {
        for (index, subject) in subjects.iter().enumerate() {
            let Some(id) = &subject.id else {
                tracing::warn!("Sample {} has no usable id; not selectable", index);
                continue;
            };
            let id = id.as_str().to_string();
            selector.append_option(SelectorOption {
                text: id.clone(),
                value: id,
            });
        }
        tracing::debug!("Populated selector with {} subjects", subjects.len());
    }

    pub fn current_selection(selector: &impl SelectorControl) -> Option<String> {
        selector.selector_value()
    }
}
