//! The example display component, bound to a page.

use pagedom::Document;

use crate::config::DisplayConfig;
use crate::error::ConfigError;
use crate::example::WorkedExample;
use crate::handles::{ContentBlock, TriggerControl};
use crate::render::Operand;
use crate::toggle::transition;
use crate::visibility::Visibility;

/// Shows and hides the worked example on a page and fills it with content.
///
/// The component holds only configuration; all state lives in the page.
#[derive(Debug, Clone, Default)]
pub struct ExampleDisplay {
    config: DisplayConfig,
}

impl ExampleDisplay {
    /// Create a display from a validated config.
    pub fn new(config: DisplayConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Both elements present on the page.
    fn has_elements(&self, page: &Document) -> bool {
        page.contains(&self.config.block_id) && page.contains(&self.config.trigger_id)
    }

    /// Current state of the block, or `None` if either element is missing.
    pub fn visibility(&self, page: &Document) -> Option<Visibility> {
        if !self.has_elements(page) {
            return None;
        }
        page.get_element_by_id(&self.config.block_id)
            .map(ContentBlock::visibility)
    }

    /// Toggle the example block and relabel the trigger.
    ///
    /// Returns the new state. When either element is missing the page is left
    /// untouched and `None` is returned.
    pub fn toggle(&self, page: &mut Document) -> Option<Visibility> {
        let Some(current) = self.visibility(page) else {
            log::debug!(
                "[display] '{}' or '{}' not on page, ignoring toggle",
                self.config.block_id,
                self.config.trigger_id
            );
            return None;
        };

        // Same writes as `toggle_example`, one element at a time since both
        // live in the same tree
        let (next, label) = transition(current, &self.config.labels);

        let block = page.get_element_by_id_mut(&self.config.block_id)?;
        if let Some(fade) = &self.config.fade {
            block.transitions = fade.to_transitions();
        }
        block.set_visibility(next);

        let trigger = page.get_element_by_id_mut(&self.config.trigger_id)?;
        trigger.set_label(label);

        log::debug!("[display] {} is now {:?}", self.config.block_id, next);
        Some(next)
    }

    /// Write the trigger label that matches the block's current state.
    /// Useful after building a page whose trigger has no label yet.
    pub fn sync_label(&self, page: &mut Document) -> Option<Visibility> {
        let current = self.visibility(page)?;
        let label = self.config.labels.for_visibility(current);
        page.get_element_by_id_mut(&self.config.trigger_id)?
            .set_label(label);
        Some(current)
    }

    /// Render an example with this display's placeholder message.
    pub fn render<T: Operand>(&self, example: &WorkedExample<T>) -> String {
        example.render_with(&self.config.unavailable_message)
    }

    /// Render an example into the block without changing its visibility.
    /// Returns false if the block is not on the page.
    pub fn show_example<T: Operand>(&self, page: &mut Document, example: &WorkedExample<T>) -> bool {
        let markup = self.render(example);
        match page.get_element_by_id_mut(&self.config.block_id) {
            Some(block) => {
                block.set_content(&markup);
                true
            }
            None => {
                log::debug!(
                    "[display] '{}' not on page, dropping example",
                    self.config.block_id
                );
                false
            }
        }
    }
}
