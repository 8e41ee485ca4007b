//! Capabilities the toggle needs from its two page elements.
//!
//! Any host can implement these; [`pagedom::Element`] implements both.

use pagedom::Element;

use crate::labels::Label;
use crate::visibility::Visibility;

/// The block that holds the worked example.
pub trait ContentBlock {
    fn visibility(&self) -> Visibility;

    fn set_visibility(&mut self, visibility: Visibility);

    /// Replace the block's inner markup.
    fn set_content(&mut self, markup: &str);
}

/// The control whose label mirrors the block's visibility.
pub trait TriggerControl {
    fn set_label(&mut self, label: &Label);
}

impl ContentBlock for Element {
    fn visibility(&self) -> Visibility {
        Visibility::from_display(self.display)
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.set_display(visibility.to_display());
    }

    fn set_content(&mut self, markup: &str) {
        log::trace!("[display] Writing {} bytes of markup into {}", markup.len(), self.id);
        self.set_inner_html(markup);
    }
}

impl TriggerControl for Element {
    fn set_label(&mut self, label: &Label) {
        self.set_inner_html(label.to_markup());
    }
}
