//! Trigger control labels.

use pagedom::{escape_attr, escape_html};
use serde::{Deserialize, Serialize};

use crate::visibility::Visibility;

/// An icon plus caption, rendered as `<i class="{icon}"></i> {text}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Icon font classes, e.g. `fas fa-eye`. Empty for a text-only label.
    #[serde(default)]
    pub icon: String,
    pub text: String,
}

impl Label {
    pub fn new(icon: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            text: text.into(),
        }
    }

    pub fn text_only(text: impl Into<String>) -> Self {
        Self::new("", text)
    }

    pub fn to_markup(&self) -> String {
        if self.icon.is_empty() {
            return escape_html(&self.text);
        }
        format!(
            r#"<i class="{}"></i> {}"#,
            escape_attr(&self.icon),
            escape_html(&self.text)
        )
    }
}

/// The two labels a trigger control switches between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerLabels {
    /// Shown while the example is hidden.
    pub show: Label,
    /// Shown while the example is visible.
    pub hide: Label,
}

impl Default for TriggerLabels {
    fn default() -> Self {
        Self {
            show: Label::new("fas fa-eye", "Показать пример вычислений"),
            hide: Label::new("fas fa-eye-slash", "Скрыть пример"),
        }
    }
}

impl TriggerLabels {
    pub fn new(show: Label, hide: Label) -> Self {
        Self { show, hide }
    }

    /// The label that belongs with a block in the given state.
    pub fn for_visibility(&self, visibility: Visibility) -> &Label {
        match visibility {
            Visibility::Hidden => &self.show,
            Visibility::Shown => &self.hide,
        }
    }
}
