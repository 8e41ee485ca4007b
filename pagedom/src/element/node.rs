use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::transitions::Transitions;
use crate::types::Display;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,
    pub classes: Vec<String>,

    // Content
    pub content: Content,

    // Visual
    /// Inline `display` style. `None` means the style was never set.
    pub display: Option<Display>,
    pub transitions: Transitions,

    // Custom data storage, serialized as `data-*` attributes
    pub data: BTreeMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".into(),
            classes: Vec::new(),
            content: Content::None,
            display: None,
            transitions: Transitions::default(),
            data: BTreeMap::new(),
        }
    }
}

impl Element {
    pub fn div() -> Self {
        Self {
            id: generate_id("div"),
            ..Default::default()
        }
    }

    pub fn button() -> Self {
        Self {
            id: generate_id("button"),
            tag: "button".into(),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("span"),
            tag: "span".into(),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    // Visual
    pub fn display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    /// Shorthand for `display(Display::None)`.
    pub fn hidden(self) -> Self {
        self.display(Display::None)
    }

    pub fn transitions(mut self, transitions: Transitions) -> Self {
        self.transitions = transitions;
        self
    }

    // Content
    pub fn html(mut self, markup: impl Into<String>) -> Self {
        self.content = Content::Html(markup.into());
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => {
                // Replace content with children
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }

    // Runtime mutation

    /// True when the element's display is unset or `none`.
    pub fn is_hidden(&self) -> bool {
        matches!(self.display, None | Some(Display::None))
    }

    pub fn set_display(&mut self, display: Display) {
        self.display = Some(display);
    }

    /// Replace the element's content with raw markup.
    pub fn set_inner_html(&mut self, markup: impl Into<String>) {
        self.content = Content::Html(markup.into());
    }

    /// Serialize the element's content, without its own tag.
    pub fn inner_html(&self) -> String {
        crate::render::inner_html(self)
    }
}
