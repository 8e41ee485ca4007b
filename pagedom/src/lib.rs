pub mod animation;
pub mod document;
pub mod element;
pub mod render;
pub mod transitions;
pub mod types;

pub use animation::AnimationState;
pub use document::Document;
pub use element::{Content, Element};
pub use render::{escape_attr, escape_html, to_html, to_html_at};
pub use transitions::{Easing, TransitionConfig, Transitions};
pub use types::*;
