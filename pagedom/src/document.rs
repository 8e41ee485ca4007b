//! A page: one element tree addressed by element id.

use std::time::Instant;

use crate::animation::AnimationState;
use crate::element::{find_element, find_element_mut, Element};

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get_element_by_id(id).is_some()
    }

    pub fn to_html(&self) -> String {
        crate::render::to_html(&self.root)
    }

    pub fn to_html_at(&self, animation: &AnimationState, now: Instant) -> String {
        crate::render::to_html_at(&self.root, animation, now)
    }
}

impl From<Element> for Document {
    fn from(root: Element) -> Self {
        Self::new(root)
    }
}
