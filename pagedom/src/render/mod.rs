//! HTML serialization of an element tree.

use std::fmt::Write;
use std::time::Instant;

use crate::animation::AnimationState;
use crate::element::{Content, Element};

/// Escapes a string for use as HTML text content.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes a string for use in a double-quoted HTML attribute value.
pub fn escape_attr(s: &str) -> String {
    escape_html(s).replace('"', "&quot;").replace('\'', "&#39;")
}

/// Serialize an element tree to HTML, ignoring any running fades.
pub fn to_html(root: &Element) -> String {
    let mut out = String::new();
    render_element(root, None, &mut out);
    out
}

/// Serialize an element tree to HTML as it is painted at `now`.
///
/// Elements with an active fade get an `opacity` style. An element that is
/// already hidden but still fading out keeps its previous display until the
/// fade ends.
pub fn to_html_at(root: &Element, animation: &AnimationState, now: Instant) -> String {
    let mut out = String::new();
    render_element(root, Some((animation, now)), &mut out);
    out
}

/// Serialize only the content of an element.
pub fn inner_html(element: &Element) -> String {
    let mut out = String::new();
    render_content(element, None, &mut out);
    out
}

fn render_element(element: &Element, animation: Option<(&AnimationState, Instant)>, out: &mut String) {
    let _ = write!(out, "<{} id=\"{}\"", element.tag, escape_attr(&element.id));

    if !element.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape_attr(&element.classes.join(" ")));
    }

    for (key, value) in &element.data {
        let _ = write!(out, " data-{}=\"{}\"", key, escape_attr(value));
    }

    let style = style_attr(element, animation);
    if !style.is_empty() {
        let _ = write!(out, " style=\"{}\"", style);
    }

    out.push('>');
    render_content(element, animation, out);
    let _ = write!(out, "</{}>", element.tag);
}

fn render_content(element: &Element, animation: Option<(&AnimationState, Instant)>, out: &mut String) {
    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape_html(text)),
        Content::Html(markup) => out.push_str(markup),
        Content::Children(children) => {
            for child in children {
                render_element(child, animation, out);
            }
        }
    }
}

fn style_attr(element: &Element, animation: Option<(&AnimationState, Instant)>) -> String {
    let mut display = element.display;
    let mut opacity = None;

    if let Some((animation, now)) = animation {
        if let Some(shown) = animation.fading_out_display_at(&element.id, now) {
            log::trace!("[render] {} still fading out, painting as {}", element.id, shown);
            display = Some(shown);
        }
        opacity = animation.get_opacity_at(&element.id, now);
    }

    let mut parts = Vec::new();
    if let Some(display) = display {
        parts.push(format!("display: {display}"));
    }
    if let Some(opacity) = opacity {
        parts.push(format!("opacity: {opacity:.2}"));
    }
    parts.join("; ")
}
