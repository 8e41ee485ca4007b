use std::time::{Duration, Instant};

use pagedom::{AnimationState, Content, Display, Document, Easing, Element, Transitions};

fn page() -> Document {
    Document::new(
        Element::div()
            .id("page")
            .class("game")
            .child(Element::button().id("showExampleBtn").html("Show"))
            .child(
                Element::div()
                    .id("exampleBlock")
                    .class("example-block")
                    .hidden()
                    .transitions(Transitions::new().opacity(Duration::from_millis(200), Easing::Linear)),
            ),
    )
}

// ============================================================================
// Lookup Tests
// ============================================================================

#[test]
fn test_get_element_by_id() {
    let doc = page();

    assert_eq!(doc.get_element_by_id("page").map(|e| e.tag.as_str()), Some("div"));
    assert_eq!(
        doc.get_element_by_id("showExampleBtn").map(|e| e.tag.as_str()),
        Some("button")
    );
    assert!(doc.get_element_by_id("missing").is_none());
    assert!(doc.contains("exampleBlock"));
}

#[test]
fn test_get_element_by_id_mut() {
    let mut doc = page();

    if let Some(block) = doc.get_element_by_id_mut("exampleBlock") {
        block.set_display(Display::Block);
        block.set_inner_html("<p>hi</p>");
    }

    let block = doc.get_element_by_id("exampleBlock").unwrap();
    assert_eq!(block.display, Some(Display::Block));
    assert_eq!(block.content, Content::Html("<p>hi</p>".into()));
    assert_eq!(block.inner_html(), "<p>hi</p>");
}

#[test]
fn test_is_hidden() {
    assert!(Element::div().is_hidden());
    assert!(Element::div().hidden().is_hidden());
    assert!(!Element::div().display(Display::Block).is_hidden());
    assert!(!Element::div().display(Display::Flex).is_hidden());
}

#[test]
fn test_child_replaces_markup() {
    let el = Element::div().html("<b>x</b>").child(Element::text("y").id("y"));
    assert!(matches!(el.content, Content::Children(ref c) if c.len() == 1));
}

// ============================================================================
// Serialization Tests
// ============================================================================

#[test]
fn test_to_html() {
    let doc = page();
    assert_eq!(
        doc.to_html(),
        concat!(
            r#"<div id="page" class="game">"#,
            r#"<button id="showExampleBtn">Show</button>"#,
            r#"<div id="exampleBlock" class="example-block" style="display: none"></div>"#,
            "</div>"
        )
    );
}

#[test]
fn test_text_is_escaped_markup_is_not() {
    let el = Element::div()
        .id("root")
        .child(Element::text("1 < 2").id("t"))
        .child(Element::div().id("m").html("<i>raw</i>"));

    assert_eq!(
        pagedom::to_html(&el),
        r#"<div id="root"><span id="t">1 &lt; 2</span><div id="m"><i>raw</i></div></div>"#
    );
}

#[test]
fn test_data_attributes_sorted() {
    let el = Element::div().id("d").data("zeta", "1").data("alpha", "\"q\"");
    assert_eq!(
        pagedom::to_html(&el),
        r#"<div id="d" data-alpha="&quot;q&quot;" data-zeta="1"></div>"#
    );
    assert_eq!(el.get_data("zeta").map(String::as_str), Some("1"));
}

#[test]
fn test_to_html_at_paints_fade() {
    let mut doc = page();
    let mut animation = AnimationState::new();
    let start = Instant::now();

    animation.update_at(doc.root(), start);
    if let Some(block) = doc.get_element_by_id_mut("exampleBlock") {
        block.set_display(Display::Block);
    }
    animation.update_at(doc.root(), start);

    let html = doc.to_html_at(&animation, start + Duration::from_millis(100));
    assert!(html.contains(r#"style="display: block; opacity: 0.50""#));

    let settled = doc.to_html_at(&animation, start + Duration::from_millis(250));
    assert!(settled.contains(r#"style="display: block""#));
    assert!(!settled.contains("opacity"));
}

#[test]
fn test_to_html_at_keeps_fading_out_element_painted() {
    let mut doc = page();
    let mut animation = AnimationState::new();
    let start = Instant::now();

    if let Some(block) = doc.get_element_by_id_mut("exampleBlock") {
        block.set_display(Display::Block);
    }
    animation.update_at(doc.root(), start);
    if let Some(block) = doc.get_element_by_id_mut("exampleBlock") {
        block.set_display(Display::None);
    }
    animation.update_at(doc.root(), start);

    // The tree already says hidden; the painted page still shows the fade
    assert!(doc.to_html().contains(r#"style="display: none""#));
    let html = doc.to_html_at(&animation, start + Duration::from_millis(100));
    assert!(html.contains(r#"style="display: block; opacity: 0.50""#));

    let done = doc.to_html_at(&animation, start + Duration::from_millis(200));
    assert!(done.contains(r#"style="display: none""#));
}

#[test]
fn test_to_html_at_fading_out_keeps_previous_display() {
    let fading = |display: Display| {
        Element::div()
            .id("row")
            .display(display)
            .transitions(Transitions::new().opacity(Duration::from_millis(200), Easing::Linear))
    };
    let mut animation = AnimationState::new();
    let start = Instant::now();

    animation.update_at(&fading(Display::Flex), start);
    let hidden = fading(Display::None);
    animation.update_at(&hidden, start);

    let mid = start + Duration::from_millis(100);
    assert_eq!(animation.fading_out_display_at("row", mid), Some(Display::Flex));
    assert_eq!(
        pagedom::to_html_at(&hidden, &animation, mid),
        r#"<div id="row" style="display: flex; opacity: 0.50"></div>"#
    );

    let done = start + Duration::from_millis(200);
    assert_eq!(animation.fading_out_display_at("row", done), None);
    assert_eq!(
        pagedom::to_html_at(&hidden, &animation, done),
        r#"<div id="row" style="display: none"></div>"#
    );
}
