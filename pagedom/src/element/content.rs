#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    /// Plain text, escaped when serialized.
    Text(String),
    /// Raw markup, written out verbatim. Replaces any previous children.
    Html(String),
    Children(Vec<super::Element>),
}
