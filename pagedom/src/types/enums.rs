/// CSS `display` values an element can carry.
///
/// An element with no display set (`Option::None` on [`crate::Element`])
/// behaves like an element whose inline style was never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
    Inline,
    InlineBlock,
    Flex,
}

impl Display {
    /// The CSS keyword for this value.
    pub const fn as_css(self) -> &'static str {
        match self {
            Display::None => "none",
            Display::Block => "block",
            Display::Inline => "inline",
            Display::InlineBlock => "inline-block",
            Display::Flex => "flex",
        }
    }
}

impl std::fmt::Display for Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_css())
    }
}
