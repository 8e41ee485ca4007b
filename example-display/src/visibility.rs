use pagedom::Display;

/// Whether the worked example is currently on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    /// The state a single toggle leads to.
    pub const fn toggled(self) -> Self {
        match self {
            Visibility::Hidden => Visibility::Shown,
            Visibility::Shown => Visibility::Hidden,
        }
    }

    /// Read visibility from an element's inline display.
    /// An unset display counts as hidden.
    pub fn from_display(display: Option<Display>) -> Self {
        match display {
            None | Some(Display::None) => Visibility::Hidden,
            Some(_) => Visibility::Shown,
        }
    }

    /// The display written when entering this state.
    pub const fn to_display(self) -> Display {
        match self {
            Visibility::Hidden => Display::None,
            Visibility::Shown => Display::Block,
        }
    }
}
