//! Worked-example display for arithmetic games.
//!
//! Two concerns live here: toggling a content block (and the label of the
//! control that triggers it) between hidden and shown, and rendering small
//! arithmetic expressions as HTML fragments for that block.
//!
//! ```
//! use example_display::{render_sum, ExampleDisplay, Visibility};
//! use pagedom::{Document, Element};
//!
//! let mut page = Document::new(
//!     Element::div()
//!         .id("game")
//!         .child(Element::button().id("showExampleBtn"))
//!         .child(Element::div().id("exampleBlock")),
//! );
//!
//! let display = ExampleDisplay::default();
//! assert_eq!(display.toggle(&mut page), Some(Visibility::Shown));
//! assert!(render_sum(&[5, -3, 2], 4).contains("+5-3+2"));
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod example;
pub mod handles;
pub mod labels;
pub mod render;
pub mod toggle;
pub mod visibility;

pub use config::{DisplayConfig, FadeConfig, FadeEasing};
pub use display::ExampleDisplay;
pub use error::ConfigError;
pub use example::WorkedExample;
pub use handles::{ContentBlock, TriggerControl};
pub use labels::{Label, TriggerLabels};
pub use render::{
    format_signed, render_product, render_square, render_sum, render_sum_with, ExpressionLine,
    Operand,
};
pub use toggle::{toggle_example, transition};
pub use visibility::Visibility;
