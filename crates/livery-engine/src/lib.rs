//! Livery engine crate.
//!
//! Declarative styling for retained widget trees: a [`Style`](style::Style)
//! maps dotted key paths to values, and a [`StyleEngine`](engine::StyleEngine)
//! walks those paths through an object graph and writes each value into the
//! property it names.
//!
//! # Quick start
//!
//! ```rust
//! use livery_engine::prelude::*;
//!
//! #[derive(Default)]
//! struct Screen {
//!     title: Label,
//!     card: View,
//! }
//!
//! impl Styleable for Screen {
//!     fn type_name(&self) -> &'static str {
//!         "Screen"
//!     }
//! }
//!
//! named_children!(Screen {
//!     "title" => title,
//!     "card" => card,
//! });
//!
//! let theme = style! {
//!     "title" => style! {
//!         keys::label::TEXT_COLOR => Color::DARK_GRAY,
//!         keys::label::FONT => Font::bold_system(18.0),
//!     },
//!     "card.layer.cornerRadius" => 8.0,
//! };
//!
//! let mut screen = Screen::default();
//! StyleEngine::new().apply_style(&theme, &mut screen);
//! assert_eq!(screen.title.font, Some(Font::bold_system(18.0)));
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Styleable`](object::Styleable) for the widget, give it a
//! [`WidgetKind::Custom`](object::WidgetKind::Custom) kind and register a
//! [`ValueApplier`](apply::ValueApplier) for that kind with
//! [`StyleEngine::register`](engine::StyleEngine::register).

pub mod apply;
pub mod coords;
pub mod engine;
pub mod error;
pub mod logging;
pub mod number;
pub mod object;
pub mod paint;
pub mod style;
pub mod text;
pub mod widgets;

/// Everything needed to write and apply styles.
pub mod prelude {
    pub use crate::apply::{Assignment, FromValue, ValueApplier};
    pub use crate::coords::Size;
    pub use crate::engine::StyleEngine;
    pub use crate::error::{KeyPathNotFound, StyleError};
    pub use crate::logging::{LogLevel, Logger};
    pub use crate::number::Scalar;
    pub use crate::object::{DynamicPropertyLookup, NamedChildLookup, Styleable, WidgetKind};
    pub use crate::paint::{Color, Image};
    pub use crate::style::{ControlKey, ControlState, Key, Style, Value, keys};
    pub use crate::text::{BorderStyle, Font, LineBreakMode, TextAlignment};
    pub use crate::widgets::{
        Button, ImageView, Label, Layer, SegmentedControl, Slider, Switch, TextField, TextView,
        View,
    };
    pub use crate::{named_children, style};
}
