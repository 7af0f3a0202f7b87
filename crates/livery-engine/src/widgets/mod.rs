//! The widget catalog: plain structs holding the properties the built-in
//! appliers write.
//!
//! Every widget embeds a [`View`] (and through it a [`Layer`]), lists its
//! [`WidgetKind`](crate::object::WidgetKind)s most specific first, and
//! exposes the internal `layer` through dynamic lookup.

pub mod button;
pub mod image_view;
pub mod label;
pub mod layer;
pub mod segmented_control;
pub mod slider;
pub mod switch;
pub mod text_field;
pub mod text_view;
pub mod view;

pub use button::Button;
pub use image_view::ImageView;
pub use label::Label;
pub use layer::Layer;
pub use segmented_control::{SegmentedControl, TextAttributes};
pub use slider::Slider;
pub use switch::Switch;
pub use text_field::TextField;
pub use text_view::TextView;
pub use view::View;
