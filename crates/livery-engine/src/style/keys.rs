//! Predefined keys for the properties the built-in appliers recognize.
//!
//! Keys of control-state aware properties are [`ControlKey`]s, so modifiers
//! can be chained onto them (`button::TITLE_COLOR.selected()`).

use super::{ControlKey, Key};

/// Reserved key whose value is a style applied before its siblings.
pub const SUPER_STYLE: Key = Key::from_static("superStyle");

pub mod view {
    use super::Key;
    use crate::widgets::View;

    pub const BACKGROUND_COLOR: Key = Key::from_static(View::BACKGROUND_COLOR);
    pub const TINT_COLOR: Key = Key::from_static(View::TINT_COLOR);
}

pub mod layer {
    use super::Key;
    use crate::widgets::Layer;

    pub const SHADOW_COLOR: Key = Key::from_static(Layer::SHADOW_COLOR);
    pub const SHADOW_RADIUS: Key = Key::from_static(Layer::SHADOW_RADIUS);
    pub const SHADOW_OPACITY: Key = Key::from_static(Layer::SHADOW_OPACITY);
    pub const SHADOW_OFFSET: Key = Key::from_static(Layer::SHADOW_OFFSET);
    pub const BORDER_COLOR: Key = Key::from_static(Layer::BORDER_COLOR);
    pub const BORDER_WIDTH: Key = Key::from_static(Layer::BORDER_WIDTH);
    pub const BACKGROUND_COLOR: Key = Key::from_static(Layer::BACKGROUND_COLOR);
    pub const CORNER_RADIUS: Key = Key::from_static(Layer::CORNER_RADIUS);
    pub const OPACITY: Key = Key::from_static(Layer::OPACITY);
}

pub mod label {
    use super::Key;
    use crate::widgets::Label;

    pub const TEXT_COLOR: Key = Key::from_static(Label::TEXT_COLOR);
    pub const FONT: Key = Key::from_static(Label::FONT);
    pub const TEXT_ALIGNMENT: Key = Key::from_static(Label::TEXT_ALIGNMENT);
    pub const LINE_BREAK_MODE: Key = Key::from_static(Label::LINE_BREAK_MODE);
}

pub mod button {
    use super::{ControlKey, Key};
    use crate::widgets::Button;

    pub const TITLE_COLOR: ControlKey = ControlKey::from_static(Button::TITLE_COLOR);
    pub const TITLE_SHADOW_COLOR: ControlKey = ControlKey::from_static(Button::TITLE_SHADOW_COLOR);
    pub const IMAGE: ControlKey = ControlKey::from_static(Button::IMAGE);
    pub const BACKGROUND_IMAGE: ControlKey = ControlKey::from_static(Button::BACKGROUND_IMAGE);
    pub const BACKGROUND_IMAGE_FROM_COLOR: ControlKey =
        ControlKey::from_static(Button::BACKGROUND_IMAGE_FROM_COLOR);
    /// Font of the internal title label.
    pub const TITLE_FONT: Key = Key::from_static(Button::TITLE_FONT);
}

pub mod segmented_control {
    use super::{ControlKey, Key};
    use crate::widgets::SegmentedControl;

    pub const SELECTED_SEGMENT_TINT_COLOR: Key =
        Key::from_static(SegmentedControl::SELECTED_SEGMENT_TINT_COLOR);
    pub const BACKGROUND_IMAGE: ControlKey =
        ControlKey::from_static(SegmentedControl::BACKGROUND_IMAGE);
    pub const BACKGROUND_IMAGE_FROM_COLOR: ControlKey =
        ControlKey::from_static(SegmentedControl::BACKGROUND_IMAGE_FROM_COLOR);
    pub const FONT: ControlKey = ControlKey::from_static(SegmentedControl::FONT);
    pub const TEXT_COLOR: ControlKey = ControlKey::from_static(SegmentedControl::TEXT_COLOR);
}

pub mod text_field {
    use super::Key;
    use crate::widgets::TextField;

    pub const TEXT_COLOR: Key = Key::from_static(TextField::TEXT_COLOR);
    pub const FONT: Key = Key::from_static(TextField::FONT);
    pub const TEXT_ALIGNMENT: Key = Key::from_static(TextField::TEXT_ALIGNMENT);
    pub const BORDER_STYLE: Key = Key::from_static(TextField::BORDER_STYLE);
    pub const PLACEHOLDER_COLOR: Key = Key::from_static(TextField::PLACEHOLDER_COLOR);
    pub const PLACEHOLDER_FONT: Key = Key::from_static(TextField::PLACEHOLDER_FONT);
    pub const BACKGROUND: Key = Key::from_static(TextField::BACKGROUND);
    pub const DISABLED_BACKGROUND: Key = Key::from_static(TextField::DISABLED_BACKGROUND);
}

pub mod slider {
    use super::Key;
    use crate::widgets::Slider;

    pub const MINIMUM_VALUE_IMAGE: Key = Key::from_static(Slider::MINIMUM_VALUE_IMAGE);
    pub const MAXIMUM_VALUE_IMAGE: Key = Key::from_static(Slider::MAXIMUM_VALUE_IMAGE);
    pub const IS_CONTINUOUS: Key = Key::from_static(Slider::IS_CONTINUOUS);
    pub const MINIMUM_TRACK_TINT_COLOR: Key = Key::from_static(Slider::MINIMUM_TRACK_TINT_COLOR);
    pub const MAXIMUM_TRACK_TINT_COLOR: Key = Key::from_static(Slider::MAXIMUM_TRACK_TINT_COLOR);
    pub const THUMB_TINT_COLOR: Key = Key::from_static(Slider::THUMB_TINT_COLOR);
}

pub mod switch {
    use super::Key;
    use crate::widgets::Switch;

    pub const ON_TINT_COLOR: Key = Key::from_static(Switch::ON_TINT_COLOR);
    pub const THUMB_TINT_COLOR: Key = Key::from_static(Switch::THUMB_TINT_COLOR);
}

pub mod image {
    use super::Key;
    use crate::widgets::ImageView;

    pub const IMAGE: Key = Key::from_static(ImageView::IMAGE);
    pub const HIGHLIGHTED_IMAGE: Key = Key::from_static(ImageView::HIGHLIGHTED_IMAGE);
}

pub mod text_view {
    use super::Key;
    use crate::widgets::TextView;

    pub const TEXT_COLOR: Key = Key::from_static(TextView::TEXT_COLOR);
    pub const FONT: Key = Key::from_static(TextView::FONT);
    pub const TEXT_ALIGNMENT: Key = Key::from_static(TextView::TEXT_ALIGNMENT);
}
