use std::any::Any;
use std::collections::HashMap;

use crate::apply::{Assignment, ValueApplier};
use crate::named_children;
use crate::object::{Styleable, WidgetKind};
use crate::paint::{Color, Image};
use crate::style::ControlState;

use super::{ImageView, Label, View};

/// A tappable control with per-state title colors and images.
///
/// State tables hold only what was set explicitly; the `*_for` getters fall
/// back to the normal state like a rendered button would.
///
/// # Example
/// ```rust
/// use livery_engine::paint::Color;
/// use livery_engine::style::ControlState;
/// use livery_engine::widgets::Button;
///
/// let button = Button::new("Save").title_color(Color::BLUE, ControlState::NORMAL);
/// assert_eq!(button.title_color_for(ControlState::SELECTED), Some(Color::BLUE));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Button {
    /// Internal label showing the title. `None` until a title is set.
    pub title_label: Option<Label>,
    /// Internal image view. `None` until an image is set.
    pub image_view: Option<ImageView>,
    pub title_colors: HashMap<ControlState, Color>,
    pub title_shadow_colors: HashMap<ControlState, Color>,
    pub images: HashMap<ControlState, Image>,
    pub background_images: HashMap<ControlState, Image>,
    pub view: View,
}

impl Button {
    pub const TITLE_COLOR: &'static str = "titleColor";
    pub const TITLE_SHADOW_COLOR: &'static str = "titleShadowColor";
    pub const IMAGE: &'static str = "image";
    pub const BACKGROUND_IMAGE: &'static str = "backgroundImage";
    pub const TITLE_FONT: &'static str = "titleFont";
    pub const BACKGROUND_IMAGE_FROM_COLOR: &'static str = "backgroundImageFromColor";

    pub fn new(title: impl Into<String>) -> Self {
        Self { title_label: Some(Label::new(title)), ..Self::default() }
    }

    pub fn title_color(mut self, color: Color, state: ControlState) -> Self {
        self.title_colors.insert(state, color);
        self
    }

    pub fn image(mut self, image: Image, state: ControlState) -> Self {
        self.images.insert(state, image);
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title_label.as_ref().map(|label| label.text.as_str())
    }

    pub fn title_color_for(&self, state: ControlState) -> Option<Color> {
        lookup(&self.title_colors, state).copied()
    }

    pub fn title_shadow_color_for(&self, state: ControlState) -> Option<Color> {
        lookup(&self.title_shadow_colors, state).copied()
    }

    pub fn image_for(&self, state: ControlState) -> Option<&Image> {
        lookup(&self.images, state)
    }

    pub fn background_image_for(&self, state: ControlState) -> Option<&Image> {
        lookup(&self.background_images, state)
    }
}

fn lookup<T>(table: &HashMap<ControlState, T>, state: ControlState) -> Option<&T> {
    table.get(&state).or_else(|| table.get(&ControlState::NORMAL))
}

impl Styleable for Button {
    fn type_name(&self) -> &'static str {
        "Button"
    }

    fn kinds(&self) -> &'static [WidgetKind] {
        &[WidgetKind::Button, WidgetKind::View]
    }

    fn facet_mut(&mut self, kind: WidgetKind) -> Option<&mut dyn Any> {
        match kind {
            WidgetKind::Button => Some(self),
            WidgetKind::View => Some(&mut self.view),
            _ => None,
        }
    }
}

named_children!(Button {} dynamic {
    "titleLabel" => title_label,
    "imageView" => image_view,
    "layer" => view.layer,
});

fn apply(a: &Assignment<'_>, button: &mut Button) -> bool {
    match a.base_name() {
        Button::TITLE_COLOR => a.set_for_states(&mut button.title_colors),
        Button::TITLE_SHADOW_COLOR => a.set_for_states(&mut button.title_shadow_colors),
        Button::IMAGE => a.set_for_states(&mut button.images),
        Button::BACKGROUND_IMAGE => a.set_for_states(&mut button.background_images),
        Button::TITLE_FONT => a.set(button.title_label.as_mut().map(|label| &mut label.font)),
        Button::BACKGROUND_IMAGE_FROM_COLOR => match a.convert::<Color>() {
            Some(color) => {
                a.store_for_states(&mut button.background_images, Image::solid(color));
                true
            }
            None => false,
        },
        _ => return false,
    };
    true
}

pub(crate) fn applier() -> ValueApplier {
    ValueApplier::new("button", WidgetKind::Button, apply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogLevel, Logger, MemorySink};
    use crate::paint::SOLID_IMAGE_SIDE;
    use crate::style::keys::button;
    use crate::style::{Key, Value};
    use crate::text::Font;

    fn run(button: &mut Button, key: impl Into<Key>, value: impl Into<Value>) -> bool {
        let log = Logger::new(LogLevel::Verbose, MemorySink::shared());
        let key = key.into();
        let value = value.into();
        applier().dispatch(&Assignment::new(&key, &value, &log), button)
    }

    #[test]
    fn unmodified_title_color_sets_normal_only() {
        let mut b = Button::new("OK");
        assert!(run(&mut b, button::TITLE_COLOR, Color::RED));
        assert_eq!(b.title_colors.len(), 1);
        assert_eq!(b.title_colors.get(&ControlState::NORMAL), Some(&Color::RED));
    }

    #[test]
    fn chained_modifiers_set_each_state_and_not_normal() {
        let mut b = Button::new("OK");
        let key = button::TITLE_COLOR.selected().highlighted().disabled();
        assert!(run(&mut b, key, Color::GREEN));
        for state in [ControlState::SELECTED, ControlState::HIGHLIGHTED, ControlState::DISABLED] {
            assert_eq!(b.title_colors.get(&state), Some(&Color::GREEN));
        }
        assert_eq!(b.title_colors.get(&ControlState::NORMAL), None);
    }

    #[test]
    fn title_font_goes_to_the_title_label() {
        let mut b = Button::new("OK");
        assert!(run(&mut b, "titleFont", Font::bold_system(15.0)));
        assert_eq!(b.title_label.unwrap().font, Some(Font::bold_system(15.0)));
    }

    #[test]
    fn title_font_without_title_label_is_a_null_target() {
        let sink = MemorySink::shared();
        let log = Logger::new(LogLevel::Verbose, sink.clone());
        let key = Key::from("titleFont");
        let value = Value::from(Font::system(12.0));
        let mut b = Button::default();
        assert!(applier().dispatch(&Assignment::new(&key, &value, &log), &mut b));
        assert!(sink.contains(LogLevel::Error, "titleFont"));
    }

    #[test]
    fn background_image_from_color_synthesizes_a_solid_image() {
        let mut b = Button::new("OK");
        assert!(run(&mut b, button::BACKGROUND_IMAGE_FROM_COLOR.highlighted(), Color::YELLOW));
        let image = b.background_images.get(&ControlState::HIGHLIGHTED).unwrap();
        assert_eq!(image.width(), SOLID_IMAGE_SIDE);
        assert_eq!(image.height(), SOLID_IMAGE_SIDE);
        assert_eq!(image.pixel(0, 0), Some(Color::YELLOW.to_srgb_u8()));
        assert!(b.background_images.get(&ControlState::NORMAL).is_none());
    }

    #[test]
    fn getters_fall_back_to_normal() {
        let b = Button::new("OK").title_color(Color::BLACK, ControlState::NORMAL);
        assert_eq!(b.title_color_for(ControlState::HIGHLIGHTED), Some(Color::BLACK));
        assert_eq!(b.title_shadow_color_for(ControlState::NORMAL), None);
    }
}
