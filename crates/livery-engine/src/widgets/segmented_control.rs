use std::any::Any;
use std::collections::HashMap;

use crate::apply::{Assignment, ValueApplier};
use crate::named_children;
use crate::object::{Styleable, WidgetKind};
use crate::paint::{Color, Image};
use crate::style::ControlState;
use crate::text::Font;

use super::View;

/// Attributes applied to segment titles in one control state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextAttributes {
    pub font: Option<Font>,
    pub foreground_color: Option<Color>,
}

/// A horizontal row of mutually exclusive segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentedControl {
    pub segments: Vec<String>,
    pub selected_segment: Option<usize>,
    pub selected_segment_tint_color: Option<Color>,
    pub background_images: HashMap<ControlState, Image>,
    pub title_text_attributes: HashMap<ControlState, TextAttributes>,
    pub view: View,
}

impl SegmentedControl {
    pub const SELECTED_SEGMENT_TINT_COLOR: &'static str = "selectedSegmentTintColor";
    pub const BACKGROUND_IMAGE: &'static str = "backgroundImage";
    pub const BACKGROUND_IMAGE_FROM_COLOR: &'static str = "backgroundImageFromColor";
    pub const FONT: &'static str = "font";
    pub const TEXT_COLOR: &'static str = "textColor";

    pub fn new<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected_segment = Some(index);
        self
    }

    /// Title attributes for `state`. Unset attributes are not inherited from
    /// the normal state.
    pub fn title_text_attributes_for(&self, state: ControlState) -> Option<&TextAttributes> {
        self.title_text_attributes.get(&state)
    }

    fn update_title_attributes(
        &mut self,
        states: ControlState,
        update: impl Fn(&mut TextAttributes),
    ) {
        for state in states.iter() {
            update(self.title_text_attributes.entry(state).or_default());
        }
    }
}

impl Styleable for SegmentedControl {
    fn type_name(&self) -> &'static str {
        "SegmentedControl"
    }

    fn kinds(&self) -> &'static [WidgetKind] {
        &[WidgetKind::SegmentedControl, WidgetKind::View]
    }

    fn facet_mut(&mut self, kind: WidgetKind) -> Option<&mut dyn Any> {
        match kind {
            WidgetKind::SegmentedControl => Some(self),
            WidgetKind::View => Some(&mut self.view),
            _ => None,
        }
    }
}

named_children!(SegmentedControl {} dynamic {
    "layer" => view.layer,
});

fn apply(a: &Assignment<'_>, control: &mut SegmentedControl) -> bool {
    let states = a.key.resolved_states();
    match a.base_name() {
        SegmentedControl::SELECTED_SEGMENT_TINT_COLOR => {
            a.set(Some(&mut control.selected_segment_tint_color));
        }
        SegmentedControl::BACKGROUND_IMAGE => {
            a.set_for_states(&mut control.background_images);
        }
        SegmentedControl::BACKGROUND_IMAGE_FROM_COLOR => {
            if let Some(color) = a.convert::<Color>() {
                a.store_for_states(&mut control.background_images, Image::solid(color));
            }
        }
        SegmentedControl::FONT => {
            if let Some(font) = a.convert::<Font>() {
                control.update_title_attributes(states, |attrs| attrs.font = Some(font.clone()));
            }
        }
        SegmentedControl::TEXT_COLOR => {
            if let Some(color) = a.convert::<Color>() {
                control.update_title_attributes(states, |attrs| {
                    attrs.foreground_color = Some(color)
                });
            }
        }
        _ => return false,
    }
    true
}

pub(crate) fn applier() -> ValueApplier {
    ValueApplier::new("segmented control", WidgetKind::SegmentedControl, apply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogLevel, Logger, MemorySink};
    use crate::style::keys::segmented_control;
    use crate::style::{Key, Value};

    fn run(control: &mut SegmentedControl, key: impl Into<Key>, value: impl Into<Value>) -> bool {
        let log = Logger::new(LogLevel::Verbose, MemorySink::shared());
        let key = key.into();
        let value = value.into();
        applier().dispatch(&Assignment::new(&key, &value, &log), control)
    }

    #[test]
    fn font_and_text_color_merge_into_title_attributes() {
        let mut control = SegmentedControl::new(["One", "Two"]);
        assert!(run(&mut control, segmented_control::FONT, Font::system(13.0)));
        assert!(run(&mut control, segmented_control::TEXT_COLOR, Color::BLUE));
        let normal = control.title_text_attributes_for(ControlState::NORMAL).unwrap();
        assert_eq!(normal.font, Some(Font::system(13.0)));
        assert_eq!(normal.foreground_color, Some(Color::BLUE));
    }

    #[test]
    fn selected_text_color_leaves_normal_attributes_alone() {
        let mut control = SegmentedControl::new(["One", "Two"]);
        assert!(run(&mut control, segmented_control::TEXT_COLOR.selected(), Color::WHITE));
        assert!(control.title_text_attributes_for(ControlState::NORMAL).is_none());
        let selected = control.title_text_attributes_for(ControlState::SELECTED).unwrap();
        assert_eq!(selected.foreground_color, Some(Color::WHITE));
        assert_eq!(selected.font, None);
    }

    #[test]
    fn background_image_from_color_fills_each_state() {
        let mut control = SegmentedControl::new(["A"]);
        let key = segmented_control::BACKGROUND_IMAGE_FROM_COLOR.normal().selected();
        assert!(run(&mut control, key, Color::PURPLE));
        assert_eq!(control.background_images.len(), 2);
        let image = &control.background_images[&ControlState::SELECTED];
        assert_eq!(image.pixel(9, 9), Some(Color::PURPLE.to_srgb_u8()));
    }

    #[test]
    fn selected_segment_tint_is_not_state_aware() {
        let mut control = SegmentedControl::new(["A", "B"]).selected(1);
        assert!(run(&mut control, "selectedSegmentTintColor", Color::RED));
        assert_eq!(control.selected_segment_tint_color, Some(Color::RED));
        assert!(!run(&mut control, "titleColor", Color::RED));
    }
}
