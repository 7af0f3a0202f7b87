use std::any::Any;

use crate::apply::{Assignment, ValueApplier};
use crate::named_children;
use crate::object::{Styleable, WidgetKind};
use crate::paint::{Color, Image};

use super::View;

/// A horizontal slider for selecting a value in a range.
///
/// # Example
/// ```rust
/// use livery_engine::widgets::Slider;
///
/// let slider = Slider::new().range(0.0, 100.0).value(150.0);
/// assert_eq!(slider.value, 100.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    /// Current value (clamped to `[minimum_value, maximum_value]`).
    pub value: f32,
    pub minimum_value: f32,
    pub maximum_value: f32,
    /// Report changes while dragging rather than on release.
    pub is_continuous: bool,
    pub minimum_value_image: Option<Image>,
    pub maximum_value_image: Option<Image>,
    pub minimum_track_tint_color: Option<Color>,
    pub maximum_track_tint_color: Option<Color>,
    pub thumb_tint_color: Option<Color>,
    pub view: View,
}

impl Slider {
    pub const MINIMUM_VALUE_IMAGE: &'static str = "minimumValueImage";
    pub const MAXIMUM_VALUE_IMAGE: &'static str = "maximumValueImage";
    pub const IS_CONTINUOUS: &'static str = "isContinuous";
    pub const MINIMUM_TRACK_TINT_COLOR: &'static str = "minimumTrackTintColor";
    pub const MAXIMUM_TRACK_TINT_COLOR: &'static str = "maximumTrackTintColor";
    pub const THUMB_TINT_COLOR: &'static str = "thumbTintColor";

    pub fn new() -> Self {
        Self {
            value: 0.0,
            minimum_value: 0.0,
            maximum_value: 1.0,
            is_continuous: true,
            minimum_value_image: None,
            maximum_value_image: None,
            minimum_track_tint_color: None,
            maximum_track_tint_color: None,
            thumb_tint_color: None,
            view: View::default(),
        }
    }

    pub fn range(mut self, min: f32, max: f32) -> Self {
        self.minimum_value = min;
        self.maximum_value = max;
        self.value = self.value.clamp(min, max);
        self
    }

    pub fn value(mut self, v: f32) -> Self {
        self.value = v.clamp(self.minimum_value, self.maximum_value);
        self
    }
}

impl Default for Slider {
    fn default() -> Self {
        Self::new()
    }
}

impl Styleable for Slider {
    fn type_name(&self) -> &'static str {
        "Slider"
    }

    fn kinds(&self) -> &'static [WidgetKind] {
        &[WidgetKind::Slider, WidgetKind::View]
    }

    fn facet_mut(&mut self, kind: WidgetKind) -> Option<&mut dyn Any> {
        match kind {
            WidgetKind::Slider => Some(self),
            WidgetKind::View => Some(&mut self.view),
            _ => None,
        }
    }
}

named_children!(Slider {} dynamic {
    "layer" => view.layer,
});

fn apply(a: &Assignment<'_>, slider: &mut Slider) -> bool {
    match a.property {
        Slider::MINIMUM_VALUE_IMAGE => a.set(Some(&mut slider.minimum_value_image)),
        Slider::MAXIMUM_VALUE_IMAGE => a.set(Some(&mut slider.maximum_value_image)),
        Slider::IS_CONTINUOUS => a.set(Some(&mut slider.is_continuous)),
        Slider::MINIMUM_TRACK_TINT_COLOR => a.set(Some(&mut slider.minimum_track_tint_color)),
        Slider::MAXIMUM_TRACK_TINT_COLOR => a.set(Some(&mut slider.maximum_track_tint_color)),
        Slider::THUMB_TINT_COLOR => a.set(Some(&mut slider.thumb_tint_color)),
        _ => return false,
    };
    true
}

pub(crate) fn applier() -> ValueApplier {
    ValueApplier::new("slider", WidgetKind::Slider, apply)
}
