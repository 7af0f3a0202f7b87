use std::any::Any;

use crate::apply::{Assignment, ValueApplier};
use crate::named_children;
use crate::object::{Styleable, WidgetKind};
use crate::paint::Image;

use super::View;

/// Displays an image, with an alternate shown while highlighted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageView {
    pub image: Option<Image>,
    pub highlighted_image: Option<Image>,
    pub is_highlighted: bool,
    pub view: View,
}

impl ImageView {
    pub const IMAGE: &'static str = "image";
    pub const HIGHLIGHTED_IMAGE: &'static str = "highlightedImage";

    pub fn new(image: Option<Image>) -> Self {
        Self { image, ..Self::default() }
    }

    /// The image currently on screen.
    pub fn displayed_image(&self) -> Option<&Image> {
        if self.is_highlighted {
            self.highlighted_image.as_ref().or(self.image.as_ref())
        } else {
            self.image.as_ref()
        }
    }
}

impl Styleable for ImageView {
    fn type_name(&self) -> &'static str {
        "ImageView"
    }

    fn kinds(&self) -> &'static [WidgetKind] {
        &[WidgetKind::ImageView, WidgetKind::View]
    }

    fn facet_mut(&mut self, kind: WidgetKind) -> Option<&mut dyn Any> {
        match kind {
            WidgetKind::ImageView => Some(self),
            WidgetKind::View => Some(&mut self.view),
            _ => None,
        }
    }
}

named_children!(ImageView {} dynamic {
    "layer" => view.layer,
});

fn apply(a: &Assignment<'_>, image_view: &mut ImageView) -> bool {
    match a.property {
        ImageView::IMAGE => a.set(Some(&mut image_view.image)),
        ImageView::HIGHLIGHTED_IMAGE => a.set(Some(&mut image_view.highlighted_image)),
        _ => return false,
    };
    true
}

pub(crate) fn applier() -> ValueApplier {
    ValueApplier::new("image view", WidgetKind::ImageView, apply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn highlighted_image_falls_back_to_image() {
        let normal = Image::solid(Color::WHITE);
        let mut view = ImageView::new(Some(normal.clone()));
        view.is_highlighted = true;
        assert_eq!(view.displayed_image(), Some(&normal));

        let pressed = Image::solid(Color::BLACK);
        view.highlighted_image = Some(pressed.clone());
        assert_eq!(view.displayed_image(), Some(&pressed));
    }
}
