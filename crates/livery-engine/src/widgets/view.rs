use std::any::Any;

use crate::apply::{Assignment, ValueApplier};
use crate::named_children;
use crate::object::{Styleable, WidgetKind};
use crate::paint::Color;

use super::Layer;

/// A plain rectangular view. Every other widget embeds one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct View {
    pub background_color: Option<Color>,
    pub tint_color: Option<Color>,
    pub layer: Layer,
}

impl View {
    pub const BACKGROUND_COLOR: &'static str = "backgroundColor";
    pub const TINT_COLOR: &'static str = "tintColor";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }
}

impl Styleable for View {
    fn type_name(&self) -> &'static str {
        "View"
    }

    fn kinds(&self) -> &'static [WidgetKind] {
        &[WidgetKind::View]
    }

    fn facet_mut(&mut self, kind: WidgetKind) -> Option<&mut dyn Any> {
        match kind {
            WidgetKind::View => Some(self),
            _ => None,
        }
    }
}

named_children!(View {} dynamic {
    "layer" => layer,
});

fn apply(a: &Assignment<'_>, view: &mut View) -> bool {
    match a.property {
        View::BACKGROUND_COLOR => a.set(Some(&mut view.background_color)),
        View::TINT_COLOR => a.set(Some(&mut view.tint_color)),
        _ => return false,
    };
    true
}

pub(crate) fn applier() -> ValueApplier {
    ValueApplier::new("view", WidgetKind::View, apply)
}
