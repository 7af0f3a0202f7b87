use std::any::Any;

use crate::apply::{Assignment, ValueApplier};
use crate::named_children;
use crate::object::{Styleable, WidgetKind};
use crate::paint::Color;

use super::View;

/// An on/off switch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Switch {
    pub is_on: bool,
    pub on_tint_color: Option<Color>,
    pub thumb_tint_color: Option<Color>,
    pub view: View,
}

impl Switch {
    pub const ON_TINT_COLOR: &'static str = "onTintColor";
    pub const THUMB_TINT_COLOR: &'static str = "thumbTintColor";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, v: bool) -> Self {
        self.is_on = v;
        self
    }
}

impl Styleable for Switch {
    fn type_name(&self) -> &'static str {
        "Switch"
    }

    fn kinds(&self) -> &'static [WidgetKind] {
        &[WidgetKind::Switch, WidgetKind::View]
    }

    fn facet_mut(&mut self, kind: WidgetKind) -> Option<&mut dyn Any> {
        match kind {
            WidgetKind::Switch => Some(self),
            WidgetKind::View => Some(&mut self.view),
            _ => None,
        }
    }
}

named_children!(Switch {} dynamic {
    "layer" => view.layer,
});

fn apply(a: &Assignment<'_>, switch: &mut Switch) -> bool {
    match a.property {
        Switch::ON_TINT_COLOR => a.set(Some(&mut switch.on_tint_color)),
        Switch::THUMB_TINT_COLOR => a.set(Some(&mut switch.thumb_tint_color)),
        _ => return false,
    };
    true
}

pub(crate) fn applier() -> ValueApplier {
    ValueApplier::new("switch", WidgetKind::Switch, apply)
}
