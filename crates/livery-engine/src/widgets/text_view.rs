use std::any::Any;

use crate::apply::{Assignment, ValueApplier};
use crate::named_children;
use crate::object::{Styleable, WidgetKind};
use crate::paint::Color;
use crate::text::{Font, TextAlignment};

use super::View;

/// Multi-line editable text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextView {
    pub text: String,
    pub text_color: Option<Color>,
    pub font: Option<Font>,
    pub text_alignment: TextAlignment,
    pub is_editable: bool,
    pub view: View,
}

impl TextView {
    pub const TEXT_COLOR: &'static str = "textColor";
    pub const FONT: &'static str = "font";
    pub const TEXT_ALIGNMENT: &'static str = "textAlignment";

    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_editable: true, ..Self::default() }
    }
}

impl Styleable for TextView {
    fn type_name(&self) -> &'static str {
        "TextView"
    }

    fn kinds(&self) -> &'static [WidgetKind] {
        &[WidgetKind::TextView, WidgetKind::View]
    }

    fn facet_mut(&mut self, kind: WidgetKind) -> Option<&mut dyn Any> {
        match kind {
            WidgetKind::TextView => Some(self),
            WidgetKind::View => Some(&mut self.view),
            _ => None,
        }
    }
}

named_children!(TextView {} dynamic {
    "layer" => view.layer,
});

fn apply(a: &Assignment<'_>, text_view: &mut TextView) -> bool {
    match a.property {
        TextView::TEXT_COLOR => a.set(Some(&mut text_view.text_color)),
        TextView::FONT => a.set(Some(&mut text_view.font)),
        TextView::TEXT_ALIGNMENT => a.set(Some(&mut text_view.text_alignment)),
        _ => return false,
    };
    true
}

pub(crate) fn applier() -> ValueApplier {
    ValueApplier::new("text view", WidgetKind::TextView, apply)
}
