use std::any::Any;

use crate::apply::{Assignment, ValueApplier};
use crate::named_children;
use crate::object::{Styleable, WidgetKind};
use crate::paint::Color;
use crate::text::{Font, LineBreakMode, TextAlignment};

use super::View;

/// A read-only run of text.
///
/// # Example
/// ```rust
/// use livery_engine::paint::Color;
/// use livery_engine::text::Font;
/// use livery_engine::widgets::Label;
///
/// let label = Label::new("Hello").font(Font::system(14.0)).text_color(Color::BLACK);
/// assert_eq!(label.text, "Hello");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Label {
    pub text: String,
    pub text_color: Option<Color>,
    pub font: Option<Font>,
    pub text_alignment: TextAlignment,
    pub line_break_mode: LineBreakMode,
    pub view: View,
}

impl Label {
    pub const TEXT_COLOR: &'static str = "textColor";
    pub const FONT: &'static str = "font";
    pub const TEXT_ALIGNMENT: &'static str = "textAlignment";
    pub const LINE_BREAK_MODE: &'static str = "lineBreakMode";

    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn alignment(mut self, alignment: TextAlignment) -> Self {
        self.text_alignment = alignment;
        self
    }
}

impl Styleable for Label {
    fn type_name(&self) -> &'static str {
        "Label"
    }

    fn kinds(&self) -> &'static [WidgetKind] {
        &[WidgetKind::Label, WidgetKind::View]
    }

    fn facet_mut(&mut self, kind: WidgetKind) -> Option<&mut dyn Any> {
        match kind {
            WidgetKind::Label => Some(self),
            WidgetKind::View => Some(&mut self.view),
            _ => None,
        }
    }
}

named_children!(Label {} dynamic {
    "layer" => view.layer,
});

fn apply(a: &Assignment<'_>, label: &mut Label) -> bool {
    match a.property {
        Label::TEXT_COLOR => a.set(Some(&mut label.text_color)),
        Label::FONT => a.set(Some(&mut label.font)),
        Label::TEXT_ALIGNMENT => a.set(Some(&mut label.text_alignment)),
        Label::LINE_BREAK_MODE => a.set(Some(&mut label.line_break_mode)),
        _ => return false,
    };
    true
}

pub(crate) fn applier() -> ValueApplier {
    ValueApplier::new("label", WidgetKind::Label, apply)
}
