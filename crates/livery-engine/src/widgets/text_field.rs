use std::any::Any;

use crate::apply::{Assignment, ValueApplier};
use crate::named_children;
use crate::object::{Styleable, WidgetKind};
use crate::paint::{Color, Image};
use crate::text::{AttributedText, BorderStyle, Font, TextAlignment};

use super::View;

/// A single-line editable text input.
///
/// The placeholder exists in two forms: plain text, and an attributed
/// version that carries the placeholder's color and font. Styling the
/// placeholder always writes the attributed form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextField {
    pub text: String,
    pub text_color: Option<Color>,
    pub font: Option<Font>,
    pub text_alignment: TextAlignment,
    pub border_style: BorderStyle,
    pub placeholder: Option<String>,
    pub attributed_placeholder: Option<AttributedText>,
    pub background: Option<Image>,
    pub disabled_background: Option<Image>,
    pub is_enabled: bool,
    pub view: View,
}

impl TextField {
    pub const TEXT_COLOR: &'static str = "textColor";
    pub const FONT: &'static str = "font";
    pub const TEXT_ALIGNMENT: &'static str = "textAlignment";
    pub const BORDER_STYLE: &'static str = "borderStyle";
    pub const PLACEHOLDER_COLOR: &'static str = "placeholderColor";
    pub const PLACEHOLDER_FONT: &'static str = "placeholderFont";
    pub const BACKGROUND: &'static str = "background";
    pub const DISABLED_BACKGROUND: &'static str = "disabledBackground";

    pub fn new() -> Self {
        Self { is_enabled: true, ..Self::default() }
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn attributed_placeholder(mut self, text: AttributedText) -> Self {
        self.attributed_placeholder = Some(text);
        self
    }

    /// The background image for the current enabled state.
    pub fn current_background(&self) -> Option<&Image> {
        if self.is_enabled {
            self.background.as_ref()
        } else {
            self.disabled_background.as_ref().or(self.background.as_ref())
        }
    }

    fn has_placeholder(&self) -> bool {
        let attributed = self.attributed_placeholder.as_ref().is_some_and(|p| !p.is_empty());
        let plain = self.placeholder.as_deref().is_some_and(|p| !p.is_empty());
        attributed || plain
    }

    /// The attributed placeholder, built from the plain one if needed.
    fn placeholder_mut(&mut self) -> Option<&mut AttributedText> {
        if self.attributed_placeholder.as_ref().is_some_and(|p| !p.is_empty()) {
            return self.attributed_placeholder.as_mut();
        }
        let plain = self.placeholder.as_deref().filter(|p| !p.is_empty())?;
        Some(self.attributed_placeholder.insert(AttributedText::plain(plain)))
    }
}

impl Styleable for TextField {
    fn type_name(&self) -> &'static str {
        "TextField"
    }

    fn kinds(&self) -> &'static [WidgetKind] {
        &[WidgetKind::TextField, WidgetKind::View]
    }

    fn facet_mut(&mut self, kind: WidgetKind) -> Option<&mut dyn Any> {
        match kind {
            WidgetKind::TextField => Some(self),
            WidgetKind::View => Some(&mut self.view),
            _ => None,
        }
    }
}

named_children!(TextField {} dynamic {
    "layer" => view.layer,
});

fn apply(a: &Assignment<'_>, field: &mut TextField) -> bool {
    match a.property {
        TextField::TEXT_COLOR => {
            a.set(Some(&mut field.text_color));
        }
        TextField::FONT => {
            a.set(Some(&mut field.font));
        }
        TextField::TEXT_ALIGNMENT => {
            a.set(Some(&mut field.text_alignment));
        }
        TextField::BORDER_STYLE => {
            a.set(Some(&mut field.border_style));
        }
        TextField::PLACEHOLDER_COLOR if field.has_placeholder() => {
            a.set(field.placeholder_mut().map(|p| &mut p.foreground_color));
        }
        TextField::PLACEHOLDER_FONT if field.has_placeholder() => {
            a.set(field.placeholder_mut().map(|p| &mut p.font));
        }
        TextField::BACKGROUND => {
            a.set(Some(&mut field.background));
        }
        TextField::DISABLED_BACKGROUND => {
            a.set(Some(&mut field.disabled_background));
        }
        _ => return false,
    }
    true
}

pub(crate) fn applier() -> ValueApplier {
    ValueApplier::new("text field", WidgetKind::TextField, apply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogLevel, Logger, MemorySink};
    use crate::style::{Key, Value};

    fn run(field: &mut TextField, key: &str, value: impl Into<Value>) -> bool {
        let log = Logger::new(LogLevel::Verbose, MemorySink::shared());
        let key = Key::from(key);
        let value = value.into();
        applier().dispatch(&Assignment::new(&key, &value, &log), field)
    }

    // ── placeholder ───────────────────────────────────────────────────────

    #[test]
    fn placeholder_color_is_added_to_existing_attributed_placeholder() {
        let attributed = AttributedText {
            font: Some(Font::system(10.0)),
            ..AttributedText::plain("Search")
        };
        let mut field = TextField::new().attributed_placeholder(attributed);
        assert!(run(&mut field, "placeholderColor", Color::LIGHT_GRAY));
        let placeholder = field.attributed_placeholder.unwrap();
        assert_eq!(placeholder.text, "Search");
        assert_eq!(placeholder.font, Some(Font::system(10.0)));
        assert_eq!(placeholder.foreground_color, Some(Color::LIGHT_GRAY));
    }

    #[test]
    fn placeholder_font_builds_from_plain_placeholder() {
        let mut field = TextField::new().placeholder("Name");
        assert!(run(&mut field, "placeholderFont", Font::italic_system(12.0)));
        let placeholder = field.attributed_placeholder.unwrap();
        assert_eq!(placeholder.text, "Name");
        assert_eq!(placeholder.font, Some(Font::italic_system(12.0)));
    }

    #[test]
    fn placeholder_styling_without_placeholder_is_not_recognized() {
        let mut field = TextField::new();
        assert!(!run(&mut field, "placeholderColor", Color::RED));
        assert!(!run(&mut field, "placeholderFont", Font::system(12.0)));
        assert!(field.attributed_placeholder.is_none());

        let mut empty = TextField::new().placeholder("");
        assert!(!run(&mut empty, "placeholderColor", Color::RED));
    }

    // ── plain properties ──────────────────────────────────────────────────

    #[test]
    fn border_style_and_alignment() {
        let mut field = TextField::new();
        assert!(run(&mut field, "borderStyle", BorderStyle::RoundedRect));
        assert!(run(&mut field, "textAlignment", TextAlignment::Center));
        assert_eq!(field.border_style, BorderStyle::RoundedRect);
        assert_eq!(field.text_alignment, TextAlignment::Center);
    }

    #[test]
    fn disabled_background_shows_when_disabled() {
        let normal = Image::solid(Color::WHITE);
        let disabled = Image::solid(Color::DARK_GRAY);
        let mut field = TextField::new();
        assert!(run(&mut field, "background", normal.clone()));
        assert!(run(&mut field, "disabledBackground", disabled.clone()));
        assert_eq!(field.current_background(), Some(&normal));
        field.is_enabled = false;
        assert_eq!(field.current_background(), Some(&disabled));
    }
}
