use std::borrow::Cow;

use crate::coords::Size;
use crate::number::{Number, Scalar};
use crate::paint::{Color, Image};
use crate::text::{BorderStyle, Font, LineBreakMode, TextAlignment};

use super::Style;

/// A value stored in a [`Style`].
///
/// Every variant except [`Value::Style`] (and a convertible [`Value::Map`]) is
/// a terminal value handed to the appliers.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Explicit "no value". Rejected with a warning when used as a terminal.
    #[default]
    Unset,
    Bool(bool),
    Number(Number),
    Text(String),
    Color(Color),
    Font(Font),
    Image(Image),
    Size(Size),
    Alignment(TextAlignment),
    LineBreak(LineBreakMode),
    BorderStyle(BorderStyle),
    /// A nested style applied to the object the key resolves to.
    Style(Style),
    /// An untyped mapping. Treated as a nested style when every key is text.
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Variant name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Unset => "Unset",
            Value::Bool(_) => "Bool",
            Value::Number(_) => "Number",
            Value::Text(_) => "Text",
            Value::Color(_) => "Color",
            Value::Font(_) => "Font",
            Value::Image(_) => "Image",
            Value::Size(_) => "Size",
            Value::Alignment(_) => "Alignment",
            Value::LineBreak(_) => "LineBreak",
            Value::BorderStyle(_) => "BorderStyle",
            Value::Style(_) => "Style",
            Value::Map(_) => "Map",
        }
    }

    #[inline]
    pub fn is_unset(&self) -> bool {
        matches!(self, Value::Unset)
    }

    #[inline]
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// The nested style this value stands for, if any: a [`Value::Style`]
    /// directly, or a [`Value::Map`] whose keys are all text.
    pub fn as_style(&self) -> Option<Cow<'_, Style>> {
        match self {
            Value::Style(style) => Some(Cow::Borrowed(style)),
            Value::Map(entries) => Style::from_map(entries).map(Cow::Owned),
            _ => None,
        }
    }
}

// ── From impls ────────────────────────────────────────────────────────────

macro_rules! value_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(v: $ty) -> Self {
                    Value::Number(v.into())
                }
            }
        )*
    };
}

value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, Scalar);

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Color> for Value {
    fn from(v: Color) -> Self {
        Value::Color(v)
    }
}

impl From<Font> for Value {
    fn from(v: Font) -> Self {
        Value::Font(v)
    }
}

impl From<Image> for Value {
    fn from(v: Image) -> Self {
        Value::Image(v)
    }
}

impl From<Size> for Value {
    fn from(v: Size) -> Self {
        Value::Size(v)
    }
}

impl From<TextAlignment> for Value {
    fn from(v: TextAlignment) -> Self {
        Value::Alignment(v)
    }
}

impl From<LineBreakMode> for Value {
    fn from(v: LineBreakMode) -> Self {
        Value::LineBreak(v)
    }
}

impl From<BorderStyle> for Value {
    fn from(v: BorderStyle) -> Self {
        Value::BorderStyle(v)
    }
}

impl From<Style> for Value {
    fn from(v: Style) -> Self {
        Value::Style(v)
    }
}

impl From<&Style> for Value {
    fn from(v: &Style) -> Self {
        Value::Style(v.clone())
    }
}

/// `None` becomes [`Value::Unset`], e.g. a color looked up from an asset
/// catalog that has no entry.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Unset, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_keep_their_representation() {
        assert_eq!(Value::from(2.0_f64), Value::Number(Number::F64(2.0)));
        assert_eq!(Value::from(2_u16), Value::Number(Number::U16(2)));
        assert_eq!(Value::from(Scalar(1.5)), Value::Number(Number::Scalar(Scalar(1.5))));
    }

    #[test]
    fn none_is_unset() {
        let missing: Option<Color> = None;
        assert!(Value::from(missing).is_unset());
        assert_eq!(Value::from(Some(Color::RED)), Value::Color(Color::RED));
    }

    #[test]
    fn text_keyed_map_is_a_style() {
        let map = Value::Map(vec![(Value::from("textColor"), Value::from(Color::RED))]);
        let style = map.as_style().unwrap();
        assert_eq!(style.get("textColor"), Some(&Value::Color(Color::RED)));
    }

    #[test]
    fn map_with_non_text_keys_is_terminal() {
        let map = Value::Map(vec![(Value::from(1), Value::from(Color::RED))]);
        assert!(map.as_style().is_none());
        assert!(map.is_map());
    }

    #[test]
    fn terminals_are_not_styles() {
        assert!(Value::from(Color::BLUE).as_style().is_none());
        assert!(Value::Unset.as_style().is_none());
    }
}
