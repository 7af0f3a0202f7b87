//! Text presentation values: fonts, alignment, truncation, field borders.

use std::fmt;

/// Weight of a [`Font`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Bold,
}

/// A font description: family, point size, weight and slant.
///
/// Fonts are plain values; resolving them to glyph data is the renderer's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f64,
    pub weight: FontWeight,
    pub italic: bool,
}

impl Font {
    /// Family name used by the `system*` constructors.
    pub const SYSTEM_FAMILY: &'static str = "system";

    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self { family: family.into(), size, weight: FontWeight::Regular, italic: false }
    }

    pub fn system(size: f64) -> Self {
        Self::new(Self::SYSTEM_FAMILY, size)
    }

    pub fn bold_system(size: f64) -> Self {
        Self::system(size).bold()
    }

    pub fn italic_system(size: f64) -> Self {
        Self::system(size).italic()
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn light(mut self) -> Self {
        self.weight = FontWeight::Light;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}pt", self.family, self.size)?;
        match self.weight {
            FontWeight::Light => f.write_str(" light")?,
            FontWeight::Regular => {}
            FontWeight::Bold => f.write_str(" bold")?,
        }
        if self.italic {
            f.write_str(" italic")?;
        }
        Ok(())
    }
}

/// Horizontal alignment of text within its frame.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    #[default]
    Natural,
    Left,
    Center,
    Right,
    Justified,
}

/// How text that does not fit is wrapped or truncated.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum LineBreakMode {
    WordWrapping,
    CharWrapping,
    Clipping,
    TruncatingHead,
    #[default]
    TruncatingTail,
    TruncatingMiddle,
}

/// Border drawn around a text field.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    #[default]
    None,
    Line,
    Bezel,
    RoundedRect,
}

/// A run of text with the attributes styling can set on it.
///
/// Attributes cover the whole string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributedText {
    pub text: String,
    pub font: Option<Font>,
    pub foreground_color: Option<crate::paint::Color>,
}

impl AttributedText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
