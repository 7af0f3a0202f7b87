use std::collections::HashMap;

use livery_engine::prelude::*;
use livery_engine::style::keys::{
    button, image, label, layer, segmented_control, slider, switch, text_field, text_view, view,
};

// ── assets ────────────────────────────────────────────────────────────────

/// Named colors and images, standing in for an app's asset catalog.
#[derive(Debug, Clone)]
pub struct Assets {
    colors: HashMap<&'static str, Color>,
    images: HashMap<&'static str, Image>,
}

impl Assets {
    pub fn bundled() -> Self {
        let colors = HashMap::from([("CommonText", Color::rgb(0.2, 0.2, 0.25))]);
        let images = HashMap::from([
            ("palette", Image::solid_sized(Color::rgb(0.9, 0.5, 0.1), 24, 24)),
            ("home", Image::solid_sized(Color::rgb(0.2, 0.4, 0.8), 24, 24)),
            ("ninja", Image::solid_sized(Color::BLACK, 24, 24)),
        ]);
        Self { colors, images }
    }

    pub fn color(&self, name: &str) -> Option<Color> {
        self.colors.get(name).copied()
    }

    pub fn image(&self, name: &str) -> Option<Image> {
        self.images.get(name).cloned()
    }
}

// ── constants ─────────────────────────────────────────────────────────────

const BRAND: Color = Color::rgb(0.4, 0.7, 0.1);
const BACKGROUND: Color = Color::gray(0.9, 1.0);

const FAMILY_REGULAR: &str = "HelveticaNeue-Light";
const FAMILY_BOLD: &str = "HelveticaNeue-Bold";

fn common_font() -> Font {
    Font::new(FAMILY_REGULAR, 16.0)
}

fn common_bold_font() -> Font {
    Font::new(FAMILY_BOLD, 16.0).bold()
}

// ── styles ────────────────────────────────────────────────────────────────

/// The house theme, keyed by the [`DemoScreen`](crate::screen::DemoScreen)
/// child names.
pub struct DefaultTheme {
    assets: Assets,
}

impl DefaultTheme {
    pub fn new(assets: Assets) -> Self {
        Self { assets }
    }

    pub fn common_label(&self) -> Style {
        style! {
            label::TEXT_COLOR => self.assets.color("CommonText"),
            label::FONT => common_font(),
        }
    }

    pub fn bold_label(&self) -> Style {
        style! {
            label::FONT => common_bold_font(),
            view::BACKGROUND_COLOR => BRAND,
        }
        .inherit(self.common_label())
    }

    pub fn common_label_colored(&self) -> Style {
        style! { label::TEXT_COLOR => BRAND }.inherit(self.common_label())
    }

    pub fn screen(&self) -> Style {
        style! {
            "label1.textColor" => Color::RED,
            "label2" => self.bold_label(),
            "label3" => self.common_label_colored(),
            "label4" => style! {
                label::FONT => Font::italic_system(30.0),
                label::TEXT_COLOR => Color::DARK_GRAY,
                label::TEXT_ALIGNMENT => TextAlignment::Right,
                label::LINE_BREAK_MODE => LineBreakMode::TruncatingHead,
            },
            "colorView" => style! {
                view::BACKGROUND_COLOR => BACKGROUND,
            },
            "button1" => style! {
                button::TITLE_FONT => Font::italic_system(16.0),
                button::TITLE_COLOR => Color::GREEN,
                button::TITLE_COLOR.selected().highlighted().disabled() => Color::RED,
            },
            "button2" => style! {
                view::TINT_COLOR => Color::RED,
                button::IMAGE => self.assets.image("palette"),
                button::BACKGROUND_IMAGE_FROM_COLOR => Color::LIGHT_GRAY,
                button::TITLE_COLOR => Color::BLUE,
                button::TITLE_FONT => Font::system(20.0),
            },
            "innerView.layer" => style! {
                layer::BACKGROUND_COLOR => Color::RED,
                layer::BORDER_COLOR => Color::BLACK,
                layer::BORDER_WIDTH => 2.0,
                layer::CORNER_RADIUS => 5.0,
                layer::OPACITY => 0.7,
                layer::SHADOW_COLOR => Color::YELLOW,
                layer::SHADOW_OFFSET => Size::new(10.0, 10.0),
                layer::SHADOW_OPACITY => 1.0,
                layer::SHADOW_RADIUS => 5.0,
            },
            "segmentedControl" => style! {
                segmented_control::BACKGROUND_IMAGE_FROM_COLOR => Color::GREEN,
                segmented_control::BACKGROUND_IMAGE_FROM_COLOR.selected() => Color::RED,
                segmented_control::FONT => Font::system(10.0),
                segmented_control::FONT.selected() => Font::bold_system(15.0),
                segmented_control::SELECTED_SEGMENT_TINT_COLOR => Color::BLUE,
                segmented_control::TEXT_COLOR => Color::PURPLE,
                segmented_control::TEXT_COLOR.selected() => Color::WHITE,
            },
            "textfield" => style! {
                text_field::TEXT_COLOR => Color::DARK_GRAY,
                text_field::FONT => Font::italic_system(20.0),
                text_field::TEXT_ALIGNMENT => TextAlignment::Center,
                text_field::BORDER_STYLE => BorderStyle::Bezel,
                text_field::PLACEHOLDER_COLOR => Color::YELLOW,
                text_field::PLACEHOLDER_FONT => Font::bold_system(10.0),
            },
            "slider" => style! {
                slider::MINIMUM_VALUE_IMAGE => self.assets.image("home"),
                slider::MAXIMUM_VALUE_IMAGE => self.assets.image("ninja"),
                slider::MINIMUM_TRACK_TINT_COLOR => Color::RED,
                slider::MAXIMUM_TRACK_TINT_COLOR => Color::GREEN,
                slider::THUMB_TINT_COLOR => Color::BLUE,
            },
            "svitch" => style! {
                switch::ON_TINT_COLOR => Color::BLUE,
                switch::THUMB_TINT_COLOR => Color::GREEN,
            },
            "imageview" => style! {
                image::IMAGE => self.assets.image("ninja"),
                view::TINT_COLOR => Color::RED,
                image::HIGHLIGHTED_IMAGE => self.assets.image("home"),
            },
            "textview" => style! {
                text_view::TEXT_COLOR => Color::PURPLE,
                text_view::FONT => Font::italic_system(12.0),
                text_view::TEXT_ALIGNMENT => TextAlignment::Justified,
            },
        }
    }
}
