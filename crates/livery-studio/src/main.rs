mod screen;
mod theme;

use anyhow::Context;
use livery_engine::logging::{LoggingConfig, init_logging};
use livery_engine::prelude::*;

use screen::DemoScreen;
use theme::{Assets, DefaultTheme};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let level = LogLevel::from_env()
        .context("reading the engine log level")?
        .unwrap_or_default();
    let engine = StyleEngine::with_logger(Logger::facade(level));
    log::info!("style engine ready: {} appliers, {level} diagnostics", engine.appliers().len());

    let theme = DefaultTheme::new(Assets::bundled());
    let mut screen = DemoScreen::new();
    engine.apply_style(&theme.screen(), &mut screen);

    report(&screen);
    Ok(())
}

fn report(screen: &DemoScreen) {
    println!();
    println!("  ── themed DemoScreen ─────────────────────────────");
    for (name, label) in [
        ("label1", &screen.label1),
        ("label2", &screen.label2),
        ("label3", &screen.label3),
        ("label4", &screen.label4),
    ] {
        println!(
            "  {name:<8} color={} font={}",
            describe(label.text_color),
            label.font.as_ref().map_or_else(|| "-".to_owned(), ToString::to_string),
        );
    }

    for (name, button) in [("button1", &screen.button1), ("button2", &screen.button2)] {
        println!(
            "  {name:<8} title={:?} normal={} selected={} background={}",
            button.title().unwrap_or(""),
            describe(button.title_color_for(ControlState::NORMAL)),
            describe(button.title_color_for(ControlState::SELECTED)),
            button
                .background_image_for(ControlState::NORMAL)
                .and_then(Image::name)
                .unwrap_or("-"),
        );
    }

    let layer = &screen.inner_view.layer;
    println!(
        "  layer    radius={} border={} opacity={} shadow={}",
        layer.corner_radius,
        layer.border_width,
        layer.opacity,
        describe(layer.shadow_color),
    );

    let placeholder = screen.textfield.attributed_placeholder.as_ref();
    println!(
        "  field    placeholder color={} font={}",
        describe(placeholder.and_then(|p| p.foreground_color)),
        placeholder
            .and_then(|p| p.font.as_ref())
            .map_or_else(|| "-".to_owned(), ToString::to_string),
    );
    println!();
}

fn describe(color: Option<Color>) -> String {
    match color {
        Some(c) => {
            let [r, g, b, a] = c.to_srgb_u8();
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
        None => "-".to_owned(),
    }
}
