use crate::apply::{Assignment, ValueApplier};
use crate::coords::Size;
use crate::named_children;
use crate::number::Scalar;
use crate::object::{Styleable, WidgetKind};
use crate::paint::Color;

/// The backing layer of a view: border, corners, shadow and opacity.
///
/// Reachable from any view through the `layer` key path segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub background_color: Option<Color>,
    pub border_color: Option<Color>,
    pub border_width: Scalar,
    pub corner_radius: Scalar,
    /// Overall opacity in `[0, 1]`.
    pub opacity: f32,
    pub shadow_color: Option<Color>,
    pub shadow_radius: Scalar,
    pub shadow_opacity: f32,
    pub shadow_offset: Size,
}

impl Layer {
    pub const SHADOW_COLOR: &'static str = "shadowColor";
    pub const SHADOW_RADIUS: &'static str = "shadowRadius";
    pub const SHADOW_OPACITY: &'static str = "shadowOpacity";
    pub const SHADOW_OFFSET: &'static str = "shadowOffset";
    pub const BORDER_COLOR: &'static str = "borderColor";
    pub const BORDER_WIDTH: &'static str = "borderWidth";
    pub const BACKGROUND_COLOR: &'static str = "backgroundColor";
    pub const CORNER_RADIUS: &'static str = "cornerRadius";
    pub const OPACITY: &'static str = "opacity";

    pub fn new() -> Self {
        Self {
            background_color: None,
            border_color: None,
            border_width: Scalar(0.0),
            corner_radius: Scalar(0.0),
            opacity: 1.0,
            shadow_color: None,
            shadow_radius: Scalar(3.0),
            shadow_opacity: 0.0,
            shadow_offset: Size::new(0.0, -3.0),
        }
    }

    pub fn corner_radius(mut self, r: f64) -> Self {
        self.corner_radius = Scalar(r);
        self
    }

    pub fn border(mut self, color: Color, width: f64) -> Self {
        self.border_color = Some(color);
        self.border_width = Scalar(width);
        self
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self::new()
    }
}

impl Styleable for Layer {
    fn type_name(&self) -> &'static str {
        "Layer"
    }

    fn kinds(&self) -> &'static [WidgetKind] {
        &[WidgetKind::Layer]
    }

    fn facet_mut(&mut self, kind: WidgetKind) -> Option<&mut dyn std::any::Any> {
        match kind {
            WidgetKind::Layer => Some(self),
            _ => None,
        }
    }
}

named_children!(Layer {});

fn apply(a: &Assignment<'_>, layer: &mut Layer) -> bool {
    match a.property {
        Layer::SHADOW_COLOR => a.set(Some(&mut layer.shadow_color)),
        Layer::SHADOW_RADIUS => a.set_number::<Scalar, _>(Some(&mut layer.shadow_radius)),
        Layer::SHADOW_OPACITY => a.set_number::<f32, _>(Some(&mut layer.shadow_opacity)),
        Layer::SHADOW_OFFSET => a.set(Some(&mut layer.shadow_offset)),
        Layer::BORDER_COLOR => a.set(Some(&mut layer.border_color)),
        Layer::BORDER_WIDTH => a.set_number::<Scalar, _>(Some(&mut layer.border_width)),
        Layer::BACKGROUND_COLOR => a.set(Some(&mut layer.background_color)),
        Layer::CORNER_RADIUS => a.set_number::<Scalar, _>(Some(&mut layer.corner_radius)),
        Layer::OPACITY => a.set_number::<f32, _>(Some(&mut layer.opacity)),
        _ => return false,
    };
    true
}

pub(crate) fn applier() -> ValueApplier {
    ValueApplier::new("layer", WidgetKind::Layer, apply)
}
