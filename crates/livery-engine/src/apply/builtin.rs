use crate::widgets::{
    button, image_view, label, layer, segmented_control, slider, switch, text_field, text_view,
    view,
};

use super::ValueApplier;

/// The appliers every [`StyleEngine`](crate::engine::StyleEngine) starts
/// with, in dispatch order.
pub fn builtin_appliers() -> Vec<ValueApplier> {
    vec![
        layer::applier(),
        view::applier(),
        label::applier(),
        button::applier(),
        segmented_control::applier(),
        text_field::applier(),
        slider::applier(),
        switch::applier(),
        image_view::applier(),
        text_view::applier(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::WidgetKind;

    #[test]
    fn registration_order() {
        let names: Vec<&str> = builtin_appliers().iter().map(ValueApplier::name).collect();
        assert_eq!(
            names,
            vec![
                "layer",
                "view",
                "label",
                "button",
                "segmented control",
                "text field",
                "slider",
                "switch",
                "image view",
                "text view",
            ]
        );
    }

    #[test]
    fn each_builtin_targets_a_distinct_kind() {
        let appliers = builtin_appliers();
        for applier in &appliers {
            assert_eq!(applier.name(), applier.target().to_string());
        }
        assert!(appliers.iter().all(|a| !matches!(a.target(), WidgetKind::Custom(_))));
    }
}
