use livery_engine::named_children;
use livery_engine::prelude::*;

/// The sample screen: one of each widget the built-in appliers know.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoScreen {
    pub label1: Label,
    pub label2: Label,
    pub label3: Label,
    pub label4: Label,
    pub button1: Button,
    pub button2: Button,
    pub color_view: View,
    pub inner_view: View,
    pub segmented_control: SegmentedControl,
    pub textfield: TextField,
    pub slider: Slider,
    pub svitch: Switch,
    pub imageview: ImageView,
    pub textview: TextView,
    /// Hidden until the screen finishes loading.
    pub footer: Option<Label>,
}

impl DemoScreen {
    pub fn new() -> Self {
        Self {
            label1: Label::new("Label 1"),
            label2: Label::new("Label 2"),
            label3: Label::new("Label 3"),
            label4: Label::new("A rather long fourth label that will not fit"),
            button1: Button::new("Toggle"),
            button2: Button::new("Next"),
            color_view: View::new(),
            inner_view: View::new(),
            segmented_control: SegmentedControl::new(["First", "Second", "Third"]).selected(0),
            textfield: TextField::new().placeholder("placeholder"),
            slider: Slider::new().value(0.5),
            svitch: Switch::new().on(true),
            imageview: ImageView::new(None),
            textview: TextView::new("Lorem ipsum dolor sit amet."),
            footer: None,
        }
    }
}

impl Default for DemoScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Styleable for DemoScreen {
    fn type_name(&self) -> &'static str {
        "DemoScreen"
    }
}

named_children!(DemoScreen {
    "label1" => label1,
    "label2" => label2,
    "label3" => label3,
    "label4" => label4,
    "button1" => button1,
    "button2" => button2,
    "colorView" => color_view,
    "innerView" => inner_view,
    "segmentedControl" => segmented_control,
    "textfield" => textfield,
    "slider" => slider,
    "svitch" => svitch,
    "imageview" => imageview,
    "textview" => textview,
    "footer" => footer,
});
