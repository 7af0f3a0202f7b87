//! The style engine: walks a [`Style`] against an object graph and hands
//! each terminal value to the appliers.
//!
//! ```rust
//! use livery_engine::engine::StyleEngine;
//! use livery_engine::paint::Color;
//! use livery_engine::style;
//! use livery_engine::widgets::Label;
//!
//! let engine = StyleEngine::new();
//! let mut label = Label::new("Hello");
//! engine.apply_style(&style! { "textColor" => Color::RED }, &mut label);
//! assert_eq!(label.text_color, Some(Color::RED));
//! ```

use crate::apply::{self, Assignment, FromValue, ValueApplier, builtin_appliers};
use crate::error::StyleError;
use crate::logging::Logger;
use crate::object::{Styleable, locate};
use crate::style::{Key, Style, Value};

/// Applies styles to objects through an ordered list of [`ValueApplier`]s.
#[derive(Debug, Clone)]
pub struct StyleEngine {
    appliers: Vec<ValueApplier>,
    log: Logger,
}

impl StyleEngine {
    /// An engine with the built-in appliers, logging through the `log`
    /// facade at the default level.
    pub fn new() -> Self {
        Self::with_logger(Logger::default())
    }

    /// An engine with the built-in appliers and the given logger.
    pub fn with_logger(log: Logger) -> Self {
        Self { appliers: builtin_appliers(), log }
    }

    /// An engine with no appliers at all.
    pub fn empty(log: Logger) -> Self {
        Self { appliers: Vec::new(), log }
    }

    /// Adds an applier after the existing ones.
    pub fn register(&mut self, applier: ValueApplier) {
        self.appliers.push(applier);
    }

    pub fn register_all(&mut self, appliers: impl IntoIterator<Item = ValueApplier>) {
        self.appliers.extend(appliers);
    }

    pub fn appliers(&self) -> &[ValueApplier] {
        &self.appliers
    }

    pub fn logger(&self) -> &Logger {
        &self.log
    }

    pub fn logger_mut(&mut self) -> &mut Logger {
        &mut self.log
    }

    // ── application ───────────────────────────────────────────────────────

    /// Applies `style` to `object`.
    ///
    /// `superStyle` entries go first, then every other entry in insertion
    /// order. A nested style is applied to the object its key resolves to;
    /// any other value is assigned to the property named by the key's last
    /// component. Failures are logged and never stop the remaining entries.
    pub fn apply_style(&self, style: &Style, object: &mut dyn Styleable) {
        self.log.verbose(format_args!("applying style {style} to {}", object.type_name()));

        for (_, value) in style.iter().filter(|(key, _)| key.is_super_style()) {
            match value.as_style() {
                Some(base) => self.apply_style(&base, object),
                None => self.log.report(StyleError::InvalidSuperStyleValue {
                    type_name: object.type_name(),
                    value_type: value.type_name(),
                }),
            }
        }

        for (key, value) in style.iter().filter(|(key, _)| !key.is_super_style()) {
            match value.as_style() {
                Some(nested) => self.apply_nested(key, &nested, object),
                None => self.apply_entry(key, value, object),
            }
        }
    }

    fn apply_nested(&self, key: &Key, nested: &Style, object: &mut dyn Styleable) {
        match locate(key.as_str(), object) {
            Ok(target) => self.apply_style(nested, target),
            Err(e) => self.log.report(StyleError::from(e)),
        }
    }

    fn apply_entry(&self, key: &Key, value: &Value, object: &mut dyn Styleable) {
        let target = if key.component_count() > 1 {
            match locate(key.path_to_parent(), object) {
                Ok(target) => target,
                Err(e) => {
                    self.log.report(StyleError::from(e));
                    return;
                }
            }
        } else {
            object
        };

        if value.is_unset() {
            self.log.report(StyleError::NullTerminalValue {
                property: key.last_component().to_owned(),
                type_name: target.type_name(),
            });
            return;
        }

        self.apply_terminal(key, value, target);
    }

    /// Runs every applier matching `object` for the property at `key`.
    fn apply_terminal(&self, key: &Key, value: &Value, object: &mut dyn Styleable) {
        let assignment = Assignment::new(key, value, &self.log);
        self.log.verbose(format_args!(
            "applying {} value to {} at key {}",
            value.type_name(),
            object.type_name(),
            key.last_component(),
        ));

        let mut matched = 0;
        let mut applied = false;
        for applier in &self.appliers {
            if !applier.matches(object) {
                continue;
            }
            matched += 1;
            if applier.dispatch(&assignment, object) {
                self.log.verbose(format_args!("applied value from the {} applier", applier.name()));
                applied = true;
            }
        }
        self.log.verbose(format_args!("found {matched} appliers"));

        if !applied {
            self.log.report(StyleError::UnrecognizedProperty {
                property: key.last_component().to_owned(),
                type_name: object.type_name(),
                value_type: value.type_name(),
            });
            if value.is_map() {
                self.log.warning("did you forget to wrap a mapping in a Style?");
            }
        }
    }

    /// Typed assignment outside a style. See [`apply::apply_value`].
    pub fn apply_value<T: FromValue>(
        &self,
        value: &Value,
        target: Option<&mut T>,
        property: &str,
    ) -> bool {
        apply::apply_value(&self.log, value, target, property)
    }
}

impl Default for StyleEngine {
    fn default() -> Self {
        Self::new()
    }
}
