//! Value appliers: the code that actually writes a style value into a
//! widget property.
//!
//! An applier targets one [`WidgetKind`]. The engine runs every applier
//! whose kind the destination object declares; an applier reports whether
//! it recognized the property name.

mod builtin;

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::coords::Size;
use crate::error::StyleError;
use crate::logging::Logger;
use crate::number::{self, NumberConvertible, Scalar};
use crate::object::{Styleable, WidgetKind};
use crate::paint::{Color, Image};
use crate::style::{ControlState, Key, Value};
use crate::text::{BorderStyle, Font, LineBreakMode, TextAlignment};

pub use builtin::builtin_appliers;

// ── FromValue ─────────────────────────────────────────────────────────────

/// Property types a [`Value`] can be assigned to.
///
/// Conversion is strict: a value converts only from the variant (and, for
/// numbers, the representation) that matches the property type. Numeric
/// widening happens before, in [`Assignment::set_number`].
pub trait FromValue: Sized {
    /// Name of the property type, for diagnostics.
    fn expected() -> &'static str;

    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! from_value {
    ($($ty:ty => $name:literal, $pat:pat => $out:expr;)*) => {
        $(
            impl FromValue for $ty {
                fn expected() -> &'static str {
                    $name
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        $pat => Some($out),
                        _ => None,
                    }
                }
            }
        )*
    };
}

from_value! {
    bool => "Bool", Value::Bool(v) => *v;
    String => "Text", Value::Text(v) => v.clone();
    Color => "Color", Value::Color(v) => *v;
    Font => "Font", Value::Font(v) => v.clone();
    Image => "Image", Value::Image(v) => v.clone();
    Size => "Size", Value::Size(v) => *v;
    TextAlignment => "Alignment", Value::Alignment(v) => *v;
    LineBreakMode => "LineBreak", Value::LineBreak(v) => *v;
    BorderStyle => "BorderStyle", Value::BorderStyle(v) => *v;
    f32 => "f32", Value::Number(number::Number::F32(v)) => *v;
    f64 => "f64", Value::Number(number::Number::F64(v)) => *v;
    Scalar => "Scalar", Value::Number(number::Number::Scalar(v)) => *v;
}

/// Optional properties take the value wrapped in `Some`.
impl<T: FromValue> FromValue for Option<T> {
    fn expected() -> &'static str {
        T::expected()
    }

    fn from_value(value: &Value) -> Option<Self> {
        T::from_value(value).map(Some)
    }
}

/// Writes `value` into `target`.
///
/// Fails closed: a missing target or a value that does not convert to `T`
/// is reported at error level and leaves the target untouched. Returns
/// `true` when the value was written.
pub fn apply_value<T: FromValue>(
    log: &Logger,
    value: &Value,
    target: Option<&mut T>,
    property: &str,
) -> bool {
    let Some(target) = target else {
        log.report(StyleError::NullTarget {
            property: property.to_owned(),
            value_type: value.type_name(),
        });
        return false;
    };
    match T::from_value(value) {
        Some(v) => {
            *target = v;
            true
        }
        None => {
            log.report(type_mismatch::<T>(value, property));
            false
        }
    }
}

fn type_mismatch<T: FromValue>(value: &Value, property: &str) -> StyleError {
    StyleError::TypeMismatch {
        property: property.to_owned(),
        expected: T::expected(),
        found: value.type_name(),
    }
}

// ── Assignment ────────────────────────────────────────────────────────────

/// One terminal style entry on its way into a property.
#[derive(Debug, Clone, Copy)]
pub struct Assignment<'a> {
    pub value: &'a Value,
    /// Property name: the key's last component, modifiers included. Only
    /// control-state aware appliers look past them, via [`Self::base_name`].
    pub property: &'a str,
    pub key: &'a Key,
    pub log: &'a Logger,
}

impl<'a> Assignment<'a> {
    pub fn new(key: &'a Key, value: &'a Value, log: &'a Logger) -> Self {
        Self { value, property: key.last_component(), key, log }
    }

    /// The property name with any `:modifier` suffix removed.
    pub fn base_name(&self) -> &'a str {
        self.key.base_name()
    }

    /// Writes the value as-is. See [`apply_value`].
    pub fn set<T: FromValue>(&self, target: Option<&mut T>) -> bool {
        apply_value(self.log, self.value, target, self.property)
    }

    /// Re-tags a numeric value as `N` before writing it; non-numeric values
    /// go through unchanged and fail the type check.
    pub fn set_number<N, T>(&self, target: Option<&mut T>) -> bool
    where
        N: NumberConvertible,
        T: FromValue,
    {
        let value = number::coerce::<N>(self.value);
        apply_value(self.log, &value, target, self.property)
    }

    /// Converts the value once, then stores it for every state the key
    /// targets.
    pub fn set_for_states<T: FromValue + Clone>(
        &self,
        table: &mut HashMap<ControlState, T>,
    ) -> bool {
        match T::from_value(self.value) {
            Some(v) => {
                self.store_for_states(table, v);
                true
            }
            None => {
                self.log.report(type_mismatch::<T>(self.value, self.property));
                false
            }
        }
    }

    /// Stores an already converted value for every state the key targets.
    pub fn store_for_states<T: Clone>(&self, table: &mut HashMap<ControlState, T>, value: T) {
        for state in self.key.resolved_states().iter() {
            table.insert(state, value.clone());
        }
    }

    /// The value as `T`, logging a type mismatch when it is not one.
    pub fn convert<T: FromValue>(&self) -> Option<T> {
        let converted = T::from_value(self.value);
        if converted.is_none() {
            self.log.report(type_mismatch::<T>(self.value, self.property));
        }
        converted
    }
}

// ── ValueApplier ──────────────────────────────────────────────────────────

type Dispatch = dyn Fn(&Assignment<'_>, &mut dyn Styleable) -> bool + Send + Sync;

/// Writes property values for one widget category.
#[derive(Clone)]
pub struct ValueApplier {
    name: &'static str,
    target: WidgetKind,
    dispatch: Arc<Dispatch>,
}

impl ValueApplier {
    /// An applier over the concrete type `T` that stores `target`'s
    /// properties (see [`Styleable::facet_mut`]).
    ///
    /// `apply` returns `false` for property names it does not handle.
    pub fn new<T: Any>(
        name: &'static str,
        target: WidgetKind,
        apply: fn(&Assignment<'_>, &mut T) -> bool,
    ) -> Self {
        Self::from_fn(name, target, move |assignment, object| {
            match object.facet_mut(target).and_then(|facet| facet.downcast_mut::<T>()) {
                Some(facet) => apply(assignment, facet),
                None => false,
            }
        })
    }

    /// An applier from a closure over the type-erased object.
    pub fn from_fn(
        name: &'static str,
        target: WidgetKind,
        dispatch: impl Fn(&Assignment<'_>, &mut dyn Styleable) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self { name, target, dispatch: Arc::new(dispatch) }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn target(&self) -> WidgetKind {
        self.target
    }

    /// `true` if `object` belongs to this applier's widget category.
    pub fn matches(&self, object: &dyn Styleable) -> bool {
        object.kinds().contains(&self.target)
    }

    /// Runs the applier. Returns `true` if it recognized the property.
    pub fn dispatch(&self, assignment: &Assignment<'_>, object: &mut dyn Styleable) -> bool {
        (self.dispatch)(assignment, object)
    }
}

impl fmt::Debug for ValueApplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueApplier")
            .field("name", &self.name)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}
