//! Object-graph capabilities the engine needs from styled types.
//!
//! A styled type implements [`Styleable`] (what it is) and
//! [`NamedChildLookup`] (which sub-objects a key path may walk into).
//! Types whose children are not plain fields, or are internal to a widget
//! (a view's `layer`, a button's `titleLabel`), expose them through
//! [`DynamicPropertyLookup`] instead.
//!
//! ```rust
//! use livery_engine::named_children;
//! use livery_engine::object::Styleable;
//! use livery_engine::widgets::{Label, View};
//!
//! #[derive(Default)]
//! struct Card {
//!     title: Label,
//!     body: Option<View>,
//! }
//!
//! impl Styleable for Card {
//!     fn type_name(&self) -> &'static str {
//!         "Card"
//!     }
//! }
//!
//! named_children!(Card {
//!     "title" => title,
//!     "body" => body,
//! });
//!
//! let mut card = Card::default();
//! assert!(livery_engine::object::locate("title.layer", &mut card).is_ok());
//! assert!(livery_engine::object::locate("body", &mut card).is_err());
//! ```

mod locate;

use std::any::Any;
use std::fmt;

pub use locate::locate;

/// Widget categories an applier can target.
///
/// A styled object lists every category it belongs to in
/// [`Styleable::kinds`]; a `Label` is `[Label, View]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    View,
    Layer,
    Label,
    Button,
    SegmentedControl,
    TextField,
    Slider,
    Switch,
    ImageView,
    TextView,
    /// Application-defined category.
    Custom(&'static str),
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WidgetKind::View => "view",
            WidgetKind::Layer => "layer",
            WidgetKind::Label => "label",
            WidgetKind::Button => "button",
            WidgetKind::SegmentedControl => "segmented control",
            WidgetKind::TextField => "text field",
            WidgetKind::Slider => "slider",
            WidgetKind::Switch => "switch",
            WidgetKind::ImageView => "image view",
            WidgetKind::TextView => "text view",
            WidgetKind::Custom(name) => name,
        };
        f.write_str(name)
    }
}

// ── Styleable ─────────────────────────────────────────────────────────────

/// An object a style can be applied to.
pub trait Styleable: NamedChildLookup {
    /// Type name used in diagnostics.
    fn type_name(&self) -> &'static str;

    /// Widget categories this object belongs to, most specific first.
    fn kinds(&self) -> &'static [WidgetKind] {
        &[]
    }

    /// The part of this object that stores the properties of `kind`, as
    /// `Any` so an applier can downcast it to its concrete type.
    fn facet_mut(&mut self, _kind: WidgetKind) -> Option<&mut dyn Any> {
        None
    }

    /// `true` for an absent optional child. Nothing resolves through it.
    fn is_empty(&self) -> bool {
        false
    }
}

/// Sub-objects reachable by name from a key path segment.
///
/// Usually generated with [`named_children!`](crate::named_children).
pub trait NamedChildLookup {
    /// Names [`child_mut`](Self::child_mut) answers for.
    fn child_names(&self) -> &'static [&'static str];

    fn child_mut(&mut self, name: &str) -> Option<&mut dyn Styleable>;

    /// Fallback lookup for children not listed in
    /// [`child_names`](Self::child_names).
    fn dynamic_lookup(&mut self) -> Option<&mut dyn DynamicPropertyLookup> {
        None
    }
}

/// Runtime lookup of children that are not declared in a name table.
pub trait DynamicPropertyLookup {
    /// The child called `name`, if this object has one.
    fn dynamic_child(&mut self, name: &str) -> Option<&mut dyn Styleable>;

    /// Resolves a whole dotted path: the first segment through
    /// [`dynamic_child`](Self::dynamic_child), the rest through [`locate`].
    fn value_for_key_path(&mut self, path: &str) -> Option<&mut dyn Styleable> {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };
        let child = self.dynamic_child(head)?;
        match rest {
            Some(rest) => locate(rest, child).ok(),
            None if child.is_empty() => None,
            None => Some(child),
        }
    }
}

// ── Optional children ─────────────────────────────────────────────────────

impl<T: Styleable> Styleable for Option<T> {
    fn type_name(&self) -> &'static str {
        match self {
            Some(inner) => inner.type_name(),
            None => "None",
        }
    }

    fn kinds(&self) -> &'static [WidgetKind] {
        match self {
            Some(inner) => inner.kinds(),
            None => &[],
        }
    }

    fn facet_mut(&mut self, kind: WidgetKind) -> Option<&mut dyn Any> {
        self.as_mut()?.facet_mut(kind)
    }

    fn is_empty(&self) -> bool {
        match self {
            Some(inner) => inner.is_empty(),
            None => true,
        }
    }
}

impl<T: Styleable> NamedChildLookup for Option<T> {
    fn child_names(&self) -> &'static [&'static str] {
        match self {
            Some(inner) => inner.child_names(),
            None => &[],
        }
    }

    fn child_mut(&mut self, name: &str) -> Option<&mut dyn Styleable> {
        self.as_mut()?.child_mut(name)
    }

    fn dynamic_lookup(&mut self) -> Option<&mut dyn DynamicPropertyLookup> {
        self.as_mut()?.dynamic_lookup()
    }
}

// ── named_children! ───────────────────────────────────────────────────────

/// Implements [`NamedChildLookup`] for a type from a `"name" => field`
/// table. Fields may be nested (`"layer" => view.layer`) and must be
/// [`Styleable`] (an `Option<W>` field is).
///
/// An optional `dynamic { ... }` table implements
/// [`DynamicPropertyLookup`] for children that should only be reachable
/// as a fallback.
///
/// ```rust,ignore
/// named_children!(LoginScreen {
///     "title" => title,
///     "submit" => submit,
/// } dynamic {
///     "layer" => root.layer,
/// });
/// ```
#[macro_export]
macro_rules! named_children {
    (@lookup $ty:ty { $($name:literal => $($field:ident).+),* } $($extra:tt)*) => {
        impl $crate::object::NamedChildLookup for $ty {
            fn child_names(&self) -> &'static [&'static str] {
                &[$($name),*]
            }

            fn child_mut(
                &mut self,
                name: &str,
            ) -> ::std::option::Option<&mut dyn $crate::object::Styleable> {
                match name {
                    $( $name => ::std::option::Option::Some(
                        &mut self.$($field).+ as &mut dyn $crate::object::Styleable
                    ), )*
                    _ => ::std::option::Option::None,
                }
            }

            $($extra)*
        }
    };
    ($ty:ty { $($name:literal => $($field:ident).+),* $(,)? }) => {
        $crate::named_children!(@lookup $ty { $($name => $($field).+),* });
    };
    ($ty:ty { $($name:literal => $($field:ident).+),* $(,)? }
     dynamic { $($dname:literal => $($dfield:ident).+),* $(,)? }) => {
        $crate::named_children!(@lookup $ty { $($name => $($field).+),* }
            fn dynamic_lookup(
                &mut self,
            ) -> ::std::option::Option<&mut dyn $crate::object::DynamicPropertyLookup> {
                ::std::option::Option::Some(self)
            }
        );

        impl $crate::object::DynamicPropertyLookup for $ty {
            fn dynamic_child(
                &mut self,
                name: &str,
            ) -> ::std::option::Option<&mut dyn $crate::object::Styleable> {
                match name {
                    $( $dname => ::std::option::Option::Some(
                        &mut self.$($dfield).+ as &mut dyn $crate::object::Styleable
                    ), )*
                    _ => ::std::option::Option::None,
                }
            }
        }
    };
}
