//! Styles: ordered `Key → Value` mappings describing property assignments
//! on an object tree.
//!
//! ```rust
//! use livery_engine::paint::Color;
//! use livery_engine::style;
//! use livery_engine::style::keys::{label, view};
//! use livery_engine::text::Font;
//!
//! let common_label = style! {
//!     label::TEXT_COLOR => Color::DARK_GRAY,
//!     label::FONT => Font::system(16.0),
//! };
//! let screen = style! {
//!     "label1.textColor" => Color::RED,
//!     "label2" => common_label.clone().with(view::BACKGROUND_COLOR, Color::WHITE),
//! };
//! assert_eq!(screen.len(), 2);
//! ```

pub mod key;
pub mod keys;
mod value;

use std::fmt;

use indexmap::IndexMap;

pub use key::{ControlKey, ControlState, Key, MODIFIER_SEPARATOR, Modifier};
pub use value::Value;

/// Builds a [`Style`] from `key => value` pairs. Keys are anything
/// `Into<Key>`, values anything `Into<Value>`.
#[macro_export]
macro_rules! style {
    () => {
        $crate::style::Style::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut style = $crate::style::Style::new();
        $( style.insert($key, $value); )+
        style
    }};
}

/// An ordered mapping from [`Key`] to [`Value`].
///
/// Iteration follows insertion order. Inserting an existing key replaces its
/// value in place (the entry keeps its original position).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    entries: IndexMap<Key, Value>,
}

impl Style {
    pub fn new() -> Self {
        Self { entries: IndexMap::new() }
    }

    /// Builds a style from an untyped mapping. Returns `None` if any key is
    /// not [`Value::Text`].
    pub fn from_map(entries: &[(Value, Value)]) -> Option<Self> {
        entries
            .iter()
            .map(|(k, v)| match k {
                Value::Text(path) => Some((Key::new(path.as_str()), v.clone())),
                _ => None,
            })
            .collect()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Makes `base` this style's super-style: its entries are applied before
    /// this style's own entries.
    pub fn inherit(self, base: impl Into<Value>) -> Self {
        self.with(keys::SUPER_STYLE, base)
    }

    /// Inserts an entry, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Value at `path`, if present.
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.entries.get(path)
    }

    /// Sets the value at `path`.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        self.insert(Key::new(path), value);
    }

    /// Removes the entry at `path`, keeping the order of the rest.
    pub fn remove(&mut self, path: &str) -> Option<Value> {
        self.entries.shift_remove(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// A new style holding the entries that satisfy `pred`, in order.
    pub fn filter(&self, mut pred: impl FnMut(&Key, &Value) -> bool) -> Style {
        self.iter()
            .filter(|(k, v)| pred(k, v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Style::new();
        style.extend(iter);
        style
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for Style {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a> IntoIterator for &'a Style {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match value {
                Value::Style(nested) => write!(f, "{key}: {nested}")?,
                other => write!(f, "{key}: {}", other.type_name())?,
            }
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::style::keys::{label, view};

    #[test]
    fn iteration_follows_insertion_order() {
        let style = style! {
            "b" => 1,
            "a" => 2,
            "c" => 3,
        };
        let order: Vec<&str> = style.keys().map(Key::as_str).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn last_write_wins_and_keeps_position() {
        let mut style = Style::new().with("a", 1).with("b", 2);
        let old = style.insert("a", 3);
        assert_eq!(old, Some(Value::from(1)));
        let entries: Vec<(&str, &Value)> = style.iter().map(|(k, v)| (k.as_str(), v)).collect();
        assert_eq!(entries, vec![("a", &Value::from(3)), ("b", &Value::from(2))]);
    }

    #[test]
    fn subscript_get_and_set_by_path() {
        let mut style = Style::new();
        style.set("label1.textColor", Color::RED);
        assert_eq!(style.get("label1.textColor"), Some(&Value::Color(Color::RED)));
        assert_eq!(style.get("label2.textColor"), None);
    }

    #[test]
    fn constant_and_string_keys_address_the_same_entry() {
        let style = style! { label::TEXT_COLOR => Color::BLUE };
        assert!(style.contains("textColor"));
    }

    #[test]
    fn filter_returns_matching_entries_in_order() {
        let style = style! {
            "superStyle" => Style::new(),
            "x" => 1,
            "y" => 2,
        };
        let standard = style.filter(|k, _| !k.is_super_style());
        let order: Vec<&str> = standard.keys().map(Key::as_str).collect();
        assert_eq!(order, vec!["x", "y"]);
        assert_eq!(style.len(), 3);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut style = style! { "a" => 1, "b" => 2, "c" => 3 };
        style.remove("a");
        let order: Vec<&str> = style.keys().map(Key::as_str).collect();
        assert_eq!(order, vec!["b", "c"]);
    }

    #[test]
    fn inherit_sets_the_super_style_key() {
        let base = style! { view::BACKGROUND_COLOR => Color::WHITE };
        let derived = Style::new().inherit(base.clone());
        assert_eq!(derived.get("superStyle"), Some(&Value::Style(base)));
    }

    #[test]
    fn from_map_rejects_non_text_keys() {
        let ok = Style::from_map(&[(Value::from("font"), Value::from(12))]);
        assert_eq!(ok.map(|s| s.len()), Some(1));
        let bad = Style::from_map(&[(Value::Bool(true), Value::from(12))]);
        assert!(bad.is_none());
    }

    #[test]
    fn display_summarizes_nested_styles() {
        let style = style! { "label2" => style! { "font" => 12 } };
        assert_eq!(style.to_string(), "{label2: {font: Number}}");
    }

    #[test]
    fn empty_macro_builds_empty_style() {
        let style: Style = style!();
        assert!(style.is_empty());
    }
}
