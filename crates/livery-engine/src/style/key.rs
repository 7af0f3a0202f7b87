use std::borrow::{Borrow, Cow};
use std::fmt;

/// Separates a property name from its control-state modifiers
/// (`titleColor:selected:highlighted`).
pub const MODIFIER_SEPARATOR: char = ':';

bitflags::bitflags! {
    /// Interactive states a control-state aware property can be set for.
    ///
    /// Iteration order is normal, disabled, focused, highlighted, selected,
    /// application.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct ControlState: u8 {
        const NORMAL      = 1 << 0;
        const DISABLED    = 1 << 1;
        const FOCUSED     = 1 << 2;
        const HIGHLIGHTED = 1 << 3;
        const SELECTED    = 1 << 4;
        const APPLICATION = 1 << 5;
    }
}

impl Default for ControlState {
    fn default() -> Self {
        ControlState::NORMAL
    }
}

/// A state modifier as written in a key suffix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Modifier {
    Normal,
    Selected,
    Highlighted,
    Disabled,
    Focused,
    Application,
}

impl Modifier {
    pub const ALL: [Modifier; 6] = [
        Modifier::Normal,
        Modifier::Selected,
        Modifier::Highlighted,
        Modifier::Disabled,
        Modifier::Focused,
        Modifier::Application,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::Normal => "normal",
            Modifier::Selected => "selected",
            Modifier::Highlighted => "highlighted",
            Modifier::Disabled => "disabled",
            Modifier::Focused => "focused",
            Modifier::Application => "application",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }

    pub fn state(self) -> ControlState {
        match self {
            Modifier::Normal => ControlState::NORMAL,
            Modifier::Selected => ControlState::SELECTED,
            Modifier::Highlighted => ControlState::HIGHLIGHTED,
            Modifier::Disabled => ControlState::DISABLED,
            Modifier::Focused => ControlState::FOCUSED,
            Modifier::Application => ControlState::APPLICATION,
        }
    }
}

// ── Key ───────────────────────────────────────────────────────────────────

/// A dotted path addressing a sub-object and/or a property,
/// e.g. `"innerView.layer.cornerRadius"`.
///
/// Equality and hashing use the path string only, so a key built from a
/// [`ControlKey`] and one parsed from the same string are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key {
    path: Cow<'static, str>,
}

impl Key {
    #[inline]
    pub const fn from_static(path: &'static str) -> Self {
        Self { path: Cow::Borrowed(path) }
    }

    pub fn new(path: impl Into<String>) -> Self {
        Self { path: Cow::Owned(path.into()) }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Path segments. An empty path yields one empty segment.
    pub fn components(&self) -> Vec<&str> {
        self.path.split('.').collect()
    }

    pub fn component_count(&self) -> usize {
        self.path.split('.').count()
    }

    /// The final segment, modifiers included.
    pub fn last_component(&self) -> &str {
        self.path.rsplit('.').next().unwrap_or("")
    }

    /// Everything before the final segment; empty for single-segment paths.
    pub fn path_to_parent(&self) -> &str {
        self.path.rsplit_once('.').map_or("", |(parent, _)| parent)
    }

    /// `true` for the reserved super-style key.
    pub fn is_super_style(&self) -> bool {
        self.as_str() == super::keys::SUPER_STYLE.as_str()
    }

    // ── control-state modifiers ───────────────────────────────────────────

    /// The final segment with any modifier suffix removed.
    pub fn base_name(&self) -> &str {
        let last = self.last_component();
        last.split(MODIFIER_SEPARATOR).next().unwrap_or(last)
    }

    pub fn is_modified(&self) -> bool {
        self.last_component().contains(MODIFIER_SEPARATOR)
    }

    /// Recognized modifiers in the order they were written. Unknown suffixes
    /// are skipped.
    pub fn modifiers(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.last_component().split(MODIFIER_SEPARATOR).skip(1).filter_map(Modifier::parse)
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers().any(|m| m == modifier)
    }

    /// States this key targets: the union of its modifiers, or
    /// [`ControlState::NORMAL`] when none is present. Never empty.
    pub fn resolved_states(&self) -> ControlState {
        let states = self
            .modifiers()
            .fold(ControlState::empty(), |acc, m| acc | m.state());
        if states.is_empty() { ControlState::NORMAL } else { states }
    }

    fn with_modifier(&self, modifier: Modifier) -> Self {
        Self::new(format!("{}{MODIFIER_SEPARATOR}{}", self.path, modifier.as_str()))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.path
    }
}

impl From<&str> for Key {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Key {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

// ── ControlKey ────────────────────────────────────────────────────────────

/// A [`Key`] for a control-state aware property, with builder methods that
/// append state modifiers:
///
/// ```rust
/// use livery_engine::style::keys::button;
/// use livery_engine::style::ControlState;
///
/// let key = button::TITLE_COLOR.selected().highlighted();
/// assert_eq!(key.as_str(), "titleColor:selected:highlighted");
/// assert_eq!(
///     key.key().resolved_states(),
///     ControlState::SELECTED | ControlState::HIGHLIGHTED,
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ControlKey(Key);

impl ControlKey {
    #[inline]
    pub const fn from_static(path: &'static str) -> Self {
        Self(Key::from_static(path))
    }

    pub fn new(path: impl Into<String>) -> Self {
        Self(Key::new(path))
    }

    #[inline]
    pub fn key(&self) -> &Key {
        &self.0
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn modified(&self, modifier: Modifier) -> Self {
        Self(self.0.with_modifier(modifier))
    }

    pub fn normal(&self) -> Self {
        self.modified(Modifier::Normal)
    }

    pub fn selected(&self) -> Self {
        self.modified(Modifier::Selected)
    }

    pub fn highlighted(&self) -> Self {
        self.modified(Modifier::Highlighted)
    }

    pub fn disabled(&self) -> Self {
        self.modified(Modifier::Disabled)
    }

    pub fn focused(&self) -> Self {
        self.modified(Modifier::Focused)
    }

    pub fn application(&self) -> Self {
        self.modified(Modifier::Application)
    }
}

impl fmt::Display for ControlKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<ControlKey> for Key {
    fn from(key: ControlKey) -> Self {
        key.0
    }
}

impl From<&ControlKey> for Key {
    fn from(key: &ControlKey) -> Self {
        key.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── paths ─────────────────────────────────────────────────────────────

    #[test]
    fn components_split_on_dots() {
        let key = Key::from("innerView.layer.cornerRadius");
        assert_eq!(key.components(), vec!["innerView", "layer", "cornerRadius"]);
        assert_eq!(key.last_component(), "cornerRadius");
        assert_eq!(key.path_to_parent(), "innerView.layer");
    }

    #[test]
    fn single_segment_has_empty_parent() {
        let key = Key::from_static("textColor");
        assert_eq!(key.component_count(), 1);
        assert_eq!(key.path_to_parent(), "");
        assert_eq!(key.last_component(), "textColor");
    }

    #[test]
    fn empty_path_is_one_empty_component() {
        let key = Key::new("");
        assert_eq!(key.components(), vec![""]);
        assert_eq!(key.last_component(), "");
        assert_eq!(key.path_to_parent(), "");
    }

    #[test]
    fn equality_ignores_ownership() {
        assert_eq!(Key::from_static("font"), Key::new(String::from("font")));
    }

    // ── modifiers ─────────────────────────────────────────────────────────

    #[test]
    fn unmodified_key_resolves_to_normal() {
        let key = Key::from("titleColor");
        assert!(!key.is_modified());
        assert_eq!(key.base_name(), "titleColor");
        assert_eq!(key.resolved_states(), ControlState::NORMAL);
    }

    #[test]
    fn chained_modifiers_resolve_to_their_union() {
        let key: Key = ControlKey::from_static("titleColor")
            .selected()
            .highlighted()
            .disabled()
            .into();
        assert_eq!(key.as_str(), "titleColor:selected:highlighted:disabled");
        assert_eq!(key.base_name(), "titleColor");
        assert_eq!(
            key.resolved_states(),
            ControlState::SELECTED | ControlState::HIGHLIGHTED | ControlState::DISABLED
        );
        assert!(!key.resolved_states().contains(ControlState::NORMAL));
    }

    #[test]
    fn explicit_normal_is_kept_alongside_others() {
        let key: Key = ControlKey::from_static("image").normal().selected().into();
        assert_eq!(key.resolved_states(), ControlState::NORMAL | ControlState::SELECTED);
    }

    #[test]
    fn resolved_states_iterate_in_fixed_order() {
        let key = Key::from("titleColor:application:selected:normal:focused");
        let order: Vec<ControlState> = key.resolved_states().iter().collect();
        assert_eq!(
            order,
            vec![
                ControlState::NORMAL,
                ControlState::FOCUSED,
                ControlState::SELECTED,
                ControlState::APPLICATION,
            ]
        );
    }

    #[test]
    fn unknown_modifiers_fall_back_to_normal() {
        let key = Key::from("titleColor:pressed");
        assert!(key.is_modified());
        assert_eq!(key.modifiers().count(), 0);
        assert_eq!(key.resolved_states(), ControlState::NORMAL);
    }

    #[test]
    fn modifiers_only_read_from_the_last_segment() {
        let key = Key::from("button1.titleColor:selected");
        assert_eq!(key.path_to_parent(), "button1");
        assert_eq!(key.base_name(), "titleColor");
        assert!(key.has_modifier(Modifier::Selected));
        assert!(!key.has_modifier(Modifier::Disabled));
    }
}
