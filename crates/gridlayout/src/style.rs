//! Inline style storage.
//!
//! Components never hold CSS state themselves; every property lives in a
//! [`Style`] map attached to an element. [`InlineStyle`] is the default map.
//! Anything else implementing [`Style`] (a map that forwards to a renderer,
//! a journal for tests) can be attached with
//! [`Element::with_style_map`](crate::Element::with_style_map).

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;

/// A key/value store of CSS properties.
///
/// Only point reads and writes are required. `to_css_text` is used when
/// rendering an element and may return an empty string for maps that cannot
/// be enumerated.
pub trait Style: fmt::Debug {
    fn get(&self, name: &str) -> Option<String>;

    fn set(&mut self, name: &str, value: &str);

    fn remove(&mut self, name: &str);

    /// Serialize as the contents of a `style` attribute.
    fn to_css_text(&self) -> String;

    fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set `name` to `value`, or remove it when `value` is `None`.
    fn set_or_remove(&mut self, name: &str, value: Option<&str>) {
        match value {
            Some(value) => self.set(name, value),
            None => self.remove(name),
        }
    }
}

/// Insertion-ordered inline style.
///
/// Property names are normalised to kebab-case, so `backgroundColor` and
/// `background-color` address the same property. Custom properties
/// (`--name`) are stored as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    properties: IndexMap<String, String>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Properties in the order they were first set.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl Style for InlineStyle {
    fn get(&self, name: &str) -> Option<String> {
        self.properties.get(normalize_name(name).as_ref()).cloned()
    }

    fn set(&mut self, name: &str, value: &str) {
        let name = normalize_name(name);
        match self.properties.get_mut(name.as_ref()) {
            Some(existing) => *existing = value.to_string(),
            None => {
                self.properties.insert(name.into_owned(), value.to_string());
            }
        }
    }

    fn remove(&mut self, name: &str) {
        self.properties.shift_remove(normalize_name(name).as_ref());
    }

    fn to_css_text(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Convert a camelCase property name to kebab-case.
pub fn normalize_name(name: &str) -> Cow<'_, str> {
    if name.starts_with("--") || !name.chars().any(|c| c.is_ascii_uppercase()) {
        return Cow::Borrowed(name);
    }

    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}
