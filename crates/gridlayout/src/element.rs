//! Element tree with shared node handles.
//!
//! An [`Element`] is a cheap, clonable handle to a node. Clones refer to the
//! same node, so a component can keep a handle to a child it has added to a
//! layout and later restyle it through the layout.
//!
//! Parents own their children; children point back with a weak link. A
//! [`WeakElement`] can be held by code that must not keep a node alive.
//!
//! Elements are single-threaded (`!Send`); one owner mutates a tree at a time.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::{LayoutError, Result};
use crate::style::{InlineStyle, Style};

struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    theme: Vec<String>,
    text: Option<String>,
    style: Box<dyn Style>,
    children: Vec<Element>,
    parent: Weak<RefCell<Node>>,
}

/// Shared handle to an element node.
#[derive(Clone)]
pub struct Element(Rc<RefCell<Node>>);

/// Non-owning handle to an element node.
#[derive(Clone, Default)]
pub struct WeakElement(Weak<RefCell<Node>>);

impl Element {
    /// Create an element with an empty [`InlineStyle`].
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_style_map(tag, Box::new(InlineStyle::new()))
    }

    /// Create an element backed by the given style map.
    pub fn with_style_map(tag: impl Into<String>, style: Box<dyn Style>) -> Self {
        Self(Rc::new(RefCell::new(Node {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            theme: Vec::new(),
            text: None,
            style,
            children: Vec::new(),
            parent: Weak::new(),
        })))
    }

    /// Shorthand for a `div`.
    pub fn div() -> Self {
        Self::new("div")
    }

    /// Builder-style id setter.
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.set_id(Some(id.into()));
        self
    }

    /// Builder-style text setter.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.set_text(Some(text.into()));
        self
    }

    pub fn tag(&self) -> String {
        self.node().tag.clone()
    }

    pub fn id(&self) -> Option<String> {
        self.node().id.clone()
    }

    pub fn set_id(&self, id: Option<String>) {
        self.node_mut().id = id;
    }

    pub fn text(&self) -> Option<String> {
        self.node().text.clone()
    }

    pub fn set_text(&self, text: Option<String>) {
        self.node_mut().text = text;
    }

    // ==================== Classes ====================

    pub fn add_class(&self, class: &str) {
        let mut node = self.node_mut();
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&self, class: &str) {
        self.node_mut().classes.retain(|c| c != class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.node().classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> Vec<String> {
        self.node().classes.clone()
    }

    // ==================== Theme names ====================

    pub fn add_theme_name(&self, name: &str) {
        let mut node = self.node_mut();
        if !node.theme.iter().any(|t| t == name) {
            node.theme.push(name.to_string());
        }
    }

    pub fn remove_theme_name(&self, name: &str) {
        self.node_mut().theme.retain(|t| t != name);
    }

    pub fn has_theme_name(&self, name: &str) -> bool {
        self.node().theme.iter().any(|t| t == name)
    }

    pub fn theme_names(&self) -> Vec<String> {
        self.node().theme.clone()
    }

    // ==================== Style ====================

    /// Read one style property.
    pub fn style(&self, name: &str) -> Option<String> {
        self.node().style.get(name)
    }

    pub fn set_style(&self, name: &str, value: &str) {
        self.node_mut().style.set(name, value);
    }

    pub fn remove_style(&self, name: &str) {
        self.node_mut().style.remove(name);
    }

    /// Run `f` against the element's style map.
    ///
    /// The node stays borrowed for the duration of `f`; do not touch the
    /// same element from inside it.
    pub fn update_style<R>(&self, f: impl FnOnce(&mut dyn Style) -> R) -> R {
        f(self.node_mut().style.as_mut())
    }

    pub fn css_text(&self) -> String {
        self.node().style.to_css_text()
    }

    // ==================== Tree ====================

    pub fn parent(&self) -> Option<Element> {
        self.node().parent.upgrade().map(Element)
    }

    pub fn children(&self) -> Vec<Element> {
        self.node().children.clone()
    }

    pub fn child_count(&self) -> usize {
        self.node().children.len()
    }

    pub fn child(&self, index: usize) -> Option<Element> {
        self.node().children.get(index).cloned()
    }

    pub fn index_of_child(&self, child: &Element) -> Option<usize> {
        self.node().children.iter().position(|c| c == child)
    }

    pub fn append_child(&self, child: &Element) -> Result<()> {
        let len = self.child_count();
        let index = match self.index_of_child(child) {
            Some(_) => len - 1,
            None => len,
        };
        self.insert_child(index, child)
    }

    /// Insert `child` at `index`, detaching it from any previous parent.
    ///
    /// When `child` is already a child of this element, `index` refers to the
    /// position after it has been taken out.
    pub fn insert_child(&self, index: usize, child: &Element) -> Result<()> {
        if child.is_same_or_ancestor_of(self) {
            return Err(LayoutError::InvalidHierarchy);
        }

        let mut len = self.child_count();
        if self.index_of_child(child).is_some() {
            len -= 1;
        }
        if index > len {
            return Err(LayoutError::IndexOutOfBounds { index, len });
        }

        child.remove_from_parent();
        self.node_mut().children.insert(index, child.clone());
        child.node_mut().parent = Rc::downgrade(&self.0);
        Ok(())
    }

    /// Remove `child`; returns false if it was not a child of this element.
    pub fn remove_child(&self, child: &Element) -> bool {
        let Some(index) = self.index_of_child(child) else {
            return false;
        };
        self.node_mut().children.remove(index);
        child.node_mut().parent = Weak::new();
        true
    }

    pub fn remove_all_children(&self) {
        let children = std::mem::take(&mut self.node_mut().children);
        for child in children {
            child.node_mut().parent = Weak::new();
        }
    }

    pub fn remove_from_parent(&self) {
        if let Some(parent) = self.parent() {
            parent.remove_child(self);
        }
    }

    pub(crate) fn is_same_or_ancestor_of(&self, other: &Element) -> bool {
        let mut current = Some(other.clone());
        while let Some(element) = current {
            if element == *self {
                return true;
            }
            current = element.parent();
        }
        false
    }

    pub fn downgrade(&self) -> WeakElement {
        WeakElement(Rc::downgrade(&self.0))
    }

    pub fn ptr_eq(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    // ==================== Rendering ====================

    /// Serialize this element and its subtree as HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let node = self.node();
        out.push('<');
        out.push_str(&node.tag);

        if let Some(id) = &node.id {
            push_attribute(out, "id", id);
        }
        if !node.classes.is_empty() {
            push_attribute(out, "class", &node.classes.join(" "));
        }
        if !node.theme.is_empty() {
            push_attribute(out, "theme", &node.theme.join(" "));
        }
        let css = node.style.to_css_text();
        if !css.is_empty() {
            push_attribute(out, "style", &css);
        }
        out.push('>');

        if let Some(text) = &node.text {
            out.push_str(&escape(text));
        }
        for child in &node.children {
            child.write_html(out);
        }

        out.push_str("</");
        out.push_str(&node.tag);
        out.push('>');
    }

    fn node(&self) -> Ref<'_, Node> {
        self.0.borrow()
    }

    fn node_mut(&self) -> RefMut<'_, Node> {
        self.0.borrow_mut()
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node();
        f.debug_struct("Element")
            .field("tag", &node.tag)
            .field("id", &node.id)
            .field("children", &node.children.len())
            .finish()
    }
}

impl WeakElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// The element, if it is still alive.
    pub fn upgrade(&self) -> Option<Element> {
        self.0.upgrade().map(Element)
    }
}

impl fmt::Debug for WeakElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WeakElement(alive: {})", self.0.strong_count() > 0)
    }
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}
