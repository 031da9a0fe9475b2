//! Test utilities for inspecting style writes.
//!
//! [`RecordingStyle`] behaves like [`InlineStyle`] but also appends every
//! `set` and `remove` to a shared [`Journal`], so tests can assert on the
//! order in which a component touches properties, not just the end state.
//!
//! # Example
//!
//! ```rust
//! use gridcss::GridPosition;
//! use gridlayout::GridLayout;
//! use gridlayout::testing::{StyleOp, recording_element};
//!
//! let layout = GridLayout::new();
//! let (child, journal) = recording_element("div");
//! layout.set_position(&child, &GridPosition::at(1, 2)?)?;
//!
//! assert_eq!(journal.ops()[0], StyleOp::Remove("grid-area".into()));
//! # Ok::<(), gridlayout::LayoutError>(())
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::element::Element;
use crate::style::{InlineStyle, Style};

/// One recorded write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleOp {
    Set(String, String),
    Remove(String),
}

/// Shared log of style writes.
#[derive(Debug, Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<StyleOp>>>);

impl Journal {
    pub fn ops(&self) -> Vec<StyleOp> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Names of the properties touched, in order.
    pub fn touched(&self) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .map(|op| match op {
                StyleOp::Set(name, _) | StyleOp::Remove(name) => name.clone(),
            })
            .collect()
    }

    fn push(&self, op: StyleOp) {
        self.0.borrow_mut().push(op);
    }
}

/// An [`InlineStyle`] that journals its writes.
#[derive(Debug, Default)]
pub struct RecordingStyle {
    inner: InlineStyle,
    journal: Journal,
}

impl RecordingStyle {
    pub fn new() -> (Self, Journal) {
        let style = Self::default();
        let journal = style.journal.clone();
        (style, journal)
    }
}

impl Style for RecordingStyle {
    fn get(&self, name: &str) -> Option<String> {
        self.inner.get(name)
    }

    fn set(&mut self, name: &str, value: &str) {
        self.journal
            .push(StyleOp::Set(name.to_string(), value.to_string()));
        self.inner.set(name, value);
    }

    fn remove(&mut self, name: &str) {
        self.journal.push(StyleOp::Remove(name.to_string()));
        self.inner.remove(name);
    }

    fn to_css_text(&self) -> String {
        self.inner.to_css_text()
    }
}

/// An element backed by a [`RecordingStyle`], with its journal.
pub fn recording_element(tag: &str) -> (Element, Journal) {
    let (style, journal) = RecordingStyle::new();
    (Element::with_style_map(tag, Box::new(style)), journal)
}
