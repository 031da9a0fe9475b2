//! Component capability traits.
//!
//! Components are thin wrappers over an [`Element`]. These traits describe
//! what a component can do with its element:
//!
//! - [`HasElement`]: resolve a handle to the element it refers to
//! - [`Component`]: own a root element
//! - [`HasOrderedComponents`]: manage an ordered list of children
//! - [`HasSize`]: width and height
//! - [`ThemableLayout`]: margin/padding/spacing toggles and wrapping
//! - [`HasThemeVariant`]: typed theme variants

use gridcss::GridLayoutVariant;
use gridcss::properties::{HEIGHT, WIDTH};

use crate::element::{Element, WeakElement};
use crate::error::{LayoutError, Result};

/// Anything that can be resolved to an element.
///
/// Resolution fails (returns `None`) for handles whose element no longer
/// exists. Operations that need the element report that as
/// [`LayoutError::MissingElement`].
pub trait HasElement {
    fn element(&self) -> Option<Element>;
}

impl HasElement for Element {
    fn element(&self) -> Option<Element> {
        Some(self.clone())
    }
}

impl HasElement for WeakElement {
    fn element(&self) -> Option<Element> {
        self.upgrade()
    }
}

impl<T: HasElement + ?Sized> HasElement for &T {
    fn element(&self) -> Option<Element> {
        (**self).element()
    }
}

/// Resolve `component` or fail with [`LayoutError::MissingElement`].
pub(crate) fn resolve(component: &(impl HasElement + ?Sized)) -> Result<Element> {
    component
        .element()
        .ok_or(LayoutError::MissingElement("component"))
}

/// A component with a root element.
pub trait Component {
    fn root_element(&self) -> &Element;
}

impl Component for Element {
    fn root_element(&self) -> &Element {
        self
    }
}

/// A component whose children keep their insertion order.
pub trait HasOrderedComponents: Component {
    /// Append every component, in order.
    ///
    /// All components are resolved and checked before any is added, so a
    /// missing one or an ancestor of this component leaves the children
    /// untouched.
    fn add(&self, components: &[&dyn HasElement]) -> Result<()> {
        let elements = components
            .iter()
            .map(|c| resolve(*c))
            .collect::<Result<Vec<_>>>()?;
        for element in &elements {
            check_insertable(self.root_element(), element)?;
        }
        for element in &elements {
            self.root_element().append_child(element)?;
        }
        Ok(())
    }

    fn add_at_index(&self, index: usize, component: &dyn HasElement) -> Result<()> {
        let element = resolve(component)?;
        self.root_element().insert_child(index, &element)
    }

    fn add_as_first(&self, component: &dyn HasElement) -> Result<()> {
        self.add_at_index(0, component)
    }

    /// Remove the given components. Components that are not children are
    /// ignored.
    fn remove(&self, components: &[&dyn HasElement]) -> Result<()> {
        let elements = components
            .iter()
            .map(|c| resolve(*c))
            .collect::<Result<Vec<_>>>()?;
        for element in &elements {
            if !self.root_element().remove_child(element) {
                log::debug!("remove: {element:?} is not a child, skipping");
            }
        }
        Ok(())
    }

    fn remove_all(&self) {
        self.root_element().remove_all_children();
    }

    /// Put `new` where `old` is. If `old` is not a child, `new` is appended.
    fn replace(&self, old: &dyn HasElement, new: &dyn HasElement) -> Result<()> {
        let old = resolve(old)?;
        let new = resolve(new)?;
        if old == new {
            return Ok(());
        }

        let root = self.root_element();
        check_insertable(root, &new)?;
        match root.index_of_child(&old) {
            Some(index) => {
                root.remove_child(&old);
                // Taking `new` out of an earlier slot shifts the target left.
                let index = match root.index_of_child(&new) {
                    Some(current) if current < index => index - 1,
                    _ => index,
                };
                root.insert_child(index, &new)
            }
            None => root.append_child(&new),
        }
    }

    fn index_of(&self, component: &dyn HasElement) -> Option<usize> {
        let element = component.element()?;
        self.root_element().index_of_child(&element)
    }

    fn component_at(&self, index: usize) -> Option<Element> {
        self.root_element().child(index)
    }

    fn component_count(&self) -> usize {
        self.root_element().child_count()
    }
}

impl HasOrderedComponents for Element {}

/// A component with a settable width and height.
pub trait HasSize: Component {
    fn set_width(&self, width: Option<&str>) {
        set_or_remove(self.root_element(), WIDTH, width);
    }

    fn width(&self) -> Option<String> {
        self.root_element().style(WIDTH)
    }

    fn set_height(&self, height: Option<&str>) {
        set_or_remove(self.root_element(), HEIGHT, height);
    }

    fn height(&self) -> Option<String> {
        self.root_element().style(HEIGHT)
    }

    fn set_size_full(&self) {
        self.set_width(Some("100%"));
        self.set_height(Some("100%"));
    }

    fn set_size_undefined(&self) {
        self.set_width(None);
        self.set_height(None);
    }
}

impl HasSize for Element {}

/// Layout-level theme toggles.
pub trait ThemableLayout: Component {
    fn set_margin(&self, margin: bool);

    fn is_margin(&self) -> bool;

    fn set_padding(&self, padding: bool);

    fn is_padding(&self) -> bool;

    fn set_spacing(&self, spacing: bool);

    fn is_spacing(&self) -> bool;

    fn set_wrap(&self, wrap: bool) -> Result<()>;

    fn is_wrap(&self) -> bool;
}

/// A theme variant with a theme name.
pub trait ThemeVariant: Copy {
    fn variant_name(&self) -> &'static str;
}

impl ThemeVariant for GridLayoutVariant {
    fn variant_name(&self) -> &'static str {
        GridLayoutVariant::variant_name(self)
    }
}

/// A component that accepts typed theme variants.
pub trait HasThemeVariant<V: ThemeVariant>: Component {
    fn add_theme_variants(&self, variants: &[V]) {
        for variant in variants {
            self.root_element().add_theme_name(variant.variant_name());
        }
    }

    fn remove_theme_variants(&self, variants: &[V]) {
        for variant in variants {
            self.root_element().remove_theme_name(variant.variant_name());
        }
    }

    fn theme_names(&self) -> Vec<String> {
        self.root_element().theme_names()
    }
}

/// Fail with [`LayoutError::InvalidHierarchy`] if `child` is `parent` or one
/// of its ancestors.
fn check_insertable(parent: &Element, child: &Element) -> Result<()> {
    if child.is_same_or_ancestor_of(parent) {
        return Err(LayoutError::InvalidHierarchy);
    }
    Ok(())
}

pub(crate) fn set_or_remove(element: &Element, name: &str, value: Option<&str>) {
    element.update_style(|style| style.set_or_remove(name, value));
}
