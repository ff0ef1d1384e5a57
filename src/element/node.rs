//! Element: a generic display container with styles, classes, and children.

use serde::{Deserialize, Serialize};

use crate::style::StyleMap;

/// Classes the frontend stamps on every generic container when it is
/// created: the container marker plus the default vertical-stack layout.
pub const DEFAULT_CONTAINER_CLASSES: [&str; 2] = ["widget-container", "vbox"];

/// An ordered, duplicate-free list of CSS class names.
///
/// `add` is idempotent, which keeps display hooks safe to run again on
/// redisplay.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassList {
    names: Vec<String>,
}

impl ClassList {
    /// Create an empty class list.
    pub const fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Add a class name. Already-present names are left alone.
    pub fn add(&mut self, name: &str) {
        if !self.contains(name) {
            self.names.push(name.to_owned());
        }
    }

    /// Remove a class name if present.
    pub fn remove(&mut self, name: &str) {
        self.names.retain(|n| n != name);
    }

    /// Check whether a class name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Number of class names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over class names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// A generic display container: inline styles, CSS classes, and an ordered
/// list of child elements.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    style: StyleMap,
    classes: ClassList,
    children: Vec<Element>,
}

impl Element {
    /// Create an empty element with no classes.
    pub const fn new() -> Self {
        Self {
            style: StyleMap::new(),
            classes: ClassList::new(),
            children: Vec::new(),
        }
    }

    /// Create a generic container carrying the frontend's default classes.
    pub fn container() -> Self {
        let mut element = Self::new();
        for class in DEFAULT_CONTAINER_CLASSES {
            element.classes.add(class);
        }
        element
    }

    /// Inline styles of this element.
    pub const fn style(&self) -> &StyleMap {
        &self.style
    }

    /// Mutable inline styles of this element.
    pub fn style_mut(&mut self) -> &mut StyleMap {
        &mut self.style
    }

    /// CSS classes of this element.
    pub const fn classes(&self) -> &ClassList {
        &self.classes
    }

    /// Mutable CSS classes of this element.
    pub fn classes_mut(&mut self) -> &mut ClassList {
        &mut self.classes
    }

    /// Ordered child elements.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Mutable access to the child elements.
    pub fn children_mut(&mut self) -> &mut Vec<Element> {
        &mut self.children
    }

    /// Append a child element.
    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_add_is_idempotent() {
        let mut classes = ClassList::new();
        classes.add("row-fluid");
        classes.add("row-fluid");

        assert_eq!(classes.len(), 1);
        assert!(classes.contains("row-fluid"));
    }

    #[test]
    fn test_class_list_remove() {
        let mut classes = ClassList::new();
        classes.add("vbox");
        classes.add("span3");
        classes.remove("vbox");

        assert!(!classes.contains("vbox"));
        assert_eq!(classes.iter().collect::<Vec<_>>(), vec!["span3"]);

        // Removing an absent class is a no-op.
        classes.remove("vbox");
        assert_eq!(classes.len(), 1);
    }

    #[test]
    fn test_container_default_classes() {
        let container = Element::container();
        assert!(container.classes().contains("widget-container"));
        assert!(container.classes().contains("vbox"));
        assert!(container.children().is_empty());
        assert!(container.style().is_empty());
    }

    #[test]
    fn test_children_are_ordered() {
        let mut parent = Element::container();
        let mut first = Element::new();
        first.classes_mut().add("first");
        parent.push_child(first);
        parent.push_child(Element::new());

        assert_eq!(parent.children().len(), 2);
        assert!(parent.children()[0].classes().contains("first"));
    }

    #[test]
    fn test_element_state_round_trips_as_json() {
        let mut element = Element::container();
        element.style_mut().set("width", "100%");
        element.push_child(Element::new());

        let json = serde_json::to_string(&element).unwrap();
        let back: Element = serde_json::from_str(&json).unwrap();
        assert_eq!(back, element);
    }
}
