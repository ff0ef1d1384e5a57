//! Cell: the leaf container occupying one grid position.

use serde::Serialize;

use crate::element::Element;
use crate::style::Px;

/// A leaf container that downstream code fills with arbitrary content.
///
/// A cell fills its row vertically; its right, top, and bottom margins are
/// pinned to zero so spacing comes only from the grid's `padding` property,
/// applied as a left margin during relayout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Cell {
    node: Element,
}

impl Cell {
    pub(crate) fn new(background: Option<&str>) -> Self {
        let mut node = Element::container();
        if let Some(color) = background {
            node.style_mut().set("background", color);
        }
        node.style_mut().set("height", "100%");
        node.style_mut().set("margin-right", Px(0));
        node.style_mut().set("margin-top", Px(0));
        node.style_mut().set("margin-bottom", Px(0));
        Self { node }
    }

    /// The cell's underlying element.
    pub const fn element(&self) -> &Element {
        &self.node
    }

    /// Mutable access to the underlying element, for populating content.
    pub fn element_mut(&mut self) -> &mut Element {
        &mut self.node
    }

    /// The cell's background color, if one was assigned.
    pub fn background(&self) -> Option<&str> {
        self.node.style().get("background")
    }
}
