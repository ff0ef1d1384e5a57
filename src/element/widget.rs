//! Widget trait: the display lifecycle contract between a widget and the
//! host frontend.
//!
//! The host's display pass is synchronous and can run more than once for
//! the same widget (a notebook may redisplay an existing object), so
//! [`Widget::after_display`] implementations must be idempotent.

use tracing::trace;

use super::node::Element;

/// A composite widget backed by an element subtree.
pub trait Widget {
    /// Root element of the widget's subtree.
    fn root(&self) -> &Element;

    /// Hook invoked after the host's generic container display logic.
    ///
    /// The default does nothing. Widgets override this to adjust classes
    /// once the subtree is attached to the page.
    fn after_display(&mut self) {}
}

/// Run the host display pass for a widget.
///
/// The generic pass presents the element subtree as-is, then the widget's
/// [`Widget::after_display`] hook runs. Both steps complete before this
/// function returns.
pub fn display<W: Widget>(widget: &mut W) {
    trace!(classes = widget.root().classes().len(), "display pass");
    widget.after_display();
}
