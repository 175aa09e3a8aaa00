//! Boundary between the normalizer and the element it wraps.
//!
//! The host framework owns rendering and attachment; the normalizer only
//! needs the handful of primitives below. Capabilities that older engines
//! lack have default implementations reporting "unsupported", so a host
//! only overrides what its element can actually do.

use crate::selection::SelectionRange;

/// A native single-line text element as seen by [`InputNormalizer`](crate::InputNormalizer).
pub trait HostElement {
    // =========================================================================
    // Attributes & live properties
    // =========================================================================

    /// Set a rendered attribute. `None` removes it (boolean `false`).
    fn set_attribute(&mut self, name: &str, value: Option<&str>);

    /// Current value of the live `value` property.
    ///
    /// Returns `None` when there is no live node to query.
    fn node_value(&self) -> Option<String>;

    /// Write the live `value` property. Ignored without a live node.
    fn set_node_value(&mut self, value: &str);

    // =========================================================================
    // Attachment & focus
    // =========================================================================

    /// Whether the element currently has a node in the live document.
    fn is_attached(&self) -> bool;

    fn has_focus(&self) -> bool;

    fn focus(&mut self);

    fn blur(&mut self);

    /// Make native `focus`/`blur` bubble to ancestor listeners.
    fn bubble_focus_events(&mut self) {}

    /// Route the native `change` event through an inline handler so that it
    /// bubbles on engines where it otherwise would not.
    fn install_change_bubbler(&mut self) {}

    // =========================================================================
    // Selection
    // =========================================================================

    /// Range-based selection (`setSelectionRange`).
    ///
    /// Returns `false` if the element does not support it.
    fn set_selection_range(&mut self, _range: SelectionRange) -> bool {
        false
    }

    /// Legacy text-range selection of the whole text.
    ///
    /// Returns `false` if the element does not support it.
    fn select_text_range(&mut self) -> bool {
        false
    }
}

impl<H: HostElement + ?Sized> HostElement for &mut H {
    #[inline]
    fn set_attribute(&mut self, name: &str, value: Option<&str>) {
        (**self).set_attribute(name, value)
    }

    #[inline]
    fn node_value(&self) -> Option<String> {
        (**self).node_value()
    }

    #[inline]
    fn set_node_value(&mut self, value: &str) {
        (**self).set_node_value(value)
    }

    #[inline]
    fn is_attached(&self) -> bool {
        (**self).is_attached()
    }

    #[inline]
    fn has_focus(&self) -> bool {
        (**self).has_focus()
    }

    #[inline]
    fn focus(&mut self) {
        (**self).focus()
    }

    #[inline]
    fn blur(&mut self) {
        (**self).blur()
    }

    #[inline]
    fn bubble_focus_events(&mut self) {
        (**self).bubble_focus_events()
    }

    #[inline]
    fn install_change_bubbler(&mut self) {
        (**self).install_change_bubbler()
    }

    #[inline]
    fn set_selection_range(&mut self, range: SelectionRange) -> bool {
        (**self).set_selection_range(range)
    }

    #[inline]
    fn select_text_range(&mut self) -> bool {
        (**self).select_text_range()
    }
}
