//! Detail overlay state.
//!
//! A page shows at most one selected entry in an overlay. Clicking the
//! overlay background or the close button dismisses it; clicks inside the
//! panel are swallowed.

/// Where a click landed while the overlay is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayClick {
    /// Outside the detail panel
    Background,
    /// The explicit close affordance
    CloseButton,
    /// Anywhere inside the detail panel
    Panel,
}

/// Closed, or open on one item
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection<T> {
    #[default]
    Closed,
    Open(T),
}

impl<T> Selection<T> {
    /// Open on `item`, replacing any current selection.
    pub fn open(&mut self, item: T) {
        *self = Selection::Open(item);
    }

    pub fn close(&mut self) {
        *self = Selection::Closed;
    }

    /// Apply a click on the overlay. Returns whether the overlay closed.
    pub fn click(&mut self, target: OverlayClick) -> bool {
        let closes = self.is_open()
            && matches!(target, OverlayClick::Background | OverlayClick::CloseButton);
        if closes {
            self.close();
        }
        closes
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }

    pub fn current(&self) -> Option<&T> {
        match self {
            Selection::Open(item) => Some(item),
            Selection::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let selection: Selection<u32> = Selection::default();
        assert!(!selection.is_open());
        assert!(selection.current().is_none());
    }

    #[test]
    fn background_and_close_button_close() {
        for target in [OverlayClick::Background, OverlayClick::CloseButton] {
            let mut selection = Selection::Closed;
            selection.open("realm");
            assert!(selection.click(target));
            assert!(!selection.is_open());
        }
    }

    #[test]
    fn panel_click_keeps_overlay_open() {
        let mut selection = Selection::Closed;
        selection.open("realm");
        assert!(!selection.click(OverlayClick::Panel));
        assert_eq!(selection.current(), Some(&"realm"));
    }

    #[test]
    fn opening_another_item_replaces_current() {
        let mut selection = Selection::Closed;
        selection.open("first");
        selection.open("second");
        assert_eq!(selection.current(), Some(&"second"));
    }

    #[test]
    fn reopening_same_item_is_identical() {
        let mut selection = Selection::Closed;
        selection.open(7);
        let first = selection.clone();
        selection.click(OverlayClick::Background);
        selection.open(7);
        assert_eq!(selection, first);
    }

    #[test]
    fn clicks_while_closed_do_nothing() {
        let mut selection: Selection<u8> = Selection::Closed;
        assert!(!selection.click(OverlayClick::Background));
        assert!(!selection.is_open());
    }
}
