//! Focus-scoped modal dialog.
//!
//! Opening a modal acquires two page-level resources: keyboard focus and the
//! body scroll lock. [`ModalSession`] holds both for as long as the dialog is
//! open and gives them back exactly once, whether the dialog is closed
//! explicitly or the session is simply dropped.
//!
//! The server-rendered pages do not drive this type: they describe dialogs
//! with [`crate::web::views::ModalView`] and close them through links.

use std::fmt;

/// Overflow value applied to the page body while a modal is open.
pub const SCROLL_LOCK: &str = "hidden";

/// The page a modal is mounted in.
///
/// Implemented by whatever owns real focus and layout (a browser bridge, a
/// terminal UI) and by test doubles.
pub trait Document {
    type Element: Clone + PartialEq + fmt::Debug;

    fn active_element(&self) -> Option<Self::Element>;

    fn focus(&mut self, element: &Self::Element);

    /// Focusable descendants of `container`, in tab order.
    fn focusable_within(&self, container: &Self::Element) -> Vec<Self::Element>;

    fn body_overflow(&self) -> Option<String>;

    fn set_body_overflow(&mut self, value: Option<String>);
}

/// Keys the modal reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Tab { shift: bool },
    Other,
}

/// What the modal did with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// `on_close` was invoked.
    Closed,
    /// Focus was moved by the trap; the default action must be suppressed.
    Trapped,
    /// The key is not the modal's business; let the default action run.
    Passthrough,
}

/// An open modal holding focus and the scroll lock.
pub struct ModalSession<'d, D: Document, F: FnMut()> {
    document: &'d mut D,
    dialog: D::Element,
    previous_focus: Option<D::Element>,
    previous_overflow: Option<String>,
    on_close: F,
    released: bool,
}

impl<'d, D: Document, F: FnMut()> ModalSession<'d, D, F> {
    /// Opens `dialog`: remembers the focused element, locks body scroll and
    /// focuses the first focusable element inside the dialog (or the dialog
    /// itself when it has none).
    pub fn open(document: &'d mut D, dialog: D::Element, on_close: F) -> Self {
        let previous_focus = document.active_element();
        let previous_overflow = document.body_overflow();
        document.set_body_overflow(Some(SCROLL_LOCK.to_string()));

        let initial = document
            .focusable_within(&dialog)
            .into_iter()
            .next()
            .unwrap_or_else(|| dialog.clone());
        document.focus(&initial);

        Self {
            document,
            dialog,
            previous_focus,
            previous_overflow,
            on_close,
            released: false,
        }
    }

    pub fn document(&self) -> &D {
        self.document
    }

    /// Mutable access to the page, e.g. for the user clicking inside it.
    pub fn document_mut(&mut self) -> &mut D {
        self.document
    }

    /// Handles a key press while the dialog is open.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Escape => {
                (self.on_close)();
                KeyOutcome::Closed
            }
            Key::Tab { shift } => self.trap_tab(shift),
            Key::Other => KeyOutcome::Passthrough,
        }
    }

    /// A click on the backdrop outside the dialog content.
    pub fn click_overlay(&mut self) {
        (self.on_close)();
    }

    /// Closes the dialog, restoring scroll and focus.
    pub fn close(mut self) {
        self.release();
    }

    fn trap_tab(&mut self, shift: bool) -> KeyOutcome {
        let focusables = self.document.focusable_within(&self.dialog);
        let (Some(first), Some(last)) = (focusables.first(), focusables.last()) else {
            let dialog = self.dialog.clone();
            self.document.focus(&dialog);
            return KeyOutcome::Trapped;
        };

        let active = self.document.active_element();
        let inside = active.as_ref().is_some_and(|a| focusables.contains(a));

        let target = if !inside {
            if shift { last } else { first }
        } else if shift && active.as_ref() == Some(first) {
            last
        } else if !shift && active.as_ref() == Some(last) {
            first
        } else {
            return KeyOutcome::Passthrough;
        };

        let target = target.clone();
        self.document.focus(&target);
        KeyOutcome::Trapped
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        self.document.set_body_overflow(self.previous_overflow.take());
        if let Some(previous) = self.previous_focus.take() {
            self.document.focus(&previous);
        }
    }
}

impl<D: Document, F: FnMut()> Drop for ModalSession<'_, D, F> {
    fn drop(&mut self) {
        self.release();
    }
}
