//! Submit-button busy state.

use crate::dom::Element;

/// Busy label shown next to the spinner once a submit is underway.
pub const BUSY_TEXT: &str = " Downloading...";

const SPINNER_CLASSES: [&str; 3] = ["fas", "fa-spinner", "fa-spin"];

/// One-way busy latch for the download button: the first submit swaps in
/// a spinner and disables the control. Nothing restores it; the page is
/// expected to navigate away and reinitialize.
pub struct SubmissionGuard {
    button: Element,
}

impl SubmissionGuard {
    pub fn new(button: Element) -> Self {
        Self { button }
    }

    /// Replaces the button's content with a spinner glyph plus busy text
    /// and disables it.
    pub fn engage(&self) {
        let spinner = Element::new("i");
        for class in SPINNER_CLASSES {
            spinner.add_class(class);
        }
        self.button.set_text("");
        self.button.append_child(spinner);
        self.button.append_text(BUSY_TEXT);
        self.button.set_disabled(true);
    }
}
