//! Clipboard autofill for the URL input.

use crate::clipboard::{Clipboard, ClipboardError};
use crate::dom::Element;
use crate::urlcheck::is_valid_url;

/// Focus handler for the URL input: reads the clipboard and fills the
/// field when it is empty and the clipboard holds a valid URL. Runs on
/// every focus; never overwrites a populated field.
pub struct UrlAutofill<C: Clipboard> {
    input: Element,
    clipboard: C,
}

impl<C: Clipboard> UrlAutofill<C> {
    pub fn new(input: Element, clipboard: C) -> Self {
        Self { input, clipboard }
    }

    /// True when `id` names the autofill input.
    pub fn fills(&self, id: &str) -> bool {
        self.input.id().as_deref() == Some(id)
    }

    pub async fn on_focus(&self) {
        self.input.focus();
        let read = self.clipboard.read_text().await;
        if let Some(text) = autofill_value(read, &self.input.value()) {
            self.input.set_value(&text);
        }
    }
}

/// Decides what a focus event writes into the input: Some only when the
/// read succeeded with non-empty text, the field is currently empty, and
/// the text is a valid URL. A failed read is a non-event, logged for
/// local diagnostics only.
pub fn autofill_value(
    read: Result<String, ClipboardError>,
    current: &str,
) -> Option<String> {
    match read {
        Ok(text) => {
            if !text.is_empty() && current.is_empty() && is_valid_url(&text) {
                Some(text)
            } else {
                None
            }
        }
        Err(err) => {
            tracing::debug!("clipboard read failed: {err}");
            None
        }
    }
}
