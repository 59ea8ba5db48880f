//! Clipboard capability: an async plain-text read that may be refused.

use std::future::Future;

use thiserror::Error;

/// Why a clipboard read yielded no text. An empty clipboard is a
/// successful read of `""`, not an error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard permission denied")]
    Denied,
    #[error("clipboard unavailable on this platform")]
    Unavailable,
    #[error("clipboard holds no plain-text payload")]
    NonText,
}

/// Asynchronous plain-text clipboard read. The future may stay pending
/// while the platform resolves a permission prompt; callers treat every
/// failure as a non-event.
pub trait Clipboard {
    fn read_text(&self) -> impl Future<Output = Result<String, ClipboardError>> + Send;
}

/// Scripted clipboard for tests and scenario replay: every read yields
/// the same configured outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptClipboard {
    Text(String),
    Empty,
    Denied,
    Unavailable,
    NonText,
}

impl Clipboard for ScriptClipboard {
    fn read_text(&self) -> impl Future<Output = Result<String, ClipboardError>> + Send {
        let outcome = match self {
            ScriptClipboard::Text(text) => Ok(text.clone()),
            ScriptClipboard::Empty => Ok(String::new()),
            ScriptClipboard::Denied => Err(ClipboardError::Denied),
            ScriptClipboard::Unavailable => Err(ClipboardError::Unavailable),
            ScriptClipboard::NonText => Err(ClipboardError::NonText),
        };
        async move { outcome }
    }
}
