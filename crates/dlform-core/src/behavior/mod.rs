//! The four page behaviors. Each is independent, shares no state with the
//! others, and is attached only when its elements exist on the page.

mod alerts;
mod autofill;
mod submit;
mod toggle;

pub use alerts::{schedule_dismissal, DISMISS_DELAY, FADE_DURATION};
pub use autofill::{autofill_value, UrlAutofill};
pub use submit::{SubmissionGuard, BUSY_TEXT};
pub use toggle::{OptionsToggle, SHOW_CLASS};
