//! Page controller: wires behaviors to page elements and routes events.
//!
//! The explicit initialization entry point standing in for a page-load
//! listener: each behavior is constructed once, at attach time, only when
//! its elements are present. Event routing never re-checks the page.

use crate::behavior::{self, OptionsToggle, SubmissionGuard, UrlAutofill};
use crate::clipboard::Clipboard;
use crate::page::Page;
use crate::timer::TimerHandle;

/// Well-known element hooks on the download page.
pub const TOGGLE_CONTROL_ID: &str = "toggle-options";
pub const OPTIONS_PANEL_ID: &str = "options-content";
pub const DOWNLOAD_BUTTON_CLASS: &str = "download-btn";
pub const ALERT_CLASS: &str = "alert";
pub const URL_INPUT_ID: &str = "url";

/// A page event routed to the attached behaviors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Activation click on an element, by id. The default action of the
    /// clicked element is consumed; only the behavior runs.
    Click { id: String },
    /// Submit of the page's form. The submission itself proceeds
    /// normally; only the busy state is applied here.
    Submit,
    /// Focus landing on an element, by id.
    Focus { id: String },
}

pub struct PageController<C: Clipboard> {
    toggle: Option<OptionsToggle>,
    guard: Option<SubmissionGuard>,
    autofill: Option<UrlAutofill<C>>,
    alert_timers: Vec<TimerHandle>,
}

impl<C: Clipboard> PageController<C> {
    /// Wires up every behavior whose elements are present, schedules the
    /// alert dismissal timers, and gives the URL input its initial focus
    /// (which runs the autofill handler once, clipboard prompt and all).
    pub async fn attach(page: &Page, clipboard: C) -> Self {
        let toggle = match (page.by_id(TOGGLE_CONTROL_ID), page.by_id(OPTIONS_PANEL_ID)) {
            (Some(control), Some(panel)) => Some(OptionsToggle::new(control, panel)),
            _ => None,
        };
        let guard = match (page.first_form(), page.by_class_first(DOWNLOAD_BUTTON_CLASS)) {
            (Some(_form), Some(button)) => Some(SubmissionGuard::new(button)),
            _ => None,
        };
        let alert_timers = behavior::schedule_dismissal(&page.by_class(ALERT_CLASS));
        let autofill = page
            .by_id(URL_INPUT_ID)
            .map(|input| UrlAutofill::new(input, clipboard));

        let controller = Self {
            toggle,
            guard,
            autofill,
            alert_timers,
        };
        if let Some(autofill) = &controller.autofill {
            autofill.on_focus().await;
        }
        tracing::info!(
            toggle = controller.toggle.is_some(),
            submit_guard = controller.guard.is_some(),
            autofill = controller.autofill.is_some(),
            alerts = controller.alert_timers.len(),
            "page behaviors attached"
        );
        controller
    }

    /// Routes one event. Events for absent behaviors or other targets
    /// are ignored.
    pub async fn dispatch(&self, event: Event) {
        match event {
            Event::Click { id } => {
                if let Some(toggle) = &self.toggle {
                    if toggle.controls(&id) {
                        toggle.activate();
                    }
                }
            }
            Event::Submit => {
                if let Some(guard) = &self.guard {
                    guard.engage();
                }
            }
            Event::Focus { id } => {
                if let Some(autofill) = &self.autofill {
                    if autofill.fills(&id) {
                        autofill.on_focus().await;
                    }
                }
            }
        }
    }

    /// Cancels outstanding alert timers. The other behaviors hold no
    /// resources and need no teardown.
    pub fn detach(&mut self) {
        for handle in self.alert_timers.drain(..) {
            handle.cancel();
        }
        tracing::info!("page behaviors detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ScriptClipboard;
    use crate::dom::Element;

    fn full_page() -> Page {
        let icon = Element::new("i").with_class("fas").with_class("fa-chevron-down");
        let toggle = Element::new("a")
            .with_id(TOGGLE_CONTROL_ID)
            .with_text("Advanced Options ")
            .with_child(icon);
        let panel = Element::new("div").with_id(OPTIONS_PANEL_ID);
        let input = Element::new("input").with_id(URL_INPUT_ID);
        let button = Element::new("button")
            .with_class(DOWNLOAD_BUTTON_CLASS)
            .with_text("Download");
        let form = Element::new("form").with_child(input).with_child(button);
        let alert = Element::new("div").with_class(ALERT_CLASS).with_text("done");
        Page::new(vec![alert, toggle, panel, form])
    }

    #[tokio::test(start_paused = true)]
    async fn attach_focuses_and_autofills_url_input() {
        let page = full_page();
        let controller =
            PageController::attach(&page, ScriptClipboard::Text("https://example.com/f".into()))
                .await;

        let input = page.by_id(URL_INPUT_ID).unwrap();
        assert!(input.is_focused());
        assert_eq!(input.value(), "https://example.com/f");
        drop(controller);
    }

    #[tokio::test(start_paused = true)]
    async fn click_routes_only_to_toggle_control() {
        let page = full_page();
        let controller = PageController::attach(&page, ScriptClipboard::Empty).await;

        controller.dispatch(Event::Click { id: "elsewhere".into() }).await;
        assert!(!page.by_id(OPTIONS_PANEL_ID).unwrap().has_class("show"));

        controller.dispatch(Event::Click { id: TOGGLE_CONTROL_ID.into() }).await;
        assert!(page.by_id(OPTIONS_PANEL_ID).unwrap().has_class("show"));
    }

    #[tokio::test(start_paused = true)]
    async fn submit_engages_guard_once_and_for_all() {
        let page = full_page();
        let controller = PageController::attach(&page, ScriptClipboard::Empty).await;

        controller.dispatch(Event::Submit).await;
        controller.dispatch(Event::Submit).await;

        let button = page.by_class_first(DOWNLOAD_BUTTON_CLASS).unwrap();
        assert!(button.is_disabled());
        assert!(button.text_content().contains("Downloading..."));
    }

    #[tokio::test(start_paused = true)]
    async fn missing_elements_disable_behaviors_quietly() {
        let page = Page::new(vec![Element::new("div").with_text("bare page")]);
        let mut controller = PageController::attach(&page, ScriptClipboard::Denied).await;

        assert!(controller.toggle.is_none());
        assert!(controller.guard.is_none());
        assert!(controller.autofill.is_none());
        assert!(controller.alert_timers.is_empty());

        // Dispatching against absent behaviors is a no-op, not a panic.
        controller.dispatch(Event::Click { id: TOGGLE_CONTROL_ID.into() }).await;
        controller.dispatch(Event::Submit).await;
        controller.dispatch(Event::Focus { id: URL_INPUT_ID.into() }).await;
        controller.detach();
    }

    #[tokio::test(start_paused = true)]
    async fn detach_cancels_pending_alert_timers() {
        let page = full_page();
        let mut controller = PageController::attach(&page, ScriptClipboard::Empty).await;
        controller.detach();

        tokio::time::sleep(std::time::Duration::from_millis(6000)).await;
        let alert = &page.by_class(ALERT_CLASS)[0];
        assert_eq!(alert.style().opacity, None);
        assert_eq!(alert.style().display, None);
    }
}
