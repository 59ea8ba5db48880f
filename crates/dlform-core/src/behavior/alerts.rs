//! Alert auto-dismiss: fade out after a fixed delay, then hide.

use std::time::Duration;

use crate::dom::Element;
use crate::timer::{self, TimerHandle};

/// How long an alert stays fully visible.
pub const DISMISS_DELAY: Duration = Duration::from_millis(5000);
/// Fade-out length; the hide step runs this long after the fade starts.
pub const FADE_DURATION: Duration = Duration::from_millis(500);

const FADE_TRANSITION: &str = "opacity 0.5s ease";

/// Schedules every alert for independent dismissal. Each handle cancels
/// both phases of its own alert and nothing else.
pub fn schedule_dismissal(alerts: &[Element]) -> Vec<TimerHandle> {
    alerts.iter().cloned().map(schedule_one).collect()
}

fn schedule_one(alert: Element) -> TimerHandle {
    let fading = alert.clone();
    timer::schedule_chained(
        DISMISS_DELAY,
        move || {
            fading.set_opacity("0");
            fading.set_transition(FADE_TRANSITION);
        },
        FADE_DURATION,
        move || alert.set_display("none"),
    )
}
