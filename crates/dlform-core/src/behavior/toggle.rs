//! Advanced-options panel toggle.

use crate::dom::Element;

/// Class whose presence on the panel means expanded.
pub const SHOW_CLASS: &str = "show";

const ICON_EXPANDED: &str = "fa-chevron-up";
const ICON_COLLAPSED: &str = "fa-chevron-down";
const LABEL_EXPANDED: &str = "Hide Advanced Options ";
const LABEL_COLLAPSED: &str = "Advanced Options ";

/// Expand/collapse control for the advanced-options panel. The control's
/// chevron glyph and label always track the panel state.
pub struct OptionsToggle {
    control: Element,
    panel: Element,
}

impl OptionsToggle {
    pub fn new(control: Element, panel: Element) -> Self {
        Self { control, panel }
    }

    /// True when `id` names the toggle control.
    pub fn controls(&self, id: &str) -> bool {
        self.control.id().as_deref() == Some(id)
    }

    pub fn is_expanded(&self) -> bool {
        self.panel.has_class(SHOW_CLASS)
    }

    /// Flips the panel, then rewrites the control's glyph and label. The
    /// glyph is captured before the relabel and re-appended afterwards,
    /// so the same element survives the text rewrite.
    pub fn activate(&self) {
        let shown = self.panel.toggle_class(SHOW_CLASS);
        let icon = self.control.descendant_by_tag("i");
        if let Some(icon) = &icon {
            if shown {
                icon.remove_class(ICON_COLLAPSED);
                icon.add_class(ICON_EXPANDED);
            } else {
                icon.remove_class(ICON_EXPANDED);
                icon.add_class(ICON_COLLAPSED);
            }
        }
        self.control
            .set_text(if shown { LABEL_EXPANDED } else { LABEL_COLLAPSED });
        if let Some(icon) = icon {
            self.control.append_child(icon);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle_fixture() -> (OptionsToggle, Element, Element) {
        let icon = Element::new("i").with_class("fas").with_class(ICON_COLLAPSED);
        let control = Element::new("a")
            .with_id("toggle-options")
            .with_text(LABEL_COLLAPSED)
            .with_child(icon.clone());
        let panel = Element::new("div").with_id("options-content");
        (OptionsToggle::new(control, panel.clone()), panel, icon)
    }

    #[test]
    fn activation_parity_controls_visibility() {
        let (toggle, panel, _) = toggle_fixture();
        for n in 1..=5 {
            toggle.activate();
            assert_eq!(panel.has_class(SHOW_CLASS), n % 2 == 1, "after {n} activations");
        }
    }

    #[test]
    fn icon_and_label_track_panel_state() {
        let (toggle, _, icon) = toggle_fixture();

        toggle.activate();
        assert!(toggle.is_expanded());
        assert!(icon.has_class(ICON_EXPANDED));
        assert!(!icon.has_class(ICON_COLLAPSED));
        assert!(toggle_label(&toggle).starts_with("Hide Advanced Options"));

        toggle.activate();
        assert!(!toggle.is_expanded());
        assert!(icon.has_class(ICON_COLLAPSED));
        assert!(!icon.has_class(ICON_EXPANDED));
        assert!(toggle_label(&toggle).starts_with("Advanced Options"));
    }

    #[test]
    fn glyph_element_survives_relabel() {
        let (toggle, _, icon) = toggle_fixture();
        toggle.activate();
        let children = toggle.control.child_elements();
        assert_eq!(children.len(), 1);
        assert!(children[0].same_element(&icon));
        // Unrelated icon classes are untouched.
        assert!(icon.has_class("fas"));
    }

    #[test]
    fn activation_without_glyph_still_toggles() {
        let control = Element::new("a").with_id("toggle-options").with_text(LABEL_COLLAPSED);
        let panel = Element::new("div");
        let toggle = OptionsToggle::new(control.clone(), panel.clone());
        toggle.activate();
        assert!(panel.has_class(SHOW_CLASS));
        assert_eq!(control.text_content(), LABEL_EXPANDED);
    }

    fn toggle_label(toggle: &OptionsToggle) -> String {
        toggle.control.text_content()
    }
}
