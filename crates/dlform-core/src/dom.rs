//! Minimal element model for the download page.
//!
//! A shared handle over the mutable state the page behaviors touch: class
//! list, child nodes, input value, disabled/focused flags, and three inline
//! style fields. Handles clone cheaply and refer to the same element, like
//! DOM references.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};

/// Inline style fields the behaviors mutate. Everything else is the
/// stylesheet's business and is not modeled.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InlineStyle {
    pub opacity: Option<String>,
    pub display: Option<String>,
    pub transition: Option<String>,
}

/// A child slot: a text run or a nested element.
#[derive(Debug, Clone)]
pub enum Node {
    Text(String),
    Element(Element),
}

#[derive(Debug)]
struct ElementState {
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
    nodes: Vec<Node>,
    value: String,
    disabled: bool,
    focused: bool,
    style: InlineStyle,
}

/// Shared handle to one element. Clones refer to the same element.
#[derive(Debug, Clone)]
pub struct Element {
    state: Arc<Mutex<ElementState>>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            state: Arc::new(Mutex::new(ElementState {
                tag: tag.to_string(),
                id: None,
                classes: BTreeSet::new(),
                nodes: Vec::new(),
                value: String::new(),
                disabled: false,
                focused: false,
                style: InlineStyle::default(),
            })),
        }
    }

    pub fn with_id(self, id: &str) -> Self {
        self.lock().id = Some(id.to_string());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Appends a text run.
    pub fn with_text(self, text: &str) -> Self {
        self.append_text(text);
        self
    }

    pub fn with_value(self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    pub fn with_child(self, child: Element) -> Self {
        self.append_child(child);
        self
    }

    fn lock(&self) -> MutexGuard<'_, ElementState> {
        self.state.lock().unwrap()
    }

    /// True when both handles refer to the same element.
    pub fn same_element(&self, other: &Element) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    pub fn tag(&self) -> String {
        self.lock().tag.clone()
    }

    pub fn id(&self) -> Option<String> {
        self.lock().id.clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.lock().classes.contains(class)
    }

    pub fn add_class(&self, class: &str) {
        self.lock().classes.insert(class.to_string());
    }

    pub fn remove_class(&self, class: &str) {
        self.lock().classes.remove(class);
    }

    /// Toggles `class`; returns true when the class is present afterwards.
    pub fn toggle_class(&self, class: &str) -> bool {
        let mut state = self.lock();
        if state.classes.remove(class) {
            false
        } else {
            state.classes.insert(class.to_string());
            true
        }
    }

    pub fn classes(&self) -> Vec<String> {
        self.lock().classes.iter().cloned().collect()
    }

    /// Replaces all children with a single text run (textContent semantics).
    /// An empty string just clears the children.
    pub fn set_text(&self, text: &str) {
        let mut state = self.lock();
        state.nodes.clear();
        if !text.is_empty() {
            state.nodes.push(Node::Text(text.to_string()));
        }
    }

    pub fn append_text(&self, text: &str) {
        self.lock().nodes.push(Node::Text(text.to_string()));
    }

    pub fn append_child(&self, child: Element) {
        self.lock().nodes.push(Node::Element(child));
    }

    pub fn nodes(&self) -> Vec<Node> {
        self.lock().nodes.clone()
    }

    /// Direct child elements, in order.
    pub fn child_elements(&self) -> Vec<Element> {
        self.lock()
            .nodes
            .iter()
            .filter_map(|node| match node {
                Node::Element(el) => Some(el.clone()),
                Node::Text(_) => None,
            })
            .collect()
    }

    /// First descendant element with the given tag, depth-first.
    pub fn descendant_by_tag(&self, tag: &str) -> Option<Element> {
        for child in self.child_elements() {
            if child.tag() == tag {
                return Some(child);
            }
            if let Some(found) = child.descendant_by_tag(tag) {
                return Some(found);
            }
        }
        None
    }

    /// Concatenated text of this element and all descendants, in order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in self.nodes() {
            match node {
                Node::Text(text) => out.push_str(&text),
                Node::Element(el) => out.push_str(&el.text_content()),
            }
        }
        out
    }

    /// Text of this element's direct text runs only.
    pub fn own_text(&self) -> String {
        let mut out = String::new();
        for node in self.lock().nodes.iter() {
            if let Node::Text(text) = node {
                out.push_str(text);
            }
        }
        out
    }

    pub fn value(&self) -> String {
        self.lock().value.clone()
    }

    pub fn set_value(&self, value: &str) {
        self.lock().value = value.to_string();
    }

    pub fn is_disabled(&self) -> bool {
        self.lock().disabled
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.lock().disabled = disabled;
    }

    pub fn is_focused(&self) -> bool {
        self.lock().focused
    }

    pub fn focus(&self) {
        self.lock().focused = true;
    }

    pub fn style(&self) -> InlineStyle {
        self.lock().style.clone()
    }

    pub fn set_opacity(&self, opacity: &str) {
        self.lock().style.opacity = Some(opacity.to_string());
    }

    pub fn set_display(&self, display: &str) {
        self.lock().style.display = Some(display.to_string());
    }

    pub fn set_transition(&self, transition: &str) {
        self.lock().style.transition = Some(transition.to_string());
    }
}
