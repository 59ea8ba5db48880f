//! Page registry: document-ordered element lookup.

use crate::dom::Element;

/// The page's element tree. Queries walk the tree in document order
/// (preorder), matching how a browser resolves selectors.
pub struct Page {
    roots: Vec<Element>,
}

impl Page {
    pub fn new(roots: Vec<Element>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[Element] {
        &self.roots
    }

    /// First element with the given id.
    pub fn by_id(&self, id: &str) -> Option<Element> {
        self.walk().into_iter().find(|el| el.id().as_deref() == Some(id))
    }

    /// All elements carrying the given class, in document order.
    pub fn by_class(&self, class: &str) -> Vec<Element> {
        self.walk().into_iter().filter(|el| el.has_class(class)).collect()
    }

    /// First element carrying the given class.
    pub fn by_class_first(&self, class: &str) -> Option<Element> {
        self.walk().into_iter().find(|el| el.has_class(class))
    }

    /// The page's first form, if any.
    pub fn first_form(&self) -> Option<Element> {
        self.walk().into_iter().find(|el| el.tag() == "form")
    }

    fn walk(&self) -> Vec<Element> {
        let mut out = Vec::new();
        let mut stack: Vec<Element> = self.roots.iter().rev().cloned().collect();
        while let Some(el) = stack.pop() {
            out.push(el.clone());
            for child in el.child_elements().into_iter().rev() {
                stack.push(child);
            }
        }
        out
    }
}
