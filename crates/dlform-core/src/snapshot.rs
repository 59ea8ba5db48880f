//! Serializable readout of the page, used for scenario output.

use std::fmt;

use anyhow::Result;
use serde::Serialize;

use crate::dom::Element;
use crate::page::Page;

#[derive(Debug, Serialize)]
pub struct PageSnapshot {
    pub elements: Vec<ElementSnapshot>,
}

#[derive(Debug, Serialize)]
pub struct ElementSnapshot {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
    pub disabled: bool,
    pub focused: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementSnapshot>,
}

impl PageSnapshot {
    pub fn capture(page: &Page) -> Self {
        Self {
            elements: page.roots().iter().map(ElementSnapshot::capture).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl ElementSnapshot {
    fn capture(el: &Element) -> Self {
        let style = el.style();
        Self {
            tag: el.tag(),
            id: el.id(),
            classes: el.classes(),
            text: el.own_text(),
            value: el.value(),
            disabled: el.is_disabled(),
            focused: el.is_focused(),
            opacity: style.opacity,
            display: style.display,
            transition: style.transition,
            children: el.child_elements().iter().map(Self::capture).collect(),
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.tag, indent = depth * 2)?;
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        if !self.text.is_empty() {
            write!(f, " text={:?}", self.text)?;
        }
        if !self.value.is_empty() {
            write!(f, " value={:?}", self.value)?;
        }
        if self.disabled {
            write!(f, " [disabled]")?;
        }
        if self.focused {
            write!(f, " [focused]")?;
        }
        if let Some(opacity) = &self.opacity {
            write!(f, " opacity={opacity}")?;
        }
        if let Some(display) = &self.display {
            write!(f, " display={display}")?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.render(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for PageSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for el in &self.elements {
            el.render(f, 0)?;
        }
        Ok(())
    }
}
