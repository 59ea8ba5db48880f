//! Declarative page descriptions and event scripts, loaded from TOML.
//!
//! A scenario is a replayable page session: which elements the page has,
//! what the clipboard holds, and the ordered events to replay.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::clipboard::ScriptClipboard;
use crate::dom::Element;
use crate::page::Page;

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub page: PageSpec,
    #[serde(default)]
    pub clipboard: ClipboardSpec,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Scenario> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        let scenario: Scenario = toml::from_str(&data)
            .with_context(|| format!("parsing scenario {}", path.display()))?;
        Ok(scenario)
    }
}

/// Element tree of the page.
#[derive(Debug, Deserialize)]
pub struct PageSpec {
    #[serde(default)]
    pub elements: Vec<ElementSpec>,
}

impl PageSpec {
    pub fn build(&self) -> Page {
        Page::new(self.elements.iter().map(ElementSpec::build).collect())
    }
}

#[derive(Debug, Deserialize)]
pub struct ElementSpec {
    pub tag: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    fn build(&self) -> Element {
        let mut el = Element::new(&self.tag);
        if let Some(id) = &self.id {
            el = el.with_id(id);
        }
        for class in &self.classes {
            el = el.with_class(class);
        }
        if let Some(text) = &self.text {
            el = el.with_text(text);
        }
        if let Some(value) = &self.value {
            el = el.with_value(value);
        }
        for child in &self.children {
            el = el.with_child(child.build());
        }
        el
    }
}

/// What the session's clipboard yields when read.
#[derive(Debug, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ClipboardSpec {
    #[default]
    Empty,
    Text {
        text: String,
    },
    Denied,
    Unavailable,
}

impl ClipboardSpec {
    pub fn build(&self) -> ScriptClipboard {
        match self {
            ClipboardSpec::Empty => ScriptClipboard::Empty,
            ClipboardSpec::Text { text } => ScriptClipboard::Text(text.clone()),
            ClipboardSpec::Denied => ScriptClipboard::Denied,
            ClipboardSpec::Unavailable => ScriptClipboard::Unavailable,
        }
    }
}

/// One scripted event. `wait` runs the clock so alert timers interleave
/// with the user-driven steps.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Step {
    Click { id: String },
    Submit,
    Focus { id: String },
    Wait { ms: u64 },
}
