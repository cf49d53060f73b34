//! Page element tree — the controller's only boundary.
//!
//! Controls are addressed by stable identifier, exactly as on the page:
//! `priceRange`, `priceValue`, `flash`, `all`. Looking up an absent id, or
//! an id of the wrong kind, returns `None`; nothing here panics.

pub mod markup;

use std::collections::HashMap;

/// Well-known element identifiers.
pub mod ids {
    /// Numeric range input; source of input events.
    pub const PRICE_RANGE: &str = "priceRange";
    /// Text-bearing output element; receives the formatted price string.
    pub const PRICE_VALUE: &str = "priceValue";
    /// Flash-sale filter checkbox.
    pub const FLASH: &str = "flash";
    /// All-products filter checkbox.
    pub const ALL: &str = "all";
}

/// Numeric range control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeInput {
    value: i64,
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

impl RangeInput {
    pub fn new(value: i64, min: i64, max: i64, step: i64) -> Self {
        Self {
            value,
            min,
            max,
            step,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Stores the value as-is. The control applies no clamping or
    /// validation; stepping within `min..=max` belongs to whoever drives it.
    pub fn set_value(&mut self, value: i64) {
        self.value = value;
    }
}

/// Text-bearing output element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextNode {
    text: String,
}

impl TextNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// Two-state checkbox.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checkbox {
    pub checked: bool,
}

impl Checkbox {
    pub fn new(checked: bool) -> Self {
        Self { checked }
    }

    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

/// Any control the page can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Range(RangeInput),
    Text(TextNode),
    Checkbox(Checkbox),
}

/// The page's element tree.
#[derive(Debug, Default)]
pub struct Page {
    elements: HashMap<String, Element>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element under `id`. A repeated id replaces the previous
    /// element, the way reassigning a node under the same identifier would.
    pub fn insert(&mut self, id: impl Into<String>, element: Element) {
        self.elements.insert(id.into(), element);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn range_input(&self, id: &str) -> Option<&RangeInput> {
        match self.elements.get(id) {
            Some(Element::Range(r)) => Some(r),
            _ => None,
        }
    }

    pub fn range_input_mut(&mut self, id: &str) -> Option<&mut RangeInput> {
        match self.elements.get_mut(id) {
            Some(Element::Range(r)) => Some(r),
            _ => None,
        }
    }

    pub fn text_node(&self, id: &str) -> Option<&TextNode> {
        match self.elements.get(id) {
            Some(Element::Text(t)) => Some(t),
            _ => None,
        }
    }

    pub fn text_node_mut(&mut self, id: &str) -> Option<&mut TextNode> {
        match self.elements.get_mut(id) {
            Some(Element::Text(t)) => Some(t),
            _ => None,
        }
    }

    pub fn checkbox(&self, id: &str) -> Option<&Checkbox> {
        match self.elements.get(id) {
            Some(Element::Checkbox(c)) => Some(c),
            _ => None,
        }
    }

    pub fn checkbox_mut(&mut self, id: &str) -> Option<&mut Checkbox> {
        match self.elements.get_mut(id) {
            Some(Element::Checkbox(c)) => Some(c),
            _ => None,
        }
    }
}
