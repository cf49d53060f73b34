//! Declarative page markup — which controls exist, and their defaults.
//!
//! Every section is optional. An omitted control is simply absent from the
//! page, and whatever behavior depends on it stays unbound.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ids, Checkbox, Element, Page, RangeInput, TextNode};

#[derive(Error, Debug)]
pub enum MarkupError {
    #[error("invalid page markup: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("range control {id}: min {min} exceeds max {max}")]
    InvalidRange { id: String, min: i64, max: i64 },
}

/// TOML-loadable description of the catalog page's controls.
///
/// A section that is absent from the markup is absent from the page; an
/// empty markup describes an empty page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMarkup {
    pub price_range: Option<RangeMarkup>,
    pub price_value: Option<TextMarkup>,
    pub flash: Option<CheckboxMarkup>,
    pub all: Option<CheckboxMarkup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeMarkup {
    pub min: i64,
    pub max: i64,
    pub value: i64,
    pub step: i64,
}

impl Default for RangeMarkup {
    fn default() -> Self {
        Self {
            min: 0,
            max: 1000,
            value: 500,
            step: 10,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextMarkup {
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckboxMarkup {
    pub checked: bool,
}

impl Default for PageMarkup {
    /// The full page: slider, price label, and a consistent checkbox pair
    /// with "all products" preselected.
    fn default() -> Self {
        Self {
            price_range: Some(RangeMarkup::default()),
            price_value: Some(TextMarkup::default()),
            flash: Some(CheckboxMarkup { checked: false }),
            all: Some(CheckboxMarkup { checked: true }),
        }
    }
}

impl PageMarkup {
    /// Parse a markup description, rejecting ranges with inverted bounds.
    pub fn from_toml_str(s: &str) -> Result<Self, MarkupError> {
        let markup: PageMarkup = toml::from_str(s)?;
        if let Some(range) = &markup.price_range {
            if range.min > range.max {
                return Err(MarkupError::InvalidRange {
                    id: ids::PRICE_RANGE.to_string(),
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(markup)
    }

    /// Build the element tree this markup describes.
    pub fn to_page(&self) -> Page {
        let mut page = Page::new();
        if let Some(range) = &self.price_range {
            page.insert(
                ids::PRICE_RANGE,
                Element::Range(RangeInput::new(range.value, range.min, range.max, range.step)),
            );
        }
        if let Some(text) = &self.price_value {
            page.insert(ids::PRICE_VALUE, Element::Text(TextNode::new(&text.text)));
        }
        if let Some(flash) = &self.flash {
            page.insert(ids::FLASH, Element::Checkbox(Checkbox::new(flash.checked)));
        }
        if let Some(all) = &self.all {
            page.insert(ids::ALL, Element::Checkbox(Checkbox::new(all.checked)));
        }
        page
    }
}
