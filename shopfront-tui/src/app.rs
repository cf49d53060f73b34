//! Application state — single-owner, main-thread only.
//!
//! Every handler runs to completion on the UI thread; there is no worker
//! and no shared mutable state beyond the page controls themselves.

use std::collections::VecDeque;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use shopfront_core::controller::filter::FilterChoice;
use shopfront_core::controller::{CatalogController, ControlEvent};
use shopfront_core::domain::Product;
use shopfront_core::page::{ids, Page};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panel {
    Catalog,
    Activity,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Catalog => 0,
            Panel::Activity => 1,
            Panel::Help => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Catalog),
            1 => Some(Panel::Activity),
            2 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Catalog => "Catalog",
            Panel::Activity => "Activity",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 3).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 2) % 3).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// One recorded filter selection — the in-app view of the stub boundary's
/// informational records.
#[derive(Debug, Clone)]
pub struct FilterRecord {
    pub timestamp: NaiveDateTime,
    pub choice: FilterChoice,
}

/// Which control on the catalog panel has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFocus {
    PriceSlider,
    FlashBox,
    AllBox,
    Products,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    ProductDetail(usize),
}

/// Top-level application state.
pub struct AppState {
    // The page and its controller
    pub page: Page,
    pub controller: CatalogController,
    pub products: Vec<Product>,

    // Navigation
    pub active_panel: Panel,
    pub focus: CatalogFocus,
    pub product_cursor: usize,
    pub overlay: Overlay,
    pub running: bool,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub filter_history: VecDeque<FilterRecord>,
    pub activity_scroll: usize,

    // Paths
    pub state_path: PathBuf,
}

impl AppState {
    pub fn new(
        page: Page,
        controller: CatalogController,
        products: Vec<Product>,
        state_path: PathBuf,
    ) -> Self {
        let focus = first_focus(&page);
        Self {
            page,
            controller,
            products,
            active_panel: Panel::Catalog,
            focus,
            product_cursor: 0,
            overlay: Overlay::None,
            running: true,
            status_message: None,
            filter_history: VecDeque::with_capacity(50),
            activity_scroll: 0,
            state_path,
        }
    }

    /// Deliver one control event to the controller and record any resolved
    /// filter selection.
    pub fn dispatch_event(&mut self, event: ControlEvent) {
        if let Some(choice) = self.controller.dispatch(&mut self.page, &event) {
            self.record_filter(choice);
        }
    }

    /// Push a filter record, capping history at 50.
    pub fn record_filter(&mut self, choice: FilterChoice) {
        self.filter_history.push_front(FilterRecord {
            timestamp: chrono::Local::now().naive_local(),
            choice,
        });
        if self.filter_history.len() > 50 {
            self.filter_history.pop_back();
        }
        self.set_status(format!("Filtering products by: {choice}"));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    /// Focusable targets, in page order. Only controls that actually exist
    /// on the page are walked; the product listing is always last.
    pub fn focus_targets(&self) -> Vec<CatalogFocus> {
        let mut targets = Vec::new();
        if self.page.range_input(ids::PRICE_RANGE).is_some() {
            targets.push(CatalogFocus::PriceSlider);
        }
        if self.page.checkbox(ids::FLASH).is_some() {
            targets.push(CatalogFocus::FlashBox);
        }
        if self.page.checkbox(ids::ALL).is_some() {
            targets.push(CatalogFocus::AllBox);
        }
        targets.push(CatalogFocus::Products);
        targets
    }

    /// Move focus (or the product cursor) down.
    pub fn focus_down(&mut self) {
        if self.focus == CatalogFocus::Products {
            if !self.products.is_empty() && self.product_cursor + 1 < self.products.len() {
                self.product_cursor += 1;
            }
            return;
        }
        let targets = self.focus_targets();
        match targets.iter().position(|t| *t == self.focus) {
            Some(pos) if pos + 1 < targets.len() => self.focus = targets[pos + 1],
            Some(_) => {}
            None => self.focus = targets[0],
        }
    }

    /// Move focus (or the product cursor) up.
    pub fn focus_up(&mut self) {
        if self.focus == CatalogFocus::Products && self.product_cursor > 0 {
            self.product_cursor -= 1;
            return;
        }
        let targets = self.focus_targets();
        match targets.iter().position(|t| *t == self.focus) {
            Some(pos) if pos > 0 => self.focus = targets[pos - 1],
            Some(_) => {}
            None => self.focus = targets[0],
        }
    }
}

/// Initial focus: the first control present on the page.
fn first_focus(page: &Page) -> CatalogFocus {
    if page.range_input(ids::PRICE_RANGE).is_some() {
        CatalogFocus::PriceSlider
    } else if page.checkbox(ids::FLASH).is_some() {
        CatalogFocus::FlashBox
    } else if page.checkbox(ids::ALL).is_some() {
        CatalogFocus::AllBox
    } else {
        CatalogFocus::Products
    }
}
