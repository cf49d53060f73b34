//! Catalog Page Controller — binds behavior to page controls once they
//! exist, and no-ops safely when they do not.
//!
//! Three listener groups, mirroring the page's wiring:
//! - price display sync: range input -> "$" + value into the price label
//! - filter mutual exclusion over the flash/all checkbox pairing
//! - `filter_products`: the log-only stub boundary behind both filters

pub mod filter;

use crate::page::{ids, Page, RangeInput};
use filter::{apply, FilterChoice, FilterPair, FilterToggle};

/// Events the page delivers to the controller. Each names the element it
/// originated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    /// The range control's value moved. One event per tick; no coalescing.
    RangeInput { id: String },
    /// A checkbox's checked state flipped. The new state is already on the
    /// page when the event fires.
    CheckboxChanged { id: String },
}

impl ControlEvent {
    pub fn range_input(id: impl Into<String>) -> Self {
        ControlEvent::RangeInput { id: id.into() }
    }

    pub fn checkbox_changed(id: impl Into<String>) -> Self {
        ControlEvent::CheckboxChanged { id: id.into() }
    }
}

/// Price sync pairing: range control plus text display.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PriceSyncBinding {
    range_id: String,
    label_id: String,
}

/// Filter pairing: the two mutually-exclusive checkboxes.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FilterPairBinding {
    flash_id: String,
    all_id: String,
}

/// Binds once against an existing page; dispatches synchronously for the
/// page's lifetime.
#[derive(Debug)]
pub struct CatalogController {
    price_sync: Option<PriceSyncBinding>,
    filters: Option<FilterPairBinding>,
}

impl CatalogController {
    /// Bind to the given page.
    ///
    /// Each pairing is independently guarded: if either member is missing
    /// (or present under the right id but the wrong kind), that pairing
    /// stays unbound and its events are ignored. No error is raised.
    pub fn bind(page: &Page) -> Self {
        let price_sync = match (
            page.range_input(ids::PRICE_RANGE),
            page.text_node(ids::PRICE_VALUE),
        ) {
            (Some(_), Some(_)) => Some(PriceSyncBinding {
                range_id: ids::PRICE_RANGE.to_string(),
                label_id: ids::PRICE_VALUE.to_string(),
            }),
            _ => None,
        };

        let filters = match (page.checkbox(ids::FLASH), page.checkbox(ids::ALL)) {
            (Some(_), Some(_)) => Some(FilterPairBinding {
                flash_id: ids::FLASH.to_string(),
                all_id: ids::ALL.to_string(),
            }),
            _ => None,
        };

        Self {
            price_sync,
            filters,
        }
    }

    /// Whether the price display sync pairing is bound.
    pub fn price_sync_bound(&self) -> bool {
        self.price_sync.is_some()
    }

    /// Whether the filter checkbox pairing is bound.
    pub fn filters_bound(&self) -> bool {
        self.filters.is_some()
    }

    /// Handle one event against the page. Runs to completion; returns the
    /// resolved filter choice when the event settled one.
    pub fn dispatch(&self, page: &mut Page, event: &ControlEvent) -> Option<FilterChoice> {
        match event {
            ControlEvent::RangeInput { id } => {
                self.sync_price_label(page, id);
                None
            }
            ControlEvent::CheckboxChanged { id } => self.handle_checkbox_change(page, id),
        }
    }

    /// Copy the range control's value into the label as `"$" + value`,
    /// verbatim. No formatting, no separators, no clamping.
    fn sync_price_label(&self, page: &mut Page, id: &str) {
        let Some(binding) = &self.price_sync else {
            return;
        };
        if binding.range_id != id {
            return;
        }
        let Some(value) = page.range_input(&binding.range_id).map(RangeInput::value) else {
            return;
        };
        if let Some(label) = page.text_node_mut(&binding.label_id) {
            label.set_text(format!("${value}"));
        }
    }

    fn handle_checkbox_change(&self, page: &mut Page, id: &str) -> Option<FilterChoice> {
        let binding = self.filters.as_ref()?;
        let toggle = if id == binding.flash_id {
            FilterToggle::Flash
        } else if id == binding.all_id {
            FilterToggle::All
        } else {
            return None;
        };

        let pair = FilterPair {
            flash: page.checkbox(&binding.flash_id)?.checked,
            all: page.checkbox(&binding.all_id)?.checked,
        };
        let (next, choice) = apply(pair, toggle);

        if let Some(flash) = page.checkbox_mut(&binding.flash_id) {
            flash.checked = next.flash;
        }
        if let Some(all) = page.checkbox_mut(&binding.all_id) {
            all.checked = next.all;
        }

        if let Some(choice) = choice {
            filter_products(choice);
        }
        choice
    }
}

/// Stub boundary: record the chosen filter and nothing else.
///
/// Real product filtering needs backend integration; until then the
/// informational record is the sole effect besides checkbox state.
pub fn filter_products(filter: FilterChoice) {
    tracing::info!("Filtering products by: {filter}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::markup::PageMarkup;

    #[test]
    fn full_page_binds_both_pairings() {
        let page = PageMarkup::default().to_page();
        let controller = CatalogController::bind(&page);
        assert!(controller.price_sync_bound());
        assert!(controller.filters_bound());
    }

    #[test]
    fn empty_page_binds_nothing() {
        let page = Page::new();
        let controller = CatalogController::bind(&page);
        assert!(!controller.price_sync_bound());
        assert!(!controller.filters_bound());
    }

    #[test]
    fn events_for_unknown_ids_are_ignored() {
        let mut page = PageMarkup::default().to_page();
        let controller = CatalogController::bind(&page);
        assert_eq!(
            controller.dispatch(&mut page, &ControlEvent::checkbox_changed("sortOrder")),
            None
        );
        controller.dispatch(&mut page, &ControlEvent::range_input("volume"));
        assert_eq!(page.text_node(ids::PRICE_VALUE).unwrap().text(), "");
    }
}
