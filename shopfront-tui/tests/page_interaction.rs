//! End-to-end keyboard interaction against real pages.

use std::path::PathBuf;

use proptest::prelude::*;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use shopfront_core::controller::filter::FilterChoice;
use shopfront_core::controller::CatalogController;
use shopfront_core::page::markup::PageMarkup;
use shopfront_core::page::ids;

use shopfront_tui::app::{AppState, CatalogFocus};
use shopfront_tui::input::handle_key;
use shopfront_tui::sample_data;

fn press(app: &mut AppState, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn app_from_markup(markup: &PageMarkup) -> AppState {
    let page = markup.to_page();
    let controller = CatalogController::bind(&page);
    AppState::new(
        page,
        controller,
        sample_data::sample_products(),
        PathBuf::from("."),
    )
}

#[test]
fn sliding_updates_the_label_once_per_tick() {
    let mut app = app_from_markup(&PageMarkup::default());
    assert_eq!(app.focus, CatalogFocus::PriceSlider);

    for _ in 0..3 {
        press(&mut app, KeyCode::Char('l'));
    }
    assert_eq!(app.page.range_input(ids::PRICE_RANGE).unwrap().value(), 530);
    assert_eq!(app.page.text_node(ids::PRICE_VALUE).unwrap().text(), "$530");
}

#[test]
fn toggling_filters_is_mutually_exclusive_end_to_end() {
    let mut app = app_from_markup(&PageMarkup::default());

    // slider -> flash box
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char(' '));
    assert!(app.page.checkbox(ids::FLASH).unwrap().checked);
    assert!(!app.page.checkbox(ids::ALL).unwrap().checked);
    assert_eq!(app.filter_history[0].choice, FilterChoice::Flash);

    // flash box -> all box
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char(' '));
    assert!(!app.page.checkbox(ids::FLASH).unwrap().checked);
    assert!(app.page.checkbox(ids::ALL).unwrap().checked);
    assert_eq!(app.filter_history[0].choice, FilterChoice::All);

    assert_eq!(app.filter_history.len(), 2);
}

#[test]
fn unchecking_the_selected_filter_snaps_back() {
    let mut app = app_from_markup(&PageMarkup::default());

    press(&mut app, KeyCode::Char('j')); // focus flash
    press(&mut app, KeyCode::Char(' ')); // flash on, all off
    press(&mut app, KeyCode::Char(' ')); // flash off again -> snaps to all

    assert!(!app.page.checkbox(ids::FLASH).unwrap().checked);
    assert!(app.page.checkbox(ids::ALL).unwrap().checked);
    assert_eq!(app.filter_history[0].choice, FilterChoice::All);
}

#[test]
fn page_without_price_label_still_slides_but_never_syncs() {
    let mut markup = PageMarkup::default();
    markup.price_value = None;
    let mut app = app_from_markup(&markup);

    assert!(!app.controller.price_sync_bound());
    press(&mut app, KeyCode::Char('l'));
    // The control itself moved; there is just no label to update.
    assert_eq!(app.page.range_input(ids::PRICE_RANGE).unwrap().value(), 510);
    assert!(app.page.text_node(ids::PRICE_VALUE).is_none());
}

#[test]
fn page_with_a_single_checkbox_attaches_no_filter_behavior() {
    let mut markup = PageMarkup::default();
    markup.all = None;
    let mut app = app_from_markup(&markup);
    assert!(!app.controller.filters_bound());

    // Focus walk: slider -> flash box (all box is skipped).
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.focus, CatalogFocus::FlashBox);

    // The lone box toggles natively but resolves no filter.
    press(&mut app, KeyCode::Char(' '));
    assert!(app.page.checkbox(ids::FLASH).unwrap().checked);
    assert!(app.filter_history.is_empty());
}

proptest! {
    /// Any walk of the slider keeps the value inside its bounds and the
    /// label equal to "$" + value after the first movement.
    #[test]
    fn label_tracks_the_slider_through_any_walk(
        steps in prop::collection::vec(any::<bool>(), 1..200),
    ) {
        let mut app = app_from_markup(&PageMarkup::default());
        for step_right in steps {
            let code = if step_right { KeyCode::Char('l') } else { KeyCode::Char('h') };
            press(&mut app, code);
            let value = app.page.range_input(ids::PRICE_RANGE).unwrap().value();
            prop_assert!((0..=1000).contains(&value));
        }
        // The walk starts mid-range, so at least the first tick moved.
        let value = app.page.range_input(ids::PRICE_RANGE).unwrap().value();
        let label = app.page.text_node(ids::PRICE_VALUE).unwrap().text();
        prop_assert_eq!(label, format!("${value}"));
    }
}

#[test]
fn empty_page_leaves_only_the_product_list() {
    let markup = PageMarkup {
        price_range: None,
        price_value: None,
        flash: None,
        all: None,
    };
    let mut app = app_from_markup(&markup);
    assert_eq!(app.focus, CatalogFocus::Products);

    // j/k drive the product cursor directly.
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.product_cursor, 2);
    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.product_cursor, 1);
}
