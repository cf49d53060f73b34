//! Keyboard input dispatch — overlays → global keys → panel-specific
//! handlers. Every handler is synchronous and runs to completion.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use shopfront_core::controller::ControlEvent;
use shopfront_core::page::ids;

use crate::app::{AppState, CatalogFocus, Overlay, Panel};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::ProductDetail(_) => {
            handle_detail_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => {
            app.active_panel = Panel::Catalog;
            return;
        }
        KeyCode::Char('2') => {
            app.active_panel = Panel::Activity;
            return;
        }
        KeyCode::Char('3') => {
            app.active_panel = Panel::Help;
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Catalog => handle_catalog_key(app, key),
        Panel::Activity => handle_activity_key(app, key),
        Panel::Help => {} // display only
    }
}

fn handle_detail_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            app.overlay = Overlay::None;
        }
        _ => {}
    }
}

fn handle_catalog_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.focus_down(),
        KeyCode::Char('k') | KeyCode::Up => app.focus_up(),
        KeyCode::Char('h') | KeyCode::Left => step_slider(app, -1),
        KeyCode::Char('l') | KeyCode::Right => step_slider(app, 1),
        KeyCode::Char(' ') => toggle_focused_checkbox(app),
        KeyCode::Enter => {
            if app.focus == CatalogFocus::Products && !app.products.is_empty() {
                app.overlay = Overlay::ProductDetail(app.product_cursor);
            }
        }
        _ => {}
    }
}

/// Step the slider one tick, staying within its bounds — the control's
/// native stepping, applied here in the input layer. Each tick that moves
/// the value fires its own input event.
fn step_slider(app: &mut AppState, direction: i64) {
    if app.focus != CatalogFocus::PriceSlider {
        return;
    }
    let Some(range) = app.page.range_input_mut(ids::PRICE_RANGE) else {
        return;
    };
    let next = (range.value() + direction * range.step).clamp(range.min, range.max);
    if next == range.value() {
        return;
    }
    range.set_value(next);
    app.dispatch_event(ControlEvent::range_input(ids::PRICE_RANGE));
}

/// Flip the focused checkbox, then fire its change event. The flip happens
/// first: the handler observes the new state, as a change listener does.
fn toggle_focused_checkbox(app: &mut AppState) {
    let id = match app.focus {
        CatalogFocus::FlashBox => ids::FLASH,
        CatalogFocus::AllBox => ids::ALL,
        _ => return,
    };
    if let Some(checkbox) = app.page.checkbox_mut(id) {
        checkbox.toggle();
        app.dispatch_event(ControlEvent::checkbox_changed(id));
    }
}

fn handle_activity_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.activity_scroll + 1 < app.filter_history.len() {
                app.activity_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.activity_scroll = app.activity_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use shopfront_core::controller::CatalogController;
    use shopfront_core::page::markup::PageMarkup;
    use shopfront_core::page::Page;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn full_app() -> AppState {
        let page = PageMarkup::default().to_page();
        let controller = CatalogController::bind(&page);
        AppState::new(
            page,
            controller,
            crate::sample_data::sample_products(),
            PathBuf::from("."),
        )
    }

    #[test]
    fn q_quits() {
        let mut app = full_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn digits_switch_panels() {
        let mut app = full_app();
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.active_panel, Panel::Activity);
        handle_key(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.active_panel, Panel::Help);
        handle_key(&mut app, press(KeyCode::Char('1')));
        assert_eq!(app.active_panel, Panel::Catalog);
    }

    #[test]
    fn slider_step_updates_label_per_tick() {
        let mut app = full_app();
        assert_eq!(app.focus, CatalogFocus::PriceSlider);
        handle_key(&mut app, press(KeyCode::Char('l')));
        assert_eq!(
            app.page.text_node(ids::PRICE_VALUE).unwrap().text(),
            "$510"
        );
        handle_key(&mut app, press(KeyCode::Char('h')));
        handle_key(&mut app, press(KeyCode::Char('h')));
        assert_eq!(
            app.page.text_node(ids::PRICE_VALUE).unwrap().text(),
            "$490"
        );
    }

    #[test]
    fn slider_stops_at_bounds_without_firing() {
        let mut app = full_app();
        app.page
            .range_input_mut(ids::PRICE_RANGE)
            .unwrap()
            .set_value(1000);
        handle_key(&mut app, press(KeyCode::Char('l')));
        // No movement, no input event, label untouched.
        assert_eq!(app.page.text_node(ids::PRICE_VALUE).unwrap().text(), "");
    }

    #[test]
    fn space_on_flash_box_excludes_all_and_records() {
        let mut app = full_app();
        handle_key(&mut app, press(KeyCode::Char('j'))); // slider -> flash
        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert!(app.page.checkbox(ids::FLASH).unwrap().checked);
        assert!(!app.page.checkbox(ids::ALL).unwrap().checked);
        assert_eq!(app.filter_history.len(), 1);
    }

    #[test]
    fn keys_are_inert_on_an_empty_page() {
        let page = Page::new();
        let controller = CatalogController::bind(&page);
        let mut app = AppState::new(page, controller, Vec::new(), PathBuf::from("."));
        handle_key(&mut app, press(KeyCode::Char('l')));
        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert!(app.filter_history.is_empty());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn welcome_overlay_dismisses_on_any_key() {
        let mut app = full_app();
        app.overlay = Overlay::Welcome;
        handle_key(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.running);
    }

    #[test]
    fn enter_on_products_opens_detail() {
        let mut app = full_app();
        app.focus = CatalogFocus::Products;
        app.product_cursor = 2;
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.overlay, Overlay::ProductDetail(2));
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.overlay, Overlay::None);
    }
}
