//! Property tests for the controller's two observable contracts.

use proptest::prelude::*;

use shopfront_core::controller::filter::{apply, FilterPair, FilterToggle};
use shopfront_core::controller::{CatalogController, ControlEvent};
use shopfront_core::page::markup::PageMarkup;
use shopfront_core::page::ids;

proptest! {
    /// The label is always the literal "$" + value, for any value the
    /// control can hold — including values far outside its min..=max.
    #[test]
    fn label_is_dollar_sign_plus_value(v in any::<i64>()) {
        let mut page = PageMarkup::default().to_page();
        let controller = CatalogController::bind(&page);

        page.range_input_mut(ids::PRICE_RANGE).unwrap().set_value(v);
        controller.dispatch(&mut page, &ControlEvent::range_input(ids::PRICE_RANGE));

        prop_assert_eq!(
            page.text_node(ids::PRICE_VALUE).unwrap().text(),
            format!("${v}")
        );
    }

    /// Starting from a consistent pairing (exactly one box checked), any
    /// sequence of user toggles keeps exactly one box checked.
    #[test]
    fn mutual_exclusion_holds_under_any_toggle_sequence(
        start_flash in any::<bool>(),
        toggles in prop::collection::vec(any::<bool>(), 0..64),
    ) {
        let mut pair = FilterPair { flash: start_flash, all: !start_flash };
        for toggle_flash in toggles {
            // A user toggle flips one box, then the change handler runs.
            let changed = if toggle_flash {
                pair.flash = !pair.flash;
                FilterToggle::Flash
            } else {
                pair.all = !pair.all;
                FilterToggle::All
            };
            let (next, _choice) = apply(pair, changed);
            pair = next;
            prop_assert!(pair.flash != pair.all, "pairing drifted: {pair:?}");
        }
    }
}
