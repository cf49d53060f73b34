//! The flash/all filter pairing — a two-state machine over two checkboxes.

use std::fmt;

/// The resolved two-valued filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChoice {
    Flash,
    All,
}

impl FilterChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterChoice::Flash => "flash",
            FilterChoice::All => "all",
        }
    }
}

impl fmt::Display for FilterChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checked state of the pairing, observed after a toggle has landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterPair {
    pub flash: bool,
    pub all: bool,
}

/// Which checkbox fired the change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterToggle {
    Flash,
    All,
}

/// One step of the pairing's state machine.
///
/// `pair` already carries the changed box's new state, the way a change
/// handler observes it. Checking a box unchecks its partner; unchecking a
/// box while the partner is also unchecked snaps the partner on. Unchecking
/// a box while the partner is checked changes nothing and records nothing —
/// a pair both checked by external assignment stays that way until the
/// partner itself changes.
pub fn apply(pair: FilterPair, changed: FilterToggle) -> (FilterPair, Option<FilterChoice>) {
    match changed {
        FilterToggle::Flash => {
            if pair.flash {
                (
                    FilterPair {
                        flash: true,
                        all: false,
                    },
                    Some(FilterChoice::Flash),
                )
            } else if !pair.all {
                (
                    FilterPair {
                        flash: false,
                        all: true,
                    },
                    Some(FilterChoice::All),
                )
            } else {
                (pair, None)
            }
        }
        FilterToggle::All => {
            if pair.all {
                (
                    FilterPair {
                        flash: false,
                        all: true,
                    },
                    Some(FilterChoice::All),
                )
            } else if !pair.flash {
                (
                    FilterPair {
                        flash: true,
                        all: false,
                    },
                    Some(FilterChoice::Flash),
                )
            } else {
                (pair, None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(flash: bool, all: bool) -> FilterPair {
        FilterPair { flash, all }
    }

    #[test]
    fn checking_flash_unchecks_all() {
        let (next, choice) = apply(pair(true, true), FilterToggle::Flash);
        assert_eq!(next, pair(true, false));
        assert_eq!(choice, Some(FilterChoice::Flash));
    }

    #[test]
    fn unchecking_flash_with_all_off_snaps_to_all() {
        let (next, choice) = apply(pair(false, false), FilterToggle::Flash);
        assert_eq!(next, pair(false, true));
        assert_eq!(choice, Some(FilterChoice::All));
    }

    #[test]
    fn checking_all_unchecks_flash() {
        let (next, choice) = apply(pair(true, true), FilterToggle::All);
        assert_eq!(next, pair(false, true));
        assert_eq!(choice, Some(FilterChoice::All));
    }

    #[test]
    fn unchecking_all_with_flash_off_snaps_to_flash() {
        let (next, choice) = apply(pair(false, false), FilterToggle::All);
        assert_eq!(next, pair(true, false));
        assert_eq!(choice, Some(FilterChoice::Flash));
    }

    /// The preserved asymmetry: unchecking one of two externally-checked
    /// boxes takes the corrective-action-free branch.
    #[test]
    fn unchecking_one_of_two_checked_boxes_does_nothing() {
        let (next, choice) = apply(pair(false, true), FilterToggle::Flash);
        assert_eq!(next, pair(false, true));
        assert_eq!(choice, None);

        let (next, choice) = apply(pair(true, false), FilterToggle::All);
        assert_eq!(next, pair(true, false));
        assert_eq!(choice, None);
    }

    /// Full transition table: every (pair, toggle) combination resolves to
    /// a consistent pair or to the documented no-op.
    #[test]
    fn transition_table_is_exhaustive() {
        let cases = [
            (pair(true, false), FilterToggle::Flash, pair(true, false), Some(FilterChoice::Flash)),
            (pair(true, true), FilterToggle::Flash, pair(true, false), Some(FilterChoice::Flash)),
            (pair(false, false), FilterToggle::Flash, pair(false, true), Some(FilterChoice::All)),
            (pair(false, true), FilterToggle::Flash, pair(false, true), None),
            (pair(false, true), FilterToggle::All, pair(false, true), Some(FilterChoice::All)),
            (pair(true, true), FilterToggle::All, pair(false, true), Some(FilterChoice::All)),
            (pair(false, false), FilterToggle::All, pair(true, false), Some(FilterChoice::Flash)),
            (pair(true, false), FilterToggle::All, pair(true, false), None),
        ];
        for (input, toggle, expected, expected_choice) in cases {
            let (next, choice) = apply(input, toggle);
            assert_eq!(next, expected, "pair {input:?} toggle {toggle:?}");
            assert_eq!(choice, expected_choice, "pair {input:?} toggle {toggle:?}");
        }
    }

    #[test]
    fn choice_strings_match_the_log_contract() {
        assert_eq!(FilterChoice::Flash.as_str(), "flash");
        assert_eq!(FilterChoice::All.as_str(), "all");
        assert_eq!(FilterChoice::Flash.to_string(), "flash");
        assert_eq!(FilterChoice::All.to_string(), "all");
    }
}
