//! Page markup loading.
//!
//! A missing `page.toml` means the built-in full page. An unreadable or
//! invalid one is ignored with a status warning: the page still comes up,
//! possibly with fewer controls, and anything that depends on an absent
//! control stays unbound.

use std::path::{Path, PathBuf};

use shopfront_core::page::markup::PageMarkup;

/// `<config_dir>/shopfront` — markup, persisted UI state, and the log file
/// all live here.
pub fn config_root() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shopfront")
}

/// Load the page markup. Returns the markup plus an optional warning for
/// the status line.
pub fn load_markup(path: &Path) -> (PageMarkup, Option<String>) {
    match std::fs::read_to_string(path) {
        Ok(content) => match PageMarkup::from_toml_str(&content) {
            Ok(markup) => (markup, None),
            Err(err) => (
                PageMarkup::default(),
                Some(format!("page.toml ignored: {err}")),
            ),
        },
        Err(_) => (PageMarkup::default(), None),
    }
}
