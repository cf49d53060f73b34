//! UI preference persistence — JSON save/load across restarts.
//!
//! Only UI preferences persist. Filter selection and the slider value are
//! page state and always start from the markup's defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::app::{AppState, Overlay, Panel};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub welcome_dismissed: bool,
    pub active_panel: Panel,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            welcome_dismissed: false,
            active_panel: Panel::Catalog,
        }
    }
}

/// Load persisted state from disk. Returns defaults if the file is missing
/// or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from the app.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        welcome_dismissed: app.overlay != Overlay::Welcome,
        active_panel: app.active_panel,
    }
}

/// Apply persisted state to the app.
pub fn apply(app: &mut AppState, state: PersistedState) {
    app.active_panel = state.active_panel;
    if !state.welcome_dismissed {
        app.overlay = Overlay::Welcome;
    }
}
