//! Shopfront TUI — the product catalog page in a terminal.
//!
//! Panels:
//! 1. Catalog — price slider, flash/all filter checkboxes, product listing
//! 2. Activity — recorded filter selections
//! 3. Help — keyboard shortcuts

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use shopfront_core::controller::CatalogController;
use shopfront_tui::app::AppState;
use shopfront_tui::{config, input, logging, persistence, sample_data, ui};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Paths
    let config_root = config::config_root();
    let state_path = config_root.join("state.json");
    let markup_path = config_root.join("page.toml");
    let log_path = config_root.join("shopfront.log");

    logging::init(&log_path)?;

    // Build the page once its structure is known, then bind the controller.
    // Bindings whose elements are absent simply stay unbound.
    let (markup, markup_warning) = config::load_markup(&markup_path);
    let page = markup.to_page();
    let controller = CatalogController::bind(&page);
    tracing::info!(
        price_sync = controller.price_sync_bound(),
        filters = controller.filters_bound(),
        "catalog page controller bound"
    );

    let mut app = AppState::new(
        page,
        controller,
        sample_data::sample_products(),
        state_path.clone(),
    );
    if let Some(warning) = markup_warning {
        app.set_warning(warning);
    }

    // Apply persisted UI preferences.
    let persisted = persistence::load(&state_path);
    persistence::apply(&mut app, persisted);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save preferences before exit
    let persisted = persistence::extract(&app);
    let _ = persistence::save(&state_path, &persisted);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
