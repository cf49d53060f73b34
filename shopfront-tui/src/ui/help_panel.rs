//! Panel 3 — Help: keyboard shortcuts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-3", "Switch to panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "q", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 1 — Catalog");
    key(&mut lines, "j / k", "Move focus / product cursor down / up");
    key(&mut lines, "h / l", "Slide the max-price control");
    key(&mut lines, "Space", "Toggle the focused filter checkbox");
    key(&mut lines, "Enter", "Open product details");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 2 — Activity");
    key(&mut lines, "j / k", "Scroll filter records");
    lines.push(Line::from(""));

    section(&mut lines, "Filters");
    key(&mut lines, "Flash sale only", "Shows the flash badge products");
    key(&mut lines, "All products", "The default selection");
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Filter selection is recorded only — product filtering needs backend integration.",
        theme::text_secondary(),
    )));

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn section(lines: &mut Vec<Line<'_>>, title: &str) {
    lines.push(Line::from(Span::styled(
        title.to_string(),
        theme::accent_bold(),
    )));
}

fn key(lines: &mut Vec<Line<'_>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {keys:>20}  "), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
