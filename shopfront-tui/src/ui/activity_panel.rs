//! Panel 2 — Activity: recorded filter selections, newest first.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    if app.filter_history.is_empty() {
        let para = Paragraph::new(Span::styled(
            "No filter activity yet. Toggle a filter on the Catalog panel.",
            theme::muted(),
        ));
        f.render_widget(para, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        "[j/k]scroll — newest first",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    let visible_height = (area.height as usize).saturating_sub(2);
    let start = app.activity_scroll;
    let end = (start + visible_height).min(app.filter_history.len());

    for i in start..end {
        let record = &app.filter_history[i];
        let is_active = i == app.activity_scroll;
        let style = if is_active {
            theme::accent().add_modifier(Modifier::BOLD)
        } else {
            theme::text_secondary()
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", record.timestamp.format("%H:%M:%S")),
                theme::muted(),
            ),
            Span::styled(format!("Filtering products by: {}", record.choice), style),
        ]));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}
