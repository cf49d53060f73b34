//! Overlay widgets — welcome and product detail.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use shopfront_core::domain::Availability;

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_rect;

/// First-run welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 40, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Welcome to Shopfront ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Getting started:", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "  1. Slide the max-price control with h/l",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  2. Toggle a filter checkbox with Space",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  3. Press 2 to see recorded filter activity",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to dismiss...",
            theme::neutral(),
        )),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Product detail overlay.
pub fn render_product_detail(f: &mut Frame, area: Rect, app: &AppState, idx: usize) {
    let popup = centered_rect(70, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Product Detail [Esc]close ")
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let Some(product) = app.products.get(idx) else {
        let text = Paragraph::new(Span::styled("Product not found.", theme::muted()));
        f.render_widget(text, inner);
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        product.name.clone(),
        theme::accent_bold(),
    )));
    lines.push(Line::from(""));

    detail_line(&mut lines, "Category", &product.category);
    detail_line(&mut lines, "Price", &format!("${:.2}", product.current_price));
    if let Some(previous) = product.previous_price {
        detail_line(&mut lines, "Was", &format!("${previous:.2}"));
    }
    if let Some(pct) = product.discount_pct() {
        detail_line(&mut lines, "Discount", &format!("{pct}% off"));
    }
    detail_line(
        &mut lines,
        "Flash sale",
        if product.flash_sale { "yes" } else { "no" },
    );
    match product.availability() {
        Availability::InStock(qty) => detail_line(&mut lines, "Stock", &format!("{qty} units")),
        Availability::OutOfStock => detail_line(&mut lines, "Stock", "out of stock"),
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        product.description.clone(),
        theme::text_secondary(),
    )));

    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(para, inner);
}

fn detail_line(lines: &mut Vec<Line<'_>>, label: &str, value: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {label:>12}: "), theme::muted()),
        Span::styled(value.to_string(), theme::accent()),
    ]));
}
