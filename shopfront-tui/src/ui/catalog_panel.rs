//! Panel 1 — Catalog: price slider, filter checkboxes, product listing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use shopfront_core::domain::{Availability, Product};
use shopfront_core::page::ids;

use crate::app::{AppState, CatalogFocus};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(1)])
        .split(area);

    render_controls(f, chunks[0], app);
    render_products(f, chunks[1], app);
}

fn render_controls(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "[j/k]focus [h/l]slide [Space]toggle [Enter]details",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    // Price slider + its label. The label shows whatever the priceValue
    // element holds; it is never recomputed here.
    match app.page.range_input(ids::PRICE_RANGE) {
        Some(range) => {
            let focused = app.focus == CatalogFocus::PriceSlider;
            let bar = render_slider_inline(range.value(), range.min, range.max, 24);
            let label_text = app
                .page
                .text_node(ids::PRICE_VALUE)
                .map(|label| label.text().to_string());

            let name_style = if focused {
                theme::accent().add_modifier(Modifier::REVERSED)
            } else {
                theme::muted()
            };
            let mut spans = vec![
                Span::styled("  Max price: ", name_style),
                Span::styled(bar, if focused { theme::accent() } else { theme::muted() }),
            ];
            match label_text {
                Some(text) => spans.push(Span::styled(format!(" {text}"), theme::positive())),
                None => spans.push(Span::styled(" (no price label)", theme::text_secondary())),
            }
            lines.push(Line::from(spans));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "  Max price: (not present on this page)",
                theme::text_secondary(),
            )));
        }
    }

    checkbox_line(
        &mut lines,
        app,
        ids::FLASH,
        "Flash sale only",
        CatalogFocus::FlashBox,
    );
    checkbox_line(
        &mut lines,
        app,
        ids::ALL,
        "All products",
        CatalogFocus::AllBox,
    );

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn checkbox_line(
    lines: &mut Vec<Line<'_>>,
    app: &AppState,
    id: &str,
    label: &str,
    focus: CatalogFocus,
) {
    match app.page.checkbox(id) {
        Some(checkbox) => {
            let focused = app.focus == focus;
            let glyph = if checkbox.checked { "[x]" } else { "[ ]" };
            let style = if focused {
                theme::accent().add_modifier(Modifier::REVERSED)
            } else if checkbox.checked {
                theme::accent()
            } else {
                theme::muted()
            };
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{glyph} {label}"), style),
            ]));
        }
        None => {
            lines.push(Line::from(Span::styled(
                format!("  {label}: (not present on this page)"),
                theme::text_secondary(),
            )));
        }
    }
}

fn render_products(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    if app.products.is_empty() {
        lines.push(Line::from(Span::styled(
            "No products to show.",
            theme::muted(),
        )));
        let para = Paragraph::new(lines);
        f.render_widget(para, area);
        return;
    }

    let visible_height = area.height as usize;
    let focused_list = app.focus == CatalogFocus::Products;

    // Keep the cursor row on screen.
    let start = app
        .product_cursor
        .saturating_sub(visible_height.saturating_sub(1));
    let end = (start + visible_height).min(app.products.len());

    for (i, product) in app.products.iter().enumerate().take(end).skip(start) {
        let is_cursor = focused_list && i == app.product_cursor;
        lines.push(product_line(product, is_cursor));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn product_line(product: &Product, is_cursor: bool) -> Line<'_> {
    let name_style = if is_cursor {
        theme::accent().add_modifier(Modifier::REVERSED)
    } else {
        theme::accent()
    };

    let mut spans = vec![
        Span::styled(if is_cursor { "> " } else { "  " }, theme::accent()),
        Span::styled(format!("{:<28}", product.name), name_style),
        Span::styled(format!(" ${:>8.2}", product.current_price), theme::positive()),
    ];

    if let Some(previous) = product.previous_price {
        spans.push(Span::styled(
            format!("  ${previous:.2}"),
            theme::text_secondary().add_modifier(Modifier::CROSSED_OUT),
        ));
    }
    if let Some(pct) = product.discount_pct() {
        spans.push(Span::styled(format!("  -{pct}%"), theme::warning()));
    }
    if product.flash_sale {
        spans.push(Span::styled("  FLASH", theme::negative()));
    }

    match product.availability() {
        Availability::InStock(qty) => {
            spans.push(Span::styled(
                format!("  {qty} in stock"),
                theme::stock_color(qty),
            ));
        }
        Availability::OutOfStock => {
            spans.push(Span::styled("  out of stock", theme::stock_color(0)));
        }
    }

    Line::from(spans)
}

fn render_slider_inline(value: i64, min: i64, max: i64, width: usize) -> String {
    let range = max - min;
    if range <= 0 {
        return format!("[{}]", "=".repeat(width));
    }
    let frac = ((value - min) as f64 / range as f64).clamp(0.0, 1.0);
    let filled = (frac * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}
