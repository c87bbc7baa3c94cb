use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_ratio, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Summary cards
            Constraint::Min(8),    // Spending chart
            Constraint::Length(7), // Recent transactions
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);
    render_spending_chart(f, chunks[1], app);
    render_recent(f, chunks[2], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let income_count = app.transactions.len() - app.expense_count;
    let net_color = if app.net_balance >= Decimal::ZERO {
        theme::GREEN
    } else {
        theme::RED
    };

    render_card(
        f,
        cards[0],
        "Total Income",
        format_amount(app.total_income),
        theme::GREEN,
        format!("{income_count} txns"),
    );
    render_card(
        f,
        cards[1],
        "Total Expenses",
        format_amount(app.total_expenses),
        theme::RED,
        format!("{} txns", app.expense_count),
    );
    render_card(
        f,
        cards[2],
        "Net Balance",
        format_amount(app.net_balance),
        net_color,
        "Available balance".into(),
    );
    render_card(
        f,
        cards[3],
        "Savings Rate",
        format_ratio(app.savings_rate),
        theme::ACCENT,
        "of income kept".into(),
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    color: ratatui::style::Color,
    subtitle: String,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_spending_chart(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(" Expense Categories ", theme::title_style()));

    if app.spending_by_category.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No expenses yet. Add one with :add expense <date> <amount> <category> | <description>",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let total = app.total_expenses;
    let bars: Vec<Bar> = app
        .spending_by_category
        .iter()
        .enumerate()
        .map(|(i, (name, amt))| {
            let color = theme::PALETTE[i % theme::PALETTE.len()];
            let share = if total > Decimal::ZERO {
                amt.checked_div(total)
                    .and_then(|v| v.checked_mul(Decimal::ONE_HUNDRED))
                    .and_then(|v| v.round().to_u64())
                    .unwrap_or(0)
            } else {
                0
            };
            Bar::default()
                .value(amt.to_u64().unwrap_or(0))
                .text_value(format!("{share}%"))
                .label(Line::from(truncate(name, 12)))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(12)
        .bar_gap(2);

    f.render_widget(chart, area);
}

fn render_recent(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .recent
        .iter()
        .map(|txn| {
            let (sign, style) = if txn.is_income() {
                ("+", theme::income_style())
            } else {
                ("-", theme::expense_style())
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {:<28}", truncate(&txn.description, 27)), theme::normal_style()),
                Span::styled(
                    format!("{:<20} {}  ", truncate(&txn.category, 19), txn.date),
                    theme::dim_style(),
                ),
                Span::styled(format!("{sign}{}", format_amount(txn.amount)), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Recent Transactions ", theme::title_style())),
    );
    f.render_widget(list, area);
}
