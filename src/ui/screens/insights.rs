use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_ratio, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(8)])
        .split(area);

    render_budget_vs_actual(f, chunks[0], app);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_top_categories(f, bottom[0], app);
    render_financial_health(f, bottom[1], app);
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()))
}

/// One group per budget: limit next to actual spending.
fn render_budget_vs_actual(f: &mut Frame, area: Rect, app: &App) {
    let block = panel("Budget vs Actual Spending").title_bottom(Line::from(vec![
        Span::styled(" ■ Budget ", Style::default().fg(theme::LAVENDER)),
        Span::styled(" ■ Spent ", Style::default().fg(theme::GREEN)),
    ]));

    if app.budgets.is_empty() {
        let msg = Paragraph::new(Span::styled("No budgets to compare", theme::dim_style()))
            .centered()
            .block(block);
        f.render_widget(msg, area);
        return;
    }

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(7)
        .bar_gap(1)
        .group_gap(3);

    for line in &app.budgets {
        let budget = &line.budget;
        let spent_color = theme::budget_color(line.status);
        let bars = [
            Bar::default()
                .value(budget.limit.to_u64().unwrap_or(0))
                .style(Style::default().fg(theme::LAVENDER))
                .value_style(Style::default().fg(theme::HEADER_BG).bg(theme::LAVENDER)),
            Bar::default()
                .value(budget.spent.to_u64().unwrap_or(0))
                .style(Style::default().fg(spent_color))
                .value_style(Style::default().fg(theme::HEADER_BG).bg(spent_color)),
        ];
        let group = BarGroup::default()
            .label(Line::from(truncate(&budget.category, 15)).centered())
            .bars(&bars);
        chart = chart.data(group);
    }

    f.render_widget(chart, area);
}

fn render_top_categories(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = if app.top_categories.is_empty() {
        vec![Line::from(Span::styled("No expenses yet", theme::dim_style()))]
    } else {
        app.top_categories
            .iter()
            .enumerate()
            .map(|(i, (name, amount))| {
                let color = theme::PALETTE[i % theme::PALETTE.len()];
                Line::from(vec![
                    Span::styled(" ● ", Style::default().fg(color)),
                    Span::styled(format!("{:<24}", truncate(name, 23)), theme::normal_style()),
                    Span::styled(
                        format_amount(*amount),
                        theme::normal_style().add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect()
    };

    f.render_widget(Paragraph::new(lines).block(panel("Top Spending Categories")), area);
}

fn render_financial_health(f: &mut Frame, area: Rect, app: &App) {
    let average = app
        .average_expense
        .map(format_amount)
        .unwrap_or_else(|| "n/a".into());

    let row = |label: &str, value: String, style: Style| {
        Line::from(vec![
            Span::styled(format!(" {label:<22}"), theme::normal_style()),
            Span::styled(value, style.add_modifier(Modifier::BOLD)),
        ])
    };

    let lines = vec![
        row("Savings Rate", format_ratio(app.savings_rate), theme::income_style()),
        row(
            "Total Transactions",
            app.transactions.len().to_string(),
            theme::normal_style(),
        ),
        row("Average Expense", average, theme::normal_style()),
        row("Net Balance", format_amount(app.net_balance), theme::normal_style()),
    ];

    f.render_widget(Paragraph::new(lines).block(panel("Financial Health")), area);
}
