use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::BudgetStatus;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_percent, progress_bar, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.budgets.is_empty() {
        render_empty(f, area);
        return;
    }

    // Each budget takes two lines: the bar and a detail line.
    let per_page = (area.height.saturating_sub(2) / 2).max(1) as usize;
    let scroll = if app.budget_index >= per_page {
        app.budget_index + 1 - per_page
    } else {
        0
    };

    let items: Vec<ListItem> = app
        .budgets
        .iter()
        .enumerate()
        .skip(scroll)
        .take(per_page)
        .map(|(i, line)| {
            let budget = &line.budget;
            let color = theme::budget_color(line.status);
            let ratio = line.utilization.to_f64().unwrap_or(0.0);

            let name_style = if i == app.budget_index {
                theme::selected_style()
            } else {
                theme::normal_style().add_modifier(Modifier::BOLD)
            };

            let detail = match line.status {
                BudgetStatus::OverBudget => Span::styled(
                    format!("Over budget by {}", format_amount(budget.overage())),
                    Style::default().fg(theme::RED).add_modifier(Modifier::BOLD),
                ),
                _ => Span::styled(
                    format!("{} remaining", format_amount(budget.remaining())),
                    theme::dim_style(),
                ),
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!(" {:<20}", truncate(&budget.category, 19)), name_style),
                    Span::styled(
                        format!(
                            " {} / {} ",
                            format_amount(budget.spent),
                            format_amount(budget.limit)
                        ),
                        Style::default().fg(color),
                    ),
                    Span::styled(progress_bar(ratio, 24), Style::default().fg(color)),
                    Span::styled(
                        format!(" {} used", format_percent(line.utilization)),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![Span::raw(format!(" {:<20} ", "")), detail]),
            ])
        })
        .collect();

    let over = app
        .budgets
        .iter()
        .filter(|b| b.status == BudgetStatus::OverBudget)
        .count();
    let total_limit = app
        .budgets
        .iter()
        .fold(Decimal::ZERO, |acc, b| acc.saturating_add(b.budget.limit));

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(
                    " Budgets ({}) | {} monthly limit | {} over ",
                    app.budgets.len(),
                    format_amount(total_limit),
                    over
                ),
                theme::title_style(),
            )),
    );
    f.render_widget(list, area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("No budgets set", theme::dim_style())),
        Line::from(""),
        Line::from(Span::styled(
            "Use :budget <category> <limit> to set a monthly spending limit",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Budgets ", theme::title_style())),
    );
    f.render_widget(msg, area);
}
