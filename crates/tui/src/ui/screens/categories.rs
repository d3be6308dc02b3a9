use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    app::AppState,
    ui::{components::money::styled_amount, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(" Categories ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));

    if state.categories.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from("No categories yet."))
                .style(Style::default().fg(theme.dim))
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    }

    // Categories carry no currency; borrow the first account's.
    let currency = state
        .accounts
        .first()
        .map(|account| account.currency.as_str())
        .unwrap_or("EUR");

    let items = state
        .categories
        .iter()
        .map(|category| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<24}", category.name),
                    Style::default().fg(theme.text),
                ),
                styled_amount(category.spent_minor, currency, theme),
            ]))
        })
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_category));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}
