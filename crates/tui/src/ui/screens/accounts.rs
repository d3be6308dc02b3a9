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
        .title(" Accounts ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));

    if state.accounts.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from("No accounts loaded."))
                .style(Style::default().fg(theme.dim))
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    }

    let name_width = state
        .accounts
        .iter()
        .map(|account| Span::raw(account.name.as_str()).width())
        .max()
        .unwrap_or(0);

    let items = state
        .accounts
        .iter()
        .map(|account| {
            let mut style = Style::default().fg(theme.text);
            if !account.active {
                style = style.fg(theme.dim).add_modifier(Modifier::CROSSED_OUT);
            }
            ListItem::new(Line::from(vec![
                Span::styled(account.name.clone(), style),
                Span::raw(" ".repeat(name_width - Span::raw(account.name.as_str()).width() + 2)),
                Span::styled(
                    format!("{:<10}", account.kind.label()),
                    Style::default().fg(theme.text_muted),
                ),
                styled_amount(account.balance_minor, &account.currency, theme),
            ]))
        })
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_account));

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
