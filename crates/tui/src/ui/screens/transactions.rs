use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::{
    app::{AppState, FormField, TransactionForm, TransactionsMode},
    ui::{
        components::{centered_rect, money::styled_transaction_amount},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(input_height(state)),
        ])
        .split(area);

    render_header(frame, layout[0], state, theme);
    match state.transactions.mode {
        TransactionsMode::Detail => render_detail(frame, layout[1], state, theme),
        _ => render_list(frame, layout[1], state, theme),
    }
    render_input(frame, layout[2], state, theme);

    match state.transactions.mode {
        TransactionsMode::Form => {
            if let Some(form) = &state.transactions.form {
                render_form(frame, area, form, state, theme);
            }
        }
        TransactionsMode::ConfirmDelete => render_confirm(frame, area, state, theme),
        _ => {}
    }
}

fn input_height(state: &AppState) -> u16 {
    match state.transactions.mode {
        TransactionsMode::Search | TransactionsMode::QuickAdd => 3,
        _ => 0,
    }
}

fn render_header(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let filter = &state.transactions.filter;
    let query = if filter.query.is_empty() {
        "-"
    } else {
        filter.query.as_str()
    };
    let kind = filter.kind.map(|kind| kind.label()).unwrap_or("All");

    let line = Line::from(vec![
        Span::styled("Search", Style::default().fg(theme.dim)),
        Span::raw(format!(": {query}   ")),
        Span::styled("Account", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}   ", state.account_name(filter.account_id))),
        Span::styled("Category", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}   ", state.category_name(filter.category_id))),
        Span::styled("Kind", Style::default().fg(theme.dim)),
        Span::raw(format!(": {kind}   ")),
        Span::styled("Page", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}", state.transactions.page())),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(" Transactions ");
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));

    if state.transactions.items.is_empty() {
        let message = if state.transactions.filter.is_empty() {
            "No transactions yet."
        } else {
            "No transactions match the current filters."
        };
        frame.render_widget(
            Paragraph::new(Line::from(message))
                .style(Style::default().fg(theme.dim))
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    }

    let items = state
        .transactions
        .items
        .iter()
        .map(|tx| {
            let date = tx.occurred_at.format("%d %b %Y").to_string();
            let category = match tx.category_id {
                Some(_) => format!(" #{}", state.category_name(tx.category_id)),
                None => String::new(),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{date}  "), Style::default().fg(theme.text_muted)),
                Span::styled(
                    format!("{:<10} ", tx.kind.label()),
                    Style::default().fg(theme.dim),
                ),
                styled_transaction_amount(tx.kind, tx.amount_minor, &tx.currency, theme),
                Span::raw("  "),
                Span::styled(tx.description.clone(), Style::default().fg(theme.text)),
                Span::styled(category, Style::default().fg(theme.accent)),
            ]))
        })
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    list_state.select(Some(state.transactions.selected));

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

fn render_detail(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(" Transaction Detail ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent));

    let Some(tx) = state.transactions.selected_item() else {
        frame.render_widget(
            Paragraph::new(Line::from("Nothing selected."))
                .block(block)
                .alignment(Alignment::Center),
            area,
        );
        return;
    };

    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<12}"), Style::default().fg(theme.dim)),
            Span::raw(value),
        ])
    };

    let lines = vec![
        field("Kind", tx.kind.label().to_string()),
        field("When", tx.occurred_at.format("%d %b %Y %H:%M").to_string()),
        field("Description", tx.description.clone()),
        Line::from(vec![
            Span::styled(format!("{:<12}", "Amount"), Style::default().fg(theme.dim)),
            styled_transaction_amount(tx.kind, tx.amount_minor, &tx.currency, theme),
        ]),
        field("From", state.account_name(tx.source_account_id)),
        field("To", state.account_name(tx.destination_account_id)),
        field("Category", state.category_name(tx.category_id)),
        field("Notes", tx.notes.clone().unwrap_or_else(|| "-".to_string())),
        field("Id", tx.id.to_string()),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_input(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let (title, value, placeholder) = match state.transactions.mode {
        TransactionsMode::Search => (
            " Search ",
            state.transactions.search_input.as_str(),
            "text in description or notes",
        ),
        TransactionsMode::QuickAdd => (
            " Quick add ",
            state.transactions.quick_input.as_str(),
            "[+|-]amount description [#category]",
        ),
        _ => return,
    };

    let content = if value.is_empty() {
        Line::from(Span::styled(placeholder, Style::default().fg(theme.dim)))
    } else {
        Line::from(vec![
            Span::styled(value, Style::default().fg(theme.text)),
            Span::styled("_", Style::default().fg(theme.accent)),
        ])
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent));
    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn render_form(
    frame: &mut Frame<'_>,
    area: Rect,
    form: &TransactionForm,
    state: &AppState,
    theme: &Theme,
) {
    let popup = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup);

    let title = if form.editing.is_some() {
        " Edit transaction "
    } else {
        " New transaction "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent));

    let mut lines = FormField::ALL
        .iter()
        .map(|field| {
            let focused = *field == form.focus;
            let label_style = if focused {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.dim)
            };
            let marker = if focused { "» " } else { "  " };
            let mut value = field_value(form, *field, state);
            if focused && field.is_picker() {
                value = format!("‹ {value} ›");
            } else if focused {
                value.push('_');
            }
            Line::from(vec![
                Span::styled(marker, label_style),
                Span::styled(format!("{:<12}", field.label()), label_style),
                Span::styled(value, Style::default().fg(theme.text)),
            ])
        })
        .collect::<Vec<_>>();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tab/Shift+Tab move  ↑/↓ pick  Enter save  Esc cancel",
        Style::default().fg(theme.dim),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn field_value(form: &TransactionForm, field: FormField, state: &AppState) -> String {
    match field {
        FormField::Kind => form.kind.label().to_string(),
        FormField::Date => form.date.clone(),
        FormField::Description => form.description.clone(),
        FormField::Amount => form.amount.clone(),
        FormField::Source => state.account_name(form.source_account_id),
        FormField::Destination => state.account_name(form.destination_account_id),
        FormField::Category => state.category_name(form.category_id),
        FormField::Notes => form.notes.clone(),
    }
}

fn render_confirm(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let popup = centered_rect(40, 20, area);
    frame.render_widget(Clear, popup);

    let description = state
        .transactions
        .selected_item()
        .map(|tx| tx.description.as_str())
        .unwrap_or("-");

    let lines = vec![
        Line::from(Span::styled(
            format!("Delete \"{description}\"?"),
            Style::default().fg(theme.text),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(theme.error)),
            Span::styled(" delete   ", Style::default().fg(theme.dim)),
            Span::styled("n", Style::default().fg(theme.accent)),
            Span::styled(" keep", Style::default().fg(theme.dim)),
        ]),
    ];

    let block = Block::default()
        .title(" Confirm ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.error));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        popup,
    );
}
