pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Section};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::default();

    // Main layout: info bar, tabs, content, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    components::tabs::render_tabs(frame, layout[1], state.section, &theme);

    match state.section {
        Section::Accounts => screens::accounts::render(frame, layout[2], state, &theme),
        Section::Transactions => screens::transactions::render(frame, layout[2], state, &theme),
        Section::Categories => screens::categories::render(frame, layout[2], state, &theme),
    }

    render_bottom_bar(frame, layout[3], state, &theme);
    components::toast::render(frame, area, state.notifications.render());
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let refresh = state
        .last_refresh
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());
    let (status, status_style) = if state.connected {
        ("OK", Style::default().fg(theme.positive))
    } else {
        ("ERR", Style::default().fg(theme.error))
    };

    let line = Line::from(vec![
        Span::styled("Server", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.base_url)),
        Span::styled("Accounts", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.accounts.len())),
        Span::styled("Refresh", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {refresh}  ")),
        Span::styled(status, status_style),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts =
        components::hints::hints_to_spans(&components::hints::context_hints(state), theme);
    parts.push(components::hints::hint_separator(theme));
    parts.extend(components::hints::hints_to_spans(
        &components::hints::global_hints(state),
        theme,
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
