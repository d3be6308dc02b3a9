use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    notify::{Level, RenderedNotification},
    ui::theme::Theme,
};

/// Draws the visible notification in the bottom-right corner, if any.
pub fn render(frame: &mut Frame<'_>, area: Rect, notification: Option<RenderedNotification>) {
    let Some(notification) = notification else {
        return;
    };
    let theme = Theme::default();
    let tag = notification.level.tag();
    let style = level_style(notification.level, &theme);
    let line = Line::from(vec![
        Span::styled(format!("[{tag}] "), style.add_modifier(Modifier::BOLD)),
        Span::styled(notification.label(), Style::default().fg(theme.text)),
    ]);

    let rect = toast_area(area, line.width());
    let block = Block::default().borders(Borders::ALL).border_style(style);

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(line).block(block), rect);
}

/// Bottom-right box one row above the hint bar, wide enough for `content_width`
/// display columns plus borders.
fn toast_area(area: Rect, content_width: usize) -> Rect {
    let width = (content_width + 2).min(usize::from(area.width)) as u16;
    let height = 3u16;
    Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y.saturating_add(area.height.saturating_sub(height + 1)),
        width,
        height,
    }
}

fn level_style(level: Level, theme: &Theme) -> Style {
    match level {
        Level::Info => Style::default().fg(theme.accent),
        Level::Warning => Style::default().fg(theme.warning),
        Level::Error => Style::default().fg(theme.error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_glyphs_widen_the_box() {
        let area = Rect::new(0, 0, 80, 24);
        let ascii = Line::from("[info] saved");
        let wide = Line::from("[info] 保存しました");

        assert_eq!(toast_area(area, ascii.width()).width, 14);
        assert_eq!(toast_area(area, wide.width()).width, 19);
    }

    #[test]
    fn box_is_clamped_to_the_screen() {
        let area = Rect::new(0, 0, 10, 5);
        let rect = toast_area(area, 40);
        assert_eq!(rect.width, 10);
        assert_eq!(rect.x, 0);
        assert_eq!(rect.y, 1);
    }
}
