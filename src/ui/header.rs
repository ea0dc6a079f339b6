use crate::ui::catalog::{fetch_action, CatalogState};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar with the fetch action and the source being browsed.
pub fn header_widget<'a>(state: &CatalogState, source: &'a str) -> Paragraph<'a> {
    let (label, enabled) = fetch_action(state);
    let action_style = if enabled {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
    };

    let line = Line::from(vec![
        Span::styled(" Movies ", Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)),
        Span::styled("│ ", Style::default().fg(GLOBAL_BORDER)),
        Span::styled(format!("[f] {}", label), action_style),
        Span::styled("  │ ", Style::default().fg(GLOBAL_BORDER)),
        Span::styled(source, Style::default().fg(MUTED_TEXT)),
    ]);

    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
