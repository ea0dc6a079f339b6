use crate::ui::app::Mode;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const BROWSE_HINTS: &str = " f: Fetch │ c: Cancel retry │ a: Add │ d: Delete │ ↑↓: Select │ q: Quit";
const COMPOSE_HINTS: &str = " Tab: Next field │ Enter: Submit │ Esc: Back";

pub fn footer_widget(mode: Mode, area: Rect) -> Paragraph<'static> {
    let hints = match mode {
        Mode::Browse => BROWSE_HINTS,
        Mode::Compose { .. } => COMPOSE_HINTS,
    };
    let version = format!("v{} ", VERSION);

    // Pad by char count, not byte count (hints contain box-drawing chars)
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints.chars().count())
        .saturating_sub(version.chars().count());

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

    let line = Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    Paragraph::new(line)
        .style(text_style)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}
