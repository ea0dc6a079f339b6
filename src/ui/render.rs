use crate::movies::DraftField;
use crate::ui::app::{App, Mode};
use crate::ui::catalog::{catalog_view, CatalogView, MovieItem, EMPTY_MESSAGE, LOADING_MESSAGE};
use crate::ui::footer::footer_widget;
use crate::ui::header::header_widget;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR,
    STATUS_OK,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const COMPOSE_WIDTH: u16 = 60;
const COMPOSE_HEIGHT: u16 = 9;

pub fn draw(frame: &mut Frame<'_>, app: &App, source: &str) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(header_widget(app.catalog(), source), header);
    frame.render_widget(Clear, body);
    render_body(frame, app, body);
    frame.render_widget(footer_widget(app.mode(), footer), footer);

    if let Mode::Compose { field } = app.mode() {
        render_compose(frame, app, field);
    }
}

fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

fn render_body(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match catalog_view(app.catalog()) {
        CatalogView::Error {
            message,
            can_cancel,
        } => {
            let mut lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {}", message),
                    Style::default().fg(STATUS_ERROR),
                )),
            ];
            if can_cancel {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "  [c] Cancel Retrying",
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                )));
            }
            lines
        }
        CatalogView::Loading => {
            let spinner =
                SPINNER_FRAMES[(app.animation_tick() as usize) % SPINNER_FRAMES.len()];
            vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled(format!("  {} ", spinner), Style::default().fg(STATUS_OK)),
                    Span::styled(LOADING_MESSAGE, Style::default().fg(HEADER_TEXT)),
                ]),
            ]
        }
        CatalogView::Empty => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", EMPTY_MESSAGE),
                Style::default().fg(MUTED_TEXT),
            )),
        ],
        CatalogView::Movies(items) => movie_lines(&items, app.selection()),
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn movie_lines(items: &[MovieItem<'_>], selection: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(items.len() * 4);
    for (idx, item) in items.iter().enumerate() {
        let selected = idx == selection;
        let title_style = if selected {
            Style::default()
                .fg(ACCENT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)
        };
        let marker = if selected { "▸ " } else { "  " };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(ACCENT)),
            Span::styled(item.title.to_string(), title_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", item.release_date),
            Style::default().fg(MUTED_TEXT),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", item.opening_text),
            Style::default().fg(HEADER_TEXT),
        )));
        lines.push(Line::from(""));
    }
    lines
}

fn render_compose(frame: &mut Frame<'_>, app: &App, focused: DraftField) {
    let area = centered_rect(COMPOSE_WIDTH, COMPOSE_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Movie ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let draft = &app.catalog().draft;
    let mut lines = vec![Line::from("")];
    for field in DraftField::ALL {
        let focused_field = field == focused;
        let label_style = if focused_field {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        let cursor = if focused_field { "▏" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<13}", field.label()), label_style),
            Span::styled(
                format!("{}{}", draft.field(field), cursor),
                Style::default().fg(HEADER_TEXT),
            ),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Create a centered rect of given size.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
