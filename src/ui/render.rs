use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::ui::theme::{
    ACCENT, BORDER, HEALTH_DOWN, HEALTH_UNCHECKED, HEALTH_UP, MUTED_TEXT, SELECTED_ROW, TEXT,
};
use crate::ui::view::{Health, RenderTree, SiteRow};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str =
    " Enter: Add │ ↑/↓: Select │ Del: Remove │ Ctrl+R: Refresh │ Ctrl+U: Clear │ Esc: Quit";

pub fn draw(frame: &mut Frame<'_>, tree: &RenderTree) {
    let regions = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    frame.render_widget(input_widget(tree), regions[0]);
    frame.render_widget(status_widget(tree), regions[1]);
    // Keeps the selected row inside the visible window.
    let mut table_state = TableState::default().with_selected(tree.table.selected_index());
    frame.render_stateful_widget(table_widget(tree), regions[2], &mut table_state);
    frame.render_widget(footer_widget(regions[3]), regions[3]);
}

fn bordered(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
}

fn input_widget(tree: &RenderTree) -> Paragraph<'_> {
    let line = Line::from(vec![
        Span::styled(tree.input.value.as_str(), Style::default().fg(TEXT)),
        Span::styled("▏", Style::default().fg(ACCENT)),
    ]);
    Paragraph::new(line).block(bordered(tree.input.label))
}

fn status_widget(tree: &RenderTree) -> Paragraph<'_> {
    let muted = Style::default().fg(MUTED_TEXT);
    let line = |label: &'static str, text: &Option<String>| {
        Line::from(vec![
            Span::styled(label, muted),
            match text {
                Some(text) => Span::styled(text.clone(), Style::default().fg(TEXT)),
                None => Span::styled("-", muted),
            },
        ])
    };
    Paragraph::new(vec![
        line("Last add:    ", &tree.add_status),
        line("Last remove: ", &tree.remove_status),
    ])
    .block(bordered("Mutations"))
}

fn table_widget(tree: &RenderTree) -> Table<'_> {
    let header = Row::new(tree.table.headers.iter().map(|h| Cell::from(*h))).style(
        Style::default()
            .fg(TEXT)
            .add_modifier(Modifier::BOLD),
    );
    let rows = tree.table.rows.iter().map(site_row);
    let widths = [
        Constraint::Percentage(25),
        Constraint::Length(14),
        Constraint::Length(6),
        Constraint::Min(12),
        Constraint::Length(24),
        Constraint::Percentage(20),
    ];
    let title = format!("Sites ({})", tree.table.rows.len());
    Table::new(rows, widths)
        .header(header)
        .block(bordered(&title))
}

fn site_row(row: &SiteRow) -> Row<'_> {
    let health_color = match row.health {
        Health::Up => HEALTH_UP,
        Health::Down => HEALTH_DOWN,
        Health::Unchecked => HEALTH_UNCHECKED,
    };
    let cells = vec![
        Cell::from(row.key.as_str()),
        Cell::from(row.uptime.as_str()),
        Cell::from(Span::styled(row.status.as_str(), Style::default().fg(health_color))),
        Cell::from(row.status_text.as_str()),
        Cell::from(Span::styled(row.last_check.as_str(), Style::default().fg(MUTED_TEXT))),
        Cell::from(Span::styled(row.history.as_str(), Style::default().fg(ACCENT))),
    ];
    let style = if row.selected {
        Style::default().bg(SELECTED_ROW).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT)
    };
    Row::new(cells).style(style)
}

fn footer_widget(area: Rect) -> Paragraph<'static> {
    let version = format!("v{} ", VERSION);

    // Pad by char count, not byte count.
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(HINTS.chars().count())
        .saturating_sub(version.chars().count());

    let style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);
    Paragraph::new(Line::from(vec![
        Span::styled(HINTS, style),
        Span::styled(" ".repeat(padding), style),
        Span::styled(version, style),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER)),
    )
}
