use crate::app::gallery::GRID_COLUMNS;
use crate::domain::AssetItem;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Border plus alt-text line plus URL line.
pub const CELL_HEIGHT: u16 = 4;

/// First grid row to draw so that `selected_row` stays on screen.
pub const fn scroll_offset(total_rows: usize, max_visible_rows: usize, selected_row: usize) -> usize {
    if total_rows <= max_visible_rows || selected_row < max_visible_rows {
        return 0;
    }

    selected_row + 1 - max_visible_rows
}

/// Four-column grid, one cell per image. The cell's first line is the image's alt text.
pub fn render_asset_grid(f: &mut Frame<'_>, area: Rect, items: &[AssetItem], selected: usize) {
    let block = Block::default()
        .title(format!(" {} images ", items.len()))
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let total_rows = items.len().div_ceil(GRID_COLUMNS);
    let visible_rows = usize::from((inner.height / CELL_HEIGHT).max(1));
    let first_row = scroll_offset(total_rows, visible_rows, selected / GRID_COLUMNS);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CELL_HEIGHT); visible_rows])
        .split(inner);

    for (slot, row_area) in rows.iter().enumerate() {
        let row = first_row + slot;
        if row >= total_rows {
            break;
        }

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1); GRID_COLUMNS])
            .split(*row_area);

        for (column, cell_area) in cells.iter().enumerate() {
            let index = row * GRID_COLUMNS + column;
            if let Some(item) = items.get(index) {
                render_cell(f, *cell_area, item, index == selected);
            }
        }
    }
}

fn render_cell(f: &mut Frame<'_>, area: Rect, item: &AssetItem, selected: bool) {
    let border_style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let lines = vec![
        TextLine::from(Span::styled(
            item.name.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            item.image_url.as_str(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let cell = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(cell, area);
}
