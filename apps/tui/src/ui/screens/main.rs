use crate::app::gallery::{GalleryView, NOTHING_FOUND};
use crate::app::App;
use crate::ui::widgets::grid::render_asset_grid;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::Throbber;

const SEARCH_LABEL: &str = "Search";
const SEARCH_BUTTON_WIDTH: u16 = 12;
const ERROR_RED: Color = Color::Rgb(211, 47, 47);

/// Screen regions, shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub title: Rect,
    pub input: Rect,
    pub button: Rect,
    pub validation: Rect,
    pub content: Rect,
    pub status: Rect,
    pub shortcuts: Rect,
}

pub fn main_layout(area: Rect) -> MainLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title area
            Constraint::Length(3), // Address input and search button
            Constraint::Length(1), // Validation message
            Constraint::Min(5),    // Gallery
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(area.inner(Margin::new(2, 1)));

    let input_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(SEARCH_BUTTON_WIDTH)])
        .split(rows[1]);

    MainLayout {
        title: rows[0],
        input: input_row[0],
        button: input_row[1],
        validation: rows[2],
        content: rows[3],
        status: rows[4],
        shortcuts: rows[5],
    }
}

pub fn search_button_area(area: Rect) -> Rect {
    main_layout(area).button
}

pub fn render_main(app: &App, f: &mut Frame<'_>) {
    let area = f.area();
    let layout = main_layout(area);

    render_title_section(f, layout.title);
    render_input_section(app, f, layout.input);
    render_search_button(app, f, layout.button);
    render_validation_line(app, f, layout.validation);
    render_content_section(app, f, layout.content);
    render_status_section(app, f, layout.status);
    render_shortcuts(f, layout.shortcuts);

    if app.show_help {
        render_help_popup(f, area);
    }
}

fn render_title_section(f: &mut Frame<'_>, area: Rect) {
    let title = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "Address ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Gallery",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Left)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(title, area);
}

fn render_input_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let color = if app.gallery.is_valid() {
        Color::Green
    } else {
        ERROR_RED
    };

    let block = Block::default()
        .title(" Address ")
        .title_style(Style::default().fg(color))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let input = app.gallery.input();
    let line = if input.is_empty() {
        TextLine::from(vec![
            Span::styled("_", Style::default().fg(Color::Yellow)),
            Span::styled(" 0x...", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        TextLine::from(vec![
            Span::styled(input, Style::default().fg(Color::White)),
            Span::styled("_", Style::default().fg(Color::Yellow)),
        ])
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_search_button(app: &App, f: &mut Frame<'_>, area: Rect) {
    let style = if app.gallery.can_submit() {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let button = Paragraph::new(SEARCH_LABEL)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));

    f.render_widget(button, area);
}

fn render_validation_line(app: &App, f: &mut Frame<'_>, area: Rect) {
    if let Some(message) = app.gallery.validation_message() {
        let line = Paragraph::new(Span::styled(message, Style::default().fg(ERROR_RED)));
        f.render_widget(line, area.inner(Margin::new(1, 0)));
    }
}

fn render_content_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    match app.gallery.view() {
        GalleryView::InputOnly => {}
        GalleryView::Busy => render_busy(app, f, area),
        GalleryView::Nothing => {
            let nothing = Paragraph::new(Span::styled(
                NOTHING_FOUND,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center);
            f.render_widget(nothing, centered_line(area));
        }
        GalleryView::Grid(items) => render_asset_grid(f, area, items, app.selected_index),
        GalleryView::Error(message) => {
            let error = Paragraph::new(Span::styled(
                message,
                Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
            f.render_widget(error, centered_line(area));
        }
    }
}

fn render_busy(app: &App, f: &mut Frame<'_>, area: Rect) {
    let throbber = Throbber::default()
        .label("Loading...")
        .style(Style::default().fg(Color::Cyan))
        .throbber_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let line = centered_line(area);
    let width = line.width.min(14);
    let spinner_area = Rect {
        x: line.x + (line.width - width) / 2,
        width,
        ..line
    };

    let mut state = app.throbber_state.clone();
    f.render_stateful_widget(throbber, spinner_area, &mut state);
}

fn centered_line(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: area.height.min(2),
    }
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let status_text = if let Some(item) = app.selected_item() {
        let mut spans = vec![
            Span::styled(
                item.name.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(item.image_url.as_str(), Style::default().fg(Color::Cyan)),
        ];
        if let Some(permalink) = &item.permalink {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                permalink.as_str(),
                Style::default().fg(Color::Gray),
            ));
        }
        Text::from(TextLine::from(spans))
    } else {
        let style = if app.status_message.starts_with("Error") {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        Text::from(Span::styled(app.status_message.as_str(), style))
    };

    let status_paragraph = Paragraph::new(status_text)
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(status_paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let shortcuts = TextLine::from(vec![
        Span::styled("Enter", key_style),
        Span::raw(": Search   "),
        Span::styled("Ctrl+U", key_style),
        Span::raw(": Clear   "),
        Span::styled("Arrows", key_style),
        Span::raw(": Select   "),
        Span::styled("F1", key_style),
        Span::raw(": Help   "),
        Span::styled("Esc", key_style),
        Span::raw(": Quit"),
    ]);

    f.render_widget(
        Paragraph::new(shortcuts).alignment(Alignment::Center),
        area,
    );
}

fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect(60, 60, area);
    f.render_widget(ClearWidget, popup);

    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let help_line = |key: &'static str, action: &'static str| {
        TextLine::from(vec![
            Span::styled(format!("{key:<10}"), key_style),
            Span::raw(action),
        ])
    };

    let lines = vec![
        TextLine::from("Type a wallet address, then search for the images it owns."),
        TextLine::from(""),
        help_line("Enter", "Search (or click the Search button)"),
        help_line("Backspace", "Delete the last character"),
        help_line("Ctrl+U", "Clear the address and results"),
        help_line("Arrows", "Move through the grid"),
        help_line("Home/End", "First / last image"),
        help_line("F1", "Toggle this help"),
        help_line("Esc", "Close help, or quit"),
        help_line("Ctrl+C", "Quit"),
    ];

    let help = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(" Help ")
                .title_style(Style::default().fg(Color::Cyan))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(help, popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::{AppActions, FetchFinished};
    use crate::domain::AssetItem;
    use crate::provider::stub::StubProvider;
    use crate::provider::FetchError;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::Arc;

    const ADDRESS: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    fn app() -> App {
        App::new(AppActions::new(Arc::new(StubProvider::returning(Vec::new()))))
    }

    fn finish(app: &mut App, outcome: Result<Vec<AssetItem>, FetchError>) {
        app.edit_input(ADDRESS);
        let ticket = app.gallery.submit().unwrap();
        app.apply_fetch(FetchFinished {
            generation: ticket.generation,
            address: ticket.address,
            outcome,
        });
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render_main(app, f)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn images(n: usize) -> Vec<AssetItem> {
        (0..n)
            .map(|i| AssetItem::new(format!("Asset {i}"), format!("https://img/{i}.png")))
            .collect()
    }

    #[test]
    fn idle_shows_only_the_form() {
        let text = screen(&app());
        assert!(text.contains("Address"));
        assert!(text.contains(SEARCH_LABEL));
        assert!(!text.contains(NOTHING_FOUND));
        assert!(!text.contains("Loading..."));
        assert!(!text.contains("Wrong address"));
    }

    #[test]
    fn invalid_address_shows_inline_error() {
        let mut app = app();
        app.edit_input("notanaddress");
        assert!(screen(&app).contains("Wrong address"));
    }

    #[test]
    fn loading_shows_busy_indicator() {
        let mut app = app();
        app.edit_input(ADDRESS);
        app.gallery.submit().unwrap();
        assert!(screen(&app).contains("Loading..."));
    }

    #[test]
    fn single_result_shows_nothing_message() {
        let mut app = app();
        finish(&mut app, Ok(images(1)));
        assert!(screen(&app).contains("There is nothing!"));
    }

    #[test]
    fn error_message_is_rendered_verbatim() {
        let mut app = app();
        finish(&mut app, Err(FetchError::Timeout(5000)));
        let text = screen(&app);
        assert!(text.contains("timeout of 5000ms exceeded"));
        assert!(!text.contains("Loading..."));
    }

    #[test]
    fn grid_lays_items_out_four_per_row() {
        let mut app = app();
        finish(&mut app, Ok(images(5)));
        let text = screen(&app);

        let row_of = |needle: &str| {
            text.lines()
                .position(|line| line.contains(needle))
                .unwrap_or_else(|| panic!("{needle} not rendered"))
        };

        assert_eq!(row_of("Asset 0"), row_of("Asset 3"));
        assert!(row_of("Asset 4") > row_of("Asset 3"));
        assert!(text.contains("https://img/2.png"));
        assert!(text.contains("5 images"));
    }

    #[test]
    fn search_button_sits_right_of_input() {
        let layout = main_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.button.width, SEARCH_BUTTON_WIDTH);
        assert_eq!(layout.button.y, layout.input.y);
        assert_eq!(layout.input.right(), layout.button.x);
    }
}
