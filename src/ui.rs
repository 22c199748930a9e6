//! Screen rendering - pure functions from [`RenderState`] to a frame

use ratatui::{prelude::*, widgets::*};

use crate::constants::{APP_NAME, APP_VERSION};
use crate::messages::RenderState;
use crate::models::{Category, LoadState, Meal};
use crate::routes::Route;

/// Rows taken by one category card (borders + name + thumbnail)
pub const CARD_HEIGHT: u16 = 4;

const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Spinner glyph for the given UI tick
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// First grid row to draw so that `selected_row` stays visible
pub fn grid_offset(selected_row: usize, visible_rows: usize) -> usize {
    let visible_rows = visible_rows.max(1);
    if selected_row < visible_rows {
        0
    } else {
        selected_row + 1 - visible_rows
    }
}

pub fn draw_ui(f: &mut Frame, state: &RenderState, tick: usize) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, state, chunks[0]);

    match state.route {
        Route::Main => draw_load_state(f, chunks[1], &state.categories, tick, |f, area, categories| {
            draw_category_grid(f, area, categories, state.selected_category, state.grid_columns)
        }),
        Route::Meals => draw_load_state(f, chunks[1], &state.meals, tick, |f, area, meals| {
            draw_meal_list(f, area, meals, state.selected_meal)
        }),
        Route::DishDetail => {}
    }

    draw_status_bar(f, state, chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

/// Pick exactly one branch from the load state
fn draw_load_state<T>(
    f: &mut Frame,
    area: Rect,
    state: &LoadState<T>,
    tick: usize,
    on_success: impl FnOnce(&mut Frame, Rect, &T),
) {
    match state {
        LoadState::Loading => draw_loading(f, area, tick),
        LoadState::Error(message) => draw_error(f, area, message),
        LoadState::Success(value) => on_success(f, area, value),
    }
}

fn draw_header(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut spans = vec![
        Span::styled(format!(" {} ", APP_NAME), Style::default().fg(Color::Black).bg(Color::Cyan).bold()),
        Span::raw(" "),
        Span::styled(state.route.title(), Style::default().fg(Color::Cyan).bold()),
    ];
    if state.route == Route::Meals {
        if let Some(category) = &state.chosen_category {
            spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(category.clone(), Style::default().fg(Color::Yellow)));
        }
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_loading(f: &mut Frame, area: Rect, tick: usize) {
    let lines = vec![
        Line::from(Span::styled(spinner_frame(tick), Style::default().fg(Color::Cyan).bold())),
        Line::from(""),
        Line::from("Loading..."),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, vertically_centered(area, 3));
}

fn draw_error(f: &mut Frame, area: Rect, message: &str) {
    let text = format!("Error: {}", message);
    // One spare row for wrap points the word count does not predict
    let height = wrapped_height(&text, area.width)
        .saturating_add(1)
        .min(area.height);
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, vertically_centered(area, height));
}

/// Rows `text` needs when word-wrapped to `width` columns
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let mut rows = 1usize;
    let mut used = 0usize;

    for word in text.split_whitespace() {
        let len = word.chars().count();
        if used == 0 {
            rows += len.saturating_sub(1) / width;
            used = (len - 1) % width + 1;
        } else if used + 1 + len <= width {
            used += 1 + len;
        } else {
            rows += 1 + len.saturating_sub(1) / width;
            used = (len - 1) % width + 1;
        }
    }
    rows.min(u16::MAX as usize) as u16
}

fn draw_category_grid(f: &mut Frame, area: Rect, categories: &[Category], selected: usize, columns: usize) {
    if categories.is_empty() || area.height == 0 {
        return;
    }
    let columns = columns.max(1);
    let total_rows = categories.len().div_ceil(columns);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let first_row = grid_offset(selected / columns, visible_rows);
    let last_row = total_rows.min(first_row + visible_rows);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    for (slot, row) in (first_row..last_row).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_areas[slot]);

        for col in 0..columns {
            let index = row * columns + col;
            if let Some(category) = categories.get(index) {
                draw_card(f, cells[col], &category.name, &category.thumbnail_url, index == selected);
            }
        }
    }
}

fn draw_card(f: &mut Frame, area: Rect, name: &str, thumbnail_url: &str, selected: bool) {
    let border_style = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let name_style = if selected {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::White).bold()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let lines = vec![
        Line::from(Span::styled(name.to_string(), name_style)),
        Line::from(Span::styled(thumbnail_url.to_string(), Style::default().fg(Color::DarkGray))),
    ];
    let card = Paragraph::new(lines).block(block).alignment(Alignment::Center);
    f.render_widget(card, area);
}

fn draw_meal_list(f: &mut Frame, area: Rect, meals: &[Meal], selected: usize) {
    if meals.is_empty() {
        return;
    }

    let items: Vec<ListItem> = meals
        .iter()
        .map(|meal| {
            ListItem::new(vec![
                Line::from(Span::styled(meal.name.clone(), Style::default().bold())),
                Line::from(Span::styled(meal.thumbnail_url.clone(), Style::default().fg(Color::DarkGray))),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!(" {} meals ", meals.len())),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(selected.min(meals.len() - 1)));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = match state.route {
        Route::Main => " arrows:move | Enter:open | r:refresh | ?:help | q:quit ",
        Route::Meals => " ↑/↓:move | Esc:back | r:refresh | ?:help | q:quit ",
        Route::DishDetail => " Esc:back | q:quit ",
    };
    let bar = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = format!(
        r#"
 {} v{}

 CATEGORIES
   arrows / h j k l   Move selection
   Enter / Space      Show meals of category

 MEALS
   ↑ / ↓ / k / j      Move selection
   Esc / Backspace    Back to categories

 GENERAL
   r                  Refresh current screen
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#,
        APP_NAME, APP_VERSION
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn vertically_centered(area: Rect, height: u16) -> Rect {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(height), Constraint::Fill(1)])
        .split(area)[1]
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn render(state: &RenderState) -> String {
        render_sized(state, 60, 20)
    }

    fn render_sized(state: &RenderState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw_ui(f, state, 0)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buf: &Buffer) -> String {
        let width = buf.area.width as usize;
        buf.content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn meals_state(meals: LoadState<Vec<Meal>>) -> RenderState {
        RenderState {
            route: Route::Meals,
            chosen_category: Some("Seafood".into()),
            meals,
            ..RenderState::default()
        }
    }

    #[test]
    fn test_loading_shows_spinner() {
        let text = render(&RenderState::default());
        assert!(text.contains("Loading..."));
        assert!(text.contains(spinner_frame(0)));
        assert!(!text.contains("Error:"));
    }

    #[test]
    fn test_error_shows_message() {
        let state = RenderState {
            categories: LoadState::Error("timeout".into()),
            ..RenderState::default()
        };
        let text = render(&state);
        assert!(text.contains("Error: timeout"));
        assert!(!text.contains("Loading..."));
    }

    #[test]
    fn test_long_error_not_truncated_on_narrow_terminal() {
        let state = RenderState {
            categories: LoadState::Error(
                "Connection failed: error sending request: tcp connect error: Connection refused (os error 111)"
                    .into(),
            ),
            ..RenderState::default()
        };
        let text = render_sized(&state, 24, 14);
        assert!(text.contains("Error:"));
        assert!(text.contains("111)"));
    }

    #[test]
    fn test_wrapped_height() {
        assert_eq!(wrapped_height("Error: timeout", 60), 1);
        assert_eq!(wrapped_height("aaaa bbbb cccc", 9), 2);
        assert_eq!(wrapped_height("abcdefghij", 4), 3);
        assert_eq!(wrapped_height("", 10), 1);
    }

    #[test]
    fn test_single_category_card() {
        let state = RenderState {
            categories: LoadState::Success(vec![Category::new("Beef", "url1")]),
            ..RenderState::default()
        };
        let text = render(&state);
        assert!(text.contains("Beef"));
        assert!(text.contains("url1"));
        assert_eq!(text.matches("Beef").count(), 1);
    }

    #[test]
    fn test_empty_success_renders_empty_container() {
        let state = RenderState {
            categories: LoadState::Success(vec![]),
            ..RenderState::default()
        };
        let text = render(&state);
        assert!(!text.contains("Loading..."));
        assert!(!text.contains("Error:"));

        let text = render(&meals_state(LoadState::Success(vec![])));
        assert!(!text.contains("Loading..."));
        assert!(!text.contains("Error:"));
        assert!(!text.contains("meals "));
    }

    #[test]
    fn test_meal_list_with_chosen_category() {
        let text = render(&meals_state(LoadState::Success(vec![
            Meal::new("Sushi", "sushi.png"),
            Meal::new("Paella", "paella.png"),
        ])));
        assert!(text.contains("Seafood"));
        assert!(text.contains("> Sushi"));
        assert!(text.contains("Paella"));
        assert!(text.contains("paella.png"));
    }

    #[test]
    fn test_meals_error_independent_of_categories() {
        let mut state = meals_state(LoadState::Error("HTTP 500".into()));
        state.categories = LoadState::Success(vec![Category::new("Beef", "url1")]);
        let text = render(&state);
        assert!(text.contains("Error: HTTP 500"));
        assert!(!text.contains("url1"));
    }

    #[test]
    fn test_grid_scrolls_to_selection() {
        let categories = (0..12).map(|i| Category::new(format!("Cat{:02}", i), "")).collect();
        let state = RenderState {
            categories: LoadState::Success(categories),
            selected_category: 11,
            ..RenderState::default()
        };
        // 18 content rows / 4 per card = 4 visible rows of 2
        let text = render(&state);
        assert!(text.contains("Cat11"));
        assert!(!text.contains("Cat00"));
    }

    #[test]
    fn test_help_popup() {
        let state = RenderState {
            show_help: true,
            ..RenderState::default()
        };
        assert!(render(&state).contains("Help"));
    }

    #[test]
    fn test_grid_offset() {
        assert_eq!(grid_offset(0, 4), 0);
        assert_eq!(grid_offset(3, 4), 0);
        assert_eq!(grid_offset(4, 4), 1);
        assert_eq!(grid_offset(5, 0), 5);
    }
}
