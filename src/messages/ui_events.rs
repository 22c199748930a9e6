//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::routes::Route;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    // Selection
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Select,

    // Navigation
    Back,
    Refresh,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on the current route
pub fn key_to_ui_event(key: KeyEvent, route: Route, show_help: bool) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UiEvent::Quit),
            _ => None,
        };
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        KeyCode::Char('r') => return Some(UiEvent::Refresh),
        KeyCode::Esc | KeyCode::Backspace => return Some(UiEvent::Back),
        _ => {}
    }

    match route {
        Route::Main => handle_main_keys(key),
        Route::Meals => handle_meals_keys(key),
        Route::DishDetail => None,
    }
}

/// Category grid keys
fn handle_main_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(UiEvent::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(UiEvent::MoveRight),
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiEvent::Select),
        _ => None,
    }
}

/// Meal list keys
fn handle_meals_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::MoveDown),
        _ => None,
    }
}
