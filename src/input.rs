//! Terminal events to app inputs.
//!
//! Keyboard and mouse both funnel into the same `AppInput`s, so the rest of
//! the app never sees where an action came from.

use crate::game::Screen;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppInput {
    Jump,
    Fire,
    /// Character typed into the name field.
    Char(char),
    Backspace,
    /// Submit the score (Enter on game-over).
    Submit,
    /// Play again / continue back to the start screen.
    Continue,
    Quit,
}

/// Map a terminal event to an input for the given screen.
pub fn map_event(event: &Event, screen: Screen) -> Option<AppInput> {
    match event {
        Event::Key(key) => map_key(key, screen),
        Event::Mouse(mouse) => map_mouse(mouse, screen),
        _ => None,
    }
}

fn map_key(key: &KeyEvent, screen: Screen) -> Option<AppInput> {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(AppInput::Quit);
    }

    match screen {
        Screen::Start => match key.code {
            KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                Some(AppInput::Jump)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(AppInput::Quit),
            _ => None,
        },
        Screen::Playing => match key.code {
            KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                Some(AppInput::Jump)
            }
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('f') | KeyCode::Char('F') => {
                Some(AppInput::Fire)
            }
            _ => None,
        },
        // Name entry swallows printable keys
        Screen::Over => match key.code {
            KeyCode::Enter => Some(AppInput::Submit),
            KeyCode::Esc => Some(AppInput::Continue),
            KeyCode::Backspace => Some(AppInput::Backspace),
            KeyCode::Char(c) => Some(AppInput::Char(c)),
            _ => None,
        },
        Screen::Leaderboard => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc => Some(AppInput::Continue),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(AppInput::Quit),
            _ => None,
        },
    }
}

fn map_mouse(mouse: &MouseEvent, screen: Screen) -> Option<AppInput> {
    match (mouse.kind, screen) {
        (MouseEventKind::Down(MouseButton::Left), Screen::Start | Screen::Playing) => {
            Some(AppInput::Jump)
        }
        (MouseEventKind::Down(MouseButton::Right), Screen::Playing) => Some(AppInput::Fire),
        _ => None,
    }
}
