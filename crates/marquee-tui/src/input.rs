use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    Previous,
    Next,
    JumpTo(usize), // 0-based indicator position
    None,
}

/// Screen regions that react to clicks, filled in while drawing
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub previous: Option<Rect>,
    pub next: Option<Rect>,
    pub indicators: Vec<Rect>,
}

impl HitAreas {
    pub fn clear(&mut self) {
        self.previous = None;
        self.next = None;
        self.indicators.clear();
    }
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap) -> Action {
    if let Some(action) = keymap.get(&KeyBinding::new(key.code, key.modifiers)) {
        return *action;
    }

    // Digits jump straight to an indicator
    match (key.code, key.modifiers) {
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::JumpTo(c as usize - '1' as usize)
        }
        _ => Action::None,
    }
}

/// Handle a mouse event against the last drawn hit areas
pub fn handle_mouse_event(mouse: MouseEvent, hit_areas: &HitAreas) -> Action {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Action::None;
    }

    let position = Position::new(mouse.column, mouse.row);

    if hit_areas.previous.is_some_and(|area| area.contains(position)) {
        return Action::Previous;
    }
    if hit_areas.next.is_some_and(|area| area.contains(position)) {
        return Action::Next;
    }

    hit_areas
        .indicators
        .iter()
        .position(|area| area.contains(position))
        .map(Action::JumpTo)
        .unwrap_or(Action::None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_default_keys() {
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(key(KeyCode::Char('h')), &keymap), Action::Previous);
        assert_eq!(handle_key_event(key(KeyCode::Char('l')), &keymap), Action::Next);
        assert_eq!(handle_key_event(key(KeyCode::Left), &keymap), Action::Previous);
        assert_eq!(handle_key_event(key(KeyCode::Right), &keymap), Action::Next);
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &keymap), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Home), &keymap), Action::JumpTo(0));
    }

    #[test]
    fn test_digits_jump() {
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(key(KeyCode::Char('1')), &keymap), Action::JumpTo(0));
        assert_eq!(handle_key_event(key(KeyCode::Char('9')), &keymap), Action::JumpTo(8));
        assert_eq!(handle_key_event(key(KeyCode::Char('0')), &keymap), Action::None);
    }

    #[test]
    fn test_mouse_hits() {
        let hit_areas = HitAreas {
            previous: Some(Rect::new(0, 0, 3, 10)),
            next: Some(Rect::new(77, 0, 3, 10)),
            indicators: vec![Rect::new(30, 11, 2, 1), Rect::new(32, 11, 2, 1)],
        };
        assert_eq!(handle_mouse_event(click(1, 5), &hit_areas), Action::Previous);
        assert_eq!(handle_mouse_event(click(78, 5), &hit_areas), Action::Next);
        assert_eq!(handle_mouse_event(click(33, 11), &hit_areas), Action::JumpTo(1));
        assert_eq!(handle_mouse_event(click(40, 5), &hit_areas), Action::None);
    }

    #[test]
    fn test_mouse_release_ignored() {
        let hit_areas = HitAreas {
            previous: Some(Rect::new(0, 0, 3, 10)),
            ..HitAreas::default()
        };
        let mut release = click(1, 5);
        release.kind = MouseEventKind::Up(MouseButton::Left);
        assert_eq!(handle_mouse_event(release, &hit_areas), Action::None);
    }
}
