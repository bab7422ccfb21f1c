use crossterm::event::{self, Event, KeyCode, KeyModifiers};

/// TUI-specific input events
pub enum TuiEvent {
    Quit,
    ForceQuit, // Ctrl+C
    FocusNext, // Tab between the inventory and cart panels
    CursorUp,
    CursorDown,
    Increment, // Right / '+' on the selected inventory row
    Decrement, // Left / '-' on the selected inventory row
    AddSelected,
    DeleteSelected,
    Checkout,
    Resize,
}

/// Poll for an event with a timeout (blocks up to `timeout`)
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                    (_, KeyCode::Tab) => Some(TuiEvent::FocusNext),
                    (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                    (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                    (_, KeyCode::Right) | (_, KeyCode::Char('+')) => Some(TuiEvent::Increment),
                    (_, KeyCode::Left) | (_, KeyCode::Char('-')) => Some(TuiEvent::Decrement),
                    (_, KeyCode::Enter) | (_, KeyCode::Char('a')) => Some(TuiEvent::AddSelected),
                    (_, KeyCode::Delete) | (_, KeyCode::Char('d')) => {
                        Some(TuiEvent::DeleteSelected)
                    }
                    (_, KeyCode::Char('c')) => Some(TuiEvent::Checkout),
                    _ => None,
                }
            }
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
