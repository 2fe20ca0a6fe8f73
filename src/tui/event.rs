use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::Screen;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    Escape,
    Submit,
    CursorUp,
    CursorDown,
    NextTab,
    PrevTab,
    JumpTab(Screen),
    ShowProducts,
    ToggleView,
    CycleFilter,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {e}");
            return None;
        }
    }
    match event::read() {
        Ok(Event::Key(key_event)) if key_event.kind == KeyEventKind::Press => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event.code, key_event.modifiers)
        }
        Ok(Event::Resize(_, _)) => Some(TuiEvent::Resize),
        Ok(_) => None,
        Err(e) => {
            log::warn!("Event read failed: {e}");
            None
        }
    }
}

fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Option<TuiEvent> {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Tab) | (_, KeyCode::Right) => Some(TuiEvent::NextTab),
        (_, KeyCode::BackTab) | (_, KeyCode::Left) => Some(TuiEvent::PrevTab),
        (_, KeyCode::Char('1')) => Some(TuiEvent::JumpTab(Screen::Participants)),
        (_, KeyCode::Char('2')) => Some(TuiEvent::JumpTab(Screen::Offers)),
        (_, KeyCode::Char('3')) => Some(TuiEvent::JumpTab(Screen::News)),
        (_, KeyCode::Char('p')) => Some(TuiEvent::ShowProducts),
        (_, KeyCode::Char('v')) => Some(TuiEvent::ToggleView),
        (_, KeyCode::Char('c')) => Some(TuiEvent::CycleFilter),
        _ => None,
    }
}
