use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::dashboard::{Dashboard, InputEdit};

/// What a key press means to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Edit(InputEdit),
    ClearInput,
    Submit,
    Remove,
    MoveSelection(isize),
    Refresh,
    Quit,
}

pub fn translate_key(key: KeyEvent) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('u') => Some(UiEvent::ClearInput),
            KeyCode::Char('r') => Some(UiEvent::Refresh),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(UiEvent::Quit),
        KeyCode::Enter => Some(UiEvent::Submit),
        KeyCode::Delete => Some(UiEvent::Remove),
        KeyCode::F(5) => Some(UiEvent::Refresh),
        KeyCode::Up => Some(UiEvent::MoveSelection(-1)),
        KeyCode::Down => Some(UiEvent::MoveSelection(1)),
        KeyCode::PageUp => Some(UiEvent::MoveSelection(-10)),
        KeyCode::PageDown => Some(UiEvent::MoveSelection(10)),
        KeyCode::Backspace => Some(UiEvent::Edit(InputEdit::Backspace)),
        KeyCode::Char(c) => Some(UiEvent::Edit(InputEdit::Insert(c.to_string()))),
        _ => None,
    }
}

/// Pasted text goes into the input field; line breaks are dropped.
pub fn translate_paste(text: &str) -> Option<UiEvent> {
    let line: String = text.chars().filter(|c| !c.is_control()).collect();
    (!line.is_empty()).then_some(UiEvent::Edit(InputEdit::Insert(line)))
}

/// Forward a UI event into the pipeline. `Quit` is the caller's business.
pub fn dispatch(dashboard: &Dashboard, event: UiEvent) {
    match event {
        UiEvent::Edit(edit) => dashboard.edit_input(edit),
        UiEvent::ClearInput => dashboard.input_changed(String::new()),
        UiEvent::Submit => dashboard.submit_add(),
        UiEvent::Remove => dashboard.submit_remove(),
        UiEvent::MoveSelection(delta) => dashboard.move_selection(delta),
        UiEvent::Refresh => dashboard.refresh(),
        UiEvent::Quit => {}
    }
}
