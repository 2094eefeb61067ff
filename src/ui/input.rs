//! Keyboard dispatch: raw key codes to input events, and the focus state
//! machine that turns an event into an action.

use super::pane::FocusState;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rustc_hash::FxHashMap;

/// The input alphabet of the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Quit,
    Enter,
    Tab,
    Up,
    Down,
    Resize,
}

/// What the application should do in response to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Enter the selected directory or open the selected file for editing
    Open,
    ToggleFocus,
    MoveUp,
    MoveDown,
    Relayout,
    Ignore,
}

/// The transition table: which action `event` triggers while `state` is current
pub fn transition(state: FocusState, event: InputEvent) -> Action {
    match (state, event) {
        (_, InputEvent::Quit) => Action::Quit,
        (_, InputEvent::Tab) => Action::ToggleFocus,
        (_, InputEvent::Resize) => Action::Relayout,
        (FocusState::Directory, InputEvent::Enter) => Action::Open,
        (FocusState::Directory, InputEvent::Up) => Action::MoveUp,
        (FocusState::Directory, InputEvent::Down) => Action::MoveDown,
        (FocusState::Editor | FocusState::None, _) => Action::Ignore,
    }
}

/// Key code to event lookup. Characters are matched case-insensitively.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: FxHashMap<KeyCode, InputEvent>,
}

impl KeyBindings {
    pub fn new() -> Self {
        KeyBindings {
            map: FxHashMap::default(),
        }
    }

    pub fn bind(&mut self, code: KeyCode, event: InputEvent) {
        self.map.insert(normalize(code), event);
    }

    pub fn lookup(&self, key: &KeyEvent) -> Option<InputEvent> {
        // Raw mode swallows SIGINT, so Ctrl+C has to quit explicitly
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(InputEvent::Quit);
        }
        // Shift only changes case; any other modifier makes a different chord
        if !key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
            return None;
        }
        self.map.get(&normalize(key.code)).copied()
    }

    /// Translate a terminal event, dropping anything unbound.
    ///
    /// Only key presses count; release and repeat reports are ignored.
    pub fn translate(&self, event: &Event) -> Option<InputEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.lookup(key),
            Event::Resize(_, _) => Some(InputEvent::Resize),
            _ => None,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = KeyBindings::new();
        bindings.bind(KeyCode::Char('q'), InputEvent::Quit);
        bindings.bind(KeyCode::Enter, InputEvent::Enter);
        bindings.bind(KeyCode::Tab, InputEvent::Tab);
        bindings.bind(KeyCode::Up, InputEvent::Up);
        bindings.bind(KeyCode::Down, InputEvent::Down);
        bindings
    }
}

fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}
