use crate::tea::message::{MenuMessage, Message, Screen, SystemMessage, TerminalMessage, UIMessage};
use crate::tea::Model;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translates crossterm events into application messages
pub struct EventHandler;

impl EventHandler {
    /// Map a raw crossterm event
    pub fn handle_event(event: Event) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                Some(Message::UI(UIMessage::KeyPressed(key)))
            }
            Event::Resize(width, height) => Some(Message::System(SystemMessage::Resize(width, height))),
            _ => None,
        }
    }

    /// Map a key press according to the current screen
    pub fn map_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            return Some(Message::System(SystemMessage::Quit));
        }

        match model.screen {
            Screen::Terminal => Self::map_terminal_key(key),
            Screen::Menu => Self::map_menu_key(key),
        }
    }

    fn map_terminal_key(key: KeyEvent) -> Option<Message> {
        let message = match key.code {
            KeyCode::Enter => TerminalMessage::Submit,
            KeyCode::Backspace => TerminalMessage::Backspace,
            KeyCode::Esc | KeyCode::Tab => TerminalMessage::Close,
            KeyCode::PageUp | KeyCode::Up => TerminalMessage::ScrollUp,
            KeyCode::PageDown | KeyCode::Down => TerminalMessage::ScrollDown,
            KeyCode::Home => TerminalMessage::ScrollTop,
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                TerminalMessage::InputChar(ch)
            }
            _ => return None,
        };
        Some(Message::Terminal(message))
    }

    fn map_menu_key(key: KeyEvent) -> Option<Message> {
        let message = match key.code {
            KeyCode::Down | KeyCode::Char('j') => Message::Menu(MenuMessage::Next),
            KeyCode::Up | KeyCode::Char('k') => Message::Menu(MenuMessage::Previous),
            KeyCode::Enter => Message::Menu(MenuMessage::Activate),
            KeyCode::Char('t') => Message::UI(UIMessage::Navigate(Screen::Terminal)),
            KeyCode::Char(ch @ '1'..='9') => {
                Message::Menu(MenuMessage::Select(ch as usize - '1' as usize))
            }
            KeyCode::Esc | KeyCode::Char('q') => Message::System(SystemMessage::Quit),
            _ => return None,
        };
        Some(message)
    }
}
