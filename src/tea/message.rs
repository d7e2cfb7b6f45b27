/// Central message type following the TEA pattern
///
/// Key presses, timer expiries and reveal ticks all flow through this
/// type into `update`.
use crossterm::event::KeyEvent;
use uuid::Uuid;

/// Main application message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// System-level messages
    System(SystemMessage),

    /// UI interaction messages
    UI(UIMessage),

    /// Terminal view messages
    Terminal(TerminalMessage),

    /// Section menu messages
    Menu(MenuMessage),
}

/// System-level messages for application lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemMessage {
    /// Application should quit
    Quit,

    /// Resize terminal
    Resize(u16, u16),

    /// Tick for periodic updates
    Tick,
}

/// UI-related messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UIMessage {
    /// Raw keyboard input, mapped according to the current screen
    KeyPressed(KeyEvent),

    /// Switch screens; entering the terminal mounts a fresh session
    Navigate(Screen),
}

/// Messages for the mounted terminal
///
/// Deferred messages carry the session id they were scheduled for, so a
/// late timer never touches a newer session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalMessage {
    InputChar(char),
    Backspace,
    Submit,

    /// Reveal one more character
    RevealTick,

    /// Deferred part of `clear`
    ClearTranscript(Uuid),

    /// Deferred focus after mount
    FocusInput(Uuid),

    ScrollUp,
    ScrollDown,
    ScrollTop,

    /// Leave the terminal view
    Close,
}

/// Section menu messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuMessage {
    Next,
    Previous,
    Select(usize),
    Activate,
}

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Terminal,
    Menu,
}
