/// Application model following TEA pattern
///
/// Holds all application state; `update` is the only place it changes.
use crate::config::AppConfig;
use crate::tea::message::Screen;
use crate::terminal::{Catalogue, TerminalSession};
use crate::theme::Theme;
use crate::ui::terminal_view::AutoScroll;
use tokio::time::Instant;

/// Main application model containing all state
#[derive(Debug, Clone)]
pub struct Model {
    /// Application lifecycle state
    pub app_state: AppState,

    /// Current screen
    pub screen: Screen,

    /// Section menu state
    pub menu: MenuState,

    /// Mounted terminal, if the terminal screen is active
    pub terminal: Option<TerminalView>,

    /// Application configuration
    pub config: AppConfig,

    /// Theme settings
    pub theme: Theme,
}

/// Application lifecycle state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Whether the application should quit
    pub should_quit: bool,

    /// Terminal dimensions
    pub terminal_size: (u16, u16),

    /// Last tick time for periodic updates
    pub last_tick: Instant,

    /// Application start time
    pub start_time: Instant,
}

/// A mounted terminal plus its view-only state
#[derive(Debug, Clone)]
pub struct TerminalView {
    pub session: TerminalSession,

    /// Input accepts keystrokes only after the deferred focus
    pub focused: bool,

    pub scroll: AutoScroll,
}

impl TerminalView {
    /// Mount a fresh session from configuration
    pub fn mount(config: &AppConfig) -> Self {
        let session = config.mount_session().unwrap_or_else(|e| {
            tracing::warn!("Invalid command table, using built-in: {}", e);
            let profile = config.resolve_profile();
            let catalogue = profile.builtin_catalogue();
            TerminalSession::mount(profile, catalogue)
        });
        Self {
            session,
            focused: false,
            scroll: AutoScroll::default(),
        }
    }

    /// The input field is enabled once focused and while nothing is typing
    pub fn input_enabled(&self) -> bool {
        self.focused && !self.session.is_typing()
    }
}

/// Menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Catalogue command shown in the preview, `None` for the terminal entry
    pub id: Option<String>,
    pub label: String,
    pub number: String,
}

/// Section menu state
#[derive(Debug, Clone)]
pub struct MenuState {
    pub items: Vec<MenuItem>,
    pub selected: usize,
}

impl MenuState {
    pub fn new() -> Self {
        let sections = ["about", "skills", "experience", "projects", "education", "contact"];
        let mut items: Vec<MenuItem> = sections
            .iter()
            .enumerate()
            .map(|(index, id)| MenuItem {
                id: Some(id.to_string()),
                label: id.to_uppercase(),
                number: format!("{:02}", index + 1),
            })
            .collect();
        items.push(MenuItem {
            id: None,
            label: "TERMINAL".to_string(),
            number: ">_".to_string(),
        });

        Self { items, selected: 0 }
    }

    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.items.get(self.selected)
    }

    pub fn next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + self.items.len() - 1) % self.items.len();
        }
    }

    /// Body shown next to the selected section
    pub fn preview<'a>(&self, catalogue: &'a Catalogue) -> Option<&'a str> {
        let id = self.selected_item()?.id.as_deref()?;
        catalogue.get(id).map(|entry| entry.body.as_str())
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    pub fn new(config: AppConfig) -> Self {
        let now = Instant::now();
        let theme = config.theme();
        if let Err(e) = theme.validate_accessibility() {
            tracing::warn!("Theme '{}' has low contrast: {}", theme.name, e);
        }
        Self {
            app_state: AppState {
                should_quit: false,
                terminal_size: (80, 24),
                last_tick: now,
                start_time: now,
            },
            screen: Screen::Menu,
            menu: MenuState::new(),
            terminal: None,
            config,
            theme,
        }
    }

    /// Whether a reveal is in flight in the mounted terminal
    pub fn is_typing(&self) -> bool {
        self.terminal
            .as_ref()
            .map(|view| view.session.is_typing())
            .unwrap_or(false)
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
