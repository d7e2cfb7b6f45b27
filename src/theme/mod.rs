pub mod color;

use crate::terminal::LineKind;
use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub use color::{ColorPalette, MenuColors, TerminalColors, ThemeColors};

/// Names accepted by `Theme::by_name`
pub const THEME_NAMES: &[&str] = &["gruvbox_dark", "classic"];

/// Main theme structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

impl Theme {
    /// Create a Gruvbox dark theme
    pub fn gruvbox_dark() -> Self {
        Self {
            name: "Gruvbox Dark".to_string(),
            description: "Retro groove dark theme with warm, earthy colors".to_string(),
            colors: ThemeColors::gruvbox_dark(),
        }
    }

    /// Create the classic console theme
    pub fn classic() -> Self {
        Self {
            name: "Classic".to_string(),
            description: "Black console with green command echoes".to_string(),
            colors: ThemeColors::classic(),
        }
    }

    /// Look up a theme by its config name
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().replace('-', "_").as_str() {
            "gruvbox_dark" | "gruvbox" => Some(Self::gruvbox_dark()),
            "classic" => Some(Self::classic()),
            _ => None,
        }
    }

    /// Style for a transcript row of the given kind
    pub fn line_style(&self, kind: LineKind) -> Style {
        let terminal = &self.colors.terminal;
        match kind {
            LineKind::Command => Style::default().fg(terminal.command),
            LineKind::Output => Style::default().fg(terminal.output),
            LineKind::Error => Style::default().fg(terminal.error),
        }
    }

    pub fn prompt_style(&self) -> Style {
        Style::default()
            .fg(self.colors.terminal.prompt)
            .add_modifier(Modifier::BOLD)
    }

    /// Input field style; dimmed while the field is disabled
    pub fn input_style(&self, enabled: bool) -> Style {
        if enabled {
            Style::default().fg(self.colors.terminal.input)
        } else {
            Style::default().fg(self.colors.terminal.input_disabled)
        }
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.colors.palette.border_focused)
        } else {
            Style::default().fg(self.colors.palette.border)
        }
    }

    /// Screen background
    pub fn base_style(&self) -> Style {
        Style::default()
            .bg(self.colors.palette.background)
            .fg(self.colors.palette.text_primary)
    }

    /// Raised strip (hints bar)
    pub fn surface_style(&self) -> Style {
        Style::default()
            .bg(self.colors.palette.surface)
            .fg(self.colors.palette.text_muted)
    }

    /// Highlighted menu row
    pub fn selection_style(&self) -> Style {
        Style::default()
            .bg(self.colors.palette.selection)
            .fg(self.colors.palette.selection_text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn validate_accessibility(&self) -> Result<(), String> {
        self.colors.validate_contrast_ratios()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::gruvbox_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_lookup() {
        assert_eq!(Theme::by_name("gruvbox_dark").unwrap().name, "Gruvbox Dark");
        assert_eq!(Theme::by_name("Gruvbox-Dark").unwrap().name, "Gruvbox Dark");
        assert_eq!(Theme::by_name("classic").unwrap().name, "Classic");
        assert!(Theme::by_name("neon").is_none());
        for name in THEME_NAMES {
            assert!(Theme::by_name(name).is_some());
        }
    }

    #[test]
    fn test_line_styles_differ_by_kind() {
        let theme = Theme::classic();
        assert_ne!(
            theme.line_style(LineKind::Error),
            theme.line_style(LineKind::Output)
        );
        assert_eq!(
            theme.line_style(LineKind::Command).fg,
            Some(theme.colors.terminal.command)
        );
    }

    #[test]
    fn test_selection_style_uses_palette() {
        let theme = Theme::gruvbox_dark();
        let style = theme.selection_style();
        assert_eq!(style.bg, Some(theme.colors.palette.selection));
        assert_eq!(style.fg, Some(theme.colors.palette.selection_text));
        assert_eq!(theme.surface_style().bg, Some(theme.colors.palette.surface));
        assert_eq!(theme.base_style().bg, Some(theme.colors.palette.background));
    }

    #[test]
    fn test_contrast_check_rejects_dim_text() {
        let mut theme = Theme::classic();
        theme.colors.palette.background = ratatui::style::Color::Rgb(250, 250, 250);
        theme.colors.palette.text_primary = ratatui::style::Color::Rgb(240, 240, 240);
        assert!(theme.validate_accessibility().is_err());
    }

    #[test]
    fn test_themes_pass_contrast_check() {
        assert!(Theme::gruvbox_dark().validate_accessibility().is_ok());
        assert!(Theme::classic().validate_accessibility().is_ok());
    }
}
