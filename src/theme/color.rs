use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Base palette shared by every component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    // Base colors
    pub background: Color,
    pub surface: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub selection_text: Color,

    // Status colors
    pub success: Color,
    pub error: Color,

    pub disabled: Color,
}

/// Complete theme color scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub palette: ColorPalette,

    // Component-specific colors
    pub terminal: TerminalColors,
    pub menu: MenuColors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalColors {
    pub prompt: Color,
    pub command: Color,
    pub output: Color,
    pub error: Color,
    pub input: Color,
    pub input_disabled: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuColors {
    pub number: Color,
    pub label: Color,
    pub preview: Color,
}

impl ThemeColors {
    /// Gruvbox dark theme - authentic retro groove colors
    pub fn gruvbox_dark() -> Self {
        let palette = ColorPalette {
            background: Color::Rgb(40, 40, 40), // #282828 - dark0
            surface: Color::Rgb(60, 56, 54),    // #3c3836 - dark1

            text_primary: Color::Rgb(235, 219, 178), // #ebdbb2 - light1
            text_secondary: Color::Rgb(213, 196, 161), // #d5c4a1 - light2
            text_muted: Color::Rgb(189, 174, 147),   // #bdae93 - light3

            border: Color::Rgb(102, 92, 84), // #665c54 - dark4
            border_focused: Color::Rgb(131, 165, 152), // #83a598 - bright_blue
            selection: Color::Rgb(131, 165, 152), // #83a598 - bright_blue
            selection_text: Color::Rgb(40, 40, 40), // #282828 - dark0

            success: Color::Rgb(184, 187, 38), // #b8bb26 - bright_green
            error: Color::Rgb(251, 73, 52),    // #fb4934 - bright_red

            disabled: Color::Rgb(146, 131, 116), // #928374 - gray
        };

        Self {
            palette: palette.clone(),
            terminal: TerminalColors {
                prompt: palette.success,
                command: palette.success,
                output: palette.text_primary,
                error: palette.error,
                input: palette.text_primary,
                input_disabled: palette.disabled,
            },
            menu: MenuColors {
                number: palette.text_muted,
                label: palette.text_secondary,
                preview: palette.text_primary,
            },
        }
    }

    /// Black console with green echoes
    pub fn classic() -> Self {
        let palette = ColorPalette {
            background: Color::Black,
            surface: Color::Rgb(20, 20, 20),

            text_primary: Color::White,
            text_secondary: Color::Rgb(212, 212, 212),
            text_muted: Color::Rgb(128, 128, 128),

            border: Color::Rgb(64, 64, 64),
            border_focused: Color::Rgb(34, 197, 94),
            selection: Color::Rgb(34, 197, 94),
            selection_text: Color::Black,

            success: Color::Rgb(74, 222, 128), // green-400
            error: Color::Rgb(248, 113, 113),  // red-400

            disabled: Color::Rgb(96, 96, 96),
        };

        Self {
            palette: palette.clone(),
            terminal: TerminalColors {
                prompt: palette.success,
                command: palette.success,
                output: palette.text_primary,
                error: palette.error,
                input: palette.text_primary,
                input_disabled: palette.disabled,
            },
            menu: MenuColors {
                number: palette.text_muted,
                label: palette.text_primary,
                preview: palette.text_secondary,
            },
        }
    }

    /// Validate contrast between text and background
    pub fn validate_contrast_ratios(&self) -> Result<(), String> {
        if self.is_similar_color(self.palette.text_primary, self.palette.background) {
            return Err("Insufficient contrast between primary text and background".to_string());
        }
        if self.is_similar_color(self.terminal.error, self.palette.background) {
            return Err("Insufficient contrast between error text and background".to_string());
        }
        Ok(())
    }

    fn is_similar_color(&self, color1: Color, color2: Color) -> bool {
        match (color1, color2) {
            (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
                let diff = ((r1 as i32 - r2 as i32).abs()
                    + (g1 as i32 - g2 as i32).abs()
                    + (b1 as i32 - b2 as i32).abs()) as f32;
                diff < 150.0
            }
            _ => false,
        }
    }
}
