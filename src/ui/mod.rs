pub mod menu;
pub mod terminal_view;

use crate::tea::message::Screen;
use crate::tea::Model;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Draw the current screen
pub fn render(frame: &mut Frame, model: &mut Model) {
    frame.render_widget(Block::default().style(model.theme.base_style()), frame.size());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.size());

    match model.screen {
        Screen::Terminal => match model.terminal.as_mut() {
            Some(view) => terminal_view::render(frame, chunks[0], view, &model.theme),
            None => tracing::warn!("Terminal screen active without a mounted session"),
        },
        Screen::Menu => {
            let catalogue = model
                .config
                .catalogue()
                .unwrap_or_else(|_| model.config.resolve_profile().builtin_catalogue());
            menu::render(frame, chunks[0], &model.menu, &catalogue, &model.theme);
        }
    }

    render_hints(frame, chunks[1], model);
}

fn render_hints(frame: &mut Frame, area: Rect, model: &Model) {
    let hints = match model.screen {
        Screen::Terminal => "Enter run · PgUp/PgDn scroll · Tab menu · Esc back · Ctrl+C quit",
        Screen::Menu => "↑/↓ select · Enter open · t terminal · q quit",
    };
    let line = Line::from(Span::raw(hints));
    frame.render_widget(Paragraph::new(line).style(model.theme.surface_style()), area);
}
