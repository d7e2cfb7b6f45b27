/// Section menu screen
use crate::tea::model::MenuState;
use crate::terminal::Catalogue;
use crate::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Menu rows with the selected entry highlighted
pub fn menu_lines<'a>(menu: &MenuState, theme: &Theme) -> Vec<Line<'a>> {
    let colors = &theme.colors.menu;
    menu.items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let selected = index == menu.selected;
            let label_style = if selected {
                theme.selection_style()
            } else {
                Style::default().fg(colors.label)
            };
            Line::from(vec![
                Span::raw(if selected { "▸ " } else { "  " }),
                Span::styled(format!("{} ", item.number), Style::default().fg(colors.number)),
                Span::styled(item.label.clone(), label_style),
            ])
        })
        .collect()
}

pub fn render(frame: &mut Frame, area: Rect, menu: &MenuState, catalogue: &Catalogue, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)])
        .split(area);

    let list = Paragraph::new(menu_lines(menu, theme)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(true))
            .title(" menu "),
    );
    frame.render_widget(list, chunks[0]);

    let preview = menu
        .preview(catalogue)
        .unwrap_or("Open the command terminal. Type 'start' once inside.");
    let preview = Paragraph::new(preview.to_string())
        .style(Style::default().fg(theme.colors.menu.preview))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(false))
                .title(" preview "),
        );
    frame.render_widget(preview, chunks[1]);
}
