/// Terminal view: transcript rendering, input line and auto-scroll
use crate::tea::model::TerminalView;
use crate::terminal::{LineKind, TranscriptLine};
use crate::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Keeps the transcript viewport pinned to its latest row
///
/// Any transcript change (or viewport resize) snaps the offset to the
/// bottom. Manual scrolling only lasts until the next change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoScroll {
    offset: usize,
    max_offset: usize,
    seen_revision: Option<u64>,
    seen_size: (u16, u16),
}

impl AutoScroll {
    /// Reconcile with the current transcript revision and viewport
    ///
    /// Returns the index of the first visible row.
    pub fn sync(&mut self, revision: u64, total_rows: usize, width: u16, height: u16) -> usize {
        self.max_offset = total_rows.saturating_sub(height as usize);
        let changed = self.seen_revision != Some(revision) || self.seen_size != (width, height);
        if changed {
            self.offset = self.max_offset;
            self.seen_revision = Some(revision);
            self.seen_size = (width, height);
        } else {
            self.offset = self.offset.min(self.max_offset);
        }
        self.offset
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_at_bottom(&self) -> bool {
        self.offset >= self.max_offset
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.offset = self.offset.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.offset = self.offset.saturating_add(rows).min(self.max_offset);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }
}

/// Hard-wrap text into rows of at most `width` characters
///
/// Embedded newlines always start a new row; an empty segment still
/// occupies one row.
pub fn wrap_rows(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut rows = Vec::new();
    for segment in text.split('\n') {
        let chars: Vec<char> = segment.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        for chunk in chars.chunks(width) {
            rows.push(chunk.iter().collect());
        }
    }
    rows
}

/// Wrapped transcript rows, each tagged with its line kind
pub fn transcript_rows(lines: &[TranscriptLine], width: u16) -> Vec<(LineKind, String)> {
    lines
        .iter()
        .flat_map(|line| {
            wrap_rows(&line.content, width)
                .into_iter()
                .map(move |row| (line.kind, row))
        })
        .collect()
}

/// Styled rows for the window starting at `offset`
pub fn visible_rows<'a>(
    rows: &[(LineKind, String)],
    offset: usize,
    height: u16,
    theme: &Theme,
) -> Vec<Line<'a>> {
    rows.iter()
        .skip(offset)
        .take(height as usize)
        .map(|(kind, row)| Line::from(Span::styled(row.clone(), theme.line_style(*kind))))
        .collect()
}

/// Render the mounted terminal
pub fn render(frame: &mut Frame, area: Rect, view: &mut TerminalView, theme: &Theme) {
    let enabled = view.input_enabled();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(view.focused))
        .title(" terminal ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);
    let (transcript_area, input_area) = (chunks[0], chunks[1]);

    let session = &view.session;
    let rows = transcript_rows(session.lines(), transcript_area.width);
    let offset = view.scroll.sync(
        session.transcript().revision(),
        rows.len(),
        transcript_area.width,
        transcript_area.height,
    );
    let visible = visible_rows(&rows, offset, transcript_area.height, theme);
    frame.render_widget(Paragraph::new(visible), transcript_area);

    let prompt = session.profile().prompt.clone();
    let prompt_width = prompt.chars().count() as u16 + 1;
    let input = session.input().to_string();
    let input_line = Line::from(vec![
        Span::styled(prompt, theme.prompt_style()),
        Span::raw(" "),
        Span::styled(input.clone(), theme.input_style(enabled)),
    ]);
    frame.render_widget(Paragraph::new(input_line), input_area);

    if enabled {
        let cursor_x = input_area
            .x
            .saturating_add(prompt_width)
            .saturating_add(input.chars().count() as u16)
            .min(input_area.right().saturating_sub(1));
        frame.set_cursor(cursor_x, input_area.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::Transcript;

    #[test]
    fn test_wrap_rows() {
        assert_eq!(wrap_rows("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_rows("ab\n\ncd", 10), vec!["ab", "", "cd"]);
        assert_eq!(wrap_rows("", 10), vec![""]);
        assert_eq!(wrap_rows("\n=== ABOUT ===", 80), vec!["", "=== ABOUT ==="]);
        assert_eq!(wrap_rows("abc", 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_snaps_to_bottom_on_change() {
        let mut scroll = AutoScroll::default();
        assert_eq!(scroll.sync(1, 30, 80, 10), 20);
        assert!(scroll.is_at_bottom());

        scroll.scroll_up(5);
        assert_eq!(scroll.sync(1, 30, 80, 10), 15);
        assert!(!scroll.is_at_bottom());

        // New content pulls the view back down
        assert_eq!(scroll.sync(2, 31, 80, 10), 21);
    }

    #[test]
    fn test_short_transcript_has_no_offset() {
        let mut scroll = AutoScroll::default();
        assert_eq!(scroll.sync(1, 3, 80, 10), 0);
        scroll.scroll_down(4);
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_resize_snaps() {
        let mut scroll = AutoScroll::default();
        scroll.sync(1, 30, 80, 10);
        scroll.scroll_to_top();
        assert_eq!(scroll.sync(1, 30, 80, 20), 10);
    }

    #[test]
    fn test_snaps_past_u16_rows() {
        let mut scroll = AutoScroll::default();
        assert_eq!(scroll.sync(1, 70_000, 80, 10), 69_990);
        assert!(scroll.is_at_bottom());
        scroll.scroll_up(3);
        assert_eq!(scroll.sync(1, 70_000, 80, 10), 69_987);
        assert_eq!(scroll.sync(2, 70_001, 80, 10), 69_991);
    }

    #[test]
    fn test_visible_rows_window() {
        let rows: Vec<(LineKind, String)> = (0..100)
            .map(|i| (LineKind::Output, format!("row {}", i)))
            .collect();
        let theme = Theme::default();
        let visible = visible_rows(&rows, 95, 10, &theme);
        assert_eq!(visible.len(), 5);
        assert_eq!(visible[0], Line::from(Span::styled("row 95", theme.line_style(LineKind::Output))));
    }

    #[test]
    fn test_rows_keep_line_kind() {
        let mut transcript = Transcript::new();
        transcript.push_sealed(LineKind::Error, "abcdef");
        let rows = transcript_rows(transcript.lines(), 4);
        assert_eq!(
            rows,
            vec![
                (LineKind::Error, "abcd".to_string()),
                (LineKind::Error, "ef".to_string())
            ]
        );
    }

    #[test]
    fn test_clear_resets_offset() {
        let mut scroll = AutoScroll::default();
        scroll.sync(4, 50, 80, 10);
        assert_eq!(scroll.sync(5, 0, 80, 10), 0);
    }
}
