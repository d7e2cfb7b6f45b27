/// Transcript buffer for the command terminal
///
/// The transcript is an ordered list of rendered rows. Rows are only ever
/// appended, except that `clear` empties the whole list and the most
/// recently opened row may grow while its output is being revealed.
use crate::error::TranscriptError;
use serde::{Deserialize, Serialize};

/// Presentation kind of a transcript row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Echo of a submitted input line
    Command,
    /// Normal command output
    Output,
    /// Unrecognized command report
    Error,
}

/// One rendered row of the terminal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptLine {
    pub content: String,
    pub kind: LineKind,
    #[serde(skip)]
    sealed: bool,
}

impl TranscriptLine {
    /// Whether the line can no longer change
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }
}

/// Handle to a line in a specific transcript generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId {
    generation: u64,
    index: usize,
}

impl LineId {
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Ordered, append-only transcript
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<TranscriptLine>,
    generation: u64,
    revision: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line that is immutable from the start
    pub fn push_sealed(&mut self, kind: LineKind, content: impl Into<String>) -> LineId {
        self.push(kind, content.into(), true)
    }

    /// Append an empty line that grows in place until sealed
    ///
    /// Command echoes are never opened: they are sealed on creation.
    pub fn open(&mut self, kind: LineKind) -> LineId {
        let sealed = kind == LineKind::Command;
        self.push(kind, String::new(), sealed)
    }

    fn push(&mut self, kind: LineKind, content: String, sealed: bool) -> LineId {
        self.lines.push(TranscriptLine {
            content,
            kind,
            sealed,
        });
        self.revision += 1;
        LineId {
            generation: self.generation,
            index: self.lines.len() - 1,
        }
    }

    /// Grow an open line by one character
    pub fn push_char(&mut self, id: LineId, ch: char) -> Result<(), TranscriptError> {
        let line = self.line_mut(id)?;
        if line.sealed {
            return Err(TranscriptError::Sealed { index: id.index });
        }
        line.content.push(ch);
        self.revision += 1;
        Ok(())
    }

    /// Mark a line as complete
    pub fn seal(&mut self, id: LineId) -> Result<(), TranscriptError> {
        self.line_mut(id)?.sealed = true;
        Ok(())
    }

    fn line_mut(&mut self, id: LineId) -> Result<&mut TranscriptLine, TranscriptError> {
        if id.generation != self.generation {
            return Err(TranscriptError::StaleLine {
                generation: id.generation,
                index: id.index,
            });
        }
        self.lines
            .get_mut(id.index)
            .ok_or(TranscriptError::StaleLine {
                generation: id.generation,
                index: id.index,
            })
    }

    /// Drop every line; ids handed out before this call become stale
    pub fn clear(&mut self) {
        self.lines.clear();
        self.generation += 1;
        self.revision += 1;
    }

    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    pub fn get(&self, id: LineId) -> Option<&TranscriptLine> {
        if id.generation != self.generation {
            return None;
        }
        self.lines.get(id.index)
    }

    pub fn last(&self) -> Option<&TranscriptLine> {
        self.lines.last()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Counter bumped on every mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_line_grows_then_seals() {
        let mut transcript = Transcript::new();
        let id = transcript.open(LineKind::Output);

        transcript.push_char(id, 'h').unwrap();
        transcript.push_char(id, 'i').unwrap();
        assert_eq!(transcript.last().unwrap().content, "hi");
        assert!(!transcript.last().unwrap().is_sealed());

        transcript.seal(id).unwrap();
        assert_eq!(
            transcript.push_char(id, '!'),
            Err(TranscriptError::Sealed { index: 0 })
        );
        assert_eq!(transcript.last().unwrap().content, "hi");
    }

    #[test]
    fn test_command_lines_are_immutable() {
        let mut transcript = Transcript::new();
        let echo = transcript.push_sealed(LineKind::Command, "C:\\> about");
        assert!(transcript.push_char(echo, 'x').is_err());

        let opened = transcript.open(LineKind::Command);
        assert!(transcript.push_char(opened, 'x').is_err());
    }

    #[test]
    fn test_clear_invalidates_ids() {
        let mut transcript = Transcript::new();
        let id = transcript.open(LineKind::Output);
        transcript.clear();

        assert!(transcript.is_empty());
        assert!(transcript.get(id).is_none());
        assert!(matches!(
            transcript.push_char(id, 'a'),
            Err(TranscriptError::StaleLine { .. })
        ));

        // A new line at the same index gets a fresh id
        let fresh = transcript.open(LineKind::Output);
        assert_eq!(fresh.index(), id.index());
        assert_ne!(fresh, id);
    }

    #[test]
    fn test_revision_tracks_every_mutation() {
        let mut transcript = Transcript::new();
        let start = transcript.revision();
        let id = transcript.open(LineKind::Error);
        transcript.push_char(id, 'e').unwrap();
        transcript.clear();
        assert_eq!(transcript.revision(), start + 3);
    }
}
