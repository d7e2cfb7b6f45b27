//! Scripted, non-interactive terminal runs
//!
//! Feeds input lines to a session the way a user would, but reveals each
//! output instantly and applies deferred clears on the spot.

use crate::terminal::{SubmitOutcome, TerminalSession, TranscriptLine};
use serde::Serialize;

/// Result of a scripted run
#[derive(Debug, Clone, Serialize)]
pub struct ScriptOutcome {
    pub transcript: Vec<TranscriptLine>,
    /// Lines that produced a command echo
    pub submitted: usize,
    /// Whether the script stopped at a `back` command
    pub navigated_back: bool,
}

/// Submit each line in order; stops after `back`
pub fn run_script<I, S>(session: &mut TerminalSession, lines: I) -> ScriptOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut submitted = 0;
    let mut navigated_back = false;

    for line in lines {
        let outcome = session.submit_line(line.as_ref());
        tracing::debug!(line = line.as_ref(), ?outcome, "Scripted submission");
        match outcome {
            SubmitOutcome::Ignored => continue,
            SubmitOutcome::Busy => {
                // Reveals are drained after every line, so this means a bug upstream
                tracing::warn!("Session still typing during scripted run");
                continue;
            }
            SubmitOutcome::Echoed => {}
            SubmitOutcome::Revealing => {
                session.run_until_idle();
            }
            SubmitOutcome::ClearScheduled => session.clear(),
            SubmitOutcome::NavigateBack => {
                submitted += 1;
                navigated_back = true;
                break;
            }
        }
        submitted += 1;
    }

    ScriptOutcome {
        transcript: session.lines().to_vec(),
        submitted,
        navigated_back,
    }
}

/// Plain-text rendering of a transcript, one row per line
pub fn format_transcript(lines: &[TranscriptLine]) -> String {
    lines
        .iter()
        .map(|line| line.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
