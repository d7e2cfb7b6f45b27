/// Typewriter reveal scheduler
///
/// Renders a string into the transcript one character per tick. Only one
/// reveal is ever active; further work waits in a FIFO queue and is started
/// by the completion of the previous reveal, so chained output never
/// interleaves.
use crate::terminal::transcript::{LineId, LineKind, Transcript};
use std::collections::VecDeque;

/// A unit of typed output, optionally preceded by an instant header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealJob {
    pub header: Option<String>,
    pub body: String,
    pub kind: LineKind,
}

impl RevealJob {
    pub fn output(body: impl Into<String>) -> Self {
        Self {
            header: None,
            body: body.into(),
            kind: LineKind::Output,
        }
    }

    pub fn error(body: impl Into<String>) -> Self {
        Self {
            header: None,
            body: body.into(),
            kind: LineKind::Error,
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing in flight
    Idle,
    /// One more character was revealed
    Revealed,
    /// The active line finished and the next queued job started
    Completed,
    /// The active line finished and nothing is queued
    Finished,
}

#[derive(Debug, Clone)]
struct ActiveReveal {
    line: LineId,
    target: Vec<char>,
    revealed: usize,
}

#[derive(Debug, Clone, Default)]
pub struct RevealScheduler {
    active: Option<ActiveReveal>,
    queue: VecDeque<RevealJob>,
}

impl RevealScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a reveal is active or queued
    pub fn is_busy(&self) -> bool {
        self.active.is_some() || !self.queue.is_empty()
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn enqueue(&mut self, job: RevealJob) {
        self.queue.push_back(job);
    }

    /// Start the next queued job unless one is already active
    ///
    /// Returns whether a job was started.
    pub fn start_next(&mut self, transcript: &mut Transcript) -> bool {
        if self.active.is_some() {
            return false;
        }
        let Some(job) = self.queue.pop_front() else {
            return false;
        };
        if let Some(header) = job.header {
            transcript.push_sealed(LineKind::Output, header);
        }
        let line = transcript.open(job.kind);
        self.active = Some(ActiveReveal {
            line,
            target: job.body.chars().collect(),
            revealed: 0,
        });
        true
    }

    /// Reveal exactly one more character of the active target
    pub fn tick(&mut self, transcript: &mut Transcript) -> TickOutcome {
        let Some(active) = self.active.as_mut() else {
            return TickOutcome::Idle;
        };

        if let Some(&ch) = active.target.get(active.revealed) {
            if let Err(e) = transcript.push_char(active.line, ch) {
                tracing::warn!("Reveal target line went away: {}", e);
                self.cancel();
                return TickOutcome::Finished;
            }
            active.revealed += 1;
        }

        if active.revealed < active.target.len() {
            return TickOutcome::Revealed;
        }

        let line = active.line;
        self.active = None;
        if let Err(e) = transcript.seal(line) {
            tracing::debug!("Could not seal finished line: {}", e);
        }

        if self.start_next(transcript) {
            TickOutcome::Completed
        } else {
            TickOutcome::Finished
        }
    }

    /// Drop the active reveal and everything queued
    pub fn cancel(&mut self) {
        if self.is_busy() {
            tracing::debug!(queued = self.queue.len(), "Cancelling reveal");
        }
        self.active = None;
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(scheduler: &mut RevealScheduler, transcript: &mut Transcript) -> usize {
        let mut ticks = 0;
        while scheduler.is_busy() {
            scheduler.tick(transcript);
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn test_one_character_per_tick() {
        let mut transcript = Transcript::new();
        let mut scheduler = RevealScheduler::new();
        scheduler.enqueue(RevealJob::output("abc"));
        assert!(scheduler.start_next(&mut transcript));
        assert_eq!(transcript.last().unwrap().content, "");

        assert_eq!(scheduler.tick(&mut transcript), TickOutcome::Revealed);
        assert_eq!(transcript.last().unwrap().content, "a");
        assert_eq!(scheduler.tick(&mut transcript), TickOutcome::Revealed);
        assert_eq!(transcript.last().unwrap().content, "ab");
        assert_eq!(scheduler.tick(&mut transcript), TickOutcome::Finished);
        assert_eq!(transcript.last().unwrap().content, "abc");
        assert!(transcript.last().unwrap().is_sealed());
        assert!(!scheduler.is_busy());
        assert_eq!(scheduler.tick(&mut transcript), TickOutcome::Idle);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut transcript = Transcript::new();
        let mut scheduler = RevealScheduler::new();
        scheduler.enqueue(RevealJob::output("a—b"));
        scheduler.start_next(&mut transcript);
        scheduler.tick(&mut transcript);
        scheduler.tick(&mut transcript);
        assert_eq!(transcript.last().unwrap().content, "a—");
    }

    #[test]
    fn test_empty_target_completes_on_first_tick() {
        let mut transcript = Transcript::new();
        let mut scheduler = RevealScheduler::new();
        scheduler.enqueue(RevealJob::error(""));
        scheduler.start_next(&mut transcript);
        assert!(scheduler.is_busy());
        assert_eq!(scheduler.tick(&mut transcript), TickOutcome::Finished);
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.last().unwrap().kind, LineKind::Error);
    }

    #[test]
    fn test_queue_runs_sequentially() {
        let mut transcript = Transcript::new();
        let mut scheduler = RevealScheduler::new();
        scheduler.enqueue(RevealJob::output("12").with_header("first"));
        scheduler.enqueue(RevealJob::output("34").with_header("second"));
        scheduler.start_next(&mut transcript);

        // Second header must not appear before the first body is complete
        assert_eq!(transcript.len(), 2);
        scheduler.tick(&mut transcript);
        assert_eq!(transcript.len(), 2);
        assert_eq!(scheduler.tick(&mut transcript), TickOutcome::Completed);
        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript.lines()[2].content, "second");
        assert_eq!(transcript.lines()[3].content, "");

        run(&mut scheduler, &mut transcript);
        let contents: Vec<&str> = transcript
            .lines()
            .iter()
            .map(|line| line.content.as_str())
            .collect();
        assert_eq!(contents, vec!["first", "12", "second", "34"]);
    }

    #[test]
    fn test_start_next_refuses_second_active() {
        let mut transcript = Transcript::new();
        let mut scheduler = RevealScheduler::new();
        scheduler.enqueue(RevealJob::output("a"));
        scheduler.enqueue(RevealJob::output("b"));
        assert!(scheduler.start_next(&mut transcript));
        assert!(!scheduler.start_next(&mut transcript));
        assert_eq!(scheduler.queued(), 1);
    }

    #[test]
    fn test_cancel_after_clear() {
        let mut transcript = Transcript::new();
        let mut scheduler = RevealScheduler::new();
        scheduler.enqueue(RevealJob::output("abc"));
        scheduler.start_next(&mut transcript);
        transcript.clear();

        assert_eq!(scheduler.tick(&mut transcript), TickOutcome::Finished);
        assert!(!scheduler.is_busy());
        assert!(transcript.is_empty());
    }
}
