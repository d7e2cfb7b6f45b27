/// Terminal session state for one mounted terminal view
///
/// Owns the transcript, the input buffer and the reveal scheduler. The
/// session never sleeps or spawns timers: the embedding layer drives it with
/// `tick` and applies deferred actions (clear, navigation) that `submit`
/// reports back.
use crate::terminal::catalogue::Catalogue;
use crate::terminal::dispatch::{normalize, resolve, section_header, Resolved};
use crate::terminal::profile::Profile;
use crate::terminal::reveal::{RevealJob, RevealScheduler, TickOutcome};
use crate::terminal::transcript::{LineKind, Transcript, TranscriptLine};
use uuid::Uuid;

/// What happened to a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty or whitespace-only input
    Ignored,
    /// Dropped because output is still being typed
    Busy,
    /// Echoed with nothing to reveal (e.g. `all` over an empty table)
    Echoed,
    /// Echoed and a reveal has started
    Revealing,
    /// Echoed; the caller should clear the transcript after the clear delay
    ClearScheduled,
    /// Echoed; the caller should leave the terminal view
    NavigateBack,
}

#[derive(Debug, Clone)]
pub struct TerminalSession {
    id: Uuid,
    profile: Profile,
    catalogue: Catalogue,
    transcript: Transcript,
    pending_input: String,
    scheduler: RevealScheduler,
    mounted: bool,
}

impl TerminalSession {
    /// Create a session seeded with the profile's banner
    pub fn mount(profile: Profile, catalogue: Catalogue) -> Self {
        let mut transcript = Transcript::new();
        transcript.push_sealed(LineKind::Output, profile.banner.clone());
        let id = Uuid::new_v4();
        tracing::info!(session = %id, profile = %profile.kind, "Terminal session mounted");

        Self {
            id,
            profile,
            catalogue,
            transcript,
            pending_input: String::new(),
            scheduler: RevealScheduler::new(),
            mounted: true,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn lines(&self) -> &[TranscriptLine] {
        self.transcript.lines()
    }

    pub fn input(&self) -> &str {
        &self.pending_input
    }

    /// True while output is being revealed; gates submissions
    pub fn is_typing(&self) -> bool {
        self.scheduler.is_busy()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn insert_char(&mut self, ch: char) {
        self.pending_input.push(ch);
    }

    pub fn backspace(&mut self) {
        self.pending_input.pop();
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.pending_input = input.into();
    }

    /// Submit the current input buffer
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.mounted {
            return SubmitOutcome::Ignored;
        }
        let Some(token) = normalize(&self.pending_input) else {
            return SubmitOutcome::Ignored;
        };
        if self.is_typing() {
            tracing::debug!(session = %self.id, "Dropping submission while typing");
            return SubmitOutcome::Busy;
        }

        let raw = std::mem::take(&mut self.pending_input);
        self.transcript
            .push_sealed(LineKind::Command, self.profile.echo(&raw));
        tracing::debug!(session = %self.id, command = %token, "Dispatching command");

        let job = match resolve(&token, &self.profile, &self.catalogue) {
            Resolved::Clear => return SubmitOutcome::ClearScheduled,
            Resolved::Back => return SubmitOutcome::NavigateBack,
            Resolved::All => return self.enqueue_all(),
            Resolved::Entry(entry) => RevealJob::output(entry.body.clone()),
            Resolved::Unknown => RevealJob::error(self.profile.not_recognized(raw.trim())),
        };
        self.begin(job)
    }

    /// Set the input buffer and submit it
    pub fn submit_line(&mut self, raw: &str) -> SubmitOutcome {
        self.set_input(raw);
        self.submit()
    }

    fn begin(&mut self, job: RevealJob) -> SubmitOutcome {
        self.scheduler.enqueue(job);
        self.scheduler.start_next(&mut self.transcript);
        SubmitOutcome::Revealing
    }

    fn enqueue_all(&mut self) -> SubmitOutcome {
        for entry in self.catalogue.iter() {
            if self.profile.is_excluded_from_all(&entry.name) {
                continue;
            }
            self.scheduler
                .enqueue(RevealJob::output(entry.body.clone()).with_header(section_header(&entry.name)));
        }
        if self.scheduler.start_next(&mut self.transcript) {
            SubmitOutcome::Revealing
        } else {
            SubmitOutcome::Echoed
        }
    }

    /// Advance the reveal by one character
    pub fn tick(&mut self) -> TickOutcome {
        if !self.mounted {
            return TickOutcome::Idle;
        }
        self.scheduler.tick(&mut self.transcript)
    }

    /// Tick until nothing is being revealed; returns the number of ticks
    pub fn run_until_idle(&mut self) -> usize {
        let mut ticks = 0;
        while self.mounted && self.scheduler.is_busy() {
            self.scheduler.tick(&mut self.transcript);
            ticks += 1;
        }
        ticks
    }

    /// Empty the transcript and stop any reveal in flight
    pub fn clear(&mut self) {
        self.scheduler.cancel();
        self.transcript.clear();
    }

    /// Tear down; any reveal in flight is cancelled and later ticks do nothing
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.scheduler.cancel();
        self.mounted = false;
        tracing::info!(session = %self.id, "Terminal session unmounted");
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::mount(Profile::classic(), Catalogue::classic())
    }
}
