//! Command terminal emulator
//!
//! A small interpreter with an append-only transcript, a fixed command
//! catalogue and a typewriter-style output reveal.

pub mod catalogue;
pub mod dispatch;
pub mod profile;
pub mod reveal;
pub mod session;
pub mod transcript;

pub use catalogue::{Catalogue, CatalogueEntry, HELP_COMMAND};
pub use dispatch::{normalize, resolve, Resolved};
pub use profile::{Profile, ProfileKind, ReservedCommands};
pub use reveal::{RevealJob, RevealScheduler, TickOutcome};
pub use session::{SubmitOutcome, TerminalSession};
pub use transcript::{LineId, LineKind, Transcript, TranscriptLine};
