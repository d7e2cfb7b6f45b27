/// Terminal profiles: prompt, banner and reserved command wiring
use crate::terminal::catalogue::{Catalogue, HELP_COMMAND};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder replaced by the offending token in error templates
pub const COMMAND_PLACEHOLDER: &str = "{command}";

const CLASSIC_BANNER: &str = "Jamessoft Windows [Version 10.0.19045.3803]
(c) Jamessoft Corporation. All rights reserved.

Type 'start' to get started.
";

const PANEL_BANNER: &str =
    "Windows JAMES_KING_Shell\nCopyright (C) JAMES KING Corporation.\n\nType 'start' to get started.\n";

/// Built-in profile selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// Full-page terminal with `back` and `cls`
    #[default]
    Classic,
    /// Embedded panel terminal
    Panel,
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileKind::Classic => write!(f, "classic"),
            ProfileKind::Panel => write!(f, "panel"),
        }
    }
}

impl FromStr for ProfileKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classic" => Ok(ProfileKind::Classic),
            "panel" => Ok(ProfileKind::Panel),
            other => Err(format!("unknown profile '{}'", other)),
        }
    }
}

/// Reserved control commands, checked before the catalogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedCommands {
    pub clear: Vec<String>,
    pub back: Vec<String>,
    pub all: Vec<String>,
}

impl ReservedCommands {
    /// All reserved names, in clear/back/all order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.clear
            .iter()
            .chain(self.back.iter())
            .chain(self.all.iter())
            .map(String::as_str)
    }
}

/// Everything that distinguishes one terminal variant from another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub kind: ProfileKind,
    pub prompt: String,
    pub banner: String,
    pub error_template: String,
    pub reserved: ReservedCommands,
    /// Catalogue entries skipped by `all`
    pub all_excludes: Vec<String>,
}

impl Profile {
    pub fn classic() -> Self {
        Self {
            kind: ProfileKind::Classic,
            prompt: "C:\\Users\\james>".to_string(),
            banner: CLASSIC_BANNER.to_string(),
            error_template: "'{command}' is not recognized as an internal or external command, operable program or batch file.".to_string(),
            reserved: ReservedCommands {
                clear: vec!["clear".to_string(), "cls".to_string()],
                back: vec!["back".to_string()],
                all: vec!["all".to_string()],
            },
            all_excludes: vec![HELP_COMMAND.to_string()],
        }
    }

    pub fn panel() -> Self {
        Self {
            kind: ProfileKind::Panel,
            prompt: "PS C:\\Users\\james>".to_string(),
            banner: PANEL_BANNER.to_string(),
            error_template: "'{command}' is not recognized as an internal or external command."
                .to_string(),
            reserved: ReservedCommands {
                clear: vec!["clear".to_string()],
                back: Vec::new(),
                all: vec!["all".to_string()],
            },
            all_excludes: vec!["clear".to_string()],
        }
    }

    pub fn from_kind(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::Classic => Self::classic(),
            ProfileKind::Panel => Self::panel(),
        }
    }

    /// The catalogue shipped with this profile
    pub fn builtin_catalogue(&self) -> Catalogue {
        match self.kind {
            ProfileKind::Classic => Catalogue::classic(),
            ProfileKind::Panel => Catalogue::panel(),
        }
    }

    /// Echo line for a submitted input, with the raw input untouched
    pub fn echo(&self, raw_input: &str) -> String {
        format!("{} {}", self.prompt, raw_input)
    }

    /// Error report for an unrecognized token
    pub fn not_recognized(&self, token: &str) -> String {
        self.error_template.replace(COMMAND_PLACEHOLDER, token)
    }

    pub fn is_excluded_from_all(&self, name: &str) -> bool {
        self.all_excludes.iter().any(|excluded| excluded == name)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::classic()
    }
}
