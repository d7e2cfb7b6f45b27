/// Command catalogue: the table of named commands and their response bodies
use crate::error::CatalogueError;
use serde::{Deserialize, Serialize};

/// Name of the bootstrap/help entry
pub const HELP_COMMAND: &str = "start";

const ABOUT: &str = "Full-stack Software Engineer with 4+ years building enterprise fintech platforms across West Africa.
99.8% uptime. <200ms latency. $50M+ daily operations.";

const SKILLS: &str = "Frontend: React, TypeScript, Next.js
Backend: Java, Spring Boot, Node.js
Cloud: AWS, Docker, CI/CD
Database: MSSQL, PostgreSQL, MongoDB";

const EXPERIENCE: &str = "Software Engineer — Aristack Technology Solutions
Architected FX & trading platforms across 3 countries.";

const PROJECTS: &str = "AI Proctoring System
BIME Chrome Extension
Enterprise FX Trading Platform";

const EDUCATION: &str = "ND Business Administration
Semicolon Africa — Software Engineering";

const CONTACT: &str = "Email: jamesasuelimen77@gmail.com
GitHub: github.com/jamesking77-create";

const CLASSIC_START: &str = "Available commands:
about
skills
experience
projects
education
contact
clear
all
back";

const PANEL_START: &str = "Available commands:
about
skills
experience
projects
education
contact
clear
all";

/// A single named command and its static response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueEntry {
    pub name: String,
    pub body: String,
}

impl CatalogueEntry {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }
}

/// Ordered command table with unique lowercase names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    entries: Vec<CatalogueEntry>,
}

impl Catalogue {
    /// Build a catalogue, normalizing names to lowercase
    pub fn new(entries: Vec<CatalogueEntry>) -> Result<Self, CatalogueError> {
        let mut normalized: Vec<CatalogueEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            let name = entry.name.trim().to_lowercase();
            if name.is_empty() {
                return Err(CatalogueError::EmptyName);
            }
            if name.chars().any(char::is_whitespace) {
                return Err(CatalogueError::InvalidName { name: entry.name });
            }
            if normalized.iter().any(|existing| existing.name == name) {
                return Err(CatalogueError::Duplicate { name });
            }
            normalized.push(CatalogueEntry {
                name,
                body: entry.body,
            });
        }
        Ok(Self { entries: normalized })
    }

    /// Table used by the full-page terminal
    pub fn classic() -> Self {
        Self::from_static(CLASSIC_START)
    }

    /// Table used by the embedded panel terminal (no `back` command)
    pub fn panel() -> Self {
        Self::from_static(PANEL_START)
    }

    fn from_static(help: &str) -> Self {
        let entries = [
            (HELP_COMMAND, help),
            ("about", ABOUT),
            ("skills", SKILLS),
            ("experience", EXPERIENCE),
            ("projects", PROJECTS),
            ("education", EDUCATION),
            ("contact", CONTACT),
        ];
        Self {
            entries: entries
                .iter()
                .map(|(name, body)| CatalogueEntry::new(*name, *body))
                .collect(),
        }
    }

    /// Exact lookup of an already lowercased token
    pub fn get(&self, name: &str) -> Option<&CatalogueEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Entries in table order
    pub fn iter(&self) -> impl Iterator<Item = &CatalogueEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn entries(&self) -> &[CatalogueEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order() {
        let catalogue = Catalogue::classic();
        let names: Vec<&str> = catalogue.names().collect();
        assert_eq!(
            names,
            vec!["start", "about", "skills", "experience", "projects", "education", "contact"]
        );
        assert!(catalogue.get("start").unwrap().body.ends_with("back"));
        assert!(!Catalogue::panel().get("start").unwrap().body.contains("back"));
    }

    #[test]
    fn test_names_are_lowercased() {
        let catalogue = Catalogue::new(vec![CatalogueEntry::new(" Hello ", "world")]).unwrap();
        assert_eq!(catalogue.get("hello").unwrap().body, "world");
        assert!(catalogue.get("Hello").is_none());
    }

    #[test]
    fn test_rejects_bad_names() {
        assert_eq!(
            Catalogue::new(vec![CatalogueEntry::new("  ", "x")]),
            Err(CatalogueError::EmptyName)
        );
        assert!(matches!(
            Catalogue::new(vec![CatalogueEntry::new("two words", "x")]),
            Err(CatalogueError::InvalidName { .. })
        ));
        assert_eq!(
            Catalogue::new(vec![
                CatalogueEntry::new("about", "a"),
                CatalogueEntry::new("ABOUT", "b"),
            ]),
            Err(CatalogueError::Duplicate {
                name: "about".to_string()
            })
        );
    }
}
