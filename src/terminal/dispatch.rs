/// Resolution of a submitted input line against reserved commands and the catalogue
use crate::terminal::catalogue::{Catalogue, CatalogueEntry};
use crate::terminal::profile::Profile;

/// What a submitted token refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved<'a> {
    /// Empty the transcript after the clear delay
    Clear,
    /// Leave the terminal view
    Back,
    /// Reveal every catalogue entry in order
    All,
    /// A catalogue entry
    Entry(&'a CatalogueEntry),
    /// Nothing matched
    Unknown,
}

/// Trim and lowercase raw input; `None` when nothing is left
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Resolve a normalized token; reserved commands shadow catalogue entries
pub fn resolve<'a>(token: &str, profile: &Profile, catalogue: &'a Catalogue) -> Resolved<'a> {
    let reserved = &profile.reserved;
    if reserved.clear.iter().any(|name| name == token) {
        return Resolved::Clear;
    }
    if reserved.back.iter().any(|name| name == token) {
        return Resolved::Back;
    }
    if reserved.all.iter().any(|name| name == token) {
        return Resolved::All;
    }
    match catalogue.get(token) {
        Some(entry) => Resolved::Entry(entry),
        None => Resolved::Unknown,
    }
}

/// Header emitted before each entry revealed by `all`
pub fn section_header(name: &str) -> String {
    format!("\n=== {} ===", name.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::catalogue::CatalogueEntry;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  AbOuT \t"), Some("about".to_string()));
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize(""), None);
    }

    #[test]
    fn test_reserved_before_table() {
        let profile = Profile::classic();
        let catalogue = Catalogue::new(vec![
            CatalogueEntry::new("clear", "shadowed"),
            CatalogueEntry::new("about", "me"),
        ])
        .unwrap();

        assert_eq!(resolve("clear", &profile, &catalogue), Resolved::Clear);
        assert_eq!(resolve("cls", &profile, &catalogue), Resolved::Clear);
        assert_eq!(resolve("back", &profile, &catalogue), Resolved::Back);
        assert_eq!(resolve("all", &profile, &catalogue), Resolved::All);
        assert!(matches!(
            resolve("about", &profile, &catalogue),
            Resolved::Entry(entry) if entry.body == "me"
        ));
        assert_eq!(resolve("nope", &profile, &catalogue), Resolved::Unknown);
    }

    #[test]
    fn test_panel_has_no_back_or_cls() {
        let profile = Profile::panel();
        let catalogue = Catalogue::panel();
        assert_eq!(resolve("back", &profile, &catalogue), Resolved::Unknown);
        assert_eq!(resolve("cls", &profile, &catalogue), Resolved::Unknown);
        assert_eq!(resolve("clear", &profile, &catalogue), Resolved::Clear);
    }

    #[test]
    fn test_section_header() {
        assert_eq!(section_header("skills"), "\n=== SKILLS ===");
    }
}
