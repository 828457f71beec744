//! Pasteboard identities and the fixed table of known pasteboards.
//!
//! Callers address pasteboards by short key (`general`, `find`, `font`,
//! `ruler`, `drag`). The find pasteboard additionally answers to two
//! historical AppKit constant names. Anything else is passed through to the
//! platform unmodified, so pasteboards this crate does not know about keep
//! working.

/// Short key of the general pasteboard, the default for every operation.
pub const GENERAL: &str = "general";

/// Short key of the find pasteboard.
pub const FIND: &str = "find";

/// Names that address the find pasteboard. Matching is exact and case
/// sensitive; loosening it would change which writes get verified.
const FIND_ALIASES: [&str; 3] = ["find", "NSFindPboard", "NSPasteboardNameFind"];

/// Fixed mapping from short keys to canonical platform pasteboard names.
pub const KNOWN_PASTEBOARDS: &[(&str, &str)] = &[
    ("general", "Apple CFPasteboard general"),
    ("find", "Apple CFPasteboard find"),
    ("font", "Apple CFPasteboard font"),
    ("ruler", "Apple CFPasteboard ruler"),
    ("drag", "Apple CFPasteboard drag"),
];

/// Resolve an optional caller-supplied name to a pasteboard key.
///
/// Absent names default to [`GENERAL`]; find aliases collapse to [`FIND`];
/// every other name is returned unchanged.
pub fn resolve(pasteboard: Option<&str>) -> &str {
    let name = pasteboard.unwrap_or(GENERAL);
    if is_find(name) {
        FIND
    } else {
        name
    }
}

/// Whether a name addresses the find pasteboard.
pub fn is_find(pasteboard: &str) -> bool {
    FIND_ALIASES.contains(&pasteboard)
}

/// Canonical platform name for a short key.
///
/// Unknown names pass through unchanged so they can address pasteboards the
/// table does not list.
pub fn canonical(pasteboard: &str) -> &str {
    KNOWN_PASTEBOARDS
        .iter()
        .find(|(key, _)| *key == pasteboard)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(pasteboard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_defaults_to_general() {
        assert_eq!(resolve(None), "general");
    }

    #[test]
    fn resolve_collapses_find_aliases() {
        assert_eq!(resolve(Some("find")), "find");
        assert_eq!(resolve(Some("NSFindPboard")), "find");
        assert_eq!(resolve(Some("NSPasteboardNameFind")), "find");
    }

    #[test]
    fn resolve_passes_unknown_names_through() {
        assert_eq!(resolve(Some("org.example.custom")), "org.example.custom");
    }

    #[test]
    fn is_find_is_exact_and_case_sensitive() {
        assert!(is_find("find"));
        assert!(is_find("NSFindPboard"));
        assert!(is_find("NSPasteboardNameFind"));
        assert!(!is_find("Find"));
        assert!(!is_find("FIND"));
        assert!(!is_find("nsfindpboard"));
        assert!(!is_find("Apple CFPasteboard find"));
    }

    #[test]
    fn canonical_maps_known_keys() {
        assert_eq!(canonical("general"), "Apple CFPasteboard general");
        assert_eq!(canonical("drag"), "Apple CFPasteboard drag");
    }

    #[test]
    fn canonical_passes_unknown_names_through() {
        assert_eq!(canonical("org.example.custom"), "org.example.custom");
    }

    #[test]
    fn known_pasteboards_has_five_entries() {
        assert_eq!(KNOWN_PASTEBOARDS.len(), 5);
        for (key, canonical_name) in KNOWN_PASTEBOARDS {
            assert_eq!(*canonical_name, format!("Apple CFPasteboard {}", key));
        }
    }
}
