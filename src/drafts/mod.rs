use std::collections::BTreeMap;

/// Pending input text, keyed by the dotted path of the leaf the input sits
/// under. Purely in-memory: a draft survives re-renders, not the session.
pub(crate) type DraftMap = BTreeMap<String, String>;

pub(crate) fn draft_for(drafts: &DraftMap, path: &str) -> String {
    drafts.get(path).cloned().unwrap_or_default()
}

pub(crate) fn set_draft(drafts: &mut DraftMap, path: &str, value: String) {
    drafts.insert(path.to_string(), value);
}

/// Drop the text captured for `path` (after a committed append).
pub(crate) fn clear_draft(drafts: &mut DraftMap, path: &str) {
    drafts.remove(path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_roundtrip_per_path() {
        let mut drafts = DraftMap::new();
        assert_eq!(draft_for(&drafts, "0.1"), "");

        set_draft(&mut drafts, "0.1", "Birds".to_string());
        set_draft(&mut drafts, "2", "Fungi".to_string());
        assert_eq!(draft_for(&drafts, "0.1"), "Birds");

        clear_draft(&mut drafts, "0.1");
        assert_eq!(draft_for(&drafts, "0.1"), "");
        // Other paths keep their text.
        assert_eq!(draft_for(&drafts, "2"), "Fungi");
    }
}
