use crate::model::SeedNode;

/// JS global consulted for a seed override: a page can set `window.TREE_DATA`
/// to a JSON string before the module loads.
pub(crate) const SEED_GLOBAL: &str = "TREE_DATA";

const BUNDLED_SEED: &str = include_str!("../../data/seed.json");

pub(crate) fn parse_seed(json: &str) -> Result<SeedNode, serde_json::Error> {
    serde_json::from_str(json)
}

/// The seed document, read once at startup.
///
/// Prefers the `window.TREE_DATA` override when a page provides one, then
/// the bundled document. A document that does not parse is logged and
/// replaced by a bare root so the app still mounts.
pub(crate) fn load_seed() -> SeedNode {
    if let Some(window) = web_sys::window() {
        if let Ok(raw) = js_sys::Reflect::get(window.as_ref(), &SEED_GLOBAL.into()) {
            if let Some(json) = raw.as_string() {
                match parse_seed(&json) {
                    Ok(seed) => return seed,
                    Err(e) => leptos::logging::warn!("ignoring {SEED_GLOBAL} override: {e}"),
                }
            }
        }
    }

    match parse_seed(BUNDLED_SEED) {
        Ok(seed) => seed,
        Err(e) => {
            leptos::logging::warn!("bundled seed does not parse: {e}");
            SeedNode {
                name: "Root".to_string(),
                children: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_contract_nested_children() {
        let json = r#"{
            "name": "Root",
            "children": [
                {"name": "A", "children": [{"name": "B"}]},
                {"name": "C"}
            ]
        }"#;
        let seed = parse_seed(json).expect("seed should parse");
        assert_eq!(seed.name, "Root");

        let kids = seed.children.expect("root has children");
        assert_eq!(kids.len(), 2);
        assert_eq!(kids[0].children.as_ref().map(|c| c.len()), Some(1));
        assert!(kids[1].children.is_none());
    }

    #[test]
    fn test_seed_contract_rejects_a_missing_name() {
        assert!(parse_seed(r#"{"children": []}"#).is_err());
    }

    #[test]
    fn test_bundled_seed_parses() {
        let seed = parse_seed(BUNDLED_SEED).expect("bundled seed should parse");
        assert_eq!(seed.name, "Root");
        assert!(seed.children.is_some());
    }
}
