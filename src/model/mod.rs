use serde::Deserialize;

/// Stable node identity.
///
/// Selection and parent lookup compare ids, never names. Ids are issued by a
/// counter owned by the outline state and survive deep copies of the tree.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct NodeId(pub u64);

/// One outline node.
///
/// `children: None` and `children: Some(vec![])` are both leaf-shaped; the
/// append path only creates the collection when the first child arrives.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TreeNode {
    pub id: NodeId,
    pub name: String,
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    pub fn leaf(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            children: None,
        }
    }

    /// A node is a leaf iff its children collection is absent or empty.
    /// Only leaves render an append input.
    pub fn is_leaf(&self) -> bool {
        self.children.as_ref().map_or(true, |kids| kids.is_empty())
    }

    /// Build the working tree from a seed document, allocating ids in
    /// document order starting at `*next_id`.
    pub fn from_seed(seed: &SeedNode, next_id: &mut u64) -> Self {
        let id = NodeId(*next_id);
        *next_id += 1;

        let children = seed.children.as_ref().map(|kids| {
            kids.iter()
                .map(|kid| TreeNode::from_seed(kid, next_id))
                .collect()
        });

        Self {
            id,
            name: seed.name.clone(),
            children,
        }
    }
}

/// Wire shape of the seed document: `{ "name": ..., "children"?: [...] }`.
///
/// `name` is required; anything else the document carries is ignored.
#[derive(Deserialize, Clone, Debug)]
pub(crate) struct SeedNode {
    pub name: String,

    #[serde(default)]
    pub children: Option<Vec<SeedNode>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(json: &str) -> SeedNode {
        serde_json::from_str(json).expect("seed should parse")
    }

    #[test]
    fn test_from_seed_allocates_ids_in_document_order() {
        let s = seed(r#"{"name":"Root","children":[{"name":"A","children":[{"name":"B"}]},{"name":"C"}]}"#);

        let mut next_id = 0;
        let root = TreeNode::from_seed(&s, &mut next_id);

        assert_eq!(root.id, NodeId(0));
        let kids = root.children.as_ref().expect("root has children");
        assert_eq!(kids[0].id, NodeId(1));
        assert_eq!(kids[0].children.as_ref().unwrap()[0].id, NodeId(2));
        assert_eq!(kids[1].id, NodeId(3));
        assert_eq!(next_id, 4);
    }

    #[test]
    fn test_is_leaf_covers_absent_and_empty_children() {
        let absent = TreeNode::leaf(NodeId(0), "a");
        assert!(absent.is_leaf());

        let empty = TreeNode {
            id: NodeId(1),
            name: "b".to_string(),
            children: Some(vec![]),
        };
        assert!(empty.is_leaf());

        let full = TreeNode {
            id: NodeId(2),
            name: "c".to_string(),
            children: Some(vec![TreeNode::leaf(NodeId(3), "d")]),
        };
        assert!(!full.is_leaf());
    }

    #[test]
    fn test_seed_children_default_to_absent() {
        let s = seed(r#"{"name":"Solo"}"#);
        assert_eq!(s.name, "Solo");
        assert!(s.children.is_none());
    }
}
