use crate::model::{NodeId, TreeNode};
use std::fmt;

/// Failures the outline operations can report. Both are console-logged by
/// the shell and leave the tree unchanged; there is no user-facing surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum TreeError {
    /// A dotted level path failed to parse or resolve.
    InvalidPath(String),
    /// An append found no parent to attach to.
    NullParent,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::InvalidPath(path) => write!(f, "invalid path {path:?}"),
            TreeError::NullParent => write!(f, "no parent to append under"),
        }
    }
}

/// The widget's whole mutable state: the current tree, the selection, and
/// the id counter new leaves allocate from.
///
/// Transitions take a state and return a successor built on a deep copy, so
/// a render reading the previous value never observes a half-applied edit.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct OutlineState {
    pub root: TreeNode,
    pub selected: Option<NodeId>,
    pub next_id: u64,
}

impl OutlineState {
    pub fn new(root: TreeNode, next_id: u64) -> Self {
        Self {
            root,
            selected: None,
            next_id,
        }
    }
}

/// Split a dotted path (`"0.2.1"`) into child indices. The empty string is
/// the root path and parses to no segments.
pub(crate) fn parse_path(path: &str) -> Result<Vec<usize>, TreeError> {
    if path.is_empty() {
        return Ok(vec![]);
    }

    path.split('.')
        .map(|seg| {
            seg.parse::<usize>()
                .map_err(|_| TreeError::InvalidPath(path.to_string()))
        })
        .collect()
}

fn descend<'a>(root: &'a TreeNode, segments: &[usize]) -> Option<&'a TreeNode> {
    let mut node = root;
    for &idx in segments {
        node = node.children.as_ref()?.get(idx)?;
    }
    Some(node)
}

fn descend_mut<'a>(root: &'a mut TreeNode, segments: &[usize]) -> Option<&'a mut TreeNode> {
    let mut node = root;
    for &idx in segments {
        node = node.children.as_mut()?.get_mut(idx)?;
    }
    Some(node)
}

/// Resolve a dotted path to the node it designates. Fails with `InvalidPath`
/// when an index is out of bounds or a traversed node has no children
/// collection before the final segment.
pub(crate) fn resolve<'a>(root: &'a TreeNode, path: &str) -> Result<&'a TreeNode, TreeError> {
    let segments = parse_path(path)?;
    descend(root, &segments).ok_or_else(|| TreeError::InvalidPath(path.to_string()))
}

/// Identity-based depth-first search for the parent of `id`, returning the
/// parent together with the child's index among its siblings. The root has
/// no parent, so its own id never matches.
pub(crate) fn find_parent<'a>(root: &'a TreeNode, id: NodeId) -> Option<(&'a TreeNode, usize)> {
    let kids = root.children.as_ref()?;

    if let Some(idx) = kids.iter().position(|kid| kid.id == id) {
        return Some((root, idx));
    }

    kids.iter().find_map(|kid| find_parent(kid, id))
}

/// Total node count, root included.
pub(crate) fn count_nodes(node: &TreeNode) -> usize {
    1 + node
        .children
        .as_ref()
        .map_or(0, |kids| kids.iter().map(count_nodes).sum())
}

/// Append a new leaf at the end of the children of the node at `path`.
pub(crate) fn apply_append(
    state: &OutlineState,
    path: &str,
    name: &str,
) -> Result<OutlineState, TreeError> {
    apply_append_at(state, path, None, name)
}

/// Insert a new leaf under the node at `path`, spliced in at `index` among
/// the existing children (`None` = after the last).
///
/// Works on a deep copy: the path is re-resolved against the copy and the
/// input state stays valid for any read happening in the same render cycle.
/// Empty names are accepted and produce a leaf with an empty label.
pub(crate) fn apply_append_at(
    state: &OutlineState,
    path: &str,
    index: Option<usize>,
    name: &str,
) -> Result<OutlineState, TreeError> {
    let segments = parse_path(path)?;

    let mut root = state.root.clone();
    let Some(parent) = descend_mut(&mut root, &segments) else {
        return Err(TreeError::NullParent);
    };

    let leaf = TreeNode::leaf(NodeId(state.next_id), name);
    match parent.children.as_mut() {
        None => parent.children = Some(vec![leaf]),
        Some(kids) => {
            let at = index.unwrap_or(kids.len());
            if at > kids.len() {
                return Err(TreeError::InvalidPath(format!("{path} @ {at}")));
            }
            kids.insert(at, leaf);
        }
    }

    Ok(OutlineState {
        root,
        selected: state.selected,
        next_id: state.next_id + 1,
    })
}

/// Record `id` as the selection. The tree itself is untouched.
pub(crate) fn select_node(state: &OutlineState, id: NodeId) -> OutlineState {
    OutlineState {
        selected: Some(id),
        ..state.clone()
    }
}

fn remove_by_id(node: &mut TreeNode, id: NodeId) -> Option<TreeNode> {
    let kids = node.children.as_mut()?;

    if let Some(idx) = kids.iter().position(|kid| kid.id == id) {
        return Some(kids.remove(idx));
    }

    kids.iter_mut().find_map(|kid| remove_by_id(kid, id))
}

/// Remove the selected node and clear the selection.
///
/// Returns `None` (the caller no-ops) when nothing is selected or the
/// selection has no parent: the root, or an id no longer present. The
/// emptied children collection stays in place after the last child goes,
/// which makes the parent leaf-shaped and editable again.
pub(crate) fn apply_delete(state: &OutlineState) -> Option<OutlineState> {
    let selected = state.selected?;

    // Root or an id no longer present: silently nothing to do.
    find_parent(&state.root, selected)?;

    let mut root = state.root.clone();
    remove_by_id(&mut root, selected)?;

    Some(OutlineState {
        root,
        selected: None,
        next_id: state.next_id,
    })
}
