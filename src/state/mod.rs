use crate::drafts::DraftMap;
use crate::model::TreeNode;
use crate::seed::load_seed;
use crate::tree::OutlineState;
use leptos::prelude::*;

#[derive(Clone)]
pub(crate) struct AppState {
    /// The tree, the selection, and the id counter. Every committed edit
    /// replaces the whole value, so readers only ever see full snapshots.
    pub outline: RwSignal<OutlineState>,

    /// Pending input text per dotted path.
    pub drafts: RwSignal<DraftMap>,
}

impl AppState {
    pub fn new() -> Self {
        let seed = load_seed();

        let mut next_id = 0;
        let root = TreeNode::from_seed(&seed, &mut next_id);

        Self {
            outline: RwSignal::new(OutlineState::new(root, next_id)),
            drafts: RwSignal::new(DraftMap::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
