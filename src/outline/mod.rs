use crate::components::ui::{Button, ButtonSize, ButtonVariant, Input};
use crate::drafts::{clear_draft, draft_for, set_draft};
use crate::state::AppContext;
use crate::tree::{apply_append, apply_delete, resolve, select_node};
use icons::X;
use leptos::prelude::*;

/// Row prefix: the name's first character, one period per level, then the
/// rest of the name. An empty name still gets its periods.
pub(crate) fn level_label(name: &str, level: usize) -> String {
    let mut chars = name.chars();

    let mut out = String::with_capacity(name.len() + level);
    if let Some(first) = chars.next() {
        out.push(first);
    }
    for _ in 0..level {
        out.push('.');
    }
    out.push_str(chars.as_str());
    out
}

/// Pixel indentation for a row at `level`.
pub(crate) fn indent_px(level: usize) -> i32 {
    (level * 20) as i32
}

/// Dotted path of the `index`-th child under `path`.
pub(crate) fn child_path(path: &str, index: usize) -> String {
    if path.is_empty() {
        index.to_string()
    } else {
        format!("{path}.{index}")
    }
}

#[component]
pub fn OutlineTree() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let outline = app_state.0.outline;

    let root_path = String::new();

    view! {
        <div class="outline-tree">
            <Show when=move || outline.get().selected.is_some() fallback=|| ().into_view()>
                <div class="mb-3">
                    <Button
                        variant=ButtonVariant::Destructive
                        size=ButtonSize::Sm
                        on:click=move |_| {
                            let st = outline.get_untracked();
                            if let Some(next) = apply_delete(&st) {
                                outline.set(next);
                            }
                        }
                    >
                        "Delete selected"
                    </Button>
                </div>
            </Show>

            <div class="space-y-0.5">
                <OutlineRow path=root_path depth=0 />
            </div>
        </div>
    }
}

#[component]
fn OutlineRow(path: String, depth: usize) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let outline = app_state.0.outline;
    let drafts = app_state.0.drafts;

    let path_sv = StoredValue::new(path);

    view! {
        <div>
            {move || {
                let path = path_sv.get_value();
                let st = outline.get();

                // A stale path (siblings shifted under us) renders nothing;
                // the parent rebuilds its rows in the same cycle.
                let Ok(node) = resolve(&st.root, &path) else {
                    return ().into_view().into_any();
                };
                let node = node.clone();

                let id = node.id;
                let is_selected = st.selected == Some(id);
                let label = level_label(&node.name, depth);
                let pad = indent_px(depth);

                let row_class = if is_selected {
                    "outline-row flex items-center gap-2 py-1 rounded-md bg-primary/10 ring-1 ring-primary/30"
                } else {
                    "outline-row flex items-center gap-2 py-1"
                };

                // Positions shift on every mutation, so rows are rebuilt
                // wholesale instead of keyed across renders.
                let kids_view = match node.children.as_ref() {
                    Some(kids) if !kids.is_empty() => kids
                        .iter()
                        .enumerate()
                        .map(|(i, _)| {
                            view! { <OutlineRow path=child_path(&path, i) depth=depth + 1 /> }
                        })
                        .collect_view()
                        .into_any(),
                    _ => ().into_view().into_any(),
                };

                let input_view = if node.is_leaf() {
                    let input_path = path.clone();
                    let edit_path = path.clone();
                    let commit_path = path.clone();

                    view! {
                        <div class="py-0.5" style=format!("padding-left: {}px", indent_px(depth + 1))>
                            <Input
                                class="h-8 max-w-64 text-sm"
                                placeholder="Add a node"
                                value=Signal::derive(move || drafts.with(|d| draft_for(d, &input_path)))
                                on_input=Callback::new(move |v: String| {
                                    drafts.update(|d| set_draft(d, &edit_path, v));
                                })
                                on_keydown=Callback::new(move |ev: web_sys::KeyboardEvent| {
                                    if ev.key() != "Enter" {
                                        return;
                                    }
                                    ev.prevent_default();

                                    let text = drafts
                                        .with_untracked(|d| draft_for(d, &commit_path))
                                        .trim()
                                        .to_string();

                                    let st = outline.get_untracked();
                                    match apply_append(&st, &commit_path, &text) {
                                        Ok(next) => {
                                            outline.set(next);
                                            drafts.update(|d| clear_draft(d, &commit_path));
                                        }
                                        Err(e) => leptos::logging::warn!("append aborted: {e}"),
                                    }
                                })
                            />
                        </div>
                    }
                    .into_any()
                } else {
                    ().into_view().into_any()
                };

                view! {
                    <div>
                        <div class=row_class style=format!("padding-left: {pad}px")>
                            <span class="text-sm leading-6">{label}</span>
                            <button
                                class="inline-flex size-5 items-center justify-center rounded text-muted-foreground hover:bg-accent hover:text-accent-foreground"
                                title="Select for deletion"
                                on:click=move |_| {
                                    let st = outline.get_untracked();
                                    outline.set(select_node(&st, id));
                                }
                            >
                                <X class="size-3.5" />
                            </button>
                        </div>
                        {input_view}
                        {kids_view}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_label_threads_periods_after_the_first_char() {
        assert_eq!(level_label("Root", 0), "Root");
        assert_eq!(level_label("Apple", 2), "A..pple");
        assert_eq!(level_label("x", 1), "x.");
    }

    #[test]
    fn test_level_label_empty_name_is_just_the_periods() {
        assert_eq!(level_label("", 0), "");
        assert_eq!(level_label("", 3), "...");
    }

    #[test]
    fn test_level_label_splits_on_chars_not_bytes() {
        assert_eq!(level_label("Ärbol", 2), "Ä..rbol");
    }

    #[test]
    fn test_indent_grows_twenty_px_per_level() {
        assert_eq!(indent_px(0), 0);
        assert_eq!(indent_px(3), 60);
    }

    #[test]
    fn test_child_path_extends_the_dotted_path() {
        assert_eq!(child_path("", 0), "0");
        assert_eq!(child_path("0", 2), "0.2");
        assert_eq!(child_path("0.2", 1), "0.2.1");
    }
}
