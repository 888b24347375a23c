use crate::components::ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::outline::OutlineTree;
use crate::state::AppContext;
use crate::tree::count_nodes;
use leptos::prelude::*;

#[component]
pub fn OutlinePage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let outline = app_state.0.outline;

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto w-full max-w-[720px] px-4 py-8">
                <div class="mb-4 space-y-1">
                    <h1 class="text-xl font-semibold">"Arbor"</h1>
                    <p class="text-xs text-muted-foreground">"Outlines, organized."</p>
                </div>

                <Card>
                    <CardHeader>
                        <CardTitle>"Outline"</CardTitle>
                        <CardDescription>
                            {move || format!("{} nodes", count_nodes(&outline.get().root))}
                        </CardDescription>
                    </CardHeader>

                    <CardContent>
                        <OutlineTree />
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}
