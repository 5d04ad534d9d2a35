//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::workflow::WorkflowPage;
use crate::state::{ui::UiState, workflow::WorkflowState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the workflow store and layout state, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let workflow = RwSignal::new(WorkflowState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(workflow);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/workbench-ui.css"/>
        <Title text="Workbench"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=(StaticSegment("workflows"), ParamSegment("id")) view=WorkflowPage/>
            </Routes>
        </Router>
    }
}
