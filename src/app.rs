//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::session_sync::start_session_sync;
use crate::pages::{
    auth::AuthPage, dashboard::DashboardPage, demo::DemoPage, index::IndexPage, test::TestPage,
};
use crate::state::session::SessionState;

/// Root application component.
///
/// Provides the session signal and auth handle as contexts, starts the
/// session synchronizer, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // The synchronizer outlives every page; its teardown is tied to this
    // component's scope.
    let auth = start_session_sync(session);
    provide_context(auth);

    view! {
        <Title text="NaWe School Management"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=IndexPage/>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("demo") view=DemoPage/>
                <Route path=StaticSegment("test") view=TestPage/>
            </Routes>
        </Router>
    }
}
