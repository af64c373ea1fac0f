//! Application logo with role-aware navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Clickable logo: signed-in users land on the dashboard, everyone else on
/// the landing page.
#[component]
pub fn Logo(#[prop(default = false)] compact: bool) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_click = move |_| {
        let target = if session.get().is_authenticated() { "/dashboard" } else { "/" };
        navigate(target, NavigateOptions::default());
    };

    view! {
        <div class="logo" role="button" tabindex="0" on:click=on_click>
            <span class="logo__mark">"🎓"</span>
            <div class="logo__text">
                <span class="logo__name">"NaWe"</span>
                <Show when=move || !compact>
                    <span class="logo__subtitle">"School Management"</span>
                </Show>
            </div>
        </div>
    }
}
