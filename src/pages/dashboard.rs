//! Role-scoped dashboard.
//!
//! Guarded by session state: a spinner while the first session check runs,
//! a redirect to `/auth` once it settles signed-out. Quick actions come
//! from the role→capability table, never from role switches in the view.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::logo::Logo;
use crate::components::role_badge::RoleBadge;
use crate::components::stat_card::StatCard;
use crate::net::session_sync::AuthHandle;
use crate::state::roles;
use crate::state::session::SessionState;
use crate::util::format;

const ACTIVITY: [(&str, &str, &str, &str); 3] = [
    (
        "📅",
        "First Term Started",
        "Academic session 2024/2025 first term is now active",
        "2 days ago",
    ),
    (
        "🔔",
        "New Announcement",
        "Parent-Teacher meeting scheduled for next week",
        "1 week ago",
    ),
    (
        "📈",
        "Attendance Improved",
        "School attendance rate increased to 94.2%",
        "2 weeks ago",
    ),
];

/// Dashboard page with header, welcome line, stats, role quick actions and
/// an activity feed.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let auth = expect_context::<AuthHandle>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if !state.loading && !state.is_authenticated() {
            navigate("/auth", NavigateOptions::default());
        }
    });

    // Sign-out clears the store; the guard Effect then redirects.
    let on_sign_out = move |_| {
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            auth.sign_out().await;
        });
    };

    let welcome = move || {
        let state = session.get();
        match state.profile {
            Some(profile) => view! {
                <div class="dashboard__welcome">
                    <div>
                        <h2>{format!("Welcome back, {}!", profile.first_name)}</h2>
                        <p class="muted">"Here's what's happening at your school today."</p>
                    </div>
                    <div class="dashboard__role">
                        <span class="dashboard__role-icon">{profile.role.icon()}</span>
                        <RoleBadge role=profile.role/>
                    </div>
                </div>
            }
            .into_any(),
            None => view! {
                <div class="dashboard__welcome">
                    <div>
                        <h2>"Welcome back!"</h2>
                        <p class="muted">"Loading your profile..."</p>
                    </div>
                </div>
            }
            .into_any(),
        }
    };

    let quick_actions = move || {
        session.get().profile.map_or_else(
            || {
                view! { <p class="muted">"Actions appear once your profile loads."</p> }.into_any()
            },
            |profile| {
                view! {
                    <div class="dashboard__actions">
                        {roles::quick_actions(profile.role)
                            .into_iter()
                            .map(|action| {
                                view! {
                                    <button class="quick-action">
                                        <span class="quick-action__icon">{action.icon}</span>
                                        {action.label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any()
            },
        )
    };

    view! {
        <Show
            when=move || !session.get().loading
            fallback=|| {
                view! {
                    <div class="page-loading">
                        <div class="spinner"></div>
                        <p class="muted">"Loading..."</p>
                    </div>
                }
            }
        >
            <div class="dashboard">
                <header class="dashboard__header">
                    <Logo/>
                    <div class="dashboard__header-actions">
                        <a class="btn btn--ghost" href="/test" title="Test system">
                            "🧪"
                        </a>
                        <a class="btn btn--ghost" href="/demo" title="Demo experience">
                            "🔭"
                        </a>
                        <button class="btn" on:click=on_sign_out>
                            "Sign Out"
                        </button>
                    </div>
                </header>

                <main class="dashboard__main">
                    {welcome}

                    <div class="dashboard__stats">
                        <StatCard
                            title="Total Students"
                            value=format::format_number(245)
                            note="+12 from last month"
                            icon="👥"
                        />
                        <StatCard
                            title="Active Teachers"
                            value=format::format_number(28)
                            note="All positions filled"
                            icon="🎓"
                        />
                        <StatCard
                            title="Current Term"
                            value="First".to_owned()
                            note="2024/2025 Session"
                            icon="📅"
                        />
                        <StatCard
                            title="Attendance Rate"
                            value=format::format_percentage(94.2, 1)
                            note="+2.1% from last week"
                            icon="📈"
                        />
                    </div>

                    <div class="dashboard__panels">
                        <section class="card">
                            <h3>"Quick Actions"</h3>
                            <p class="muted">"Common tasks for your role"</p>
                            {quick_actions}
                        </section>

                        <section class="card">
                            <h3>"Recent Activity"</h3>
                            <p class="muted">"Latest updates and notifications"</p>
                            <ul class="activity">
                                {ACTIVITY
                                    .into_iter()
                                    .map(|(icon, title, detail, when)| {
                                        view! {
                                            <li class="activity__item">
                                                <span class="activity__icon">{icon}</span>
                                                <div>
                                                    <p class="activity__title">{title}</p>
                                                    <p class="muted">{detail}</p>
                                                    <p class="muted activity__when">{when}</p>
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </section>
                    </div>
                </main>
            </div>
        </Show>
    }
}
