//! Landing page: hero, feature grid and call-to-action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::logo::Logo;
use crate::state::session::SessionState;

const FEATURES: [(&str, &str, &str); 6] = [
    (
        "🏫",
        "Multi-Tenant Architecture",
        "Manage multiple schools from one platform with isolated data and customizable settings.",
    ),
    (
        "👥",
        "Role-Based Access",
        "Nine distinct user roles from super admin to students, each with appropriate permissions.",
    ),
    (
        "📖",
        "Nigerian Term System",
        "Built for the Nigerian three-term academic system with proper term management.",
    ),
    (
        "📈",
        "Performance Analytics",
        "Dashboards with visual reports for student progress and school performance.",
    ),
    (
        "🎓",
        "CBT Integration",
        "Computer-based testing for modern examination and assessment methods.",
    ),
    (
        "🎨",
        "Customizable Branding",
        "Each school can customize themes, logos, and branding to match their identity.",
    ),
];

/// Landing page. Signed-in users are sent straight to their dashboard.
#[component]
pub fn IndexPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.is_authenticated() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

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
            <div class="index-page">
                <header class="index-page__header">
                    <Logo/>
                    <a class="btn btn--primary" href="/auth">
                        "Get Started"
                    </a>
                </header>

                <main class="index-page__main">
                    <section class="index-page__hero">
                        <h2>"Modern School Management"</h2>
                        <p class="muted">
                            "Streamline your educational institution with a comprehensive, "
                            "Nigerian-focused school management system designed for efficiency and growth."
                        </p>
                        <div class="index-page__hero-actions">
                            <a class="btn btn--primary btn--lg" href="/auth">
                                "Start Free Trial"
                            </a>
                            <a class="btn btn--lg" href="/test">
                                "🧪 Test System"
                            </a>
                        </div>
                    </section>

                    <section class="index-page__features">
                        {FEATURES
                            .into_iter()
                            .map(|(icon, title, blurb)| {
                                view! {
                                    <div class="feature-card">
                                        <span class="feature-card__icon">{icon}</span>
                                        <h3>{title}</h3>
                                        <p class="muted">{blurb}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </section>

                    <section class="index-page__cta">
                        <h3>"Ready to Transform Your School?"</h3>
                        <p class="muted">
                            "Join hundreds of Nigerian schools already using NaWe to streamline their operations."
                        </p>
                        <a class="btn btn--primary btn--lg" href="/auth">
                            "Get Started Today"
                        </a>
                        <p class="index-page__fine-print muted">
                            "Free trial · No credit card required · Setup in minutes"
                        </p>
                    </section>
                </main>

                <footer class="index-page__footer muted">
                    <p>"© 2024 NaWe. Built for Nigerian Educational Excellence."</p>
                </footer>
            </div>
        </Show>
    }
}
