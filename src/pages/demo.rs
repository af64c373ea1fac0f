//! Guided demo experience: a tab rail of modules rendering demo fixtures.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::logo::Logo;
use crate::components::role_badge::RoleBadge;
use crate::components::stat_card::StatCard;
use crate::net::session_sync::AuthHandle;
use crate::net::types::TermStatus;
use crate::state::session::SessionState;
use crate::util::demo;
use crate::util::format;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DemoModule {
    Overview,
    Students,
    Staff,
    Classes,
    Academics,
    Assessments,
    Reports,
    Communication,
}

impl DemoModule {
    const ALL: [Self; 8] = [
        Self::Overview,
        Self::Students,
        Self::Staff,
        Self::Classes,
        Self::Academics,
        Self::Assessments,
        Self::Reports,
        Self::Communication,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Students => "Students",
            Self::Staff => "Staff",
            Self::Classes => "Classes",
            Self::Academics => "Academics",
            Self::Assessments => "Assessments",
            Self::Reports => "Reports",
            Self::Communication => "Communication",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Overview => "📊",
            Self::Students => "👥",
            Self::Staff => "🎓",
            Self::Classes => "🏫",
            Self::Academics => "📖",
            Self::Assessments => "🎯",
            Self::Reports => "📄",
            Self::Communication => "💬",
        }
    }

    fn blurb(self) -> &'static str {
        match self {
            Self::Overview => "School performance metrics and insights",
            Self::Students => "Enrollment, profiles, and student records",
            Self::Staff => "Teacher profiles and assignments",
            Self::Classes => "Class setup, schedules, and room assignments",
            Self::Academics => "Curriculum, subjects, and grading",
            Self::Assessments => "Computer-based testing and evaluations",
            Self::Reports => "Performance reports and data insights",
            Self::Communication => "Messages, announcements, and notifications",
        }
    }
}

/// Demo page. Requires a signed-in user like the dashboard does.
#[component]
pub fn DemoPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let auth = expect_context::<AuthHandle>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if !state.loading && !state.is_authenticated() {
            navigate("/auth", NavigateOptions::default());
        }
    });

    let active = RwSignal::new(DemoModule::Overview);

    let on_end_demo = move |_| {
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            auth.sign_out().await;
        });
    };

    let user_line = move || {
        session.get().profile.map(|profile| {
            view! {
                <div class="demo__user">
                    <span class="muted">"Welcome,"</span>
                    <span class="demo__user-name">{profile.first_name.clone()}</span>
                    <RoleBadge role=profile.role/>
                </div>
            }
        })
    };

    view! {
        <div class="demo">
            <header class="demo__header">
                <Logo compact=true/>
                <div class="demo__header-actions">
                    <span class="badge badge--teal">"Demo Mode"</span>
                    {user_line}
                    <button class="btn" on:click=on_end_demo>
                        "End Demo"
                    </button>
                </div>
            </header>

            <main class="demo__main">
                <h1>"NaWe Demo Experience"</h1>
                <p class="muted">
                    "Explore all features of the school management system. "
                    "All data shown is simulated for demonstration purposes."
                </p>

                <div class="demo__tabs">
                    {DemoModule::ALL
                        .into_iter()
                        .map(|module| {
                            view! {
                                <button
                                    class=move || {
                                        if active.get() == module {
                                            "demo__tab demo__tab--active"
                                        } else {
                                            "demo__tab"
                                        }
                                    }
                                    on:click=move |_| active.set(module)
                                >
                                    <span>{module.icon()}</span>
                                    {module.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <section class="card demo__content">
                    <h2>
                        {move || active.get().icon()}
                        " "
                        {move || active.get().label()}
                    </h2>
                    <p class="muted">{move || active.get().blurb()}</p>
                    {move || module_content(active.get())}
                </section>
            </main>

            <footer class="demo__footer muted">
                <span>"© 2024 NaWe School Management System. Demo Environment."</span>
                <span class="badge badge--green">"Live Demo"</span>
            </footer>
        </div>
    }
}

fn module_content(module: DemoModule) -> AnyView {
    match module {
        DemoModule::Overview => overview_content(),
        DemoModule::Students => students_content(),
        DemoModule::Staff => staff_content(),
        DemoModule::Classes => classes_content(),
        DemoModule::Academics => academics_content(),
        DemoModule::Assessments => assessments_content(),
        DemoModule::Reports => reports_content(),
        DemoModule::Communication => communication_content(),
    }
}

fn overview_content() -> AnyView {
    let session = demo::demo_academic_session();
    let terms = demo::demo_terms();
    view! {
        <div class="demo__grid demo__grid--stats">
            <StatCard
                title="Total Students"
                value=format::format_number(1_247)
                note="+8.2% from last term"
                icon="👥"
            />
            <StatCard
                title="Teaching Staff"
                value=format::format_number(89)
                note="45 full-time, 44 part-time"
                icon="🎓"
            />
            <StatCard
                title="Attendance Rate"
                value=format::format_percentage(96.3, 1)
                note="+2.1% this month"
                icon="📈"
            />
            <StatCard
                title="Academic Performance"
                value=format::format_percentage(87.5, 1)
                note="Average class performance"
                icon="🎯"
            />
        </div>
        <div class="demo__grid">
            <div class="card">
                <h3>"📅 Current Academic Session"</h3>
                <div class="demo__session-row">
                    <span>{format!("{} Academic Year", session.name)}</span>
                    <span class="badge badge--green">"Active"</span>
                </div>
                <ul class="demo__terms">
                    {terms
                        .into_iter()
                        .map(|term| {
                            let badge = if term.is_current {
                                view! { <span class="badge badge--teal">"Current"</span> }.into_any()
                            } else if term.status == TermStatus::Open {
                                view! { <span class="badge">"Open"</span> }.into_any()
                            } else {
                                view! { <span class="badge badge--muted">"Closed"</span> }.into_any()
                            };
                            view! {
                                <li class="demo__term">
                                    <span>{term.name.clone()}</span>
                                    <span class="muted">
                                        {format!(
                                            "{} to {}",
                                            format::format_short_date(&term.start_date),
                                            format::format_short_date(&term.end_date),
                                        )}
                                    </span>
                                    {badge}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
            <div class="card">
                <h3>"🏆 Recent Achievements"</h3>
                <ul class="demo__list">
                    <li>"Mathematics Olympiad, 3rd Place"</li>
                    <li>"Science Fair, Best Innovation Award"</li>
                    <li>"Inter-school Sports Competition"</li>
                </ul>
            </div>
        </div>
    }
    .into_any()
}

fn students_content() -> AnyView {
    view! {
        <div class="demo__grid">
            <div class="card">
                <h3>"Quick Actions"</h3>
                <button class="quick-action">"➕ Enroll New Student"</button>
                <button class="quick-action">"👥 View All Students"</button>
                <button class="quick-action">"📄 Generate Reports"</button>
            </div>
            <div class="card">
                <h3>"Recent Enrollments"</h3>
                <ul class="demo__list">
                    <li>"Adebayo Tunde, JSS 1A"</li>
                    <li>"Fatima Mohammed, SS 2B"</li>
                    <li>"Chinedu Okeke, JSS 3C"</li>
                </ul>
            </div>
        </div>
    }
    .into_any()
}

fn staff_content() -> AnyView {
    view! {
        <div class="demo__grid demo__grid--stats">
            <StatCard
                title="Teaching Staff"
                value=format::format_number(89)
                note="Active teachers"
                icon="🎓"
            />
            <StatCard
                title="Support Staff"
                value=format::format_number(24)
                note="Administrative staff"
                icon="👥"
            />
            <StatCard
                title="Departments"
                value=format::format_number(12)
                note="Academic departments"
                icon="🏫"
            />
        </div>
    }
    .into_any()
}

fn classes_content() -> AnyView {
    view! {
        <div class="demo__grid demo__grid--stats">
            {demo::demo_classes()
                .into_iter()
                .map(|class| {
                    let capacity = class
                        .capacity
                        .map_or_else(String::new, |c| format!("Capacity {c}"));
                    view! {
                        <div class="card">
                            <h3>{class.name.clone()}</h3>
                            <p class="muted">{class.level.clone()}</p>
                            <p class="muted">{capacity}</p>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}

fn academics_content() -> AnyView {
    view! {
        <div class="demo__grid">
            <div class="card">
                <h3>"Subjects Offered"</h3>
                <ul class="demo__list">
                    {demo::demo_subjects()
                        .into_iter()
                        .map(|subject| {
                            view! {
                                <li>
                                    <span>{subject.name.clone()}</span>
                                    <span class="muted">{format!(" ({})", subject.code)}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
            <div class="card">
                <h3>"Grading System"</h3>
                <ul class="demo__list">
                    <li>"A (Excellent) 90-100%"</li>
                    <li>"B (Very Good) 80-89%"</li>
                    <li>"C (Good) 70-79%"</li>
                    <li>"D (Pass) 60-69%"</li>
                </ul>
            </div>
        </div>
    }
    .into_any()
}

fn assessments_content() -> AnyView {
    view! {
        <div class="demo__grid">
            <div class="card">
                <h3>"Ongoing Assessments"</h3>
                <ul class="demo__list">
                    <li>"Mathematics Mid-term Test"<span class="badge badge--green">"Active"</span></li>
                    <li>"English Language Quiz"<span class="badge badge--teal">"Pending"</span></li>
                    <li>"Science Practical"<span class="badge">"Scheduled"</span></li>
                </ul>
            </div>
            <div class="card">
                <h3>"Assessment Statistics"</h3>
                <ul class="demo__list">
                    <li>{format!("Completed tests: {}", format::format_number(156))}</li>
                    <li>{format!("Average score: {}", format::format_percentage(78.5, 1))}</li>
                    <li>{format!("Participation rate: {}", format::format_percentage(94.2, 1))}</li>
                </ul>
            </div>
        </div>
    }
    .into_any()
}

fn reports_content() -> AnyView {
    view! {
        <div class="demo__grid">
            <div class="card">
                <h3>"📊 Academic Reports"</h3>
                <button class="quick-action">"Student Report Cards"</button>
                <button class="quick-action">"Class Performance"</button>
                <button class="quick-action">"Subject Analysis"</button>
            </div>
            <div class="card">
                <h3>"📈 Administrative"</h3>
                <button class="quick-action">"Attendance Reports"</button>
                <button class="quick-action">"Financial Summary"</button>
                <button class="quick-action">"Staff Reports"</button>
            </div>
        </div>
    }
    .into_any()
}

fn communication_content() -> AnyView {
    view! {
        <div class="demo__grid">
            <div class="card">
                <h3>"🔔 Recent Announcements"</h3>
                <ul class="demo__list">
                    <li>"Parent-Teacher Meeting, scheduled for next Friday"</li>
                    <li>"Mid-term Break, two weeks starting Monday"</li>
                    <li>"Sports Day, inter-house competition"</li>
                </ul>
            </div>
            <div class="card">
                <h3>"💬 Quick Actions"</h3>
                <button class="quick-action">"✉ Send Announcement"</button>
                <button class="quick-action">"📱 SMS Notification"</button>
                <button class="quick-action">"🔔 Emergency Alert"</button>
            </div>
        </div>
    }
    .into_any()
}
