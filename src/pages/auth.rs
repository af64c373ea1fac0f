//! Login / sign-up page with demo-account quick fill.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::session_sync::AuthHandle;
use crate::net::types::{NewAccount, UserRole};
use crate::state::session::SessionState;
use crate::util::demo::{DEMO_ACCOUNTS, DEMO_SCHOOL};
use crate::util::validation::{SignInForm, SignUpForm};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthTab {
    Login,
    SignUp,
}

fn tab_class(active: bool) -> &'static str {
    if active { "auth-tabs__tab auth-tabs__tab--active" } else { "auth-tabs__tab" }
}

/// Authentication page: login and sign-up tabs over one shared alert.
/// Redirects to the dashboard once a user is present.
#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let auth = expect_context::<AuthHandle>();
    let navigate = use_navigate();

    Effect::new(move || {
        if session.get().is_authenticated() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    let tab = RwSignal::new(AuthTab::Login);
    let error = RwSignal::new(None::<String>);
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let login_email = RwSignal::new(String::new());
    let login_password = RwSignal::new(String::new());

    let signup_email = RwSignal::new(String::new());
    let signup_password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let school_code = RwSignal::new(DEMO_SCHOOL.code.to_owned());
    let role = RwSignal::new(None::<UserRole>);

    let on_login = {
        let auth = auth.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let form = SignInForm {
                email: login_email.get().trim().to_owned(),
                password: login_password.get(),
            };
            if let Some((_, message)) = form.validate().into_iter().next() {
                error.set(Some(message.to_owned()));
                return;
            }
            busy.set(true);
            error.set(None);
            info.set(None);
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                // Success shows up as the auth event that flips the redirect
                // Effect; the page itself only learns about errors.
                if let Err(e) = auth.sign_in(&form.email, &form.password).await {
                    error.set(Some(e.to_string()));
                }
                busy.set(false);
            });
        }
    };

    let on_signup = {
        let auth = auth.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let form = SignUpForm {
                email: signup_email.get().trim().to_owned(),
                password: signup_password.get(),
                first_name: first_name.get().trim().to_owned(),
                last_name: last_name.get().trim().to_owned(),
                school_code: school_code.get().trim().to_owned(),
                role: role.get(),
            };
            if let Some((_, message)) = form.validate().into_iter().next() {
                error.set(Some(message.to_owned()));
                return;
            }
            let Some(role_value) = form.role else {
                return;
            };
            busy.set(true);
            error.set(None);
            info.set(None);
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                let account = NewAccount {
                    first_name: form.first_name.clone(),
                    last_name: form.last_name.clone(),
                    // School-code lookup is not wired up yet; accounts land
                    // on the demo tenant like the hosted pilot does.
                    school_id: DEMO_SCHOOL.id.to_owned(),
                    role: role_value,
                };
                match auth.sign_up(&form.email, &form.password, &account).await {
                    Ok(()) => info.set(Some(
                        "Account created! Check your email to verify your account.".to_owned(),
                    )),
                    Err(e) => error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__column">
                <div class="auth-page__brand">
                    <span class="auth-page__mark">"🎓"</span>
                    <h1>"NaWe"</h1>
                    <p class="muted">"School Management System"</p>
                </div>

                <div class="card auth-page__demo">
                    <h3>"🧪 Demo Accounts"</h3>
                    <div class="auth-page__demo-grid">
                        {DEMO_ACCOUNTS[..4]
                            .iter()
                            .map(|account| {
                                let email = account.email;
                                let password = account.password;
                                let label = account.role.label();
                                view! {
                                    <button
                                        class="btn btn--sm"
                                        on:click=move |_| {
                                            tab.set(AuthTab::Login);
                                            login_email.set(email.to_owned());
                                            login_password.set(password.to_owned());
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <p class="muted auth-page__demo-hint">"Click to auto-fill login credentials"</p>
                </div>

                <div class="card">
                    <h2 class="auth-page__title">"Welcome"</h2>
                    <p class="muted auth-page__subtitle">
                        "Sign in to your account or create a new one"
                    </p>

                    <div class="auth-tabs">
                        <button
                            class=move || tab_class(tab.get() == AuthTab::Login)
                            on:click=move |_| tab.set(AuthTab::Login)
                        >
                            "Login"
                        </button>
                        <button
                            class=move || tab_class(tab.get() == AuthTab::SignUp)
                            on:click=move |_| tab.set(AuthTab::SignUp)
                        >
                            "Sign Up"
                        </button>
                    </div>

                    <Show when=move || error.get().is_some()>
                        <div class="alert alert--error">{move || error.get().unwrap_or_default()}</div>
                    </Show>
                    <Show when=move || info.get().is_some()>
                        <div class="alert alert--info">{move || info.get().unwrap_or_default()}</div>
                    </Show>

                    <Show when=move || tab.get() == AuthTab::Login>
                        <form class="auth-form" on:submit=on_login.clone()>
                            <label class="auth-form__field">
                                "Email"
                                <input
                                    type="email"
                                    placeholder="Enter your email"
                                    prop:value=move || login_email.get()
                                    on:input=move |ev| login_email.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="auth-form__field">
                                "Password"
                                <input
                                    type="password"
                                    placeholder="Enter your password"
                                    prop:value=move || login_password.get()
                                    on:input=move |ev| login_password.set(event_target_value(&ev))
                                />
                            </label>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                            </button>
                        </form>
                    </Show>

                    <Show when=move || tab.get() == AuthTab::SignUp>
                        <form class="auth-form" on:submit=on_signup.clone()>
                            <div class="auth-form__row">
                                <label class="auth-form__field">
                                    "First Name"
                                    <input
                                        placeholder="First name"
                                        prop:value=move || first_name.get()
                                        on:input=move |ev| first_name.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="auth-form__field">
                                    "Last Name"
                                    <input
                                        placeholder="Last name"
                                        prop:value=move || last_name.get()
                                        on:input=move |ev| last_name.set(event_target_value(&ev))
                                    />
                                </label>
                            </div>
                            <label class="auth-form__field">
                                "Email"
                                <input
                                    type="email"
                                    placeholder="Enter your email"
                                    prop:value=move || signup_email.get()
                                    on:input=move |ev| signup_email.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="auth-form__field">
                                "Password"
                                <input
                                    type="password"
                                    placeholder="Create a password"
                                    prop:value=move || signup_password.get()
                                    on:input=move |ev| signup_password.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="auth-form__field">
                                "School Code"
                                <input
                                    placeholder="Enter your school code"
                                    prop:value=move || school_code.get()
                                    on:input=move |ev| school_code.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="auth-form__field">
                                "Role"
                                <select on:change=move |ev| {
                                    role.set(UserRole::from_str_opt(&event_target_value(&ev)));
                                }>
                                    <option value="" selected=move || role.get().is_none()>
                                        "Select your role"
                                    </option>
                                    {UserRole::ALL
                                        .into_iter()
                                        .filter(|r| *r != UserRole::SuperAdmin)
                                        .map(|r| {
                                            view! {
                                                <option
                                                    value=r.as_str()
                                                    selected=move || role.get() == Some(r)
                                                >
                                                    {r.label()}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                            </label>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                            </button>
                        </form>
                    </Show>
                </div>
            </div>
        </div>
    }
}
