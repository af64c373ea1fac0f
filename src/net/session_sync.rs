//! Session synchronizer — bridges the backend's auth events into the
//! session store.
//!
//! DESIGN
//! ======
//! Two startup actions race: the event drain loop is spawned first, then
//! the persisted-session snapshot is emitted as an initial event. Both
//! paths feed one channel; the drain loop assigns each event a
//! monotonically increasing sequence number, and the store rejects stale
//! numbers, so the backend's latest truth always wins regardless of which
//! path lands first.
//!
//! Profile fetches are deferred by one scheduling turn instead of running
//! inside the event handler: the backend client may still hold its own
//! internal lock while delivering an auth event, and calling back into it
//! synchronously can deadlock. The deferral buys eventual consistency lag
//! between "authenticated" and "profile known"; stale fetches that land
//! after a newer session are neutralized by the store's user-id guard.
//!
//! Teardown drops the channel sender exactly once via `on_cleanup`, which
//! ends the drain loop — no subscription leaks across remounts.

#[cfg(test)]
#[path = "session_sync_test.rs"]
mod session_sync_test;

use crate::net::api::AuthError;
use crate::net::types::{NewAccount, Session};
use crate::state::session::SessionState;

#[cfg(feature = "web")]
use crate::net::api;
#[cfg(feature = "web")]
use crate::net::types::NewProfile;
#[cfg(feature = "web")]
use crate::util::demo::DemoAccount;
#[cfg(feature = "web")]
use crate::util::session_storage;
#[cfg(feature = "web")]
use leptos::prelude::{RwSignal, on_cleanup};

/// Auth lifecycle events delivered by the backend client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    /// Persisted-session snapshot read at startup; `None` when nothing is
    /// stored.
    InitialSession(Option<Session>),
    SignedIn(Session),
    TokenRefreshed(Session),
    SignedOut,
}

impl AuthEvent {
    /// The session carried by this event, if any.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::InitialSession(session) => session.as_ref(),
            Self::SignedIn(session) | Self::TokenRefreshed(session) => Some(session),
            Self::SignedOut => None,
        }
    }
}

/// What the caller must do after an event has been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Applied {
    /// Session replaced; schedule a profile fetch for this user.
    FetchProfile { user_id: String },
    /// Store updated; nothing further to do.
    Updated,
    /// Event was older than the store's last applied update.
    Superseded,
}

/// Apply one sequenced auth event to the store.
///
/// Every settled event — applied or superseded — ends the initial-load
/// phase: either way a session check has completed. Events without a user
/// clear the store immediately and request no fetch.
pub fn apply_auth_event(state: &mut SessionState, seq: u64, event: &AuthEvent) -> Applied {
    let applied = state.apply_session(seq, event.session().cloned());
    state.set_loading(false);
    if !applied {
        return Applied::Superseded;
    }
    match &state.user {
        Some(user) => Applied::FetchProfile { user_id: user.id.clone() },
        None => Applied::Updated,
    }
}

/// Handle exposing auth actions to the UI layer. Cheap to clone; provided
/// via context next to the session signal.
#[derive(Clone)]
pub struct AuthHandle {
    #[cfg(feature = "web")]
    events: futures::channel::mpsc::UnboundedSender<AuthEvent>,
}

impl AuthHandle {
    /// Delegate a credential check to the backend. On success the emitted
    /// auth event drives the session state machine; the caller only learns
    /// "no error".
    ///
    /// # Errors
    ///
    /// [`AuthError::Credentials`] with the backend's message, verbatim.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        #[cfg(feature = "web")]
        {
            let session = api::sign_in_with_password(email, password).await?;
            session_storage::store(&session);
            let _ = self.events.unbounded_send(AuthEvent::SignedIn(session));
            Ok(())
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (email, password);
            Err(AuthError::Unavailable)
        }
    }

    /// Create an account, then insert its profile row (the backend's own
    /// user record cannot hold school and role). A failed insert is the
    /// overall sign-up failure even though the auth account already exists;
    /// that gap is accepted and surfaced, never auto-repaired.
    ///
    /// No auth event is emitted — the account cannot sign in before email
    /// confirmation, so the store stays signed out.
    ///
    /// # Errors
    ///
    /// [`AuthError::Credentials`] from the backend sign-up, or
    /// [`AuthError::ProfileInsert`] when the profile row fails.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        account: &NewAccount,
    ) -> Result<(), AuthError> {
        #[cfg(feature = "web")]
        {
            let user = api::sign_up(email, password, account).await?;
            api::insert_profile(&NewProfile {
                id: user.id,
                school_id: account.school_id.clone(),
                role: account.role,
                first_name: account.first_name.clone(),
                last_name: account.last_name.clone(),
            })
            .await
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (email, password, account);
            Err(AuthError::Unavailable)
        }
    }

    /// Sign-up variant for the demo harness: same account-then-profile
    /// shape, pinned to the demo school tenant.
    ///
    /// # Errors
    ///
    /// Same as [`AuthHandle::sign_up`].
    #[cfg(feature = "web")]
    pub async fn create_demo_user(&self, demo: &DemoAccount) -> Result<(), AuthError> {
        let account = NewAccount {
            first_name: demo.first_name.to_owned(),
            last_name: demo.last_name.to_owned(),
            school_id: crate::util::demo::DEMO_SCHOOL.id.to_owned(),
            role: demo.role,
        };
        self.sign_up(demo.email, demo.password, &account).await
    }

    /// Ask the backend to invalidate the session (best effort), drop the
    /// persisted copy, and emit the no-user event. The store transitions
    /// immediately; any in-flight profile fetch dies on the id guard.
    pub async fn sign_out(&self) {
        #[cfg(feature = "web")]
        {
            if let Some(session) = session_storage::load() {
                api::sign_out(&session.access_token).await;
            }
            session_storage::clear();
            let _ = self.events.unbounded_send(AuthEvent::SignedOut);
        }
    }
}

/// Start the synchronizer: spawn the drain loop, register teardown, then
/// emit the persisted-session snapshot as the initial event.
#[cfg(feature = "web")]
pub fn start_session_sync(session: RwSignal<SessionState>) -> AuthHandle {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<AuthEvent>();

    leptos::task::spawn_local(drain_events(session, rx));

    // Unregister exactly once when the owning scope unmounts.
    let teardown = tx.clone();
    on_cleanup(move || teardown.close_channel());

    let _ = tx.unbounded_send(AuthEvent::InitialSession(session_storage::load()));

    AuthHandle { events: tx }
}

/// Native stub — there is no backend client outside the browser.
#[cfg(not(feature = "web"))]
pub fn start_session_sync(
    _session: leptos::prelude::RwSignal<SessionState>,
) -> AuthHandle {
    AuthHandle {}
}

/// Drain loop: assign sequence numbers in arrival order and apply events.
/// Ends when the channel closes or the signal is disposed.
#[cfg(feature = "web")]
async fn drain_events(
    session: RwSignal<SessionState>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<AuthEvent>,
) {
    use futures::StreamExt;
    use leptos::prelude::Update;

    let mut seq: u64 = 0;
    while let Some(event) = rx.next().await {
        seq += 1;
        let Some(applied) = session.try_update(|s| apply_auth_event(s, seq, &event)) else {
            break;
        };
        if let Applied::FetchProfile { user_id } = applied {
            leptos::task::spawn_local(fetch_profile_deferred(session, user_id));
        }
    }
}

/// Fetch the profile one scheduling turn after the triggering event.
///
/// The zero-delay sleep is the deferral point: it returns control to the
/// event loop before the fetch touches the backend client again. Fetch
/// failures are logged and leave the profile absent — the user stays
/// authenticated with an unknown profile.
#[cfg(feature = "web")]
async fn fetch_profile_deferred(session: RwSignal<SessionState>, user_id: String) {
    use leptos::prelude::Update;

    gloo_timers::future::sleep(std::time::Duration::ZERO).await;

    match api::fetch_profile(&user_id).await {
        Ok(profile) => {
            session.try_update(|s| s.set_profile(profile));
        }
        Err(e) => {
            leptos::logging::warn!("profile fetch for {user_id} failed: {e}");
        }
    }
}
