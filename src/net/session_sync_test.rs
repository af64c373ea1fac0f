use super::*;

fn session_for(user_id: &str) -> Session {
    Session {
        access_token: format!("token-{user_id}"),
        token_type: "bearer".to_owned(),
        refresh_token: format!("refresh-{user_id}"),
        expires_at: Some(2_000_000_000),
        user: crate::net::types::AuthUser {
            id: user_id.to_owned(),
            email: format!("{user_id}@example.com"),
        },
    }
}

fn profile_for(user_id: &str) -> crate::net::types::Profile {
    crate::net::types::Profile {
        id: user_id.to_owned(),
        school_id: "school-1".to_owned(),
        role: crate::net::types::UserRole::Teacher,
        first_name: "Demo".to_owned(),
        last_name: "User".to_owned(),
        phone: None,
        address: None,
        date_of_birth: None,
        avatar_url: None,
        is_active: true,
        created_at: "2024-09-01T08:00:00+00:00".to_owned(),
        updated_at: "2024-09-01T08:00:00+00:00".to_owned(),
    }
}

// =============================================================
// AuthEvent
// =============================================================

#[test]
fn event_session_accessor_matches_variant() {
    assert!(AuthEvent::InitialSession(None).session().is_none());
    assert!(AuthEvent::SignedOut.session().is_none());

    let session = session_for("u-a");
    assert_eq!(AuthEvent::SignedIn(session.clone()).session(), Some(&session));
    assert_eq!(AuthEvent::TokenRefreshed(session.clone()).session(), Some(&session));
    assert_eq!(AuthEvent::InitialSession(Some(session.clone())).session(), Some(&session));
}

// =============================================================
// apply_auth_event
// =============================================================

#[test]
fn first_settled_event_ends_the_loading_phase() {
    let mut state = SessionState::default();
    assert!(state.loading);

    let applied = apply_auth_event(&mut state, 1, &AuthEvent::InitialSession(None));
    assert_eq!(applied, Applied::Updated);
    assert!(!state.loading);
    assert_eq!(state.phase(), crate::state::session::SessionPhase::Unauthenticated);
}

#[test]
fn user_bearing_event_requests_a_profile_fetch() {
    let mut state = SessionState::default();
    let applied = apply_auth_event(&mut state, 1, &AuthEvent::SignedIn(session_for("u-a")));
    assert_eq!(applied, Applied::FetchProfile { user_id: "u-a".to_owned() });
    assert!(!state.loading);
}

#[test]
fn sign_out_clears_without_requesting_a_fetch() {
    let mut state = SessionState::default();
    apply_auth_event(&mut state, 1, &AuthEvent::SignedIn(session_for("u-a")));
    state.set_profile(profile_for("u-a"));

    let applied = apply_auth_event(&mut state, 2, &AuthEvent::SignedOut);
    assert_eq!(applied, Applied::Updated);
    assert!(state.session.is_none());
    assert!(state.user.is_none());
    assert!(state.profile.is_none());
}

#[test]
fn stale_event_is_superseded_but_still_settles_loading() {
    let mut state = SessionState::default();
    apply_auth_event(&mut state, 2, &AuthEvent::SignedIn(session_for("u-b")));

    // The losing startup path lands afterwards with an older number.
    let applied = apply_auth_event(&mut state, 1, &AuthEvent::InitialSession(None));
    assert_eq!(applied, Applied::Superseded);
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u-b"));
    assert!(!state.loading);
}

#[test]
fn latest_event_always_wins_over_any_sequence() {
    let mut state = SessionState::default();
    let events = [
        AuthEvent::InitialSession(None),
        AuthEvent::SignedIn(session_for("u-a")),
        AuthEvent::TokenRefreshed(session_for("u-a")),
        AuthEvent::SignedIn(session_for("u-b")),
        AuthEvent::SignedOut,
        AuthEvent::SignedIn(session_for("u-c")),
    ];
    for (i, event) in events.iter().enumerate() {
        apply_auth_event(&mut state, (i + 1) as u64, event);
    }
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u-c"));
    assert_eq!(state.last_seq(), events.len() as u64);
}

#[test]
fn token_refresh_replaces_session_and_refetches_profile() {
    let mut state = SessionState::default();
    apply_auth_event(&mut state, 1, &AuthEvent::SignedIn(session_for("u-a")));
    state.set_profile(profile_for("u-a"));

    let applied = apply_auth_event(&mut state, 2, &AuthEvent::TokenRefreshed(session_for("u-a")));
    assert_eq!(applied, Applied::FetchProfile { user_id: "u-a".to_owned() });
    assert!(state.profile.is_none(), "a session replacement always invalidates the profile");
}

// =============================================================
// Interleaved sessions with a slow profile fetch
// =============================================================

#[test]
fn stale_profile_fetch_never_lands_on_a_newer_session() {
    let mut state = SessionState::default();

    apply_auth_event(&mut state, 1, &AuthEvent::SignedIn(session_for("u-a")));
    apply_auth_event(&mut state, 2, &AuthEvent::SignedOut);
    apply_auth_event(&mut state, 3, &AuthEvent::SignedIn(session_for("u-b")));

    // User A's deferred fetch completes only now.
    assert!(!state.set_profile(profile_for("u-a")));
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u-b"));
    assert!(state.profile.is_none());

    // User B's own fetch still attaches.
    assert!(state.set_profile(profile_for("u-b")));
}

#[test]
fn sign_out_does_not_wait_for_an_in_flight_fetch() {
    let mut state = SessionState::default();
    apply_auth_event(&mut state, 1, &AuthEvent::SignedIn(session_for("u-a")));

    // Sign-out applies immediately; the pending fetch for u-a is not
    // cancelled, just neutralized when it lands.
    apply_auth_event(&mut state, 2, &AuthEvent::SignedOut);
    assert_eq!(state.phase(), crate::state::session::SessionPhase::Unauthenticated);

    assert!(!state.set_profile(profile_for("u-a")));
    assert!(state.profile.is_none());
}
