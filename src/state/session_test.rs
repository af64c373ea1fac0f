use super::*;

fn session_for(user_id: &str) -> Session {
    Session {
        access_token: format!("token-{user_id}"),
        token_type: "bearer".to_owned(),
        refresh_token: format!("refresh-{user_id}"),
        expires_at: Some(2_000_000_000),
        user: AuthUser {
            id: user_id.to_owned(),
            email: format!("{user_id}@example.com"),
        },
    }
}

fn profile_for(user_id: &str) -> Profile {
    Profile {
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
// Defaults
// =============================================================

#[test]
fn default_state_is_unknown_and_loading() {
    let state = SessionState::default();
    assert!(state.session.is_none());
    assert!(state.user.is_none());
    assert!(state.profile.is_none());
    assert!(state.loading);
    assert_eq!(state.phase(), SessionPhase::Unknown);
}

// =============================================================
// apply_session
// =============================================================

#[test]
fn apply_session_replaces_wholesale() {
    let mut state = SessionState::default();
    assert!(state.apply_session(1, Some(session_for("u-a"))));
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u-a"));
    assert_eq!(state.last_seq(), 1);
    assert!(state.is_authenticated());
}

#[test]
fn apply_session_clears_previous_profile() {
    let mut state = SessionState::default();
    state.apply_session(1, Some(session_for("u-a")));
    assert!(state.set_profile(profile_for("u-a")));

    state.apply_session(2, Some(session_for("u-b")));
    assert!(state.profile.is_none(), "old profile must not survive a session change");
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u-b"));
}

#[test]
fn apply_session_rejects_stale_sequence() {
    let mut state = SessionState::default();
    state.apply_session(2, Some(session_for("u-b")));
    assert!(!state.apply_session(1, Some(session_for("u-a"))));
    assert!(!state.apply_session(2, None));
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u-b"));
    assert_eq!(state.last_seq(), 2);
}

#[test]
fn apply_session_none_signs_out() {
    let mut state = SessionState::default();
    state.apply_session(1, Some(session_for("u-a")));
    assert!(state.apply_session(2, None));
    assert!(state.session.is_none());
    assert!(state.user.is_none());
    assert!(state.profile.is_none());
}

#[test]
fn apply_session_leaves_loading_untouched() {
    let mut state = SessionState::default();
    state.apply_session(1, Some(session_for("u-a")));
    assert!(state.loading, "loading is settled by the synchronizer, not the store");
}

// =============================================================
// set_profile
// =============================================================

#[test]
fn set_profile_attaches_for_live_user() {
    let mut state = SessionState::default();
    state.apply_session(1, Some(session_for("u-a")));
    assert!(state.set_profile(profile_for("u-a")));
    assert_eq!(state.phase(), SessionPhase::AuthenticatedWithProfile);
}

#[test]
fn set_profile_discards_mismatched_user() {
    let mut state = SessionState::default();
    state.apply_session(1, Some(session_for("u-b")));
    assert!(!state.set_profile(profile_for("u-a")));
    assert!(state.profile.is_none());
}

#[test]
fn set_profile_discards_when_signed_out() {
    let mut state = SessionState::default();
    assert!(!state.set_profile(profile_for("u-a")));
    assert!(state.profile.is_none());
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_yields_all_absent() {
    let mut state = SessionState::default();
    state.apply_session(1, Some(session_for("u-a")));
    state.set_profile(profile_for("u-a"));
    state.clear();
    assert!(state.session.is_none());
    assert!(state.user.is_none());
    assert!(state.profile.is_none());
}

#[test]
fn clear_preserves_sequence_tracking() {
    let mut state = SessionState::default();
    state.apply_session(3, Some(session_for("u-a")));
    state.clear();
    assert!(!state.apply_session(2, Some(session_for("u-b"))), "stale update must not resurrect a session");
    assert!(state.user.is_none());
}

// =============================================================
// phase
// =============================================================

#[test]
fn phase_follows_lifecycle() {
    let mut state = SessionState::default();
    assert_eq!(state.phase(), SessionPhase::Unknown);

    state.set_loading(false);
    assert_eq!(state.phase(), SessionPhase::Unauthenticated);

    state.apply_session(1, Some(session_for("u-a")));
    assert_eq!(state.phase(), SessionPhase::AuthenticatedNoProfile);

    state.set_profile(profile_for("u-a"));
    assert_eq!(state.phase(), SessionPhase::AuthenticatedWithProfile);

    state.apply_session(2, None);
    assert_eq!(state.phase(), SessionPhase::Unauthenticated);
}
