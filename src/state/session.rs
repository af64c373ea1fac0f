//! Authentication session state — the single source of truth for who is
//! signed in.
//!
//! DESIGN
//! ======
//! Exactly one `{session, user, profile}` triple is live per application
//! instance, held in one owned container behind an `RwSignal` context; no
//! module-level mutable state. Updates carry a sequence number assigned by
//! the session synchronizer, and [`SessionState::apply_session`] rejects
//! anything older than the last applied update — whichever of the racing
//! startup paths (persisted-session snapshot vs. first auth event) loses
//! the race cannot overwrite the winner.
//!
//! The profile is fetched after the session lands and may lag behind it.
//! [`SessionState::set_profile`] only attaches a profile that still belongs
//! to the live user, so a fetch issued for a superseded session is silently
//! discarded.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{AuthUser, Profile, Session};

/// Current authentication state plus the initial-load flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub user: Option<AuthUser>,
    pub profile: Option<Profile>,
    /// True until the first session check (persisted snapshot or first auth
    /// event) settles.
    pub loading: bool,
    last_seq: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: None,
            user: None,
            profile: None,
            loading: true,
            last_seq: 0,
        }
    }
}

impl SessionState {
    /// Replace the session wholesale. A `None` session is a sign-out: the
    /// user and profile go with it. Any replacement clears the profile —
    /// a stale profile must never be observable against a new session.
    ///
    /// Returns `false` (and leaves the state untouched) when `seq` is not
    /// newer than the last applied update.
    pub fn apply_session(&mut self, seq: u64, session: Option<Session>) -> bool {
        if seq <= self.last_seq {
            return false;
        }
        self.last_seq = seq;
        self.user = session.as_ref().map(|s| s.user.clone());
        self.profile = None;
        self.session = session;
        true
    }

    /// Attach a fetched profile, but only if it still belongs to the live
    /// user. Returns `false` when the fetch was for a superseded session.
    pub fn set_profile(&mut self, profile: Profile) -> bool {
        match &self.user {
            Some(user) if user.id == profile.id => {
                self.profile = Some(profile);
                true
            }
            _ => false,
        }
    }

    /// Toggle the initial-load flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Drop session, user and profile. Sequence tracking survives so a
    /// stale in-flight update cannot resurrect the cleared session.
    pub fn clear(&mut self) {
        self.session = None;
        self.user = None;
        self.profile = None;
    }

    /// Sequence number of the last applied session update.
    #[must_use]
    pub fn last_seq(&self) -> u64 {
        self.last_seq
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Where this state sits in the session lifecycle.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match (&self.user, &self.profile) {
            (Some(_), Some(_)) => SessionPhase::AuthenticatedWithProfile,
            (Some(_), None) => SessionPhase::AuthenticatedNoProfile,
            (None, _) if self.loading => SessionPhase::Unknown,
            (None, _) => SessionPhase::Unauthenticated,
        }
    }
}

/// Session lifecycle phases.
///
/// `AuthenticatedNoProfile` covers both "fetch still pending" and "fetch
/// failed" — the two are deliberately indistinguishable to consumers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Initial state; no session check has settled yet.
    Unknown,
    Unauthenticated,
    AuthenticatedNoProfile,
    AuthenticatedWithProfile,
}
