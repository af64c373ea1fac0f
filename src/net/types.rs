//! Wire types for the hosted auth/database backend.
//!
//! Shapes mirror the backend's JSON: auth payloads from the token/signup
//! endpoints, rows from the `profiles`, `schools`, `classes`, `subjects`,
//! `academic_sessions` and `terms` tables. Timestamps and dates stay as
//! strings on the wire; `util::format` parses them for display.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// AUTH
// =============================================================================

/// Backend-issued proof of authentication. Replaced wholesale on every auth
/// event; never mutated field-by-field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub refresh_token: String,
    /// Unix seconds; absent when the backend omits expiry.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

/// Minimal identity record issued alongside a [`Session`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

/// Application-specific sign-up metadata the backend's own user record cannot
/// hold; also the payload of the explicit profile insert after sign-up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub school_id: String,
    pub role: UserRole,
}

// =============================================================================
// ROLES
// =============================================================================

/// Closed set of application roles. snake_case on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    SuperAdmin,
    SchoolAdmin,
    Principal,
    Accountant,
    Teacher,
    Parent,
    Student,
    Auditor,
    Cashier,
}

impl UserRole {
    /// All roles, in sign-up select order.
    pub const ALL: [Self; 9] = [
        Self::SuperAdmin,
        Self::SchoolAdmin,
        Self::Principal,
        Self::Accountant,
        Self::Teacher,
        Self::Parent,
        Self::Student,
        Self::Auditor,
        Self::Cashier,
    ];

    /// Wire name of the role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::SchoolAdmin => "school_admin",
            Self::Principal => "principal",
            Self::Accountant => "accountant",
            Self::Teacher => "teacher",
            Self::Parent => "parent",
            Self::Student => "student",
            Self::Auditor => "auditor",
            Self::Cashier => "cashier",
        }
    }

    /// Parse a wire name back into a role.
    #[must_use]
    pub fn from_str_opt(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == raw)
    }
}

// =============================================================================
// PROFILE
// =============================================================================

/// Application record keyed by user id: tenant, role, name parts, activity
/// flag. Fetched from the `profiles` table after authentication.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub school_id: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

fn default_active() -> bool {
    true
}

/// Insert shape for the `profiles` table, used once per sign-up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewProfile {
    pub id: String,
    pub school_id: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
}

// =============================================================================
// TENANT RECORDS
// =============================================================================

/// Subscription state of a school tenant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Inactive,
    Suspended,
    Trial,
}

/// How a school reports scores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradingSystem {
    Letter,
    #[default]
    Percentage,
}

/// A school tenant — the isolation boundary enforced by backend policy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    pub id: String,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub subscription_status: SubscriptionStatus,
    pub grading_system: GradingSystem,
}

/// A class within a school (e.g. "JSS 1A").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub id: String,
    pub name: String,
    pub level: String,
    #[serde(default)]
    pub capacity: Option<u32>,
    pub school_id: String,
}

/// A taught subject (e.g. "Mathematics", code "MATH").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    pub school_id: String,
}

/// An academic year (e.g. "2024/2025").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicSession {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current: bool,
    pub school_id: String,
}

/// Whether a term is accepting records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermStatus {
    Open,
    Closed,
}

/// One of the three terms of an academic session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub status: TermStatus,
    pub is_current: bool,
    pub school_id: String,
    pub academic_session_id: String,
}
