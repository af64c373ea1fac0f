//! Role → capability mapping.
//!
//! DESIGN
//! ======
//! All role branching in the UI goes through this one table. Pages ask for
//! a role's capabilities (or the quick actions derived from them) instead of
//! switching on the role enum themselves, so the authorization surface stays
//! in a single place.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

use crate::net::types::UserRole;

/// Things a role is allowed to do from its dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    ManageUsers,
    ManageSchool,
    ViewReports,
    MarkAttendance,
    EnterScores,
    ViewSchedule,
    ViewResults,
    ViewTimetable,
    ViewAttendanceHistory,
    ViewChildProgress,
    ViewAnnouncements,
    ContactTeachers,
    ManageFees,
    RecordPayments,
    ReviewAudits,
}

impl Capability {
    pub const ALL: [Self; 15] = [
        Self::ManageUsers,
        Self::ManageSchool,
        Self::ViewReports,
        Self::MarkAttendance,
        Self::EnterScores,
        Self::ViewSchedule,
        Self::ViewResults,
        Self::ViewTimetable,
        Self::ViewAttendanceHistory,
        Self::ViewChildProgress,
        Self::ViewAnnouncements,
        Self::ContactTeachers,
        Self::ManageFees,
        Self::RecordPayments,
        Self::ReviewAudits,
    ];
}

/// Capability set for a role.
#[must_use]
pub fn capabilities(role: UserRole) -> &'static [Capability] {
    use Capability::*;
    match role {
        UserRole::SuperAdmin | UserRole::SchoolAdmin | UserRole::Principal => {
            &[ManageUsers, ManageSchool, ViewReports]
        }
        UserRole::Teacher => &[MarkAttendance, EnterScores, ViewSchedule],
        UserRole::Student => &[ViewResults, ViewTimetable, ViewAttendanceHistory],
        UserRole::Parent => &[ViewChildProgress, ViewAnnouncements, ContactTeachers],
        UserRole::Accountant => &[ManageFees, ViewReports],
        UserRole::Cashier => &[RecordPayments],
        UserRole::Auditor => &[ReviewAudits, ViewReports],
    }
}

/// A dashboard quick-action button backed by one capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickAction {
    pub capability: Capability,
    pub label: &'static str,
    pub icon: &'static str,
}

/// One action per capability; display order of the dashboard list.
const ACTIONS: &[QuickAction] = &[
    QuickAction { capability: Capability::MarkAttendance, label: "Mark Attendance", icon: "📖" },
    QuickAction { capability: Capability::EnterScores, label: "Enter Scores", icon: "🎓" },
    QuickAction { capability: Capability::ViewSchedule, label: "View Class Schedule", icon: "📅" },
    QuickAction { capability: Capability::ManageUsers, label: "Manage Users", icon: "👥" },
    QuickAction { capability: Capability::ManageSchool, label: "School Settings", icon: "🏫" },
    QuickAction { capability: Capability::ViewReports, label: "View Reports", icon: "📈" },
    QuickAction { capability: Capability::ViewResults, label: "View Results", icon: "📖" },
    QuickAction { capability: Capability::ViewTimetable, label: "Class Timetable", icon: "📅" },
    QuickAction {
        capability: Capability::ViewAttendanceHistory,
        label: "Attendance History",
        icon: "🕐",
    },
    QuickAction { capability: Capability::ViewChildProgress, label: "Child's Progress", icon: "📈" },
    QuickAction {
        capability: Capability::ViewAnnouncements,
        label: "School Announcements",
        icon: "🔔",
    },
    QuickAction { capability: Capability::ContactTeachers, label: "Contact Teachers", icon: "👥" },
    QuickAction { capability: Capability::ManageFees, label: "Manage Fees", icon: "💰" },
    QuickAction { capability: Capability::RecordPayments, label: "Record Payments", icon: "💳" },
    QuickAction { capability: Capability::ReviewAudits, label: "Review Audit Trail", icon: "📋" },
];

/// Quick actions for a role, in table order.
#[must_use]
pub fn quick_actions(role: UserRole) -> Vec<QuickAction> {
    let allowed = capabilities(role);
    ACTIONS
        .iter()
        .filter(|action| allowed.contains(&action.capability))
        .copied()
        .collect()
}

impl UserRole {
    /// Human-readable role name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super Admin",
            Self::SchoolAdmin => "School Admin",
            Self::Principal => "Principal",
            Self::Accountant => "Accountant",
            Self::Teacher => "Teacher",
            Self::Parent => "Parent",
            Self::Student => "Student",
            Self::Auditor => "Auditor",
            Self::Cashier => "Cashier",
        }
    }

    /// Dashboard icon for the role.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::SuperAdmin | Self::SchoolAdmin => "⚙",
            Self::Principal => "🏫",
            Self::Teacher => "🎓",
            Self::Student => "📖",
            Self::Parent | Self::Accountant | Self::Auditor | Self::Cashier => "👥",
        }
    }
}
