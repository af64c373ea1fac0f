use super::*;

// =============================================================
// Capability table
// =============================================================

#[test]
fn every_role_has_at_least_one_capability() {
    for role in UserRole::ALL {
        assert!(!capabilities(role).is_empty(), "{role:?} has no capabilities");
    }
}

#[test]
fn every_capability_has_exactly_one_action() {
    for capability in Capability::ALL {
        let count = ACTIONS.iter().filter(|a| a.capability == capability).count();
        assert_eq!(count, 1, "{capability:?} should back exactly one action");
    }
}

#[test]
fn every_capability_is_reachable_from_some_role() {
    for capability in Capability::ALL {
        let reachable = UserRole::ALL
            .into_iter()
            .any(|role| capabilities(role).contains(&capability));
        assert!(reachable, "{capability:?} is granted to no role");
    }
}

// =============================================================
// quick_actions
// =============================================================

#[test]
fn quick_actions_match_role_capabilities() {
    for role in UserRole::ALL {
        let actions = quick_actions(role);
        assert_eq!(actions.len(), capabilities(role).len());
        for action in actions {
            assert!(capabilities(role).contains(&action.capability));
        }
    }
}

#[test]
fn teacher_actions_are_classroom_tasks() {
    let labels: Vec<&str> = quick_actions(UserRole::Teacher)
        .iter()
        .map(|a| a.label)
        .collect();
    assert_eq!(labels, vec!["Mark Attendance", "Enter Scores", "View Class Schedule"]);
}

#[test]
fn admin_roles_share_the_management_actions() {
    assert_eq!(quick_actions(UserRole::SchoolAdmin), quick_actions(UserRole::Principal));
    assert_eq!(quick_actions(UserRole::SchoolAdmin), quick_actions(UserRole::SuperAdmin));
}

// =============================================================
// Labels and icons
// =============================================================

#[test]
fn labels_title_case_the_wire_names() {
    assert_eq!(UserRole::SuperAdmin.label(), "Super Admin");
    assert_eq!(UserRole::SchoolAdmin.label(), "School Admin");
    assert_eq!(UserRole::Cashier.label(), "Cashier");
}

#[test]
fn admin_roles_share_the_settings_icon() {
    assert_eq!(UserRole::SuperAdmin.icon(), UserRole::SchoolAdmin.icon());
    assert_ne!(UserRole::SuperAdmin.icon(), UserRole::Teacher.icon());
}
