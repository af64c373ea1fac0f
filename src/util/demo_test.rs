use super::*;

#[test]
fn demo_accounts_have_unique_emails_and_distinct_roles() {
    for (i, a) in DEMO_ACCOUNTS.iter().enumerate() {
        for b in &DEMO_ACCOUNTS[i + 1..] {
            assert_ne!(a.email, b.email);
            assert_ne!(a.role, b.role);
        }
    }
}

#[test]
fn demo_accounts_cover_the_quick_fill_roles() {
    let roles: Vec<UserRole> = DEMO_ACCOUNTS.iter().map(|a| a.role).collect();
    assert!(roles.contains(&UserRole::SchoolAdmin));
    assert!(roles.contains(&UserRole::Teacher));
    assert!(roles.contains(&UserRole::Student));
    assert!(roles.contains(&UserRole::Parent));
}

#[test]
fn fixtures_are_pinned_to_the_demo_tenant() {
    assert!(demo_classes().iter().all(|c| c.school_id == DEMO_SCHOOL.id));
    assert!(demo_subjects().iter().all(|s| s.school_id == DEMO_SCHOOL.id));
    assert!(demo_terms().iter().all(|t| t.school_id == DEMO_SCHOOL.id));
    assert_eq!(demo_academic_session().school_id, DEMO_SCHOOL.id);
}

#[test]
fn subject_codes_are_unique() {
    let subjects = demo_subjects();
    for (i, a) in subjects.iter().enumerate() {
        for b in &subjects[i + 1..] {
            assert_ne!(a.code, b.code);
        }
    }
}

#[test]
fn exactly_one_term_is_current_and_it_is_open() {
    let terms = demo_terms();
    let current: Vec<&Term> = terms.iter().filter(|t| t.is_current).collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].status, TermStatus::Open);
    assert!(terms.iter().all(|t| t.academic_session_id == demo_academic_session().id));
}
