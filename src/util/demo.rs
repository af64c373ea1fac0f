//! Demo fixtures: the demo school tenant, its five demo accounts, and the
//! records the demo pages render. All ids are stable so repeated seeding
//! is idempotent server-side.

#[cfg(test)]
#[path = "demo_test.rs"]
mod demo_test;

use crate::net::types::{
    AcademicSession, Class, Subject, Term, TermStatus, UserRole,
};

/// The demo tenant every demo account belongs to.
pub struct DemoSchool {
    pub id: &'static str,
    pub name: &'static str,
    pub code: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}

pub const DEMO_SCHOOL: DemoSchool = DemoSchool {
    id: "demo-school-001",
    name: "Demo Secondary School",
    code: "DEMO001",
    address: "123 Education Street, Lagos, Nigeria",
    phone: "+234-801-234-5678",
    email: "info@demoschool.edu.ng",
};

/// A seedable demo login.
#[derive(Clone, Copy, Debug)]
pub struct DemoAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub role: UserRole,
    pub first_name: &'static str,
    pub last_name: &'static str,
}

pub const DEMO_ACCOUNTS: [DemoAccount; 5] = [
    DemoAccount {
        email: "admin@demo.school",
        password: "demo123",
        role: UserRole::SchoolAdmin,
        first_name: "John",
        last_name: "Administrator",
    },
    DemoAccount {
        email: "principal@demo.school",
        password: "demo123",
        role: UserRole::Principal,
        first_name: "Mary",
        last_name: "Principal",
    },
    DemoAccount {
        email: "teacher@demo.school",
        password: "demo123",
        role: UserRole::Teacher,
        first_name: "David",
        last_name: "Teacher",
    },
    DemoAccount {
        email: "student@demo.school",
        password: "demo123",
        role: UserRole::Student,
        first_name: "Sarah",
        last_name: "Student",
    },
    DemoAccount {
        email: "parent@demo.school",
        password: "demo123",
        role: UserRole::Parent,
        first_name: "James",
        last_name: "Parent",
    },
];

#[must_use]
pub fn demo_classes() -> Vec<Class> {
    let school_id = DEMO_SCHOOL.id.to_owned();
    vec![
        Class {
            id: "class-001".to_owned(),
            name: "JSS 1A".to_owned(),
            level: "Junior Secondary".to_owned(),
            capacity: Some(40),
            school_id: school_id.clone(),
        },
        Class {
            id: "class-002".to_owned(),
            name: "JSS 2B".to_owned(),
            level: "Junior Secondary".to_owned(),
            capacity: Some(35),
            school_id: school_id.clone(),
        },
        Class {
            id: "class-003".to_owned(),
            name: "SS 1A".to_owned(),
            level: "Senior Secondary".to_owned(),
            capacity: Some(30),
            school_id,
        },
    ]
}

#[must_use]
pub fn demo_subjects() -> Vec<Subject> {
    let school_id = DEMO_SCHOOL.id.to_owned();
    vec![
        Subject {
            id: "subject-001".to_owned(),
            name: "Mathematics".to_owned(),
            code: "MATH".to_owned(),
            description: Some("General Mathematics".to_owned()),
            school_id: school_id.clone(),
        },
        Subject {
            id: "subject-002".to_owned(),
            name: "English Language".to_owned(),
            code: "ENG".to_owned(),
            description: Some("English Language and Literature".to_owned()),
            school_id: school_id.clone(),
        },
        Subject {
            id: "subject-003".to_owned(),
            name: "Physics".to_owned(),
            code: "PHY".to_owned(),
            description: Some("General Physics".to_owned()),
            school_id,
        },
    ]
}

#[must_use]
pub fn demo_academic_session() -> AcademicSession {
    AcademicSession {
        id: "session-001".to_owned(),
        name: "2024/2025".to_owned(),
        start_date: "2024-09-01".to_owned(),
        end_date: "2025-07-31".to_owned(),
        is_current: true,
        school_id: DEMO_SCHOOL.id.to_owned(),
    }
}

/// The three-term dataset of the demo session; only the first term is
/// current and open.
#[must_use]
pub fn demo_terms() -> Vec<Term> {
    let school_id = DEMO_SCHOOL.id.to_owned();
    let session_id = "session-001".to_owned();
    vec![
        Term {
            id: "term-001".to_owned(),
            name: "First Term".to_owned(),
            start_date: "2024-09-01".to_owned(),
            end_date: "2024-12-15".to_owned(),
            status: TermStatus::Open,
            is_current: true,
            school_id: school_id.clone(),
            academic_session_id: session_id.clone(),
        },
        Term {
            id: "term-002".to_owned(),
            name: "Second Term".to_owned(),
            start_date: "2025-01-15".to_owned(),
            end_date: "2025-04-15".to_owned(),
            status: TermStatus::Closed,
            is_current: false,
            school_id: school_id.clone(),
            academic_session_id: session_id.clone(),
        },
        Term {
            id: "term-003".to_owned(),
            name: "Third Term".to_owned(),
            start_date: "2025-04-30".to_owned(),
            end_date: "2025-07-31".to_owned(),
            status: TermStatus::Closed,
            is_current: false,
            school_id,
            academic_session_id: session_id,
        },
    ]
}
