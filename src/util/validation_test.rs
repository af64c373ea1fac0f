use super::*;

// =============================================================
// Field validators
// =============================================================

#[test]
fn email_shape_accepts_ordinary_addresses() {
    assert!(is_valid_email("teacher@demo.school"));
    assert!(is_valid_email("a.b+c@sub.example.co"));
}

#[test]
fn email_shape_rejects_malformed_addresses() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("no-at-sign"));
    assert!(!is_valid_email("@demo.school"));
    assert!(!is_valid_email("user@nodot"));
    assert!(!is_valid_email("user@.school"));
    assert!(!is_valid_email("user@demo.school."));
    assert!(!is_valid_email("user name@demo.school"));
}

#[test]
fn password_needs_six_characters() {
    assert!(is_valid_password("demo123"));
    assert!(is_valid_password("abcdef"));
    assert!(!is_valid_password("abcde"));
    assert!(!is_valid_password(""));
}

#[test]
fn required_rejects_whitespace_only() {
    assert!(is_required("x"));
    assert!(!is_required(""));
    assert!(!is_required("   "));
}

// =============================================================
// SignInForm
// =============================================================

#[test]
fn sign_in_valid_form_has_no_errors() {
    let form = SignInForm {
        email: "admin@demo.school".to_owned(),
        password: "demo123".to_owned(),
    };
    assert!(form.validate().is_empty());
}

#[test]
fn sign_in_reports_each_bad_field() {
    let form = SignInForm::default();
    let errors = form.validate();
    assert_eq!(errors.get("email"), Some(&"Invalid email address"));
    assert_eq!(errors.get("password"), Some(&"Password is required"));
}

#[test]
fn sign_in_accepts_any_non_empty_password() {
    // Password length is only enforced at sign-up.
    let form = SignInForm {
        email: "admin@demo.school".to_owned(),
        password: "x".to_owned(),
    };
    assert!(form.validate().is_empty());
}

// =============================================================
// SignUpForm
// =============================================================

fn valid_sign_up() -> SignUpForm {
    SignUpForm {
        email: "new@demo.school".to_owned(),
        password: "demo123".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Obi".to_owned(),
        school_code: "DEMO001".to_owned(),
        role: Some(UserRole::Teacher),
    }
}

#[test]
fn sign_up_valid_form_has_no_errors() {
    assert!(valid_sign_up().validate().is_empty());
}

#[test]
fn sign_up_enforces_password_length() {
    let mut form = valid_sign_up();
    form.password = "abc".to_owned();
    assert_eq!(
        form.validate().get("password"),
        Some(&"Password must be at least 6 characters")
    );
}

#[test]
fn sign_up_requires_names_and_school_code() {
    let mut form = valid_sign_up();
    form.first_name = "  ".to_owned();
    form.last_name = String::new();
    form.school_code = String::new();
    let errors = form.validate();
    assert_eq!(errors.get("first_name"), Some(&"First name is required"));
    assert_eq!(errors.get("last_name"), Some(&"Last name is required"));
    assert_eq!(errors.get("school_code"), Some(&"School code is required"));
}

#[test]
fn sign_up_caps_field_lengths() {
    let mut form = valid_sign_up();
    form.first_name = "x".repeat(51);
    form.school_code = "y".repeat(21);
    let errors = form.validate();
    assert_eq!(errors.get("first_name"), Some(&"First name is too long"));
    assert_eq!(errors.get("school_code"), Some(&"School code is too long"));
}

#[test]
fn sign_up_requires_a_role() {
    let mut form = valid_sign_up();
    form.role = None;
    assert_eq!(form.validate().get("role"), Some(&"Select your role"));
}
