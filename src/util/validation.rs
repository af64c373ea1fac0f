//! Form validation for the sign-in and sign-up forms.
//!
//! Validators return per-field error maps; the first entry is what the
//! auth page shows in its alert. Messages are written for display.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use crate::net::types::UserRole;

/// Field name → displayable message. Ordered so the first error is stable.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Loose email shape check: one `@`, non-empty local part, dotted domain.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 6
}

#[must_use]
pub fn is_required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Sign-in form fields.
#[derive(Clone, Debug, Default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    /// Empty map means the form is valid.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !is_valid_email(&self.email) {
            errors.insert("email", "Invalid email address");
        }
        if !is_required(&self.password) {
            errors.insert("password", "Password is required");
        }
        errors
    }
}

/// Sign-up form fields. `role` is `None` until the user picks one.
#[derive(Clone, Debug, Default)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub school_code: String,
    pub role: Option<UserRole>,
}

impl SignUpForm {
    /// Empty map means the form is valid.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !is_valid_email(&self.email) {
            errors.insert("email", "Invalid email address");
        }
        if !is_valid_password(&self.password) {
            errors.insert("password", "Password must be at least 6 characters");
        }
        if !is_required(&self.first_name) {
            errors.insert("first_name", "First name is required");
        } else if self.first_name.chars().count() > 50 {
            errors.insert("first_name", "First name is too long");
        }
        if !is_required(&self.last_name) {
            errors.insert("last_name", "Last name is required");
        } else if self.last_name.chars().count() > 50 {
            errors.insert("last_name", "Last name is too long");
        }
        if !is_required(&self.school_code) {
            errors.insert("school_code", "School code is required");
        } else if self.school_code.chars().count() > 20 {
            errors.insert("school_code", "School code is too long");
        }
        if self.role.is_none() {
            errors.insert("role", "Select your role");
        }
        errors
    }
}
