//! Field validation for the register and login forms.
//!
//! The rules mirror the inline form checks the views enforce: all failing
//! fields are reported at once, and a form submits only when every rule
//! passes.

use std::fmt;

use crate::types::{LoginForm, RegisterForm};

/// Ordered collection of per-field validation messages.
///
/// Field order follows the form layout so rendered errors line up with the
/// inputs they belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.entries.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Message for a given field, if that field failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Shape check equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`: exactly one `@`,
/// no whitespace, and a dot somewhere strictly inside the domain part.
fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    if email.chars().filter(|c| *c == '@').count() != 1 {
        return false;
    }

    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() {
        return false;
    }

    let chars: Vec<char> = domain.chars().collect();
    chars
        .iter()
        .enumerate()
        .any(|(i, c)| *c == '.' && i > 0 && i + 1 < chars.len())
}

fn is_ten_digit_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit())
}

/// Validate a registration form. Returns `Ok(())` only when all five rules
/// pass; otherwise every failing field is listed.
pub fn validate_register(form: &RegisterForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if form.username.trim().is_empty() {
        errors.push("username", "Username is required.");
    } else if form.username.len() <= 3 {
        errors.push("username", "Minimum 3 characters required.");
    }

    if form.email.trim().is_empty() {
        errors.push("email", "Email is required.");
    } else if !is_email_shaped(&form.email) {
        errors.push("email", "Invalid email format.");
    }

    if form.phone.trim().is_empty() {
        errors.push("phone", "Phone number is required.");
    } else if !is_ten_digit_phone(&form.phone) {
        errors.push("phone", "Phone must be 10 digits.");
    }

    if form.password.trim().is_empty() {
        errors.push("password", "Password is required.");
    } else if form.password.len() < 6 {
        errors.push("password", "Minimum 6 characters required.");
    }

    if form.confirm_password.trim().is_empty() {
        errors.push("confirmPassword", "Please confirm your password.");
    } else if form.password != form.confirm_password {
        errors.push("confirmPassword", "Passwords do not match.");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a login form: email shape plus minimum password length.
pub fn validate_login(form: &LoginForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if form.email.trim().is_empty() {
        errors.push("email", "Email is required.");
    } else if !is_email_shaped(&form.email) {
        errors.push("email", "Email is invalid.");
    }

    if form.password.trim().is_empty() {
        errors.push("password", "Password is required.");
    } else if form.password.len() < 6 {
        errors.push("password", "Minimum 6 characters required.");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
